use models::FieldErrors;

pub trait InputValidator {
    fn validate(&self) -> Result<(), FieldErrors>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
