use serde::{Deserialize, Serialize};

/// User-entered data for the signup form. Field names serialize to the wire
/// form the API expects (`firstName`, `confirmPassword`, ...). The confirm
/// password is part of the request body and is sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub education_level: String,
}

/// User-entered data for the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// A single field-change event value. Text inputs and selects carry `Text`,
/// the remember-me checkbox carries `Flag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// The fixed set of education levels offered by the signup select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    HighSchool,
    Undergraduate,
    Graduate,
    Postgraduate,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::HighSchool,
        EducationLevel::Undergraduate,
        EducationLevel::Graduate,
        EducationLevel::Postgraduate,
    ];

    /// The wire value used in form submissions.
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "high-school",
            EducationLevel::Undergraduate => "undergraduate",
            EducationLevel::Graduate => "graduate",
            EducationLevel::Postgraduate => "postgraduate",
        }
    }

    /// The human label shown in the select options.
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Undergraduate => "Undergraduate",
            EducationLevel::Graduate => "Graduate",
            EducationLevel::Postgraduate => "Postgraduate",
        }
    }

    pub fn parse(value: &str) -> Option<EducationLevel> {
        Self::ALL.iter().copied().find(|level| level.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_data_serializes_camel_case() {
        let data = SignupData {
            first_name: "Al".to_string(),
            last_name: "Ng".to_string(),
            email: "a@b.com".to_string(),
            password: "Abcdef1!".to_string(),
            confirm_password: "Abcdef1!".to_string(),
            age: "20".to_string(),
            education_level: "graduate".to_string(),
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["firstName"], "Al");
        assert_eq!(json["confirmPassword"], "Abcdef1!");
        assert_eq!(json["educationLevel"], "graduate");
    }

    #[test]
    fn test_login_data_defaults() {
        let data = LoginData::default();
        assert!(data.email.is_empty());
        assert!(data.password.is_empty());
        assert!(!data.remember_me);

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["rememberMe"], false);
    }

    #[test]
    fn test_education_level_round_trip() {
        for level in EducationLevel::ALL {
            assert_eq!(EducationLevel::parse(level.as_str()), Some(level));
        }
        assert_eq!(EducationLevel::parse("kindergarten"), None);
        assert_eq!(EducationLevel::HighSchool.label(), "High School");
    }
}
