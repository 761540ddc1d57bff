pub mod sanitize;
pub mod submission;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use submission::*;
pub use validation::*;
