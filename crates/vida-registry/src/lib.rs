mod registry;
pub mod validation;

pub use registry::PatientRegistry;
pub use validation::{parse_age, validate_phone, ValidationError, MIN_PHONE_DIGITS};
