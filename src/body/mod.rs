pub use self::validation::{validate_body, validate_body_partial};
mod validation;
