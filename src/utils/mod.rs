pub mod time_parser;
pub mod url_validator;

pub use time_parser::parse_expiry;
pub use url_validator::{UrlValidationError, validate_link};
