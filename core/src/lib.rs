pub mod error;
pub mod types;

pub use error::{ContentError, Error, Result, ValidationError};
