use crate::error::ValidationError;
use nutype::nutype;

pub const MAX_SLUG_LENGTH: usize = 128;

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_SLUG_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Slug(String);

impl From<SlugError> for ValidationError {
    fn from(err: SlugError) -> Self {
        ValidationError::InvalidSlug(err.to_string())
    }
}
