use nutype::nutype;

pub const MAX_LABEL_LENGTH: usize = 64;

/// Catalog category name, as listed by the category filter panel.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_LABEL_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Category(String);

/// Brand name, as listed by the brand filter panel.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_LABEL_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Brand(String);

#[cfg(test)]
mod tests;
