use nutype::nutype;

/// Minimum star rating, 1 through 5.
#[nutype(
    validate(greater_or_equal = 1, less_or_equal = 5),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Rating(u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_one_through_five() {
        for stars in 1..=5u8 {
            assert_eq!(Rating::try_new(stars).unwrap().into_inner(), stars);
        }
    }

    #[test]
    fn rating_rejects_out_of_range() {
        Rating::try_new(0).unwrap_err();
        Rating::try_new(6).unwrap_err();
    }
}
