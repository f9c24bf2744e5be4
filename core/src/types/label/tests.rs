use super::*;

#[test]
fn category_trims_surrounding_whitespace() {
    let category = Category::try_from("  Electronics ").unwrap();
    assert_eq!(category.as_str(), "Electronics");
}

#[test]
fn category_rejects_blank_string() {
    Category::try_from("   ").unwrap_err();
}

#[test]
fn brand_rejects_too_long_string() {
    let long = "b".repeat(MAX_LABEL_LENGTH + 1);
    Brand::try_from(long.as_str()).unwrap_err();
}

#[test]
fn brand_accepts_max_length() {
    let exact = "b".repeat(MAX_LABEL_LENGTH);
    let brand = Brand::try_from(exact.as_str()).unwrap();
    assert_eq!(brand.len(), MAX_LABEL_LENGTH);
}
