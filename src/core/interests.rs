/// First space-delimited token of a category
///
/// Splits on a literal space only. An empty category, or one starting with a
/// space, yields the empty string.
#[inline]
pub fn first_token(category: &str) -> &str {
    category.split(' ').next().unwrap_or("")
}

/// Whether any interest lines up with the job category
///
/// Both inputs must already be lower-cased. An interest matches when the
/// category contains it, or when it contains the category's first token.
/// The two directions are deliberately asymmetric.
pub fn interest_matches(category: &str, interests: &[String]) -> bool {
    let head = first_token(category);

    interests
        .iter()
        .any(|interest| category.contains(interest.as_str()) || interest.contains(head))
}
