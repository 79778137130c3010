/// Split text into whitespace-delimited tokens.
///
/// Any run of whitespace separates tokens; punctuation and case are left
/// alone, so "good." and "good" are different tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    tokens(text).collect()
}

/// Lazy form of [`tokenize`]
pub fn tokens(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split_whitespace()
}
