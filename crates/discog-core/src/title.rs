//! Title normalization for catalog lookups.

/// Normalizes caller input into the form titles are stored under.
///
/// Surrounding whitespace is trimmed and the first character is uppercased.
/// The rest of the string is left as is, so `"  lemonade  "` becomes
/// `"Lemonade"` and `"i am... sasha fierce"` becomes `"I am... sasha fierce"`.
pub fn normalize_title(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
