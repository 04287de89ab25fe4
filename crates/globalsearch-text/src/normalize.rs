use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical comparable form of `text`: lower-cased, NFD-decomposed, with
/// combining marks (accents, diaeresis, cedilla...) removed.
///
/// Base letters, digits, punctuation and whitespace pass through unchanged,
/// so "García-Nuñez 12" becomes "garcia-nunez 12". Total and idempotent.
pub fn normalize(text: &str) -> String {
    if text.is_ascii() {
        return text.to_ascii_lowercase();
    }
    text.to_lowercase().nfd().filter(|c| !is_combining_mark(*c)).collect()
}
