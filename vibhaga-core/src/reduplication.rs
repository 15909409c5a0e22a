//! Reduplication detector

/// Words of this many characters or fewer are never treated as reduplicated
const MIN_REDUPLICATED_CHARS: usize = 4;

/// Whether `word` is an exact doubling of a stem
///
/// Requires an even character count strictly above four, with the first half
/// identical to the second.
pub fn is_reduplication(word: &str) -> bool {
    let len = word.chars().count();
    if len % 2 != 0 || len <= MIN_REDUPLICATED_CHARS {
        return false;
    }

    match word.char_indices().nth(len / 2) {
        Some((mid, _)) => word[..mid] == word[mid..],
        None => false,
    }
}
