//! Predicate-based string splitting.
//!
//! Each rune of the input is passed to a filter deciding whether it is a
//! separator. Leading separators are stripped before splitting and consume
//! no split quota; empty fields never appear in the result.
//!
//! The `number` argument of the `*_n` variants limits how many splits are
//! performed: negative means unlimited, `0` returns the input whole, and a
//! positive count leaves the unsplit remainder (separators included) as
//! the final field.

/// Split by Unicode whitespace, like Python's `str.split()`.
#[must_use]
pub fn split_space(s: &str) -> Vec<String> {
    split_space_n(s, -1)
}

/// Split by Unicode whitespace at most `number` times.
#[must_use]
pub fn split_space_n(s: &str, number: isize) -> Vec<String> {
    split_with_n(s, char::is_whitespace, number)
}

/// Split by any character contained in `seps`.
///
/// The separator set is an arbitrary combination of characters:
/// `split_chars("abcdefg-12345", "3-edc")` is `["ab", "fg", "12", "45"]`.
#[must_use]
pub fn split_chars(s: &str, seps: &str) -> Vec<String> {
    split_chars_n(s, seps, -1)
}

/// Split by any character contained in `seps`, at most `number` times.
#[must_use]
pub fn split_chars_n(s: &str, seps: &str, number: isize) -> Vec<String> {
    split_with_n(s, |c| seps.contains(c), number)
}

/// Split by a per-character predicate.
#[must_use]
pub fn split_with<F>(s: &str, filter: F) -> Vec<String>
where
    F: Fn(char) -> bool,
{
    split_with_n(s, filter, -1)
}

/// Split by a per-character predicate, at most `number` times.
#[must_use]
pub fn split_with_n<F>(s: &str, filter: F, number: isize) -> Vec<String>
where
    F: Fn(char) -> bool,
{
    if number == 0 {
        return vec![s.to_string()];
    }

    let s = s.trim_start_matches(|c: char| filter(c));
    if s.is_empty() {
        return Vec::new();
    }

    let mut remaining = number;
    let mut results = Vec::new();
    let mut buf = String::new();
    let mut pending = false;

    for (i, c) in s.char_indices() {
        if filter(c) {
            pending = true;
            continue;
        }

        if pending {
            results.push(std::mem::take(&mut buf));
            pending = false;
            remaining -= 1;
            if remaining == 0 {
                buf.push_str(&s[i..]);
                break;
            }
        }

        buf.push(c);
    }

    if !buf.is_empty() {
        results.push(buf);
    }

    results
}
