/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Code-point arithmetic over UTF-8 records.
//!
//! Field widths are declared in characters. These helpers translate character
//! positions to byte offsets so slicing never splits a multi-byte character.

/// Returns the number of Unicode code points in `s`.
///
/// # Arguments
/// * `s` - The text to measure
#[inline]
#[must_use]
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Returns the byte offset of the `n`th character, or `s.len()` if `s` is shorter.
#[inline]
#[must_use]
pub fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Splits `s` after at most `n` characters.
///
/// # Arguments
/// * `s` - The text to split
/// * `n` - Number of characters in the head
///
/// # Returns
/// `(head, tail)`; `head` holds fewer than `n` characters only when `s` does.
#[inline]
#[must_use]
pub fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    s.split_at(byte_offset(s, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("USD"), 3);
        assert_eq!(char_count("®®"), 2);
    }

    #[test]
    fn test_split_at_char_multibyte() {
        assert_eq!(split_at_char("®a®b", 2), ("®a", "®b"));
        assert_eq!(split_at_char("ab", 5), ("ab", ""));
        assert_eq!(split_at_char("ab", 0), ("", "ab"));
    }

    #[test]
    fn test_byte_offset() {
        assert_eq!(byte_offset("®x", 1), 2);
        assert_eq!(byte_offset("®x", 9), 3);
    }
}
