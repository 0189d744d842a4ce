//!
//! Carry the cursor across a reformat.
//!
//! Reformatting adds and removes punctuation, so a plain char offset
//! is useless afterwards. Instead the cursor is anchored to the digit
//! left of it: count the digits before the cursor in the old text and
//! find the position after the same count of digits in the new text.
//!
//! All positions are char offsets, not byte offsets.
//!

use crate::digits::is_digit;

/// Number of digits before the cursor.
///
/// A cursor beyond the end of the text counts all digits.
pub fn digits_before(text: &str, cursor: usize) -> usize {
    text.chars().take(cursor).filter(|c| is_digit(*c)).count()
}

/// Position directly after the n-th digit.
///
/// Returns the end of the text for n == 0 or if there are not
/// enough digits.
pub fn cursor_after_digit(text: &str, n: usize) -> usize {
    if n == 0 {
        return text.chars().count();
    }

    let mut count = 0;
    for (pos, c) in text.chars().enumerate() {
        if is_digit(c) {
            count += 1;
            if count == n {
                return pos + 1;
            }
        }
    }
    text.chars().count()
}

/// Position directly before the digit with index n, counted from 0.
///
/// Returns the end of the text if there are not enough digits.
pub fn cursor_before_digit(text: &str, n: usize) -> usize {
    text.chars()
        .enumerate()
        .filter(|(_, c)| is_digit(*c))
        .nth(n)
        .map(|(pos, _)| pos)
        .unwrap_or_else(|| text.chars().count())
}

/// Map a cursor position in the old text to the position after
/// the same digit in the new text.
///
/// ```
/// use rat_phone::map_cursor;
///
/// // typed the 5th digit, the group got closed.
/// assert_eq!(map_cursor("+7 (9991", 8, "+7 (999) 1"), 10);
/// // cursor after the second 9.
/// assert_eq!(map_cursor("+7 (999) 1", 6, "+7 (999) 1"), 6);
/// ```
pub fn map_cursor(old_text: &str, old_cursor: usize, new_text: &str) -> usize {
    cursor_after_digit(new_text, digits_before(old_text, old_cursor))
}
