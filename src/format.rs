//!
//! Display format of a phone number.
//!
//! The mask is `+7 (DDD) DDD-DD-DD`. Only the part of the mask that
//! is covered by the existing digits is shown, so the display grows
//! with the input:
//!
//! ```text
//! 7           +7
//! 79          +7 (9
//! 7999        +7 (999)
//! 79991       +7 (999) 1
//! 79991234    +7 (999) 123-4
//! 79991234567 +7 (999) 123-45-67
//! ```
//!

use crate::digits::DigitSequence;

/// The complete mask. `D` marks a digit.
pub const MASK_TEMPLATE: &str = "+7 (DDD) DDD-DD-DD";

/// Shown as soon as there is any digit. Covers the country digit.
const COUNTRY_PREFIX: &str = "+7";

/// Template punctuation. These are skipped when deleting.
const LITERALS: [char; 4] = [' ', '(', ')', '-'];

/// One group of digits of the template.
#[derive(Debug, Clone, Copy)]
struct Segment {
    /// Shown once the first digit of the group exists.
    open: &'static str,
    /// Digit range in the DigitSequence.
    start: usize,
    end: usize,
    /// Shown once the group is complete.
    close: &'static str,
}

const TEMPLATE: [Segment; 4] = [
    Segment {
        open: " (",
        start: 1,
        end: 4,
        close: ")",
    },
    Segment {
        open: " ",
        start: 4,
        end: 7,
        close: "",
    },
    Segment {
        open: "-",
        start: 7,
        end: 9,
        close: "",
    },
    Segment {
        open: "-",
        start: 9,
        end: 11,
        close: "",
    },
];

/// Is this one of the punctuation chars of the mask.
///
/// The `+` of the country prefix is not included. It is never
/// adjacent to the cursor in a way that matters for deleting.
#[inline]
pub fn is_literal(c: char) -> bool {
    LITERALS.contains(&c)
}

/// Render the digits with the mask.
///
/// An open group stays open, there is no closing `)` before the
/// 4th digit.
pub fn format(digits: &DigitSequence) -> String {
    let mut buf = String::with_capacity(MASK_TEMPLATE.len());
    if digits.is_empty() {
        return buf;
    }

    buf.push_str(COUNTRY_PREFIX);
    for seg in &TEMPLATE {
        if digits.len() <= seg.start {
            break;
        }
        buf.push_str(seg.open);
        buf.push_str(digits.slice(seg.start, seg.end));
        if digits.len() >= seg.end {
            buf.push_str(seg.close);
        }
    }
    buf
}
