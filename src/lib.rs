#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod clipboard;
pub mod cursor;
pub mod digits;
pub mod edit_op;
pub mod field;
pub mod format;
pub mod phone_input;

pub use cursor::map_cursor;
pub use digits::{DigitSequence, canonical, clean_digits, is_valid, normalize};
pub use format::format;

pub mod event {
    //!
    //! Event-handling for the phone field.
    //!

    pub use rat_event::{ConsumedEvent, HandleEvent, Outcome, Regular, ct_event};

    /// What an event did to the phone field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum PhoneOutcome {
        /// Not a phone event. Pass it on.
        Continue,
        /// Recognized, but neither digits nor caret changed.
        Unchanged,
        /// Only the caret moved. Backspace over punctuation does this.
        CaretMoved,
        /// The formatted text changed.
        ValueChanged,
    }

    impl PhoneOutcome {
        /// Caret or text changed, the field needs a repaint.
        pub fn is_changed(self) -> bool {
            matches!(self, PhoneOutcome::CaretMoved | PhoneOutcome::ValueChanged)
        }
    }

    impl ConsumedEvent for PhoneOutcome {
        fn is_consumed(&self) -> bool {
            *self != PhoneOutcome::Continue
        }
    }

    impl From<PhoneOutcome> for Outcome {
        fn from(value: PhoneOutcome) -> Self {
            match value {
                PhoneOutcome::Continue => Outcome::Continue,
                PhoneOutcome::Unchanged => Outcome::Unchanged,
                PhoneOutcome::CaretMoved | PhoneOutcome::ValueChanged => Outcome::Changed,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The number has fewer digits than a canonical phone number.
    ///
    /// Contains the number of digits found.
    Incomplete(usize),
    /// The clipboard couldn't be read or written.
    Clipboard,
}

impl Display for PhoneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for PhoneError {}

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
