//!
//! The text field the phone mask works on.
//!
//! [PhoneInputState](crate::phone_input::PhoneInputState) only needs to
//! read and write text and cursor. Any text widget state can be used
//! by implementing [TextField] for it. [FieldBuffer] is a plain
//! implementation that just stores both.
//!

use std::fmt::Debug;

/// Access to the text and cursor of some text field.
///
/// Cursor positions are char offsets.
pub trait TextField: Debug {
    /// Current text.
    fn text(&self) -> &str;

    /// Current cursor.
    fn cursor(&self) -> usize;

    /// Replace the text.
    ///
    /// The field is free to move the cursor when the text changes.
    /// The cursor is always set afterwards.
    fn set_text(&mut self, text: String);

    /// Set the cursor. Positions beyond the end of the text are limited
    /// to the end.
    fn set_cursor(&mut self, cursor: usize);
}

/// Text and cursor.
///
/// Behaves like most text inputs: replacing the text moves the
/// cursor to the end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldBuffer {
    text: String,
    cursor: usize,
}

impl FieldBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl TextField for FieldBuffer {
    #[inline]
    fn text(&self) -> &str {
        self.text.as_str()
    }

    #[inline]
    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
        self.cursor = self.len();
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.len());
    }
}

impl<T: TextField + ?Sized> TextField for Box<T> {
    fn text(&self) -> &str {
        self.as_ref().text()
    }

    fn cursor(&self) -> usize {
        self.as_ref().cursor()
    }

    fn set_text(&mut self, text: String) {
        self.as_mut().set_text(text)
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.as_mut().set_cursor(cursor)
    }
}
