//!
//! Edit operations for the phone mask.
//!
//! Each operation takes a snapshot of the field (text + cursor) and
//! returns the text and cursor that should be written back. Nothing
//! here touches a field, that's done by [PhoneInputState](crate::phone_input::PhoneInputState).
//!
//! The operations never fail. A cursor beyond the end of the text is
//! treated as end of text.
//!

use crate::cursor::{cursor_after_digit, cursor_before_digit, digits_before, map_cursor};
use crate::digits::{adds_country_digit, normalize};
use crate::format::{format, is_literal};

/// Text and cursor of the field.
///
/// The cursor is a char offset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub text: String,
    pub cursor: usize,
}

/// One edit from the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    /// Typed chars, inserted at the cursor.
    Insert(String),
    /// Backspace.
    DeletePrev,
    /// Delete.
    DeleteNext,
    /// Paste replaces the whole content.
    Paste(String),
}

/// Result of an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edited {
    /// New text of the field.
    pub text: String,
    /// New cursor. Must be set after the text.
    pub cursor: usize,
    /// The text differs from the snapshot.
    pub changed: bool,
}

/// Length of the `+7` prefix. Deleting never goes into it.
const COUNTRY_LEN: usize = 2;

impl Snapshot {
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        Self {
            text: text.into(),
            cursor,
        }
    }

    /// Cursor limited to the text.
    fn cursor(&self) -> usize {
        self.cursor.min(self.text.chars().count())
    }

    /// Cursor is inside the country prefix.
    ///
    /// Only a formatted text has one.
    fn in_country_prefix(&self, cursor: usize) -> bool {
        self.text.starts_with("+7") && cursor <= COUNTRY_LEN
    }

    fn unchanged(&self, cursor: usize) -> Edited {
        Edited {
            text: self.text.clone(),
            cursor,
            changed: false,
        }
    }
}

/// Apply any edit.
pub fn apply(snap: &Snapshot, edit: &EditKind) -> Edited {
    match edit {
        EditKind::Insert(s) => insert_str(snap, s),
        EditKind::DeletePrev => delete_prev(snap),
        EditKind::DeleteNext => delete_next(snap),
        EditKind::Paste(s) => paste(snap, s),
    }
}

/// Insert at the cursor and reformat.
///
/// The cursor stays behind the last inserted digit.
pub fn insert_str(snap: &Snapshot, s: &str) -> Edited {
    let cursor = snap.cursor();
    let raw = insert_at(&snap.text, cursor, s);
    rebuild(&snap.text, &raw, cursor + s.chars().count())
}

/// Insert a single char.
#[inline]
pub fn insert_char(snap: &Snapshot, c: char) -> Edited {
    let mut buf = [0u8; 4];
    insert_str(snap, c.encode_utf8(&mut buf))
}

/// Backspace.
///
/// Punctuation can't be deleted. If the cursor is right behind some
/// punctuation, it is moved left to the next digit and the text stays
/// as it is. The next backspace will delete the digit.
///
/// Does nothing within the `+7` prefix.
pub fn delete_prev(snap: &Snapshot) -> Edited {
    let cursor = snap.cursor();
    if cursor == 0 || snap.in_country_prefix(cursor) {
        return snap.unchanged(cursor);
    }

    let chars = snap.text.chars().collect::<Vec<_>>();
    if is_literal(chars[cursor - 1]) {
        let mut pos = cursor;
        while pos > 0 && is_literal(chars[pos - 1]) {
            pos -= 1;
        }
        snap.unchanged(pos)
    } else {
        let raw = remove_at(&snap.text, cursor - 1);
        rebuild(&snap.text, &raw, cursor - 1)
    }
}

/// Delete.
///
/// If the cursor is in front of some punctuation, the punctuation
/// is skipped and the next digit is deleted instead. The cursor ends
/// up where the digit was removed, in front of the digit that follows.
///
/// Does nothing within the `+7` prefix.
pub fn delete_next(snap: &Snapshot) -> Edited {
    let cursor = snap.cursor();
    let chars = snap.text.chars().collect::<Vec<_>>();
    if cursor >= chars.len() || snap.in_country_prefix(cursor) {
        return snap.unchanged(cursor);
    }

    let mut pos = cursor;
    while pos < chars.len() && is_literal(chars[pos]) {
        pos += 1;
    }
    if pos == chars.len() {
        // only trailing punctuation
        return snap.unchanged(cursor);
    }

    let raw = remove_at(&snap.text, pos);
    let text = format(&normalize(&raw));
    let mut n = digits_before(&raw, pos);
    if adds_country_digit(&raw) {
        n += 1;
    }
    Edited {
        changed: text != snap.text,
        cursor: cursor_before_digit(&text, n),
        text,
    }
}

/// Paste replaces the current content.
///
/// Only the digits of the pasted text are used, the cursor goes
/// to the end.
pub fn paste(snap: &Snapshot, s: &str) -> Edited {
    let text = format(&normalize(s));
    let cursor = text.chars().count();
    Edited {
        changed: text != snap.text,
        text,
        cursor,
    }
}

/// Reformat some text, cursor at the end.
///
/// Used when the value is set from outside.
pub fn reformat(text: &str) -> Edited {
    let new_text = format(&normalize(text));
    let cursor = new_text.chars().count();
    Edited {
        changed: new_text != text,
        text: new_text,
        cursor,
    }
}

/// Format the raw text and carry the cursor over.
fn rebuild(old_text: &str, raw: &str, raw_cursor: usize) -> Edited {
    let text = format(&normalize(raw));

    let cursor = if adds_country_digit(raw) {
        // the digits after the inserted country digit move one up.
        match digits_before(raw, raw_cursor) {
            0 => text.chars().count(),
            n => cursor_after_digit(&text, n + 1),
        }
    } else {
        map_cursor(raw, raw_cursor, &text)
    };

    Edited {
        changed: text != old_text,
        text,
        cursor,
    }
}

/// Byte position of a char position.
fn byte_pos(text: &str, pos: usize) -> usize {
    text.char_indices()
        .nth(pos)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

fn insert_at(text: &str, pos: usize, s: &str) -> String {
    let byte = byte_pos(text, pos);
    let mut buf = String::with_capacity(text.len() + s.len());
    buf.push_str(&text[..byte]);
    buf.push_str(s);
    buf.push_str(&text[byte..]);
    buf
}

fn remove_at(text: &str, pos: usize) -> String {
    text.chars()
        .enumerate()
        .filter(|(i, _)| *i != pos)
        .map(|(_, c)| c)
        .collect()
}
