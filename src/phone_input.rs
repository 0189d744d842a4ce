//!
//! Phone number input.
//!
//! Puts the phone mask on top of some text field. The field only has
//! to provide text and cursor, see [TextField].
//!
//! ```rust
//! use rat_phone::phone_input::PhoneInputState;
//!
//! let mut state = PhoneInputState::named("phone");
//! state.attach();
//!
//! state.paste_str("8 999 123-45-67");
//! state.flush_cursor();
//!
//! assert_eq!(state.text(), "+7 (999) 123-45-67");
//! assert_eq!(state.value().as_str(), "79991234567");
//! assert!(!state.is_invalid());
//! ```
//!
//! Every edit is written back in two steps. The text is set first,
//! the cursor is only queued. [PhoneInputState::flush_cursor] sets
//! the cursor after the field had a chance to update itself with
//! the new text. Event handling flushes the cursor of the previous
//! event before it starts with the next one, call `flush_cursor`
//! before rendering.
//!
//! Event handling by calling the freestanding fn [handle_events].
//!

use crate::_private::NonExhaustive;
use crate::clipboard::{DigitClipboard, PhoneClipboard};
use crate::digits::{DigitSequence, canonical, clean_digits, is_valid};
use crate::edit_op::{EditKind, Edited, Snapshot};
use crate::event::PhoneOutcome;
use crate::field::{FieldBuffer, TextField};
use crate::{PhoneError, edit_op};
use log::{debug, warn};
use rat_event::{HandleEvent, Regular, ct_event};

/// State & event-handling.
#[derive(Debug, Clone)]
pub struct PhoneInputState<F: TextField = FieldBuffer> {
    /// The text field.
    /// __read+write__ Changing the text directly bypasses the mask,
    /// use [PhoneInputState::set_text].
    pub field: F,
    /// Events are only handled with focus.
    /// __read+write__
    pub focus: bool,

    /// Name used for logging.
    name: String,
    /// The mask is active for event-handling.
    attached: bool,
    /// Current value is not a complete phone number.
    invalid: bool,
    /// Cursor waiting for the field to settle.
    pending_cursor: Option<usize>,
    /// Clipboard
    clipboard: Option<Box<dyn PhoneClipboard>>,

    pub non_exhaustive: NonExhaustive,
}

impl<F: TextField + Default> Default for PhoneInputState<F> {
    fn default() -> Self {
        Self::with_field(F::default())
    }
}

impl PhoneInputState<FieldBuffer> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        let mut z = Self::default();
        z.name = name.into();
        z
    }
}

impl<F: TextField> PhoneInputState<F> {
    /// Use the given field.
    ///
    /// The content of the field is reformatted with [attach](Self::attach).
    pub fn with_field(field: F) -> Self {
        Self {
            field,
            focus: false,
            name: Default::default(),
            attached: false,
            invalid: true,
            pending_cursor: None,
            clipboard: Some(Box::new(DigitClipboard::new())),
            non_exhaustive: NonExhaustive,
        }
    }

    /// Set a name for logging.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    /// Name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Activate the mask for event-handling.
    ///
    /// Reformats the current content of the field. Returns false if
    /// the mask has been attached before, nothing happens then.
    pub fn attach(&mut self) -> bool {
        if self.attached {
            return false;
        }
        self.attached = true;

        let edited = edit_op::reformat(self.field.text());
        debug!("phone {:?}: attach {:?}", self.name, edited.text);
        self.commit(edited);
        true
    }

    /// Mask is active.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl<F: TextField> PhoneInputState<F> {
    /// Set the clipboard.
    pub fn set_clipboard(&mut self, clip: Option<impl PhoneClipboard + 'static>) {
        match clip {
            None => self.clipboard = None,
            Some(v) => self.clipboard = Some(Box::new(v)),
        }
    }

    /// Get the clipboard.
    pub fn clipboard(&self) -> Option<&dyn PhoneClipboard> {
        self.clipboard.as_deref()
    }

    /// Copy the digits to the clipboard.
    ///
    /// Copies the canonical digits, not the formatted text.
    pub fn copy_to_clip(&mut self) -> bool {
        let Some(clip) = self.clipboard.as_deref() else {
            return false;
        };
        let value = self.value();
        if value.is_empty() {
            return false;
        }
        match clip.set_digits(&value) {
            Ok(_) => true,
            Err(e) => {
                warn!("phone {:?}: copy failed {:?}", self.name, e);
                false
            }
        }
    }

    /// Replace the content with the digits from the clipboard.
    pub fn paste_from_clip(&mut self) -> bool {
        self.paste_clip().is_changed()
    }

    /// Replace the content with the digits from the clipboard.
    ///
    /// Fails if the clipboard can't be read.
    pub fn try_paste_from_clip(&mut self) -> Result<PhoneOutcome, PhoneError> {
        let Some(clip) = self.clipboard.as_deref() else {
            return Ok(PhoneOutcome::Unchanged);
        };
        match clip.digits()? {
            Some(digits) => Ok(self.edit(EditKind::Paste(digits.into_string()))),
            None => Ok(PhoneOutcome::Unchanged),
        }
    }

    fn paste_clip(&mut self) -> PhoneOutcome {
        match self.try_paste_from_clip() {
            Ok(r) => r,
            Err(e) => {
                warn!("phone {:?}: paste failed {:?}", self.name, e);
                PhoneOutcome::Unchanged
            }
        }
    }
}

impl<F: TextField> PhoneInputState<F> {
    /// Displayed text.
    #[inline]
    pub fn text(&self) -> &str {
        self.field.text()
    }

    /// Cursor of the field.
    ///
    /// This is the old cursor until [flush_cursor](Self::flush_cursor) has
    /// been called after an edit.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.field.cursor()
    }

    /// Set the cursor.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.pending_cursor = None;
        self.field.set_cursor(cursor);
    }

    /// Cursor that will be set with the next flush.
    #[inline]
    pub fn pending_cursor(&self) -> Option<usize> {
        self.pending_cursor
    }

    /// Digits of the current text.
    #[inline]
    pub fn value(&self) -> DigitSequence {
        clean_digits(self.field.text())
    }

    /// Digits of a complete phone number.
    #[inline]
    pub fn canonical(&self) -> Result<DigitSequence, PhoneError> {
        canonical(self.field.text())
    }

    /// Value is not a complete phone number.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.field.text().is_empty()
    }

    /// Set a new value.
    ///
    /// The value is reformatted, the cursor goes to the end.
    pub fn set_text<S: AsRef<str>>(&mut self, s: S) {
        let edited = edit_op::reformat(s.as_ref());
        self.commit(edited);
    }

    /// Reset to empty.
    pub fn clear(&mut self) -> bool {
        if self.is_empty() {
            false
        } else {
            self.set_text("");
            true
        }
    }
}

impl<F: TextField> PhoneInputState<F> {
    /// Insert a char at the cursor.
    #[inline]
    pub fn insert_char(&mut self, c: char) -> bool {
        self.edit(EditKind::Insert(c.to_string())).is_changed()
    }

    /// Insert some text at the cursor.
    #[inline]
    pub fn insert_str(&mut self, s: &str) -> bool {
        self.edit(EditKind::Insert(s.to_string())).is_changed()
    }

    /// Backspace.
    #[inline]
    pub fn delete_prev_char(&mut self) -> bool {
        self.edit(EditKind::DeletePrev).is_changed()
    }

    /// Delete.
    #[inline]
    pub fn delete_next_char(&mut self) -> bool {
        self.edit(EditKind::DeleteNext).is_changed()
    }

    /// Replace the content with the digits of the text.
    #[inline]
    pub fn paste_str(&mut self, s: &str) -> bool {
        self.edit(EditKind::Paste(s.to_string())).is_changed()
    }

    /// Run one edit against the field.
    pub fn edit(&mut self, edit: EditKind) -> PhoneOutcome {
        // an edit always starts from the settled field.
        self.flush_cursor();

        let snap = Snapshot::new(self.field.text(), self.field.cursor());
        let edited = edit_op::apply(&snap, &edit);
        debug!(
            "phone {:?}: {:?} {:?}|{} -> {:?}|{}",
            self.name, edit, snap.text, snap.cursor, edited.text, edited.cursor
        );

        let r = if edited.changed {
            PhoneOutcome::ValueChanged
        } else if edited.cursor != snap.cursor {
            PhoneOutcome::CaretMoved
        } else {
            PhoneOutcome::Unchanged
        };
        self.commit(edited);
        r
    }

    /// Write the text and queue the cursor.
    fn commit(&mut self, edited: Edited) {
        if edited.text != self.field.text() {
            self.field.set_text(edited.text);
        }
        self.invalid = !is_valid(self.field.text());
        self.pending_cursor = Some(edited.cursor);
    }

    /// Set the cursor queued by the last edit.
    ///
    /// Returns true if there was one.
    pub fn flush_cursor(&mut self) -> bool {
        if let Some(cursor) = self.pending_cursor.take() {
            self.field.set_cursor(cursor);
            true
        } else {
            false
        }
    }
}

impl<F: TextField> HandleEvent<ratatui_crossterm::crossterm::event::Event, Regular, PhoneOutcome>
    for PhoneInputState<F>
{
    fn handle(
        &mut self,
        event: &ratatui_crossterm::crossterm::event::Event,
        _keymap: Regular,
    ) -> PhoneOutcome {
        // settle the previous event.
        self.flush_cursor();

        if !self.attached || !self.focus {
            return PhoneOutcome::Continue;
        }

        match event {
            ct_event!(key press c)
            | ct_event!(key press SHIFT-c)
            | ct_event!(key press CONTROL_ALT-c) => self.edit(EditKind::Insert(c.to_string())),
            ct_event!(keycode press Backspace) => self.edit(EditKind::DeletePrev),
            ct_event!(keycode press Delete) => self.edit(EditKind::DeleteNext),
            ct_event!(paste text) => self.edit(EditKind::Paste(text.clone())),
            ct_event!(key press CONTROL-'v') => self.paste_clip(),
            ct_event!(key press CONTROL-'c') => {
                self.copy_to_clip();
                PhoneOutcome::Unchanged
            }
            ct_event!(key press CONTROL-'d') => {
                if self.clear() {
                    PhoneOutcome::ValueChanged
                } else {
                    PhoneOutcome::Unchanged
                }
            }

            ct_event!(key release _)
            | ct_event!(key release SHIFT-_)
            | ct_event!(key release CONTROL_ALT-_)
            | ct_event!(keycode release Backspace)
            | ct_event!(keycode release Delete)
            | ct_event!(key release CONTROL-'v')
            | ct_event!(key release CONTROL-'c')
            | ct_event!(key release CONTROL-'d') => PhoneOutcome::Unchanged,

            _ => PhoneOutcome::Continue,
        }
    }
}

/// Handle all events.
/// Text events are only processed if focus is true and the mask
/// is attached.
pub fn handle_events<F: TextField>(
    state: &mut PhoneInputState<F>,
    focus: bool,
    event: &ratatui_crossterm::crossterm::event::Event,
) -> PhoneOutcome {
    state.focus = focus;
    state.handle(event, Regular)
}
