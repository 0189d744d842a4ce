//!
//! Clipboard for the phone field.
//!
//! Only digits travel through the clipboard. Copy puts the canonical
//! digits there, never the formatted text. Paste reads whatever text
//! is on the clipboard and keeps only its digits.
//!
//! Connect a system clipboard by implementing [PhoneClipboard] with
//! [text](PhoneClipboard::text) and [set_text](PhoneClipboard::set_text).
//! Without one the field uses a [DigitClipboard], which is shared by
//! all its clones.
//!

use crate::PhoneError;
use crate::digits::{DigitSequence, normalize};
use dyn_clone::{DynClone, clone_box};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// Clipboard access for the phone field.
pub trait PhoneClipboard: DynClone + Debug {
    /// Text currently on the clipboard.
    fn text(&self) -> Result<String, PhoneError>;

    /// Replace the clipboard content.
    fn set_text(&self, text: &str) -> Result<(), PhoneError>;

    /// Digits of the clipboard text.
    ///
    /// None if there are no digits at all.
    fn digits(&self) -> Result<Option<DigitSequence>, PhoneError> {
        let digits = normalize(&self.text()?);
        if digits.is_empty() {
            Ok(None)
        } else {
            Ok(Some(digits))
        }
    }

    /// Copy the digits.
    fn set_digits(&self, digits: &DigitSequence) -> Result<(), PhoneError> {
        self.set_text(digits.as_str())
    }
}

impl Clone for Box<dyn PhoneClipboard> {
    fn clone(&self) -> Self {
        clone_box(self.as_ref())
    }
}

/// In-process clipboard.
///
/// Stores digits only, any other text is reduced to its digits
/// when it is set.
#[derive(Debug, Default, Clone)]
pub struct DigitClipboard {
    digits: Arc<Mutex<DigitSequence>>,
}

impl DigitClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhoneClipboard for DigitClipboard {
    fn text(&self) -> Result<String, PhoneError> {
        let digits = self.digits.lock().map_err(|_| PhoneError::Clipboard)?;
        Ok(digits.as_str().to_string())
    }

    fn set_text(&self, text: &str) -> Result<(), PhoneError> {
        let mut digits = self.digits.lock().map_err(|_| PhoneError::Clipboard)?;
        *digits = normalize(text);
        Ok(())
    }
}
