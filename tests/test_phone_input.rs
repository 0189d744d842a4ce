use rat_phone::PhoneError;
use rat_phone::clipboard::{DigitClipboard, PhoneClipboard};
use rat_phone::event::{HandleEvent, Outcome, PhoneOutcome, Regular};
use rat_phone::field::{FieldBuffer, TextField};
use rat_phone::phone_input::{PhoneInputState, handle_events};
use ratatui_crossterm::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn code(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn release(c: char) -> Event {
    Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char(c),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ))
}

fn attached() -> PhoneInputState {
    let mut state = PhoneInputState::named("test");
    state.attach();
    state.focus = true;
    state
}

#[test]
fn test_attach_once() {
    let mut state = PhoneInputState::new();
    assert!(!state.is_attached());
    assert!(state.attach());
    assert!(state.is_attached());
    assert!(!state.attach());

    // a single registration: one key, one digit.
    state.focus = true;
    state.handle(&key('9'), Regular);
    state.flush_cursor();
    assert_eq!(state.text(), "+7 (9");
}

#[test]
fn test_attach_reformats() {
    let mut field = FieldBuffer::new();
    field.set_text("89991234567".into());

    let mut state = PhoneInputState::with_field(field).with_name("phone");
    assert_eq!(state.name(), "phone");
    assert_eq!(state.text(), "89991234567");
    state.attach();
    state.flush_cursor();
    assert_eq!(state.text(), "+7 (999) 123-45-67");
    assert_eq!(state.cursor(), 18);
    assert!(!state.is_invalid());
}

#[test]
fn test_not_attached() {
    let mut state = PhoneInputState::new();
    state.focus = true;
    assert_eq!(state.handle(&key('9'), Regular), PhoneOutcome::Continue);
    assert_eq!(state.text(), "");
}

#[test]
fn test_no_focus() {
    let mut state = attached();
    assert_eq!(handle_events(&mut state, false, &key('9')), PhoneOutcome::Continue);
    assert_eq!(state.text(), "");
    assert_eq!(handle_events(&mut state, true, &key('9')), PhoneOutcome::ValueChanged);
    assert_eq!(state.text(), "+7 (9");
}

#[test]
fn test_typing() {
    let mut state = attached();
    for c in "9991234567".chars() {
        assert_eq!(state.handle(&key(c), Regular), PhoneOutcome::ValueChanged);
        assert_eq!(state.handle(&release(c), Regular), PhoneOutcome::Unchanged);
    }
    state.flush_cursor();
    assert_eq!(state.text(), "+7 (999) 123-45-67");
    assert_eq!(state.cursor(), 18);
    assert!(!state.is_invalid());
    assert_eq!(state.value().as_str(), "79991234567");
    assert_eq!(
        state.canonical().map(|v| v.into_string()),
        Ok("79991234567".to_string())
    );

    // full
    assert_eq!(state.handle(&key('1'), Regular), PhoneOutcome::Unchanged);
    // not a digit
    assert_eq!(state.handle(&key('x'), Regular), PhoneOutcome::Unchanged);
}

#[test]
fn test_deferred_cursor() {
    let mut state = attached();
    state.insert_str("999");
    state.flush_cursor();
    state.set_cursor(5);

    state.insert_char('1');
    // the field moved the cursor to the end when the text was set.
    assert_eq!(state.text(), "+7 (919) 9");
    assert_eq!(state.cursor(), 10);
    assert_eq!(state.pending_cursor(), Some(6));

    assert!(state.flush_cursor());
    assert_eq!(state.cursor(), 6);
    assert_eq!(state.pending_cursor(), None);
    assert!(!state.flush_cursor());
}

#[test]
fn test_next_event_settles_cursor() {
    let mut state = attached();
    state.set_text("+7 (999) 123");
    state.flush_cursor();
    state.set_cursor(5);

    state.handle(&key('1'), Regular);
    // second key goes behind the first one, not to the end.
    state.handle(&key('2'), Regular);
    state.flush_cursor();
    assert_eq!(state.text(), "+7 (912) 991-23");
    assert_eq!(state.cursor(), 7);
}

#[test]
fn test_backspace() {
    let mut state = attached();
    state.set_text("+7 (999) 1");
    state.flush_cursor();
    assert_eq!(state.cursor(), 10);

    assert_eq!(state.handle(&code(KeyCode::Backspace), Regular), PhoneOutcome::ValueChanged);
    state.flush_cursor();
    assert_eq!(state.text(), "+7 (999");
    assert_eq!(state.cursor(), 7);

    state.set_text("+7 (999) ");
    // set_text reformats
    assert_eq!(state.text(), "+7 (999");
}

#[test]
fn test_backspace_skips_punctuation() {
    let mut field = FieldBuffer::new();
    field.set_text("+7 (999) ".into());
    let mut state = PhoneInputState::with_field(field);
    // not attached, the field keeps its text.
    state.set_cursor(9);
    assert_eq!(state.text(), "+7 (999) ");

    assert!(state.delete_prev_char());
    state.flush_cursor();
    assert_eq!(state.text(), "+7 (999) ");
    assert_eq!(state.cursor(), 7);
    assert_eq!(state.value().as_str(), "7999");

    // now at a digit
    assert!(state.delete_prev_char());
    state.flush_cursor();
    assert_eq!(state.text(), "+7 (99");
    assert_eq!(state.cursor(), 6);
}

#[test]
fn test_backspace_event_outcome() {
    let mut state = attached();
    state.set_text("+7 (999) 1");
    state.flush_cursor();
    state.set_cursor(9);

    assert_eq!(state.handle(&code(KeyCode::Backspace), Regular), PhoneOutcome::CaretMoved);
    state.flush_cursor();
    assert_eq!(state.cursor(), 7);

    state.set_cursor(2);
    assert_eq!(state.handle(&code(KeyCode::Backspace), Regular), PhoneOutcome::Unchanged);
    assert_eq!(state.text(), "+7 (999) 1");
}

#[test]
fn test_delete() {
    let mut state = attached();
    state.set_text("+7 (999) 123");
    state.flush_cursor();
    state.set_cursor(7);

    assert_eq!(state.handle(&code(KeyCode::Delete), Regular), PhoneOutcome::ValueChanged);
    state.flush_cursor();
    assert_eq!(state.text(), "+7 (999) 23");
    assert_eq!(state.cursor(), 9);

    assert!(state.delete_next_char());
    state.flush_cursor();
    assert_eq!(state.text(), "+7 (999) 3");
}

#[test]
fn test_paste_event() {
    let mut state = attached();
    state.insert_str("111");
    assert_eq!(
        state.handle(&Event::Paste("8 999 123-45-67".into()), Regular),
        PhoneOutcome::ValueChanged
    );
    state.flush_cursor();
    assert_eq!(state.text(), "+7 (999) 123-45-67");
    assert_eq!(state.cursor(), 18);
    assert!(!state.is_invalid());
}

#[test]
fn test_clipboard() {
    let clip = DigitClipboard::new();
    let mut state = attached();
    state.set_clipboard(Some(clip.clone()));

    clip.set_text("+7 999 123 45 67").expect("clip");
    assert_eq!(clip.text().expect("clip"), "79991234567");
    assert_eq!(state.handle(&ctrl('v'), Regular), PhoneOutcome::ValueChanged);
    assert_eq!(state.text(), "+7 (999) 123-45-67");

    state.set_text("9 876");
    assert_eq!(state.handle(&ctrl('c'), Regular), PhoneOutcome::Unchanged);
    assert_eq!(clip.text().expect("clip"), "79876");

    state.set_clipboard(None::<DigitClipboard>);
    assert!(state.clipboard().is_none());
    assert!(!state.paste_from_clip());
    assert!(!state.copy_to_clip());
}

#[test]
fn test_clipboard_no_digits() {
    let clip = DigitClipboard::new();
    let mut state = attached();
    state.set_clipboard(Some(clip.clone()));
    state.set_text("999");

    clip.set_text("no number here").expect("clip");
    assert_eq!(clip.digits(), Ok(None));
    assert_eq!(state.handle(&ctrl('v'), Regular), PhoneOutcome::Unchanged);
    assert_eq!(state.text(), "+7 (999)");
}

#[test]
fn test_clipboard_same_number() {
    let clip = DigitClipboard::new();
    let mut state = attached();
    state.set_clipboard(Some(clip.clone()));
    state.set_text("999");
    state.flush_cursor();
    clip.set_text("8999").expect("clip");

    // same digits, only the caret goes to the end.
    state.set_cursor(5);
    assert_eq!(state.handle(&ctrl('v'), Regular), PhoneOutcome::CaretMoved);
    state.flush_cursor();
    assert_eq!(state.cursor(), 8);

    assert_eq!(state.handle(&ctrl('v'), Regular), PhoneOutcome::Unchanged);
}

#[derive(Debug, Clone)]
struct BrokenClipboard;

impl PhoneClipboard for BrokenClipboard {
    fn text(&self) -> Result<String, PhoneError> {
        Err(PhoneError::Clipboard)
    }

    fn set_text(&self, _text: &str) -> Result<(), PhoneError> {
        Err(PhoneError::Clipboard)
    }
}

#[test]
fn test_broken_clipboard() {
    let mut state = attached();
    state.set_clipboard(Some(BrokenClipboard));
    state.set_text("999");

    assert_eq!(state.try_paste_from_clip(), Err(PhoneError::Clipboard));
    assert!(!state.paste_from_clip());
    assert!(!state.copy_to_clip());
    assert_eq!(state.handle(&ctrl('v'), Regular), PhoneOutcome::Unchanged);
    assert_eq!(state.text(), "+7 (999)");
}

#[test]
fn test_clear() {
    let mut state = attached();
    state.set_text("79991234567");
    assert!(!state.is_invalid());
    assert_eq!(state.handle(&ctrl('d'), Regular), PhoneOutcome::ValueChanged);
    assert_eq!(state.text(), "");
    assert!(state.is_invalid());
    assert_eq!(state.handle(&ctrl('d'), Regular), PhoneOutcome::Unchanged);
    assert!(!state.clear());
}

#[test]
fn test_invalid_flag() {
    let mut state = attached();
    assert!(state.is_invalid());
    state.insert_str("999123456");
    assert!(state.is_invalid());
    assert_eq!(state.canonical(), Err(PhoneError::Incomplete(10)));
    state.insert_char('7');
    assert!(!state.is_invalid());
    state.delete_prev_char();
    assert!(state.is_invalid());
}

#[test]
fn test_altgr_input() {
    let mut state = attached();
    let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
    let press = Event::Key(KeyEvent::new(KeyCode::Char('9'), altgr));
    let release = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('9'),
        altgr,
        KeyEventKind::Release,
    ));
    assert_eq!(state.handle(&press, Regular), PhoneOutcome::ValueChanged);
    assert_eq!(state.handle(&release, Regular), PhoneOutcome::Unchanged);
    assert_eq!(state.text(), "+7 (9");
}

#[test]
fn test_unknown_events() {
    let mut state = attached();
    assert_eq!(state.handle(&code(KeyCode::F(5)), Regular), PhoneOutcome::Continue);
    assert_eq!(state.handle(&ctrl('q'), Regular), PhoneOutcome::Continue);
    assert_eq!(
        Outcome::from(state.handle(&key('5'), Regular)),
        Outcome::Changed
    );
}

#[test]
fn test_isolated_fields() {
    let mut a = attached();
    let mut b = attached();
    a.handle(&key('1'), Regular);
    b.handle(&key('8'), Regular);
    assert_eq!(a.text(), "+7 (1");
    assert_eq!(b.text(), "+7");
}
