//! Single phone field on the terminal.
//!
//! Type digits, paste, Backspace/Delete, Left/Right to move.
//! Enter prints the value, Esc quits.

use anyhow::Error;
use log::debug;
use rat_phone::event::{HandleEvent, PhoneOutcome, Regular, ct_event};
use rat_phone::phone_input::PhoneInputState;
use rat_phone::{canonical, format::MASK_TEMPLATE};
use ratatui_crossterm::crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use ratatui_crossterm::crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui_crossterm::crossterm::{cursor, execute};
use std::fs;
use std::io::{Write, stdout};
use std::path::PathBuf;

fn main() -> Result<(), Error> {
    setup_logging()?;

    let mut state = PhoneInputState::named("phone1");
    state.attach();
    state.focus = true;

    enable_raw_mode()?;
    execute!(stdout(), EnableBracketedPaste)?;
    let r = run(&mut state);
    execute!(stdout(), DisableBracketedPaste)?;
    disable_raw_mode()?;
    println!();

    r
}

fn run(state: &mut PhoneInputState) -> Result<(), Error> {
    render(state)?;
    loop {
        let event = event::read()?;

        let r = match &event {
            ct_event!(keycode press Esc) => break,
            ct_event!(keycode press Enter) => {
                match canonical(state.text()) {
                    Ok(v) => debug!("submit {}", v),
                    Err(e) => debug!("not submitted {:?}", e),
                }
                PhoneOutcome::Unchanged
            }
            ct_event!(keycode press Left) => {
                state.flush_cursor();
                state.set_cursor(state.cursor().saturating_sub(1));
                PhoneOutcome::CaretMoved
            }
            ct_event!(keycode press Right) => {
                state.flush_cursor();
                state.set_cursor(state.cursor() + 1);
                PhoneOutcome::CaretMoved
            }
            _ => state.handle(&event, Regular),
        };

        if r != PhoneOutcome::Continue {
            state.flush_cursor();
            render(state)?;
        }
    }
    Ok(())
}

fn render(state: &PhoneInputState) -> Result<(), Error> {
    let mut out = stdout();
    let marker = if state.is_invalid() { "?" } else { "ok" };
    write!(
        out,
        "\r\x1b[2K{:<width$} {}",
        state.text(),
        marker,
        width = MASK_TEMPLATE.len()
    )?;
    execute!(out, cursor::MoveToColumn(state.cursor() as u16))?;
    out.flush()?;
    Ok(())
}

fn setup_logging() -> Result<(), Error> {
    let log = PathBuf::from("phone1.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
