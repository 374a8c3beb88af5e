use super::app::{Field, TuiApp};
use super::msg::UiMsg;
use crate::error::{ReportError, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Poll the terminal and translate the next key press, if any
pub fn next_msg(app: &TuiApp) -> Result<Option<UiMsg>> {
    if !event::poll(Duration::from_millis(100))
        .map_err(|e| ReportError::general(format!("Failed to poll events: {}", e)))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| ReportError::general(format!("Failed to read event: {}", e)))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(app, key)),
        // resize and mouse events only trigger a redraw
        _ => Ok(None),
    }
}

pub fn map_key(app: &TuiApp, key: KeyEvent) -> Option<UiMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiMsg::Quit),
            KeyCode::Char('s') => Some(UiMsg::SaveSnapshot),
            _ => None,
        };
    }

    let editing_date = matches!(app.focus, Field::FromDate | Field::ToDate);

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(UiMsg::Quit),
        KeyCode::Tab => Some(UiMsg::FocusNext),
        KeyCode::BackTab => Some(UiMsg::FocusPrev),
        KeyCode::Right => Some(UiMsg::NextStream),
        KeyCode::Left => Some(UiMsg::PrevStream),
        KeyCode::Up => Some(UiMsg::ScrollUp),
        KeyCode::Down => Some(UiMsg::ScrollDown),
        KeyCode::Enter => Some(UiMsg::Activate),
        KeyCode::Char(' ') if !editing_date => Some(UiMsg::Activate),
        KeyCode::Backspace if editing_date => Some(UiMsg::Backspace),
        KeyCode::Char(c) if editing_date => Some(UiMsg::Type(c)),
        _ => None,
    }
}
