//! What the user can do in each timer state.

use countdown_core::{Digit, TimerState};
use crossterm::event::{KeyCode, KeyEvent};

/// A gesture on the timer screen, from a key press or a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Pause,
    Resume,
    Stop,
    Digit(Digit),
    Delete,
}

/// A context-sensitive control button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    Pause,
    Resume,
    Stop,
}

impl Control {
    pub fn label(&self) -> &'static str {
        match self {
            Control::Start => "start",
            Control::Pause => "pause",
            Control::Resume => "resume",
            Control::Stop => "stop",
        }
    }

    pub fn action(&self) -> Action {
        match self {
            Control::Start => Action::Start,
            Control::Pause => Action::Pause,
            Control::Resume => Action::Resume,
            Control::Stop => Action::Stop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlButton {
    pub control: Control,
    pub enabled: bool,
}

/// Controls shown for `state`, left to right.
pub fn controls_for(state: &TimerState) -> Vec<ControlButton> {
    let button = |control, enabled| ControlButton { control, enabled };
    match state {
        TimerState::Stopped(d) => vec![button(Control::Start, !d.is_zero())],
        TimerState::Running(_) => vec![button(Control::Pause, true)],
        TimerState::Paused(_) => vec![
            button(Control::Resume, true),
            button(Control::Stop, true),
        ],
    }
}

/// Whether `action` is on screen and enabled in `state`.
pub fn is_offered(state: &TimerState, action: Action) -> bool {
    match action {
        Action::Digit(_) | Action::Delete => state.is_stopped(),
        _ => controls_for(state)
            .iter()
            .any(|b| b.enabled && b.control.action() == action),
    }
}

/// Maps a key press to an action, if the key means anything in `state`.
pub fn action_for_key(state: &TimerState, key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => Action::Digit(Digit::try_from(c).ok()?),
        KeyCode::Backspace | KeyCode::Delete => Action::Delete,
        // primary control
        KeyCode::Enter | KeyCode::Char(' ') => match state {
            TimerState::Stopped(_) => Action::Start,
            TimerState::Running(_) => Action::Pause,
            TimerState::Paused(_) => Action::Resume,
        },
        KeyCode::Char('s') => Action::Start,
        KeyCode::Char('p') => Action::Pause,
        KeyCode::Char('r') => Action::Resume,
        KeyCode::Esc | KeyCode::Char('x') => Action::Stop,
        _ => return None,
    };

    is_offered(state, action).then_some(action)
}
