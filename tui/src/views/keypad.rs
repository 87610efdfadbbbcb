//! Numeric keypad and clickable buttons.

use super::controls::Action;
use countdown_core::Digit;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Width of a keypad key, borders included.
pub const KEY_WIDTH: u16 = 9;
/// Height of any button, borders included.
pub const BUTTON_HEIGHT: u16 = 3;
/// Total keypad height.
pub const KEYPAD_HEIGHT: u16 = BUTTON_HEIGHT * KEYPAD_ROWS.len() as u16;

/// Phone-style layout; the empty slot keeps `0` under `8`.
pub const KEYPAD_ROWS: [[Option<Action>; 3]; 4] = [
    [key(1), key(2), key(3)],
    [key(4), key(5), key(6)],
    [key(7), key(8), key(9)],
    [None, key(0), Some(Action::Delete)],
];

const fn key(n: usize) -> Option<Action> {
    Some(Action::Digit(Digit::ALL[n]))
}

/// Screen area that triggers `action` when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitZone {
    pub area: Rect,
    pub action: Action,
}

/// The action under `(column, row)`, if any.
pub fn hit_test(zones: &[HitZone], column: u16, row: u16) -> Option<Action> {
    zones
        .iter()
        .find(|z| z.area.contains(Position::new(column, row)))
        .map(|z| z.action)
}

pub fn key_label(action: Action) -> String {
    match action {
        Action::Digit(d) => d.to_string(),
        Action::Delete => "⌫".to_string(),
        _ => String::new(),
    }
}

/// Draws a bordered button. Returns its hit zone when enabled.
pub fn draw_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    action: Action,
    style: Style,
    enabled: bool,
) -> Option<HitZone> {
    let style = if enabled {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);

    enabled.then_some(HitZone { area, action })
}

/// Draws the keypad centered in `area`, returning the hit zones of its keys.
pub fn draw_keypad(frame: &mut Frame, area: Rect, style: Style) -> Vec<HitZone> {
    let rows = Layout::vertical([Constraint::Length(BUTTON_HEIGHT); KEYPAD_ROWS.len()])
        .flex(Flex::Start)
        .split(area);

    let mut zones = Vec::new();
    for (row_area, keys) in rows.iter().zip(KEYPAD_ROWS.iter()) {
        let cells = Layout::horizontal([Constraint::Length(KEY_WIDTH); 3])
            .flex(Flex::Center)
            .spacing(1)
            .split(*row_area);

        for (cell, key) in cells.iter().zip(keys.iter()) {
            if let Some(action) = key {
                zones.extend(draw_button(
                    frame,
                    *cell,
                    &key_label(*action),
                    *action,
                    style,
                    true,
                ));
            }
        }
    }
    zones
}
