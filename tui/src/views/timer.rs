use super::{
    controls::{Action, action_for_key, controls_for, is_offered},
    glyphs::{GLYPH_HEIGHT, render_big},
    keypad::{BUTTON_HEIGHT, KEY_WIDTH, KEYPAD_HEIGHT, draw_button, draw_keypad, hit_test},
};
use crate::{App, AppView};
use countdown_core::{Scheduler, TimerState};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;

/// Big digits plus the display border.
const DISPLAY_HEIGHT: u16 = GLYPH_HEIGHT as u16 + 2;
/// Three keypad keys with spacing, or the longest footer.
const CONTENT_WIDTH: u16 = 3 * KEY_WIDTH + 2 + 8;
const CONTROL_WIDTH: u16 = 12;

impl<S: Scheduler> App<S> {
    pub fn draw_timer(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.state.theme;
        let state = self.state.timer.state();
        self.state.hit_zones.clear();

        let keypad_height = if state.is_stopped() { KEYPAD_HEIGHT } else { 0 };
        // display + status + blank + controls + blank + keypad + blank + footer
        let content_height = DISPLAY_HEIGHT + 1 + 1 + BUTTON_HEIGHT + 1 + keypad_height + 1 + 1;

        // Center the content
        let [centered_area] = Layout::horizontal([Constraint::Length(CONTENT_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [centered_area] = Layout::vertical([Constraint::Length(content_height)])
            .flex(Flex::Center)
            .areas(centered_area);

        let [
            display_area,
            status_area,
            _,
            controls_area,
            _,
            keypad_area,
            _,
            footer_area,
        ] = Layout::vertical([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(keypad_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(centered_area);

        // Time display
        let display_color = match state {
            TimerState::Stopped(_) => theme.display,
            TimerState::Running(_) => theme.running,
            TimerState::Paused(_) => theme.paused,
        };
        let digits: Vec<Line> = render_big(&state.duration().to_string())
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(display_color))))
            .collect();
        let display = Paragraph::new(digits).centered().block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.secondary))
                .title(" Countdown "),
        );
        frame.render_widget(display, display_area);

        // Status line, also the plain-text reading of the display
        let status = Line::from(vec![
            Span::styled(
                state.label(),
                Style::default()
                    .fg(display_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · ", Style::default().fg(theme.dimmed)),
            Span::styled(state.duration().to_string(), Style::default().fg(theme.text)),
        ]);
        frame.render_widget(Paragraph::new(status).centered(), status_area);

        // Controls
        let buttons = controls_for(&state);
        let control_areas = Layout::horizontal(vec![Constraint::Length(CONTROL_WIDTH); buttons.len()])
            .flex(Flex::Center)
            .spacing(1)
            .split(controls_area);
        for (button, button_area) in buttons.iter().zip(control_areas.iter()) {
            let color = if button.enabled { theme.primary } else { theme.dimmed };
            let zone = draw_button(
                frame,
                *button_area,
                button.control.label(),
                button.control.action(),
                Style::default().fg(color),
                button.enabled,
            );
            self.state.hit_zones.extend(zone);
        }

        // Keypad, only while editing
        if state.is_stopped() {
            let zones = draw_keypad(frame, keypad_area, Style::default().fg(theme.text));
            self.state.hit_zones.extend(zones);
        }

        // Footer
        let key = |k: &'static str| Span::styled(k, Style::default().fg(theme.primary));
        let hint = |h: &'static str| Span::styled(h, Style::default().fg(theme.dimmed));
        let mut footer = Vec::new();
        match state {
            TimerState::Stopped(_) => {
                footer.extend([key("0-9"), hint(" set  "), key("⏎"), hint(" start  ")]);
            }
            TimerState::Running(_) => {
                footer.extend([key("⏎"), hint(" pause  ")]);
            }
            TimerState::Paused(_) => {
                footer.extend([key("⏎"), hint(" resume  "), key("ESC"), hint(" stop  ")]);
            }
        }
        footer.extend([key("?"), hint(" help  "), key("q"), hint(" quit")]);
        frame.render_widget(Paragraph::new(Line::from(footer)).centered(), footer_area);
    }

    pub fn handle_timer_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => self.set_view(AppView::Help),
            _ => {
                if let Some(action) = action_for_key(&self.state.timer.state(), key) {
                    self.apply(action);
                }
            }
        }
    }

    /// Left click at `(column, row)` on the timer screen.
    pub fn handle_timer_click(&mut self, column: u16, row: u16) {
        if let Some(action) = hit_test(&self.state.hit_zones, column, row) {
            self.apply(action);
        }
    }

    /// Performs `action` if it is currently on screen and enabled.
    pub fn apply(&mut self, action: Action) {
        let timer = &mut self.state.timer;
        let state = timer.state();
        if !is_offered(&state, action) {
            debug!(?action, %state, "ignoring unavailable action");
            return;
        }

        debug!(?action, %state, "applying action");
        match action {
            Action::Start => timer.start(state.duration()),
            Action::Pause => timer.pause(state.duration()),
            Action::Resume => timer.resume(),
            Action::Stop => timer.stop(),
            Action::Digit(digit) => {
                timer.enter_digit(digit);
            }
            Action::Delete => {
                timer.delete_digit();
            }
        }
    }
}
