use crate::{App, AppView};
use countdown_core::Scheduler;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Help content sections with their keyboard shortcuts.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Keypad (while stopped)",
        &[("0-9", "Enter digit"), ("Backspace/Delete", "Delete digit")],
    ),
    (
        "Countdown",
        &[
            ("Enter/Space", "Start, pause or resume"),
            ("s / p / r", "Start / pause / resume"),
            ("ESC or x", "Stop (while paused)"),
        ],
    ),
    (
        "General",
        &[
            ("Mouse", "Click keys and controls"),
            ("?", "Show help"),
            ("q / Ctrl+C", "Quit application"),
        ],
    ),
];

impl<S: Scheduler> App<S> {
    pub fn draw_help(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.state.theme;

        // Calculate content height: title (1) + blank (1) + sections
        let mut content_height: u16 = 2; // title + blank line
        for (_section_name, items) in HELP_SECTIONS {
            content_height += 1; // section header
            content_height += items.len() as u16; // items
            content_height += 1; // blank line after section
        }
        content_height += 1; // footer

        let content_width: u16 = 44;

        // Center the content
        let [centered_area] = Layout::horizontal([Constraint::Length(content_width)])
            .flex(Flex::Center)
            .areas(area);

        let [centered_area] = Layout::vertical([Constraint::Length(content_height)])
            .flex(Flex::Center)
            .areas(centered_area);

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            "━━━ Keyboard Controls ━━━",
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for (section_name, items) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                section_name.to_string(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));

            for (key, description) in *items {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}", key), Style::default().fg(theme.secondary)),
                    Span::styled(
                        format!("  {}", description),
                        Style::default().fg(theme.dimmed),
                    ),
                ]));
            }

            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("ESC", Style::default().fg(theme.primary)),
            Span::styled(" to return", Style::default().fg(theme.dimmed)),
        ]));

        frame.render_widget(Paragraph::new(lines), centered_area);
    }

    pub fn handle_help_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => self.set_view(AppView::Timer),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}
