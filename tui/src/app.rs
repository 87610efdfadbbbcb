use crate::{keypad::HitZone, scheduler::LocalScheduler, theme::Theme};
use color_eyre::eyre::Result;
use countdown_core::{Scheduler, Timer};
use crossterm::event::{Event, EventStream, KeyEventKind, MouseButton, MouseEventKind};
use std::time::Duration;
use tracing::info;

#[derive(Default, Clone, Debug, PartialEq)]
pub enum AppView {
    #[default]
    Timer,
    Help,
}

pub struct AppState<S: Scheduler> {
    /// The countdown session, alive for the whole run.
    pub timer: Timer<S>,
    /// Active color theme.
    pub theme: &'static Theme,
    /// Clickable areas from the last draw.
    pub hit_zones: Vec<HitZone>,
}

/// 35 FPS = 1000ms / 35
const FPS_RATE: Duration = Duration::from_millis(1000 / 35);

pub struct App<S: Scheduler = LocalScheduler> {
    /// Active application view.
    pub view: AppView,
    /// Application state.
    ///
    /// This is shared among all views.
    pub state: AppState<S>,
    /// Is the application running?
    pub is_running: bool,
}

impl<S: Scheduler> App<S> {
    /// Construct a new instance of [`App`] with its timer ticking on `scheduler`.
    pub fn new(scheduler: S, theme: &'static Theme) -> Self {
        Self {
            view: AppView::Timer,
            state: AppState {
                timer: Timer::new(scheduler),
                theme,
                hit_zones: Vec::new(),
            },
            is_running: false,
        }
    }

    /// Set the active view.
    pub fn set_view(&mut self, view: AppView) {
        self.view = view;
    }

    /// Run the application's main loop.
    ///
    /// Must be polled inside a [`tokio::task::LocalSet`] when `S` spawns
    /// local tasks.
    pub async fn run(mut self, mut terminal: ratatui::DefaultTerminal) -> Result<()> {
        self.is_running = true;
        info!(theme = self.state.theme.id, "starting countdown");

        let mut event_stream = EventStream::new();
        // redraw ticker, so tick-driven changes show up without input
        let mut interval = tokio::time::interval(FPS_RATE);

        while self.is_running {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                _ = interval.tick() => {
                    continue;
                }
                result = self.handle_crossterm_events(&mut event_stream) => {
                    result?;
                }
            }
        }

        info!("quitting");
        Ok(())
    }

    /// Renders the user interface.
    pub fn draw(&mut self, frame: &mut ratatui::Frame) {
        match self.view {
            AppView::Timer => self.draw_timer(frame),
            AppView::Help => self.draw_help(frame),
        }
    }

    /// Reads the next crossterm event and updates the state of [`App`].
    async fn handle_crossterm_events(&mut self, event_stream: &mut EventStream) -> Result<()> {
        use futures::{FutureExt, StreamExt};

        match event_stream.next().fuse().await {
            Some(Ok(event)) => self.handle_event(event),
            Some(Err(err)) => return Err(err.into()),
            None => self.quit(),
        }
        Ok(())
    }

    /// Dispatches one terminal event to the active view.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                use crossterm::event::{KeyCode, KeyModifiers};

                // application-wide CTRL+C handler
                if matches!(
                    (key.modifiers, key.code),
                    (
                        KeyModifiers::CONTROL,
                        KeyCode::Char('c') | KeyCode::Char('C')
                    )
                ) {
                    self.quit();
                    return;
                };

                match self.view {
                    AppView::Timer => self.handle_timer_input(key),
                    AppView::Help => self.handle_help_input(key),
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match self.view {
                    AppView::Timer => self.handle_timer_click(mouse.column, mouse.row),
                    AppView::Help => self.set_view(AppView::Timer),
                }
            }
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.is_running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{controls::Action, theme};
    use countdown_core::{Digit, Duration as Secs, ManualScheduler, TimerState};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::{Terminal, backend::TestBackend};

    fn new_app() -> (ManualScheduler, App<ManualScheduler>) {
        let scheduler = ManualScheduler::new();
        let mut app = App::new(scheduler.clone(), &theme::DEFAULT);
        app.is_running = true;
        (scheduler, app)
    }

    fn press(app: &mut App<ManualScheduler>, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn click(app: &mut App<ManualScheduler>, column: u16, row: u16) {
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    /// Draws `app` and returns the screen as text, one line per row.
    fn render(app: &mut App<ManualScheduler>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(50, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    fn zone_center(app: &App<ManualScheduler>, action: Action) -> (u16, u16) {
        let zone = app
            .state
            .hit_zones
            .iter()
            .find(|z| z.action == action)
            .expect("action should be on screen");
        (
            zone.area.x + zone.area.width / 2,
            zone.area.y + zone.area.height / 2,
        )
    }

    #[test]
    fn test_keyboard_flow() {
        let (scheduler, mut app) = new_app();

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.state.timer.state(), TimerState::Stopped(Secs::from_secs(85)));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.timer.state(), TimerState::Running(Secs::from_secs(85)));

        scheduler.advance(5000);
        assert_eq!(app.state.timer.state(), TimerState::Running(Secs::from_secs(80)));

        // digits do nothing while running
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.timer.state(), TimerState::Paused(Secs::from_secs(80)));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.timer.state(), TimerState::Stopped(Secs::ZERO));
        assert_eq!(scheduler.active_ticks(), 0);
        assert!(app.is_running);
    }

    #[test]
    fn test_start_is_disabled_at_zero() {
        let (scheduler, mut app) = new_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state.timer.state(), TimerState::Stopped(Secs::ZERO));
        assert_eq!(scheduler.active_ticks(), 0);

        let screen = render(&mut app);
        assert!(!app.state.hit_zones.iter().any(|z| z.action == Action::Start));
        assert!(screen.contains("start"));
    }

    #[test]
    fn test_render_follows_state() {
        let (scheduler, mut app) = new_app();

        let screen = render(&mut app);
        assert!(screen.contains("Stopped · 00:00"));
        assert!(screen.contains("⌫"));
        assert!(!screen.contains("pause"));

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Enter);
        scheduler.advance(3000);

        let screen = render(&mut app);
        assert!(screen.contains("Running · 00:07"));
        assert!(screen.contains("pause"));
        assert!(!screen.contains("⌫"));
        assert!(!screen.contains("start"));

        press(&mut app, KeyCode::Char(' '));
        let screen = render(&mut app);
        assert!(screen.contains("Paused · 00:07"));
        assert!(screen.contains("resume"));
        assert!(screen.contains("stop"));
    }

    #[test]
    fn test_mouse_flow() {
        let (scheduler, mut app) = new_app();
        render(&mut app);

        let five = Action::Digit(Digit::try_from(5u8).unwrap());
        let (x, y) = zone_center(&app, five);
        click(&mut app, x, y);
        click(&mut app, x, y);
        assert_eq!(app.state.timer.state(), TimerState::Stopped(Secs::from_secs(55)));

        let (x, y) = zone_center(&app, Action::Delete);
        click(&mut app, x, y);
        assert_eq!(app.state.timer.state(), TimerState::Stopped(Secs::from_secs(5)));

        // start only becomes clickable once drawn enabled
        render(&mut app);
        let (x, y) = zone_center(&app, Action::Start);
        click(&mut app, x, y);
        assert_eq!(app.state.timer.state(), TimerState::Running(Secs::from_secs(5)));

        // a stale click on where the keypad used to be is ignored
        let (x, y) = zone_center(&app, five);
        click(&mut app, x, y);
        assert_eq!(app.state.timer.state(), TimerState::Running(Secs::from_secs(5)));

        render(&mut app);
        let (x, y) = zone_center(&app, Action::Pause);
        scheduler.advance(2000);
        click(&mut app, x, y);
        assert_eq!(app.state.timer.state(), TimerState::Paused(Secs::from_secs(3)));
    }

    #[test]
    fn test_help_keeps_countdown_running() {
        let (scheduler, mut app) = new_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.view, AppView::Help);
        assert!(render(&mut app).contains("Keyboard Controls"));

        // keys are not forwarded to the timer while help is open
        press(&mut app, KeyCode::Char(' '));
        scheduler.advance(1000);
        assert_eq!(app.state.timer.state(), TimerState::Running(Secs::from_secs(2)));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, AppView::Timer);
        scheduler.advance(2000);
        assert_eq!(app.state.timer.state(), TimerState::Stopped(Secs::ZERO));
    }

    #[test]
    fn test_quit_keys() {
        let (_scheduler, mut app) = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.is_running);

        let (_scheduler, mut app) = new_app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(!app.is_running);
    }
}
