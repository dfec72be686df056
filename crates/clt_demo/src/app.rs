use std::io;

use clt_demo_core::DemoController;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::components::{Component, EventResult, slider::SliderPanel, status_bar::StatusBar};
use crate::event::AppKeyEvent;
use crate::keybindings::KeyAction;
use crate::screens::demo::DemoScreen;
use crate::state::AppState;
use crate::util::styles::HEADER_COLOR;

const TITLE: &str = "Central Limit Theorem Demonstration";

pub struct App {
    state: AppState,
    demo_screen: DemoScreen,
    slider_panel: SliderPanel,
    status_bar: StatusBar,
}

impl App {
    pub fn new(controller: DemoController) -> Self {
        Self {
            state: AppState::new(controller),
            demo_screen: DemoScreen::new(),
            slider_panel: SliderPanel::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(0),    // Panels
                Constraint::Length(4), // Sliders
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        let title = Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD));
        frame.render_widget(title, chunks[0]);

        self.demo_screen.render(frame, chunks[1], &self.state);
        self.slider_panel.render(frame, chunks[2], &self.state);
        self.status_bar.render(frame, chunks[3], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(&AppKeyEvent::from(key_event))
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: &AppKeyEvent) {
        let components: [&mut dyn Component; 3] = [
            &mut self.slider_panel,
            &mut self.demo_screen,
            &mut self.status_bar,
        ];
        for component in components {
            match component.handle_key(key, &mut self.state) {
                EventResult::Handled => return,
                EventResult::Exit => {
                    self.state.apply(KeyAction::Quit);
                    return;
                }
                EventResult::NotHandled => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use clt_demo_core::DemoConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn test_app() -> App {
        let config = DemoConfig {
            population_size: 2_000,
            num_samples: 200,
            ..Default::default()
        };
        App::new(DemoController::with_seed(config, 42).unwrap())
    }

    #[test]
    fn test_key_sequence_updates_sliders() {
        let mut app = test_app();
        app.handle_key_event(&AppKeyEvent::plain(KeyCode::End));
        app.handle_key_event(&AppKeyEvent::plain(KeyCode::Tab));
        app.handle_key_event(&AppKeyEvent::plain(KeyCode::PageUp));

        let sliders = app.state().controller.sliders();
        assert_eq!(sliders.mean, 5.0);
        assert!((sliders.std_dev - 1.5).abs() < 1e-9);
        assert_eq!(app.state().controller.snapshot().sliders, sliders);
        assert!(!app.state().exit);
    }

    #[test]
    fn test_quit_key_exits() {
        let mut app = test_app();
        app.handle_key_event(&AppKeyEvent::plain(KeyCode::Char('q')));
        assert!(app.state().exit);
    }

    #[test]
    fn test_full_screen_render() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(text.contains(TITLE));
        assert!(text.contains("Population Mean"));
        assert!(text.contains("Population Std Dev"));
        assert!(text.contains("Sample Mean: "));
        assert!(text.contains("q: quit"));
    }
}
