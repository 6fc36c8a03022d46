use crossterm::event::Event;
use ratatui::Frame;

use crate::{command::form::screens::CalculatorScreen, tui::App};

#[derive(Debug)]
pub struct FormApp {
    screen: CalculatorScreen,
}

impl FormApp {
    #[must_use]
    pub fn new(first: String, second: String) -> Self {
        Self {
            screen: CalculatorScreen::new(first, second),
        }
    }
}

impl App for FormApp {
    fn should_exit(&self) -> bool {
        self.screen.should_exit()
    }

    fn handle_event(&mut self, event: Event) {
        self.screen.handle_event(&event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }
}
