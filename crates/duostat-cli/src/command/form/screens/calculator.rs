use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Text,
};

use crate::{
    report::{InputError, Report, build_report},
    ui::widgets::{ReportDisplay, TextField, TextFieldState, style},
};

const FIELD_COUNT: usize = 2;

/// The two-field calculator form.
///
/// Each Enter press runs a complete parse/compute pass over the current
/// field text; the previous outcome is replaced wholesale, so the only
/// state carried between activations is the field text itself.
#[derive(Debug)]
pub struct CalculatorScreen {
    fields: [TextFieldState; FIELD_COUNT],
    focus: usize,
    outcome: Option<Result<Report, InputError>>,
    should_exit: bool,
}

impl CalculatorScreen {
    #[must_use]
    pub fn new(first: String, second: String) -> Self {
        Self {
            fields: [TextFieldState::new(first), TextFieldState::new(second)],
            focus: 0,
            outcome: None,
            should_exit: false,
        }
    }

    pub(crate) fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub(crate) fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Esc => self.should_exit = true,
                KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_exit = true;
                }
                KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % FIELD_COUNT,
                KeyCode::BackTab | KeyCode::Up => {
                    self.focus = self.focus.checked_sub(1).unwrap_or(FIELD_COUNT - 1);
                }
                KeyCode::Enter => self.calculate(),
                KeyCode::Backspace => self.fields[self.focus].pop(),
                KeyCode::Char(c) if !event.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.fields[self.focus].push(c);
                }
                _ => {}
            }
        }
    }

    fn calculate(&mut self) {
        self.outcome = Some(build_report(
            self.fields[0].value(),
            self.fields[1].value(),
        ));
    }

    pub fn draw(&self, frame: &mut Frame) {
        let [title_area, first_area, second_area, result_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(TextField::HEIGHT),
            Constraint::Length(TextField::HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let title = Text::from("duostat").style(style::SECTION_TITLE).centered();
        frame.render_widget(title, title_area);

        frame.render_widget(
            TextField::new(
                "First list of numbers (required)",
                &self.fields[0],
                self.focus == 0,
            ),
            first_area,
        );
        frame.render_widget(
            TextField::new(
                "Second list of numbers (optional)",
                &self.fields[1],
                self.focus == 1,
            ),
            second_area,
        );

        match &self.outcome {
            None => {
                let hint = Text::from("Fill in a list like 1,2,3 and press Enter to calculate.")
                    .style(style::HELP);
                frame.render_widget(hint, result_area);
            }
            Some(Err(error)) => {
                let message = Text::from(error.to_string()).style(style::ERROR);
                frame.render_widget(message, result_area);
            }
            Some(Ok(report)) => {
                frame.render_widget(ReportDisplay::new(report), result_area);
            }
        }

        let help_text = Text::from("Tab/↑/↓: Switch field | Enter: Calculate | Esc: Quit")
            .style(style::HELP)
            .centered();
        frame.render_widget(help_text, help_area);
    }
}
