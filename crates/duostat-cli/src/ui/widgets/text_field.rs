use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::ui::widgets::style;

/// Editable single-line text state with the cursor fixed at the end.
#[derive(Debug, Clone, Default)]
pub struct TextFieldState {
    value: String,
}

impl TextFieldState {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }
}

/// Bordered single-line input box with a label title.
pub struct TextField<'a> {
    label: &'a str,
    state: &'a TextFieldState,
    focused: bool,
}

impl<'a> TextField<'a> {
    /// Rows a rendered field occupies (content plus borders).
    pub const HEIGHT: u16 = 3;

    #[must_use]
    pub fn new(label: &'a str, state: &'a TextFieldState, focused: bool) -> Self {
        Self {
            label,
            state,
            focused,
        }
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::bordered().title(self.label);
        if self.focused {
            block = block.border_style(style::FIELD_FOCUSED);
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(self.state.value(), style::DEFAULT)];
        if self.focused {
            spans.push(Span::styled(" ", style::CURSOR));
        }
        Line::from(spans).render(inner, buf);
    }
}
