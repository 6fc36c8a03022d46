pub use self::{report_display::*, text_field::*};

mod report_display;
mod text_field;

pub mod style {
    use ratatui::style::{Color, Style};

    const fn fg(color: Color) -> Style {
        Style::new().fg(color)
    }

    pub const DEFAULT: Style = fg(Color::White);
    pub const SECTION_TITLE: Style = fg(Color::Cyan);
    pub const FIELD_FOCUSED: Style = fg(Color::Yellow);
    pub const ERROR: Style = fg(Color::Red);
    pub const HELP: Style = fg(Color::DarkGray);
    pub const CURSOR: Style = Style::new().fg(Color::Black).bg(Color::White);
}
