use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Widget,
};

use crate::{report::Report, ui::widgets::style};

/// Renders a report as titled sections of label/value rows.
pub struct ReportDisplay<'a> {
    report: &'a Report,
}

impl<'a> ReportDisplay<'a> {
    #[must_use]
    pub fn new(report: &'a Report) -> Self {
        Self { report }
    }
}

enum Row {
    Empty,
    Title(String),
    LabelValue(String, String),
}

fn rows(report: &Report) -> Vec<Row> {
    let mut rows = Vec::new();
    for (i, section) in report.sections().into_iter().enumerate() {
        if i > 0 {
            rows.push(Row::Empty);
        }
        rows.push(Row::Title(section.title));
        for (label, value) in section.rows {
            rows.push(Row::LabelValue(label, value));
        }
    }
    rows
}

impl Widget for ReportDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = rows(self.report);
        let row_areas =
            Layout::vertical(rows.iter().map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(rows, row_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::Title(title) => {
                    Line::styled(title, style::SECTION_TITLE)
                        .left_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] =
                        Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)])
                            .areas(area);
                    Line::styled(label, style::DEFAULT)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value, style::DEFAULT)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
