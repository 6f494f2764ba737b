use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

use crate::app::App;

pub struct PagerWidget;

impl PagerWidget {
    /// Draw the lines under the viewport's current offset
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let offset = app.viewport.offset();
        let lines = app.viewport.visible_lines().to_vec();
        let x = u16::try_from(offset.x).unwrap_or(u16::MAX);

        let paragraph = Paragraph::new(lines)
            .scroll((0, x))
            .style(Style::default().fg(app.theme.fg).bg(app.theme.bg));

        frame.render_widget(paragraph, area);
    }
}
