use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let base = Style::default().fg(theme.status_fg).bg(theme.status_bg);

        let viewport = &app.viewport;
        let total = viewport.virtual_size().height;
        let first = viewport.offset().y;
        let last = (first + viewport.visible_size().height).min(total);
        let range = if total == 0 {
            "empty".to_string()
        } else {
            format!("{}-{}/{}", first + 1, last, total)
        };

        let left = format!(" {} ", app.title);
        let right = format!(" {}  {} ", range, position_label(app));
        let hint = " ?:help q:quit ";
        let marker = if viewport.is_animating() { " ~ " } else { "   " };

        let used = left.width() + right.width() + hint.width() + marker.width();
        let padding = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(left, base.add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(padding), base),
            Span::styled(marker, base.fg(theme.accent)),
            Span::styled(right, base),
            Span::styled(hint, base.fg(theme.dim)),
        ]);

        frame.render_widget(Paragraph::new(line).style(base), area);
    }
}

/// Vim-style position: All, Top, Bot or a percentage
pub fn position_label(app: &App) -> String {
    let max = app.viewport.max_offset().y;
    let y = app.viewport.offset().y;
    if max == 0 {
        "All".to_string()
    } else if y == 0 {
        "Top".to_string()
    } else if y >= max {
        "Bot".to_string()
    } else {
        format!("{}%", y * 100 / max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::input::Action;
    use crate::scroll::Command;

    #[test]
    fn test_position_label() {
        assert_eq!(position_label(&test_app(5, 20)), "All");

        let mut app = test_app(120, 20);
        assert_eq!(position_label(&app), "Top");
        app.handle_action(Action::Command(Command::HalfPageDown));
        assert_eq!(position_label(&app), "10%");
        app.handle_action(Action::Command(Command::JumpToEnd));
        assert_eq!(position_label(&app), "Bot");
    }
}
