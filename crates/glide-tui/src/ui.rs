use ratatui::Frame;

use crate::app::{App, Mode};
use crate::keymap::Keymap;
use crate::widgets::{pager_layout, PagerWidget, PopupWidget, StatusBarWidget};

/// Compose one frame: content, status line and the help popup when open
pub fn draw(frame: &mut Frame, app: &mut App, keymap: &Keymap) {
    let size = frame.area();
    app.resize_to(size);

    let (content_area, status_area) = pager_layout(size, app.config.ui.show_status_bar);
    PagerWidget::render(frame, content_area, app);
    if let Some(area) = status_area {
        StatusBarWidget::render(frame, area, app);
    }

    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, keymap, &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glide_core::AppConfig;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::content::{parse_content, ContentOptions};
    use crate::input::Action;
    use crate::scroll::Command;
    use crate::theme::Theme;

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
    }

    fn app(lines: usize) -> App {
        let text: String = (0..lines).map(|i| format!("row {:02} abcdefgh\n", i)).collect();
        let options = ContentOptions {
            width: Some(60),
            ..Default::default()
        };
        let content = parse_content(text.as_bytes(), options).unwrap();
        App::new(content, "demo.txt", Arc::new(AppConfig::default()), Theme::default())
    }

    #[test]
    fn test_draw_first_page_and_status() {
        let mut app = app(30);
        let keymap = Keymap::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();

        terminal.draw(|f| draw(f, &mut app, &keymap)).unwrap();

        let buffer = terminal.backend().buffer();
        assert!(row(buffer, 0).starts_with("row 00"));
        assert!(row(buffer, 4).starts_with("row 04"));
        let status = row(buffer, 5);
        assert!(status.contains("demo.txt"), "status = {:?}", status);
        assert!(status.contains("1-5/30"), "status = {:?}", status);
    }

    #[test]
    fn test_status_bar_fits_wide_title() {
        let mut app = app(30);
        app.title = "日本語".to_string();
        let keymap = Keymap::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();

        terminal.draw(|f| draw(f, &mut app, &keymap)).unwrap();

        // Title takes 6 columns, so the hint still ends at the right edge
        let status = row(terminal.backend().buffer(), 5);
        assert!(status.ends_with("?:help q:quit "), "status = {:?}", status);
        assert!(status.contains("1-5/30"), "status = {:?}", status);
    }

    #[test]
    fn test_draw_follows_offset() {
        let mut app = app(30);
        let keymap = Keymap::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal.draw(|f| draw(f, &mut app, &keymap)).unwrap();

        app.handle_action(Action::Command(Command::FullPageDown));
        app.handle_action(Action::Command(Command::ScrollRight));
        terminal.draw(|f| draw(f, &mut app, &keymap)).unwrap();

        let buffer = terminal.backend().buffer();
        assert!(row(buffer, 0).starts_with("ow 05"), "row = {:?}", row(buffer, 0));
    }

    #[test]
    fn test_draw_help_popup() {
        let mut app = app(30);
        app.handle_action(Action::ToggleHelp);
        let keymap = Keymap::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();

        terminal.draw(|f| draw(f, &mut app, &keymap)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = (0..24).map(|y| row(buffer, y)).collect();
        assert!(screen.contains(" Keys "));
        assert!(screen.contains("Smooth scroll down half a page"));
    }
}
