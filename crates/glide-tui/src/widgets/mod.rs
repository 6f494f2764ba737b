mod pager;
mod popup;
mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub use pager::PagerWidget;
pub use popup::PopupWidget;
pub use status_bar::{position_label, StatusBarWidget};

/// Split the terminal into the content area and an optional status line
pub fn pager_layout(area: Rect, show_status_bar: bool) -> (Rect, Option<Rect>) {
    if !show_status_bar || area.height < 2 {
        return (area, None);
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], Some(chunks[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_status_bar() {
        let (content, status) = pager_layout(Rect::new(0, 0, 80, 24), true);
        assert_eq!(content, Rect::new(0, 0, 80, 23));
        assert_eq!(status, Some(Rect::new(0, 23, 80, 1)));
    }

    #[test]
    fn test_layout_without_status_bar() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(pager_layout(area, false), (area, None));
        let tiny = Rect::new(0, 0, 80, 1);
        assert_eq!(pager_layout(tiny, true), (tiny, None));
    }
}
