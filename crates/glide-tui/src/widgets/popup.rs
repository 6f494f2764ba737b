use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::input::Action;
use crate::keymap::Keymap;
use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key binding overview
    pub fn render_help(frame: &mut Frame, keymap: &Keymap, theme: &Theme) {
        let area = frame.area();

        let mut lines: Vec<Line<'_>> = keymap
            .entries()
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:>8}  ", key),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(describe(*action), Style::default().fg(theme.fg)),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "Press any key to close",
                Style::default().fg(theme.dim),
            ))
            .alignment(Alignment::Center),
        );

        let popup_width = 48u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.status_bg));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

fn describe(action: Action) -> &'static str {
    match action {
        Action::Command(command) => command.description(),
        Action::ToggleHelp => "Toggle this help",
        Action::ExitMode => "Close popup",
        Action::None => "",
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(20, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(30, 7, 20, 10));
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let rect = centered_rect(100, 30, Rect::new(0, 0, 80, 24));
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 0);
    }
}
