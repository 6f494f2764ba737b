use std::sync::Arc;
use std::time::{Duration, Instant};

use glide_core::{AppConfig, Size};
use ratatui::layout::Rect;
use ratatui::text::Line;
use tracing::{debug, info};

use crate::content::PagerContent;
use crate::input::Action;
use crate::scroll::{Dispatch, Offset, Viewport};
use crate::theme::Theme;
use crate::widgets::pager_layout;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Paging through content
    Normal,
    /// Help overlay
    Help,
}

/// State of one pager session
pub struct App {
    /// Scroll state over the session's content
    pub viewport: Viewport<Line<'static>>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub mode: Mode,
    /// Shown in the status bar
    pub title: String,
    /// Whether the session has ended
    pub should_quit: bool,
    /// When the previous animation frame was stepped
    last_frame: Option<Instant>,
}

impl App {
    pub fn new(
        content: PagerContent,
        title: impl Into<String>,
        config: Arc<AppConfig>,
        theme: Theme,
    ) -> Self {
        let viewport = Viewport::new(content, Size::default(), config.ui.scroll.clone());
        Self {
            viewport,
            config,
            theme,
            mode: Mode::Normal,
            title: title.into(),
            should_quit: false,
            last_frame: None,
        }
    }

    /// Apply an input action
    pub fn handle_action(&mut self, action: Action) {
        if self.should_quit {
            return;
        }

        match action {
            Action::Command(command) => {
                if self.viewport.apply(command) == Dispatch::Quit {
                    info!("Quit requested");
                    self.should_quit = true;
                }
            }
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    Mode::Normal => Mode::Help,
                    Mode::Help => Mode::Normal,
                };
            }
            Action::ExitMode => self.mode = Mode::Normal,
            Action::None => {}
        }
    }

    /// Step the scroll animation with wall-clock time since the last frame
    pub fn update_scroll_animation(&mut self) {
        if !self.viewport.is_animating() {
            self.last_frame = None;
            return;
        }

        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map(|last| now.duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);
        self.advance(elapsed);
    }

    /// Step the scroll animation by an explicit amount of time
    pub fn advance(&mut self, elapsed: Duration) -> Offset {
        self.viewport.step(elapsed)
    }

    /// Whether the event loop should poll at animation frame rate
    #[inline]
    pub fn needs_scroll_update(&self) -> bool {
        self.viewport.is_animating()
    }

    /// Fit the viewport to the content area of a terminal of size `area`
    pub fn resize_to(&mut self, area: Rect) -> Offset {
        let (content, _) = pager_layout(area, self.config.ui.show_status_bar);
        let visible = Size::new(content.width as usize, content.height as usize);
        if visible == self.viewport.visible_size() {
            return self.viewport.offset();
        }
        debug!(width = visible.width, height = visible.height, "viewport resized");
        self.viewport.resize(visible)
    }
}
