//! Scroll viewport over a [`ContentBuffer`]
//!
//! The viewport owns the content and two positions: `offset`, the top-left
//! corner rendered this frame, and `target`, where the current animation is
//! heading. Both are clamped to the valid range on every mutation, so the
//! render loop can slice content with `offset` without further checks.

use std::time::Duration;

use glide_core::{ContentBuffer, Size};
use tracing::debug;

use super::animation::ScrollAnimation;
use super::command::{Command, Effect, Motion};
use super::config::{ScrollConfig, ScrollConfigExt};

/// Top-left scroll position in content coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: usize,
    pub y: usize,
}

impl Offset {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Component-wise minimum
    pub fn min(self, other: Offset) -> Offset {
        Offset::new(self.x.min(other.x), self.y.min(other.y))
    }
}

/// Animation state of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollState {
    /// `offset == target`
    Idle,
    /// An animation is moving `offset` toward `target`
    Converging,
}

/// Outcome of dispatching a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Viewport<L> {
    content: ContentBuffer<L>,
    visible: Size,
    offset: Offset,
    target: Offset,
    animation: Option<ScrollAnimation>,
    config: ScrollConfig,
}

impl<L> Viewport<L> {
    pub fn new(content: ContentBuffer<L>, visible: Size, config: ScrollConfig) -> Self {
        Self {
            content,
            visible,
            offset: Offset::default(),
            target: Offset::default(),
            animation: None,
            config,
        }
    }

    /// Replace the scroll configuration; an in-flight animation keeps its timing
    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    #[inline]
    pub fn visible_size(&self) -> Size {
        self.visible
    }

    #[inline]
    pub fn virtual_size(&self) -> Size {
        self.content.size()
    }

    /// Offset to render this frame
    #[inline]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Offset the viewport is converging toward
    #[inline]
    pub fn target(&self) -> Offset {
        self.target
    }

    pub fn state(&self) -> ScrollState {
        if self.offset == self.target {
            ScrollState::Idle
        } else {
            ScrollState::Converging
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Largest valid offset for the current visible size
    pub fn max_offset(&self) -> Offset {
        let virtual_size = self.content.size();
        Offset::new(
            virtual_size.width.saturating_sub(self.visible.width),
            virtual_size.height.saturating_sub(self.visible.height),
        )
    }

    /// Lines covering `[offset.y, offset.y + visible.height)`
    pub fn visible_lines(&self) -> &[L] {
        self.content.slice(self.offset.y, self.visible.height)
    }

    /// Dispatch a navigation command
    pub fn apply(&mut self, command: Command) -> Dispatch {
        match command.effect() {
            Effect::Instant(motion) => {
                let to = self.resolve(motion);
                self.jump_to(to);
            }
            Effect::Animated(motion) => {
                let to = self.resolve(motion);
                if self.config.is_smooth() {
                    self.animate_to(to);
                } else {
                    self.jump_to(to);
                }
            }
            Effect::Quit => return Dispatch::Quit,
        }
        Dispatch::Continue
    }

    /// Move offset and target together, dropping any animation
    pub fn jump_to(&mut self, to: Offset) {
        let to = to.min(self.max_offset());
        self.offset = to;
        self.target = to;
        self.animation = None;
    }

    /// Start (or retarget) an animation from the current offset
    pub fn animate_to(&mut self, to: Offset) {
        let to = to.min(self.max_offset());
        self.target = to;
        if self.offset == to {
            self.animation = None;
            return;
        }
        debug!(from = ?self.offset, to = ?to, "scroll animation started");
        self.animation = Some(ScrollAnimation::new(
            self.offset,
            to,
            self.config.animation_duration(),
            self.config.easing,
        ));
    }

    /// Advance the animation by `elapsed` and return the offset to render
    pub fn step(&mut self, elapsed: Duration) -> Offset {
        let max = self.max_offset();
        let mut done = false;

        if let Some(animation) = self.animation.as_mut() {
            self.offset = animation.advance(elapsed).min(max);
            done = animation.is_complete() || self.offset == self.target;
        }

        if done {
            self.offset = self.target;
            self.animation = None;
            debug!(offset = ?self.offset, "scroll animation finished");
        }

        self.offset
    }

    /// Change the visible size and re-clamp both positions immediately
    pub fn resize(&mut self, visible: Size) -> Offset {
        self.visible = visible;
        let max = self.max_offset();
        self.offset = self.offset.min(max);
        self.target = self.target.min(max);

        if self.offset == self.target {
            self.animation = None;
        } else if let Some(animation) = self.animation.as_mut() {
            animation.rebase(self.offset, self.target);
        }

        self.offset
    }

    /// Resolve a motion against the current target and clamp the result
    fn resolve(&self, motion: Motion) -> Offset {
        let x = self.target.x as i64;
        let y = self.target.y as i64;
        let page = self.visible.height as i64;

        let (x, y) = match motion {
            Motion::Lines(n) => (x, y.saturating_add(n)),
            Motion::Columns(n) => (x.saturating_add(n), y),
            Motion::Pages(n) => (x, y.saturating_add(n.saturating_mul(page))),
            Motion::HalfPages(n) => (x, y.saturating_add(n.saturating_mul(page / 2))),
            Motion::Start => (0, 0),
            Motion::End => (0, self.content.height() as i64 - page),
        };

        let max = self.max_offset();
        Offset::new(
            x.clamp(0, max.x as i64) as usize,
            y.clamp(0, max.y as i64) as usize,
        )
    }
}
