//! Declarative command table for the pager viewport
//!
//! Every navigation command maps to exactly one [`Effect`]. Instant effects
//! snap the viewport; animated effects only move the animation target.

/// A movement expressed in content coordinates, resolved against the
/// viewport's visible and virtual size at dispatch time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Vertical movement by a number of lines
    Lines(i64),
    /// Horizontal movement by a number of columns
    Columns(i64),
    /// Vertical movement by whole visible heights
    Pages(i64),
    /// Vertical movement by half the visible height (rounded down)
    HalfPages(i64),
    /// Top-left corner of the content
    Start,
    /// Last page, with the horizontal position reset
    End,
}

/// What dispatching a command does to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Offset and target are assigned together; no animation frames
    Instant(Motion),
    /// Only the target moves; the offset converges over later steps
    Animated(Motion),
    /// End the pager session
    Quit,
}

/// Navigation commands understood by the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    LineDown,
    LineUp,
    /// Less-style page down (space)
    PageDown,
    HalfPageDownAnimated,
    HalfPageUpAnimated,
    FullPageDown,
    FullPageUp,
    HalfPageDown,
    HalfPageUp,
    JumpToStart,
    JumpToEnd,
    ScrollLeft,
    ScrollRight,
    Quit,
}

impl Command {
    pub const ALL: [Command; 14] = [
        Command::LineDown,
        Command::LineUp,
        Command::PageDown,
        Command::HalfPageDownAnimated,
        Command::HalfPageUpAnimated,
        Command::FullPageDown,
        Command::FullPageUp,
        Command::HalfPageDown,
        Command::HalfPageUp,
        Command::JumpToStart,
        Command::JumpToEnd,
        Command::ScrollLeft,
        Command::ScrollRight,
        Command::Quit,
    ];

    pub const fn effect(self) -> Effect {
        match self {
            Command::LineDown => Effect::Instant(Motion::Lines(1)),
            Command::LineUp => Effect::Instant(Motion::Lines(-1)),
            Command::PageDown => Effect::Instant(Motion::Pages(1)),
            Command::HalfPageDownAnimated => Effect::Animated(Motion::HalfPages(1)),
            Command::HalfPageUpAnimated => Effect::Animated(Motion::HalfPages(-1)),
            Command::FullPageDown => Effect::Instant(Motion::Pages(1)),
            Command::FullPageUp => Effect::Instant(Motion::Pages(-1)),
            Command::HalfPageDown => Effect::Instant(Motion::HalfPages(1)),
            Command::HalfPageUp => Effect::Instant(Motion::HalfPages(-1)),
            Command::JumpToStart => Effect::Instant(Motion::Start),
            Command::JumpToEnd => Effect::Instant(Motion::End),
            Command::ScrollLeft => Effect::Instant(Motion::Columns(-1)),
            Command::ScrollRight => Effect::Instant(Motion::Columns(1)),
            Command::Quit => Effect::Quit,
        }
    }

    /// Human readable description for the help popup
    pub const fn description(self) -> &'static str {
        match self {
            Command::LineDown => "Scroll down one line",
            Command::LineUp => "Scroll up one line",
            Command::PageDown => "Scroll down one page",
            Command::HalfPageDownAnimated => "Smooth scroll down half a page",
            Command::HalfPageUpAnimated => "Smooth scroll up half a page",
            Command::FullPageDown => "Page down",
            Command::FullPageUp => "Page up",
            Command::HalfPageDown => "Half page down",
            Command::HalfPageUp => "Half page up",
            Command::JumpToStart => "Jump to first line",
            Command::JumpToEnd => "Jump to last line",
            Command::ScrollLeft => "Scroll left one column",
            Command::ScrollRight => "Scroll right one column",
            Command::Quit => "Quit",
        }
    }
}
