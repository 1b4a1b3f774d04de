//! GameView: picks the part of the display buffer to show.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::ops::Range;

use crate::core::{DisplayPos, Game};
use crate::types::{Ending, HELP_LINE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rectangle of the display buffer, in buffer coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl Window {
    /// A `height x width` window centred on `center`, pushed back inside a
    /// `buffer_h x buffer_w` buffer when it would hang over an edge.
    pub fn centered(
        center: DisplayPos,
        height: usize,
        width: usize,
        buffer_h: usize,
        buffer_w: usize,
    ) -> Self {
        Self {
            rows: span(center.row, height, buffer_h),
            cols: span(center.col, width, buffer_w),
        }
    }
}

fn span(center: usize, len: usize, limit: usize) -> Range<usize> {
    let len = len.min(limit);
    let start = center.saturating_sub(len / 2).min(limit - len);
    start..start + len
}

/// Composes frames for the terminal.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Lines reserved under the map.
    footer: usize,
}

impl Default for GameView {
    fn default() -> Self {
        // Help line plus the closing message on the final frame.
        Self { footer: 2 }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Window of the display buffer that fits `viewport`, centred on the player.
    pub fn window(&self, game: &Game, viewport: Viewport) -> Window {
        let world = game.world();
        let block = world.block();
        let pos = game.player().pos();
        let center = DisplayPos::new(pos.row + block.rows / 2, pos.col + block.cols / 2);
        let display = world.display();

        Window::centered(
            center,
            (viewport.height as usize).saturating_sub(self.footer),
            viewport.width as usize,
            display.height(),
            display.width(),
        )
    }

    /// Lines of one frame: the visible map followed by the help line.
    pub fn compose(&self, game: &Game, viewport: Viewport) -> Vec<String> {
        let window = self.window(game, viewport);
        let mut lines = game.world().display().window(window.rows, window.cols);
        lines.push(HELP_LINE.to_string());
        lines
    }

    /// Lines of the last frame, with the closing message.
    pub fn compose_final(&self, game: &Game, viewport: Viewport) -> Vec<String> {
        let mut lines = self.compose(game, viewport);
        if let Some(ending) = game.ending() {
            lines.push(ending_message(ending));
        }
        lines
    }
}

/// Closing message for a finished session.
pub fn ending_message(ending: Ending) -> String {
    match ending {
        Ending::Died(death) => format!("Sorry but you died. {}", death.message()),
        Ending::Quit => "Thanks for playing.".to_string(),
    }
}
