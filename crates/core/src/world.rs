//! World - the two synchronized grids plus the art needed to paint them.

use tracing::warn;

use crate::action_map::ActionMap;
use crate::catalog::{GlyphKey, SymbolCatalog};
use crate::display::DisplayBuffer;
use crate::error::{LevelError, Result};
use crate::transform::{BlockSize, Cell, DisplayPos, Transform};

/// Action map, display buffer and the transform between them.
///
/// Entities and the player mutate both grids through this type.
#[derive(Debug, Clone)]
pub struct World {
    catalog: SymbolCatalog,
    transform: Transform,
    actions: ActionMap,
    display: DisplayBuffer,
}

impl World {
    /// Build the world and render the display buffer from the action map.
    ///
    /// Every symbol on the map must have art in the catalog.
    pub fn new(actions: ActionMap, catalog: SymbolCatalog) -> Result<Self> {
        for symbol in actions.symbols() {
            if !catalog.contains(GlyphKey::Cell(symbol)) {
                return Err(LevelError::MissingGlyph(GlyphKey::Cell(symbol)));
            }
        }

        let transform = Transform::new(catalog.block(), actions.cols());
        let display = DisplayBuffer::rebuild(&actions, &catalog);
        Ok(Self {
            catalog,
            transform,
            actions,
            display,
        })
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn block(&self) -> BlockSize {
        self.transform.block()
    }

    pub fn actions(&self) -> &ActionMap {
        &self.actions
    }

    pub fn display(&self) -> &DisplayBuffer {
        &self.display
    }

    /// Paint frame `frame` of `key` at `pos`.
    pub fn paint(&mut self, key: impl Into<GlyphKey>, pos: DisplayPos, frame: usize) {
        let key = key.into();
        match self.catalog.frame(key, frame) {
            Some(art) => self.display.paint(art, pos),
            None => warn!(%key, "no art for glyph, skipping paint"),
        }
    }

    /// Symbol on the action map under a display position.
    pub fn symbol_at(&self, pos: DisplayPos) -> Option<char> {
        self.actions.get(self.transform.to_logical(pos))
    }

    /// Move the symbol at `from` to `to`, leaving `replace` behind.
    pub fn move_symbol(&mut self, from: Cell, to: Cell, replace: char) {
        let Some(symbol) = self.actions.get(from) else {
            return;
        };
        self.actions.set(from, replace);
        self.actions.set(to, symbol);
    }
}
