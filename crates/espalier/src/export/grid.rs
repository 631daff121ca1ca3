//! Textual grid rendering of a coordinated tree.

use espalier_core::tree::Tree;

use super::Error;

/// Renders a coordinated tree as a line-oriented text grid.
///
/// One row per y level (row 0 first), columns in ascending x order, tokens
/// separated by single spaces, one newline after every row. Cells not
/// occupied by a node show a placeholder token.
///
/// The renderer assumes the layout invariants hold and performs no collision
/// detection; if two nodes were somehow placed on the same cell, the later
/// one in pre-order wins.
#[derive(Debug, Clone)]
pub struct TextGrid {
    placeholder: char,
}

impl TextGrid {
    /// Create a renderer with the default `.` placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder token for unoccupied cells (builder style).
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Render the grid for `tree`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCoordinates`] if any node of the tree has no
    /// coordinates yet.
    pub fn render(&self, tree: &Tree) -> Result<String, Error> {
        let mut placed = Vec::with_capacity(tree.nodes_count());
        let mut max_x = 0;
        let mut max_y = 0;

        for id in tree.iter() {
            let coord = tree
                .coord(id)
                .ok_or_else(|| Error::MissingCoordinates(tree.label(id).to_string()))?;
            max_x = max_x.max(coord.x());
            max_y = max_y.max(coord.y());
            placed.push((coord, tree.label(id)));
        }

        let mut grid = vec![vec![None::<&str>; max_x + 1]; max_y + 1];
        for (coord, label) in placed {
            grid[coord.y()][coord.x()] = Some(label);
        }

        let placeholder = self.placeholder.to_string();
        let mut out = String::new();
        for row in &grid {
            let tokens: Vec<&str> = row
                .iter()
                .map(|cell| cell.unwrap_or(placeholder.as_str()))
                .collect();
            out.push_str(&tokens.join(" "));
            out.push('\n');
        }

        Ok(out)
    }
}

impl Default for TextGrid {
    fn default() -> Self {
        Self { placeholder: '.' }
    }
}
