use serde::{Deserialize, Serialize};

/// Conversion from logical grid cells to pixel positions in the design
/// window.
///
/// `pixel = (index * cell + margin) * scale - (cell + margin)`; each further
/// cell moves `cell * scale` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    /// Cell size in pixels
    pub cell: i64,
    /// Margin added to every cell
    pub margin: i64,
    pub x_scale: i64,
    pub y_scale: i64,
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cell: 40,
            margin: 3,
            x_scale: 3,
            y_scale: 2,
        }
    }

    pub fn with_cell(mut self, cell: i64, margin: i64) -> Self {
        self.cell = cell;
        self.margin = margin;
        self
    }

    pub fn with_scale(mut self, x_scale: i64, y_scale: i64) -> Self {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self
    }

    /// Horizontal pixel position of a 1-based column; unset or 0 means 1
    pub fn x(&self, column: Option<u32>) -> i64 {
        self.project(column, self.x_scale)
    }

    /// Vertical pixel position of a 1-based row; unset or 0 means 1
    pub fn y(&self, row: Option<u32>) -> i64 {
        self.project(row, self.y_scale)
    }

    fn project(&self, index: Option<u32>, scale: i64) -> i64 {
        let index = match index {
            Some(0) | None => 1,
            Some(index) => i64::from(index),
        };
        (index * self.cell + self.margin) * scale - (self.cell + self.margin)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_positions() {
        let grid = Grid::default();
        assert_eq!(grid.x(Some(1)), 86);
        assert_eq!(grid.y(Some(1)), 43);
        assert_eq!(grid.x(Some(2)), 206);
        assert_eq!(grid.y(Some(3)), 203);
    }

    #[test]
    fn test_unset_position_defaults_to_first_cell() {
        let grid = Grid::default();
        assert_eq!(grid.x(None), grid.x(Some(1)));
        assert_eq!(grid.y(Some(0)), grid.y(Some(1)));
    }

    #[test]
    fn test_custom_grid() {
        let grid = Grid::new().with_cell(10, 0).with_scale(1, 1);
        assert_eq!(grid.x(Some(1)), 0);
        assert_eq!(grid.x(Some(4)), 30);
    }

    #[test]
    fn test_partial_grid_deserializes_with_defaults() {
        let grid: Grid = serde_json::from_str(r#"{ "x_scale": 4 }"#).unwrap();
        assert_eq!(grid, Grid::new().with_scale(4, 2));
    }
}
