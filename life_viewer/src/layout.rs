// layout.rs - Mapping between grid cells and screen space

use egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::config::ViewerConfig;

/// Where the board sits on screen and how big a cell is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub origin : Pos2,
    pub tile   : f32,
    pub gap    : f32,
    pub cols   : i32,
    pub rows   : i32,
}

impl Layout {
    pub fn new(origin: Pos2, viewer: &ViewerConfig, cols: i32, rows: i32) -> Self {
        Self {
            origin,
            tile: viewer.tile,
            gap: viewer.gap,
            cols,
            rows,
        }
    }

    pub fn board_size(&self) -> Vec2 {
        vec2(self.cols as f32 * self.tile, self.rows as f32 * self.tile)
    }

    pub fn board_rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.board_size())
    }

    /// Drawn area of one cell, inset by the gap.
    pub fn cell_rect(&self, col: i32, row: i32) -> Rect {
        let min = self.origin + vec2(col as f32 * self.tile, row as f32 * self.tile);
        Rect::from_min_size(min, Vec2::splat(self.tile - self.gap))
    }

    /// Cell under `pos`. May lie off the board; the engine ignores those.
    pub fn cell_at(&self, pos: Pos2) -> (i32, i32) {
        let local = pos - self.origin;
        (
            (local.x / self.tile).floor() as i32,
            (local.y / self.tile).floor() as i32,
        )
    }
}

/// Window size that fits the control panel next to a `cols` x `rows` board.
pub fn window_size(viewer: &ViewerConfig, cols: i32, rows: i32) -> [f32; 2] {
    let pad = viewer.padding;
    let width = viewer.panel_width + pad * 3.0 + cols as f32 * viewer.tile;
    let height = (pad * 2.0 + rows as f32 * viewer.tile).max(680.0);
    [width, height]
}

/// Top-left of the board inside the central panel.
pub fn board_origin(panel: Rect, viewer: &ViewerConfig) -> Pos2 {
    pos2(panel.min.x + viewer.padding, panel.min.y + viewer.padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        let viewer = ViewerConfig {
            tile: 10.0,
            gap: 1.0,
            ..Default::default()
        };
        Layout::new(pos2(100.0, 50.0), &viewer, 20, 10)
    }

    #[test]
    fn pointer_maps_to_cell() {
        let layout = layout();
        assert_eq!(layout.cell_at(pos2(100.0, 50.0)), (0, 0));
        assert_eq!(layout.cell_at(pos2(109.9, 59.9)), (0, 0));
        assert_eq!(layout.cell_at(pos2(110.0, 60.0)), (1, 1));
        assert_eq!(layout.cell_at(pos2(295.0, 145.0)), (19, 9));
    }

    #[test]
    fn pointer_outside_board_gives_out_of_range_cells() {
        let layout = layout();
        assert_eq!(layout.cell_at(pos2(95.0, 50.0)), (-1, 0));
        assert_eq!(layout.cell_at(pos2(300.0, 150.0)), (20, 10));
    }

    #[test]
    fn cell_rect_round_trips() {
        let layout = layout();
        let rect = layout.cell_rect(7, 3);
        assert_eq!(rect.min, pos2(170.0, 80.0));
        assert_eq!(rect.size(), Vec2::splat(9.0));
        assert_eq!(layout.cell_at(rect.center()), (7, 3));
    }

    #[test]
    fn board_rect_covers_every_cell() {
        let layout = layout();
        assert_eq!(layout.board_rect().max, pos2(300.0, 150.0));
    }

    #[test]
    fn window_fits_board_and_panel() {
        let viewer = ViewerConfig::default();
        let [w, h] = window_size(&viewer, 80, 60);
        assert_eq!(w, 290.0 + 42.0 + 800.0);
        assert_eq!(h, 680.0);
    }
}
