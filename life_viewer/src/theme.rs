// theme.rs - Colors resolved from the [viewer.colors] section

use egui::Color32;

use crate::config::{ColorConfig, Rgb};

fn rgb([r, g, b]: Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background : Color32,
    pub dead       : Color32,
    pub alive      : Color32,
    pub hover      : Color32,
    pub neighbor   : Color32,
    pub grid_line  : Color32,
}

impl From<&ColorConfig> for Theme {
    fn from(colors: &ColorConfig) -> Self {
        Self {
            background: rgb(colors.background),
            dead: rgb(colors.dead),
            alive: rgb(colors.alive),
            hover: rgb(colors.hover),
            neighbor: rgb(colors.neighbor),
            grid_line: rgb(colors.grid_line),
        }
    }
}

impl Theme {
    /// Fill for a cell, hover winning over neighbor highlight over state.
    pub fn cell_fill(&self, alive: bool, hovered: bool, neighbor: bool) -> Color32 {
        if hovered {
            self.hover
        } else if neighbor {
            self.neighbor
        } else if alive {
            self.alive
        } else {
            self.dead
        }
    }
}
