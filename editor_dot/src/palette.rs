use eframe::egui::Color32;
use lib_dot::Rgb;

const SWATCHES: [Rgb; 12] = [
    Rgb::new(0, 0, 0),
    Rgb::new(255, 255, 255),
    Rgb::new(128, 128, 128),
    Rgb::new(192, 192, 192),
    Rgb::new(255, 0, 0),
    Rgb::new(255, 128, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 192, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(128, 64, 0),
];

/// Fixed swatch list; the selection is the only mutable part.
pub struct Palette {
    colors: &'static [Rgb],
    current_color: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    pub fn new() -> Self {
        Self {
            colors: &SWATCHES,
            current_color: 0,
        }
    }

    pub fn get_palette_length(&self) -> usize {
        self.colors.len()
    }

    pub fn get_current_color_index(&self) -> usize {
        self.current_color
    }

    pub fn get_color(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// Returns the newly selected color, or None for an invalid index.
    pub fn switch_color(&mut self, index: usize) -> Option<Rgb> {
        let color = self.get_color(index)?;
        self.current_color = index;
        Some(color)
    }
}

pub fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
