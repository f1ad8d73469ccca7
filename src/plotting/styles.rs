//! Chart theme configuration.
//!
//! A [`Theme`] is pure data: a named palette plus the default styling every
//! chart referencing it picks up. It must be registered on a backend before
//! any chart names it.

use plotters::style::RGBAColor;
use serde::{Deserialize, Serialize};

/// Name the dashboard registers its default theme under.
pub const DEFAULT_THEME: &str = "deep-sea";

/// An RGBA color. Converted to a plotters color at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for RGBAColor {
    fn from(color: Color) -> Self {
        RGBAColor(color.r, color.g, color.b, color.a)
    }
}

/// A named set of default visual styles applied to every chart that
/// references it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Series colors, cycled in order
    pub palette: Vec<Color>,
    pub background_color: Color,
    pub title_color: Color,
    pub subtitle_color: Color,
    pub label_color: Color,
    pub grid_color: Color,
    pub axis_color: Color,
    /// Stroke width for series lines
    pub line_width: u32,
    /// Smooth series with a short moving average before drawing
    pub smooth: bool,
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub margin: u32,
    pub label_area_size: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: vec![
                Color::rgb(0xff, 0x6e, 0x8a),
                Color::rgb(0x78, 0xec, 0xb0),
                Color::rgb(0xff, 0xe9, 0x49),
                Color::rgb(0x00, 0xe1, 0xff),
                Color::rgb(0x84, 0x1d, 0x95),
                Color::rgb(0xba, 0x70, 0xc6),
                Color::rgb(0x94, 0xf0, 0xe5),
                Color::rgb(0x01, 0xdb, 0xc5),
            ],
            background_color: Color::rgb(0x00, 0x24, 0x38),
            title_color: Color::rgb(0xf5, 0xf6, 0xfa),
            subtitle_color: Color::rgb(0xe2, 0xe4, 0xeb),
            label_color: Color::rgba(0xf5, 0xf6, 0xfa, 0.8),
            grid_color: Color::rgba(0xff, 0xff, 0xff, 0.15),
            axis_color: Color::rgba(0xff, 0xff, 0xff, 0.8),
            line_width: 3,
            smooth: true,
            title_font_size: 30,
            label_font_size: 15,
            margin: 10,
            label_area_size: 50,
        }
    }
}

impl Theme {
    /// Palette color for the `index`-th series, cycling when the palette is
    /// exhausted. Falls back to the axis color for an empty palette.
    pub fn series_color(&self, index: usize) -> Color {
        self.palette
            .get(index % self.palette.len().max(1))
            .copied()
            .unwrap_or(self.axis_color)
    }
}
