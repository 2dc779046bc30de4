use serde::{Deserialize, Serialize};

/// Options for drawing layouts to SVG
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgDrawOptions {
    /// Side length of one grid cell, in svg units
    pub cell_size: f32,
    /// Gap between cells, in svg units
    pub gap: f32,
    pub theme: SvgLayoutThemes,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            gap: 2.0,
            theme: SvgLayoutThemes::default(),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutThemes {
    #[default]
    Slate,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::Slate => SLATE_THEME,
            SvgLayoutThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width: f32,
    pub backdrop_fill: &'static str,
    pub footprint_fill: &'static str,
    pub footprint_stroke: &'static str,
    pub overweight_stroke: &'static str,
}

pub static SLATE_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width: 1.0,
    backdrop_fill: "#0F172A",
    footprint_fill: "#1E293B",
    footprint_stroke: "#334155",
    overweight_stroke: "#F87171",
};

pub static GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width: 1.0,
    backdrop_fill: "#FFFFFF",
    footprint_fill: "#C3C3C3",
    footprint_stroke: "#8F8F8F",
    overweight_stroke: "#FF0000",
};

pub fn change_brightness(color: &str, fraction: f32) -> String {
    let mut color = color.to_string();
    if color.starts_with('#') {
        color.remove(0);
    }
    let mut r = u8::from_str_radix(&color[0..2], 16).unwrap_or(0);
    let mut g = u8::from_str_radix(&color[2..4], 16).unwrap_or(0);
    let mut b = u8::from_str_radix(&color[4..6], 16).unwrap_or(0);
    r = (r as f32 * fraction) as u8;
    g = (g as f32 * fraction) as u8;
    b = (b as f32 * fraction) as u8;
    format!("#{r:02X}{g:02X}{b:02X}")
}
