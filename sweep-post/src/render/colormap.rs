use clap::ValueEnum;
use plotters::style::{RGBColor, BLACK, WHITE};
use serde::{Deserialize, Serialize};

/// samples of the cool-warm diverging map (blue -> grey -> red), evenly spaced on [0, 1]
const COOLWARM: [(u8, u8, u8); 9] = [
    (59, 76, 192),
    (98, 130, 234),
    (141, 176, 254),
    (184, 208, 249),
    (221, 221, 221),
    (245, 196, 173),
    (244, 154, 123),
    (222, 96, 77),
    (180, 4, 38),
];

/// diverging color scales available to the grid plots
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
pub enum Colormap {
    /// low values blue, high values red
    #[serde(rename = "coolwarm")]
    Coolwarm,
    /// low values red, high values blue
    #[default]
    #[serde(rename = "coolwarm_r")]
    CoolwarmR,
}

impl Colormap {
    /// color at position `t` along the scale, clamped to [0, 1]
    pub fn color(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
        let t = match self {
            Colormap::Coolwarm => t,
            Colormap::CoolwarmR => 1.0 - t,
        };
        let scaled = t * (COOLWARM.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(COOLWARM.len() - 2);
        let frac = scaled - lower as f64;
        let (r0, g0, b0) = COOLWARM[lower];
        let (r1, g1, b1) = COOLWARM[lower + 1];
        RGBColor(lerp(r0, r1, frac), lerp(g0, g1, frac), lerp(b0, b1, frac))
    }

    /// color for `value` on a scale spanning [vmin, vmax]
    pub fn color_for(&self, value: f64, vmin: f64, vmax: f64) -> RGBColor {
        self.color(normalize(value, vmin, vmax))
    }
}

/// position of `value` within [vmin, vmax]. a degenerate range maps to the middle.
pub fn normalize(value: f64, vmin: f64, vmax: f64) -> f64 {
    if vmax <= vmin {
        0.5
    } else {
        ((value - vmin) / (vmax - vmin)).clamp(0.0, 1.0)
    }
}

/// black or white, whichever reads better on `background`
pub fn contrasting_text(background: &RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = *background;
    let luminance = 0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b);
    if luminance > 0.408 {
        BLACK
    } else {
        WHITE
    }
}

fn channel(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn lerp(a: u8, b: u8, frac: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * frac).round() as u8
}
