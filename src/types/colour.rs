//! Colours and the density ramp used to render overlap counts.

use std::fmt;
use std::str::FromStr;

use palette::{Hsl, IntoColor, Srgb};

use crate::error::{GridError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let invalid = || GridError::Config {
            message: format!("Invalid hex colour: {}", s),
            help: Some("Use #RRGGBB or #RRGGBBAA".to_string()),
        };

        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };

        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, a))
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    fn from_srgb(rgb: Srgb<f32>) -> Self {
        Self::rgb(
            (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

impl FromStr for Colour {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Maps overlap counts to colours.
///
/// Zero maps to the background colour. Counts from 1 up to the grid's
/// maximum sweep the hue from blue (240°) to red (0°) at fixed saturation
/// and lightness. With a threshold set, the ramp degrades to a two-colour
/// occupancy mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityRamp {
    pub background: Colour,
    pub threshold: Option<u32>,
}

impl Default for DensityRamp {
    fn default() -> Self {
        Self {
            background: Colour::BLACK,
            threshold: None,
        }
    }
}

impl DensityRamp {
    const COLD_HUE: f32 = 240.0;
    const SATURATION: f32 = 0.85;
    const LIGHTNESS: f32 = 0.55;

    pub fn new(background: Colour, threshold: Option<u32>) -> Self {
        Self {
            background,
            threshold,
        }
    }

    /// Colour for `count` on a grid whose largest count is `max`.
    pub fn colour(&self, count: u32, max: u32) -> Colour {
        if let Some(threshold) = self.threshold {
            return if count >= threshold.max(1) {
                Colour::WHITE
            } else {
                self.background
            };
        }

        if count == 0 {
            return self.background;
        }

        let t = if max <= 1 {
            0.0
        } else {
            (count.min(max) - 1) as f32 / (max - 1) as f32
        };
        let hsl: Hsl = Hsl::new(
            Self::COLD_HUE * (1.0 - t),
            Self::SATURATION,
            Self::LIGHTNESS,
        );
        let rgb: Srgb<f32> = hsl.into_color();
        Colour::from_srgb(rgb)
    }
}
