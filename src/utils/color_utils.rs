//! Fill color parsing

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::MaskKitError;

lazy_static! {
    static ref DECIMAL_COLOR: Regex =
        Regex::new(r"^\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d{1,3})\s*)?$")
            .expect("decimal color pattern is valid");
    static ref HEX_COLOR: Regex =
        Regex::new(r"^\s*#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})?\s*$")
            .expect("hex color pattern is valid");
}

/// RGBA fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Color as an RGBA pixel
    pub fn to_rgba(&self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::new(127, 127, 127, 255)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = MaskKitError;

    /// Parse `"r,g,b"`, `"r,g,b,a"`, `"#rrggbb"` or `"#rrggbbaa"`
    ///
    /// Alpha defaults to 255 when omitted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MaskKitError::InvalidColor(s.to_string());

        if let Some(caps) = DECIMAL_COLOR.captures(s) {
            let channel = |i: usize| -> Result<u8, MaskKitError> {
                match caps.get(i) {
                    Some(m) => m.as_str().parse::<u8>().map_err(|_| invalid()),
                    None => Ok(255),
                }
            };
            return Ok(Color::new(channel(1)?, channel(2)?, channel(3)?, channel(4)?));
        }

        if let Some(caps) = HEX_COLOR.captures(s) {
            let channel = |i: usize| -> Result<u8, MaskKitError> {
                match caps.get(i) {
                    Some(m) => u8::from_str_radix(m.as_str(), 16).map_err(|_| invalid()),
                    None => Ok(255),
                }
            };
            return Ok(Color::new(channel(1)?, channel(2)?, channel(3)?, channel(4)?));
        }

        Err(invalid())
    }
}
