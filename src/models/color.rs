//! Color values and CSS notation formatting.
//!
//! Variables carry colors as float RGBA in the 0..1 range. This module
//! converts them into the eight CSS notations a stylesheet can be generated
//! with. All numeric output goes through a fixed rounding so the rendered
//! artifacts are byte-stable across runs.

use crate::models::ColorFormat;
use serde::{Deserialize, Serialize};

/// A direct color value with unit-range channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    /// Red channel (0.0-1.0)
    pub r: f64,
    /// Green channel (0.0-1.0)
    pub g: f64,
    /// Blue channel (0.0-1.0)
    pub b: f64,
    /// Alpha channel (0.0-1.0); defaults to fully opaque
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl ColorValue {
    /// Creates a new color from unit-range channels.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    #[must_use]
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Formats the color in the requested CSS notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokensmith::models::{ColorFormat, ColorValue};
    ///
    /// let red = ColorValue::opaque(1.0, 0.0, 0.0);
    /// assert_eq!(red.to_css(ColorFormat::Hex), "#ff0000ff");
    /// assert_eq!(red.to_css(ColorFormat::Rgb), "rgb(255, 0, 0)");
    /// assert_eq!(red.to_css(ColorFormat::Hsl), "hsl(0 100% 50%)");
    /// ```
    #[must_use]
    pub fn to_css(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.to_hex8(),
            ColorFormat::Rgb => self.to_rgb_string(),
            ColorFormat::Hsl => {
                let (h, s, l) = self.to_hsl();
                self.with_alpha_suffix(format!(
                    "hsl({} {}% {}%",
                    fmt_num(h, 2),
                    fmt_num(s * 100.0, 2),
                    fmt_num(l * 100.0, 2)
                ))
            }
            ColorFormat::Hwb => {
                let (h, w, b) = self.to_hwb();
                self.with_alpha_suffix(format!(
                    "hwb({} {}% {}%",
                    fmt_num(h, 2),
                    fmt_num(w * 100.0, 2),
                    fmt_num(b * 100.0, 2)
                ))
            }
            ColorFormat::Lab => {
                let (l, a, b) = self.to_lab();
                self.with_alpha_suffix(format!(
                    "lab({}% {} {}",
                    fmt_num(l, 2),
                    fmt_num(a, 3),
                    fmt_num(b, 3)
                ))
            }
            ColorFormat::Lch => {
                let (l, c, h) = self.to_lch();
                self.with_alpha_suffix(format!(
                    "lch({}% {} {}",
                    fmt_num(l, 2),
                    fmt_num(c, 3),
                    fmt_num(h, 2)
                ))
            }
            ColorFormat::Oklab => {
                let (l, a, b) = self.to_oklab();
                self.with_alpha_suffix(format!(
                    "oklab({} {} {}",
                    fmt_num(l, 4),
                    fmt_num(a, 4),
                    fmt_num(b, 4)
                ))
            }
            ColorFormat::Oklch => {
                let (l, c, h) = self.to_oklch();
                self.with_alpha_suffix(format!(
                    "oklch({} {} {}",
                    fmt_num(l, 4),
                    fmt_num(c, 4),
                    fmt_num(h, 2)
                ))
            }
        }
    }

    /// Closes a modern-syntax function, appending `/ alpha` for translucent colors.
    fn with_alpha_suffix(&self, open: String) -> String {
        if self.a < 1.0 {
            format!("{open} / {})", fmt_num(self.a.clamp(0.0, 1.0), 3))
        } else {
            format!("{open})")
        }
    }

    /// Formats as lowercase `#rrggbbaa` (always eight digits).
    #[must_use]
    pub fn to_hex8(&self) -> String {
        let (r, g, b, a) = self.channels_u8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    /// Formats in the legacy comma syntax: `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    #[must_use]
    pub fn to_rgb_string(&self) -> String {
        let (r, g, b, _) = self.channels_u8();
        if self.a < 1.0 {
            format!("rgba({r}, {g}, {b}, {})", fmt_num(self.a.clamp(0.0, 1.0), 3))
        } else {
            format!("rgb({r}, {g}, {b})")
        }
    }

    /// Returns the channels quantized to 0-255.
    #[must_use]
    pub fn channels_u8(&self) -> (u8, u8, u8, u8) {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b), q(self.a))
    }

    /// Converts to HSL. Hue in degrees (0 for grayscale), saturation and
    /// lightness in the 0..1 range.
    #[must_use]
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let (max, min, delta) = self.channel_range();
        let l = (max + min) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };
        (self.hue(max, delta), s, l)
    }

    /// Converts to HWB. Hue in degrees, whiteness and blackness in 0..1.
    #[must_use]
    pub fn to_hwb(&self) -> (f64, f64, f64) {
        let (max, min, delta) = self.channel_range();
        (self.hue(max, delta), min, 1.0 - max)
    }

    /// Converts to CIELAB (D50 white point, as used by CSS `lab()`).
    #[must_use]
    pub fn to_lab(&self) -> (f64, f64, f64) {
        let (x, y, z) = self.to_xyz_d50();
        let fx = lab_f(x / D50_WHITE.0);
        let fy = lab_f(y / D50_WHITE.1);
        let fz = lab_f(z / D50_WHITE.2);
        (116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }

    /// Converts to LCH, the cylindrical form of CIELAB.
    #[must_use]
    pub fn to_lch(&self) -> (f64, f64, f64) {
        let (l, a, b) = self.to_lab();
        (l, a.hypot(b), hue_degrees(a, b))
    }

    /// Converts to OKLab.
    ///
    /// Matrices from the OKLab reference (bottosson.github.io/posts/oklab).
    #[must_use]
    pub fn to_oklab(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_linear();

        let l = (0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b).cbrt();
        let m = (0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b).cbrt();
        let s = (0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b).cbrt();

        (
            0.210_454_255_3 * l + 0.793_617_785_0 * m - 0.004_072_046_8 * s,
            1.977_998_495_1 * l - 2.428_592_205_0 * m + 0.450_593_709_9 * s,
            0.025_904_037_1 * l + 0.782_771_766_2 * m - 0.808_675_766_0 * s,
        )
    }

    /// Converts to OKLCH, the cylindrical form of OKLab.
    #[must_use]
    pub fn to_oklch(&self) -> (f64, f64, f64) {
        let (l, a, b) = self.to_oklab();
        (l, a.hypot(b), hue_degrees(a, b))
    }

    /// Decodes the sRGB transfer function (IEC 61966-2-1).
    fn to_linear(&self) -> (f64, f64, f64) {
        let lin = |c: f64| {
            let c = c.clamp(0.0, 1.0);
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        (lin(self.r), lin(self.g), lin(self.b))
    }

    /// Linear sRGB -> XYZ (D65) -> Bradford-adapted XYZ (D50).
    fn to_xyz_d50(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_linear();

        let x = 0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b;
        let y = 0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b;
        let z = 0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b;

        (
            1.047_811_2 * x + 0.022_886_6 * y - 0.050_127_0 * z,
            0.029_542_4 * x + 0.990_484_4 * y - 0.017_049_1 * z,
            -0.009_234_5 * x + 0.015_043_6 * y + 0.752_131_6 * z,
        )
    }

    fn channel_range(&self) -> (f64, f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        // prevent tiny negative zero from noise
        let delta = if delta.abs() < 1e-12 { 0.0 } else { delta };
        (max, min, delta)
    }

    fn hue(&self, max: f64, delta: f64) -> f64 {
        if delta == 0.0 {
            return 0.0;
        }
        let h = if max == self.r {
            60.0 * ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            60.0 * ((self.b - self.r) / delta + 2.0)
        } else {
            60.0 * ((self.r - self.g) / delta + 4.0)
        };
        h.rem_euclid(360.0)
    }
}

/// D50 reference white (CSS Color 4 `lab()`/`lch()`).
const D50_WHITE: (f64, f64, f64) = (0.96422, 1.0, 0.82521);

/// CIE lightness companding function.
fn lab_f(t: f64) -> f64 {
    const EPSILON: f64 = 216.0 / 24389.0;
    const KAPPA: f64 = 24389.0 / 27.0;
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Hue angle in degrees, normalized to 0..360.
fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    b.atan2(a).to_degrees().rem_euclid(360.0)
}

/// Formats a number with a fixed maximum of decimal places, trailing zeros
/// trimmed. Keeps artifact output byte-stable.
fn fmt_num(value: f64, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // normalize negative zero
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let mut text = format!("{:.*}", decimals as usize, rounded);
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}
