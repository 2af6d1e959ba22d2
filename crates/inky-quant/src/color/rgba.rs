//! 8-bit RGBA color type

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// Greyscale detection limit: sum of absolute channel deviations from the
/// channel mean must stay strictly below this value.
const GREYSCALE_DEVIATION_LIMIT: f32 = 1.0;

/// A decoded pixel: four unsigned 8-bit channels.
///
/// `Rgba8` is an immutable value type. Two colors are equal only when all
/// four channels match exactly, alpha included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba8 {
    /// Create a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color from a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Euclidean distance over R, G, B in the 0..=255 range.
    ///
    /// Alpha never contributes.
    ///
    /// # Example
    /// ```
    /// use inky_quant::Rgba8;
    ///
    /// let black = Rgba8::opaque(0, 0, 0);
    /// let clear = Rgba8::new(3, 4, 0, 0);
    /// assert_eq!(black.distance(clear), 5.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Rgba8) -> f32 {
        let dr = other.r as f32 - self.r as f32;
        let dg = other.g as f32 - self.g as f32;
        let db = other.b as f32 - self.b as f32;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Returns true if the color is achromatic.
    ///
    /// A color is greyscale when the sum of absolute deviations of R, G and B
    /// from their mean is below 1.0. For 8-bit input this holds exactly when
    /// all three channels are equal.
    #[inline]
    pub fn is_greyscale(self) -> bool {
        let (r, g, b) = (self.r as f32, self.g as f32, self.b as f32);
        let mean = (r + g + b) / 3.0;
        let deviation = (r - mean).abs() + (g - mean).abs() + (b - mean).abs();
        deviation < GREYSCALE_DEVIATION_LIMIT
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba8 {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RGB`, `#RRGGBB` and `#RRGGBBAA` (hash optional,
    /// case-insensitive). Forms without alpha are fully opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use inky_quant::Rgba8;
    ///
    /// let yellow: Rgba8 = "#FFEA31".parse().unwrap();
    /// assert_eq!(yellow, Rgba8::opaque(255, 234, 49));
    ///
    /// let clear: Rgba8 = "ffffff00".parse().unwrap();
    /// assert_eq!(clear.a, 0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::opaque(r, g, b))
            }
            6 | 8 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                let a = if s.len() == 8 {
                    u8::from_str_radix(&s[6..8], 16)?
                } else {
                    255
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ignores_alpha() {
        let a = Rgba8::new(10, 20, 30, 255);
        let b = Rgba8::new(10, 20, 30, 0);
        assert_eq!(a.distance(b), 0.0);
    }

    #[test]
    fn test_distance_is_euclidean() {
        let a = Rgba8::opaque(0, 0, 0);
        let b = Rgba8::opaque(255, 255, 255);
        let expected = (3.0f32 * 255.0 * 255.0).sqrt();
        assert!((a.distance(b) - expected).abs() < 1e-3);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn test_greyscale_requires_equal_channels() {
        for v in [0u8, 1, 127, 128, 200, 255] {
            assert!(Rgba8::opaque(v, v, v).is_greyscale(), "{v} should be grey");
        }
        assert!(!Rgba8::opaque(127, 127, 128).is_greyscale());
        assert!(!Rgba8::opaque(174, 170, 179).is_greyscale());
        assert!(!Rgba8::opaque(0, 0, 1).is_greyscale());
    }

    #[test]
    fn test_greyscale_ignores_alpha() {
        assert!(Rgba8::new(90, 90, 90, 0).is_greyscale());
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(
            "#FFEA31".parse::<Rgba8>().unwrap(),
            Rgba8::opaque(255, 234, 49)
        );
        assert_eq!("f00".parse::<Rgba8>().unwrap(), Rgba8::opaque(255, 0, 0));
        assert_eq!(
            " #22a0efc8 ".parse::<Rgba8>().unwrap(),
            Rgba8::new(34, 160, 239, 200)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "#12345".parse::<Rgba8>(),
            Err(ParseColorError::InvalidLength)
        );
        assert!(matches!(
            "#GG0000".parse::<Rgba8>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert_eq!("#ééé".parse::<Rgba8>(), Err(ParseColorError::InvalidLength));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for color in [Rgba8::opaque(254, 84, 22), Rgba8::new(0, 0, 0, 100)] {
            let text = color.to_string();
            assert_eq!(text.parse::<Rgba8>().unwrap(), color);
        }
        assert_eq!(Rgba8::opaque(255, 140, 0).to_string(), "#FF8C00");
    }
}
