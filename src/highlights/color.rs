use serde::{Serialize, Serializer};
use std::fmt;

/// 8-bit RGBA colour.
///
/// Displays and serializes as the `#rrggbbaa` string editors accept as a
/// background colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Map a normalized complexity onto the green-to-red ramp.
    ///
    /// `1.0` is pure red, values approaching `0.0` are pure green. Blue is
    /// always zero and alpha is fixed by configuration.
    pub fn from_normalized(normalized: f64, alpha: f64) -> Self {
        Self {
            r: to_channel(normalized),
            g: to_channel(1.0 - normalized),
            b: 0,
            a: to_channel(alpha),
        }
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

/// `round(255 * value)`, saturating at the channel bounds.
fn to_channel(value: f64) -> u8 {
    (255.0 * value).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        assert_eq!(Rgba::from_normalized(1.0, 0.3), Rgba::new(255, 0, 0, 77));
        assert_eq!(Rgba::from_normalized(0.0, 1.0), Rgba::new(0, 255, 0, 255));
    }

    #[test]
    fn test_midpoint_rounds_half_away_from_zero() {
        // 255 * 0.5 = 127.5
        let color = Rgba::from_normalized(0.5, 0.0);
        assert_eq!(color.r, 128);
        assert_eq!(color.g, 128);
        assert_eq!(color.a, 0);
    }

    #[test]
    fn test_hex_is_zero_padded() {
        assert_eq!(Rgba::new(255, 0, 0, 77).to_hex(), "#ff00004d");
        assert_eq!(Rgba::new(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgba::new(0x71, 0x8e, 0, 0x4d)).unwrap();
        assert_eq!(json, "\"#718e004d\"");
    }

    #[test]
    fn test_red_is_monotonic() {
        let mut previous = 0;
        for step in 1..=100 {
            let color = Rgba::from_normalized(step as f64 / 100.0, 0.3);
            assert!(color.r >= previous);
            previous = color.r;
        }
    }
}
