//! Battery level from `dumpsys battery` output.
//!
//! The dump contains lines such as:
//!
//! ```text
//! Current Battery Service state:
//!   AC powered: false
//!   USB powered: true
//!   level: 80
//!   scale: 100
//! ```
//!
//! Only the `level:` and `scale:` lines are read.

use std::fmt;

const LEVEL_PREFIX: &str = "level:";
const SCALE_PREFIX: &str = "scale:";

/// Raw battery fields parsed from a dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatteryReading {
    pub level: Option<i64>,
    pub scale: Option<i64>,
}

impl BatteryReading {
    /// Scan every line for the `level:` and `scale:` prefixes (case-sensitive,
    /// after trimming). Values that do not parse as integers leave the field
    /// unset; a later line overrides an earlier one.
    pub fn parse(dump: &str) -> Self {
        let mut reading = Self::default();
        for line in dump.lines().map(str::trim) {
            if let Some(value) = line.strip_prefix(LEVEL_PREFIX) {
                if let Ok(level) = value.trim().parse() {
                    reading.level = Some(level);
                }
            } else if let Some(value) = line.strip_prefix(SCALE_PREFIX) {
                if let Ok(scale) = value.trim().parse() {
                    reading.scale = Some(scale);
                }
            }
        }
        reading
    }

    /// `floor(level * 100 / scale)` clamped to `0..=100`, or `None` when a
    /// field is missing or the scale is zero.
    pub fn percentage(&self) -> Option<u8> {
        let (level, scale) = (self.level?, self.scale?);
        if scale == 0 {
            return None;
        }
        let pct = floor_div(level.saturating_mul(100), scale);
        Some(pct.clamp(0, 100) as u8)
    }

    pub fn status(&self) -> BatteryStatus {
        match self.percentage() {
            Some(pct) => BatteryStatus::Percent(pct),
            None => BatteryStatus::Unavailable,
        }
    }
}

/// Integer division rounding toward negative infinity.
#[inline]
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// What the battery label shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatteryStatus {
    Percent(u8),
    #[default]
    Unavailable,
}

impl fmt::Display for BatteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(pct) => write!(f, "Battery: {}%", pct),
            Self::Unavailable => f.write_str("Battery: N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "Current Battery Service state:\n  AC powered: false\n  USB powered: true\n  \
                        Wireless powered: false\n  Max charging current: 500000\n  status: 2\n  \
                        health: 2\n  present: true\n  level: 80\n  scale: 100\n  voltage: 4168\n  \
                        temperature: 270\n  technology: Li-ion\n";

    #[test]
    fn test_parse_typical_dump() {
        let reading = BatteryReading::parse(DUMP);
        assert_eq!(reading.level, Some(80));
        assert_eq!(reading.scale, Some(100));
        assert_eq!(reading.percentage(), Some(80));
        assert_eq!(reading.status().to_string(), "Battery: 80%");
    }

    #[test]
    fn test_parse_scale_before_level() {
        let reading = BatteryReading::parse("scale: 100\nvoltage: 4100\nlevel: 80\n");
        assert_eq!(reading.percentage(), Some(80));
    }

    #[test]
    fn test_missing_scale_is_unavailable() {
        let reading = BatteryReading::parse("level: 80\n");
        assert_eq!(reading.percentage(), None);
        assert_eq!(reading.status().to_string(), "Battery: N/A");
    }

    #[test]
    fn test_zero_scale_is_unavailable() {
        let reading = BatteryReading::parse("level: 80\nscale: 0\n");
        assert_eq!(reading.status().to_string(), "Battery: N/A");
    }

    #[test]
    fn test_malformed_value_leaves_field_unset() {
        let reading = BatteryReading::parse("level: eighty\nscale: 100\n");
        assert_eq!(reading.level, None);
        assert_eq!(reading.status(), BatteryStatus::Unavailable);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        let reading = BatteryReading::parse("Level: 80\nSCALE: 100\n");
        assert_eq!(reading, BatteryReading::default());
    }

    #[test]
    fn test_similar_keys_are_ignored() {
        // "battery level:" does not start with "level:" once trimmed
        let reading = BatteryReading::parse("battery level: 10\nlevel: 55\nscale: 100\n");
        assert_eq!(reading.percentage(), Some(55));
    }

    #[test]
    fn test_percentage_floors() {
        let reading = BatteryReading {
            level: Some(2),
            scale: Some(3),
        };
        assert_eq!(reading.percentage(), Some(66));
    }

    #[test]
    fn test_percentage_non_percent_scale() {
        let reading = BatteryReading::parse("level: 128\nscale: 255\n");
        assert_eq!(reading.percentage(), Some(50));
    }

    #[test]
    fn test_percentage_is_clamped() {
        let over = BatteryReading {
            level: Some(150),
            scale: Some(100),
        };
        assert_eq!(over.percentage(), Some(100));

        let under = BatteryReading {
            level: Some(-5),
            scale: Some(100),
        };
        assert_eq!(under.percentage(), Some(0));
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-7, 2), -4);
        assert_eq!(floor_div(7, -2), -4);
        assert_eq!(floor_div(-7, -2), 3);
        assert_eq!(floor_div(6, 3), 2);
    }

    #[test]
    fn test_error_text_is_unavailable() {
        let reading = BatteryReading::parse("Error executing command:\nerror: no devices/emulators found\n");
        assert_eq!(reading.status(), BatteryStatus::Unavailable);
    }
}
