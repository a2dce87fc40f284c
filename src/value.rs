//! Tagged numeric quantities shared by every decoded entity.
//!
//! METAR groups transmit magnitudes as bare digit runs whose unit is implied
//! by position or by a trailing token. [`Value`] keeps the two together so a
//! decoded speed can never be silently reinterpreted as a bearing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Measurement units carried by [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Bearing in degrees true
    Degree,

    /// Wind speed in knots (`KT` groups)
    Knot,

    /// Wind speed in meters per second (`MPS` groups)
    MeterPerSecond,

    /// Horizontal distance in meters
    Meter,

    /// Air temperature in degrees Celsius
    DegreeCelsius,

    /// Pressure in whole hectopascals (`Q` groups)
    HectoPascal,
}

impl Unit {
    /// Human-readable symbol for this unit
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Degree => "deg",
            Unit::Knot => "kt",
            Unit::MeterPerSecond => "m/s",
            Unit::Meter => "m",
            Unit::DegreeCelsius => "°C",
            Unit::HectoPascal => "hPa",
        }
    }

    /// METAR token for a wind speed unit, used when re-rendering a decoded
    /// wind group. `None` for units that have no token of their own in a
    /// raw report.
    pub fn speed_token(self) -> Option<&'static str> {
        match self {
            Unit::Knot => Some("KT"),
            Unit::MeterPerSecond => Some("MPS"),
            _ => None,
        }
    }

    /// Resolve a wind-group speed unit token
    pub fn from_speed_token(token: &str) -> Option<Unit> {
        match token {
            "KT" => Some(Unit::Knot),
            "MPS" => Some(Unit::MeterPerSecond),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An integer magnitude tagged with its unit.
///
/// The unit is fixed at construction and the pair is immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    magnitude: i32,
    unit: Unit,
}

impl Value {
    /// Create a value from an already-parsed magnitude
    pub fn new(magnitude: i32, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// Parse a magnitude token as transmitted in a METAR group.
    ///
    /// Leading zeros are permitted and a leading `P` ("at or above" marker)
    /// is stripped before parsing. Returns `None` for tokens that carry no
    /// numeric value, such as the slash-filled direction a station transmits
    /// when its sensor cannot resolve a bearing.
    pub fn from_token(token: &str, unit: Unit) -> Option<Self> {
        let digits = token.strip_prefix('P').unwrap_or(token);
        digits.parse().ok().map(|magnitude| Self { magnitude, unit })
    }

    pub fn magnitude(&self) -> i32 {
        self.magnitude
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}
