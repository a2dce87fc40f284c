//! Decoded METAR entities
//!
//! This module contains the typed entities produced by the chunk decoders,
//! one per report group. Entities are constructed once per successful decode
//! and are immutable afterwards; ownership passes to whatever aggregate the
//! report-level decoder builds.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::value::Value;

// =============================================================================
// Report Field Variants
// =============================================================================

/// One decoded report field.
///
/// The set of variants is closed: a report-level decoder matches on the
/// variant to route each decoded group into its aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportField {
    ReportType(ReportType),
    Icao(String),
    ObservationTime(ObservationTime),
    SurfaceWind(SurfaceWind),
    Visibility(Visibility),
    AirTemperature(AirTemperature),
    Pressure(Value),
}

impl ReportField {
    /// Stable field name, used when logging decoded chunks
    pub fn name(&self) -> &'static str {
        match self {
            ReportField::ReportType(_) => "reportType",
            ReportField::Icao(_) => "icao",
            ReportField::ObservationTime(_) => "observationTime",
            ReportField::SurfaceWind(_) => "surfaceWind",
            ReportField::Visibility(_) => "visibility",
            ReportField::AirTemperature(_) => "airTemperature",
            ReportField::Pressure(_) => "pressure",
        }
    }
}

// =============================================================================
// Report Header Entities
// =============================================================================

/// Kind of routine report announced by the head token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportType {
    /// Scheduled routine report
    Metar,

    /// Special report issued between scheduled ones
    Speci,
}

/// Day of month and UTC time at which the observation was made.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationTime {
    day: u32,
    time: NaiveTime,
}

impl ObservationTime {
    pub fn new(day: u32, time: NaiveTime) -> Self {
        Self { day, time }
    }

    /// Day of month, in [1, 31]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// UTC time of day, to minute precision
    pub fn time(&self) -> NaiveTime {
        self.time
    }
}

// =============================================================================
// Surface Wind Entity
// =============================================================================

/// Decoded surface wind group.
///
/// The mean direction is `None` exactly when the station reported the
/// direction as variable, so the two states of the conceptual
/// direction field cannot coexist. Gusts, when present, share the unit of
/// the mean speed. The direction variation bounds are kept in the order
/// they were transmitted; no ordering between them is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceWind {
    mean_direction: Option<Value>,
    mean_speed: Value,
    speed_variations: Option<Value>,
    direction_variations: Option<(Value, Value)>,
}

impl SurfaceWind {
    /// Create a wind observation; a `None` direction marks it as variable
    pub fn new(mean_direction: Option<Value>, mean_speed: Value) -> Self {
        Self {
            mean_direction,
            mean_speed,
            speed_variations: None,
            direction_variations: None,
        }
    }

    /// Attach the gust speed captured in the optional `G` sub-group
    pub fn with_speed_variations(mut self, gust: Value) -> Self {
        self.speed_variations = Some(gust);
        self
    }

    /// Attach the direction variation range, bounds in captured order
    pub fn with_direction_variations(mut self, first: Value, second: Value) -> Self {
        self.direction_variations = Some((first, second));
        self
    }

    /// Mean direction in degrees; `None` when the direction is variable
    pub fn mean_direction(&self) -> Option<Value> {
        self.mean_direction
    }

    /// True when the station reported the direction as variable
    pub fn is_variable_direction(&self) -> bool {
        self.mean_direction.is_none()
    }

    /// Mean speed, tagged with the unit the group was transmitted in
    pub fn mean_speed(&self) -> Value {
        self.mean_speed
    }

    /// Gust speed, in the same unit as the mean speed
    pub fn speed_variations(&self) -> Option<Value> {
        self.speed_variations
    }

    /// Direction variation bounds, both in degrees
    pub fn direction_variations(&self) -> Option<(Value, Value)> {
        self.direction_variations
    }
}

// =============================================================================
// Visibility Entity
// =============================================================================

/// Decoded prevailing visibility group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visibility {
    prevailing: Option<Value>,
    cavok: bool,
}

impl Visibility {
    /// Visibility measured in meters
    pub fn measured(prevailing: Value) -> Self {
        Self {
            prevailing: Some(prevailing),
            cavok: false,
        }
    }

    /// Ceiling-and-visibility-OK: the group replaces the measured value
    pub fn cavok() -> Self {
        Self {
            prevailing: None,
            cavok: true,
        }
    }

    /// Prevailing visibility in meters, absent under CAVOK
    pub fn prevailing(&self) -> Option<Value> {
        self.prevailing
    }

    pub fn is_cavok(&self) -> bool {
        self.cavok
    }
}

// =============================================================================
// Air Temperature Entity
// =============================================================================

/// Decoded air temperature / dew point group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirTemperature {
    air: Value,
    dew_point: Option<Value>,
}

impl AirTemperature {
    pub fn new(air: Value, dew_point: Option<Value>) -> Self {
        Self { air, dew_point }
    }

    /// Air temperature in degrees Celsius
    pub fn air(&self) -> Value {
        self.air
    }

    /// Dew point in degrees Celsius; stations may omit it
    pub fn dew_point(&self) -> Option<Value> {
        self.dew_point
    }
}
