//! Decoder for the surface wind group
//!
//! Covers the mean wind direction and speed plus the optional gust and
//! direction-variation sub-groups, e.g. `27010G25KT 240V300` or `VRB03MPS`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{ChunkDecoder, DecodedChunk, remainder_after};
use crate::entities::{ReportField, SurfaceWind};
use crate::error::{DecodeError, Result};
use crate::value::Unit;

/// Inclusive bounds for a reported mean wind direction.
const DIRECTION_RANGE: std::ops::RangeInclusive<i32> = 0..=360;

/// Grammar for the surface wind group, capture groups in order:
///
/// 1. mean direction: three digits (slashes tolerated, transmitted when the
///    sensor cannot resolve a bearing) or the variable marker `VRB`; the
///    truncated `RB` seen in some malformed reports is accepted as
///    equivalent
/// 2. mean speed, 2-3 digits with an optional `P` ("at or above") prefix
/// 3. optional gust sub-group
/// 4. gust speed digits
/// 5. speed unit token
/// 6. optional direction-variation sub-group
/// 7. first variation bearing
/// 8. second variation bearing
///
/// The mandatory trailing space is captured too, so the capture list has the
/// same length on every successful match.
static WIND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([/0-9]{3}|V?RB)(P?[0-9]{2,3})(GP?([0-9]{2,3}))?(KT|MPS)( ([0-9]{3})V([0-9]{3}))?( )",
    )
    .expect("surface wind grammar compiles")
});

/// Decoder for the surface wind group of a METAR report.
#[derive(Debug, Default, Clone, Copy)]
pub struct SurfaceWindDecoder;

impl ChunkDecoder for SurfaceWindDecoder {
    fn name(&self) -> &'static str {
        "surface wind"
    }

    fn regex(&self) -> &'static Regex {
        &WIND
    }

    fn parse(&self, remaining: &str, _cavok: bool) -> Result<DecodedChunk> {
        let caps = self.match_chunk(remaining).ok_or_else(|| {
            DecodeError::invalid_format(
                self.name(),
                "Bad format for surface wind information",
                remaining,
            )
        })?;

        // The unit token applies to the mean speed and the gusts alike.
        let speed_unit = if &caps[5] == "KT" {
            Unit::Knot
        } else {
            Unit::MeterPerSecond
        };
        let mean_speed = self.int_value(&caps[2], speed_unit, remaining)?;

        let direction = &caps[1];
        let mut wind = if direction == "VRB" || direction == "RB" {
            SurfaceWind::new(None, mean_speed)
        } else {
            let mean_direction = self.int_value(direction, Unit::Degree, remaining)?;
            if !DIRECTION_RANGE.contains(&mean_direction.magnitude()) {
                return Err(DecodeError::data_validation(
                    self.name(),
                    "Wind direction should be in [0,360]",
                    remaining,
                ));
            }
            SurfaceWind::new(Some(mean_direction), mean_speed)
        };

        if let (Some(first), Some(second)) = (caps.get(7), caps.get(8)) {
            wind = wind.with_direction_variations(
                self.int_value(first.as_str(), Unit::Degree, remaining)?,
                self.int_value(second.as_str(), Unit::Degree, remaining)?,
            );
        }

        if let Some(gust) = caps.get(4) {
            wind = wind
                .with_speed_variations(self.int_value(gust.as_str(), speed_unit, remaining)?);
        }

        debug!("decoded surface wind group: {:?}", wind);

        Ok(DecodedChunk {
            field: ReportField::SurfaceWind(wind),
            remaining: remainder_after(remaining, &caps),
        })
    }
}
