//! Decoder for the air temperature / dew point group (`17/12`, `M02/M05`).

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ChunkDecoder, DecodedChunk, remainder_after};
use crate::entities::{AirTemperature, ReportField};
use crate::error::{DecodeError, Result};
use crate::value::{Unit, Value};

static TEMPERATURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(M?[0-9]{2})/(M?[0-9]{2})?( )").expect("temperature grammar compiles")
});

/// Decoder for the air temperature group of a METAR report.
///
/// The dew point may be missing when the station's hygrometer is out of
/// service; the slash is still transmitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemperatureDecoder;

impl TemperatureDecoder {
    /// `M` prefixes mark sub-zero values on the wire.
    fn celsius(&self, token: &str, remaining: &str) -> Result<Value> {
        match token.strip_prefix('M') {
            Some(digits) => {
                let magnitude = self.int_value(digits, Unit::DegreeCelsius, remaining)?;
                Ok(Value::new(-magnitude.magnitude(), Unit::DegreeCelsius))
            }
            None => self.int_value(token, Unit::DegreeCelsius, remaining),
        }
    }
}

impl ChunkDecoder for TemperatureDecoder {
    fn name(&self) -> &'static str {
        "air temperature"
    }

    fn regex(&self) -> &'static Regex {
        &TEMPERATURE
    }

    fn parse(&self, remaining: &str, _cavok: bool) -> Result<DecodedChunk> {
        let caps = self.match_chunk(remaining).ok_or_else(|| {
            DecodeError::invalid_format(
                self.name(),
                "Bad format for air temperature information",
                remaining,
            )
        })?;

        let air = self.celsius(&caps[1], remaining)?;
        let dew_point = match caps.get(2) {
            Some(token) => Some(self.celsius(token.as_str(), remaining)?),
            None => None,
        };

        Ok(DecodedChunk {
            field: ReportField::AirTemperature(AirTemperature::new(air, dew_point)),
            remaining: remainder_after(remaining, &caps),
        })
    }
}
