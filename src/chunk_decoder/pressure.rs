//! Decoder for the QNH pressure group (`Q1013`).

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ChunkDecoder, DecodedChunk, remainder_after};
use crate::entities::ReportField;
use crate::error::{DecodeError, Result};
use crate::value::Unit;

static PRESSURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Q([0-9]{4})( )").expect("pressure grammar compiles"));

/// Decoder for the QNH group of a METAR report, in whole hectopascals.
#[derive(Debug, Default, Clone, Copy)]
pub struct PressureDecoder;

impl ChunkDecoder for PressureDecoder {
    fn name(&self) -> &'static str {
        "pressure"
    }

    fn regex(&self) -> &'static Regex {
        &PRESSURE
    }

    fn parse(&self, remaining: &str, _cavok: bool) -> Result<DecodedChunk> {
        let caps = self.match_chunk(remaining).ok_or_else(|| {
            DecodeError::invalid_format(
                self.name(),
                "Bad format for pressure information",
                remaining,
            )
        })?;

        let qnh = self.int_value(&caps[1], Unit::HectoPascal, remaining)?;

        Ok(DecodedChunk {
            field: ReportField::Pressure(qnh),
            remaining: remainder_after(remaining, &caps),
        })
    }
}
