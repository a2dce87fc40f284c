//! Decoder for the reporting station's ICAO identifier.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ChunkDecoder, DecodedChunk, remainder_after};
use crate::entities::ReportField;
use crate::error::{DecodeError, Result};

static ICAO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z0-9]{4})( )").expect("icao grammar compiles"));

/// Decoder for the four-character station identifier group.
#[derive(Debug, Default, Clone, Copy)]
pub struct IcaoDecoder;

impl ChunkDecoder for IcaoDecoder {
    fn name(&self) -> &'static str {
        "icao"
    }

    fn regex(&self) -> &'static Regex {
        &ICAO
    }

    fn parse(&self, remaining: &str, _cavok: bool) -> Result<DecodedChunk> {
        let caps = self.match_chunk(remaining).ok_or_else(|| {
            DecodeError::invalid_format(
                self.name(),
                "Bad format for station identifier information",
                remaining,
            )
        })?;

        Ok(DecodedChunk {
            field: ReportField::Icao(caps[1].to_string()),
            remaining: remainder_after(remaining, &caps),
        })
    }
}
