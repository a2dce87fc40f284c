//! Decoder for the prevailing visibility group.
//!
//! A station either transmits a four-digit visibility in meters (`9999`
//! meaning 10 km or more, kept verbatim) or the `CAVOK` token, which stands
//! in for the visibility, weather and cloud groups at once. Whether the
//! groups CAVOK replaces are then skipped is the report-level decoder's
//! call, not this one's.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{ChunkDecoder, DecodedChunk, remainder_after};
use crate::entities::{ReportField, Visibility};
use crate::error::{DecodeError, Result};
use crate::value::Unit;

static VISIBILITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(CAVOK|[0-9]{4})( )").expect("visibility grammar compiles"));

/// Decoder for the prevailing visibility group of a METAR report.
#[derive(Debug, Default, Clone, Copy)]
pub struct VisibilityDecoder;

impl ChunkDecoder for VisibilityDecoder {
    fn name(&self) -> &'static str {
        "visibility"
    }

    fn regex(&self) -> &'static Regex {
        &VISIBILITY
    }

    fn parse(&self, remaining: &str, _cavok: bool) -> Result<DecodedChunk> {
        let caps = self.match_chunk(remaining).ok_or_else(|| {
            DecodeError::invalid_format(
                self.name(),
                "Bad format for visibility information",
                remaining,
            )
        })?;

        let visibility = if &caps[1] == "CAVOK" {
            debug!("CAVOK in effect, no measured visibility");
            Visibility::cavok()
        } else {
            Visibility::measured(self.int_value(&caps[1], Unit::Meter, remaining)?)
        };

        Ok(DecodedChunk {
            field: ReportField::Visibility(visibility),
            remaining: remainder_after(remaining, &caps),
        })
    }
}
