//! Chunk decoders for METAR report groups
//!
//! A METAR report is a sequence of whitespace-separated groups, each with its
//! own fixed grammar. Every grammar is owned by one [`ChunkDecoder`]: the
//! decoder matches it against the head of the not-yet-consumed report text,
//! converts the captures into a typed [`ReportField`], and returns the field
//! together with the unconsumed remainder for the next decoder in the chain.
//!
//! ## Architecture
//!
//! One decoder per group grammar:
//! - [`report_type`] - `METAR`/`SPECI` head token
//! - [`icao`] - reporting station identifier
//! - [`observation_time`] - day of month and UTC time (`ddhhmmZ`)
//! - [`surface_wind`] - mean wind, gusts and direction variations
//! - [`visibility`] - prevailing visibility or `CAVOK`
//! - [`temperature`] - air temperature and dew point
//! - [`pressure`] - QNH in hectopascals
//!
//! Decoders hold no per-call state; the compiled grammars are process-wide
//! immutable statics, so independent reports may be decoded concurrently.
//! Report-level assembly is the caller's job: thread the returned remainder
//! through the decoders in report order and collect the fields.

use regex::{Captures, Regex};

use crate::entities::ReportField;
use crate::error::{DecodeError, Result};
use crate::value::{Unit, Value};

pub mod icao;
pub mod observation_time;
pub mod pressure;
pub mod report_type;
pub mod surface_wind;
pub mod temperature;
pub mod visibility;

#[cfg(test)]
mod tests;

// Re-export the decoders for easy access
pub use icao::IcaoDecoder;
pub use observation_time::ObservationTimeDecoder;
pub use pressure::PressureDecoder;
pub use report_type::ReportTypeDecoder;
pub use surface_wind::SurfaceWindDecoder;
pub use temperature::TemperatureDecoder;
pub use visibility::VisibilityDecoder;

/// One decoded chunk: the typed field plus the report text that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedChunk {
    /// The decoded entity
    pub field: ReportField,

    /// Everything after the consumed group, for the next decoder
    pub remaining: String,
}

/// Contract shared by all group decoders.
///
/// Implementations are unit structs: all state lives in the arguments and
/// the return value, apart from the lazily compiled grammar.
pub trait ChunkDecoder {
    /// Display name used in error reports and logs
    fn name(&self) -> &'static str;

    /// Compiled grammar for this group, anchored at the head of the text
    fn regex(&self) -> &'static Regex;

    /// Decode one chunk off the head of `remaining`.
    ///
    /// `cavok` is the ceiling-and-visibility-OK state decoded so far in the
    /// report. Every decoder accepts it, but only grammars that depend on it
    /// consult it.
    fn parse(&self, remaining: &str, cavok: bool) -> Result<DecodedChunk>;

    /// Apply the grammar against the beginning of the remaining text
    fn match_chunk<'t>(&self, remaining: &'t str) -> Option<Captures<'t>> {
        self.regex().captures(remaining)
    }

    /// Convert a captured magnitude token into a [`Value`].
    ///
    /// Tokens the grammar admits but that carry no numeric value are
    /// surfaced as validation errors, not format errors: the chunk matched,
    /// the field did not.
    fn int_value(&self, token: &str, unit: Unit, remaining: &str) -> Result<Value> {
        Value::from_token(token, unit).ok_or_else(|| {
            DecodeError::data_validation(
                self.name(),
                format!("Expected a numeric value, got \"{token}\""),
                remaining,
            )
        })
    }
}

/// Text following the matched chunk, starting right after its trailing
/// delimiting space.
pub(crate) fn remainder_after(remaining: &str, caps: &Captures<'_>) -> String {
    let end = caps.get(0).map_or(0, |m| m.end());
    remaining[end..].to_string()
}
