//! METAR chunk decoding library
//!
//! A Rust library for decoding METAR aviation routine weather reports, one
//! whitespace-delimited group at a time.
//!
//! A METAR report is a sequence of groups, each with its own fixed grammar.
//! This library provides:
//! - The [`ChunkDecoder`] contract: match one group grammar against the head
//!   of the not-yet-consumed report text, convert the captures into a typed
//!   entity, and hand the unconsumed remainder to the next decoder
//! - Decoders for the report type, station identifier, observation time,
//!   surface wind, visibility, air temperature and pressure groups
//! - A shared [`Value`] primitive tagging integer magnitudes with their unit
//! - Error reporting that identifies the failing text, a human-readable
//!   reason and the decoder that raised it
//!
//! Report-level assembly is the caller's job: decoders hold no state, so a
//! report decoder threads the remaining text through them in report order
//! and collects the returned [`ReportField`]s, deciding for itself whether a
//! failed group aborts the report or is treated as absent.
//!
//! ## Usage
//!
//! ```rust
//! use metar_decoder::{ChunkDecoder, ReportField, SurfaceWindDecoder};
//!
//! # fn main() -> metar_decoder::Result<()> {
//! let decoded = SurfaceWindDecoder.parse("27010G25KT 240V300 9999 17/12 Q1015", false)?;
//!
//! assert_eq!(decoded.remaining, "9999 17/12 Q1015");
//! match decoded.field {
//!     ReportField::SurfaceWind(wind) => {
//!         assert_eq!(wind.mean_direction().map(|d| d.magnitude()), Some(270));
//!         assert_eq!(wind.mean_speed().magnitude(), 10);
//!         assert_eq!(wind.speed_variations().map(|g| g.magnitude()), Some(25));
//!     }
//!     other => panic!("unexpected field {}", other.name()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod chunk_decoder;
pub mod entities;
pub mod error;
pub mod value;

// Re-export commonly used types
pub use chunk_decoder::{
    ChunkDecoder, DecodedChunk, IcaoDecoder, ObservationTimeDecoder, PressureDecoder,
    ReportTypeDecoder, SurfaceWindDecoder, TemperatureDecoder, VisibilityDecoder,
};
pub use entities::{
    AirTemperature, ObservationTime, ReportField, ReportType, SurfaceWind, Visibility,
};
pub use error::{DecodeError, Result};
pub use value::{Unit, Value};
