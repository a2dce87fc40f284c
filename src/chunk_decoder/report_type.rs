//! Decoder for the report type head token (`METAR` or `SPECI`).

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ChunkDecoder, DecodedChunk, remainder_after};
use crate::entities::{ReportField, ReportType};
use crate::error::{DecodeError, Result};

static REPORT_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(METAR|SPECI)( )").expect("report type grammar compiles"));

/// Decoder for the report type token that opens a METAR report.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportTypeDecoder;

impl ChunkDecoder for ReportTypeDecoder {
    fn name(&self) -> &'static str {
        "report type"
    }

    fn regex(&self) -> &'static Regex {
        &REPORT_TYPE
    }

    fn parse(&self, remaining: &str, _cavok: bool) -> Result<DecodedChunk> {
        let caps = self.match_chunk(remaining).ok_or_else(|| {
            DecodeError::invalid_format(
                self.name(),
                "Bad format for report type information",
                remaining,
            )
        })?;

        let kind = if &caps[1] == "METAR" {
            ReportType::Metar
        } else {
            ReportType::Speci
        };

        Ok(DecodedChunk {
            field: ReportField::ReportType(kind),
            remaining: remainder_after(remaining, &caps),
        })
    }
}
