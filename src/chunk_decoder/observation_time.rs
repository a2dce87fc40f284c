//! Decoder for the observation time group (`ddhhmmZ`).

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{ChunkDecoder, DecodedChunk, remainder_after};
use crate::entities::{ObservationTime, ReportField};
use crate::error::{DecodeError, Result};

static OBSERVATION_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})([0-9]{2})([0-9]{2})Z( )").expect("observation time grammar compiles")
});

/// Decoder for the day-of-month and UTC time group.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObservationTimeDecoder;

impl ChunkDecoder for ObservationTimeDecoder {
    fn name(&self) -> &'static str {
        "observation time"
    }

    fn regex(&self) -> &'static Regex {
        &OBSERVATION_TIME
    }

    fn parse(&self, remaining: &str, _cavok: bool) -> Result<DecodedChunk> {
        let caps = self.match_chunk(remaining).ok_or_else(|| {
            DecodeError::invalid_format(
                self.name(),
                "Bad format for observation time information",
                remaining,
            )
        })?;

        let digits = |token: &str| -> Result<u32> {
            token.parse().map_err(|_| {
                DecodeError::data_validation(
                    self.name(),
                    format!("Non-numeric time component \"{token}\""),
                    remaining,
                )
            })
        };

        let day = digits(&caps[1])?;
        if !(1..=31).contains(&day) {
            return Err(DecodeError::data_validation(
                self.name(),
                format!("Day of month {day} should be in [1,31]"),
                remaining,
            ));
        }

        let time = NaiveTime::from_hms_opt(digits(&caps[2])?, digits(&caps[3])?, 0).ok_or_else(
            || {
                DecodeError::data_validation(
                    self.name(),
                    format!("{}:{} is not a valid UTC time", &caps[2], &caps[3]),
                    remaining,
                )
            },
        )?;

        Ok(DecodedChunk {
            field: ReportField::ObservationTime(ObservationTime::new(day, time)),
            remaining: remainder_after(remaining, &caps),
        })
    }
}
