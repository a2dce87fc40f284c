//! Tests for the report header decoders: report type, station identifier
//! and observation time.

use chrono::Timelike;

use super::decode_ok;
use crate::chunk_decoder::{
    ChunkDecoder, IcaoDecoder, ObservationTimeDecoder, ReportTypeDecoder,
};
use crate::entities::{ReportField, ReportType};
use crate::error::DecodeError;

#[test]
fn test_report_type_tokens() {
    let decoded = decode_ok(&ReportTypeDecoder, "METAR LFPG 271430Z");
    assert_eq!(decoded.field, ReportField::ReportType(ReportType::Metar));
    assert_eq!(decoded.remaining, "LFPG 271430Z");

    let decoded = decode_ok(&ReportTypeDecoder, "SPECI LFPG 271430Z");
    assert_eq!(decoded.field, ReportField::ReportType(ReportType::Speci));
}

#[test]
fn test_unknown_report_type_is_a_format_error() {
    let err = ReportTypeDecoder.parse("TAF LFPG ", false).unwrap_err();

    assert!(matches!(err, DecodeError::InvalidFormat { .. }));
    assert_eq!(err.decoder(), "report type");
}

#[test]
fn test_station_identifier() {
    let decoded = decode_ok(&IcaoDecoder, "LFPG 271430Z 09010KT");

    assert_eq!(decoded.field, ReportField::Icao("LFPG".to_string()));
    assert_eq!(decoded.remaining, "271430Z 09010KT");
}

#[test]
fn test_station_identifier_may_contain_digits() {
    let decoded = decode_ok(&IcaoDecoder, "K2G4 271430Z");

    assert_eq!(decoded.field, ReportField::Icao("K2G4".to_string()));
}

#[test]
fn test_short_or_lowercase_identifiers_are_format_errors() {
    for chunk in ["LF 271430Z", "lfpg 271430Z", "LFPG"] {
        let err = IcaoDecoder.parse(chunk, false).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidFormat { .. }));
    }
}

#[test]
fn test_observation_time() {
    let decoded = decode_ok(&ObservationTimeDecoder, "271430Z 09010KT");

    match decoded.field {
        ReportField::ObservationTime(observed) => {
            assert_eq!(observed.day(), 27);
            assert_eq!(observed.time().hour(), 14);
            assert_eq!(observed.time().minute(), 30);
        }
        other => panic!("expected an observation time field, got {}", other.name()),
    }
    assert_eq!(decoded.remaining, "09010KT");
}

#[test]
fn test_observation_day_out_of_range_is_a_validation_error() {
    for chunk in ["001430Z ", "321430Z "] {
        let err = ObservationTimeDecoder.parse(chunk, false).unwrap_err();

        assert!(matches!(err, DecodeError::DataValidation { .. }));
        assert_eq!(err.decoder(), "observation time");
    }
}

#[test]
fn test_observation_time_of_day_is_validated() {
    // Hour 24 and minute 60 match the grammar but are not real times.
    for chunk in ["272430Z ", "271460Z "] {
        let err = ObservationTimeDecoder.parse(chunk, false).unwrap_err();
        assert!(matches!(err, DecodeError::DataValidation { .. }));
    }
}

#[test]
fn test_malformed_observation_time_is_a_format_error() {
    for chunk in ["2714Z ", "271430 ", "271430Z"] {
        let err = ObservationTimeDecoder.parse(chunk, false).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidFormat { .. }));
    }
}
