//! Test utilities shared across the chunk decoder test modules.

use crate::chunk_decoder::{ChunkDecoder, DecodedChunk};

mod header_group_tests;

/// Decode a chunk, panicking with context when decoding fails.
pub fn decode_ok<D: ChunkDecoder>(decoder: &D, remaining: &str) -> DecodedChunk {
    decoder
        .parse(remaining, false)
        .unwrap_or_else(|e| panic!("failed to decode \"{remaining}\": {e}"))
}
