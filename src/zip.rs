/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The entropy-coding layer of ZIP compressed channels.
//!
//! ZIP channels wrap their payload in a zlib stream. This stage knows
//! nothing about prediction or endianness, it inflates to the byte
//! count the channel geometry demands and deflates whatever the
//! encoder hands it.
use alloc::vec::Vec;

use zune_inflate::{DeflateDecoder, DeflateEncoder, DeflateOptions};

use crate::errors::ChannelDecodeErrors;

/// Inflate a channel's zlib stream.
///
/// `expected` is the exact decompressed byte count implied by the
/// channel geometry, a stream inflating to anything else is an error
pub(crate) fn inflate(
    data: &[u8], expected: usize, confirm_checksum: bool
) -> Result<Vec<u8>, ChannelDecodeErrors> {
    let options = DeflateOptions::default()
        .set_size_hint(expected)
        .set_confirm_checksum(confirm_checksum);

    let mut decoder = DeflateDecoder::new_with_options(data, options);

    let bytes = decoder
        .decode_zlib()
        .map_err(ChannelDecodeErrors::ZlibDecodeErrors)?;

    if bytes.len() != expected {
        return Err(ChannelDecodeErrors::LengthMismatch(expected, bytes.len()));
    }
    Ok(bytes)
}

/// Deflate channel bytes into a zlib stream
pub(crate) fn deflate(data: &[u8]) -> Vec<u8> {
    DeflateEncoder::new(data).encode_zlib()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deflate_inflate_round_trip() {
        let data: Vec<u8> = (0..4096_u32).map(|x| (x % 251) as u8).collect();

        let compressed = deflate(&data);
        let decompressed = inflate(&compressed, data.len(), true).unwrap();

        assert_eq!(data, decompressed);
    }

    #[test]
    fn wrong_decompressed_size_fails() {
        let data = [1_u8; 64];
        let compressed = deflate(&data);

        assert!(inflate(&compressed, 63, true).is_err());
    }

    #[test]
    fn truncated_stream_fails() {
        let data = [7_u8; 512];
        let compressed = deflate(&data);

        assert!(inflate(&compressed[..compressed.len() / 2], 512, true).is_err());
    }
}
