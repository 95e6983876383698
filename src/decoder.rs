/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The per-channel decoder.
//!
//! [`ChannelDecoder`] owns one channel's compressed bytes plus the
//! header fields the container parser read for it, picks the decode
//! pipeline the (compression, depth) pair calls for and hands back a
//! flat native-endian sample buffer.
//!
//! Pipelines compose the stages in a fixed order, compressed bytes →
//! byte source (raw, PackBits or inflate) → endian fix-up → prediction
//! removal, which mirrors how the data was built up when written.
use alloc::vec;
use alloc::vec::Vec;

use zune_core::log::trace;
use zune_core::options::DecoderOptions;
use zune_core::result::DecodingResult;

use crate::constants::{BitDepth, CompressionMethod};
use crate::errors::ChannelDecodeErrors;
use crate::{endian, predict, rle, zip};

/// Decodes a single channel of a layered image document.
///
/// Constructed once per channel from the compressed bytes and the
/// per-channel header fields. The first successful [`decode`] caches
/// its result, later calls return the cached buffer until
/// [`invalidate`] clears it.
///
/// [`decode`]: ChannelDecoder::decode
/// [`invalidate`]: ChannelDecoder::invalidate
pub struct ChannelDecoder<'a> {
    data:        &'a [u8],
    width:       usize,
    height:      usize,
    depth:       BitDepth,
    compression: CompressionMethod,
    options:     DecoderOptions,
    decoded:     Option<DecodingResult>
}

impl<'a> ChannelDecoder<'a> {
    /// Create a new decoder for one channel's compressed data
    ///
    /// # Arguments
    /// - data: The channel's image data as stored in the document
    /// - width, height: Plane dimensions in samples
    /// - depth: Bit depth from the document header
    /// - compression: Per-channel compression tag
    pub fn new(
        data: &'a [u8], width: usize, height: usize, depth: BitDepth,
        compression: CompressionMethod
    ) -> Result<ChannelDecoder<'a>, ChannelDecodeErrors> {
        Self::new_with_options(data, width, height, depth, compression, DecoderOptions::default())
    }

    /// Creates a new decoder with options that influence decoding
    /// routines, e.g dimension limits and zlib checksum confirmation
    pub fn new_with_options(
        data: &'a [u8], width: usize, height: usize, depth: BitDepth,
        compression: CompressionMethod, options: DecoderOptions
    ) -> Result<ChannelDecoder<'a>, ChannelDecodeErrors> {
        if width > options.get_max_width() {
            return Err(ChannelDecodeErrors::LargeDimensions(
                options.get_max_width(),
                width
            ));
        }

        if height > options.get_max_height() {
            return Err(ChannelDecodeErrors::LargeDimensions(
                options.get_max_height(),
                height
            ));
        }

        if depth == BitDepth::One && compression == CompressionMethod::ZipPrediction {
            return Err(ChannelDecodeErrors::UnsupportedCombination(
                depth,
                compression
            ));
        }

        if depth.buffer_size(width, height).is_none() {
            return Err(ChannelDecodeErrors::OverflowingDimensions);
        }

        Ok(ChannelDecoder {
            data,
            width,
            height,
            depth,
            compression,
            options,
            decoded: None
        })
    }

    /// Decode the channel into a flat sample buffer.
    ///
    /// The result is cached, repeated calls are free until
    /// [`invalidate`](ChannelDecoder::invalidate) is called. The cache
    /// is not kept in sync with the input bytes, callers that mutate
    /// those must invalidate themselves.
    ///
    /// # Returns
    /// - `Ok(samples)`: `U8` for 1-bit (packed) and 8-bit channels,
    ///   `U16` for 16-bit, `F32` for 32-bit, all native endian
    /// - `Err(e)`: What went wrong. No partial buffer is ever returned
    pub fn decode(&mut self) -> Result<&DecodingResult, ChannelDecodeErrors> {
        if self.decoded.is_none() {
            let samples = self.decode_samples()?;
            self.decoded = Some(samples);
        }

        match self.decoded.as_ref() {
            Some(samples) => Ok(samples),
            None => unreachable!()
        }
    }

    /// Drop the cached sample buffer, the next
    /// [`decode`](ChannelDecoder::decode) runs the full pipeline again
    pub fn invalidate(&mut self) {
        self.decoded = None;
    }

    /// Channel width and height respectively
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Channel bit depth
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Channel compression method
    pub const fn compression(&self) -> CompressionMethod {
        self.compression
    }

    fn decode_samples(&self) -> Result<DecodingResult, ChannelDecodeErrors> {
        let expected = self
            .depth
            .buffer_size(self.width, self.height)
            .ok_or(ChannelDecodeErrors::OverflowingDimensions)?;

        trace!("Channel width: {}", self.width);
        trace!("Channel height: {}", self.height);
        trace!("Bit depth: {:?}", self.depth);
        trace!("Compression: {:?}", self.compression);

        match self.compression {
            CompressionMethod::NoCompression => {
                if self.data.len() != expected {
                    return Err(ChannelDecodeErrors::LengthMismatch(
                        expected,
                        self.data.len()
                    ));
                }
                Ok(self.reinterpret_be(self.data.to_vec()))
            }
            CompressionMethod::RLE => {
                let row_bytes = self.depth.bytes_per_row(self.width);
                let mut out = vec![0; expected];

                rle::decode_rle(self.data, &mut out, row_bytes)?;

                Ok(self.reinterpret_be(out))
            }
            CompressionMethod::Zip => {
                let bytes = zip::inflate(self.data, expected, self.confirm_checksum())?;

                Ok(self.reinterpret_be(bytes))
            }
            CompressionMethod::ZipPrediction => {
                let mut bytes = zip::inflate(self.data, expected, self.confirm_checksum())?;

                match self.depth {
                    BitDepth::One => Err(ChannelDecodeErrors::UnsupportedCombination(
                        self.depth,
                        self.compression
                    )),
                    BitDepth::Eight => {
                        predict::unpredict(&mut bytes, self.width);

                        Ok(DecodingResult::U8(bytes))
                    }
                    BitDepth::Sixteen => {
                        // deltas are stored word by word, so they are
                        // big-endian and must be reversed before the sums
                        let mut samples = endian::be_to_u16(&bytes);

                        predict::unpredict(&mut samples, self.width);

                        Ok(DecodingResult::U16(samples))
                    }
                    BitDepth::ThirtyTwo => {
                        let mut samples = vec![0.0; self.width * self.height];

                        predict::unpredict_f32(&mut bytes, &mut samples, self.width);

                        Ok(DecodingResult::F32(samples))
                    }
                }
            }
        }
    }

    /// Convert big-endian disk bytes into a depth-correct native buffer
    fn reinterpret_be(&self, bytes: Vec<u8>) -> DecodingResult {
        match self.depth {
            BitDepth::One | BitDepth::Eight => DecodingResult::U8(bytes),
            BitDepth::Sixteen => DecodingResult::U16(endian::be_to_u16(&bytes)),
            BitDepth::ThirtyTwo => DecodingResult::F32(endian::be_to_f32(&bytes))
        }
    }

    fn confirm_checksum(&self) -> bool {
        self.options.inflate_get_confirm_adler()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_length_mismatch_is_eager() {
        let data = [0_u8; 11];
        let mut decoder = ChannelDecoder::new(
            &data,
            4,
            3,
            BitDepth::Eight,
            CompressionMethod::NoCompression
        )
        .unwrap();

        assert!(decoder.decode().is_err());
    }

    #[test]
    fn one_bit_prediction_is_rejected_up_front() {
        let result = ChannelDecoder::new(
            &[],
            16,
            16,
            BitDepth::One,
            CompressionMethod::ZipPrediction
        );

        assert!(matches!(
            result,
            Err(ChannelDecodeErrors::UnsupportedCombination(_, _))
        ));
    }

    #[test]
    fn large_dimensions_are_rejected() {
        let options = DecoderOptions::default().set_max_width(10);
        let result = ChannelDecoder::new_with_options(
            &[],
            11,
            1,
            BitDepth::Eight,
            CompressionMethod::NoCompression,
            options
        );

        assert!(matches!(
            result,
            Err(ChannelDecodeErrors::LargeDimensions(_, _))
        ));
    }

    #[test]
    fn zero_area_channel_decodes_to_empty() {
        let mut decoder =
            ChannelDecoder::new(&[], 0, 0, BitDepth::Sixteen, CompressionMethod::RLE).unwrap();

        match decoder.decode().unwrap() {
            DecodingResult::U16(samples) => assert!(samples.is_empty()),
            _ => unreachable!()
        }
    }

    #[test]
    fn decode_is_cached_until_invalidated() {
        let data = [1_u8, 2, 3, 4];
        let mut decoder =
            ChannelDecoder::new(&data, 2, 2, BitDepth::Eight, CompressionMethod::NoCompression)
                .unwrap();

        let first = match decoder.decode().unwrap() {
            DecodingResult::U8(samples) => samples.clone(),
            _ => unreachable!()
        };

        // second decode returns the cache, invalidation forces a rerun
        decoder.decode().unwrap();
        decoder.invalidate();

        let second = match decoder.decode().unwrap() {
            DecodingResult::U8(samples) => samples.clone(),
            _ => unreachable!()
        };
        assert_eq!(first, second);
    }
}
