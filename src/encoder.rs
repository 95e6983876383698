/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The per-channel encoder, the mirror of [`ChannelDecoder`].
//!
//! Each pipeline runs the decode stages in reverse, samples →
//! prediction → big-endian byte order → entropy coding. Output streams
//! are valid and round-trip exactly, they are not promised to be
//! byte-identical to what Photoshop itself writes.
//!
//! [`ChannelDecoder`]: crate::decoder::ChannelDecoder
use alloc::vec::Vec;

use crate::constants::{BitDepth, CompressionMethod};
use crate::errors::ChannelEncodeErrors;
use crate::{endian, predict, rle, zip};

/// Encodes a flat sample buffer into one channel's image data.
///
/// # NOTE.
///
/// Data is expected as NATIVE ENDIAN sample bytes, two bytes per
/// sample for 16-bit channels and four for 32-bit floats, packed rows
/// for 1-bit bitmaps.
///
/// If one has a vector/slice of [`u16`] or [`f32`], one can use either
/// `align_to` or convert to native endian bytes with a simple loop.
///
/// # Example
/// - Encode a 3 by 2 8-bit channel with RLE
/// ```
/// use zune_psd_channel::ChannelEncoder;
/// use zune_psd_channel::constants::{BitDepth, CompressionMethod};
///
/// let samples = [10, 10, 10, 9, 9, 9];
/// let encoder =
///     ChannelEncoder::new(&samples, 3, 2, BitDepth::Eight, CompressionMethod::RLE);
///
/// let compressed = encoder.encode().unwrap();
/// assert!(!compressed.is_empty());
/// ```
pub struct ChannelEncoder<'a> {
    data:        &'a [u8],
    width:       usize,
    height:      usize,
    depth:       BitDepth,
    compression: CompressionMethod
}

impl<'a> ChannelEncoder<'a> {
    /// Create a new encoder for one channel
    ///
    /// # Arguments
    /// - data: Native-endian sample bytes, row major
    /// - width, height: Plane dimensions in samples
    /// - depth: Bit depth to encode at
    /// - compression: Compression scheme to apply
    pub fn new(
        data: &'a [u8], width: usize, height: usize, depth: BitDepth,
        compression: CompressionMethod
    ) -> ChannelEncoder<'a> {
        ChannelEncoder {
            data,
            width,
            height,
            depth,
            compression
        }
    }

    /// Encode the channel, returning the compressed byte stream as it
    /// would sit in a document
    pub fn encode(&self) -> Result<Vec<u8>, ChannelEncodeErrors> {
        if self.depth == BitDepth::One && self.compression == CompressionMethod::ZipPrediction {
            return Err(ChannelEncodeErrors::UnsupportedCombination(
                self.depth,
                self.compression
            ));
        }

        let expected = self
            .depth
            .buffer_size(self.width, self.height)
            .ok_or(ChannelEncodeErrors::OverflowingDimensions)?;

        let found = self.data.len();

        if expected != found {
            return Err(ChannelEncodeErrors::LengthMismatch(expected, found));
        }

        let out = match self.compression {
            CompressionMethod::NoCompression => self.reinterpret_ne(),
            CompressionMethod::RLE => {
                let row_bytes = self.depth.bytes_per_row(self.width);

                rle::encode_rle(&self.reinterpret_ne(), row_bytes)
            }
            CompressionMethod::Zip => zip::deflate(&self.reinterpret_ne()),
            CompressionMethod::ZipPrediction => {
                let coded = match self.depth {
                    // rejected above
                    BitDepth::One => unreachable!(),
                    BitDepth::Eight => {
                        let mut rows = self.data.to_vec();

                        predict::predict(&mut rows, self.width);
                        rows
                    }
                    BitDepth::Sixteen => {
                        // deltas are computed on native words and land on
                        // disk word by word, big-endian
                        let mut words = endian::ne_to_u16(self.data);

                        predict::predict(&mut words, self.width);
                        endian::u16_to_be(&words)
                    }
                    BitDepth::ThirtyTwo => {
                        let samples = endian::ne_to_f32(self.data);

                        predict::predict_f32(&samples, self.width)
                    }
                };
                zip::deflate(&coded)
            }
        };
        Ok(out)
    }

    /// Convert native sample bytes into big-endian disk bytes
    fn reinterpret_ne(&self) -> Vec<u8> {
        match self.depth {
            BitDepth::One | BitDepth::Eight => self.data.to_vec(),
            BitDepth::Sixteen => endian::u16_to_be(&endian::ne_to_u16(self.data)),
            BitDepth::ThirtyTwo => endian::f32_to_be(&endian::ne_to_f32(self.data))
        }
    }
}
