/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Formatter};

use zune_inflate::errors::InflateDecodeErrors;

use crate::constants::{BitDepth, CompressionMethod};

/// Errors that can occur when decoding channel data
pub enum ChannelDecodeErrors {
    /// The buffer does not hold the byte count the channel header
    /// promised, arguments are expected and found
    LengthMismatch(usize, usize),
    /// A PackBits packet ran past a row boundary or the stream
    /// ended mid-row
    BadRle,
    /// The zlib stream failed to inflate
    ZlibDecodeErrors(InflateDecodeErrors),
    /// The depth/compression pair has no defined pipeline
    UnsupportedCombination(BitDepth, CompressionMethod),
    /// Dimensions larger than the configured limit, arguments are
    /// limit and found
    LargeDimensions(usize, usize),
    /// `width * height * sample_size` does not fit in `usize`
    OverflowingDimensions,
    Generic(&'static str)
}

impl Debug for ChannelDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Length mismatch, expected {expected} bytes but found {found}",
                )
            }
            Self::BadRle => {
                writeln!(f, "Bad RLE")
            }
            Self::ZlibDecodeErrors(err) => {
                writeln!(f, "Zlib error: {err:?}")
            }
            Self::UnsupportedCombination(depth, method) => {
                writeln!(
                    f,
                    "No decode pipeline for depth {depth:?} with compression {method:?}",
                )
            }
            Self::LargeDimensions(supported, found) => {
                writeln!(
                    f,
                    "Too large dimensions, supported {supported} but found {found}",
                )
            }
            Self::OverflowingDimensions => {
                writeln!(f, "Plane size overflows usize")
            }
            Self::Generic(reason) => {
                writeln!(f, "{reason}")
            }
        }
    }
}

impl From<&'static str> for ChannelDecodeErrors {
    fn from(r: &'static str) -> Self {
        Self::Generic(r)
    }
}

impl From<InflateDecodeErrors> for ChannelDecodeErrors {
    fn from(err: InflateDecodeErrors) -> Self {
        Self::ZlibDecodeErrors(err)
    }
}

/// Errors that can occur when encoding channel data
pub enum ChannelEncodeErrors {
    /// Sample buffer length does not match the declared geometry,
    /// arguments are expected and found
    LengthMismatch(usize, usize),
    /// The depth/compression pair has no defined pipeline
    UnsupportedCombination(BitDepth, CompressionMethod),
    /// `width * height * sample_size` does not fit in `usize`
    OverflowingDimensions
}

impl Debug for ChannelEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Length mismatch, expected {expected} bytes but found {found}",
                )
            }
            Self::UnsupportedCombination(depth, method) => {
                writeln!(
                    f,
                    "No encode pipeline for depth {depth:?} with compression {method:?}",
                )
            }
            Self::OverflowingDimensions => {
                writeln!(f, "Plane size overflows usize")
            }
        }
    }
}
