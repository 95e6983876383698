/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms)]

/// Bit depth of a single channel as stored in the PSD header.
///
/// This is the format's own enum and not [`zune_core::bit_depth::BitDepth`]
/// since PSD has a packed 1-bit bitmap mode zune-core cannot express.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BitDepth {
    /// Bitmap mode, 8 pixels packed per byte, rows padded
    /// to a byte boundary
    One = 1,
    /// One byte per sample
    Eight = 8,
    /// Two bytes per sample, big-endian on disk
    Sixteen = 16,
    /// Four bytes per sample, an IEEE-754 float, big-endian on disk
    ThirtyTwo = 32
}

impl BitDepth {
    /// Map the depth field of a channel header to a depth,
    /// `None` for anything the format doesn't define
    pub fn from_int(int: u16) -> Option<BitDepth> {
        match int {
            1 => Some(Self::One),
            8 => Some(Self::Eight),
            16 => Some(Self::Sixteen),
            32 => Some(Self::ThirtyTwo),
            _ => None
        }
    }

    /// Number of bytes one decoded sample occupies.
    ///
    /// 1-bit samples stay packed, so they also report one byte
    pub const fn sample_size(self) -> usize {
        match self {
            Self::One | Self::Eight => 1,
            Self::Sixteen => 2,
            Self::ThirtyTwo => 4
        }
    }

    /// Number of bytes one row of `width` samples occupies on disk.
    ///
    /// Only 1-bit rows differ from `width * sample_size`, they pack
    /// eight samples per byte and pad the tail
    pub const fn bytes_per_row(self, width: usize) -> usize {
        match self {
            Self::One => (width + 7) / 8,
            _ => width * self.sample_size()
        }
    }

    /// Total byte count of a `width` by `height` plane, or `None` when
    /// the multiplication would overflow `usize`
    pub fn buffer_size(self, width: usize, height: usize) -> Option<usize> {
        let row = match self {
            Self::One => width / 8 + usize::from(width % 8 != 0),
            _ => width.checked_mul(self.sample_size())?
        };
        row.checked_mul(height)
    }
}

/// Compression scheme of a single channel's image data
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CompressionMethod {
    NoCompression = 0,
    RLE = 1,
    Zip = 2,
    ZipPrediction = 3
}

impl CompressionMethod {
    pub fn from_int(int: u16) -> Option<CompressionMethod> {
        match int {
            0 => Some(Self::NoCompression),
            1 => Some(Self::RLE),
            2 => Some(Self::Zip),
            3 => Some(Self::ZipPrediction),
            _ => None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmap_rows_pad_to_byte() {
        assert_eq!(BitDepth::One.bytes_per_row(1), 1);
        assert_eq!(BitDepth::One.bytes_per_row(8), 1);
        assert_eq!(BitDepth::One.bytes_per_row(9), 2);
        assert_eq!(BitDepth::One.bytes_per_row(0), 0);
    }

    #[test]
    fn buffer_size_checks_overflow() {
        assert_eq!(BitDepth::Eight.buffer_size(4, 3), Some(12));
        assert_eq!(BitDepth::ThirtyTwo.buffer_size(usize::MAX / 2, 2), None);
    }

    #[test]
    fn unknown_header_ints_are_rejected() {
        assert_eq!(BitDepth::from_int(24), None);
        assert_eq!(CompressionMethod::from_int(4), None);
    }
}
