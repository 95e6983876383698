/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Horizontal delta prediction, the reversible transform ZIP channels
//! apply before entropy coding.
//!
//! Each row stores its first sample as-is and every later sample as the
//! wrapping difference to its left neighbour. Un-predicting is a
//! cumulative sum per row, strictly left to right. Rows never depend on
//! each other, which is what lets the decode pass fan out across
//! threads.
//!
//! The 32-bit float variant does not delta-code whole words. On disk a
//! row holds its four byte planes back to back, most significant plane
//! first, and one delta stream runs across the entire row of
//! `4 * width` bytes. Reference decoders carry the predictor across the
//! plane boundaries, so we do too.
use alloc::vec;
use alloc::vec::Vec;

pub(crate) trait DeltaSample: Copy {
    fn wrapping_add(self, other: Self) -> Self;
    fn wrapping_sub(self, other: Self) -> Self;
}

impl DeltaSample for u8 {
    fn wrapping_add(self, other: Self) -> Self {
        u8::wrapping_add(self, other)
    }
    fn wrapping_sub(self, other: Self) -> Self {
        u8::wrapping_sub(self, other)
    }
}

impl DeltaSample for u16 {
    fn wrapping_add(self, other: Self) -> Self {
        u16::wrapping_add(self, other)
    }
    fn wrapping_sub(self, other: Self) -> Self {
        u16::wrapping_sub(self, other)
    }
}

/// Below this many samples the spawn overhead beats the work
#[cfg(feature = "threads")]
const PARALLEL_CUTOFF: usize = 1 << 16;

/// Reconstruct absolute samples from row deltas, in place.
///
/// `data` holds whole rows of `width` native-endian samples
pub(crate) fn unpredict<T>(data: &mut [T], width: usize)
where
    T: DeltaSample + Send
{
    if width < 2 || data.is_empty() {
        return;
    }

    #[cfg(feature = "threads")]
    {
        if data.len() >= PARALLEL_CUTOFF {
            let threads = std::thread::available_parallelism().map_or(1, usize::from);
            let height = data.len() / width;
            let band_rows = ((height + threads - 1) / threads).max(1);

            std::thread::scope(|s| {
                for band in data.chunks_mut(band_rows * width) {
                    s.spawn(move || unpredict_rows(band, width));
                }
            });
            return;
        }
    }
    unpredict_rows(data, width);
}

fn unpredict_rows<T: DeltaSample>(data: &mut [T], width: usize) {
    for row in data.chunks_exact_mut(width) {
        for j in 1..width {
            row[j] = row[j].wrapping_add(row[j - 1]);
        }
    }
}

/// Delta-code absolute samples into row deltas, in place.
///
/// Runs right to left so every difference reads the untouched
/// left neighbour
pub(crate) fn predict<T: DeltaSample>(data: &mut [T], width: usize) {
    if width < 2 {
        return;
    }
    for row in data.chunks_exact_mut(width) {
        for j in (1..width).rev() {
            row[j] = row[j].wrapping_sub(row[j - 1]);
        }
    }
}

/// Un-predict 32-bit rows and gather the byte planes into floats.
///
/// `data` holds `height` delta-coded rows of `4 * width` bytes,
/// `out` receives `width` samples per row. Sample `j` of a row is the
/// big-endian word `[row[j], row[j + w], row[j + 2w], row[j + 3w]]`
pub(crate) fn unpredict_f32(data: &mut [u8], out: &mut [f32], width: usize) {
    if width == 0 || out.is_empty() {
        return;
    }
    let row_bytes = width * 4;

    #[cfg(feature = "threads")]
    {
        if data.len() >= PARALLEL_CUTOFF {
            let threads = std::thread::available_parallelism().map_or(1, usize::from);
            let height = out.len() / width;
            let band_rows = ((height + threads - 1) / threads).max(1);

            std::thread::scope(|s| {
                let bands = data
                    .chunks_mut(band_rows * row_bytes)
                    .zip(out.chunks_mut(band_rows * width));

                for (band, out_band) in bands {
                    s.spawn(move || unpredict_rows_f32(band, out_band, width));
                }
            });
            return;
        }
    }
    unpredict_rows_f32(data, out, width);
}

fn unpredict_rows_f32(data: &mut [u8], out: &mut [f32], width: usize) {
    let row_bytes = width * 4;

    let rows = data
        .chunks_exact_mut(row_bytes)
        .zip(out.chunks_exact_mut(width));

    for (row, out_row) in rows {
        for j in 1..row_bytes {
            row[j] = row[j].wrapping_add(row[j - 1]);
        }
        for (j, sample) in out_row.iter_mut().enumerate() {
            *sample = f32::from_be_bytes([
                row[j],
                row[j + width],
                row[j + 2 * width],
                row[j + 3 * width]
            ]);
        }
    }
}

/// Scatter floats into per-row byte planes and delta-code each row,
/// the inverse of [`unpredict_f32`]
pub(crate) fn predict_f32(samples: &[f32], width: usize) -> Vec<u8> {
    let mut out = vec![0_u8; samples.len() * 4];

    if width == 0 {
        return out;
    }
    let row_bytes = width * 4;

    let rows = out
        .chunks_exact_mut(row_bytes)
        .zip(samples.chunks_exact(width));

    for (row, sample_row) in rows {
        for (j, sample) in sample_row.iter().enumerate() {
            let bytes = sample.to_be_bytes();

            row[j] = bytes[0];
            row[j + width] = bytes[1];
            row[j + 2 * width] = bytes[2];
            row[j + 3 * width] = bytes[3];
        }
        for j in (1..row_bytes).rev() {
            row[j] = row[j].wrapping_sub(row[j - 1]);
        }
    }
    out
}
