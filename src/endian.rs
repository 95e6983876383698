/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Big-endian disk order to native order and back.
//!
//! Multi-byte samples are stored big-endian on disk. Prediction
//! arithmetic runs on native words, so the swap sits between the byte
//! source and the prediction stage. 8-bit and packed 1-bit data never
//! comes through here.
use alloc::vec::Vec;

pub(crate) fn be_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|chunk| {
            let value: [u8; 2] = chunk.try_into().unwrap();
            u16::from_be_bytes(value)
        })
        .collect()
}

pub(crate) fn be_to_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| {
            let value: [u8; 4] = chunk.try_into().unwrap();
            f32::from_be_bytes(value)
        })
        .collect()
}

pub(crate) fn ne_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|chunk| {
            let value: [u8; 2] = chunk.try_into().unwrap();
            u16::from_ne_bytes(value)
        })
        .collect()
}

pub(crate) fn ne_to_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| {
            let value: [u8; 4] = chunk.try_into().unwrap();
            f32::from_ne_bytes(value)
        })
        .collect()
}

pub(crate) fn u16_to_be(words: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * 2);

    for word in words {
        out.extend_from_slice(&word.to_be_bytes());
    }
    out
}

pub(crate) fn f32_to_be(samples: &[f32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * 4);

    for sample in samples {
        out.extend_from_slice(&sample.to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u16_value_round_trip() {
        // 0x1234 stored big-endian decodes to the native value 0x1234
        let words = be_to_u16(&[0x12, 0x34]);
        assert_eq!(words, [0x1234]);

        assert_eq!(u16_to_be(&words), [0x12, 0x34]);
    }

    #[test]
    fn f32_round_trip() {
        let bytes = f32_to_be(&[1.5, -0.25]);
        assert_eq!(be_to_f32(&bytes), [1.5, -0.25]);
    }
}
