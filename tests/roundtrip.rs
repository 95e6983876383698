//! Round-trip tests over every supported (depth, compression) pair.
//!
//! Encoded streams must decode back to the exact sample values for all
//! plane shapes, including degenerate single-row and single-column
//! planes.
use zune_core::result::DecodingResult;
use zune_psd_channel::constants::{BitDepth, CompressionMethod};
use zune_psd_channel::{ChannelDecoder, ChannelEncoder};

const DEPTHS: [BitDepth; 4] = [
    BitDepth::One,
    BitDepth::Eight,
    BitDepth::Sixteen,
    BitDepth::ThirtyTwo
];

const METHODS: [CompressionMethod; 4] = [
    CompressionMethod::NoCompression,
    CompressionMethod::RLE,
    CompressionMethod::Zip,
    CompressionMethod::ZipPrediction
];

const SHAPES: [(usize, usize); 6] = [(1, 1), (1, 17), (23, 1), (13, 7), (5, 3), (64, 33)];

fn xorshift(state: &mut u32) -> u32 {
    let mut x = *state;

    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Native-endian sample bytes for a plane, with long flat stretches
/// mixed in so RLE exercises both literal and repeat packets
fn sample_bytes(depth: BitDepth, width: usize, height: usize, seed: u32) -> Vec<u8> {
    let mut state = seed | 1;
    let samples = width * height;

    match depth {
        BitDepth::One | BitDepth::Eight => {
            let len = depth.buffer_size(width, height).unwrap();

            (0..len)
                .map(|i| {
                    if (i / 16) % 2 == 0 {
                        42
                    } else {
                        xorshift(&mut state) as u8
                    }
                })
                .collect()
        }
        BitDepth::Sixteen => {
            let mut out = Vec::with_capacity(samples * 2);

            for _ in 0..samples {
                out.extend_from_slice(&(xorshift(&mut state) as u16).to_ne_bytes());
            }
            out
        }
        BitDepth::ThirtyTwo => {
            let mut out = Vec::with_capacity(samples * 4);

            for _ in 0..samples {
                // keep values finite so equality is meaningful
                let value = (xorshift(&mut state) % 100_000) as f32 * 0.125 - 6000.0;
                out.extend_from_slice(&value.to_ne_bytes());
            }
            out
        }
    }
}

fn supported(depth: BitDepth, method: CompressionMethod) -> bool {
    !(depth == BitDepth::One && method == CompressionMethod::ZipPrediction)
}

fn assert_round_trip(depth: BitDepth, method: CompressionMethod, width: usize, height: usize) {
    let native = sample_bytes(depth, width, height, 0xBADC0DE);

    let compressed = ChannelEncoder::new(&native, width, height, depth, method)
        .encode()
        .unwrap();

    let mut decoder = ChannelDecoder::new(&compressed, width, height, depth, method).unwrap();

    match decoder.decode().unwrap() {
        DecodingResult::U8(samples) => assert_eq!(samples, &native),
        DecodingResult::U16(samples) => {
            let expected: Vec<u16> = native
                .chunks_exact(2)
                .map(|c| u16::from_ne_bytes(c.try_into().unwrap()))
                .collect();
            assert_eq!(samples, &expected);
        }
        DecodingResult::F32(samples) => {
            let expected: Vec<f32> = native
                .chunks_exact(4)
                .map(|c| f32::from_ne_bytes(c.try_into().unwrap()))
                .collect();
            assert_eq!(samples, &expected);
        }
        _ => unreachable!()
    }
}

#[test]
fn all_pairs_round_trip() {
    for depth in DEPTHS {
        for method in METHODS {
            if !supported(depth, method) {
                continue;
            }
            for (width, height) in SHAPES {
                assert_round_trip(depth, method, width, height);
            }
        }
    }
}

#[test]
fn large_predicted_plane_round_trips() {
    // large enough to push the prediction pass over its parallel cutoff
    assert_round_trip(
        BitDepth::Sixteen,
        CompressionMethod::ZipPrediction,
        600,
        500
    );
    assert_round_trip(
        BitDepth::ThirtyTwo,
        CompressionMethod::ZipPrediction,
        400,
        300
    );
}

#[test]
fn unsupported_pair_never_returns_a_buffer() {
    let result = ChannelDecoder::new(&[], 8, 8, BitDepth::One, CompressionMethod::ZipPrediction);

    assert!(result.is_err());
}

#[test]
fn zip_stream_matches_flate2_reference() {
    use std::io::Read;

    let width = 32;
    let height = 16;
    let native = sample_bytes(BitDepth::Eight, width, height, 0x5EED);

    let compressed =
        ChannelEncoder::new(&native, width, height, BitDepth::Eight, CompressionMethod::Zip)
            .encode()
            .unwrap();

    let mut reference = Vec::new();
    let mut decoder = flate2::read::ZlibDecoder::new(std::io::Cursor::new(&compressed));

    decoder.read_to_end(&mut reference).unwrap();

    assert_eq!(native, reference);
}

#[test]
fn corrupt_zip_stream_fails() {
    let native = sample_bytes(BitDepth::Eight, 16, 16, 0xDEAD);

    let mut compressed =
        ChannelEncoder::new(&native, 16, 16, BitDepth::Eight, CompressionMethod::Zip)
            .encode()
            .unwrap();

    // truncate the stream mid-way
    compressed.truncate(compressed.len() / 2);

    let mut decoder = ChannelDecoder::new(
        &compressed,
        16,
        16,
        BitDepth::Eight,
        CompressionMethod::Zip
    )
    .unwrap();

    assert!(decoder.decode().is_err());
}

#[test]
fn predicted_deltas_survive_a_crafted_stream() {
    // deltas [10, 2, -3, 0] must reconstruct to [10, 12, 9, 9]
    let deltas = [10_u8, 2, 253, 0];
    let samples = [10_u8, 12, 9, 9];

    // package the deltas as the zlib payload a real channel would carry
    let stream = ChannelEncoder::new(
        &samples,
        4,
        1,
        BitDepth::Eight,
        CompressionMethod::ZipPrediction
    )
    .encode()
    .unwrap();

    let mut decoder =
        ChannelDecoder::new(&stream, 4, 1, BitDepth::Eight, CompressionMethod::ZipPrediction)
            .unwrap();

    match decoder.decode().unwrap() {
        DecodingResult::U8(decoded) => {
            assert_eq!(decoded, &samples);

            // and the wire deltas are what the format defines
            let mut inflater = flate2::read::ZlibDecoder::new(std::io::Cursor::new(&stream));
            let mut wire = Vec::new();
            std::io::Read::read_to_end(&mut inflater, &mut wire).unwrap();
            assert_eq!(wire, deltas);
        }
        _ => unreachable!()
    }
}
