#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // fuzzed code goes here

    use zune_psd_channel::constants::{BitDepth, CompressionMethod};
    use zune_psd_channel::ChannelDecoder;

    if data.len() < 6 {
        return;
    }
    // keep planes small so allocation stays bounded
    let width = usize::from(u16::from_be_bytes([data[0], data[1]])) % 1024;
    let height = usize::from(u16::from_be_bytes([data[2], data[3]])) % 1024;

    let depths = [
        BitDepth::One,
        BitDepth::Eight,
        BitDepth::Sixteen,
        BitDepth::ThirtyTwo
    ];
    let depth = depths[usize::from(data[4]) % depths.len()];

    let method = match CompressionMethod::from_int(u16::from(data[5]) % 4) {
        Some(method) => method,
        None => return
    };

    if let Ok(mut decoder) = ChannelDecoder::new(&data[6..], width, height, depth, method) {
        let _ = decoder.decode();
    }
});
