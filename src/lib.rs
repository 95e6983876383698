//! A Photoshop PSD channel pixel-data decoder
//!
//! This crate decodes the per-channel image data embedded in PSD style
//! documents. A channel is one color or alpha plane, stored under one of
//! four compression schemes (raw, PackBits RLE, ZIP and ZIP with delta
//! prediction) at a bit depth of 1, 8, 16 or 32 bits per sample.
//!
//! ## What this crate is not
//! It is not a PSD file parser. Locating channels inside a document,
//! layer records, color modes, masks and everything else Photoshop
//! dreamt up over the years is somebody else's job, that somebody hands
//! us a byte buffer plus the per-channel header fields (width, height,
//! depth, compression tag) and gets back a flat sample buffer.
//!
//! Decoded samples are bit exact with what Photoshop compatible readers
//! produce, 16 and 32 bit data is converted from the big-endian disk
//! order to native order.
//!
//! # Example
//! - Decoding an RLE compressed 8-bit channel
//! ```no_run
//! use zune_psd_channel::ChannelDecoder;
//! use zune_psd_channel::constants::{BitDepth, CompressionMethod};
//! use zune_psd_channel::errors::ChannelDecodeErrors;
//! use zune_core::result::DecodingResult;
//!
//! fn main() -> Result<(), ChannelDecodeErrors> {
//!     let data: &[u8] = &[];
//!     let mut decoder =
//!         ChannelDecoder::new(data, 100, 100, BitDepth::Eight, CompressionMethod::RLE)?;
//!     let px = decoder.decode()?;
//!
//!     // depth selects the variant, 8 bit channels come back as U8
//!     match px {
//!         DecodingResult::U8(_) => {}
//!         DecodingResult::U16(_) => {}
//!         DecodingResult::F32(_) => {}
//!         _ => unreachable!()
//!     };
//!     Ok(())
//! }
//! ```
//!
//! # Features
//! - `threads`: Decode the prediction pass of large channels on multiple
//!    threads. Pulls in `std`.
//! - `log`: Enable trace logging via `zune-core/log`
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;
pub extern crate zune_core;

pub use decoder::ChannelDecoder;
pub use encoder::ChannelEncoder;

pub mod constants;
pub mod decoder;
pub mod encoder;
mod endian;
pub mod errors;
mod predict;
mod rle;
mod zip;
