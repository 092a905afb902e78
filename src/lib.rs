#![deny(clippy::all)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::inline_always)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::similar_names)]
#![allow(clippy::use_self)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::default_numeric_fallback)]
#![warn(clippy::exit)]
#![warn(clippy::float_cmp_const)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::lossy_float_literal)]
#![warn(clippy::map_err_ignore)]
#![warn(clippy::mem_forget)]
#![warn(clippy::mod_module_files)]
#![warn(clippy::multiple_inherent_impl)]
#![warn(clippy::pattern_type_mismatch)]
#![warn(clippy::rest_pat_in_fully_bound_structs)]
#![warn(clippy::same_name_method)]
#![warn(clippy::str_to_string)]
#![warn(clippy::string_to_string)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::unnecessary_self_imports)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(clippy::use_debug)]

//! Converts packed RGBA or BGRA video frames to packed AYUV in place,
//! mapping every pixel through a fixed cross-process tone curve first.
//!
//! The crate is split the way a media pipeline drives it:
//! [`negotiate`] and [`accept_format`] settle the input format once per
//! format change, then [`transform`] runs on every frame with the
//! [`ChannelOrder`] that negotiation found. [`MillColor`] bundles both
//! behind the [`FormatNegotiator`] and [`PixelTransformer`] traits.

pub mod caps;
pub mod coefficients;
mod element;
mod errors;
pub mod lut;
mod negotiate;
mod transform;

pub use crate::caps::{
    Direction, Endianness, Fraction, FractionRange, FormatSet, FormatStructure, IntRange,
    MediaFamily, PixelLayout, ValueRange, BGRA_MASKS, RGBA_MASKS,
};
pub use crate::coefficients::{Colorimetry, OUTPUT_COLORIMETRY};
pub use crate::element::{ElementState, FormatNegotiator, MillColor, PixelTransformer};
pub use crate::errors::{FlowError, NegotiationError};
pub use crate::lut::{ToneLookupTable, CROSS_PROCESS};
pub use crate::negotiate::{accept_format, negotiate, ChannelOrder, PixelFormatDescriptor};
pub use crate::transform::{
    convert_pixel, rgb_to_yuv, transform, transform_plane, PIXEL_SIZE,
};
pub use av_data::pixel::{ColorPrimaries, MatrixCoefficients, TransferCharacteristic};
pub use v_frame::plane::Plane;
