//! In-place conversion of packed RGBA/BGRA pixels to AYUV.

#![allow(clippy::many_single_char_names)]


use v_frame::plane::Plane;

use crate::{
    coefficients::{CHROMA_U, CHROMA_V, LUMA, OFFSETS},
    lut::CROSS_PROCESS,
    ChannelOrder,
};

/// Bytes per packed pixel, on input and on output.
pub const PIXEL_SIZE: usize = 4;

/// Truncates toward zero and keeps the low byte. Out-of-range values wrap
/// around instead of saturating like a plain `as u8` would.
#[inline(always)]
fn wrap_to_u8(value: f64) -> u8 {
    value as i32 as u8
}

/// Converts already tone-mapped `r`, `g`, `b` to `[y, u, v]`.
///
/// Each component is evaluated left to right in `f64` and then truncated,
/// so the result is bit-exact across platforms.
#[must_use]
#[inline(always)]
pub fn rgb_to_yuv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
    let y = r * LUMA[0] + g * LUMA[1] + b * LUMA[2] + OFFSETS[0];
    let u = r * CHROMA_U[0] + g * CHROMA_U[1] + b * CHROMA_U[2] + OFFSETS[1];
    let v = r * CHROMA_V[0] + g * CHROMA_V[1] + b * CHROMA_V[2] + OFFSETS[2];
    [wrap_to_u8(y), wrap_to_u8(u), wrap_to_u8(v)]
}

/// Converts a single pixel in the given channel order to `[a, y, u, v]`.
#[must_use]
pub fn convert_pixel(pixel: [u8; 4], order: ChannelOrder) -> [u8; 4] {
    let (r, b) = match order {
        ChannelOrder::Rgba => (pixel[0], pixel[2]),
        ChannelOrder::Bgra => (pixel[2], pixel[0]),
    };
    let [y, u, v] = rgb_to_yuv(
        CROSS_PROCESS.red(r),
        CROSS_PROCESS.green(pixel[1]),
        CROSS_PROCESS.blue(b),
    );
    [pixel[3], y, u, v]
}

// One loop per channel order, so the order is matched once per buffer
// rather than once per pixel.
macro_rules! transform_packed {
    ($order:ident, $r:literal, $g:literal, $b:literal) => {
        paste::item! {
            fn [<transform_ $order>](data: &mut [u8]) {
                for px in data.chunks_exact_mut(PIXEL_SIZE) {
                    let [y, u, v] = rgb_to_yuv(
                        CROSS_PROCESS.red(px[$r]),
                        CROSS_PROCESS.green(px[$g]),
                        CROSS_PROCESS.blue(px[$b]),
                    );
                    px[0] = px[3];
                    px[1] = y;
                    px[2] = u;
                    px[3] = v;
                }
            }
        }
    };
}

transform_packed!(rgba, 0, 1, 2);
transform_packed!(bgra, 2, 1, 0);

/// Converts every complete pixel of `data` from `order` to AYUV in place.
///
/// `data.len()` should be a multiple of [`PIXEL_SIZE`]. If it is not, the
/// trailing partial pixel is left untouched and a warning is logged; no
/// byte past the end of the slice is ever read or written.
pub fn transform(data: &mut [u8], order: ChannelOrder) {
    let tail = data.len() % PIXEL_SIZE;
    if tail != 0 {
        log::warn!(
            "Buffer of {} bytes is not a whole number of pixels, leaving the last {} bytes untouched",
            data.len(),
            tail
        );
    }

    match order {
        ChannelOrder::Rgba => transform_rgba(data),
        ChannelOrder::Bgra => transform_bgra(data),
    }
}

/// Converts the visible area of a packed plane in place.
///
/// The plane holds one byte per sample, so its width is the pixel width
/// times [`PIXEL_SIZE`]. Row padding is left untouched.
pub fn transform_plane(plane: &mut Plane<u8>, order: ChannelOrder) {
    let width = plane.cfg.width;
    let height = plane.cfg.height;
    let stride = plane.cfg.stride;
    for row in plane.data_origin_mut().chunks_mut(stride).take(height) {
        transform(&mut row[..width], order);
    }
}
