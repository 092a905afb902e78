//! Format negotiation: which formats can flow through the element, and
//! what a concrete input format means for the conversion.

#[cfg(test)]
mod tests;

use std::fmt;

use crate::{
    caps::{template, Direction, FormatSet, FormatStructure, MediaFamily, PixelLayout, RGBA_MASKS},
    transform::PIXEL_SIZE,
    Fraction, IntRange, NegotiationError,
};

/// Byte order of the colour channels in a packed 32-bit input pixel.
/// Alpha is always the last byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelOrder {
    Rgba,
    Bgra,
}

impl ChannelOrder {
    /// The red mask that marks red in the first byte. Masks describe a
    /// 32-bit word, so this flips with the host's byte order.
    pub const RGBA_RED_MASK: u32 = if cfg!(target_endian = "big") {
        0x0000_00ff
    } else {
        RGBA_MASKS[0]
    };

    /// Anything other than the RGBA red mask is treated as BGRA.
    #[must_use]
    pub const fn from_red_mask(red_mask: u32) -> Self {
        if red_mask == Self::RGBA_RED_MASK {
            Self::Rgba
        } else {
            Self::Bgra
        }
    }
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Rgba => f.write_str("RGBA"),
            Self::Bgra => f.write_str("BGRA"),
        }
    }
}

/// A concrete input format that has been accepted for conversion.
///
/// Only produced by [`accept_format`], so its invariants always hold:
/// 32-bit depth and pixel size, and nonzero alpha and red masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormatDescriptor {
    width: u32,
    height: u32,
    framerate: Fraction,
    channel_order: ChannelOrder,
    bit_depth: u32,
    red_mask: u32,
    green_mask: u32,
    blue_mask: u32,
    alpha_mask: u32,
}

impl PixelFormatDescriptor {
    #[must_use]
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    #[inline]
    pub const fn framerate(&self) -> Fraction {
        self.framerate
    }

    #[must_use]
    #[inline]
    pub const fn channel_order(&self) -> ChannelOrder {
        self.channel_order
    }

    #[must_use]
    #[inline]
    pub const fn bit_depth(&self) -> u32 {
        self.bit_depth
    }

    /// Red, green, blue and alpha masks. Green and blue are zero when the
    /// input format did not state them.
    #[must_use]
    #[inline]
    pub const fn masks(&self) -> [u32; 4] {
        [self.red_mask, self.green_mask, self.blue_mask, self.alpha_mask]
    }

    /// Size in bytes of one frame in this format, before and after
    /// conversion.
    #[must_use]
    pub fn frame_size(&self) -> usize {
        self.width as usize * self.height as usize * PIXEL_SIZE
    }

    /// The fixed AYUV format produced from this input.
    #[must_use]
    pub fn output_format(&self) -> FormatStructure {
        FormatStructure::new(MediaFamily::Yuv)
            .with_layout(PixelLayout::Ayuv)
            .with_size(self.width, self.height)
            .with_framerate(self.framerate)
    }
}

/// Computes the formats this element can offer on the side opposite to
/// `direction`, given that side `direction` proposes `proposed`.
///
/// The proposal is first restricted to what this element accepts on the
/// proposing side. Layout-specific fields are then dropped, the family is
/// switched to the other side's, and the result is intersected with the
/// formats supported there. An empty result means no format fits.
#[must_use]
pub fn negotiate(direction: Direction, proposed: &FormatSet) -> FormatSet {
    let counterpart = direction.opposite();
    let local: FormatSet = proposed
        .intersect(&template(direction))
        .iter()
        .map(|s| {
            let mut s = *s;
            s.strip_format_fields();
            s.family = counterpart.family();
            s
        })
        .collect();

    let mut result = local.intersect(&template(counterpart));
    result.simplify();

    log::trace!("transformed {} to {}", proposed, result);

    result
}

fn fixed_field(value: Option<IntRange>, name: &'static str) -> Result<u32, NegotiationError> {
    value
        .and_then(|range| range.fixed_value())
        .ok_or(NegotiationError::MissingField(name))
}

/// Validates a fully resolved input format.
///
/// # Errors
/// - If the structure is not raw RGB
/// - If width, height or framerate are missing or not fixed
/// - If the framerate is not a valid fraction
/// - If the red mask, alpha mask, depth or bpp are missing
/// - If the alpha or red mask is zero
/// - If depth or bpp is not 32
pub fn accept_format(caps: &FormatStructure) -> Result<PixelFormatDescriptor, NegotiationError> {
    if caps.family != MediaFamily::Rgb {
        return Err(NegotiationError::WrongFamily(caps.family));
    }

    let width = fixed_field(caps.width, "width")?;
    let height = fixed_field(caps.height, "height")?;
    let framerate = caps
        .framerate
        .and_then(|range| range.fixed_value())
        .ok_or(NegotiationError::MissingField("framerate"))?;
    if !framerate.is_valid() {
        return Err(NegotiationError::InvalidFramerate(framerate));
    }
    let red_mask = caps
        .red_mask
        .ok_or(NegotiationError::MissingField("red_mask"))?;
    let alpha_mask = caps
        .alpha_mask
        .ok_or(NegotiationError::MissingField("alpha_mask"))?;
    let depth = caps.depth.ok_or(NegotiationError::MissingField("depth"))?;
    let bpp = caps.bpp.ok_or(NegotiationError::MissingField("bpp"))?;

    if alpha_mask == 0 {
        return Err(NegotiationError::NoAlpha);
    }
    if red_mask == 0 {
        return Err(NegotiationError::NoRed);
    }
    if depth != 32 {
        return Err(NegotiationError::UnsupportedDepth(depth));
    }
    if bpp != 32 {
        return Err(NegotiationError::UnsupportedBpp(bpp));
    }

    Ok(PixelFormatDescriptor {
        width,
        height,
        framerate,
        channel_order: ChannelOrder::from_red_mask(red_mask),
        bit_depth: depth,
        red_mask,
        green_mask: caps.green_mask.unwrap_or(0),
        blue_mask: caps.blue_mask.unwrap_or(0),
        alpha_mask,
    })
}
