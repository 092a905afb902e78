//! The element the host pipeline drives: per-stream state plus the two
//! capabilities it calls into.


use crate::{
    accept_format, negotiate, transform, ChannelOrder, Direction, FlowError, FormatSet,
    FormatStructure, NegotiationError, PixelFormatDescriptor,
};

/// Answers the host's format queries.
pub trait FormatNegotiator {
    /// Given formats proposed on side `direction`, returns the formats
    /// that can be offered on the other side.
    fn transform_caps(&self, direction: Direction, caps: &FormatSet) -> FormatSet;

    /// Fixes the input format for the frames that follow.
    ///
    /// # Errors
    /// - If `incaps` is not a complete packed 32-bit RGBA or BGRA format
    fn set_caps(&mut self, incaps: &FormatStructure) -> Result<ChannelOrder, NegotiationError>;
}

/// Converts frames in place.
pub trait PixelTransformer {
    /// # Errors
    /// - If no input format has been accepted yet
    fn transform_ip(&self, data: &mut [u8]) -> Result<(), FlowError>;
}

/// Per-stream negotiation result. Written only by negotiation, read by
/// every frame conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementState {
    format: Option<PixelFormatDescriptor>,
}

impl ElementState {
    #[must_use]
    pub const fn new() -> Self {
        Self { format: None }
    }

    /// Accepts `incaps` as the input format, or keeps the previous state
    /// if it is rejected.
    ///
    /// # Errors
    /// - If `incaps` is rejected by [`accept_format`]
    pub fn set_format(&mut self, incaps: &FormatStructure) -> Result<ChannelOrder, NegotiationError> {
        match accept_format(incaps) {
            Ok(format) => {
                log::debug!(
                    "accepted {}x{} {} input at {} fps",
                    format.width(),
                    format.height(),
                    format.channel_order(),
                    format.framerate()
                );
                self.format = Some(format);
                Ok(format.channel_order())
            }
            Err(e) => {
                log::debug!("incomplete or non-RGBA input caps {}: {}", incaps, e);
                Err(e)
            }
        }
    }

    /// Forgets the negotiated format, as on stream teardown.
    pub fn reset(&mut self) {
        self.format = None;
    }

    #[must_use]
    #[inline]
    pub const fn format(&self) -> Option<&PixelFormatDescriptor> {
        self.format.as_ref()
    }

    #[must_use]
    #[inline]
    pub fn channel_order(&self) -> Option<ChannelOrder> {
        self.format.map(|f| f.channel_order())
    }

    #[must_use]
    #[inline]
    pub const fn is_negotiated(&self) -> bool {
        self.format.is_some()
    }
}

/// Converts RGBA or BGRA frames to AYUV through the cross-process look.
///
/// One instance serves one stream. The host must accept a format with
/// [`FormatNegotiator::set_caps`] before handing it frames.
///
/// # Example
/// ```
/// use millcolor::{
///     Fraction, FormatNegotiator, FormatStructure, MillColor, PixelTransformer, RGBA_MASKS,
/// };
///
/// let mut element = MillColor::new();
/// let caps = FormatStructure::packed_rgb(RGBA_MASKS)
///     .with_size(1, 1)
///     .with_framerate(Fraction::new(30, 1));
/// element.set_caps(&caps).unwrap();
///
/// let mut frame = [0x10, 0x20, 0x30, 0xFF];
/// element.transform_ip(&mut frame).unwrap();
/// assert_eq!(frame[0], 0xFF);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MillColor {
    state: ElementState,
}

impl MillColor {
    pub const NAME: &'static str = "millcolor";

    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ElementState::new(),
        }
    }

    #[must_use]
    #[inline]
    pub const fn state(&self) -> &ElementState {
        &self.state
    }

    /// Always in place: output frames reuse the input buffer.
    #[must_use]
    pub const fn is_in_place(&self) -> bool {
        true
    }

    pub fn stop(&mut self) {
        self.state.reset();
    }
}

impl FormatNegotiator for MillColor {
    fn transform_caps(&self, direction: Direction, caps: &FormatSet) -> FormatSet {
        negotiate(direction, caps)
    }

    fn set_caps(&mut self, incaps: &FormatStructure) -> Result<ChannelOrder, NegotiationError> {
        self.state.set_format(incaps)
    }
}

impl PixelTransformer for MillColor {
    fn transform_ip(&self, data: &mut [u8]) -> Result<(), FlowError> {
        let order = self.state.channel_order().ok_or(FlowError::NotNegotiated)?;
        transform(data, order);
        Ok(())
    }
}
