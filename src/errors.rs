use thiserror::Error;

/// Reason a concrete input format was not accepted.
///
/// Rejection is an expected outcome of format negotiation, not an
/// internal failure: the host keeps looking for another format and no
/// frames flow until one is accepted.
///
/// # Example
/// ```
/// use millcolor::{accept_format, FormatStructure, MediaFamily, NegotiationError};
///
/// // A bare structure carries no dimensions at all.
/// let caps = FormatStructure::new(MediaFamily::Rgb);
/// assert_eq!(accept_format(&caps).unwrap_err(), NegotiationError::MissingField("width"));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationError {
    /// The structure does not describe packed RGB input at all.
    #[error("Expected raw RGB input, got {0}.")]
    WrongFamily(crate::MediaFamily),
    /// A required field is absent, or holds a range instead of a fixed value.
    #[error("Required field `{0}` is missing or not fixed.")]
    MissingField(&'static str),
    #[error("Framerate {0} is not a valid fraction.")]
    InvalidFramerate(crate::Fraction),
    #[error("Input has no alpha channel.")]
    NoAlpha,
    #[error("Input has no red channel.")]
    NoRed,
    #[error("Only 32-bit depth is supported, got {0}.")]
    UnsupportedDepth(u32),
    #[error("Only 32 bits per pixel are supported, got {0}.")]
    UnsupportedBpp(u32),
}

/// Error returned by the element when a frame cannot be processed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    /// A frame arrived before any input format was accepted.
    #[error("No input format has been negotiated yet.")]
    NotNegotiated,
}
