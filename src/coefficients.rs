//! The colour matrix applied after tone mapping.
//!
//! The weights are close to, but not exactly, the BT.601 full-range
//! matrix. They are kept as given so output stays bit-identical with
//! existing footage processed by this look.


use av_data::pixel::{ColorPrimaries, MatrixCoefficients, TransferCharacteristic};
use nalgebra::Matrix3;

/// Weights of `r`, `g`, `b` in Y.
pub const LUMA: [f64; 3] = [0.299, 0.587, 0.114];
/// Weights of `r`, `g`, `b` in U.
pub const CHROMA_U: [f64; 3] = [-0.169, -0.332, 0.500];
/// Weights of `r`, `g`, `b` in V.
pub const CHROMA_V: [f64; 3] = [0.500, -0.419, -0.0813];
/// Added to Y, U and V after weighting.
pub const OFFSETS: [f64; 3] = [0.0, 128.0, 128.0];

/// Describes how the produced AYUV should be interpreted downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colorimetry {
    pub matrix_coefficients: MatrixCoefficients,
    pub color_primaries: ColorPrimaries,
    pub transfer_characteristics: TransferCharacteristic,
    pub full_range: bool,
}

/// Colorimetry of every frame this crate outputs.
pub const OUTPUT_COLORIMETRY: Colorimetry = Colorimetry {
    matrix_coefficients: MatrixCoefficients::ST170M,
    color_primaries: ColorPrimaries::BT709,
    transfer_characteristics: TransferCharacteristic::SRGB,
    full_range: true,
};

/// The fixed weights as a row-major RGB to YUV matrix.
#[must_use]
#[rustfmt::skip]
pub fn matrix() -> Matrix3<f64> {
    Matrix3::new(
        LUMA[0], LUMA[1], LUMA[2],
        CHROMA_U[0], CHROMA_U[1], CHROMA_U[2],
        CHROMA_V[0], CHROMA_V[1], CHROMA_V[2],
    )
}

/// The canonical non-constant-luminance RGB to YUV matrix for the given
/// coefficients, or `None` if they are not defined by a `Kr`/`Kb` pair.
#[must_use]
pub fn reference_matrix(coefficients: MatrixCoefficients) -> Option<Matrix3<f64>> {
    let (kr, kb) = match coefficients {
        MatrixCoefficients::BT470M => (0.3, 0.11),
        MatrixCoefficients::ST240M => (0.212, 0.087),
        MatrixCoefficients::BT470BG | MatrixCoefficients::ST170M => (0.299, 0.114),
        MatrixCoefficients::BT709 => (0.2126, 0.0722),
        MatrixCoefficients::BT2020NonConstantLuminance
        | MatrixCoefficients::BT2020ConstantLuminance => (0.2627, 0.0593),
        _ => return None,
    };
    Some(matrix_from_kr_kb(kr, kb))
}

fn matrix_from_kr_kb(kr: f64, kb: f64) -> Matrix3<f64> {
    let kg = 1.0 - kr - kb;
    let uscale = 1.0 / (2.0 - 2.0 * kb);
    let vscale = 1.0 / (2.0 - 2.0 * kr);

    Matrix3::from_row_slice(&[
        kr,
        kg,
        kb,
        -kr * uscale,
        -kg * uscale,
        (1.0 - kb) * uscale,
        (1.0 - kr) * vscale,
        -kg * vscale,
        -kb * vscale,
    ])
}

/// Largest absolute difference between the fixed weights and the
/// canonical matrix for `coefficients`.
#[must_use]
pub fn deviation_from(coefficients: MatrixCoefficients) -> Option<f64> {
    let reference = reference_matrix(coefficients)?;
    Some((matrix() - reference).amax())
}
