//! Format descriptors exchanged with the host during negotiation.
//!
//! A [`FormatSet`] is an ordered list of [`FormatStructure`]s, each of which
//! describes one family of raw video formats. Every field of a structure is
//! optional: an absent field places no constraint on the format, so two
//! structures intersect field by field.


use std::{cmp::Ordering, fmt};

use num_traits::Bounded;

/// Masks of a packed 32-bit RGBA pixel, in red, green, blue, alpha order.
pub const RGBA_MASKS: [u32; 4] = [0xff00_0000, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff];
/// Masks of a packed 32-bit BGRA pixel, in red, green, blue, alpha order.
pub const BGRA_MASKS: [u32; 4] = [0x0000_ff00, 0x00ff_0000, 0xff00_0000, 0x0000_00ff];

/// The semantic family of a format structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFamily {
    Rgb,
    Yuv,
}

impl MediaFamily {
    #[must_use]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::Rgb => "video/x-raw-rgb",
            Self::Yuv => "video/x-raw-yuv",
        }
    }
}

impl fmt::Display for MediaFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.media_type())
    }
}

/// Which side of the element a format proposal describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The upstream side, carrying RGBA or BGRA frames.
    Input,
    /// The downstream side, carrying AYUV frames.
    Output,
}

impl Direction {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Input => Self::Output,
            Self::Output => Self::Input,
        }
    }

    /// The family formats on this side belong to.
    #[must_use]
    pub const fn family(self) -> MediaFamily {
        match self {
            Self::Input => MediaFamily::Rgb,
            Self::Output => MediaFamily::Yuv,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    LittleEndian,
    BigEndian,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::LittleEndian => f.write_str("1234"),
            Self::BigEndian => f.write_str("4321"),
        }
    }
}

/// Named packed YUV layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// Alpha, Y, U, V; one byte each.
    Ayuv,
}

impl PixelLayout {
    #[must_use]
    pub const fn fourcc(self) -> [u8; 4] {
        match self {
            Self::Ayuv => *b"AYUV",
        }
    }
}

impl fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Ayuv => f.write_str("AYUV"),
        }
    }
}

/// A rational number, used for framerates.
///
/// Two fractions compare equal when they denote the same value, so `30/1`
/// and `60/2` are interchangeable. Only fractions with a positive
/// denominator are meaningful; see [`Fraction::is_valid`].
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    pub numer: i32,
    pub denom: i32,
}

impl Fraction {
    pub const ZERO: Self = Self::new(0, 1);

    #[must_use]
    pub const fn new(numer: i32, denom: i32) -> Self {
        Self { numer, denom }
    }

    /// A usable framerate: non-negative with a positive denominator.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.denom > 0 && self.numer >= 0
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.numer) / f64::from(self.denom)
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i64::from(self.numer) * i64::from(other.denom);
        let rhs = i64::from(other.numer) * i64::from(self.denom);
        lhs.cmp(&rhs)
    }
}

impl Bounded for Fraction {
    fn min_value() -> Self {
        Self::new(i32::MIN, 1)
    }

    fn max_value() -> Self {
        Self::new(i32::MAX, 1)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

/// An inclusive range of values. A fixed value is a range with `min == max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange<T> {
    pub min: T,
    pub max: T,
}

pub type IntRange = ValueRange<u32>;
pub type FractionRange = ValueRange<Fraction>;

impl<T: Copy + Ord> ValueRange<T> {
    #[must_use]
    pub const fn fixed(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Returns `None` if `min > max`.
    #[must_use]
    pub fn new(min: T, max: T) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    /// The open-ended range `[min, T::MAX]`.
    #[must_use]
    pub fn at_least(min: T) -> Self
    where
        T: Bounded,
    {
        Self {
            min,
            max: T::max_value(),
        }
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn fixed_value(&self) -> Option<T> {
        self.is_fixed().then_some(self.min)
    }

    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// The overlap of two ranges, or `None` if they are disjoint.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        Self::new(self.min.max(other.min), self.max.min(other.max))
    }
}

impl<T: Copy + Ord + fmt::Display> fmt::Display for ValueRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "[ {}, {} ]", self.min, self.max)
        }
    }
}

/// One caps structure: a family plus optional constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatStructure {
    pub family: MediaFamily,
    pub width: Option<IntRange>,
    pub height: Option<IntRange>,
    pub framerate: Option<FractionRange>,
    pub layout: Option<PixelLayout>,
    pub endianness: Option<Endianness>,
    pub depth: Option<u32>,
    pub bpp: Option<u32>,
    pub red_mask: Option<u32>,
    pub green_mask: Option<u32>,
    pub blue_mask: Option<u32>,
    pub alpha_mask: Option<u32>,
}

/// Marks a field on which two structures cannot agree.
struct Disjoint;

fn merge_value<T: Copy + PartialEq>(a: Option<T>, b: Option<T>) -> Result<Option<T>, Disjoint> {
    match (a, b) {
        (Some(x), Some(y)) if x == y => Ok(Some(x)),
        (Some(_), Some(_)) => Err(Disjoint),
        (x, None) => Ok(x),
        (None, y) => Ok(y),
    }
}

fn merge_range<T: Copy + Ord>(
    a: Option<ValueRange<T>>,
    b: Option<ValueRange<T>>,
) -> Result<Option<ValueRange<T>>, Disjoint> {
    match (a, b) {
        (Some(x), Some(y)) => x.intersect(&y).map(Some).ok_or(Disjoint),
        (x, None) => Ok(x),
        (None, y) => Ok(y),
    }
}

// `constraint` being absent means anything goes.
fn value_within<T: PartialEq>(value: Option<T>, constraint: Option<T>) -> bool {
    match (value, constraint) {
        (_, None) => true,
        (Some(v), Some(c)) => v == c,
        (None, Some(_)) => false,
    }
}

fn range_within<T: Copy + Ord>(
    value: Option<ValueRange<T>>,
    constraint: Option<ValueRange<T>>,
) -> bool {
    match (value, constraint) {
        (_, None) => true,
        (Some(v), Some(c)) => c.contains(&v),
        (None, Some(_)) => false,
    }
}

impl FormatStructure {
    /// An unconstrained structure of the given family.
    #[must_use]
    pub const fn new(family: MediaFamily) -> Self {
        Self {
            family,
            width: None,
            height: None,
            framerate: None,
            layout: None,
            endianness: None,
            depth: None,
            bpp: None,
            red_mask: None,
            green_mask: None,
            blue_mask: None,
            alpha_mask: None,
        }
    }

    /// A fully packed 32-bit RGB structure with the given red, green, blue
    /// and alpha masks, in the big-endian word convention.
    #[must_use]
    pub const fn packed_rgb(masks: [u32; 4]) -> Self {
        let mut s = Self::new(MediaFamily::Rgb);
        s.endianness = Some(Endianness::BigEndian);
        s.depth = Some(32);
        s.bpp = Some(32);
        s.red_mask = Some(masks[0]);
        s.green_mask = Some(masks[1]);
        s.blue_mask = Some(masks[2]);
        s.alpha_mask = Some(masks[3]);
        s
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(IntRange::fixed(width));
        self.height = Some(IntRange::fixed(height));
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: IntRange) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: IntRange) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_framerate(mut self, framerate: Fraction) -> Self {
        self.framerate = Some(FractionRange::fixed(framerate));
        self
    }

    #[must_use]
    pub fn with_framerate_range(mut self, framerate: FractionRange) -> Self {
        self.framerate = Some(framerate);
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: PixelLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Drops every field that names a concrete pixel layout, keeping only
    /// the family, dimensions and framerate.
    pub fn strip_format_fields(&mut self) {
        self.layout = None;
        self.endianness = None;
        self.depth = None;
        self.bpp = None;
        self.red_mask = None;
        self.green_mask = None;
        self.blue_mask = None;
        self.alpha_mask = None;
    }

    /// The structure satisfying both `self` and `other`, if any.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        if self.family != other.family {
            return None;
        }

        let merged = || -> Result<Self, Disjoint> {
            Ok(Self {
                family: self.family,
                width: merge_range(self.width, other.width)?,
                height: merge_range(self.height, other.height)?,
                framerate: merge_range(self.framerate, other.framerate)?,
                layout: merge_value(self.layout, other.layout)?,
                endianness: merge_value(self.endianness, other.endianness)?,
                depth: merge_value(self.depth, other.depth)?,
                bpp: merge_value(self.bpp, other.bpp)?,
                red_mask: merge_value(self.red_mask, other.red_mask)?,
                green_mask: merge_value(self.green_mask, other.green_mask)?,
                blue_mask: merge_value(self.blue_mask, other.blue_mask)?,
                alpha_mask: merge_value(self.alpha_mask, other.alpha_mask)?,
            })
        };
        merged().ok()
    }

    /// Whether every format `self` describes is also described by `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.family == other.family
            && range_within(self.width, other.width)
            && range_within(self.height, other.height)
            && range_within(self.framerate, other.framerate)
            && value_within(self.layout, other.layout)
            && value_within(self.endianness, other.endianness)
            && value_within(self.depth, other.depth)
            && value_within(self.bpp, other.bpp)
            && value_within(self.red_mask, other.red_mask)
            && value_within(self.green_mask, other.green_mask)
            && value_within(self.blue_mask, other.blue_mask)
            && value_within(self.alpha_mask, other.alpha_mask)
    }
}

impl fmt::Display for FormatStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.family)?;
        if let Some(layout) = self.layout {
            write!(f, ", format=(fourcc){layout}")?;
        }
        if let Some(bpp) = self.bpp {
            write!(f, ", bpp=(int){bpp}")?;
        }
        if let Some(depth) = self.depth {
            write!(f, ", depth=(int){depth}")?;
        }
        if let Some(endianness) = self.endianness {
            write!(f, ", endianness=(int){endianness}")?;
        }
        let masks = [
            ("red_mask", self.red_mask),
            ("green_mask", self.green_mask),
            ("blue_mask", self.blue_mask),
            ("alpha_mask", self.alpha_mask),
        ];
        for (name, mask) in masks {
            if let Some(mask) = mask {
                write!(f, ", {name}=(int){mask:#010x}")?;
            }
        }
        if let Some(width) = self.width {
            write!(f, ", width=(int){width}")?;
        }
        if let Some(height) = self.height {
            write!(f, ", height=(int){height}")?;
        }
        if let Some(framerate) = self.framerate {
            write!(f, ", framerate=(fraction){framerate}")?;
        }
        Ok(())
    }
}

/// An ordered set of format structures, most preferred first.
///
/// An empty set means no format is possible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatSet {
    structures: Vec<FormatStructure>,
}

impl FormatSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            structures: Vec::new(),
        }
    }

    #[must_use]
    #[inline]
    pub fn structures(&self) -> &[FormatStructure] {
        &self.structures
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn push(&mut self, structure: FormatStructure) {
        self.structures.push(structure);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormatStructure> {
        self.structures.iter()
    }

    /// Every pairwise intersection of `self` and `other`, ordered by the
    /// structures of `self` first.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        self.iter()
            .flat_map(|a| other.iter().filter_map(move |b| a.intersect(b)))
            .collect()
    }

    /// Removes structures already covered by an earlier one.
    pub fn simplify(&mut self) {
        let mut kept: Vec<FormatStructure> = Vec::with_capacity(self.structures.len());
        for s in self.structures.drain(..) {
            if !kept.iter().any(|k| s.is_subset_of(k)) {
                kept.push(s);
            }
        }
        self.structures = kept;
    }
}

impl From<FormatStructure> for FormatSet {
    fn from(structure: FormatStructure) -> Self {
        Self {
            structures: vec![structure],
        }
    }
}

impl FromIterator<FormatStructure> for FormatSet {
    fn from_iter<I: IntoIterator<Item = FormatStructure>>(iter: I) -> Self {
        Self {
            structures: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FormatSet {
    type Item = &'a FormatStructure;
    type IntoIter = std::slice::Iter<'a, FormatStructure>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for FormatSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("EMPTY");
        }
        for (i, s) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

fn any_size(structure: FormatStructure) -> FormatStructure {
    structure
        .with_width(IntRange::at_least(1))
        .with_height(IntRange::at_least(1))
        .with_framerate_range(FractionRange::at_least(Fraction::ZERO))
}

/// Formats accepted on the input side: packed RGBA, then packed BGRA, at
/// any size and framerate.
#[must_use]
pub fn input_template() -> FormatSet {
    [RGBA_MASKS, BGRA_MASKS]
        .into_iter()
        .map(|masks| any_size(FormatStructure::packed_rgb(masks)))
        .collect()
}

/// Formats produced on the output side: packed AYUV at any size and
/// framerate.
#[must_use]
pub fn output_template() -> FormatSet {
    any_size(FormatStructure::new(MediaFamily::Yuv).with_layout(PixelLayout::Ayuv)).into()
}

#[must_use]
pub fn template(direction: Direction) -> FormatSet {
    match direction {
        Direction::Input => input_template(),
        Direction::Output => output_template(),
    }
}
