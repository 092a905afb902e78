use super::*;
use crate::caps::{FractionRange, BGRA_MASKS};

fn concrete(masks: [u32; 4], width: u32, height: u32) -> FormatStructure {
    FormatStructure::packed_rgb(masks)
        .with_size(width, height)
        .with_framerate(Fraction::new(30, 1))
}

fn ayuv() -> FormatStructure {
    FormatStructure::new(MediaFamily::Yuv).with_layout(PixelLayout::Ayuv)
}

#[test]
fn input_proposal_becomes_ayuv() {
    let proposed: FormatSet = FormatStructure::new(MediaFamily::Rgb)
        .with_size(320, 240)
        .with_framerate(Fraction::new(30, 1))
        .into();
    let result = negotiate(Direction::Input, &proposed);

    assert_eq!(
        result,
        FormatSet::from(
            ayuv()
                .with_size(320, 240)
                .with_framerate(Fraction::new(30, 1))
        )
    );
}

#[test]
fn concrete_bgra_proposal_becomes_ayuv() {
    let proposed: FormatSet = concrete(BGRA_MASKS, 64, 48).into();
    let result = negotiate(Direction::Input, &proposed);

    assert_eq!(result.len(), 1);
    let s = result.structures()[0];
    assert_eq!(s.layout, Some(PixelLayout::Ayuv));
    assert_eq!(s.width, Some(IntRange::fixed(64)));
    assert_eq!(s.red_mask, None);
    assert_eq!(s.depth, None);
}

#[test]
fn unbounded_input_proposal_yields_output_template() {
    let proposed: FormatSet = FormatStructure::new(MediaFamily::Rgb).into();
    let result = negotiate(Direction::Input, &proposed);
    assert_eq!(result, crate::caps::output_template());
}

#[test]
fn yuv_input_proposal_is_incompatible() {
    let proposed: FormatSet = ayuv().with_size(320, 240).into();
    assert!(negotiate(Direction::Input, &proposed).is_empty());
}

#[test]
fn wrong_depth_input_proposal_is_incompatible() {
    let mut rgb24 = FormatStructure::new(MediaFamily::Rgb).with_size(320, 240);
    rgb24.depth = Some(24);
    rgb24.bpp = Some(24);
    assert!(negotiate(Direction::Input, &rgb24.into()).is_empty());
}

#[test]
fn empty_proposal_stays_empty() {
    assert!(negotiate(Direction::Input, &FormatSet::new()).is_empty());
    assert!(negotiate(Direction::Output, &FormatSet::new()).is_empty());
}

#[test]
fn output_proposal_offers_rgba_then_bgra() {
    let width = IntRange::new(1, 100).unwrap();
    let proposed: FormatSet = ayuv().with_width(width).into();
    let result = negotiate(Direction::Output, &proposed);

    assert_eq!(result.len(), 2);
    let [rgba, bgra] = [result.structures()[0], result.structures()[1]];
    assert_eq!(rgba.red_mask, Some(RGBA_MASKS[0]));
    assert_eq!(bgra.red_mask, Some(BGRA_MASKS[0]));
    for s in [rgba, bgra] {
        assert_eq!(s.family, MediaFamily::Rgb);
        assert_eq!(s.width, Some(width));
        assert_eq!(s.height, Some(IntRange::at_least(1)));
        assert_eq!(s.layout, None);
    }
}

#[test]
fn rgb_output_proposal_is_incompatible() {
    let proposed: FormatSet = concrete(RGBA_MASKS, 320, 240).into();
    assert!(negotiate(Direction::Output, &proposed).is_empty());
}

#[test]
fn zero_width_is_outside_the_templates() {
    let proposed: FormatSet = FormatStructure::new(MediaFamily::Rgb).with_size(0, 240).into();
    assert!(negotiate(Direction::Input, &proposed).is_empty());
}

#[test]
fn proposal_order_is_kept() {
    let proposed: FormatSet = [
        FormatStructure::new(MediaFamily::Rgb).with_size(640, 480),
        ayuv().with_size(1, 1),
        FormatStructure::new(MediaFamily::Rgb).with_size(320, 240),
    ]
    .into_iter()
    .collect();
    let result = negotiate(Direction::Input, &proposed);

    let widths: Vec<_> = result.iter().map(|s| s.width).collect();
    assert_eq!(
        widths,
        [Some(IntRange::fixed(640)), Some(IntRange::fixed(320))]
    );
}

#[test]
fn accepts_rgba() {
    let format = accept_format(&concrete(RGBA_MASKS, 320, 240)).unwrap();
    assert_eq!(format.width(), 320);
    assert_eq!(format.height(), 240);
    assert_eq!(format.framerate(), Fraction::new(30, 1));
    assert_eq!(format.bit_depth(), 32);
    assert_eq!(format.masks(), RGBA_MASKS);
    assert_eq!(format.frame_size(), 320 * 240 * 4);
    assert_eq!(
        format.channel_order(),
        ChannelOrder::from_red_mask(RGBA_MASKS[0])
    );
    #[cfg(target_endian = "little")]
    assert_eq!(format.channel_order(), ChannelOrder::Rgba);
}

#[test]
fn accepts_bgra() {
    let format = accept_format(&concrete(BGRA_MASKS, 2, 2)).unwrap();
    assert_eq!(format.channel_order(), ChannelOrder::Bgra);
}

#[test]
fn red_mask_selects_order() {
    assert_eq!(
        ChannelOrder::from_red_mask(ChannelOrder::RGBA_RED_MASK),
        ChannelOrder::Rgba
    );
    assert_eq!(ChannelOrder::from_red_mask(0x0000_ff00), ChannelOrder::Bgra);
    assert_eq!(ChannelOrder::from_red_mask(0x00ff_0000), ChannelOrder::Bgra);
}

#[test]
fn green_and_blue_masks_are_optional() {
    let mut caps = concrete(RGBA_MASKS, 8, 8);
    caps.green_mask = None;
    caps.blue_mask = None;
    let format = accept_format(&caps).unwrap();
    assert_eq!(format.masks(), [RGBA_MASKS[0], 0, 0, RGBA_MASKS[3]]);
}

#[test]
fn output_format_keeps_size_and_framerate() {
    let format = accept_format(&concrete(BGRA_MASKS, 1920, 1080)).unwrap();
    let output = format.output_format();
    assert_eq!(
        output,
        ayuv()
            .with_size(1920, 1080)
            .with_framerate(Fraction::new(30, 1))
    );
    assert!(output.is_subset_of(&crate::caps::output_template().structures()[0]));
}

#[test]
fn rejects_missing_framerate() {
    for (w, h) in [(1, 1), (320, 240), (4096, 2160)] {
        let mut caps = concrete(RGBA_MASKS, w, h);
        caps.framerate = None;
        assert_eq!(
            accept_format(&caps),
            Err(NegotiationError::MissingField("framerate"))
        );
    }
}

#[test]
fn rejects_framerate_range() {
    let caps = concrete(RGBA_MASKS, 320, 240)
        .with_framerate_range(FractionRange::at_least(Fraction::ZERO));
    assert_eq!(
        accept_format(&caps),
        Err(NegotiationError::MissingField("framerate"))
    );
}

#[test]
fn rejects_invalid_framerate() {
    let caps = concrete(RGBA_MASKS, 320, 240).with_framerate(Fraction::new(30, 0));
    assert_eq!(
        accept_format(&caps),
        Err(NegotiationError::InvalidFramerate(Fraction::new(30, 0)))
    );
}

#[test]
fn rejects_zero_alpha_mask() {
    for (w, h) in [(1, 1), (320, 240), (4096, 2160)] {
        let mut caps = concrete(RGBA_MASKS, w, h);
        caps.alpha_mask = Some(0);
        assert_eq!(accept_format(&caps), Err(NegotiationError::NoAlpha));
    }
}

#[test]
fn rejects_zero_red_mask() {
    let mut caps = concrete(RGBA_MASKS, 320, 240);
    caps.red_mask = Some(0);
    assert_eq!(accept_format(&caps), Err(NegotiationError::NoRed));
}

#[test]
fn rejects_wrong_depth() {
    for (w, h) in [(1, 1), (320, 240), (4096, 2160)] {
        let mut caps = concrete(RGBA_MASKS, w, h);
        caps.depth = Some(24);
        assert_eq!(
            accept_format(&caps),
            Err(NegotiationError::UnsupportedDepth(24))
        );
    }
}

#[test]
fn rejects_wrong_bpp() {
    let mut caps = concrete(RGBA_MASKS, 320, 240);
    caps.bpp = Some(24);
    assert_eq!(
        accept_format(&caps),
        Err(NegotiationError::UnsupportedBpp(24))
    );
}

#[test]
fn rejects_unfixed_size() {
    let caps = concrete(RGBA_MASKS, 320, 240).with_width(IntRange::at_least(1));
    assert_eq!(
        accept_format(&caps),
        Err(NegotiationError::MissingField("width"))
    );

    let mut caps = concrete(RGBA_MASKS, 320, 240);
    caps.height = None;
    assert_eq!(
        accept_format(&caps),
        Err(NegotiationError::MissingField("height"))
    );
}

#[test]
fn rejects_missing_masks() {
    let mut caps = concrete(RGBA_MASKS, 320, 240);
    caps.alpha_mask = None;
    assert_eq!(
        accept_format(&caps),
        Err(NegotiationError::MissingField("alpha_mask"))
    );
}

#[test]
fn rejects_yuv() {
    let caps = ayuv().with_size(320, 240).with_framerate(Fraction::new(30, 1));
    assert_eq!(
        accept_format(&caps),
        Err(NegotiationError::WrongFamily(MediaFamily::Yuv))
    );
}
