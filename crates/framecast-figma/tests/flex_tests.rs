//! Integration tests for the flexbox mapping.

use framecast_css::{ParsedStyle, ResolutionContext};
use framecast_figma::flex::{apply_container, apply_gap, apply_item, is_flex_container};
use framecast_figma::{
    CounterAxisAlign, FrameNode, LayoutMode, LayoutWrap, PrimaryAxisAlign, SizingMode,
    StretchAlignment,
};

fn container(source: &str) -> FrameNode {
    container_with(source, StretchAlignment::Stretch)
}

fn container_with(source: &str, stretch: StretchAlignment) -> FrameNode {
    let mut frame = FrameNode::new("div");
    apply_container(&mut frame, &ParsedStyle::parse(source), stretch);
    frame
}

fn item(source: &str, frame: FrameNode) -> FrameNode {
    let mut frame = frame;
    apply_item(&mut frame, &ParsedStyle::parse(source), &ResolutionContext::default());
    frame
}

// ---------------------------------------------------------------------------
// Container properties
//
// [§ 5 Ordering and Orientation](https://www.w3.org/TR/css-flexbox-1/#flow-order)
// ---------------------------------------------------------------------------

#[test]
fn test_display_flex_detection() {
    assert!(is_flex_container(&ParsedStyle::parse("display: flex")));
    assert!(is_flex_container(&ParsedStyle::parse("display: INLINE-FLEX")));
    assert!(!is_flex_container(&ParsedStyle::parse("display: block")));
    assert!(!is_flex_container(&ParsedStyle::parse("flex-direction: column")));
}

#[test]
fn test_no_display_flex_leaves_frame_untouched() {
    let frame = container("flex-direction: column; justify-content: center; gap: 10px");
    assert_eq!(frame, FrameNode::new("div"));
}

#[test]
fn test_direction_defaults_to_horizontal() {
    assert_eq!(container("display: flex").layout_mode, LayoutMode::Horizontal);
}

#[test]
fn test_direction_mapping() {
    let cases = [
        ("row", LayoutMode::Horizontal),
        ("row-reverse", LayoutMode::Horizontal),
        ("column", LayoutMode::Vertical),
        ("column-reverse", LayoutMode::Vertical),
    ];
    for (direction, expected) in cases {
        let frame = container(&format!("display: flex; flex-direction: {direction}"));
        assert_eq!(frame.layout_mode, expected, "flex-direction: {direction}");
    }
}

#[test]
fn test_justify_content_table() {
    let cases = [
        ("flex-start", PrimaryAxisAlign::Min),
        ("flex-end", PrimaryAxisAlign::Max),
        ("center", PrimaryAxisAlign::Center),
        ("space-between", PrimaryAxisAlign::SpaceBetween),
        ("space-around", PrimaryAxisAlign::SpaceAround),
        ("space-evenly", PrimaryAxisAlign::SpaceEvenly),
    ];
    for (value, expected) in cases {
        let source = format!("display: flex; justify-content: {value}");
        // Same input, same output.
        assert_eq!(container(&source).primary_axis_align_items, expected, "{value}");
        assert_eq!(container(&source).primary_axis_align_items, expected, "{value}");
    }
}

#[test]
fn test_justify_content_aliases() {
    assert_eq!(
        container("display: flex; justify-content: start").primary_axis_align_items,
        PrimaryAxisAlign::Min
    );
    assert_eq!(
        container("display: flex; justify-content: END").primary_axis_align_items,
        PrimaryAxisAlign::Max
    );
}

#[test]
fn test_unknown_justify_content_keeps_default() {
    let frame = container("display: flex; justify-content: stretch-ish");
    assert_eq!(frame.primary_axis_align_items, PrimaryAxisAlign::Min);
}

#[test]
fn test_align_items_table() {
    let cases = [
        ("flex-start", CounterAxisAlign::Min),
        ("flex-end", CounterAxisAlign::Max),
        ("center", CounterAxisAlign::Center),
        ("baseline", CounterAxisAlign::Baseline),
    ];
    for (value, expected) in cases {
        let frame = container(&format!("display: flex; align-items: {value}"));
        assert_eq!(frame.counter_axis_align_items, expected, "{value}");
    }
}

#[test]
fn test_align_items_stretch_maps_to_stretch() {
    let frame = container_with("display: flex; align-items: stretch", StretchAlignment::Stretch);
    assert_eq!(frame.counter_axis_align_items, CounterAxisAlign::Stretch);
}

#[test]
fn test_align_items_stretch_maps_to_min() {
    let frame = container_with("display: flex; align-items: stretch", StretchAlignment::Min);
    assert_eq!(frame.counter_axis_align_items, CounterAxisAlign::Min);
}

#[test]
fn test_flex_wrap() {
    assert_eq!(
        container("display: flex; flex-wrap: wrap").layout_wrap,
        LayoutWrap::Wrap
    );
    assert_eq!(
        container("display: flex; flex-wrap: wrap-reverse").layout_wrap,
        LayoutWrap::Wrap
    );
    assert_eq!(
        container("display: flex; flex-wrap: nowrap").layout_wrap,
        LayoutWrap::NoWrap
    );
}

// ---------------------------------------------------------------------------
// Gaps
//
// [§ 8 Gaps Between Boxes](https://www.w3.org/TR/css-align-3/#gaps)
// ---------------------------------------------------------------------------

#[test]
fn test_pixel_gap_becomes_item_spacing() {
    for n in [0.0, 4.0, 10.0, 32.0] {
        let frame = container(&format!("display: flex; gap: {n}px"));
        assert_eq!(frame.item_spacing, n, "gap: {n}px");
    }
    assert_eq!(container("display: flex; gap: 12").item_spacing, 12.0);
}

#[test]
fn test_non_pixel_gap_is_ignored() {
    assert_eq!(container("display: flex; gap: 1rem").item_spacing, 0.0);
    assert_eq!(container("display: flex; gap: 10%").item_spacing, 0.0);
    assert_eq!(container("display: flex; gap: 2em").item_spacing, 0.0);
}

#[test]
fn test_two_value_gap_picks_main_axis() {
    // gap: <row-gap> <column-gap>
    let row = container("display: flex; gap: 8px 16px");
    assert_eq!(row.item_spacing, 16.0);

    let column = container("display: flex; flex-direction: column; gap: 8px 16px");
    assert_eq!(column.item_spacing, 8.0);
}

#[test]
fn test_gap_longhands_and_wrapped_lines() {
    let frame = container("display: flex; flex-wrap: wrap; gap: 4px; row-gap: 20px");
    assert_eq!(frame.item_spacing, 4.0);
    assert_eq!(frame.counter_axis_spacing, Some(20.0));

    let single_line = container("display: flex; row-gap: 20px; column-gap: 6px");
    assert_eq!(single_line.item_spacing, 6.0);
    assert_eq!(single_line.counter_axis_spacing, None);
}

#[test]
fn test_gap_without_flex() {
    let mut frame = FrameNode::new("nav").with_layout(LayoutMode::Horizontal);
    apply_gap(&mut frame, &ParsedStyle::parse("gap: 24px"));
    assert_eq!(frame.item_spacing, 24.0);
}

// ---------------------------------------------------------------------------
// Item properties
//
// [§ 7 Flexibility](https://www.w3.org/TR/css-flexbox-1/#flexibility)
// ---------------------------------------------------------------------------

#[test]
fn test_flex_grow() {
    assert_eq!(item("flex: 1", FrameNode::new("a")).layout_grow, 1.0);
    assert_eq!(item("flex: 2 1 0%", FrameNode::new("a")).layout_grow, 2.0);
    assert_eq!(item("flex: auto", FrameNode::new("a")).layout_grow, 1.0);
    assert_eq!(item("flex: none", FrameNode::new("a")).layout_grow, 0.0);
    assert_eq!(item("flex: 1; flex-grow: 3", FrameNode::new("a")).layout_grow, 3.0);
    assert_eq!(item("flex-grow: -1", FrameNode::new("a")).layout_grow, 0.0);
}

#[test]
fn test_flex_shrink_zero_pins_width() {
    let frame = item("flex: 1; flex-shrink: 0; width: 240px", FrameNode::new("aside"));
    assert_eq!(frame.width, Some(240.0));
    assert_eq!(frame.layout_sizing_horizontal, SizingMode::Fixed);
    assert_eq!(frame.layout_grow, 0.0);
}

#[test]
fn test_flex_shrink_zero_without_pixel_width() {
    let frame = item("flex: 1; flex-shrink: 0; width: 50%", FrameNode::new("aside"));
    assert_eq!(frame.layout_grow, 1.0);
    assert_eq!(frame.layout_sizing_horizontal, SizingMode::Hug);
}

#[test]
fn test_aspect_ratio_with_known_width() {
    let frame = item("aspect-ratio: 16/9", FrameNode::new("video").with_fixed_width(400.0));
    assert_eq!(frame.height, Some(225.0));
    assert_eq!(frame.layout_sizing_vertical, SizingMode::Fixed);
    assert_eq!(frame.aspect_ratio, Some(16.0 / 9.0));
}

#[test]
fn test_aspect_ratio_forms() {
    let spaced = item("aspect-ratio: 4 / 3", FrameNode::new("a").with_fixed_width(300.0));
    assert_eq!(spaced.height, Some(225.0));

    let single = item("aspect-ratio: 2", FrameNode::new("a").with_fixed_width(300.0));
    assert_eq!(single.height, Some(150.0));

    let auto = item("aspect-ratio: auto 1/1", FrameNode::new("a").with_fixed_width(50.0));
    assert_eq!(auto.height, Some(50.0));
}

#[test]
fn test_aspect_ratio_without_width() {
    let frame = item("aspect-ratio: 16/9", FrameNode::new("a"));
    assert_eq!(frame.height, None);
    assert_eq!(frame.aspect_ratio, None);
}
