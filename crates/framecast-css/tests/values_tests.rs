//! Integration tests for CSS value parsing: lengths, colors, font properties.

use framecast_css::values::{
    is_italic, parse_font_family, parse_font_size, parse_font_weight, parse_line_height,
};
use framecast_css::{
    Axis, CalcOp, LengthValue, LineHeight, ResolutionContext, ResolvedColor, ResolvedLength,
    TextDecorationLine, resolve_length,
};

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-4
}

fn px(text: &str, ctx: &ResolutionContext) -> Option<f64> {
    resolve_length(text, ctx, Axis::Horizontal).and_then(ResolvedLength::px)
}

fn rgba(text: &str) -> (f64, f64, f64, f64) {
    let c = ResolvedColor::parse(text).unwrap_or_else(|| panic!("'{text}' should parse"));
    (c.r, c.g, c.b, c.a)
}

// ---------------------------------------------------------------------------
// Lengths
//
// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
// ---------------------------------------------------------------------------

#[test]
fn test_length_px_and_bare_number() {
    let ctx = ResolutionContext::default();
    assert_eq!(px("10px", &ctx), Some(10.0));
    assert_eq!(px("12", &ctx), Some(12.0));
    assert_eq!(px("0", &ctx), Some(0.0));
}

#[test]
fn test_length_font_relative() {
    let ctx = ResolutionContext::default()
        .with_parent_font_size(20.0)
        .with_root_font_size(10.0);
    assert_eq!(px("2em", &ctx), Some(40.0));
    // rem never looks at the parent.
    assert_eq!(px("2rem", &ctx), Some(20.0));
}

#[test]
fn test_length_viewport_relative() {
    let ctx = ResolutionContext::default();
    assert_eq!(px("50vw", &ctx), Some(960.0));
    assert_eq!(px("10vh", &ctx), Some(108.0));
}

#[test]
fn test_percentage_with_and_without_container() {
    let ctx = ResolutionContext::default();
    assert_eq!(
        resolve_length("50%", &ctx, Axis::Horizontal),
        Some(ResolvedLength::Fill)
    );

    let ctx = ctx.with_container(Some(800.0), Some(300.0));
    assert_eq!(
        resolve_length("50%", &ctx, Axis::Horizontal),
        Some(ResolvedLength::Px(400.0))
    );
    assert_eq!(
        resolve_length("50%", &ctx, Axis::Vertical),
        Some(ResolvedLength::Px(150.0))
    );
}

#[test]
fn test_percentage_is_stored_as_written() {
    assert_eq!(LengthValue::parse("25%"), Some(LengthValue::Percent(25.0)));
}

#[test]
fn test_unknown_units_are_unresolvable() {
    let ctx = ResolutionContext::default();
    assert_eq!(px("10pt", &ctx), None);
    assert_eq!(px("3ch", &ctx), None);
    assert_eq!(px("auto", &ctx), None);
    assert_eq!(px("10px 4px", &ctx), None);
    assert_eq!(px("min(10px, 4px)", &ctx), None);
}

// ---------------------------------------------------------------------------
// calc()
//
// [§ 10.1 calc()](https://www.w3.org/TR/css-values-4/#calc-func)
// ---------------------------------------------------------------------------

#[test]
fn test_calc_parses_two_operands() {
    let Some(LengthValue::Calc(expr)) = LengthValue::parse("calc(100% - 20px)") else {
        panic!("expected a calc expression");
    };
    assert_eq!(expr.lhs, LengthValue::Percent(100.0));
    assert_eq!(expr.op, CalcOp::Sub);
    assert_eq!(expr.rhs, LengthValue::Px(20.0));
}

#[test]
fn test_calc_mixed_units() {
    let ctx = ResolutionContext::default();
    assert_eq!(px("calc(1rem + 4px)", &ctx), Some(20.0));
    assert_eq!(px("calc(10vw - 2em)", &ctx), Some(160.0));
}

#[test]
fn test_calc_percentage_needs_container() {
    let ctx = ResolutionContext::default();
    assert_eq!(resolve_length("calc(100% - 20px)", &ctx, Axis::Horizontal), None);

    let ctx = ctx.with_container(Some(400.0), None);
    assert_eq!(px("calc(100% - 20px)", &ctx), Some(380.0));
}

#[test]
fn test_calc_nested_operands() {
    let ctx = ResolutionContext::default();
    assert_eq!(px("calc(calc(10px + 5px) - (2px + 1px))", &ctx), Some(12.0));
}

#[test]
fn test_calc_outside_supported_subset() {
    let ctx = ResolutionContext::default();
    assert_eq!(px("calc(10px * 2)", &ctx), None);
    assert_eq!(px("calc(1px + 2px + 3px)", &ctx), None);
    assert_eq!(px("calc(10px)", &ctx), None);
    assert_eq!(px("calc(10px + 1foo)", &ctx), None);
}

// ---------------------------------------------------------------------------
// Colors
//
// [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
// ---------------------------------------------------------------------------

#[test]
fn test_color_hex_six_digits() {
    let (r, g, b, a) = rgba("#FF8000");
    assert!(approx(r, 1.0));
    assert!(approx(g, 128.0 / 255.0));
    assert!(approx(b, 0.0));
    assert!(approx(a, 1.0));
}

#[test]
fn test_color_hex_short_forms_replicate_digits() {
    assert_eq!(ResolvedColor::parse("#f80"), ResolvedColor::parse("#ff8800"));
    let (_, _, _, a) = rgba("#0008");
    assert!(approx(a, 136.0 / 255.0));
}

#[test]
fn test_color_hex_with_alpha() {
    let (r, g, b, a) = rgba("#0000ff80");
    assert!(approx(r, 0.0) && approx(g, 0.0) && approx(b, 1.0));
    assert!(approx(a, 128.0 / 255.0));
}

#[test]
fn test_color_transparent() {
    assert_eq!(ResolvedColor::parse("transparent"), Some(ResolvedColor::TRANSPARENT));
    assert_eq!(ResolvedColor::parse("TRANSPARENT").map(|c| c.a), Some(0.0));
}

#[test]
fn test_color_named_case_insensitive() {
    assert_eq!(ResolvedColor::parse("Red"), ResolvedColor::parse("#ff0000"));
    assert_eq!(ResolvedColor::parse("rebeccapurple"), ResolvedColor::parse("#663399"));
    assert_eq!(ResolvedColor::parse("white"), Some(ResolvedColor::WHITE));
}

#[test]
fn test_color_rgb_functions() {
    let (r, g, b, a) = rgba("rgb(255, 0, 0)");
    assert!(approx(r, 1.0) && approx(g, 0.0) && approx(b, 0.0) && approx(a, 1.0));

    let (_, _, b, a) = rgba("rgba(0, 0, 255, 0.5)");
    assert!(approx(b, 1.0));
    assert!(approx(a, 0.5));

    let (r, _, _, a) = rgba("rgb(100% 0% 0% / 50%)");
    assert!(approx(r, 1.0));
    assert!(approx(a, 0.5));
}

#[test]
fn test_color_channels_and_alpha_are_clamped() {
    let (r, g, _, a) = rgba("rgba(300, -5, 0, 2)");
    assert!(approx(r, 1.0));
    assert!(approx(g, 0.0));
    assert!(approx(a, 1.0));
}

#[test]
fn test_color_hsl() {
    assert_eq!(ResolvedColor::parse("hsl(120, 100%, 50%)"), ResolvedColor::parse("lime"));
    assert_eq!(ResolvedColor::parse("hsl(0deg 100% 50%)"), ResolvedColor::parse("red"));
    let (_, _, _, a) = rgba("hsla(240, 100%, 50%, 0.25)");
    assert!(approx(a, 0.25));
}

#[test]
fn test_color_unrecognized_is_none() {
    assert_eq!(ResolvedColor::parse("notacolor"), None);
    assert_eq!(ResolvedColor::parse("#12345"), None);
    assert_eq!(ResolvedColor::parse("#ggg"), None);
    assert_eq!(ResolvedColor::parse("rgb(1, 2)"), None);
    assert_eq!(ResolvedColor::parse("red blue"), None);
    assert_eq!(ResolvedColor::parse(""), None);
}

#[test]
fn test_color_hex_string() {
    assert_eq!(ResolvedColor::WHITE.to_hex_string(), "#ffffff");
    assert_eq!(ResolvedColor::TRANSPARENT.to_hex_string(), "#00000000");
}

// ---------------------------------------------------------------------------
// Font properties
//
// [CSS Fonts Level 4](https://www.w3.org/TR/css-fonts-4/)
// ---------------------------------------------------------------------------

#[test]
fn test_font_size_lengths() {
    let ctx = ResolutionContext::default().with_parent_font_size(20.0);
    assert_eq!(parse_font_size("24px", &ctx), Some(24.0));
    assert_eq!(parse_font_size("1.5em", &ctx), Some(30.0));
    assert_eq!(parse_font_size("150%", &ctx), Some(30.0));
    assert_eq!(parse_font_size("2rem", &ctx), Some(32.0));
    assert_eq!(parse_font_size("-4px", &ctx), None);
    assert_eq!(parse_font_size("huge", &ctx), None);
}

#[test]
fn test_font_size_keywords() {
    let ctx = ResolutionContext::default().with_parent_font_size(20.0);
    assert_eq!(parse_font_size("medium", &ctx), Some(16.0));
    assert_eq!(parse_font_size("xx-large", &ctx), Some(32.0));
    assert!(parse_font_size("larger", &ctx).is_some_and(|size| approx(size, 24.0)));
}

#[test]
fn test_font_weight() {
    assert_eq!(parse_font_weight("normal"), Some(400));
    assert_eq!(parse_font_weight("bold"), Some(700));
    assert_eq!(parse_font_weight("BOLDER"), Some(700));
    assert_eq!(parse_font_weight("lighter"), Some(300));
    assert_eq!(parse_font_weight("600"), Some(600));
    assert_eq!(parse_font_weight("1001"), None);
    assert_eq!(parse_font_weight("heavy"), None);
}

#[test]
fn test_font_style() {
    assert_eq!(is_italic("italic"), Some(true));
    assert_eq!(is_italic("oblique 10deg"), Some(true));
    assert_eq!(is_italic("normal"), Some(false));
    assert_eq!(is_italic("sideways"), None);
}

#[test]
fn test_font_family_first_entry() {
    assert_eq!(
        parse_font_family("\"Open Sans\", Arial, sans-serif").as_deref(),
        Some("Open Sans")
    );
    assert_eq!(
        parse_font_family("Helvetica Neue, sans-serif").as_deref(),
        Some("Helvetica Neue")
    );
    assert_eq!(parse_font_family("monospace").as_deref(), Some("monospace"));
    assert_eq!(parse_font_family("").as_deref(), None);
}

#[test]
fn test_line_height() {
    let ctx = ResolutionContext::default();
    assert_eq!(parse_line_height("normal", 16.0, &ctx), Some(LineHeight::Normal));
    assert_eq!(parse_line_height("1.5", 16.0, &ctx), Some(LineHeight::Px(24.0)));
    assert_eq!(parse_line_height("20px", 16.0, &ctx), Some(LineHeight::Px(20.0)));
    assert_eq!(parse_line_height("150%", 20.0, &ctx), Some(LineHeight::Px(30.0)));
    assert_eq!(parse_line_height("2em", 10.0, &ctx), Some(LineHeight::Px(20.0)));
    assert_eq!(parse_line_height("tall", 16.0, &ctx), None);
}

#[test]
fn test_text_decoration_line() {
    let both = TextDecorationLine::parse("underline line-through");
    assert!(both.underline && both.line_through);

    let shorthand = TextDecorationLine::parse("underline dotted red");
    assert!(shorthand.underline);
    assert!(!shorthand.line_through);

    assert!(TextDecorationLine::parse("none").is_none());
}

#[test]
fn test_text_decoration_line_without_line_keyword() {
    assert_eq!(TextDecorationLine::try_parse("wavy red"), None);
    assert_eq!(TextDecorationLine::try_parse(""), None);
    assert!(TextDecorationLine::parse("wavy red").is_none());
    assert_eq!(
        TextDecorationLine::try_parse("none"),
        Some(TextDecorationLine::default())
    );
}
