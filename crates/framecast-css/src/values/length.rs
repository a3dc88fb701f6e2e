//! CSS Length values and resolution
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use cssparser::{ParseError, Parser, ParserInput, Token};
use serde::Serialize;

use crate::context::{Axis, ResolutionContext};
use framecast_common::warning::warn_once;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>` in the
/// property definitions."
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LengthValue {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    ///
    /// A bare number is read as pixels too.
    Px(f64),
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the element"
    ///
    /// Resolved against the parent font size carried in the context.
    Em(f64),
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the root element."
    Rem(f64),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vw = 1% of viewport width"
    Vw(f64),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vh = 1% of viewport height"
    Vh(f64),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    /// Stored as written: `50%` is `Percent(50.0)`.
    Percent(f64),
    /// [§ 10.1 calc()](https://www.w3.org/TR/css-values-4/#calc-func)
    Calc(Box<CalcExpr>),
}

/// [§ 10.1 calc()](https://www.w3.org/TR/css-values-4/#calc-func)
///
/// Only the two-operand additive form is supported: `calc(A + B)` and
/// `calc(A - B)`. Either operand may itself be a `calc()` or a parenthesised
/// expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcExpr {
    /// Left operand.
    pub lhs: LengthValue,
    /// The operator.
    pub op: CalcOp,
    /// Right operand.
    pub rhs: LengthValue,
}

/// An additive `calc()` operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalcOp {
    /// `+`
    Add,
    /// `-`
    Sub,
}

/// The outcome of resolving a length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ResolvedLength {
    /// An absolute pixel value.
    Px(f64),
    /// A percentage with no known container: the node should fill its parent
    /// along that axis instead of taking a number.
    Fill,
}

impl ResolvedLength {
    /// The pixel value, if this resolved to one.
    #[must_use]
    pub const fn px(self) -> Option<f64> {
        match self {
            Self::Px(px) => Some(px),
            Self::Fill => None,
        }
    }
}

impl LengthValue {
    /// Parse a complete value as a `<length-percentage>`.
    ///
    /// Trailing tokens make the value invalid.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let value = parse_length(&mut parser)?;
        parser.is_exhausted().then_some(value)
    }

    /// Resolve to pixels (or [`ResolvedLength::Fill`]) against `ctx`.
    ///
    /// Returns `None` when the value cannot be made absolute, e.g. a `calc()`
    /// whose operand is a percentage with no container.
    #[must_use]
    pub fn resolve(&self, ctx: &ResolutionContext, axis: Axis) -> Option<ResolvedLength> {
        let px = match self {
            Self::Px(px) => *px,
            Self::Em(em) => *em * ctx.parent_font_size,
            Self::Rem(rem) => *rem * ctx.root_font_size,
            Self::Vw(vw) => *vw * ctx.viewport_width / 100.0,
            Self::Vh(vh) => *vh * ctx.viewport_height / 100.0,
            // [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
            // "Percentages are always relative to another quantity"; without
            // that quantity there is no number to produce.
            Self::Percent(pct) => {
                return Some(
                    ctx.container(axis)
                        .map_or(ResolvedLength::Fill, |base| ResolvedLength::Px(*pct * base / 100.0)),
                );
            }
            Self::Calc(expr) => expr.resolve(ctx, axis)?,
        };
        Some(ResolvedLength::Px(px))
    }

    /// Resolve to an absolute pixel value, treating `Fill` as unresolvable.
    #[must_use]
    pub fn to_px(&self, ctx: &ResolutionContext, axis: Axis) -> Option<f64> {
        self.resolve(ctx, axis).and_then(ResolvedLength::px)
    }
}

impl CalcExpr {
    /// Evaluate both operands; either failing to produce pixels fails the whole expression.
    #[must_use]
    pub fn resolve(&self, ctx: &ResolutionContext, axis: Axis) -> Option<f64> {
        let lhs = self.lhs.to_px(ctx, axis)?;
        let rhs = self.rhs.to_px(ctx, axis)?;
        Some(match self.op {
            CalcOp::Add => lhs + rhs,
            CalcOp::Sub => lhs - rhs,
        })
    }
}

/// Parse and resolve a raw value in one step.
#[must_use]
pub fn resolve_length(text: &str, ctx: &ResolutionContext, axis: Axis) -> Option<ResolvedLength> {
    LengthValue::parse(text)?.resolve(ctx, axis)
}

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// Parse the next component as a length, percentage, number or `calc()`.
pub(crate) fn parse_length(input: &mut Parser<'_, '_>) -> Option<LengthValue> {
    let token = input.next().ok()?.clone();
    match token {
        Token::Dimension { value, ref unit, .. } => length_from_unit(f64::from(value), unit),
        Token::Percentage { unit_value, .. } => {
            Some(LengthValue::Percent(f64::from(unit_value) * 100.0))
        }
        Token::Number { value, .. } => Some(LengthValue::Px(f64::from(value))),
        Token::Function(ref name) if name.eq_ignore_ascii_case("calc") => {
            input.parse_nested_block(parse_calc_body).ok()
        }
        Token::ParenthesisBlock => input.parse_nested_block(parse_calc_body).ok(),
        Token::Function(ref name) => {
            warn_once("CSS", &format!("unsupported function '{}()'", &**name));
            None
        }
        _ => None,
    }
}

fn length_from_unit(value: f64, unit: &str) -> Option<LengthValue> {
    match unit.to_ascii_lowercase().as_str() {
        "px" => Some(LengthValue::Px(value)),
        "em" => Some(LengthValue::Em(value)),
        "rem" => Some(LengthValue::Rem(value)),
        "vw" => Some(LengthValue::Vw(value)),
        "vh" => Some(LengthValue::Vh(value)),
        _ => {
            warn_once("CSS", &format!("unsupported unit '{unit}'"));
            None
        }
    }
}

/// [§ 10.1 calc()](https://www.w3.org/TR/css-values-4/#calc-syntax)
///
/// "The + and - operators must be surrounded by whitespace."
/// `<calc-sum> = <calc-product> [ [ '+' | '-' ] <calc-product> ]*`, limited
/// here to exactly one operator.
fn parse_calc_body<'i>(input: &mut Parser<'i, '_>) -> Result<LengthValue, ParseError<'i, ()>> {
    let Some(lhs) = parse_length(input) else {
        return Err(invalid(input));
    };
    let op = match input.next()?.clone() {
        Token::Delim('+') => CalcOp::Add,
        Token::Delim('-') => CalcOp::Sub,
        _ => return Err(invalid(input)),
    };
    let Some(rhs) = parse_length(input) else {
        return Err(invalid(input));
    };
    input.expect_exhausted()?;
    Ok(LengthValue::Calc(Box::new(CalcExpr { lhs, op, rhs })))
}

fn invalid<'i>(input: &Parser<'i, '_>) -> ParseError<'i, ()> {
    input.new_custom_error(())
}
