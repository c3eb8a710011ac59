//! Size specifications and the expressions they resolve to.
//!
//! A [`SizeSpec`] is what callers hand to the layout engine: a plain unit count
//! (negative values meaning "the parent minus that many units"), or an already
//! formed expression such as `"30%"`. Every size the engine applies to a surface
//! goes through [`resolve`], so absolute, percentage and complement sizes can be
//! used interchangeably.
//!
//! ```
//! use trellis_ui::size::{SizeExpr, SizeSpec, resolve};
//!
//! assert_eq!(resolve(Some(&SizeSpec::from(100.0))), Some(SizeExpr::Px(100.0)));
//! assert_eq!(resolve(Some(&SizeSpec::from(-20.0))).unwrap().to_string(), "calc(100% - 20px)");
//! assert_eq!(resolve(Some(&"30%".parse().unwrap())), Some(SizeExpr::Percent(30.0)));
//! assert_eq!(resolve(None), None);
//! ```

use std::fmt;
use std::str::FromStr;

/// Error returned when a size string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizeError {
    #[error("empty size expression")]
    Empty,
    #[error("unparseable size term {0:?}")]
    InvalidTerm(String),
    #[error("malformed calc expression {0:?}")]
    MalformedCalc(String),
}

/// A concrete layout expression along one axis.
///
/// `Calc` is kept in linear form: `percent` of the parent plus `offset` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeExpr {
    /// Fixed pixel value.
    Px(f32),
    /// Percentage of the parent dimension (0.0 - 100.0).
    Percent(f32),
    /// `calc(percent% + offset px)`.
    Calc { percent: f32, offset: f32 },
}

impl SizeExpr {
    /// Full extent of the parent.
    pub const FULL: SizeExpr = SizeExpr::Percent(100.0);

    /// Build a calc expression, collapsing to `Px`/`Percent` when one term is zero.
    pub fn calc(percent: f32, offset: f32) -> Self {
        if offset == 0.0 {
            SizeExpr::Percent(percent)
        } else if percent == 0.0 {
            SizeExpr::Px(offset)
        } else {
            SizeExpr::Calc { percent, offset }
        }
    }

    /// `(percent, offset)` linear terms of this expression.
    pub fn terms(&self) -> (f32, f32) {
        match *self {
            SizeExpr::Px(v) => (0.0, v),
            SizeExpr::Percent(p) => (p, 0.0),
            SizeExpr::Calc { percent, offset } => (percent, offset),
        }
    }

    /// The size left over in the parent once this one and `gap` pixels are taken.
    ///
    /// `Px(100).complement(4)` is `calc(100% - 104px)`.
    pub fn complement(&self, gap: f32) -> SizeExpr {
        let (percent, offset) = self.terms();
        SizeExpr::calc(100.0 - percent, -offset - gap)
    }

    /// Whether this expression has the "parent minus something" shape.
    pub fn is_complement(&self) -> bool {
        matches!(self, SizeExpr::Calc { .. })
    }

    /// Resolve against a parent extent in pixels. Never negative.
    pub fn to_px(&self, parent: f32) -> f32 {
        let (percent, offset) = self.terms();
        (parent * percent / 100.0 + offset).max(0.0)
    }
}

impl fmt::Display for SizeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SizeExpr::Px(v) => write!(f, "{}px", v),
            SizeExpr::Percent(p) => write!(f, "{}%", p),
            SizeExpr::Calc { percent, offset } => {
                let sign = if offset < 0.0 { '-' } else { '+' };
                write!(f, "calc({}% {} {}px)", percent, sign, offset.abs())
            }
        }
    }
}

fn parse_term(term: &str) -> Result<(f32, f32), SizeError> {
    let invalid = || SizeError::InvalidTerm(term.to_string());
    if let Some(value) = term.strip_suffix('%') {
        value.trim().parse::<f32>().map(|p| (p, 0.0)).map_err(|_| invalid())
    } else {
        let value = term.strip_suffix("px").unwrap_or(term);
        value.trim().parse::<f32>().map(|v| (0.0, v)).map_err(|_| invalid())
    }
}

fn parse_calc(body: &str, original: &str) -> Result<SizeExpr, SizeError> {
    let malformed = || SizeError::MalformedCalc(original.to_string());
    let mut tokens = body.split_whitespace();
    let first = tokens.next().ok_or_else(malformed)?;
    let (mut percent, mut offset) = parse_term(first)?;

    while let Some(op) = tokens.next() {
        let sign = match op {
            "+" => 1.0,
            "-" => -1.0,
            _ => return Err(malformed()),
        };
        let (p, o) = parse_term(tokens.next().ok_or_else(malformed)?)?;
        percent += sign * p;
        offset += sign * o;
    }

    Ok(SizeExpr::calc(percent, offset))
}

impl FromStr for SizeExpr {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SizeError::Empty);
        }
        if let Some(body) = trimmed
            .strip_prefix("calc(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_calc(body, s);
        }
        let (percent, offset) = parse_term(trimmed)?;
        Ok(if trimmed.ends_with('%') {
            SizeExpr::Percent(percent)
        } else {
            SizeExpr::Px(offset)
        })
    }
}

/// A size as supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeSpec {
    /// Unit count. Negative means "100% of the parent minus `abs(value)` units".
    Units(f32),
    /// An expression passed through untouched.
    Expr(SizeExpr),
}

impl SizeSpec {
    pub fn px(value: f32) -> Self {
        SizeSpec::Units(value)
    }

    pub fn percent(value: f32) -> Self {
        SizeSpec::Expr(SizeExpr::Percent(value))
    }

    /// Resolve into a concrete expression.
    pub fn resolve(&self) -> SizeExpr {
        match *self {
            SizeSpec::Units(v) if v < 0.0 => SizeExpr::Calc {
                percent: 100.0,
                offset: v,
            },
            SizeSpec::Units(v) => SizeExpr::Px(v),
            SizeSpec::Expr(expr) => expr,
        }
    }
}

impl From<f32> for SizeSpec {
    fn from(value: f32) -> Self {
        SizeSpec::Units(value)
    }
}

impl From<i32> for SizeSpec {
    fn from(value: i32) -> Self {
        SizeSpec::Units(value as f32)
    }
}

impl From<SizeExpr> for SizeSpec {
    fn from(expr: SizeExpr) -> Self {
        SizeSpec::Expr(expr)
    }
}

impl FromStr for SizeSpec {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<SizeExpr>().map(SizeSpec::Expr)
    }
}

impl TryFrom<&str> for SizeSpec {
    type Error = SizeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Resolve an optional size. `None` stays `None`; callers pick their own default.
pub fn resolve(spec: Option<&SizeSpec>) -> Option<SizeExpr> {
    spec.map(SizeSpec::resolve)
}

/// Resolve an optional size, falling back to the full parent extent.
pub fn resolve_or_full(spec: Option<&SizeSpec>) -> SizeExpr {
    resolve(spec).unwrap_or(SizeExpr::FULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_resolve_to_px() {
        assert_eq!(SizeSpec::from(100.0).resolve(), SizeExpr::Px(100.0));
        assert_eq!(SizeSpec::from(0).resolve(), SizeExpr::Px(0.0));
    }

    #[test]
    fn test_negative_units_resolve_to_inset() {
        let expr = SizeSpec::from(-30.0).resolve();
        assert_eq!(expr.to_string(), "calc(100% - 30px)");
        assert_eq!(expr.to_px(200.0), 170.0);
    }

    #[test]
    fn test_strings_pass_through() {
        let spec: SizeSpec = "30%".parse().unwrap();
        assert_eq!(spec.resolve().to_string(), "30%");
        let spec = SizeSpec::try_from("calc(100% - 104px)").unwrap();
        assert_eq!(spec.resolve().to_string(), "calc(100% - 104px)");
    }

    #[test]
    fn test_complement() {
        assert_eq!(
            SizeExpr::Px(100.0).complement(4.0),
            SizeExpr::Calc {
                percent: 100.0,
                offset: -104.0
            }
        );
        assert_eq!(SizeExpr::Percent(30.0).complement(0.0), SizeExpr::Percent(70.0));
        assert_eq!(SizeExpr::Percent(30.0).complement(4.0).to_string(), "calc(70% - 4px)");
        assert_eq!(SizeExpr::Percent(30.0).complement(4.0).to_px(1000.0), 696.0);
    }

    #[test]
    fn test_parse_calc_normalizes_terms() {
        let expr: SizeExpr = "calc(100% - 30% - 4px)".parse().unwrap();
        assert_eq!(
            expr,
            SizeExpr::Calc {
                percent: 70.0,
                offset: -4.0
            }
        );
        assert_eq!("calc(50% + 0px)".parse::<SizeExpr>().unwrap(), SizeExpr::Percent(50.0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<SizeExpr>(), Err(SizeError::Empty));
        assert!(matches!("wide".parse::<SizeExpr>(), Err(SizeError::InvalidTerm(_))));
        assert!(matches!(
            "calc(100% * 2)".parse::<SizeExpr>(),
            Err(SizeError::MalformedCalc(_))
        ));
        assert!(matches!(
            "calc(100% -)".parse::<SizeExpr>(),
            Err(SizeError::MalformedCalc(_))
        ));
    }

    #[test]
    fn test_to_px_never_negative() {
        assert_eq!(SizeExpr::Px(100.0).complement(4.0).to_px(50.0), 0.0);
    }

    #[test]
    fn test_resolve_none() {
        assert_eq!(resolve(None), None);
        assert_eq!(resolve_or_full(None), SizeExpr::Percent(100.0));
    }
}
