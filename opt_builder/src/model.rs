use std::ops::{Range, RangeFrom, RangeInclusive};

use crate::parser::DefinitionError;

/// A value stored in [`Matches`](crate::Matches) for a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// No value: the default of a parameter whose default was not configured.
    #[default]
    Null,
    /// A boolean, typically the trigger value of a flag.
    Bool(bool),
    /// A single argument (parameters with arity `1`).
    Text(String),
    /// Any other number of arguments.
    List(Vec<String>),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Value::List(values)
    }
}

impl From<Vec<&str>> for Value {
    fn from(values: Vec<&str>) -> Self {
        Value::List(values.into_iter().map(str::to_string).collect())
    }
}

/// One end of a [`Nargs::Bounds`] pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Limit {
    /// A fixed count.
    Number(i64),
    /// A numeric string, or one of `*`, `inf`, `infinity` (unbounded).
    Literal(String),
}

impl From<i64> for Limit {
    fn from(value: i64) -> Self {
        Limit::Number(value)
    }
}

impl From<&str> for Limit {
    fn from(value: &str) -> Self {
        Limit::Literal(value.to_string())
    }
}

/// The number of arguments a parameter consumes when triggered, as specified by the user.
///
/// Every shape is resolved into a canonical [`Arity`] when the parameter is defined.
///
/// ### Example
/// ```
/// # use opt_builder as opt;
/// use opt::{Arity, Nargs};
///
/// assert_eq!(Nargs::from(2).arity().unwrap(), Arity::new(2, Some(2)));
/// assert_eq!(Nargs::from("+").arity().unwrap(), Arity::new(1, None));
/// assert_eq!(Nargs::from(6..=2).arity().unwrap(), Arity::new(2, Some(6)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nargs {
    /// `n`: precisely `n` arguments.
    Count(i64),
    /// `+`, `*`, `inf`, `infinity`, or a numeric string.
    Literal(String),
    /// `a..=b`.
    Inclusive(i64, i64),
    /// `a..b`.
    Exclusive(i64, i64),
    /// `a..`.
    AtLeast(i64),
    /// A `[lower, upper]` pair; must have precisely two elements.
    Bounds(Vec<Limit>),
}

impl Default for Nargs {
    fn default() -> Self {
        Nargs::Count(0)
    }
}

impl From<i64> for Nargs {
    fn from(value: i64) -> Self {
        Nargs::Count(value)
    }
}

impl From<&str> for Nargs {
    fn from(value: &str) -> Self {
        Nargs::Literal(value.to_string())
    }
}

impl From<String> for Nargs {
    fn from(value: String) -> Self {
        Nargs::Literal(value)
    }
}

impl From<RangeInclusive<i64>> for Nargs {
    fn from(range: RangeInclusive<i64>) -> Self {
        Nargs::Inclusive(*range.start(), *range.end())
    }
}

impl From<Range<i64>> for Nargs {
    fn from(range: Range<i64>) -> Self {
        Nargs::Exclusive(range.start, range.end)
    }
}

impl From<RangeFrom<i64>> for Nargs {
    fn from(range: RangeFrom<i64>) -> Self {
        Nargs::AtLeast(range.start)
    }
}

impl From<Vec<Limit>> for Nargs {
    fn from(limits: Vec<Limit>) -> Self {
        Nargs::Bounds(limits)
    }
}

impl From<[Limit; 2]> for Nargs {
    fn from(limits: [Limit; 2]) -> Self {
        Nargs::Bounds(limits.into())
    }
}

// An end of a range, before the lower end is checked for being non-negative.
// `Unbounded` orders after every finite count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum End {
    Finite(i64),
    Unbounded,
}

impl Nargs {
    /// Resolve into the canonical inclusive [`Arity`].
    pub fn arity(&self) -> Result<Arity, DefinitionError> {
        match self {
            Nargs::Count(n) => resolve(End::Finite(*n), End::Finite(*n)),
            Nargs::Literal(literal) => match literal.to_lowercase().as_str() {
                "+" => resolve(End::Finite(1), End::Unbounded),
                "*" | "inf" | "infinity" => resolve(End::Finite(0), End::Unbounded),
                _ => {
                    let n = parse_count(literal)?;
                    resolve(End::Finite(n), End::Finite(n))
                }
            },
            Nargs::Inclusive(a, b) => resolve(End::Finite(*a), End::Finite(*b)),
            Nargs::Exclusive(a, b) => {
                if a == b {
                    Err(DefinitionError::EmptyArity(format!("{a}..{b}")))
                } else if a > b {
                    // Flipping an exclusive range moves the excluded end to the bottom.
                    resolve(End::Finite(b + 1), End::Finite(*a))
                } else {
                    resolve(End::Finite(*a), End::Finite(b - 1))
                }
            }
            Nargs::AtLeast(a) => resolve(End::Finite(*a), End::Unbounded),
            Nargs::Bounds(limits) => match &limits[..] {
                [lower, upper] => resolve(limit_end(lower)?, limit_end(upper)?),
                _ => Err(DefinitionError::ArityBoundsLength(limits.len())),
            },
        }
    }
}

fn parse_count(literal: &str) -> Result<i64, DefinitionError> {
    literal
        .trim()
        .parse::<i64>()
        .map_err(|_| DefinitionError::InvalidArityLiteral(literal.to_string()))
}

fn limit_end(limit: &Limit) -> Result<End, DefinitionError> {
    match limit {
        Limit::Number(n) => Ok(End::Finite(*n)),
        Limit::Literal(literal) => match literal.to_lowercase().as_str() {
            "*" | "inf" | "infinity" => Ok(End::Unbounded),
            _ => parse_count(literal).map(End::Finite),
        },
    }
}

fn resolve(a: End, b: End) -> Result<Arity, DefinitionError> {
    let (lower, upper) = if a > b { (b, a) } else { (a, b) };

    let min = match lower {
        End::Finite(n) if n < 0 => return Err(DefinitionError::NegativeArity),
        End::Finite(n) => n as usize,
        End::Unbounded => return Err(DefinitionError::UnboundedMinimum),
    };
    let max = match upper {
        End::Finite(n) => Some(n as usize),
        End::Unbounded => None,
    };

    Ok(Arity { min, max })
}

/// The canonical inclusive range of arguments a parameter consumes when triggered.
///
/// `max` of `None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arity {
    min: usize,
    max: Option<usize>,
}

impl Arity {
    /// Create an arity directly.
    ///
    /// Panics if `min > max`; use [`Nargs::arity`] for user provided input.
    pub fn new(min: usize, max: Option<usize>) -> Self {
        if let Some(max) = max {
            assert!(min <= max, "arity minimum {min} exceeds maximum {max}");
        }

        Self { min, max }
    }

    /// The minimum number of arguments.
    pub fn min(&self) -> usize {
        self.min
    }

    /// The maximum number of arguments, `None` when unbounded.
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Whether `count` arguments satisfy this arity.
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }

    /// Whether more arguments may be collected after `count` were already collected.
    pub fn is_open(&self, count: usize) -> bool {
        self.max.map_or(true, |max| count < max)
    }

    /// `0`: the parameter takes no arguments.
    pub fn is_flag(&self) -> bool {
        self.min == 0 && self.max == Some(0)
    }

    /// `1`: the parameter takes precisely one argument.
    pub fn is_single(&self) -> bool {
        self.min == 1 && self.max == Some(1)
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{max}"),
            Some(max) => write!(f, "{}..={max}", self.min),
            None => write!(f, "{}..", self.min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    #[rstest]
    #[case(Nargs::from(0), 0, Some(0))]
    #[case(Nargs::from(5), 5, Some(5))]
    #[case(Nargs::from("12"), 12, Some(12))]
    #[case(Nargs::from("+"), 1, None)]
    #[case(Nargs::from("*"), 0, None)]
    #[case(Nargs::from("inf"), 0, None)]
    #[case(Nargs::from("Infinity"), 0, None)]
    #[case(Nargs::from(2..=6), 2, Some(6))]
    #[case(Nargs::from(6..=2), 2, Some(6))]
    #[case(Nargs::from(2..6), 2, Some(5))]
    #[case(Nargs::from(6..2), 3, Some(6))]
    #[case(Nargs::from(3..), 3, None)]
    #[case(Nargs::from([Limit::from(2), Limit::from("*")]), 2, None)]
    #[case(Nargs::from([Limit::from("inf"), Limit::from(2)]), 2, None)]
    #[case(Nargs::from([Limit::from("4"), Limit::from(1)]), 1, Some(4))]
    fn resolve_arity(#[case] nargs: Nargs, #[case] min: usize, #[case] max: Option<usize>) {
        assert_eq!(nargs.arity().unwrap(), Arity::new(min, max));
    }

    #[rstest]
    #[case(Nargs::from(-1), DefinitionError::NegativeArity)]
    #[case(Nargs::from(-2..=2), DefinitionError::NegativeArity)]
    #[case(Nargs::from(2..=-2), DefinitionError::NegativeArity)]
    #[case(Nargs::from("a12"), DefinitionError::InvalidArityLiteral("a12".to_string()))]
    #[case(Nargs::from([Limit::from(1), Limit::from("+")]), DefinitionError::InvalidArityLiteral("+".to_string()))]
    #[case(Nargs::from(vec![Limit::from(1)]), DefinitionError::ArityBoundsLength(1))]
    #[case(Nargs::from(vec![Limit::from(1), Limit::from(2), Limit::from(3)]), DefinitionError::ArityBoundsLength(3))]
    #[case(Nargs::from(2..2), DefinitionError::EmptyArity("2..2".to_string()))]
    #[case(Nargs::from([Limit::from("*"), Limit::from("inf")]), DefinitionError::UnboundedMinimum)]
    fn resolve_arity_invalid(#[case] nargs: Nargs, #[case] expected: DefinitionError) {
        assert_eq!(nargs.arity().unwrap_err(), expected);
    }

    #[test]
    fn resolve_fixed_random() {
        for _ in 0..100 {
            let n: i64 = thread_rng().gen_range(0..1000);
            assert_eq!(
                Nargs::from(n).arity().unwrap(),
                Arity::new(n as usize, Some(n as usize))
            );
        }
    }

    #[test]
    fn resolve_reversed_random() {
        for _ in 0..100 {
            let a: i64 = thread_rng().gen_range(0..1000);
            let b: i64 = thread_rng().gen_range(0..1000);
            let (low, high) = if a < b { (a, b) } else { (b, a) };
            assert_eq!(
                Nargs::from(high..=low).arity().unwrap(),
                Arity::new(low as usize, Some(high as usize))
            );
        }
    }

    #[rstest]
    #[case(Arity::new(0, Some(0)), 0, true)]
    #[case(Arity::new(0, Some(0)), 1, false)]
    #[case(Arity::new(2, Some(3)), 1, false)]
    #[case(Arity::new(2, Some(3)), 2, true)]
    #[case(Arity::new(2, Some(3)), 3, true)]
    #[case(Arity::new(2, Some(3)), 4, false)]
    #[case(Arity::new(1, None), 0, false)]
    #[case(Arity::new(1, None), 200, true)]
    fn arity_contains(#[case] arity: Arity, #[case] count: usize, #[case] expected: bool) {
        assert_eq!(arity.contains(count), expected);
    }

    #[rstest]
    #[case(Arity::new(0, Some(0)), "0")]
    #[case(Arity::new(1, Some(1)), "1")]
    #[case(Arity::new(2, Some(3)), "2..=3")]
    #[case(Arity::new(1, None), "1..")]
    fn arity_display(#[case] arity: Arity, #[case] expected: &str) {
        assert_eq!(arity.to_string(), expected);
    }

    #[test]
    fn arity_kinds() {
        assert!(Arity::new(0, Some(0)).is_flag());
        assert!(!Arity::new(0, Some(1)).is_flag());
        assert!(Arity::new(1, Some(1)).is_single());
        assert!(!Arity::new(1, None).is_single());
        assert!(Arity::new(0, None).is_open(1_000));
        assert!(!Arity::new(0, Some(2)).is_open(2));
    }
}
