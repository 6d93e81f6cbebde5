//! Triangular fuzzy number value object and its algebra.
//!
//! All arithmetic is exact decimal arithmetic. Operations never mutate their
//! inputs; every result is revalidated against the `0 <= a <= b <= c`
//! invariant, so an operation whose componentwise result breaks the ordering
//! (e.g. dividing by a "wider" fuzzy number) fails with `InvalidFuzzyNumber`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::RankingError;

/// How [`TriangularFuzzyNumber::combine`] reduces a set of fuzzy numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombineMode {
    /// Componentwise maximum of a, b and c.
    Max,
    /// Componentwise minimum of a, b and c.
    Min,
    /// Consensus of independent judgments: (min a, mean b, max c).
    #[default]
    Consensus,
}

/// Right-hand side of a fuzzy multiplication or division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzyOperand {
    Scalar(Decimal),
    Fuzzy(TriangularFuzzyNumber),
}

impl FuzzyOperand {
    fn components(&self) -> (Decimal, Decimal, Decimal) {
        match self {
            FuzzyOperand::Scalar(value) => (*value, *value, *value),
            FuzzyOperand::Fuzzy(number) => (number.a, number.b, number.c),
        }
    }
}

impl From<Decimal> for FuzzyOperand {
    fn from(value: Decimal) -> Self {
        FuzzyOperand::Scalar(value)
    }
}

impl From<TriangularFuzzyNumber> for FuzzyOperand {
    fn from(value: TriangularFuzzyNumber) -> Self {
        FuzzyOperand::Fuzzy(value)
    }
}

impl From<&TriangularFuzzyNumber> for FuzzyOperand {
    fn from(value: &TriangularFuzzyNumber) -> Self {
        FuzzyOperand::Fuzzy(*value)
    }
}

/// An uncertain quantity with lower bound `a`, most likely value `b` and
/// upper bound `c`.
///
/// Invariant: `0 <= a <= b <= c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TriangularFuzzyNumber {
    a: Decimal,
    b: Decimal,
    c: Decimal,
}

impl TriangularFuzzyNumber {
    /// Creates a fuzzy number, rejecting negative or out-of-order components.
    pub fn new(a: Decimal, b: Decimal, c: Decimal) -> Result<Self, RankingError> {
        if a < Decimal::ZERO || b < Decimal::ZERO || c < Decimal::ZERO {
            return Err(RankingError::invalid_fuzzy_number(
                a,
                b,
                c,
                "components must be non-negative",
            ));
        }
        if !(a <= b && b <= c) {
            return Err(RankingError::invalid_fuzzy_number(
                a,
                b,
                c,
                "components must satisfy a <= b <= c",
            ));
        }
        Ok(Self { a, b, c })
    }

    /// Creates the degenerate fuzzy number `(value, value, value)`.
    pub fn crisp(value: Decimal) -> Result<Self, RankingError> {
        Self::new(value, value, value)
    }

    /// Lower bound.
    pub fn a(&self) -> Decimal {
        self.a
    }

    /// Most likely value.
    pub fn b(&self) -> Decimal {
        self.b
    }

    /// Upper bound.
    pub fn c(&self) -> Decimal {
        self.c
    }

    /// Componentwise product with a scalar or another fuzzy number.
    ///
    /// The fuzzy-by-fuzzy case is the componentwise approximation
    /// `(a1*a2, b1*b2, c1*c2)`, not the exact fuzzy product.
    pub fn multiply(&self, rhs: impl Into<FuzzyOperand>) -> Result<Self, RankingError> {
        let (a, b, c) = rhs.into().components();
        Self::new(
            checked_mul(self.a, a)?,
            checked_mul(self.b, b)?,
            checked_mul(self.c, c)?,
        )
    }

    /// Componentwise quotient by a scalar or another fuzzy number.
    pub fn divide(&self, rhs: impl Into<FuzzyOperand>) -> Result<Self, RankingError> {
        let (a, b, c) = rhs.into().components();
        Self::new(
            checked_div(self.a, a, "divide")?,
            checked_div(self.b, b, "divide")?,
            checked_div(self.c, c, "divide")?,
        )
    }

    /// Raises each component to `exponent`.
    ///
    /// A negative exponent yields `(1/c^|p|, 1/b^|p|, 1/a^|p|)`: the bounds
    /// swap so the result stays ordered.
    pub fn power(&self, exponent: Decimal) -> Result<Self, RankingError> {
        if exponent < Decimal::ZERO {
            let magnitude = exponent.abs();
            return Self::new(
                reciprocal(checked_pow(self.c, magnitude)?)?,
                reciprocal(checked_pow(self.b, magnitude)?)?,
                reciprocal(checked_pow(self.a, magnitude)?)?,
            );
        }
        Self::new(
            checked_pow(self.a, exponent)?,
            checked_pow(self.b, exponent)?,
            checked_pow(self.c, exponent)?,
        )
    }

    /// `self < other`, decided on the lower bounds only.
    pub fn less_than(&self, other: &Self) -> bool {
        self.a < other.a
    }

    /// `self <= other`: lower bound strictly smaller, or the numbers are equal.
    pub fn less_or_equal(&self, other: &Self) -> bool {
        self.less_than(other) || self == other
    }

    /// `self > other`, decided on the upper bounds only.
    pub fn greater_than(&self, other: &Self) -> bool {
        self.c > other.c
    }

    /// `self >= other`: upper bound strictly larger, or the numbers are equal.
    pub fn greater_or_equal(&self, other: &Self) -> bool {
        self.greater_than(other) || self == other
    }

    /// Smallest element under [`less_than`](Self::less_than).
    ///
    /// The first element is kept unless a later one is strictly less than the
    /// current pick.
    pub fn pick_min<'a>(numbers: impl IntoIterator<Item = &'a Self>) -> Result<Self, RankingError> {
        let mut numbers = numbers.into_iter();
        let mut current = *numbers.next().ok_or(RankingError::EmptyCombineSet)?;
        for number in numbers {
            if number.less_than(&current) {
                current = *number;
            }
        }
        Ok(current)
    }

    /// Largest element under [`greater_than`](Self::greater_than).
    pub fn pick_max<'a>(numbers: impl IntoIterator<Item = &'a Self>) -> Result<Self, RankingError> {
        let mut numbers = numbers.into_iter();
        let mut current = *numbers.next().ok_or(RankingError::EmptyCombineSet)?;
        for number in numbers {
            if number.greater_than(&current) {
                current = *number;
            }
        }
        Ok(current)
    }

    /// Reduces a set of fuzzy numbers into one.
    ///
    /// # Errors
    /// `EmptyCombineSet` if `numbers` is empty.
    pub fn combine(numbers: &[Self], mode: CombineMode) -> Result<Self, RankingError> {
        let first = numbers.first().ok_or(RankingError::EmptyCombineSet)?;

        let min_a = numbers.iter().map(|n| n.a).fold(first.a, Decimal::min);
        let max_c = numbers.iter().map(|n| n.c).fold(first.c, Decimal::max);

        match mode {
            CombineMode::Max => Self::new(
                numbers.iter().map(|n| n.a).fold(first.a, Decimal::max),
                numbers.iter().map(|n| n.b).fold(first.b, Decimal::max),
                max_c,
            ),
            CombineMode::Min => Self::new(
                min_a,
                numbers.iter().map(|n| n.b).fold(first.b, Decimal::min),
                numbers.iter().map(|n| n.c).fold(first.c, Decimal::min),
            ),
            CombineMode::Consensus => {
                let sum_b = numbers
                    .iter()
                    .try_fold(Decimal::ZERO, |acc, n| acc.checked_add(n.b))
                    .ok_or(RankingError::ArithmeticOverflow { operation: "combine" })?;
                let mean_b = checked_div(sum_b, Decimal::from(numbers.len()), "combine")?;
                Self::new(min_a, mean_b, max_c)
            }
        }
    }

    /// Distance between two fuzzy numbers:
    /// `sqrt(((a1-a2)^2 + (b1-b2)^2 + (c1-c2)^2) / 3)`.
    pub fn euclidean_distance(left: &Self, right: &Self) -> Result<Decimal, RankingError> {
        let squared = [
            left.a - right.a,
            left.b - right.b,
            left.c - right.c,
        ]
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, delta| {
            delta.checked_mul(delta).and_then(|sq| acc.checked_add(sq))
        })
        .ok_or(RankingError::ArithmeticOverflow { operation: "euclidean_distance" })?;

        checked_div(squared, Decimal::from(3), "euclidean_distance")?
            .sqrt()
            .ok_or(RankingError::ArithmeticOverflow { operation: "euclidean_distance" })
    }
}

fn checked_mul(left: Decimal, right: Decimal) -> Result<Decimal, RankingError> {
    left.checked_mul(right)
        .ok_or(RankingError::ArithmeticOverflow { operation: "multiply" })
}

fn checked_div(
    dividend: Decimal,
    divisor: Decimal,
    operation: &'static str,
) -> Result<Decimal, RankingError> {
    if divisor.is_zero() {
        return Err(RankingError::DivisionByZero { operation });
    }
    dividend
        .checked_div(divisor)
        .ok_or(RankingError::ArithmeticOverflow { operation })
}

fn reciprocal(value: Decimal) -> Result<Decimal, RankingError> {
    checked_div(Decimal::ONE, value, "power")
}

fn checked_pow(base: Decimal, exponent: Decimal) -> Result<Decimal, RankingError> {
    let result = if exponent.fract().is_zero() {
        exponent.to_i64().and_then(|exp| base.checked_powi(exp))
    } else {
        base.checked_powd(exponent)
    };
    result.ok_or(RankingError::ArithmeticOverflow { operation: "power" })
}

impl fmt::Display for TriangularFuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.a, self.b, self.c)
    }
}

impl FromStr for TriangularFuzzyNumber {
    type Err = RankingError;

    /// Parses the tabular form `"a,b,c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(RankingError::invalid_format(
                "fuzzy_number",
                format!("expected three comma-separated components, got '{}'", s),
            ));
        }

        let mut components = [Decimal::ZERO; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = Decimal::from_str(part).map_err(|e| {
                RankingError::invalid_format("fuzzy_number", format!("'{}': {}", part, e))
            })?;
        }

        Self::new(components[0], components[1], components[2])
    }
}

impl TryFrom<String> for TriangularFuzzyNumber {
    type Error = RankingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TriangularFuzzyNumber> for String {
    fn from(value: TriangularFuzzyNumber) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn tfn(a: Decimal, b: Decimal, c: Decimal) -> TriangularFuzzyNumber {
        TriangularFuzzyNumber::new(a, b, c).unwrap()
    }

    fn sample_set() -> Vec<TriangularFuzzyNumber> {
        vec![
            tfn(dec!(1), dec!(2), dec!(3)),
            tfn(dec!(0), dec!(4), dec!(5)),
            tfn(dec!(0), dec!(6), dec!(7)),
        ]
    }

    // Construction

    #[test]
    fn new_rejects_negative_components() {
        assert!(TriangularFuzzyNumber::new(dec!(-1), dec!(2), dec!(3)).is_err());
        assert!(TriangularFuzzyNumber::new(dec!(1), dec!(-2), dec!(3)).is_err());
        assert!(TriangularFuzzyNumber::new(dec!(1), dec!(2), dec!(-3)).is_err());
    }

    #[test]
    fn new_rejects_unordered_components() {
        let result = TriangularFuzzyNumber::new(dec!(2), dec!(4), dec!(3));
        match result {
            Err(RankingError::InvalidFuzzyNumber { a, b, c, .. }) => {
                assert_eq!((a, b, c), (dec!(2), dec!(4), dec!(3)));
            }
            _ => panic!("Expected InvalidFuzzyNumber error"),
        }
        assert!(TriangularFuzzyNumber::new(dec!(5), dec!(3), dec!(4)).is_err());
    }

    #[test]
    fn new_accepts_degenerate_and_zero_values() {
        assert!(TriangularFuzzyNumber::new(dec!(0), dec!(0), dec!(0)).is_ok());
        assert!(TriangularFuzzyNumber::crisp(dec!(2.5)).is_ok());
    }

    // Arithmetic

    #[test]
    fn scalar_multiply() {
        let x = tfn(dec!(1), dec!(2), dec!(3));
        assert_eq!(x.multiply(dec!(2)).unwrap(), tfn(dec!(2), dec!(4), dec!(6)));
    }

    #[test]
    fn fuzzy_multiply_is_componentwise() {
        let x = tfn(dec!(1), dec!(2), dec!(3));
        let y = tfn(dec!(2), dec!(3), dec!(4));
        assert_eq!(x.multiply(y).unwrap(), tfn(dec!(2), dec!(6), dec!(12)));
    }

    #[test]
    fn negative_scalar_multiply_is_invalid() {
        let x = tfn(dec!(1), dec!(2), dec!(3));
        assert!(matches!(
            x.multiply(dec!(-1)),
            Err(RankingError::InvalidFuzzyNumber { .. })
        ));
    }

    #[test]
    fn scalar_divide() {
        let x = tfn(dec!(2), dec!(4), dec!(6));
        assert_eq!(x.divide(dec!(2)).unwrap(), tfn(dec!(1), dec!(2), dec!(3)));
    }

    #[test]
    fn fuzzy_divide_is_componentwise() {
        let x = tfn(dec!(2), dec!(6), dec!(12));
        let y = tfn(dec!(2), dec!(3), dec!(4));
        assert_eq!(x.divide(&y).unwrap(), tfn(dec!(1), dec!(2), dec!(3)));
    }

    #[test]
    fn divide_by_zero_fails() {
        let x = tfn(dec!(1), dec!(2), dec!(3));
        assert_eq!(
            x.divide(Decimal::ZERO),
            Err(RankingError::DivisionByZero { operation: "divide" })
        );
        let y = tfn(dec!(0), dec!(1), dec!(1));
        assert!(matches!(x.divide(y), Err(RankingError::DivisionByZero { .. })));
    }

    #[test]
    fn divide_breaking_order_is_invalid() {
        let x = tfn(dec!(1), dec!(2), dec!(3));
        let y = tfn(dec!(1), dec!(2), dec!(6));
        assert!(matches!(x.divide(y), Err(RankingError::InvalidFuzzyNumber { .. })));
    }

    #[test]
    fn power_positive() {
        let x = tfn(dec!(1), dec!(2), dec!(3));
        assert_eq!(x.power(dec!(2)).unwrap(), tfn(dec!(1), dec!(4), dec!(9)));
    }

    #[test]
    fn power_negative_swaps_bounds() {
        let x = tfn(dec!(1), dec!(2), dec!(3));
        let expected = tfn(dec!(1) / dec!(9), dec!(1) / dec!(4), dec!(1));
        assert_eq!(x.power(dec!(-2)).unwrap(), expected);
    }

    #[test]
    fn power_negative_with_zero_lower_bound_fails() {
        let x = tfn(dec!(0), dec!(2), dec!(3));
        assert_eq!(
            x.power(dec!(-1)),
            Err(RankingError::DivisionByZero { operation: "power" })
        );
    }

    #[test]
    fn power_zero_is_one() {
        let x = tfn(dec!(1), dec!(2), dec!(3));
        assert_eq!(x.power(Decimal::ZERO).unwrap(), tfn(dec!(1), dec!(1), dec!(1)));
    }

    #[test]
    fn power_fractional_exponent() {
        let x = tfn(dec!(4), dec!(9), dec!(16));
        let root = x.power(dec!(0.5)).unwrap();
        assert!((root.a() - dec!(2)).abs() < dec!(0.000001));
        assert!((root.b() - dec!(3)).abs() < dec!(0.000001));
        assert!((root.c() - dec!(4)).abs() < dec!(0.000001));
    }

    // Comparison

    #[test]
    fn less_than_uses_lower_bound() {
        let x = tfn(dec!(1), dec!(4), dec!(5));
        assert!(x.less_than(&tfn(dec!(2), dec!(2), dec!(2))));
        assert!(!x.less_than(&tfn(dec!(0), dec!(2), dec!(2))));
    }

    #[test]
    fn greater_than_uses_upper_bound() {
        let x = tfn(dec!(1), dec!(1), dec!(10));
        assert!(x.greater_than(&tfn(dec!(5), dec!(6), dec!(7))));
        assert!(!x.greater_than(&tfn(dec!(5), dec!(6), dec!(15))));
    }

    #[test]
    fn ordering_is_not_total() {
        let x = tfn(dec!(1), dec!(2), dec!(3));
        let y = tfn(dec!(1), dec!(3), dec!(3));
        assert!(!x.less_than(&y));
        assert!(!x.greater_than(&y));
        assert_ne!(x, y);
        assert!(!x.less_or_equal(&y));
        assert!(!x.greater_or_equal(&y));
    }

    #[test]
    fn or_equal_variants_accept_equal_values() {
        let x = tfn(dec!(1), dec!(2), dec!(3));
        assert!(x.less_or_equal(&x));
        assert!(x.greater_or_equal(&x));
    }

    #[test]
    fn pick_min_is_order_independent_for_clear_cases() {
        let wide = tfn(dec!(1), dec!(1), dec!(10));
        let narrow = tfn(dec!(5), dec!(6), dec!(7));
        assert_eq!(TriangularFuzzyNumber::pick_min([&wide, &narrow]).unwrap(), wide);
        assert_eq!(TriangularFuzzyNumber::pick_min([&narrow, &wide]).unwrap(), wide);
    }

    #[test]
    fn pick_max_is_order_independent_for_clear_cases() {
        let wide = tfn(dec!(1), dec!(1), dec!(10));
        let narrow = tfn(dec!(5), dec!(6), dec!(7));
        assert_eq!(TriangularFuzzyNumber::pick_max([&wide, &narrow]).unwrap(), wide);
        assert_eq!(TriangularFuzzyNumber::pick_max([&narrow, &wide]).unwrap(), wide);
    }

    #[test]
    fn pick_on_empty_set_fails() {
        let empty: Vec<TriangularFuzzyNumber> = Vec::new();
        assert_eq!(
            TriangularFuzzyNumber::pick_min(&empty),
            Err(RankingError::EmptyCombineSet)
        );
    }

    // Combine

    #[test]
    fn combine_consensus() {
        let combined = TriangularFuzzyNumber::combine(&sample_set(), CombineMode::Consensus).unwrap();
        assert_eq!(combined, tfn(dec!(0), dec!(4), dec!(7)));
    }

    #[test]
    fn combine_max() {
        let combined = TriangularFuzzyNumber::combine(&sample_set(), CombineMode::Max).unwrap();
        assert_eq!(combined, tfn(dec!(1), dec!(6), dec!(7)));
    }

    #[test]
    fn combine_min() {
        let combined = TriangularFuzzyNumber::combine(&sample_set(), CombineMode::Min).unwrap();
        assert_eq!(combined, tfn(dec!(0), dec!(2), dec!(3)));
    }

    #[test]
    fn combine_default_mode_is_consensus() {
        assert_eq!(CombineMode::default(), CombineMode::Consensus);
    }

    #[test]
    fn combine_empty_fails() {
        assert_eq!(
            TriangularFuzzyNumber::combine(&[], CombineMode::Max),
            Err(RankingError::EmptyCombineSet)
        );
    }

    // Distance

    #[test]
    fn euclidean_distance_from_origin() {
        let x = tfn(dec!(2), dec!(2), dec!(2));
        let origin = tfn(dec!(0), dec!(0), dec!(0));
        assert_eq!(TriangularFuzzyNumber::euclidean_distance(&x, &origin).unwrap(), dec!(2));
    }

    #[test]
    fn euclidean_distance_is_symmetric() {
        let x = tfn(dec!(1), dec!(3), dec!(5));
        let y = tfn(dec!(2), dec!(2), dec!(9));
        assert_eq!(
            TriangularFuzzyNumber::euclidean_distance(&x, &y).unwrap(),
            TriangularFuzzyNumber::euclidean_distance(&y, &x).unwrap()
        );
    }

    // Text form

    #[test]
    fn parses_tabular_form() {
        let parsed: TriangularFuzzyNumber = "5, 7,9".parse().unwrap();
        assert_eq!(parsed, tfn(dec!(5), dec!(7), dec!(9)));
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        let result = "1,2".parse::<TriangularFuzzyNumber>();
        assert!(matches!(result, Err(RankingError::InvalidFormat { .. })));
    }

    #[test]
    fn parse_rejects_non_numeric_component() {
        let result = "1,x,3".parse::<TriangularFuzzyNumber>();
        assert!(matches!(result, Err(RankingError::InvalidFormat { .. })));
    }

    #[test]
    fn parse_validates_ordering() {
        let result = "3,2,1".parse::<TriangularFuzzyNumber>();
        assert!(matches!(result, Err(RankingError::InvalidFuzzyNumber { .. })));
    }

    #[test]
    fn serializes_as_tabular_string() {
        let x = tfn(dec!(1), dec!(2.5), dec!(3));
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, r#""1,2.5,3""#);
        let back: TriangularFuzzyNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
    }

    #[test]
    fn deserialize_rejects_invalid_number() {
        let result: Result<TriangularFuzzyNumber, _> = serde_json::from_str(r#""2,4,3""#);
        assert!(result.is_err());
    }

    // Properties

    fn arb_fuzzy() -> impl Strategy<Value = TriangularFuzzyNumber> {
        prop::array::uniform3(0i64..100_000).prop_map(|mut parts| {
            parts.sort_unstable();
            tfn(
                Decimal::new(parts[0], 2),
                Decimal::new(parts[1], 2),
                Decimal::new(parts[2], 2),
            )
        })
    }

    fn arb_positive_fuzzy() -> impl Strategy<Value = TriangularFuzzyNumber> {
        prop::array::uniform3(1i64..100_000).prop_map(|mut parts| {
            parts.sort_unstable();
            tfn(
                Decimal::new(parts[0], 2),
                Decimal::new(parts[1], 2),
                Decimal::new(parts[2], 2),
            )
        })
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(x in arb_fuzzy()) {
            prop_assert_eq!(TriangularFuzzyNumber::euclidean_distance(&x, &x).unwrap(), Decimal::ZERO);
        }

        #[test]
        fn distance_is_non_negative(x in arb_fuzzy(), y in arb_fuzzy()) {
            let distance = TriangularFuzzyNumber::euclidean_distance(&x, &y).unwrap();
            prop_assert!(distance >= Decimal::ZERO);
            if x != y {
                prop_assert!(distance > Decimal::ZERO);
            }
        }

        #[test]
        fn combine_takes_componentwise_extremes(x in arb_fuzzy(), y in arb_fuzzy()) {
            let max = TriangularFuzzyNumber::combine(&[x, y], CombineMode::Max).unwrap();
            prop_assert_eq!(max.a(), x.a().max(y.a()));
            prop_assert_eq!(max.b(), x.b().max(y.b()));
            prop_assert_eq!(max.c(), x.c().max(y.c()));

            let min = TriangularFuzzyNumber::combine(&[x, y], CombineMode::Min).unwrap();
            prop_assert_eq!(min.a(), x.a().min(y.a()));
            prop_assert_eq!(min.b(), x.b().min(y.b()));
            prop_assert_eq!(min.c(), x.c().min(y.c()));

            let consensus = TriangularFuzzyNumber::combine(&[x, y], CombineMode::Consensus).unwrap();
            prop_assert_eq!(consensus.a(), x.a().min(y.a()));
            prop_assert_eq!(consensus.b(), (x.b() + y.b()) / dec!(2));
            prop_assert_eq!(consensus.c(), x.c().max(y.c()));
        }

        #[test]
        fn double_reciprocal_round_trips(x in arb_positive_fuzzy()) {
            let back = x.power(dec!(-1)).unwrap().power(dec!(-1)).unwrap();
            let tolerance = dec!(0.000000000001);
            prop_assert!((back.a() - x.a()).abs() < tolerance);
            prop_assert!((back.b() - x.b()).abs() < tolerance);
            prop_assert!((back.c() - x.c()).abs() < tolerance);
        }
    }
}
