use crate::adapters::digit_source::ThreadRngDigitSource;
use crate::domain::model::{Operands, Product};
use crate::domain::ports::DigitSource;
use crate::utils::error::{MathError, Result};

/// Multiply `a` and `b` if neither is negative.
///
/// The product is widened to `i64`, so every pair of non-negative `i32`
/// operands yields the exact result.
///
/// ```
/// use math_ops::multiply_if_positive;
///
/// assert_eq!(multiply_if_positive(2, 4).unwrap(), 8);
/// assert!(multiply_if_positive(-2, 4).is_err());
/// ```
pub fn multiply_if_positive(a: i32, b: i32) -> Result<i64> {
    if a < 0 || b < 0 {
        tracing::warn!(a, b, "rejecting negative operand");
        return Err(MathError::InvalidArgument { a, b });
    }

    Ok(i64::from(a) * i64::from(b))
}

/// Arithmetic utility whose randomness comes from an injected [`DigitSource`].
#[derive(Debug, Clone, Default)]
pub struct MathOperations<S: DigitSource = ThreadRngDigitSource> {
    digits: S,
}

impl MathOperations<ThreadRngDigitSource> {
    pub fn new() -> Self {
        Self::with_source(ThreadRngDigitSource)
    }
}

impl<S: DigitSource> MathOperations<S> {
    pub fn with_source(digits: S) -> Self {
        Self { digits }
    }

    pub fn multiply_if_positive(&self, a: i32, b: i32) -> Result<i64> {
        multiply_if_positive(a, b)
    }

    /// Draw two digits and multiply them. The first draw is operand `a`,
    /// the second is operand `b`.
    pub fn multiply_two_random_numbers(&mut self) -> Result<i64> {
        self.multiply_two_random_numbers_detailed()
            .map(|product| product.result)
    }

    /// Same as [`Self::multiply_two_random_numbers`] but keeps the drawn operands.
    pub fn multiply_two_random_numbers_detailed(&mut self) -> Result<Product> {
        let a = self.generate_random_digit();
        let b = self.generate_random_digit();
        let result = multiply_if_positive(a, b)?;

        tracing::debug!(a, b, result, "multiplied random digits");
        Ok(Product {
            operands: Operands::new(a, b),
            result,
        })
    }

    pub fn generate_random_digit(&mut self) -> i32 {
        let digit = self.digits.next_digit();
        tracing::debug!(digit, "drew digit");
        digit
    }

    pub fn into_source(self) -> S {
        self.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockDigitSource, DIGIT_UPPER_BOUND};
    use mockall::Sequence;
    use proptest::prelude::*;

    fn mock_yielding(values: &[i32]) -> MockDigitSource {
        let mut source = MockDigitSource::new();
        let mut seq = Sequence::new();
        for &value in values {
            source
                .expect_next_digit()
                .times(1)
                .in_sequence(&mut seq)
                .return_const(value);
        }
        source
    }

    #[test]
    fn test_multiply_if_positive_cases() {
        // (a, b, expected, is_error)
        let cases = [
            (2, 4, 8, false),
            (-2, 4, 0, true),
            (2, -4, 0, true),
            (0, 503949894, 0, false),
        ];

        let ops = MathOperations::new();
        for (a, b, expected, is_error) in cases {
            let result = ops.multiply_if_positive(a, b);
            if is_error {
                assert!(
                    matches!(result, Err(MathError::InvalidArgument { .. })),
                    "expected InvalidArgument for ({a}, {b}), got {result:?}"
                );
            } else {
                assert_eq!(result.unwrap(), expected, "case ({a}, {b})");
            }
        }
    }

    #[test]
    fn test_multiply_if_positive_does_not_overflow() {
        assert_eq!(
            multiply_if_positive(i32::MAX, i32::MAX).unwrap(),
            i64::from(i32::MAX) * i64::from(i32::MAX)
        );
    }

    #[test]
    fn test_multiply_two_random_numbers_with_mocked_source() {
        let mut ops = MathOperations::with_source(mock_yielding(&[2, 5]));
        assert_eq!(ops.multiply_two_random_numbers().unwrap(), 10);
    }

    #[test]
    fn test_first_draw_is_operand_a() {
        let mut ops = MathOperations::with_source(mock_yielding(&[3, 7]));
        let product = ops.multiply_two_random_numbers_detailed().unwrap();

        assert_eq!(product.operands, Operands::new(3, 7));
        assert_eq!(product.result, 21);
    }

    #[test]
    fn test_misbehaving_source_surfaces_invalid_argument() {
        let mut ops = MathOperations::with_source(mock_yielding(&[-1, 5]));
        let err = ops.multiply_two_random_numbers().unwrap_err();
        assert!(matches!(err, MathError::InvalidArgument { a: -1, b: 5 }));
    }

    #[test]
    fn test_generate_random_digit_stays_in_range() {
        let mut ops = MathOperations::new();
        for _ in 0..10_000 {
            let digit = ops.generate_random_digit();
            assert!((0..DIGIT_UPPER_BOUND).contains(&digit), "out of range: {digit}");
        }
    }

    proptest! {
        #[test]
        fn prop_non_negative_operands_multiply(a in 0..=i32::MAX, b in 0..=i32::MAX) {
            prop_assert_eq!(multiply_if_positive(a, b).unwrap(), i64::from(a) * i64::from(b));
        }

        #[test]
        fn prop_negative_operand_is_rejected(a in i32::MIN..0, b in any::<i32>()) {
            let rejected = matches!(multiply_if_positive(a, b), Err(MathError::InvalidArgument { .. }));
            prop_assert!(rejected);

            let rejected_swapped =
                matches!(multiply_if_positive(b, a), Err(MathError::InvalidArgument { .. }));
            prop_assert!(rejected_swapped);
        }

        #[test]
        fn prop_multiply_is_pure(a in any::<i32>(), b in any::<i32>()) {
            let first = multiply_if_positive(a, b).ok();
            let second = multiply_if_positive(a, b).ok();
            prop_assert_eq!(first, second);
        }
    }
}
