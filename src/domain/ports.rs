/// Exclusive upper bound of every digit a [`DigitSource`] hands out.
pub const DIGIT_UPPER_BOUND: i32 = 10;

/// Source of pseudo-random digits in `0..DIGIT_UPPER_BOUND`.
///
/// Implementations that return anything outside that range break the
/// contract; callers do not clamp.
#[cfg_attr(test, mockall::automock)]
pub trait DigitSource {
    fn next_digit(&mut self) -> i32;
}

impl<S: DigitSource + ?Sized> DigitSource for &mut S {
    fn next_digit(&mut self) -> i32 {
        (**self).next_digit()
    }
}

impl<S: DigitSource + ?Sized> DigitSource for Box<S> {
    fn next_digit(&mut self) -> i32 {
        (**self).next_digit()
    }
}
