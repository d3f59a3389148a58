use math_ops::{
    multiply_if_positive, DigitSource, FixedDigitSource, MathError, MathOperations,
    SeededDigitSource, DIGIT_UPPER_BOUND,
};

/// 只用於測試：記錄被呼叫次數的數字來源
struct CountingSource {
    next: i32,
    calls: usize,
}

impl DigitSource for CountingSource {
    fn next_digit(&mut self) -> i32 {
        self.calls += 1;
        let digit = self.next;
        self.next = (self.next + 1) % DIGIT_UPPER_BOUND;
        digit
    }
}

#[test]
fn test_multiply_if_positive_scenarios() {
    assert_eq!(multiply_if_positive(2, 4).unwrap(), 8);
    assert!(matches!(
        multiply_if_positive(-2, 4),
        Err(MathError::InvalidArgument { a: -2, b: 4 })
    ));
    assert!(matches!(
        multiply_if_positive(2, -4),
        Err(MathError::InvalidArgument { a: 2, b: -4 })
    ));
    assert_eq!(multiply_if_positive(0, 503949894).unwrap(), 0);
}

#[test]
fn test_fixed_source_two_then_five_gives_ten() {
    let mut ops = MathOperations::with_source(FixedDigitSource::new(vec![2, 5]));
    assert_eq!(ops.multiply_two_random_numbers().unwrap(), 10);
    assert_eq!(ops.into_source().draws(), 2);
}

#[test]
fn test_each_call_consumes_exactly_two_draws() {
    let mut ops = MathOperations::with_source(CountingSource { next: 4, calls: 0 });

    // 4 * 5, 然後 6 * 7
    assert_eq!(ops.multiply_two_random_numbers().unwrap(), 20);
    assert_eq!(ops.multiply_two_random_numbers().unwrap(), 42);
    assert_eq!(ops.into_source().calls, 4);
}

#[test]
fn test_borrowed_source_can_be_inspected_afterwards() {
    let mut source = FixedDigitSource::new(vec![3, 3]);
    {
        let mut ops = MathOperations::with_source(&mut source);
        assert_eq!(ops.multiply_two_random_numbers().unwrap(), 9);
    }
    assert_eq!(source.draws(), 2);
}

#[test]
fn test_default_source_samples_stay_in_range() {
    let mut ops = MathOperations::new();
    for _ in 0..10_000 {
        let digit = ops.generate_random_digit();
        assert!((0..DIGIT_UPPER_BOUND).contains(&digit));
    }
}

#[test]
fn test_random_products_are_bounded() {
    let mut ops = MathOperations::with_source(SeededDigitSource::new(2024));
    for _ in 0..1_000 {
        let product = ops.multiply_two_random_numbers().unwrap();
        assert!((0..=81).contains(&product));
    }
}

#[test]
fn test_same_seed_same_products() {
    let mut first = MathOperations::with_source(SeededDigitSource::new(9));
    let mut second = MathOperations::with_source(SeededDigitSource::new(9));
    for _ in 0..50 {
        assert_eq!(
            first.multiply_two_random_numbers().unwrap(),
            second.multiply_two_random_numbers().unwrap()
        );
    }
}
