use super::SequenceGenerator;

/// `f(0) = a` and `f(i) = floor(f(i - 1) * m)`. Since every intermediate value is rounded down
/// this differs from `a * m^i` when `m` is not an integer. Overflow is not handled.
#[derive(Debug, Copy, Clone)]
pub(crate) struct GeometricSequence {
    current_value: i64,
    multiplication_factor: f64,
}

impl GeometricSequence {
    pub(crate) fn new(starting_value: i64, multiplication_factor: f64) -> GeometricSequence {
        GeometricSequence {
            current_value: starting_value,
            multiplication_factor,
        }
    }
}

impl SequenceGenerator for GeometricSequence {
    fn next(&mut self) -> i64 {
        let next_value = self.current_value;
        self.current_value = (self.current_value as f64 * self.multiplication_factor) as i64;
        next_value
    }
}
