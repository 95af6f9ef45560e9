use super::SequenceGenerator;

// 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, ... scaled by `base_value`, computed with Knuth's
// reluctant doubling.
#[derive(Debug, Copy, Clone)]
pub(crate) struct LubySequence {
    u: i64,
    v: i64,
    base_value: i64,
}

impl LubySequence {
    pub(crate) fn new(base_value: i64) -> LubySequence {
        LubySequence {
            u: 1,
            v: 1,
            base_value,
        }
    }
}

impl SequenceGenerator for LubySequence {
    fn next(&mut self) -> i64 {
        let next_value = self.v;
        if (self.u & (-self.u)) == self.v {
            self.u += 1;
            self.v = 1;
        } else {
            self.v *= 2;
        }
        next_value * self.base_value
    }
}

#[cfg(test)]
mod tests {
    use super::LubySequence;
    use crate::basic_types::sequence_generators::SequenceGenerator;

    fn luby(i: usize) -> usize {
        let k = (i + 1).ilog2();
        if (i + 1).is_power_of_two() {
            1 << (k - 1)
        } else {
            luby(i + 1 - (1 << k))
        }
    }

    #[test]
    fn prefix_of_base_one() {
        let mut sequence = LubySequence::new(1);
        let values = (0..15).map(|_| sequence.next()).collect::<Vec<_>>();
        assert_eq!(values, vec![1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8]);
    }

    #[test]
    fn matches_recursive_definition_scaled() {
        let mut sequence = LubySequence::new(50);
        for i in 1..10_000 {
            assert_eq!(sequence.next(), (luby(i) * 50) as i64);
        }
    }
}
