//! Cardinality constraints over literals.
use vlsi_sat_core::Literal;

use super::Clause;
use super::LiteralArena;

/// At least one of `literals` holds. For no literals this is the empty clause.
pub fn at_least_one(literals: &[Literal]) -> Clause {
    literals.to_vec()
}

/// At most one of `literals` holds, using the sequential encoding: the chain literal `s_i`
/// holds when one of the first `i + 1` literals does, which takes `n - 1` fresh literals and
/// `3n - 4` clauses.
pub fn at_most_one(literals: &[Literal], arena: &mut LiteralArena) -> Vec<Clause> {
    let num_literals = literals.len();
    if num_literals <= 1 {
        return vec![];
    }

    let chain = arena.new_literals(num_literals - 1);
    let mut clauses = Vec::with_capacity(3 * num_literals - 4);

    clauses.push(vec![!literals[0], chain[0]]);
    for index in 1..num_literals - 1 {
        clauses.push(vec![!literals[index], chain[index]]);
        clauses.push(vec![!chain[index - 1], chain[index]]);
        clauses.push(vec![!literals[index], !chain[index - 1]]);
    }
    clauses.push(vec![!literals[num_literals - 1], !chain[num_literals - 2]]);

    clauses
}

pub fn exactly_one(literals: &[Literal], arena: &mut LiteralArena) -> Vec<Clause> {
    let mut clauses = at_most_one(literals, arena);
    clauses.push(at_least_one(literals));
    clauses
}

#[cfg(test)]
mod tests {
    use super::at_least_one;
    use super::at_most_one;
    use super::exactly_one;
    use crate::encoders::test_utils::count_models_projected;
    use crate::encoders::LiteralArena;

    #[test]
    fn at_least_one_is_a_single_disjunction() {
        let mut arena = LiteralArena::default();
        let literals = arena.new_literals(3);

        assert_eq!(at_least_one(&literals), literals);
    }

    #[test]
    fn small_lists_need_no_clauses() {
        let mut arena = LiteralArena::default();
        let literals = arena.new_literals(1);

        assert!(at_most_one(&literals, &mut arena).is_empty());
        assert!(at_most_one(&[], &mut arena).is_empty());
        assert_eq!(arena.num_variables(), 1);
    }

    #[test]
    fn sequential_encoding_has_linear_size() {
        let mut arena = LiteralArena::default();
        let literals = arena.new_literals(6);

        let clauses = at_most_one(&literals, &mut arena);

        assert_eq!(clauses.len(), 3 * 6 - 4);
        assert_eq!(arena.num_variables(), 6 + 5);
    }

    #[test]
    fn at_most_one_admits_exactly_the_assignments_with_one_true_literal_or_none() {
        for num_literals in 2..=5 {
            let mut arena = LiteralArena::default();
            let literals = arena.new_literals(num_literals);
            let clauses = at_most_one(&literals, &mut arena);

            let models = count_models_projected(arena.num_variables(), &clauses, &literals);
            assert_eq!(models, num_literals + 1);
        }
    }

    #[test]
    fn exactly_one_admits_exactly_the_assignments_with_one_true_literal() {
        for num_literals in 1..=5 {
            let mut arena = LiteralArena::default();
            let literals = arena.new_literals(num_literals);
            let clauses = exactly_one(&literals, &mut arena);

            let models = count_models_projected(arena.num_variables(), &clauses, &literals);
            assert_eq!(models, num_literals);
        }
    }
}
