use vlsi_sat_core::Literal;
use vlsi_sat_core::PropositionalVariable;

use crate::engine::SatEngine;

/// A disjunction of literals.
pub type Clause = Vec<Literal>;

/// Hands out fresh literals for one formula. Variables are numbered by a counter, so two
/// requests can never receive the same variable.
#[derive(Clone, Debug, Default)]
pub struct LiteralArena {
    num_variables: u32,
}

impl LiteralArena {
    pub fn new_literal(&mut self) -> Literal {
        let variable = PropositionalVariable::new(self.num_variables);
        self.num_variables += 1;
        Literal::new(variable, true)
    }

    pub fn new_literals(&mut self, count: usize) -> Vec<Literal> {
        (0..count).map(|_| self.new_literal()).collect()
    }

    pub fn num_variables(&self) -> u32 {
        self.num_variables
    }
}

/// A formula in conjunctive normal form together with the arena its literals come from.
#[derive(Clone, Debug, Default)]
pub struct CnfFormula {
    arena: LiteralArena,
    clauses: Vec<Clause>,
}

impl CnfFormula {
    pub fn arena(&mut self) -> &mut LiteralArena {
        &mut self.arena
    }

    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn add_clauses(&mut self, clauses: impl IntoIterator<Item = Clause>) {
        self.clauses.extend(clauses);
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn num_variables(&self) -> u32 {
        self.arena.num_variables()
    }

    /// Hands every clause to `engine`.
    pub fn load_into(&self, engine: &mut impl SatEngine) {
        for clause in &self.clauses {
            engine.add_clause(clause);
        }
    }
}
