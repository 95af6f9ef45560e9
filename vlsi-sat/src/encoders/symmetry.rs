//! Breaking the mirror symmetry of packings.
//!
//! Reflecting every rectangle of a packing in the vertical axis of the strip (or in its
//! horizontal axis) gives another packing. On a ladder of bound `B`, the reflection maps the
//! coordinate `x` to `B - x`, so "the mirrored coordinate is at most `i`" is the literal
//! `¬P[B - 1 - i]`. Requiring the ladder literals to be lexicographically at least their mirror
//! image keeps one packing of every mirrored pair.
//!
//! The lexicographic constraint may be cut off after a prefix. A shorter prefix breaks fewer
//! symmetries but never removes every packing of a mirrored pair.
//!
//! Instead of the lexicographic constraint, the rectangle with the smallest side may be kept in
//! the lower-left half of its range on both axes. Both reflections are applied independently, so
//! one of the four reflected packings always satisfies this.
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;
use vlsi_sat_core::Literal;

use super::Clause;
use super::LiteralArena;
use super::PositionLadder;
use super::Slot;

/// How much of the lexicographic order between a ladder vector of length `N` and its mirror
/// image is enforced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SymmetryBreaking {
    /// No symmetry breaking clauses.
    Disabled,
    /// The complete vector.
    Full,
    /// The first `⌈√N⌉` positions.
    #[default]
    SquareRoot,
    /// The first `n` positions.
    Prefix(usize),
    /// No lexicographic order; the rectangle with the smallest side is kept in the lower-left
    /// half of its range instead.
    SmallestInCorner,
}

impl SymmetryBreaking {
    /// The number of positions of a vector of length `vector_length` which are compared.
    pub fn prefix_length(&self, vector_length: usize) -> usize {
        let prefix_length = match self {
            SymmetryBreaking::Disabled | SymmetryBreaking::SmallestInCorner => 0,
            SymmetryBreaking::Full => vector_length,
            SymmetryBreaking::SquareRoot => (vector_length as f64).sqrt().ceil() as usize,
            SymmetryBreaking::Prefix(length) => *length,
        };
        prefix_length.min(vector_length)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown symmetry breaking '{0}', expected none, full, sqrt, corner or a prefix length")]
pub struct InvalidSymmetryBreaking(String);

impl FromStr for SymmetryBreaking {
    type Err = InvalidSymmetryBreaking;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SymmetryBreaking::Disabled),
            "full" => Ok(SymmetryBreaking::Full),
            "sqrt" => Ok(SymmetryBreaking::SquareRoot),
            "corner" => Ok(SymmetryBreaking::SmallestInCorner),
            _ => s
                .parse()
                .map(SymmetryBreaking::Prefix)
                .map_err(|_| InvalidSymmetryBreaking(s.to_owned())),
        }
    }
}

impl Display for SymmetryBreaking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymmetryBreaking::Disabled => write!(f, "none"),
            SymmetryBreaking::Full => write!(f, "full"),
            SymmetryBreaking::SquareRoot => write!(f, "sqrt"),
            SymmetryBreaking::Prefix(length) => write!(f, "{length}"),
            SymmetryBreaking::SmallestInCorner => write!(f, "corner"),
        }
    }
}

/// The mirror image of the non-top literals of `ladder`.
pub fn mirror(ladder: &PositionLadder) -> Vec<Literal> {
    ladder
        .literals()
        .iter()
        .rev()
        .skip(1)
        .map(|literal| !*literal)
        .collect()
}

/// `original >= mirrored` lexicographically (true above false) on the first `prefix_length`
/// positions.
///
/// The fresh literal `s_i` holds exactly when the first `i + 1` positions are equal, and each
/// position is only constrained while all earlier ones are equal.
pub fn lex_geq(
    original: &[Literal],
    mirrored: &[Literal],
    prefix_length: usize,
    arena: &mut LiteralArena,
) -> Vec<Clause> {
    let prefix_length = prefix_length.min(original.len()).min(mirrored.len());
    if prefix_length == 0 {
        return vec![];
    }

    let mut clauses = vec![vec![!mirrored[0], original[0]]];
    if prefix_length == 1 {
        return clauses;
    }

    let equal = arena.new_literals(prefix_length - 1);
    clauses.extend(equal_when_equivalent(equal[0], original[0], mirrored[0], None));

    for index in 1..prefix_length {
        clauses.push(vec![!equal[index - 1], !mirrored[index], original[index]]);

        if index < prefix_length - 1 {
            clauses.extend(equal_when_equivalent(
                equal[index],
                original[index],
                mirrored[index],
                Some(equal[index - 1]),
            ));
        }
    }

    clauses
}

/// `equal <-> (previous ∧ (original <-> mirrored))`, where a missing `previous` is true.
fn equal_when_equivalent(
    equal: Literal,
    original: Literal,
    mirrored: Literal,
    previous: Option<Literal>,
) -> Vec<Clause> {
    let mut clauses = vec![
        vec![!equal, !original, mirrored],
        vec![!equal, !mirrored, original],
    ];

    let mut both_true = vec![!original, !mirrored, equal];
    let mut both_false = vec![original, mirrored, equal];
    if let Some(previous) = previous {
        clauses.push(vec![!equal, previous]);
        both_true.push(!previous);
        both_false.push(!previous);
    }
    clauses.push(both_true);
    clauses.push(both_false);

    clauses
}

/// Keeps the first rectangle with the smallest side in the lower-left half of its range: its
/// coordinate is at most `bound / 2` on both axes, in whichever orientation is selected.
pub fn smallest_in_corner(slots: &[Slot]) -> Vec<Clause> {
    let Some(smallest) = slots
        .iter()
        .min_by_key(|slot| {
            let smallest_side = slot.dimensions.width.min(slot.dimensions.height);
            (smallest_side, slot.rectangle_index)
        })
        .map(|slot| slot.rectangle_index)
    else {
        return vec![];
    };

    slots
        .iter()
        .filter(|slot| slot.rectangle_index == smallest && !slot.is_pinned)
        .flat_map(|slot| {
            [&slot.x, &slot.y].into_iter().filter_map(move |ladder| {
                let half = ladder.literal(ladder.bound() / 2)?;
                let mut clause = slot.selector.map(|selector| vec![!selector]).unwrap_or_default();
                clause.push(half);
                Some(clause)
            })
        })
        .collect()
}

/// The symmetry breaking clauses for `slots`.
///
/// The lexicographic modes order the ladders of all slots against their mirror images, one
/// constraint for each axis. Pinned slots are left out since their ladders are fixed.
pub fn generate_symmetry_breaking(
    slots: &[Slot],
    symmetry_breaking: SymmetryBreaking,
    arena: &mut LiteralArena,
) -> Vec<Clause> {
    match symmetry_breaking {
        SymmetryBreaking::Disabled => return vec![],
        SymmetryBreaking::SmallestInCorner => return smallest_in_corner(slots),
        _ => {}
    }

    let mut clauses = vec![];
    for is_horizontal in [true, false] {
        let (original, mirrored): (Vec<_>, Vec<_>) = slots
            .iter()
            .filter(|slot| !slot.is_pinned)
            .map(|slot| slot.ladder(is_horizontal))
            .flat_map(|ladder| {
                let non_top = &ladder.literals()[..ladder.literals().len().saturating_sub(1)];
                non_top.iter().copied().zip(mirror(ladder))
            })
            .unzip();

        let prefix_length = symmetry_breaking.prefix_length(original.len());
        clauses.extend(lex_geq(&original, &mirrored, prefix_length, arena));
    }

    clauses
}

#[cfg(test)]
mod tests {
    use vlsi_sat_core::Literal;

    use super::lex_geq;
    use super::mirror;
    use super::SymmetryBreaking;
    use crate::encoders::generate_ladder;
    use crate::encoders::test_utils::all_models;
    use crate::encoders::LiteralArena;
    use crate::encoders::encode_packing;
    use crate::encoders::test_utils::solve;
    use crate::encoders::EncodingOptions;
    use crate::encoders::OriginMode;
    use crate::model::Instance;
    use crate::model::Rectangle;

    fn values(literals: &[Literal], model: &crate::engine::Assignment) -> Vec<bool> {
        literals
            .iter()
            .map(|literal| model.literal_value(*literal))
            .collect()
    }

    #[test]
    fn prefix_lengths_are_capped_by_the_vector_length() {
        assert_eq!(SymmetryBreaking::Disabled.prefix_length(9), 0);
        assert_eq!(SymmetryBreaking::Full.prefix_length(9), 9);
        assert_eq!(SymmetryBreaking::SquareRoot.prefix_length(9), 3);
        assert_eq!(SymmetryBreaking::SquareRoot.prefix_length(10), 4);
        assert_eq!(SymmetryBreaking::Prefix(5).prefix_length(3), 3);
        assert_eq!(SymmetryBreaking::SmallestInCorner.prefix_length(9), 0);
    }

    #[test]
    fn parsing_accepts_names_and_lengths() {
        assert_eq!("none".parse::<SymmetryBreaking>(), Ok(SymmetryBreaking::Disabled));
        assert_eq!("full".parse::<SymmetryBreaking>(), Ok(SymmetryBreaking::Full));
        assert_eq!("sqrt".parse::<SymmetryBreaking>(), Ok(SymmetryBreaking::SquareRoot));
        assert_eq!("7".parse::<SymmetryBreaking>(), Ok(SymmetryBreaking::Prefix(7)));
        assert_eq!(
            "corner".parse::<SymmetryBreaking>(),
            Ok(SymmetryBreaking::SmallestInCorner)
        );
        assert!("half".parse::<SymmetryBreaking>().is_err());

        for symmetry_breaking in [
            SymmetryBreaking::Full,
            SymmetryBreaking::Prefix(3),
            SymmetryBreaking::SmallestInCorner,
        ] {
            assert_eq!(
                symmetry_breaking.to_string().parse::<SymmetryBreaking>(),
                Ok(symmetry_breaking)
            );
        }
    }

    #[test]
    fn the_mirror_of_a_ladder_decodes_to_the_reflected_coordinate() {
        let mut arena = LiteralArena::default();
        let (ladder, clauses) = generate_ladder(4, OriginMode::ForceTop, None, &mut arena);
        let mirrored = mirror(&ladder);

        for model in all_models(arena.num_variables(), &clauses) {
            let coordinate = ladder.decode(&model).expect("a coordinate exists");
            let mirrored_coordinate = values(&mirrored, &model)
                .iter()
                .position(|value| *value)
                .unwrap_or(mirrored.len()) as i32;

            assert_eq!(mirrored_coordinate, ladder.bound() - coordinate);
        }
    }

    #[test]
    fn full_lex_admits_exactly_the_vectors_at_least_their_partner() {
        for prefix_length in 0..=3 {
            let mut arena = LiteralArena::default();
            let original = arena.new_literals(3);
            let mirrored = arena.new_literals(3);
            let clauses = lex_geq(&original, &mirrored, prefix_length, &mut arena);

            let mut admitted = all_models(arena.num_variables(), &clauses)
                .iter()
                .map(|model| (values(&original, model), values(&mirrored, model)))
                .collect::<Vec<_>>();
            admitted.sort();
            admitted.dedup();

            let mut expected = vec![];
            for mask in 0..64_u32 {
                let original = (0..3).map(|i| mask & (1 << i) != 0).collect::<Vec<_>>();
                let mirrored = (3..6).map(|i| mask & (1 << i) != 0).collect::<Vec<_>>();
                if original[..prefix_length] >= mirrored[..prefix_length] {
                    expected.push((original, mirrored));
                }
            }
            expected.sort();

            assert_eq!(admitted, expected, "prefix length {prefix_length}");
        }
    }

    #[test]
    fn the_smallest_rectangle_stays_in_the_lower_left_half() {
        let instance = Instance::new(
            5,
            vec![
                Rectangle::new(3, 2),
                Rectangle::new(2, 1),
                Rectangle::new(1, 3),
            ],
        );

        for allow_rotation in [false, true] {
            let options = EncodingOptions {
                symmetry_breaking: SymmetryBreaking::SmallestInCorner,
                allow_rotation,
                ..EncodingOptions::default()
            };
            let encoding = encode_packing(&instance, 4, &options);
            let assignment = solve(encoding.formula()).expect("the instance fits height 4");
            let solution = encoding.decode(&assignment).expect("models decode");

            assert_eq!(solution.verify(&instance), Ok(()));
            // rectangle 2 has a side of 1 as well, but rectangle 1 comes first
            let smallest = solution.placements[1];
            assert!(smallest.x <= (5 - smallest.width) / 2, "{solution:?}");
            assert!(smallest.y <= (4 - smallest.height) / 2, "{solution:?}");
        }
    }

    #[test]
    fn corner_clauses_are_guarded_by_the_orientation() {
        let instance = Instance::new(4, vec![Rectangle::new(1, 3), Rectangle::new(2, 2)]);
        let options = EncodingOptions {
            symmetry_breaking: SymmetryBreaking::SmallestInCorner,
            allow_rotation: true,
            ..EncodingOptions::default()
        };
        let encoding = encode_packing(&instance, 4, &options);

        let clauses = super::smallest_in_corner(encoding.slots());

        // both orientations of rectangle 0, on both axes
        assert_eq!(clauses.len(), 4);
        for clause in &clauses {
            assert_eq!(clause.len(), 2);
            assert!(encoding
                .slots()
                .iter()
                .filter(|slot| slot.rectangle_index == 0)
                .any(|slot| slot.selector == Some(!clause[0])));
        }
    }
}
