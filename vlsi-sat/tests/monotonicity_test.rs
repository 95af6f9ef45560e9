#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::solve;
use proptest::prelude::*;
use vlsi_sat::encoders::encode_packing;
use vlsi_sat::encoders::EncodingOptions;
use vlsi_sat::encoders::SymmetryBreaking;
use vlsi_sat::model::Instance;
use vlsi_sat::model::Rectangle;

/// Small instances in which every rectangle fits the plate upright.
fn small_instance() -> impl Strategy<Value = Instance> {
    (2..=4_i32).prop_flat_map(|plate_width| {
        prop::collection::vec((1..=plate_width, 1..=3_i32), 1..=4).prop_map(move |dimensions| {
            Instance::new(
                plate_width,
                dimensions
                    .into_iter()
                    .map(|(width, height)| Rectangle::new(width, height))
                    .collect(),
            )
        })
    })
}

fn symmetry_breaking() -> impl Strategy<Value = SymmetryBreaking> {
    prop_oneof![
        Just(SymmetryBreaking::Disabled),
        Just(SymmetryBreaking::SquareRoot),
        Just(SymmetryBreaking::Full),
        Just(SymmetryBreaking::SmallestInCorner),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// A packing into a strip still fits a strip which is one taller.
    #[test]
    fn feasibility_is_monotone_in_the_height(
        instance in small_instance(),
        symmetry_breaking in symmetry_breaking(),
        allow_rotation in any::<bool>(),
    ) {
        let options = EncodingOptions {
            symmetry_breaking,
            allow_rotation,
            ..EncodingOptions::default()
        };
        let lower_bound = instance.lower_bound(allow_rotation);

        let mut was_feasible = false;
        for height in lower_bound..=lower_bound + 3 {
            let encoding = encode_packing(&instance, height, &options);
            let is_feasible = solve(&encoding).is_some();

            prop_assert!(
                !was_feasible || is_feasible,
                "height {} is feasible but {} is not",
                height - 1,
                height
            );
            was_feasible = is_feasible;
        }
    }

    /// The optimum never lies below the lower bound of the instance.
    #[test]
    fn heights_below_the_lower_bound_are_infeasible(instance in small_instance()) {
        let options = EncodingOptions::default();
        let lower_bound = instance.lower_bound(false);

        let encoding = encode_packing(&instance, lower_bound - 1, &options);
        prop_assert!(solve(&encoding).is_none());
    }
}
