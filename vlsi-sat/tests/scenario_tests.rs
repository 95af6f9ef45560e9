#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::instance;
use helpers::optimise_with;
use vlsi_sat::encoders::EncodingOptions;
use vlsi_sat::encoders::OriginMode;
use vlsi_sat::encoders::SymmetryBreaking;
use vlsi_sat::model::Instance;
use vlsi_sat::model::PackingSolution;
use vlsi_sat::optimisation::OptimisationResult;
use vlsi_sat::optimisation::OptimiserOptions;
use vlsi_sat::optimisation::SearchStrategy;

fn optimum(instance: &Instance, encoding: EncodingOptions) -> Vec<PackingSolution> {
    [SearchStrategy::Linear, SearchStrategy::Binary]
        .into_iter()
        .map(|strategy| {
            let options = OptimiserOptions {
                strategy,
                encoding,
                time_limit: None,
            };
            match optimise_with(instance, &options).result {
                OptimisationResult::Optimal(solution) => {
                    assert_eq!(solution.verify(instance), Ok(()), "{strategy}");
                    solution
                }
                result => panic!("{strategy}: expected an optimum, got {result:?}"),
            }
        })
        .collect()
}

#[test]
fn four_rectangles_tile_a_square() {
    let instance = instance(8, &[(3, 3), (5, 3), (3, 5), (5, 5)]);

    for solution in optimum(&instance, EncodingOptions::default()) {
        assert_eq!(solution.height, 8);
        assert_eq!(solution.used_height(), 8);
    }
}

#[test]
fn a_rectangle_as_wide_as_the_plate_fills_one_row() {
    let instance = instance(10, &[(10, 1)]);

    for solution in optimum(&instance, EncodingOptions::default()) {
        assert_eq!(solution.height, 1);
        assert_eq!(
            (solution.placements[0].x, solution.placements[0].y),
            (0, 0)
        );
    }
}

#[test]
fn squares_which_do_not_fit_side_by_side_are_stacked() {
    let instance = instance(4, &[(3, 3), (3, 3)]);

    for solution in optimum(&instance, EncodingOptions::default()) {
        assert_eq!(solution.height, 6);
    }
}

#[test]
fn rotation_is_not_forced_when_it_does_not_help() {
    let instance = instance(3, &[(1, 4)]);
    let encoding = EncodingOptions {
        allow_rotation: true,
        ..EncodingOptions::default()
    };

    for solution in optimum(&instance, encoding) {
        assert_eq!(solution.height, 4);
        assert!(!solution.placements[0].is_rotated);
    }
}

#[test]
fn rotation_lowers_the_strip_when_it_helps() {
    // upright the bars need height 6, turned they stack to 2
    let instance = instance(6, &[(1, 6), (6, 1)]);

    let upright = optimum(&instance, EncodingOptions::default());
    assert!(upright.iter().all(|solution| solution.height == 7));

    let encoding = EncodingOptions {
        allow_rotation: true,
        ..EncodingOptions::default()
    };
    for solution in optimum(&instance, encoding) {
        assert_eq!(solution.height, 2);
        assert!(solution.placements[0].is_rotated);
    }
}

#[test]
fn every_encoding_option_agrees_on_the_optimum() {
    let instance = instance(7, &[(4, 3), (3, 4), (2, 3), (2, 3), (3, 2)]);

    for origin_mode in [OriginMode::ForceTop, OriginMode::AtLeastOne] {
        for symmetry_breaking in [
            SymmetryBreaking::Disabled,
            SymmetryBreaking::Prefix(1),
            SymmetryBreaking::SquareRoot,
            SymmetryBreaking::Full,
            SymmetryBreaking::SmallestInCorner,
        ] {
            let encoding = EncodingOptions {
                origin_mode,
                symmetry_breaking,
                allow_rotation: false,
            };

            for solution in optimum(&instance, encoding) {
                // the area bound is tight: the blocks tile a 7x6 rectangle
                assert_eq!(solution.height, 6, "{encoding:?}");
            }
        }
    }
}
