//! # vlsi-sat
//! Packs rectangular circuit blocks into a strip of fixed width and minimal height, the
//! two-dimensional strip packing problem behind VLSI floorplanning.
//!
//! The problem "does the instance fit a strip of height `h`?" is encoded as a boolean formula:
//! every coordinate is order encoded (see [`encoders::PositionLadder`]), every pair of
//! rectangles is kept apart by one of four relative positions (see
//! [`encoders::generate_pair_overlap`]), and optional symmetry breaking removes mirrored
//! packings. The formula is decided by a [`engine::SatEngine`], by default the bundled
//! conflict-driven clause-learning solver of [`solver`]. The height itself is minimised by
//! [`optimisation::optimise`], which probes heights linearly or by bisection.
//!
//! # Using vlsi-sat
//! An instance is a plate width and a list of rectangles:
//! ```rust
//! # use vlsi_sat::model::Instance;
//! # use vlsi_sat::model::Rectangle;
//! let instance = Instance::new(
//!     8,
//!     vec![
//!         Rectangle::new(3, 3),
//!         Rectangle::new(5, 3),
//!         Rectangle::new(3, 5),
//!         Rectangle::new(5, 5),
//!     ],
//! );
//! ```
//!
//! The optimiser creates a fresh engine for every height it probes:
//! ```rust
//! # use vlsi_sat::solver::SatOptions;
//! # use vlsi_sat::engine::BundledEngine;
//! # use vlsi_sat::model::Instance;
//! # use vlsi_sat::model::Rectangle;
//! # use vlsi_sat::optimisation::optimise;
//! # use vlsi_sat::optimisation::OptimisationResult;
//! # use vlsi_sat::optimisation::OptimiserOptions;
//! # let instance = Instance::new(
//! #     8,
//! #     vec![
//! #         Rectangle::new(3, 3),
//! #         Rectangle::new(5, 3),
//! #         Rectangle::new(3, 5),
//! #         Rectangle::new(5, 5),
//! #     ],
//! # );
//! let report = optimise(&instance, &OptimiserOptions::default(), || {
//!     BundledEngine::new(SatOptions::default())
//! })
//! .expect("the instance is valid");
//!
//! let OptimisationResult::Optimal(solution) = report.result else {
//!     panic!("the search is not limited in time");
//! };
//! // the four rectangles tile an 8x8 square
//! assert_eq!(solution.height, 8);
//! assert!(solution.verify(&instance).is_ok());
//! ```
//!
//! Instances and packings can be read and written in a plain text format, see [`io`].
pub mod encoders;
pub mod engine;
pub mod heuristics;
pub mod io;
pub mod model;
pub mod optimisation;

pub use vlsi_sat_core as solver;
