use itertools::Itertools;
use thiserror::Error;

use super::Instance;
use super::Rectangle;

/// Where a rectangle ended up. The dimensions are those of the placed orientation, so they are
/// swapped with respect to the input when `is_rotated` holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub is_rotated: bool,
}

impl Placement {
    fn overlaps(&self, other: &Placement) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// A packing of every rectangle of an instance into a strip of the given height, in the order
/// of the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackingSolution {
    pub plate_width: i32,
    pub height: i32,
    pub placements: Vec<Placement>,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionError {
    #[error("expected {expected} placements, got {actual}")]
    WrongNumberOfPlacements { expected: usize, actual: usize },
    #[error("the plate width {actual} differs from the instance plate width {expected}")]
    PlateWidthMismatch { expected: i32, actual: i32 },
    #[error("placement {index} does not have the dimensions of its rectangle")]
    DimensionMismatch { index: usize },
    #[error("rectangle {index} lies outside the strip")]
    OutOfBounds { index: usize },
    #[error("rectangles {first} and {second} overlap")]
    Overlap { first: usize, second: usize },
}

impl PackingSolution {
    /// The height actually covered by the rectangles, which may be below the strip height.
    pub fn used_height(&self) -> i32 {
        self.placements
            .iter()
            .map(|placement| placement.y + placement.height)
            .max()
            .unwrap_or(0)
    }

    /// Checks that this is a packing of `instance`: every rectangle is placed once with its own
    /// dimensions (turned if marked rotated), lies inside the strip, and no two rectangles
    /// share any area.
    pub fn verify(&self, instance: &Instance) -> Result<(), SolutionError> {
        if self.placements.len() != instance.num_rectangles() {
            return Err(SolutionError::WrongNumberOfPlacements {
                expected: instance.num_rectangles(),
                actual: self.placements.len(),
            });
        }
        if self.plate_width != instance.plate_width() {
            return Err(SolutionError::PlateWidthMismatch {
                expected: instance.plate_width(),
                actual: self.plate_width,
            });
        }

        for (index, (placement, rectangle)) in self
            .placements
            .iter()
            .zip(instance.rectangles())
            .enumerate()
        {
            let expected = if placement.is_rotated {
                rectangle.rotated()
            } else {
                *rectangle
            };
            if Rectangle::new(placement.width, placement.height) != expected {
                return Err(SolutionError::DimensionMismatch { index });
            }

            if placement.x < 0
                || placement.y < 0
                || placement.x + placement.width > self.plate_width
                || placement.y + placement.height > self.height
            {
                return Err(SolutionError::OutOfBounds { index });
            }
        }

        if let Some((first, second)) = self
            .placements
            .iter()
            .enumerate()
            .tuple_combinations()
            .find(|((_, first), (_, second))| first.overlaps(second))
            .map(|((first, _), (second, _))| (first, second))
        {
            return Err(SolutionError::Overlap { first, second });
        }

        Ok(())
    }
}
