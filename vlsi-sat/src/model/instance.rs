use log::debug;

use super::InstanceError;
use super::Rectangle;

/// A strip of fixed width into which the rectangles must be packed.
///
/// The instance does not hold a height: every candidate height is encoded afresh, see
/// [`crate::encoders::encode_packing`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    plate_width: i32,
    rectangles: Vec<Rectangle>,
}

impl Instance {
    /// Creates an instance without checking it; see [`Instance::validate`].
    pub fn new(plate_width: i32, rectangles: Vec<Rectangle>) -> Instance {
        Instance {
            plate_width,
            rectangles,
        }
    }

    pub fn plate_width(&self) -> i32 {
        self.plate_width
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn num_rectangles(&self) -> usize {
        self.rectangles.len()
    }

    pub fn total_area(&self) -> i64 {
        self.rectangles.iter().map(Rectangle::area).sum()
    }

    /// Checks that the instance can be encoded: there is at least one rectangle, every
    /// dimension is positive, every rectangle fits the plate width (in some orientation if
    /// rotation is allowed), and stacking all rectangles gives a height which fits an `i32`.
    pub fn validate(&self, allow_rotation: bool) -> Result<(), InstanceError> {
        if self.rectangles.is_empty() {
            return Err(InstanceError::NoRectangles);
        }
        if self.plate_width <= 0 {
            return Err(InstanceError::NonPositivePlateWidth(self.plate_width));
        }

        for (index, rectangle) in self.rectangles.iter().enumerate() {
            if rectangle.width <= 0 || rectangle.height <= 0 {
                return Err(InstanceError::NonPositiveDimension { index });
            }

            if rectangle.width > self.plate_width {
                if !allow_rotation {
                    return Err(InstanceError::RectangleTooWide {
                        index,
                        width: rectangle.width,
                        plate_width: self.plate_width,
                    });
                }
                if rectangle.height > self.plate_width {
                    return Err(InstanceError::NoFeasibleOrientation { index });
                }
            }
        }

        let stacked_height = self.stacked_height(allow_rotation);
        if stacked_height > i64::from(i32::MAX) {
            return Err(InstanceError::TooTall { stacked_height });
        }

        Ok(())
    }

    /// The height of all rectangles stacked on top of each other, each one upright unless only
    /// its turned orientation fits the plate. No optimal packing is taller.
    pub fn stacked_height(&self, allow_rotation: bool) -> i64 {
        self.rectangles
            .iter()
            .map(|rectangle| {
                if allow_rotation && rectangle.width > self.plate_width {
                    i64::from(rectangle.width)
                } else {
                    i64::from(rectangle.height)
                }
            })
            .sum()
    }

    /// The smallest height a rectangle can take while still fitting the plate width.
    pub fn min_feasible_height(&self, index: usize, allow_rotation: bool) -> i32 {
        let rectangle = self.rectangles[index];
        if !allow_rotation {
            return rectangle.height;
        }

        if rectangle.width.max(rectangle.height) <= self.plate_width {
            rectangle.width.min(rectangle.height)
        } else if rectangle.width <= self.plate_width {
            rectangle.height
        } else {
            rectangle.width
        }
    }

    /// No packing can be lower than the total area spread over the plate width, nor lower than
    /// the tallest rectangle.
    ///
    /// Should only be called on a validated instance.
    pub fn lower_bound(&self, allow_rotation: bool) -> i32 {
        let plate_width = i64::from(self.plate_width);
        let area_bound =
            i32::try_from((self.total_area() + plate_width - 1) / plate_width).unwrap_or(i32::MAX);
        let tallest = (0..self.rectangles.len())
            .map(|index| self.min_feasible_height(index, allow_rotation))
            .max()
            .unwrap_or(0);

        debug!("Area bound {area_bound}, tallest rectangle {tallest}");
        area_bound.max(tallest)
    }
}

#[cfg(test)]
mod tests {
    use super::Instance;
    use crate::model::InstanceError;
    use crate::model::Rectangle;

    fn instance(plate_width: i32, dimensions: &[(i32, i32)]) -> Instance {
        Instance::new(
            plate_width,
            dimensions
                .iter()
                .map(|&(width, height)| Rectangle::new(width, height))
                .collect(),
        )
    }

    #[test]
    fn lower_bound_takes_the_area_bound_when_it_dominates() {
        let instance = instance(8, &[(3, 3), (5, 3), (3, 5), (5, 5)]);
        assert_eq!(instance.lower_bound(false), 8);
    }

    #[test]
    fn lower_bound_takes_the_tallest_rectangle_when_it_dominates() {
        let instance = instance(10, &[(1, 7), (2, 2)]);
        assert_eq!(instance.lower_bound(false), 7);
    }

    #[test]
    fn rotation_lowers_the_tallest_rectangle() {
        let instance = instance(10, &[(1, 7), (2, 2)]);
        assert_eq!(instance.lower_bound(true), 2);
    }

    #[test]
    fn rotation_keeps_the_only_fitting_orientation() {
        let upright = instance(3, &[(1, 4)]);
        assert_eq!(upright.lower_bound(true), 4);

        let lying = instance(3, &[(4, 1)]);
        assert_eq!(lying.lower_bound(true), 4);
    }

    #[test]
    fn empty_instances_are_rejected() {
        assert_eq!(
            instance(4, &[]).validate(false),
            Err(InstanceError::NoRectangles)
        );
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert_eq!(
            instance(0, &[(1, 1)]).validate(false),
            Err(InstanceError::NonPositivePlateWidth(0))
        );
        assert_eq!(
            instance(4, &[(1, 1), (2, 0)]).validate(false),
            Err(InstanceError::NonPositiveDimension { index: 1 })
        );
    }

    #[test]
    fn too_wide_rectangles_are_rejected_unless_they_can_turn() {
        let instance = instance(3, &[(4, 1)]);
        assert_eq!(
            instance.validate(false),
            Err(InstanceError::RectangleTooWide {
                index: 0,
                width: 4,
                plate_width: 3
            })
        );
        assert_eq!(instance.validate(true), Ok(()));
    }

    #[test]
    fn rectangles_too_large_in_both_orientations_are_rejected() {
        assert_eq!(
            instance(3, &[(4, 5)]).validate(true),
            Err(InstanceError::NoFeasibleOrientation { index: 0 })
        );
    }

    #[test]
    fn instances_taller_than_the_largest_height_are_rejected() {
        let tall = instance(2, &[(1, i32::MAX), (1, 1)]);
        assert_eq!(
            tall.validate(false),
            Err(InstanceError::TooTall {
                stacked_height: i64::from(i32::MAX) + 1
            })
        );

        let just_fitting = instance(2, &[(1, i32::MAX - 1), (1, 1)]);
        assert_eq!(just_fitting.validate(false), Ok(()));
        assert_eq!(just_fitting.lower_bound(false), i32::MAX - 1);
    }

    #[test]
    fn turned_rectangles_are_stacked_by_their_width() {
        let instance = instance(3, &[(4, 1), (1, 2)]);
        assert_eq!(instance.stacked_height(false), 3);
        assert_eq!(instance.stacked_height(true), 6);
    }
}
