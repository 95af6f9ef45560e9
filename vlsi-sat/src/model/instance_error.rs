use thiserror::Error;

/// The reasons for rejecting an instance before anything is encoded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceError {
    #[error("the instance contains no rectangles")]
    NoRectangles,
    #[error("the plate width must be positive, got {0}")]
    NonPositivePlateWidth(i32),
    #[error("rectangle {index} has a non-positive dimension")]
    NonPositiveDimension { index: usize },
    #[error("rectangle {index} has width {width}, which exceeds the plate width {plate_width}")]
    RectangleTooWide {
        index: usize,
        width: i32,
        plate_width: i32,
    },
    #[error("rectangle {index} does not fit the plate in either orientation")]
    NoFeasibleOrientation { index: usize },
    #[error("the rectangles stack up to height {stacked_height}, above the largest supported height")]
    TooTall { stacked_height: i64 },
}
