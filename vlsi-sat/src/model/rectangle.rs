use std::fmt::Display;

/// An axis-aligned rectangle (a circuit) given by its dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(width: i32, height: i32) -> Rectangle {
        Rectangle { width, height }
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// The rectangle turned by 90 degrees.
    pub fn rotated(&self) -> Rectangle {
        Rectangle {
            width: self.height,
            height: self.width,
        }
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// The dimension along the horizontal axis, or along the vertical one.
    pub(crate) fn size_on(&self, is_horizontal: bool) -> i32 {
        if is_horizontal {
            self.width
        } else {
            self.height
        }
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
