//! A quick packing used to bound the optimal height from above.
//!
//! Free space is kept as a binary tree of rectangles. Placing a rectangle in a free leaf splits
//! the leaf into the space to the right of it (as tall as the rectangle) and the space above it
//! (as wide as the leaf). A rectangle goes into the first leaf, in depth-first order, which is
//! large enough.
use log::debug;

use crate::model::Instance;
use crate::model::PackingSolution;
use crate::model::Placement;
use crate::model::Rectangle;

#[derive(Clone, Debug)]
struct Node {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    is_occupied: bool,
    children: Vec<usize>,
}

impl Node {
    fn new(x: i32, y: i32, width: i32, height: i32) -> Node {
        Node {
            x,
            y,
            width,
            height,
            is_occupied: false,
            children: vec![],
        }
    }

    fn accepts(&self, rectangle: Rectangle) -> bool {
        !self.is_occupied && rectangle.width <= self.width && rectangle.height <= self.height
    }
}

#[derive(Debug)]
struct FreeSpaceTree {
    nodes: Vec<Node>,
}

impl FreeSpaceTree {
    const ROOT: usize = 0;

    fn new(width: i32, height: i32) -> FreeSpaceTree {
        FreeSpaceTree {
            nodes: vec![Node::new(0, 0, width, height)],
        }
    }

    /// Places `rectangle` in the first leaf which accepts it and returns its lower-left corner.
    fn place(&mut self, rectangle: Rectangle) -> Option<(i32, i32)> {
        let mut stack = vec![Self::ROOT];

        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if !node.children.is_empty() {
                stack.extend(node.children.iter().rev());
            } else if node.accepts(rectangle) {
                return Some(self.occupy(index, rectangle));
            }
        }

        None
    }

    fn occupy(&mut self, index: usize, rectangle: Rectangle) -> (i32, i32) {
        let node = &mut self.nodes[index];
        node.is_occupied = true;
        let (x, y, width, height) = (node.x, node.y, node.width, node.height);

        let right = Node::new(x + rectangle.width, y, width - rectangle.width, rectangle.height);
        let up = Node::new(x, y + rectangle.height, width, height - rectangle.height);

        for child in [right, up] {
            if child.width > 0 && child.height > 0 {
                let child_index = self.nodes.len();
                self.nodes.push(child);
                self.nodes[index].children.push(child_index);
            }
        }

        (x, y)
    }
}

/// The orientation in which first fit places a rectangle: upright unless only the turned
/// orientation fits the plate.
fn orientation(rectangle: Rectangle, plate_width: i32, allow_rotation: bool) -> (Rectangle, bool) {
    if allow_rotation && rectangle.width > plate_width && rectangle.height <= plate_width {
        (rectangle.rotated(), true)
    } else {
        (rectangle, false)
    }
}

fn pack_in_order(
    instance: &Instance,
    order: impl Iterator<Item = usize> + Clone,
    allow_rotation: bool,
) -> Option<PackingSolution> {
    let plate_width = instance.plate_width();
    let oriented = instance
        .rectangles()
        .iter()
        .map(|rectangle| orientation(*rectangle, plate_width, allow_rotation))
        .collect::<Vec<_>>();

    let total_height = i32::try_from(
        oriented
            .iter()
            .map(|(rectangle, _)| i64::from(rectangle.height))
            .sum::<i64>(),
    )
    .ok()?;
    let mut tree = FreeSpaceTree::new(plate_width, total_height);

    let mut placements = vec![None; instance.num_rectangles()];
    for index in order {
        let (rectangle, is_rotated) = oriented[index];
        let (x, y) = tree.place(rectangle)?;
        placements[index] = Some(Placement {
            x,
            y,
            width: rectangle.width,
            height: rectangle.height,
            is_rotated,
        });
    }

    let placements = placements.into_iter().collect::<Option<Vec<_>>>()?;
    let mut solution = PackingSolution {
        plate_width,
        height: 0,
        placements,
    };
    solution.height = solution.used_height();
    Some(solution)
}

/// Packs `instance` with first fit, in the input order and in the reversed order, and returns
/// the lower of the two packings.
///
/// Returns `None` if some rectangle does not fit the plate width, or if the rectangles stacked
/// on top of each other are taller than an `i32`.
pub fn first_fit(instance: &Instance, allow_rotation: bool) -> Option<PackingSolution> {
    let num_rectangles = instance.num_rectangles();

    let forward = pack_in_order(instance, 0..num_rectangles, allow_rotation)?;
    let backward = pack_in_order(instance, (0..num_rectangles).rev(), allow_rotation)?;
    debug!(
        "First fit heights: {} in input order, {} in reversed order",
        forward.height, backward.height
    );

    if backward.height < forward.height {
        Some(backward)
    } else {
        Some(forward)
    }
}
