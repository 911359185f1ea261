//! Node selection and the automatic sweep driver.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A selected node: a layer index plus a coordinate within it.
///
/// The coordinate is not validated against the layer's bounds; out-of-range
/// seeds are accepted by the resolver (the editing collaborator clamps or
/// clears stale selections when it cares to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Logical layer index into the resolved chain.
    pub layer: usize,

    /// Coordinate within the layer; may lie in the padding region.
    pub coord: IVec2,
}

impl Selection {
    /// Creates a selection.
    #[must_use]
    pub fn new(layer: usize, coord: IVec2) -> Self {
        Self { layer, coord }
    }
}

/// Advances a coordinate one step in row-major sweep order.
///
/// X increments first; at the axis bound it resets to 0 and Y increments;
/// when Y reaches its bound it wraps to 0. A degenerate size (either axis
/// <= 0) leaves the coordinate untouched.
#[must_use]
pub fn next_sweep_coord(coord: IVec2, size: IVec2) -> IVec2 {
    if size.x <= 0 || size.y <= 0 {
        return coord;
    }
    let mut next = IVec2::new(coord.x + 1, coord.y);
    if next.x >= size.x {
        next.x = 0;
        next.y += 1;
        if next.y >= size.y {
            next.y = 0;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_row_major() {
        let size = IVec2::new(3, 2);
        let mut c = IVec2::ZERO;
        let visited: Vec<IVec2> = (0..6)
            .map(|_| {
                let here = c;
                c = next_sweep_coord(c, size);
                here
            })
            .collect();
        assert_eq!(
            visited,
            vec![
                IVec2::new(0, 0),
                IVec2::new(1, 0),
                IVec2::new(2, 0),
                IVec2::new(0, 1),
                IVec2::new(1, 1),
                IVec2::new(2, 1),
            ]
        );
        // Full cycle wraps back to the origin.
        assert_eq!(c, IVec2::ZERO);
    }

    #[test]
    fn test_sweep_from_stale_coord_rejoins_grid() {
        // A coordinate past the X bound resets into the next row.
        assert_eq!(
            next_sweep_coord(IVec2::new(7, 0), IVec2::new(3, 3)),
            IVec2::new(0, 1)
        );
    }

    #[test]
    fn test_sweep_noop_on_degenerate_size() {
        let c = IVec2::new(1, 1);
        assert_eq!(next_sweep_coord(c, IVec2::new(0, 4)), c);
        assert_eq!(next_sweep_coord(c, IVec2::new(4, -1)), c);
    }
}
