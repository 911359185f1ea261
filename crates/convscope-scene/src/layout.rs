//! Spatial layout of layers and nodes.

use convscope_core::{IVec2, LayerConfig, Vec3};

/// Spacing parameters for the 3D layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Distance between adjacent nodes within a layer.
    pub node_spacing: f32,

    /// Distance between successive layer planes along Z.
    pub layer_spacing: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            node_spacing: 1.0,
            layer_spacing: 4.0,
        }
    }
}

/// Returns the logical indices of displayable layers in display order.
///
/// Degenerate layers (size <= 0 on either axis) have no nodes to place and
/// are skipped. `reverse` flips the display order only; the indices returned
/// are always logical chain indices, so geometry lookups stay untouched.
#[must_use]
pub fn display_order(configs: &[LayerConfig], reverse: bool) -> Vec<usize> {
    let mut order: Vec<usize> = configs
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_degenerate())
        .map(|(i, _)| i)
        .collect();
    if reverse {
        order.reverse();
    }
    order
}

/// World position of one node.
///
/// Layers stack along Z at `slot * layer_spacing` (slot is the position in
/// display order). Grids center on the XY origin, except that in temporal
/// mode the Y axis is time and layers align on their trailing edge instead:
/// the last row of every layer sits at y = 0.
#[must_use]
pub fn node_position(
    slot: usize,
    coord: IVec2,
    size: IVec2,
    temporal: bool,
    options: &LayoutOptions,
) -> Vec3 {
    let x = (coord.x as f32 - (size.x - 1) as f32 / 2.0) * options.node_spacing;
    let y = if temporal {
        (coord.y - (size.y - 1)) as f32 * options.node_spacing
    } else {
        (coord.y as f32 - (size.y - 1) as f32 / 2.0) * options.node_spacing
    };
    let z = slot as f32 * options.layer_spacing;
    Vec3::new(x, y, z)
}
