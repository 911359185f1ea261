//! Scene assembly: turning a resolved snapshot into renderable node data.

use convscope_core::{IVec2, LayerConfig, NodeMultiset, Selection, Vec3};

use crate::classify::{classify, NodeClass};
use crate::color::{highlight_intensity, ColorMap};
use crate::layout::{display_order, node_position, LayoutOptions};

/// One renderable node.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Logical layer index.
    pub layer: usize,

    /// Coordinate within the layer (padding nodes lie out of bounds).
    pub coord: IVec2,

    /// World position.
    pub position: Vec3,

    /// Render classification.
    pub class: NodeClass,

    /// Final node color.
    pub color: Vec3,

    /// Highlight intensity in `[0, 1]` (0 for non-contributing nodes).
    pub intensity: f32,
}

/// A fully assembled scene, ready for a renderer to consume verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerScene {
    /// All nodes, grouped by display order.
    pub nodes: Vec<SceneNode>,

    /// Logical layer indices in display order.
    pub order: Vec<usize>,
}

/// Builds the scene from a resolved snapshot.
///
/// Each displayable layer contributes its full node grid plus any
/// out-of-bounds padding coordinates present in its contribution multiset.
/// Contributing nodes take their color from the color map scaled by
/// highlight intensity; everything else keeps the layer's base color.
///
/// `reverse` and the layout options affect placement only; classification
/// and intensity are functions of the logical snapshot alone.
#[must_use]
pub fn build_scene(
    configs: &[LayerConfig],
    fields: &[NodeMultiset],
    selection: Option<Selection>,
    temporal: bool,
    reverse: bool,
    layout: &LayoutOptions,
    color_map: &ColorMap,
) -> LayerScene {
    let order = display_order(configs, reverse);
    let mut nodes = Vec::new();
    let empty = NodeMultiset::new();

    for (slot, &layer) in order.iter().enumerate() {
        let config = &configs[layer];
        let field = fields.get(layer).unwrap_or(&empty);
        let max_count = field.max_count();

        let mut push = |coord: IVec2| {
            let class = classify(layer, coord, config, field, selection);
            let intensity = highlight_intensity(field.count(coord), max_count);
            let color = match class {
                NodeClass::Normal => config.color,
                _ => color_map.sample(intensity),
            };
            nodes.push(SceneNode {
                layer,
                coord,
                position: node_position(slot, coord, config.size, temporal, layout),
                class,
                color,
                intensity,
            });
        };

        for y in 0..config.size.y {
            for x in 0..config.size.x {
                push(IVec2::new(x, y));
            }
        }
        // Padding nodes exist only in the multiset, outside the grid.
        let mut padding: Vec<IVec2> = field
            .iter()
            .map(|(coord, _)| coord)
            .filter(|&coord| config.is_padding_coord(coord))
            .collect();
        // Multiset order is arbitrary; sort for a stable scene.
        padding.sort_by_key(|c| (c.y, c.x));
        for coord in padding {
            push(coord);
        }
    }

    log::debug!("built scene with {} nodes", nodes.len());
    LayerScene { nodes, order }
}
