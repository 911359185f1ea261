//! Node classification for rendering.

use convscope_core::{IVec2, LayerConfig, NodeMultiset, Selection};

/// How a node should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    /// An ordinary grid node with no contribution.
    Normal,
    /// A node that contributes to the current selection.
    Contribution,
    /// A contributing coordinate outside the layer's `[0, size)` range.
    Padding,
    /// The selected node itself.
    Selected,
}

/// Classifies one coordinate of one layer.
///
/// `Selected` wins over everything; `Padding` applies to out-of-bounds
/// coordinates regardless of count (only contributing coordinates ever show
/// up out of bounds, the grid itself is in-bounds by construction).
#[must_use]
pub fn classify(
    layer: usize,
    coord: IVec2,
    config: &LayerConfig,
    field: &NodeMultiset,
    selection: Option<Selection>,
) -> NodeClass {
    if selection.is_some_and(|s| s.layer == layer && s.coord == coord) {
        return NodeClass::Selected;
    }
    if config.is_padding_coord(coord) {
        return NodeClass::Padding;
    }
    if field.count(coord) > 0 {
        return NodeClass::Contribution;
    }
    NodeClass::Normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use convscope_core::Vec3;

    fn config(size: IVec2) -> LayerConfig {
        LayerConfig {
            name: "l".into(),
            color: Vec3::ONE,
            conv: None,
            size,
        }
    }

    #[test]
    fn test_classification_precedence() {
        let cfg = config(IVec2::splat(4));
        let mut field = NodeMultiset::new();
        field.add(IVec2::new(1, 1));
        field.add(IVec2::new(-1, 0));
        let selection = Some(Selection::new(0, IVec2::new(1, 1)));

        assert_eq!(
            classify(0, IVec2::new(1, 1), &cfg, &field, selection),
            NodeClass::Selected
        );
        // Same coordinate on another layer is not the selection.
        assert_eq!(
            classify(1, IVec2::new(1, 1), &cfg, &field, selection),
            NodeClass::Contribution
        );
        assert_eq!(
            classify(0, IVec2::new(-1, 0), &cfg, &field, selection),
            NodeClass::Padding
        );
        assert_eq!(
            classify(0, IVec2::new(2, 2), &cfg, &field, selection),
            NodeClass::Normal
        );
    }
}
