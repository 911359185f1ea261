//! Receptive-field resolution by backward propagation.

use glam::IVec2;

use crate::layer::LayerConfig;
use crate::multiset::NodeMultiset;
use crate::selection::Selection;

/// Computes the per-layer contribution multisets for a selection.
///
/// Returns one [`NodeMultiset`] per layer, indexed like `configs`. The
/// multiset at the selected layer holds exactly the selected coordinate with
/// count 1; each earlier layer holds every coordinate its successor's
/// entries sample through the convolution window, with overlapping windows
/// accumulating counts. Coordinates outside a layer's `[0, size)` bounds are
/// kept - they are the padding region and render differently, they are not
/// noise to discard.
///
/// With no selection, or a selection whose layer index is out of range
/// (possible transiently after a removal, until the editing collaborator
/// clears it), every multiset is empty. The resolver itself never raises and
/// never mutates the selection.
///
/// The walk over layer indices is strictly decreasing, so a plain loop from
/// the seed layer down to 1 suffices. The computation is pure: identical
/// inputs give identical multisets, counts included.
#[must_use]
pub fn resolve_field(
    configs: &[LayerConfig],
    selection: Option<Selection>,
    temporal: bool,
) -> Vec<NodeMultiset> {
    let mut fields = vec![NodeMultiset::new(); configs.len()];
    let Some(selection) = selection else {
        return fields;
    };
    if selection.layer >= configs.len() {
        log::debug!(
            "selection layer {} out of range ({} layers), resolving empty",
            selection.layer,
            configs.len()
        );
        return fields;
    }

    fields[selection.layer].add(selection.coord);

    for layer in (1..=selection.layer).rev() {
        // A parameterless layer past index 0 cannot be produced by the
        // editing rules; if one appears, propagation stops at it.
        let Some(params) = configs[layer].conv else {
            continue;
        };
        let (lower, upper) = fields.split_at_mut(layer);
        let target = &mut lower[layer - 1];
        for (out, count) in upper[0].iter() {
            for ky in 0..params.kernel_size.y {
                for kx in 0..params.kernel_size.x {
                    let x = out.x * params.stride.x + kx * params.dilation.x - params.padding.x;
                    let y = if temporal {
                        out.y * params.stride.y + ky * params.dilation.y
                    } else {
                        out.y * params.stride.y + ky * params.dilation.y - params.padding.y
                    };
                    target.add_count(IVec2::new(x, y), count);
                }
            }
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerTemplate;
    use crate::params::ConvParams;
    use crate::sizing::resolve_chain;
    use glam::Vec3;

    fn resolved(params: ConvParams, input: IVec2, temporal: bool) -> Vec<LayerConfig> {
        let templates = vec![
            LayerTemplate::input("input", Vec3::ONE),
            LayerTemplate::conv("conv1", Vec3::ONE, params),
        ];
        resolve_chain(&templates, input, temporal).unwrap()
    }

    #[test]
    fn test_no_selection_yields_empty_fields() {
        let configs = resolved(ConvParams::uniform(3, 1, 1, 0), IVec2::splat(10), false);
        let fields = resolve_field(&configs, None, false);
        assert_eq!(fields.len(), 2);
        assert!(fields.iter().all(NodeMultiset::is_empty));
    }

    #[test]
    fn test_selected_layer_holds_exactly_the_seed() {
        let configs = resolved(ConvParams::uniform(3, 1, 1, 0), IVec2::splat(10), false);
        let selection = Selection::new(1, IVec2::new(2, 3));
        let fields = resolve_field(&configs, Some(selection), false);
        assert_eq!(fields[1].len(), 1);
        assert_eq!(fields[1].count(IVec2::new(2, 3)), 1);
    }

    #[test]
    fn test_basic_window_receptive_field() {
        // Scenario: 3x3 kernel, stride 1, no padding. Output (0,0) sees the
        // nine input coordinates {0,1,2} x {0,1,2}, each exactly once.
        let configs = resolved(ConvParams::uniform(3, 1, 1, 0), IVec2::splat(10), false);
        let fields = resolve_field(&configs, Some(Selection::new(1, IVec2::ZERO)), false);

        assert_eq!(fields[0].len(), 9);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(fields[0].count(IVec2::new(x, y)), 1);
            }
        }
        assert_eq!(fields[0].max_count(), 1);
    }

    #[test]
    fn test_overlapping_windows_accumulate() {
        // Two adjacent 3x3 windows share two columns; seed both outputs and
        // the shared inputs must carry count 2.
        let configs = resolved(ConvParams::uniform(3, 1, 1, 0), IVec2::splat(10), false);
        let left = resolve_field(&configs, Some(Selection::new(1, IVec2::new(0, 0))), false);
        let right = resolve_field(&configs, Some(Selection::new(1, IVec2::new(1, 0))), false);

        let mut merged = left[0].clone();
        for (coord, count) in right[0].iter() {
            merged.add_count(coord, count);
        }

        // Columns 1 and 2 are covered by both windows.
        for y in 0..3 {
            assert_eq!(merged.count(IVec2::new(0, y)), 1);
            assert_eq!(merged.count(IVec2::new(1, y)), 2);
            assert_eq!(merged.count(IVec2::new(2, y)), 2);
            assert_eq!(merged.count(IVec2::new(3, y)), 1);
        }
        assert_eq!(merged.max_count(), 2);
    }

    #[test]
    fn test_multiplicity_multiplies_through_two_layers() {
        // Two stacked stride-1 3x1 layers: the middle layer overlaps, and
        // those counts must multiply into the input layer.
        let params = ConvParams {
            kernel_size: IVec2::new(3, 1),
            stride: IVec2::ONE,
            dilation: IVec2::ONE,
            padding: IVec2::ZERO,
        };
        let templates = vec![
            LayerTemplate::input("input", Vec3::ONE),
            LayerTemplate::conv("conv1", Vec3::ONE, params),
            LayerTemplate::conv("conv2", Vec3::ONE, params),
        ];
        let configs = resolve_chain(&templates, IVec2::new(10, 1), false).unwrap();
        let fields = resolve_field(&configs, Some(Selection::new(2, IVec2::ZERO)), false);

        // conv1 receives {0,1,2} once each; the input sees the triangle
        // 1,2,3,2,1 over x=0..=4.
        assert_eq!(fields[1].len(), 3);
        let expected = [1, 2, 3, 2, 1];
        for (x, want) in expected.iter().enumerate() {
            assert_eq!(fields[0].count(IVec2::new(x as i32, 0)), *want);
        }
        assert_eq!(fields[0].max_count(), 3);
    }

    #[test]
    fn test_padding_coordinates_are_kept() {
        // padding=1 shifts the window of output (0,0) to start at -1; the
        // out-of-bounds coordinates stay in the multiset and classify as
        // padding nodes.
        let configs = resolved(ConvParams::uniform(3, 1, 1, 1), IVec2::splat(10), false);
        let fields = resolve_field(&configs, Some(Selection::new(1, IVec2::ZERO)), false);

        assert_eq!(fields[0].count(IVec2::new(-1, -1)), 1);
        assert_eq!(fields[0].count(IVec2::new(-1, 0)), 1);
        assert_eq!(fields[0].len(), 9);
        assert!(configs[0].is_padding_coord(IVec2::new(-1, -1)));
        assert!(!configs[0].is_padding_coord(IVec2::ZERO));
    }

    #[test]
    fn test_temporal_mode_omits_y_padding_shift() {
        let params = ConvParams::uniform(3, 1, 1, 1);
        let configs = resolved(params, IVec2::splat(10), true);
        let fields = resolve_field(&configs, Some(Selection::new(1, IVec2::ZERO)), true);

        // X still subtracts padding; Y does not.
        assert_eq!(fields[0].count(IVec2::new(-1, 0)), 1);
        assert_eq!(fields[0].count(IVec2::new(-1, -1)), 0);
        assert_eq!(fields[0].count(IVec2::new(1, 2)), 1);
    }

    #[test]
    fn test_dilation_spreads_the_window() {
        let params = ConvParams {
            kernel_size: IVec2::new(3, 1),
            stride: IVec2::ONE,
            dilation: IVec2::new(2, 1),
            padding: IVec2::ZERO,
        };
        let configs = resolved(params, IVec2::new(10, 1), false);
        let fields = resolve_field(&configs, Some(Selection::new(1, IVec2::ZERO)), false);
        for x in [0, 2, 4] {
            assert_eq!(fields[0].count(IVec2::new(x, 0)), 1);
        }
        assert_eq!(fields[0].count(IVec2::new(1, 0)), 0);
    }

    #[test]
    fn test_out_of_range_selection_layer_is_empty_not_a_panic() {
        let configs = resolved(ConvParams::uniform(3, 1, 1, 0), IVec2::splat(10), false);
        let fields = resolve_field(&configs, Some(Selection::new(9, IVec2::ZERO)), false);
        assert!(fields.iter().all(NodeMultiset::is_empty));
    }

    #[test]
    fn test_stale_coordinate_seed_is_accepted() {
        // A seed outside the selected layer's bounds still propagates.
        let configs = resolved(ConvParams::uniform(3, 1, 1, 0), IVec2::splat(10), false);
        let fields = resolve_field(&configs, Some(Selection::new(1, IVec2::new(50, 0))), false);
        assert_eq!(fields[1].count(IVec2::new(50, 0)), 1);
        assert_eq!(fields[0].count(IVec2::new(50, 0)), 1);
        assert_eq!(fields[0].len(), 9);
    }

    #[test]
    fn test_idempotence() {
        let configs = resolved(ConvParams::uniform(3, 2, 2, 1), IVec2::new(19, 13), false);
        let selection = Some(Selection::new(1, IVec2::new(3, 2)));
        let first = resolve_field(&configs, selection, false);
        let second = resolve_field(&configs, selection, false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parameterless_mid_layer_stops_propagation() {
        let templates = vec![
            LayerTemplate::input("input", Vec3::ONE),
            LayerTemplate::input("passthrough", Vec3::ONE),
            LayerTemplate::conv("conv", Vec3::ONE, ConvParams::uniform(3, 1, 1, 0)),
        ];
        let configs = resolve_chain(&templates, IVec2::splat(10), false).unwrap();
        let fields = resolve_field(&configs, Some(Selection::new(2, IVec2::ZERO)), false);
        assert_eq!(fields[2].len(), 1);
        assert_eq!(fields[1].len(), 9);
        assert!(fields[0].is_empty());
    }
}
