//! Size resolution: deriving per-layer spatial sizes from the chain.

use glam::IVec2;

use crate::error::{ConvscopeError, Result};
use crate::layer::{LayerConfig, LayerTemplate};
use crate::params::ConvParams;

/// Output extent along one axis for the standard convolution size formula.
///
/// `div_euclid` floors the quotient even for negative numerators, which the
/// truncating `/` would round toward zero instead.
fn output_extent(prev: i32, kernel: i32, stride: i32, dilation: i32, eff_pad: i32) -> i32 {
    (prev + eff_pad - dilation * (kernel - 1) - 1).div_euclid(stride) + 1
}

/// Resolved size of one layer given the previous layer's size.
///
/// In temporal mode the Y axis (time) pads on the leading side only, so the
/// effective padding is `padding.y` rather than the symmetric
/// `2 * padding.y`. The X axis always pads symmetrically.
#[must_use]
pub fn output_size(prev: IVec2, params: &ConvParams, temporal: bool) -> IVec2 {
    let eff_pad_x = 2 * params.padding.x;
    let eff_pad_y = if temporal {
        params.padding.y
    } else {
        2 * params.padding.y
    };
    IVec2::new(
        output_extent(
            prev.x,
            params.kernel_size.x,
            params.stride.x,
            params.dilation.x,
            eff_pad_x,
        ),
        output_extent(
            prev.y,
            params.kernel_size.y,
            params.stride.y,
            params.dilation.y,
            eff_pad_y,
        ),
    )
}

/// Resolves the full template chain into layer configurations.
///
/// Layer 0 takes `input_size` verbatim. Every following layer's size is a
/// pure function of the previous layer's resolved size, its own parameters,
/// and the temporal flag. The whole chain is recomputed on every call; chain
/// lengths are small and statelessness keeps edits (insert, remove,
/// reparameterize) trivially correct.
///
/// A resolved size <= 0 on either axis is returned as-is: it means the layer
/// has no displayable nodes, not that the configuration is broken. Only
/// structurally invalid parameters (kernel or stride < 1, negative dilation
/// or padding) are rejected.
pub fn resolve_chain(
    templates: &[LayerTemplate],
    input_size: IVec2,
    temporal: bool,
) -> Result<Vec<LayerConfig>> {
    if templates.is_empty() {
        return Err(ConvscopeError::EmptyChain);
    }

    let mut configs = Vec::with_capacity(templates.len());
    let mut prev = input_size;
    for (layer, template) in templates.iter().enumerate() {
        let size = match (layer, template.conv.as_ref()) {
            (0, _) => input_size,
            (_, Some(params)) => {
                params
                    .validate()
                    .map_err(|detail| ConvscopeError::InvalidConfiguration { layer, detail })?;
                output_size(prev, params, temporal)
            }
            // A parameterless layer past index 0 is unreachable under the
            // current editing rules; treat it as a pass-through rather than
            // asserting, in case those rules are ever relaxed.
            (_, None) => prev,
        };
        configs.push(LayerConfig {
            name: template.name.clone(),
            color: template.color,
            conv: template.conv,
            size,
        });
        prev = size;
    }
    Ok(configs)
}
