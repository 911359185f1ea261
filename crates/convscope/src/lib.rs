//! convscope: visualize convolution layer geometry and receptive fields.
//!
//! Convscope shows how convolution parameters (kernel, stride, dilation,
//! padding) shape the spatial extent of successive layers, and which input
//! coordinates causally contribute to a chosen output coordinate.
//!
//! # Quick Start
//!
//! ```no_run
//! use convscope::*;
//!
//! fn main() -> Result<()> {
//!     // Initialize convscope (starts with a small default chain)
//!     init()?;
//!
//!     // Grow the chain and pick a node
//!     append_layer("conv 3", Vec3::new(0.4, 0.8, 0.4), ConvParams::uniform(3, 2, 1, 1))?;
//!     select_node(3, IVec2::new(0, 0))?;
//!
//!     // Read back the contribution counts and build a renderable scene
//!     let counts = fields();
//!     println!("input contributions: {}", counts[0].len());
//!     let scene = build_scene_snapshot(&LayoutOptions::default());
//!     println!("scene nodes: {}", scene.nodes.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The engine is split in two:
//!
//! - `convscope-core` holds the pure computation: size resolution along the
//!   chain and backward receptive-field propagation, plus the editable
//!   chain behind a global context
//! - `convscope-scene` turns a resolved snapshot into plain renderable
//!   node data (positions, classes, colors)
//!
//! Every edit or selection change triggers a full, stateless re-resolution;
//! an animation driver may call [`advance_sweep`] on a fixed interval to
//! walk a layer's coordinates in row-major order.

// Re-export core types
pub use convscope_core::{
    error::{ConvscopeError, Result},
    layer::{LayerConfig, LayerTemplate},
    multiset::NodeMultiset,
    options::Options,
    params::{Axis, ConvParams, Param},
    selection::Selection,
    state::{with_context, with_context_mut, Context},
    IVec2, Vec3,
};

// Re-export scene types
pub use convscope_scene::{
    build_scene, ColorMap, ColorMapRegistry, LayerScene, LayoutOptions, NodeClass, SceneNode,
};

/// Initializes convscope with the default startup chain.
///
/// This must be called before any other convscope functions.
pub fn init() -> Result<()> {
    let _ = env_logger::try_init();
    convscope_core::state::init_context()?;
    log::info!("convscope initialized");
    Ok(())
}

/// Returns whether convscope has been initialized.
pub fn is_initialized() -> bool {
    convscope_core::state::is_initialized()
}

/// Shuts down convscope.
pub fn shutdown() {
    convscope_core::state::shutdown_context();
    log::info!("convscope shut down");
}

/// Appends a convolution layer at the end of the chain.
pub fn append_layer(name: impl Into<String>, color: Vec3, params: ConvParams) -> Result<()> {
    with_context_mut(|ctx| ctx.append_layer(LayerTemplate::conv(name, color, params)))
}

/// Removes the layer at `index`. The input layer (index 0) is immutable.
pub fn remove_layer(index: usize) -> Result<()> {
    with_context_mut(|ctx| ctx.remove_layer(index))
}

/// Renames the layer at `index`.
pub fn rename_layer(index: usize, name: impl Into<String>) -> Result<()> {
    with_context_mut(|ctx| ctx.rename_layer(index, name))
}

/// Changes one axis of one convolution parameter on one layer.
pub fn set_param_axis(index: usize, param: Param, axis: Axis, value: i32) -> Result<()> {
    with_context_mut(|ctx| ctx.set_param_axis(index, param, axis, value))
}

/// Sets the input layer's size (taken verbatim as layer 0's size).
pub fn set_input_size(size: IVec2) -> Result<()> {
    with_context_mut(|ctx| ctx.set_input_size(size))
}

/// Switches temporal/causal mode.
pub fn set_temporal_mode(temporal: bool) -> Result<()> {
    with_context_mut(|ctx| ctx.set_temporal_mode(temporal))
}

/// Switches reverse display order (cosmetic only).
pub fn set_reverse_order(reverse: bool) {
    with_context_mut(|ctx| ctx.set_reverse_order(reverse));
}

/// Selects a node by layer index and coordinate.
///
/// The coordinate is not validated against the layer's bounds; an
/// out-of-range seed still propagates (its window simply reaches into the
/// padding region).
pub fn select_node(layer: usize, coord: IVec2) -> Result<()> {
    with_context_mut(|ctx| ctx.select(layer, coord))
}

/// Clears the current selection.
pub fn clear_selection() -> Result<()> {
    with_context_mut(Context::clear_selection)
}

/// Returns the current selection, if any.
pub fn selection() -> Option<Selection> {
    with_context(Context::selection)
}

/// Advances the selection one row-major sweep step.
///
/// Intended to be driven by an external animation timer; each call is a
/// fresh full re-resolution, no state carries over between ticks.
pub fn advance_sweep() -> Result<()> {
    with_context_mut(Context::advance_sweep)
}

/// Returns the current global options.
pub fn options() -> Options {
    with_context(Context::options)
}

/// Returns the resolved layer configurations in logical order.
pub fn layer_configs() -> Vec<LayerConfig> {
    with_context(|ctx| ctx.configs().to_vec())
}

/// Returns the per-layer contribution multisets in logical order.
pub fn fields() -> Vec<NodeMultiset> {
    with_context(|ctx| ctx.fields().to_vec())
}

/// Builds a renderable scene from the current snapshot.
///
/// Uses the "reds" highlight ramp; use [`build_scene`] directly for a
/// different color map.
pub fn build_scene_snapshot(layout: &LayoutOptions) -> LayerScene {
    let registry = ColorMapRegistry::new();
    let color_map = registry.get("reds").expect("default color map registered");
    with_context(|ctx| {
        let opts = ctx.options();
        build_scene(
            ctx.configs(),
            ctx.fields(),
            ctx.selection(),
            opts.temporal_mode,
            opts.reverse_order,
            layout,
            color_map,
        )
    })
}
