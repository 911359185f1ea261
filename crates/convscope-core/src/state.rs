//! Global state management for convscope.

use std::sync::{OnceLock, RwLock};

use glam::{IVec2, Vec3};

use crate::chain::LayerChain;
use crate::error::{ConvscopeError, Result};
use crate::field::resolve_field;
use crate::layer::{LayerConfig, LayerTemplate};
use crate::multiset::NodeMultiset;
use crate::options::Options;
use crate::params::{Axis, ConvParams, Param};
use crate::selection::{next_sweep_coord, Selection};
use crate::sizing::resolve_chain;

/// Global context singleton.
static CONTEXT: OnceLock<RwLock<Context>> = OnceLock::new();

/// The global context holding the chain, the options, and the latest
/// resolved snapshot.
///
/// The context plays the editing-collaborator role: it owns the mutable
/// template chain and selection, funnels every change through the pure
/// resolvers, and keeps the resolved outputs consistent with the inputs.
/// The resolvers themselves never see this struct.
pub struct Context {
    /// Whether convscope has been initialized.
    pub initialized: bool,

    chain: LayerChain,
    options: Options,
    selection: Option<Selection>,

    configs: Vec<LayerConfig>,
    fields: Vec<NodeMultiset>,
}

impl Default for Context {
    fn default() -> Self {
        let mut ctx = Self {
            initialized: false,
            chain: LayerChain::default(),
            options: Options::default(),
            selection: None,
            configs: Vec::new(),
            fields: Vec::new(),
        };
        // A default chain always resolves; start with a consistent snapshot.
        ctx.re_resolve().expect("default chain must resolve");
        ctx
    }
}

impl Context {
    /// Recomputes the full resolved snapshot from the current inputs.
    ///
    /// Always a whole-chain recomputation: chain lengths are small and
    /// statelessness keeps every edit path correct.
    fn re_resolve(&mut self) -> Result<()> {
        self.configs = resolve_chain(
            self.chain.templates(),
            self.options.input_size,
            self.options.temporal_mode,
        )?;
        self.fields = resolve_field(&self.configs, self.selection, self.options.temporal_mode);
        log::debug!(
            "resolved {} layers, selection {:?}",
            self.configs.len(),
            self.selection
        );
        Ok(())
    }

    /// Appends a convolution layer at the end of the chain.
    pub fn append_layer(&mut self, template: LayerTemplate) -> Result<()> {
        self.chain.append(template)?;
        self.re_resolve()
    }

    /// Removes the layer at `index` (index 0 is immutable).
    ///
    /// If the current selection pointed at the removed or a now-dangling
    /// layer index, the selection is cleared here - the resolver itself
    /// never auto-clears.
    pub fn remove_layer(&mut self, index: usize) -> Result<()> {
        self.chain.remove(index)?;
        if let Some(selection) = self.selection {
            if selection.layer >= self.chain.len() || selection.layer == index {
                log::debug!("clearing selection on removed layer {index}");
                self.selection = None;
            }
        }
        self.re_resolve()
    }

    /// Renames the layer at `index`.
    pub fn rename_layer(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.chain.rename(index, name)?;
        // Renaming cannot change geometry, but the resolved snapshot carries
        // the name for display.
        self.re_resolve()
    }

    /// Sets the display color of the layer at `index`.
    pub fn set_layer_color(&mut self, index: usize, color: Vec3) -> Result<()> {
        self.chain.set_color(index, color)?;
        self.re_resolve()
    }

    /// Changes one axis of one convolution parameter on one layer.
    pub fn set_param_axis(
        &mut self,
        index: usize,
        param: Param,
        axis: Axis,
        value: i32,
    ) -> Result<()> {
        self.chain.set_param_axis(index, param, axis, value)?;
        self.re_resolve()
    }

    /// Sets the input layer's size.
    pub fn set_input_size(&mut self, size: IVec2) -> Result<()> {
        self.options.input_size = size;
        self.re_resolve()
    }

    /// Switches temporal/causal mode.
    pub fn set_temporal_mode(&mut self, temporal: bool) -> Result<()> {
        self.options.temporal_mode = temporal;
        self.re_resolve()
    }

    /// Switches reverse display order. Cosmetic: no re-resolution needed,
    /// the flag is only read by the layout collaborator.
    pub fn set_reverse_order(&mut self, reverse: bool) {
        self.options.reverse_order = reverse;
    }

    /// Selects a node. The coordinate is accepted as supplied, even outside
    /// the layer's current bounds.
    pub fn select(&mut self, layer: usize, coord: IVec2) -> Result<()> {
        self.selection = Some(Selection::new(layer, coord));
        self.re_resolve()
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) -> Result<()> {
        self.selection = None;
        self.re_resolve()
    }

    /// Advances the selection one sweep step in row-major order.
    ///
    /// Without a selection the sweep starts at the origin of the deepest
    /// layer that has displayable nodes; if every layer is degenerate the
    /// tick is a no-op. Sweeping a degenerate layer is likewise a no-op.
    pub fn advance_sweep(&mut self) -> Result<()> {
        let next = match self.selection {
            None => {
                let Some(layer) = self.configs.iter().rposition(|c| !c.is_degenerate()) else {
                    return Ok(());
                };
                Selection::new(layer, IVec2::ZERO)
            }
            Some(current) => {
                let Some(config) = self.configs.get(current.layer) else {
                    return Ok(());
                };
                if config.is_degenerate() {
                    return Ok(());
                }
                Selection::new(current.layer, next_sweep_coord(current.coord, config.size))
            }
        };
        self.selection = Some(next);
        self.re_resolve()
    }

    /// Returns the current options.
    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    /// Returns the current selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Returns the chain templates in logical order.
    #[must_use]
    pub fn templates(&self) -> &[LayerTemplate] {
        self.chain.templates()
    }

    /// Returns the resolved layer configurations in logical order.
    #[must_use]
    pub fn configs(&self) -> &[LayerConfig] {
        &self.configs
    }

    /// Returns the per-layer contribution multisets in logical order.
    #[must_use]
    pub fn fields(&self) -> &[NodeMultiset] {
        &self.fields
    }
}

/// Builds the default startup chain: an input layer and two convolution
/// layers with modest parameters.
#[must_use]
pub fn default_chain() -> LayerChain {
    let mut chain = LayerChain::new(LayerTemplate::input("input", Vec3::new(0.6, 0.6, 0.6)));
    chain
        .append(LayerTemplate::conv(
            "conv 1",
            Vec3::new(0.2, 0.5, 0.9),
            ConvParams::uniform(3, 1, 1, 0),
        ))
        .expect("default conv 1 is valid");
    chain
        .append(LayerTemplate::conv(
            "conv 2",
            Vec3::new(0.9, 0.5, 0.2),
            ConvParams::uniform(3, 2, 1, 1),
        ))
        .expect("default conv 2 is valid");
    chain
}

/// Initializes the global context with the default startup chain.
///
/// This should be called once at the start of the program.
pub fn init_context() -> Result<()> {
    let mut ctx = Context {
        chain: default_chain(),
        ..Context::default()
    };
    ctx.re_resolve()?;
    ctx.initialized = true;

    CONTEXT
        .set(RwLock::new(ctx))
        .map_err(|_| ConvscopeError::AlreadyInitialized)?;

    Ok(())
}

/// Returns whether the context has been initialized.
pub fn is_initialized() -> bool {
    CONTEXT
        .get()
        .and_then(|lock| lock.read().ok())
        .is_some_and(|ctx| ctx.initialized)
}

/// Access the global context for reading.
///
/// # Panics
///
/// Panics if convscope has not been initialized.
pub fn with_context<F, R>(f: F) -> R
where
    F: FnOnce(&Context) -> R,
{
    let lock = CONTEXT.get().expect("convscope not initialized");
    let guard = lock.read().expect("context lock poisoned");
    f(&guard)
}

/// Access the global context for writing.
///
/// # Panics
///
/// Panics if convscope has not been initialized.
pub fn with_context_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Context) -> R,
{
    let lock = CONTEXT.get().expect("convscope not initialized");
    let mut guard = lock.write().expect("context lock poisoned");
    f(&mut guard)
}

/// Shuts down the global context.
///
/// Note: Due to `OnceLock` semantics, the context cannot be re-initialized
/// after shutdown in the same process.
pub fn shutdown_context() {
    if let Some(lock) = CONTEXT.get() {
        if let Ok(mut ctx) = lock.write() {
            ctx.initialized = false;
        }
    }
}
