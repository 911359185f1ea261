//! Core engine for convscope.
//!
//! This crate holds the pure computation behind the visualization:
//! - [`sizing::resolve_chain`] derives each layer's 2D spatial size from the
//!   previous layer's size and its own convolution parameters
//! - [`field::resolve_field`] computes, for a selected coordinate, the
//!   multiset of coordinates in every preceding layer that contribute to it
//! - [`NodeMultiset`] is the coordinate-to-count container both lean on
//! - [`Context`] owns the editable chain and the latest resolved snapshot
//!
//! Everything here is synchronous and deterministic; the resolvers take
//! immutable snapshots and return fresh outputs, so they can be driven at
//! animation frequency without retaining state between ticks.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod chain;
pub mod error;
pub mod field;
pub mod layer;
pub mod multiset;
pub mod options;
pub mod params;
pub mod selection;
pub mod sizing;
pub mod state;

pub use chain::LayerChain;
pub use error::{ConvscopeError, Result};
pub use field::resolve_field;
pub use layer::{LayerConfig, LayerTemplate};
pub use multiset::NodeMultiset;
pub use options::Options;
pub use params::{Axis, ConvParams, Param};
pub use selection::{next_sweep_coord, Selection};
pub use sizing::{output_size, resolve_chain};
pub use state::{with_context, with_context_mut, Context};

// Re-export glam types for convenience
pub use glam::{IVec2, Vec3};
