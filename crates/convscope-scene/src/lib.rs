//! Scene construction for convscope.
//!
//! This crate turns a resolved engine snapshot (layer configurations,
//! contribution multisets, selection) into plain renderable data:
//! - [`layout`] places each layer's node grid in 3D, honoring reverse
//!   display order and temporal trailing-edge alignment
//! - [`color`] maps contribution counts to highlight colors
//! - [`classify`] tags each node as normal, contributing, padding, or
//!   selected
//! - [`scene::build_scene`] assembles everything into a [`LayerScene`]
//!
//! No GPU types appear here; a renderer consumes the output verbatim.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod classify;
pub mod color;
pub mod layout;
pub mod scene;

pub use classify::{classify, NodeClass};
pub use color::{highlight_intensity, ColorMap, ColorMapRegistry};
pub use layout::{display_order, node_position, LayoutOptions};
pub use scene::{build_scene, LayerScene, SceneNode};
