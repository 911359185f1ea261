//! Layer templates and resolved layer configurations.

use glam::{IVec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::params::ConvParams;

/// An editable description of one layer in the chain.
///
/// Exactly the first template of a chain has no convolution parameters (it
/// is the input layer); every other template carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerTemplate {
    /// Display name.
    pub name: String,

    /// Display color.
    pub color: Vec3,

    /// Convolution parameters; `None` only for the input layer.
    pub conv: Option<ConvParams>,
}

impl LayerTemplate {
    /// Creates the input-layer template (no convolution parameters).
    pub fn input(name: impl Into<String>, color: Vec3) -> Self {
        Self {
            name: name.into(),
            color,
            conv: None,
        }
    }

    /// Creates a convolution-layer template.
    pub fn conv(name: impl Into<String>, color: Vec3, params: ConvParams) -> Self {
        Self {
            name: name.into(),
            color,
            conv: Some(params),
        }
    }
}

/// A template with its resolved spatial size.
///
/// Produced only by size resolution; never constructed directly by
/// collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Display name.
    pub name: String,

    /// Display color.
    pub color: Vec3,

    /// Convolution parameters; `None` only for the input layer.
    pub conv: Option<ConvParams>,

    /// Resolved spatial size. Either axis may be <= 0, meaning the layer
    /// has no displayable nodes (degenerate, not an error).
    pub size: IVec2,
}

impl LayerConfig {
    /// Returns true if the layer has no displayable nodes.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// The padding-region bounds test: true if `coord` lies outside the
    /// layer's valid `[0, size)` range on either axis.
    #[must_use]
    pub fn is_padding_coord(&self, coord: IVec2) -> bool {
        coord.x < 0 || coord.x >= self.size.x || coord.y < 0 || coord.y >= self.size.y
    }
}
