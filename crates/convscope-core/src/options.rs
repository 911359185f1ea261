//! Global configuration options for convscope.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Global options supplied by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Spatial size of the input layer, taken verbatim as layer 0's size.
    pub input_size: IVec2,

    /// Temporal/causal mode: the Y axis is time, padding applies on the
    /// leading side only, and backward coordinates omit the Y padding shift.
    pub temporal_mode: bool,

    /// Display layers in reverse order. Purely cosmetic: layout only, never
    /// size resolution or receptive-field indexing.
    pub reverse_order: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input_size: IVec2::splat(10),
            temporal_mode: false,
            reverse_order: false,
        }
    }
}
