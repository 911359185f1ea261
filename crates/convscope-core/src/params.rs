//! Convolution parameters.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Per-layer convolution parameters.
///
/// Every field is configured per axis; asymmetric kernels, strides,
/// dilations, and paddings are first-class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvParams {
    /// Per-axis span of the sampling window.
    pub kernel_size: IVec2,

    /// Per-axis step between successive window placements.
    pub stride: IVec2,

    /// Per-axis spacing between sampled positions within one window.
    pub dilation: IVec2,

    /// Per-axis virtual border; symmetric (doubled) by default, one-sided
    /// on the Y axis in temporal mode.
    pub padding: IVec2,
}

impl Default for ConvParams {
    fn default() -> Self {
        Self {
            kernel_size: IVec2::splat(3),
            stride: IVec2::ONE,
            dilation: IVec2::ONE,
            padding: IVec2::ZERO,
        }
    }
}

impl ConvParams {
    /// Creates parameters with uniform values on both axes.
    #[must_use]
    pub fn uniform(kernel_size: i32, stride: i32, dilation: i32, padding: i32) -> Self {
        Self {
            kernel_size: IVec2::splat(kernel_size),
            stride: IVec2::splat(stride),
            dilation: IVec2::splat(dilation),
            padding: IVec2::splat(padding),
        }
    }

    /// Checks the parameters for structural validity.
    ///
    /// Kernel size and stride must be at least 1 on each axis (a zero value
    /// would make the output-size division degenerate); dilation and padding
    /// must be non-negative. Returns a human-readable description of the
    /// first violation found.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (value, name) in [(self.kernel_size, "kernel size"), (self.stride, "stride")] {
            if value.x < 1 || value.y < 1 {
                return Err(format!("{name} must be >= 1 on each axis, got {value}"));
            }
        }
        for (value, name) in [(self.dilation, "dilation"), (self.padding, "padding")] {
            if value.x < 0 || value.y < 0 {
                return Err(format!("{name} must be >= 0 on each axis, got {value}"));
            }
        }
        Ok(())
    }
}

/// One of the four convolution parameters, for single-axis edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Param {
    KernelSize,
    Stride,
    Dilation,
    Padding,
}

/// One of the two spatial axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl ConvParams {
    /// Returns a copy with one axis of one parameter replaced.
    #[must_use]
    pub fn with_axis(mut self, param: Param, axis: Axis, value: i32) -> Self {
        let field = match param {
            Param::KernelSize => &mut self.kernel_size,
            Param::Stride => &mut self.stride,
            Param::Dilation => &mut self.dilation,
            Param::Padding => &mut self.padding,
        };
        match axis {
            Axis::X => field.x = value,
            Axis::Y => field.y = value,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ConvParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_stride_and_kernel() {
        let mut p = ConvParams::default();
        p.stride.y = 0;
        assert!(p.validate().is_err());

        let mut p = ConvParams::default();
        p.kernel_size.x = 0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_dilation_and_padding() {
        let mut p = ConvParams::default();
        p.dilation.x = -1;
        assert!(p.validate().is_err());

        let mut p = ConvParams::default();
        p.padding.y = -2;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_with_axis_replaces_one_value() {
        let p = ConvParams::default().with_axis(Param::Stride, Axis::Y, 2);
        assert_eq!(p.stride, IVec2::new(1, 2));
        assert_eq!(p.kernel_size, IVec2::splat(3));
    }
}
