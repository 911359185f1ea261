//! Error types for convscope.

use thiserror::Error;

/// The main error type for convscope operations.
#[derive(Error, Debug)]
pub enum ConvscopeError {
    /// Convscope has not been initialized.
    #[error("convscope not initialized - call convscope::init() first")]
    NotInitialized,

    /// Convscope has already been initialized.
    #[error("convscope already initialized")]
    AlreadyInitialized,

    /// A layer carries structurally invalid convolution parameters.
    ///
    /// Raised when any axis of kernel size or stride is less than 1, or any
    /// axis of dilation or padding is negative.
    #[error("invalid convolution parameters on layer {layer}: {detail}")]
    InvalidConfiguration { layer: usize, detail: String },

    /// No layer exists at the given chain index.
    #[error("layer index {0} out of range")]
    LayerNotFound(usize),

    /// The input layer (index 0) cannot be removed or re-parameterized.
    #[error("the input layer is immutable")]
    InputLayerImmutable,

    /// The template chain must contain at least the input layer.
    #[error("layer chain is empty")]
    EmptyChain,
}

/// A specialized Result type for convscope operations.
pub type Result<T> = std::result::Result<T, ConvscopeError>;
