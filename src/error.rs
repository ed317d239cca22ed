//! Error taxonomy for console input and configuration.

use thiserror::Error;

/// Errors surfaced by [`Ui::ask`](crate::Ui::ask) and color-name parsing.
///
/// Channel writes never surface here: they are fire-and-forget by contract,
/// and a failed sink write degrades to "output lost" (see the crate docs).
#[derive(Error, Debug)]
pub enum UiError {
    /// The input source reached end of stream before a line was available.
    #[error("input stream closed")]
    InputClosed,

    /// Reading from the input source failed.
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),

    /// A color name did not match any [`Color`](crate::Color) variant.
    #[error("unrecognized color name: {0}")]
    UnknownColor(String),
}
