use thiserror::Error;

/// Failures surfaced by the style renderers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Every style paints with at least the first palette color
    #[error("stroke has no colors to paint with")]
    NoColor,
    /// Bubble-style stroke without its radius/opacity trail
    #[error("bubble stroke is missing its bubble trail")]
    MissingBubbleTrail,
}
