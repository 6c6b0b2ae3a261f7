use thiserror::Error;

/// Everything that can be wrong with scene input before a trace starts.
///
/// Degenerate geometry met while tracing (parallel rays, grazing hits) is not an error,
/// it simply produces fewer hits.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Ray direction must have a non-zero length")]
    ZeroDirection,

    #[error("Plane normal must have a non-zero length")]
    ZeroNormal,

    #[error("Circle radius must not be negative, got {0}")]
    NegativeRadius(f64),

    #[error("Box half-axis `{0}` must have a non-zero length")]
    DegenerateAxis(&'static str),

    #[error("Non-finite coordinate in {0}")]
    NonFinite(&'static str),

    #[error("Ray needs exactly one of `towards` or `direction`")]
    AmbiguousRay,

    #[error("Random scene bounds must be positive, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
