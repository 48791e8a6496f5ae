use thiserror::Error;

/// Top-level error type for the elastica kernel.
#[derive(Debug, Error)]
pub enum ElasticaError {
    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to curve sampling.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("invalid sampling parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to scene construction.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("canvas {width}x{height} leaves no room between endpoints at margin {margin}")]
    CanvasTooSmall { width: f64, height: f64, margin: f64 },

    #[error("non-finite canvas dimensions: {width}x{height}")]
    NonFiniteCanvas { width: f64, height: f64 },
}

/// Convenience type alias for results using [`ElasticaError`].
pub type Result<T> = std::result::Result<T, ElasticaError>;
