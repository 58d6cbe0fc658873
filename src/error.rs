use thiserror::Error;

use crate::complex::Complex;

#[derive(Error, Debug)]
pub enum Error {
    #[error("pixel grid must be at least 2x2, got {width}x{height}")]
    DegenerateGrid { width: u32, height: u32 },
    #[error("viewport from {top_left} to {bottom_right} is empty, flipped or not finite")]
    DegenerateViewport {
        top_left: Complex,
        bottom_right: Complex,
    },
    #[error("iteration budget must be positive")]
    ZeroIterations,
    #[error("pan step must be a positive finite fraction, got {0}")]
    InvalidPanStep(f64),
    #[error("{name} factor {factor} is out of range ({expected})")]
    InvalidZoomFactor {
        name: &'static str,
        factor: f64,
        expected: &'static str,
    },
    #[error("at least one render thread is required")]
    ZeroThreads,
    #[error("failed to start render threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
