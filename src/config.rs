//! Command-line configuration.

use clap::Parser;

use crate::{
    complex::Complex,
    error::Error,
    screen,
    viewport::{self, Viewport, ViewportController},
};

/// Interactive Mandelbrot set explorer.
///
/// W/A/S/D pan, Up/Down zoom in/out, R resets the view, Escape quits.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Iterations before a point is considered inside the set
    #[arg(long, default_value_t = 400)]
    pub max_iterations: u32,

    /// Fraction of the view's width or height moved by one pan
    #[arg(long, default_value_t = 0.1)]
    pub pan_step: f64,

    /// Scale applied to the view when zooming in, in (0, 1)
    #[arg(long, default_value_t = 0.1)]
    pub zoom_in_factor: f64,

    /// Scale applied to the view when zooming out, greater than 1
    #[arg(long, default_value_t = 1.7)]
    pub zoom_out_factor: f64,

    /// Left edge of the initial view
    #[arg(long, default_value_t = viewport::DEFAULT_TOP_LEFT.real, allow_hyphen_values = true)]
    pub real_min: f64,

    /// Right edge of the initial view
    #[arg(long, default_value_t = viewport::DEFAULT_BOTTOM_RIGHT.real, allow_hyphen_values = true)]
    pub real_max: f64,

    /// Bottom edge of the initial view
    #[arg(long, default_value_t = viewport::DEFAULT_BOTTOM_RIGHT.imaginary, allow_hyphen_values = true)]
    pub imag_min: f64,

    /// Top edge of the initial view
    #[arg(long, default_value_t = viewport::DEFAULT_TOP_LEFT.imaginary, allow_hyphen_values = true)]
    pub imag_max: f64,

    /// Render threads [default: number of logical CPUs]
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Validated configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub size: screen::Size,
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub pan_step: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    pub threads: usize,
}

impl Config {
    pub fn settings(&self) -> Result<Settings, Error> {
        let size = screen::Size::new(self.width, self.height)?;
        let viewport = Viewport::new(
            Complex::new(self.real_min, self.imag_max),
            Complex::new(self.real_max, self.imag_min),
        )?;

        if self.max_iterations == 0 {
            return Err(Error::ZeroIterations);
        }
        if !(self.pan_step.is_finite() && self.pan_step > 0.0) {
            return Err(Error::InvalidPanStep(self.pan_step));
        }
        if !(self.zoom_in_factor > 0.0 && self.zoom_in_factor < 1.0) {
            return Err(Error::InvalidZoomFactor {
                name: "zoom-in",
                factor: self.zoom_in_factor,
                expected: "between 0 and 1",
            });
        }
        if !(self.zoom_out_factor.is_finite() && self.zoom_out_factor > 1.0) {
            return Err(Error::InvalidZoomFactor {
                name: "zoom-out",
                factor: self.zoom_out_factor,
                expected: "finite and greater than 1",
            });
        }
        let threads = self.threads.unwrap_or_else(num_cpus::get);
        if threads == 0 {
            return Err(Error::ZeroThreads);
        }

        Ok(Settings {
            size,
            viewport,
            max_iterations: self.max_iterations,
            pan_step: self.pan_step,
            zoom_in_factor: self.zoom_in_factor,
            zoom_out_factor: self.zoom_out_factor,
            threads,
        })
    }
}

impl Settings {
    pub fn controller(&self) -> ViewportController {
        ViewportController::new(
            self.viewport,
            self.pan_step,
            self.zoom_in_factor,
            self.zoom_out_factor,
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: screen::Size::default(),
            viewport: Viewport::default(),
            max_iterations: 400,
            pan_step: 0.1,
            zoom_in_factor: 0.1,
            zoom_out_factor: 1.7,
            threads: num_cpus::get(),
        }
    }
}
