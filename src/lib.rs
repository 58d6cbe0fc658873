/*!
Escape-time rendering of the Mandelbrot set over a pannable, zoomable view.

The [`viewport::ViewportController`] turns [`input::Command`]s into changes of
the visible rectangle; a [`render::Renderer`] turns the rectangle into a
grayscale frame.
*/

pub mod colour;
pub mod complex;
pub mod config;
pub mod error;
pub mod escape;
pub mod input;
pub mod pixel;
pub mod render;
pub mod screen;
pub mod viewport;
