//! The visible rectangle of the complex plane and the transforms applied to it.

use log::{debug, warn};

use crate::{complex::Complex, error::Error, input::Command, screen};

/// Default visible region: real axis `[-2, 1]`, imaginary axis `[-1, 1]`.
pub const DEFAULT_TOP_LEFT: Complex = Complex::new(-2.0, 1.0);
pub const DEFAULT_BOTTOM_RIGHT: Complex = Complex::new(1.0, -1.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/**
An axis-aligned rectangle of the complex plane.

The imaginary axis grows upwards while pixel rows grow downwards, so
`top_left` holds the smallest real part and the *largest* imaginary part.

Every `Viewport` has finite corners and a positive, finite width and height.
Transforms that would break this return `None` instead.
*/
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    top_left: Complex,
    bottom_right: Complex,
}

impl Viewport {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, Error> {
        let viewport = Self {
            top_left,
            bottom_right,
        };
        let valid = top_left.is_finite()
            && bottom_right.is_finite()
            && top_left.real < bottom_right.real
            && top_left.imaginary > bottom_right.imaginary
            && viewport.width().is_finite()
            && viewport.height().is_finite();
        if valid {
            Ok(viewport)
        } else {
            Err(Error::DegenerateViewport {
                top_left,
                bottom_right,
            })
        }
    }

    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    pub fn height(&self) -> f64 {
        self.top_left.imaginary - self.bottom_right.imaginary
    }

    pub fn center(&self) -> Complex {
        Complex::new(
            self.top_left.real + self.width() / 2.0,
            self.top_left.imaginary - self.height() / 2.0,
        )
    }

    /**
    The plane coordinate under pixel `(col, row)` of a `size` grid.

    Column 0 maps to `top_left.real` and column `width - 1` to
    `bottom_right.real`; row 0 maps to `top_left.imaginary` and row
    `height - 1` to `bottom_right.imaginary`. The last column and row are
    pinned to the corner, which `tl + (br - tl)·n/n` can miss by an ulp.
    */
    pub fn plane_point_at(&self, col: u32, row: u32, size: screen::Size) -> Complex {
        debug_assert!(col < size.width() && row < size.height());

        let last_col = size.width() - 1;
        let last_row = size.height() - 1;
        let real = if col == last_col {
            self.bottom_right.real
        } else {
            self.top_left.real + self.width() * col as f64 / last_col as f64
        };
        let imaginary = if row == last_row {
            self.bottom_right.imaginary
        } else {
            self.top_left.imaginary - self.height() * row as f64 / last_row as f64
        };
        Complex::new(real, imaginary)
    }

    /// Translate by `fraction` of the current width (horizontal) or height (vertical).
    pub fn panned(&self, direction: Direction, fraction: f64) -> Option<Self> {
        // One delta, taken from the rectangle before it moves, shifts both corners.
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;
        let offset = match direction {
            Direction::Left => Complex::new(-dx, 0.0),
            Direction::Right => Complex::new(dx, 0.0),
            Direction::Up => Complex::new(0.0, dy),
            Direction::Down => Complex::new(0.0, -dy),
        };
        Self::new(self.top_left + offset, self.bottom_right + offset).ok()
    }

    /// Scale width and height by `factor` about the center. `factor < 1` zooms in.
    pub fn zoomed(&self, factor: f64) -> Option<Self> {
        let width = self.width();
        let height = self.height();
        let new_width = width * factor;
        let new_height = height * factor;

        let top_left = Complex::new(
            self.top_left.real + (width - new_width) / 2.0,
            self.top_left.imaginary - (height - new_height) / 2.0,
        );
        let bottom_right = Complex::new(top_left.real + new_width, top_left.imaginary - new_height);
        Self::new(top_left, bottom_right).ok()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            top_left: DEFAULT_TOP_LEFT,
            bottom_right: DEFAULT_BOTTOM_RIGHT,
        }
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.top_left, self.bottom_right)
    }
}

/// What the host should do after a command has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    Unchanged,
    Quit,
}

/// Owns the current viewport and applies input commands to it.
#[derive(Clone, Debug)]
pub struct ViewportController {
    viewport: Viewport,
    initial: Viewport,
    pan_step: f64,
    zoom_in_factor: f64,
    zoom_out_factor: f64,
}

impl ViewportController {
    pub fn new(
        initial: Viewport,
        pan_step: f64,
        zoom_in_factor: f64,
        zoom_out_factor: f64,
    ) -> Self {
        Self {
            viewport: initial,
            initial,
            pan_step,
            zoom_in_factor,
            zoom_out_factor,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Apply exactly one transform for `command`.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let next = match command {
            Command::Pan(direction) => self.viewport.panned(direction, self.pan_step),
            Command::ZoomIn => self.viewport.zoomed(self.zoom_in_factor),
            Command::ZoomOut => self.viewport.zoomed(self.zoom_out_factor),
            Command::Reset => Some(self.initial),
            Command::Quit => return Outcome::Quit,
        };

        match next {
            Some(viewport) if viewport == self.viewport => Outcome::Unchanged,
            Some(viewport) => {
                self.viewport = viewport;
                debug!("{:?} -> {}", command, self.viewport);
                Outcome::Redraw
            }
            None => {
                warn!(
                    "{:?} would leave the representable range, keeping {}",
                    command, self.viewport
                );
                Outcome::Unchanged
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Direction, Outcome, Viewport, ViewportController};
    use crate::{complex::Complex, error::Error, input::Command, screen};

    const EPSILON: f64 = 1e-12;

    fn controller() -> ViewportController {
        ViewportController::new(Viewport::default(), 0.1, 0.1, 1.7)
    }

    #[test]
    fn rejects_flipped_and_empty() {
        let cases = [
            (Complex::new(1.0, 1.0), Complex::new(-2.0, -1.0)),
            (Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)),
            (Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)),
            (Complex::new(f64::NAN, 1.0), Complex::new(1.0, -1.0)),
            (Complex::new(-f64::MAX, 1.0), Complex::new(f64::MAX, -1.0)),
        ];
        for (top_left, bottom_right) in cases {
            assert!(matches!(
                Viewport::new(top_left, bottom_right),
                Err(Error::DegenerateViewport { .. })
            ));
        }
    }

    #[test]
    fn corners_map_exactly() {
        let viewport =
            Viewport::new(Complex::new(-0.743, 0.131), Complex::new(-0.741, 0.129)).unwrap();
        let size = screen::Size::new(800, 600).unwrap();
        assert_eq!(viewport.plane_point_at(0, 0, size), viewport.top_left());
        assert_eq!(viewport.plane_point_at(799, 599, size), viewport.bottom_right());
    }

    #[test]
    fn interior_pixels_follow_linear_mapping() {
        let size = screen::Size::new(800, 600).unwrap();
        for viewport in [
            Viewport::default(),
            Viewport::default().zoomed(0.1).unwrap(),
            Viewport::new(Complex::new(-0.743, 0.131), Complex::new(-0.741, 0.129)).unwrap(),
        ] {
            let tl = viewport.top_left();
            let br = viewport.bottom_right();
            for row in 0..599 {
                for col in 0..799 {
                    let expected = Complex::new(
                        tl.real + (br.real - tl.real) * col as f64 / 799.0,
                        tl.imaginary - (tl.imaginary - br.imaginary) * row as f64 / 599.0,
                    );
                    let point = viewport.plane_point_at(col, row, size);
                    assert_eq!(point.real.to_bits(), expected.real.to_bits());
                    assert_eq!(point.imaginary.to_bits(), expected.imaginary.to_bits());
                }
            }
        }
    }

    #[test]
    fn rows_grow_downwards() {
        let viewport = Viewport::default();
        let size = screen::Size::new(3, 3).unwrap();
        assert_eq!(viewport.plane_point_at(1, 1, size), Complex::new(-0.5, 0.0));
        assert!(
            viewport.plane_point_at(0, 2, size).imaginary
                < viewport.plane_point_at(0, 0, size).imaginary
        );
    }

    #[test]
    fn pan_moves_both_corners_by_the_same_delta() {
        let viewport = Viewport::default();
        let panned = viewport.panned(Direction::Up, 0.1).unwrap();
        assert!((panned.top_left().imaginary - 1.2).abs() < EPSILON);
        assert!((panned.bottom_right().imaginary + 0.8).abs() < EPSILON);
        assert!((panned.height() - 2.0).abs() < EPSILON);
        assert_eq!(panned.top_left().real, viewport.top_left().real);

        let panned = viewport.panned(Direction::Left, 0.1).unwrap();
        assert!((panned.top_left().real + 2.3).abs() < EPSILON);
        assert!((panned.bottom_right().real - 0.7).abs() < EPSILON);
    }

    #[test]
    fn zoom_keeps_center() {
        let viewport = Viewport::default();
        let zoomed = viewport.zoomed(0.1).unwrap();
        assert!((zoomed.width() - 0.3).abs() < EPSILON);
        assert!((zoomed.height() - 0.2).abs() < EPSILON);
        assert!((zoomed.center().real + 0.5).abs() < EPSILON);
        assert!(zoomed.center().imaginary.abs() < EPSILON);
    }

    #[test]
    fn zoom_in_past_precision_is_refused() {
        let mut viewport = Viewport::default();
        let mut refused = false;
        for _ in 0..40 {
            match viewport.zoomed(0.1) {
                Some(next) => viewport = next,
                None => {
                    refused = true;
                    break;
                }
            }
        }
        assert!(refused);
        assert!(viewport.width() > 0.0 && viewport.height() > 0.0);
    }

    #[test]
    fn zoom_out_past_overflow_is_refused() {
        let mut viewport = Viewport::default();
        while let Some(next) = viewport.zoomed(1.7) {
            viewport = next;
        }
        assert!(viewport.width().is_finite());
        assert!(viewport.zoomed(1.7).is_none());
    }

    #[test]
    fn zoom_in_applies_once() {
        let mut controller = controller();
        assert_eq!(controller.apply(Command::ZoomIn), Outcome::Redraw);
        assert!((controller.viewport().width() - 0.3).abs() < EPSILON);
    }

    #[test]
    fn zoom_out_applies_once() {
        let mut controller = controller();
        assert_eq!(controller.apply(Command::ZoomOut), Outcome::Redraw);
        assert!((controller.viewport().width() - 5.1).abs() < EPSILON);
    }

    #[test]
    fn reset_restores_initial() {
        let mut controller = controller();
        controller.apply(Command::Pan(Direction::Right));
        controller.apply(Command::ZoomIn);
        assert_eq!(controller.apply(Command::Reset), Outcome::Redraw);
        assert_eq!(*controller.viewport(), Viewport::default());
        assert_eq!(controller.apply(Command::Reset), Outcome::Unchanged);
    }

    #[test]
    fn quit_leaves_viewport_alone() {
        let mut controller = controller();
        assert_eq!(controller.apply(Command::Quit), Outcome::Quit);
        assert_eq!(*controller.viewport(), Viewport::default());
    }
}
