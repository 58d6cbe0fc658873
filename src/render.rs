//! The per-frame pass: one escape count per pixel, rows in parallel.

use log::trace;
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{colour, error::Error, escape, pixel::Pixel, screen, viewport::Viewport};

pub struct Renderer {
    pool: rayon::ThreadPool,
    max_iterations: u32,
}

impl Renderer {
    pub fn new(threads: usize, max_iterations: u32) -> Result<Self, Error> {
        if threads == 0 {
            return Err(Error::ZeroThreads);
        }
        if max_iterations == 0 {
            return Err(Error::ZeroIterations);
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("render-{}", index))
            .build()?;
        Ok(Self {
            pool,
            max_iterations,
        })
    }

    /**
    Escape counts for every pixel of a `size` grid over `viewport`, row-major.

    The viewport is borrowed for the whole pass, so it cannot be changed
    while rows are still being computed.
    */
    pub fn escape_counts(&self, viewport: &Viewport, size: screen::Size) -> Vec<u32> {
        trace!("begin escape_counts");

        let mut counts = vec![0; size.pixel_count()];
        let max_iterations = self.max_iterations;
        self.pool.install(|| {
            counts
                .par_chunks_mut(size.width() as usize)
                .enumerate()
                .for_each(|(row, counts)| {
                    for (col, count) in counts.iter_mut().enumerate() {
                        let c = viewport.plane_point_at(col as u32, row as u32, size);
                        *count = escape::escape_count(c, max_iterations);
                    }
                })
        });

        trace!("end escape_counts");
        counts
    }

    /// Render a grayscale frame into `frame`, resizing it to fit `size`.
    pub fn render(&self, viewport: &Viewport, size: screen::Size, frame: &mut Vec<Pixel>) {
        let counts = self.escape_counts(viewport, size);
        frame.resize(size.pixel_count(), Pixel::BLACK);
        self.pool.install(|| colour::shade(&counts, frame));
    }
}
