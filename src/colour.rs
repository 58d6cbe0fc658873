//! Colouring algorithms.

use log::trace;
use rayon::prelude::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

use crate::pixel::Pixel;

/// Grayscale shade for an escape count: the count wrapped into `0..=255`.
pub fn grayscale(escape_count: u32) -> Pixel {
    Pixel::grey((escape_count % 256) as u8)
}

/// Shade `pixels` from `escape_counts`, which must be the same length.
pub fn shade(escape_counts: &[u32], pixels: &mut [Pixel]) {
    trace!("begin shade");

    debug_assert_eq!(escape_counts.len(), pixels.len());
    pixels
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, pixel)| *pixel = grayscale(escape_counts[index]));

    trace!("end shade");
}
