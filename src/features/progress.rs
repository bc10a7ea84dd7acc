//! Aggregate submission progress

use super::book::RatingBook;

/// Submission progress derived from a [`RatingBook`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub submitted: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(book: &RatingBook, total: usize) -> Self {
        Self {
            submitted: book.submitted_count(),
            total,
        }
    }

    /// Rounded percentage in `0..=100`
    pub fn percent(&self) -> u8 {
        progress_percent(self.submitted, self.total)
    }

    /// Fraction in `0.0..=1.0`, for drawing
    pub fn fraction(&self) -> f32 {
        f32::from(self.percent()) / 100.0
    }
}

/// `round(100 * submitted / total)`, clamped to 100
pub fn progress_percent(submitted: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let submitted = submitted.min(total);
    // Integer round-half-up
    ((submitted * 200 + total) / (total * 2)) as u8
}
