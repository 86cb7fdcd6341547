//! Page arithmetic shared by the library listing and open books.

use crate::state::Dimensions;

/// Index of the last page for `content_length` lines at `capacity` lines per page.
///
/// # Panics
/// If `capacity` is zero.
pub fn max_page(content_length: usize, capacity: usize) -> usize {
    assert!(capacity > 0, "page capacity must be positive");
    content_length.div_ceil(capacity).saturating_sub(1)
}

/// Clamp `requested` into `[0, max_page]`.
///
/// # Panics
/// If `capacity` is zero.
pub fn clamp_page(content_length: usize, requested: i64, capacity: usize) -> usize {
    let last = max_page(content_length, capacity);
    match usize::try_from(requested) {
        Ok(page) => page.min(last),
        Err(_) => 0,
    }
}

/// Lines per library page; the top row is reserved for the header.
pub fn library_capacity(dimensions: Dimensions) -> usize {
    dimensions.height.saturating_sub(1)
}

/// Lines per page of an open book.
pub fn book_capacity(dimensions: Dimensions) -> usize {
    dimensions.height
}
