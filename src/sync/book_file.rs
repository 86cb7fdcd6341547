use std::path::Path;

use crate::state::Book;

use super::{io_error, SyncError};

/// Describe a native book file without reading its contents.
///
/// Each line is `width` bytes, so the line count follows from the file
/// size. The title is the file stem with underscores read as spaces.
pub async fn book_from_file(path: &Path, width: usize) -> Result<Book, SyncError> {
    let metadata = tokio::fs::metadata(path).await.map_err(io_error(path))?;
    let lines = match width {
        0 => 0,
        width => metadata.len() as usize / width,
    };
    Ok(Book::new(path.to_string_lossy(), title_of(path), lines))
}

fn title_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace('_', " "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_replaces_underscores() {
        assert_eq!(title_of(Path::new("/lib/moby_dick.canute")), "moby dick");
        assert_eq!(title_of(Path::new("plain")), "plain");
    }
}
