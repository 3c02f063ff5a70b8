//! Flat-file review store backed by a single CSV document.
//!
//! The file carries a header row `ReviewId,ReviewBody,Location,Timestamp`
//! followed by one record per review. Reads decode the whole file; writes
//! encode the whole collection into a staged sibling file and rename it
//! over the original, so readers never observe a half-written document.
//! Extra columns are ignored on read and dropped on the next write.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::debug;
use uuid::Uuid;

use crate::domain::Review;
use crate::domain::ports::{ReviewStore, ReviewStoreError};

/// Column names, in write order.
pub const REVIEW_COLUMNS: [&str; 4] = ["ReviewId", "ReviewBody", "Location", "Timestamp"];

/// [`ReviewStore`] persisting to a CSV file on the local filesystem.
///
/// No locking is performed. Concurrent submissions each load, append and
/// rewrite the file, so the last rename wins.
#[derive(Debug, Clone)]
pub struct CsvReviewStore {
    path: PathBuf,
}

impl CsvReviewStore {
    /// Store reading and writing the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Split `path` into the directory to open and the file name within it.
fn locate(path: &Path) -> Option<(&Path, &Path)> {
    let file_name = Path::new(path.file_name()?);
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some((parent, file_name))
}

fn read_error(path: &Path, error: io::Error) -> ReviewStoreError {
    if error.kind() == io::ErrorKind::NotFound {
        ReviewStoreError::missing(path.display().to_string())
    } else {
        ReviewStoreError::read(format!("{}: {error}", path.display()))
    }
}

fn write_error(path: &Path, error: impl std::fmt::Display) -> ReviewStoreError {
    ReviewStoreError::write(format!("{}: {error}", path.display()))
}

fn read_reviews(path: &Path) -> Result<Vec<Review>, ReviewStoreError> {
    let (dir_path, file_name) =
        locate(path).ok_or_else(|| ReviewStoreError::missing(path.display().to_string()))?;
    let dir = Dir::open_ambient_dir(dir_path, ambient_authority())
        .map_err(|error| read_error(path, error))?;
    let bytes = dir.read(file_name).map_err(|error| read_error(path, error))?;
    decode_reviews(&bytes)
}

fn decode_reviews(bytes: &[u8]) -> Result<Vec<Review>, ReviewStoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|error| ReviewStoreError::malformed(error.to_string()))?;
    if let Some(column) = REVIEW_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(ReviewStoreError::malformed(format!(
            "missing column {column}"
        )));
    }
    reader
        .deserialize::<Review>()
        .map(|record| record.map_err(|error| ReviewStoreError::malformed(error.to_string())))
        .collect()
}

fn encode_reviews(reviews: &[Review]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(REVIEW_COLUMNS)?;
    for review in reviews {
        writer.serialize(review)?;
    }
    writer
        .into_inner()
        .map_err(|error| csv::Error::from(error.into_error()))
}

fn write_reviews(path: &Path, reviews: &[Review]) -> Result<(), ReviewStoreError> {
    let (dir_path, file_name) =
        locate(path).ok_or_else(|| write_error(path, "path has no file name"))?;
    let bytes = encode_reviews(reviews).map_err(|error| write_error(path, error))?;
    let dir = Dir::open_ambient_dir(dir_path, ambient_authority())
        .map_err(|error| write_error(path, error))?;

    let staged = PathBuf::from(format!(
        ".{}.tmp-{}",
        file_name.display(),
        Uuid::new_v4().simple()
    ));
    let result = dir
        .write(&staged, &bytes)
        .and_then(|()| dir.rename(&staged, &dir, file_name));
    if let Err(error) = result {
        let _cleanup_result = dir.remove_file(&staged);
        return Err(write_error(path, error));
    }
    Ok(())
}

#[async_trait]
impl ReviewStore for CsvReviewStore {
    async fn load_all(&self) -> Result<Vec<Review>, ReviewStoreError> {
        let path = self.path.clone();
        let reviews = tokio::task::spawn_blocking(move || read_reviews(&path))
            .await
            .map_err(|error| ReviewStoreError::read(error.to_string()))??;
        debug!(path = %self.path.display(), count = reviews.len(), "loaded reviews");
        Ok(reviews)
    }

    async fn save_all(&self, reviews: &[Review]) -> Result<(), ReviewStoreError> {
        let path = self.path.clone();
        let reviews = reviews.to_vec();
        let count = reviews.len();
        tokio::task::spawn_blocking(move || write_reviews(&path, &reviews))
            .await
            .map_err(|error| ReviewStoreError::write(error.to_string()))??;
        debug!(path = %self.path.display(), count, "saved reviews");
        Ok(())
    }
}
