use thiserror::Error;

/// An image could not be fetched or decoded.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("failed to load image {url}: {reason}")]
pub struct LoadError {
    pub url: String,
    pub reason: String,
}

impl LoadError {
    pub fn new(url: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CarouselError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("carousel needs at least one image")]
    Empty,
    #[error("image {url} has degenerate size {width}x{height}")]
    DegenerateImage { url: String, width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, CarouselError>;
