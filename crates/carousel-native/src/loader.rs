use carousel_core::gpu::TextureData;
use carousel_core::{ImageLoader, LoadError, LoadedImage};
use std::future::Future;

/// Reads images from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    type Texture = TextureData;

    fn load(&self, url: &str) -> impl Future<Output = Result<LoadedImage<TextureData>, LoadError>> {
        let path = url.to_string();
        async move {
            let bytes = std::fs::read(&path).map_err(|e| LoadError::new(&path, e))?;
            let ((width, height), texture) =
                TextureData::decode(&bytes).map_err(|e| LoadError::new(&path, e))?;
            log::debug!("[loader] {} -> {}x{}", path, width, height);
            Ok(LoadedImage {
                width,
                height,
                texture,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_its_path() {
        let err = pollster::block_on(FileImageLoader.load("/definitely/not/here.png"))
            .err()
            .unwrap();
        assert_eq!(err.url, "/definitely/not/here.png");
        assert!(!err.reason.is_empty());
    }

    #[test]
    fn undecodable_bytes_fail() {
        let path = std::env::temp_dir().join("carousel-native-not-an-image.png");
        std::fs::write(&path, b"plain text").unwrap();
        let url = path.to_string_lossy().into_owned();
        let result = pollster::block_on(FileImageLoader.load(&url));
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(e) if e.url == url));
    }
}
