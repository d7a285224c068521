//! Builds the project list from command-line paths.
//!
//! Each argument is an image file or a directory of images. A `.txt` file
//! next to an image, sharing its stem, becomes that project's description.

use carousel_core::Project;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn title_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_default()
}

fn description_for(path: &Path) -> String {
    std::fs::read_to_string(path.with_extension("txt"))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn expand(path: PathBuf) -> anyhow::Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path]);
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&path)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| is_image_path(p))
        .collect();
    files.sort();
    Ok(files)
}

pub fn projects_from_args(args: impl IntoIterator<Item = PathBuf>) -> anyhow::Result<Vec<Project>> {
    let mut projects = Vec::new();
    for arg in args {
        for path in expand(arg)? {
            projects.push(Project::new(
                title_for(&path),
                description_for(&path),
                path.to_string_lossy(),
            ));
        }
    }
    if projects.is_empty() {
        anyhow::bail!("usage: carousel-native <image-or-directory>...");
    }
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_ignore_case() {
        assert!(is_image_path(Path::new("a/b/photo.JPG")));
        assert!(is_image_path(Path::new("shot.png")));
        assert!(!is_image_path(Path::new("notes.txt")));
        assert!(!is_image_path(Path::new("no_extension")));
    }

    #[test]
    fn titles_come_from_file_stems() {
        assert_eq!(title_for(Path::new("/x/my_first-shot.jpeg")), "my first shot");
    }

    #[test]
    fn directory_expands_to_sorted_images_with_sidecars() {
        let dir = std::env::temp_dir().join("carousel-native-catalog-test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        for name in ["b.png", "a.jpg", "readme.md"] {
            std::fs::write(dir.join(name), b"").unwrap();
        }
        std::fs::write(dir.join("a.txt"), "first line\nsecond\n").unwrap();

        let projects = projects_from_args([dir.clone()]).unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["a", "b"]);
        assert_eq!(projects[0].description, "first line\nsecond");
        assert_eq!(projects[1].description, "");
    }

    #[test]
    fn no_images_is_an_error() {
        assert!(projects_from_args(Vec::<PathBuf>::new()).is_err());
    }
}
