//! PNG output and file path generation

use image::imageops::FilterType;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Save an RGBA image to a PNG file, creating parent directories as needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save(path)?;
    Ok(())
}

/// Scale image by integer factor using nearest-neighbor interpolation.
///
/// This preserves crisp pixel edges for pixel art. A factor of 0 or 1 returns
/// the image unchanged.
pub fn scale_image(image: RgbaImage, factor: u8) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    let new_w = w * factor as u32;
    let new_h = h * factor as u32;
    image::imageops::resize(&image, new_w, new_h, FilterType::Nearest)
}

/// Output path for a rendered meta-sprite.
///
/// | Scenario | Output |
/// |----------|--------|
/// | No `-o` | `{input_stem}_{name}.png` next to the input |
/// | `-o out.png` | `out.png` |
/// | `-o dir/` | `dir/{name}.png` |
pub fn generate_output_path(input: &Path, name: &str, output_arg: Option<&Path>) -> PathBuf {
    match output_arg {
        Some(output) => {
            let is_dir = output.to_string_lossy().ends_with('/') || output.is_dir();
            if is_dir {
                output.join(format!("{}.png", name))
            } else {
                output.to_path_buf()
            }
        }
        None => {
            let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
            let file_name = format!("{}_{}.png", stem, name);
            match input.parent() {
                Some(parent) => parent.join(file_name),
                None => PathBuf::from(file_name),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    #[test]
    fn test_generate_output_path_default() {
        let path = generate_output_path(Path::new("assets/ships.json"), "hero", None);
        assert_eq!(path, PathBuf::from("assets/ships_hero.png"));
    }

    #[test]
    fn test_generate_output_path_explicit_file() {
        let path = generate_output_path(
            Path::new("ships.json"),
            "hero",
            Some(Path::new("out/frame.png")),
        );
        assert_eq!(path, PathBuf::from("out/frame.png"));
    }

    #[test]
    fn test_generate_output_path_directory() {
        let path = generate_output_path(Path::new("ships.json"), "hero", Some(Path::new("out/")));
        assert_eq!(path, PathBuf::from("out/hero.png"));
    }

    #[test]
    fn test_save_png_creates_parent_dirs() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = temp.path().join("nested").join("out.png");
        let image = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));

        save_png(&image, &path).expect("should save png");

        let loaded = image::open(&path).expect("should reopen png").to_rgba8();
        assert_eq!(loaded.dimensions(), (2, 2));
        assert_eq!(*loaded.get_pixel(1, 1), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_scale_image() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(1, 0, Rgba([0, 255, 0, 255]));

        let scaled = scale_image(image.clone(), 3);
        assert_eq!(scaled.dimensions(), (6, 3));
        assert_eq!(*scaled.get_pixel(5, 2), Rgba([0, 255, 0, 255]));
        assert_eq!(*scaled.get_pixel(0, 0), Rgba([0, 0, 0, 0]));

        assert_eq!(scale_image(image, 1).dimensions(), (2, 1));
    }
}
