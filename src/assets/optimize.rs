//! PNG asset optimization
//!
//! Re-encodes PNG files losslessly with maximum compression and keeps the
//! result only when it is strictly smaller than the original.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageEncoder, ImageError, ImageFormat};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("failed to scan {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// Outcome for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub original_size: u64,
    /// Size on disk after processing
    pub size: u64,
    /// Whether the file was rewritten
    pub optimized: bool,
}

impl FileReport {
    pub fn saved(&self) -> u64 {
        self.original_size - self.size
    }

    /// One-line summary: "✓ gear.png: 12.4KB → 9.8KB"
    pub fn summary(&self) -> String {
        let status = if self.optimized { "✓" } else { "–" };
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        format!(
            "{} {}: {} → {}",
            status,
            name,
            format_kb(self.original_size),
            format_kb(self.size)
        )
    }
}

/// Totals for a directory run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn count(&self) -> usize {
        self.files.len()
    }

    pub fn optimized_count(&self) -> usize {
        self.files.iter().filter(|f| f.optimized).count()
    }

    pub fn total_saved(&self) -> u64 {
        self.files.iter().map(FileReport::saved).sum()
    }

    pub fn summary(&self) -> String {
        format!(
            "Optimized {} images, saved {} total.",
            self.count(),
            format_kb(self.total_saved())
        )
    }
}

/// Format a byte count as kilobytes with one decimal ("12.4KB")
pub fn format_kb(bytes: u64) -> String {
    format!("{:.1}KB", bytes as f64 / 1024.0)
}

/// Check whether a path has a `.png` extension (any case)
pub fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// A candidate encoding replaces the original only if strictly smaller
pub fn should_replace(original_size: u64, candidate_size: usize) -> bool {
    (candidate_size as u64) < original_size
}

/// Drop an alpha channel that is fully opaque. Pixel values are unchanged.
pub fn reduce_channels(image: DynamicImage) -> DynamicImage {
    match &image {
        DynamicImage::ImageRgba8(buf) if buf.pixels().all(|p| p.0[3] == u8::MAX) => {
            DynamicImage::ImageRgb8(image.to_rgb8())
        }
        DynamicImage::ImageLumaA8(buf) if buf.pixels().all(|p| p.0[1] == u8::MAX) => {
            DynamicImage::ImageLuma8(image.to_luma8())
        }
        DynamicImage::ImageRgba16(buf) if buf.pixels().all(|p| p.0[3] == u16::MAX) => {
            DynamicImage::ImageRgb16(image.to_rgb16())
        }
        DynamicImage::ImageLumaA16(buf) if buf.pixels().all(|p| p.0[1] == u16::MAX) => {
            DynamicImage::ImageLuma16(image.to_luma16())
        }
        _ => image,
    }
}

/// Encode with maximum compression and adaptive row filtering
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, ImageError> {
    let mut buffer = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive);

    encoder.write_image(
        image.as_bytes(),
        image.width(),
        image.height(),
        image.color().into(),
    )?;

    Ok(buffer)
}

/// Optimize one PNG file in place
pub fn optimize_png(path: &Path) -> Result<FileReport, OptimizeError> {
    let original = fs::read(path).map_err(|source| OptimizeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let original_size = original.len() as u64;

    let image = image::load_from_memory_with_format(&original, ImageFormat::Png).map_err(
        |source| OptimizeError::Decode {
            path: path.to_path_buf(),
            source,
        },
    )?;

    let encoded = encode_png(&reduce_channels(image)).map_err(|source| OptimizeError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    if !should_replace(original_size, encoded.len()) {
        log::debug!("{:?}: re-encoding not smaller, kept", path);
        return Ok(FileReport {
            path: path.to_path_buf(),
            original_size,
            size: original_size,
            optimized: false,
        });
    }

    fs::write(path, &encoded).map_err(|source| OptimizeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileReport {
        path: path.to_path_buf(),
        original_size,
        size: encoded.len() as u64,
        optimized: true,
    })
}

/// Optimize every PNG under `dir`, in file name order.
///
/// `on_file` is called after each file. The first failure aborts the run.
pub fn optimize_dir<F>(dir: &Path, mut on_file: F) -> Result<BatchReport, OptimizeError>
where
    F: FnMut(&FileReport),
{
    let mut report = BatchReport::default();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| OptimizeError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() || !is_png(entry.path()) {
            continue;
        }

        let file = optimize_png(entry.path())?;
        on_file(&file);
        report.files.push(file);
    }

    log::info!(
        "Processed {} PNG files under {:?}, {} rewritten",
        report.count(),
        dir,
        report.optimized_count()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn gradient(alpha: u8) -> RgbaImage {
        RgbaImage::from_fn(32, 32, |x, y| Rgba([(x * 8) as u8, (y * 8) as u8, 128, alpha]))
    }

    fn write_png(path: &Path, image: &RgbaImage) {
        image.save_with_format(path, ImageFormat::Png).unwrap();
    }

    #[test]
    fn test_is_png() {
        assert!(is_png(Path::new("a/b/gear.png")));
        assert!(is_png(Path::new("GEAR.PNG")));
        assert!(!is_png(Path::new("gear.jpg")));
        assert!(!is_png(Path::new("png")));
    }

    #[test]
    fn test_should_replace_only_when_smaller() {
        assert!(should_replace(1000, 999));
        assert!(!should_replace(1000, 1000));
        assert!(!should_replace(1000, 1200));
    }

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(0), "0.0KB");
        assert_eq!(format_kb(1024), "1.0KB");
        assert_eq!(format_kb(1536), "1.5KB");
    }

    #[test]
    fn test_reduce_drops_opaque_alpha_only() {
        let opaque = reduce_channels(DynamicImage::ImageRgba8(gradient(255)));
        assert!(matches!(opaque, DynamicImage::ImageRgb8(_)));

        let translucent = reduce_channels(DynamicImage::ImageRgba8(gradient(200)));
        assert!(matches!(translucent, DynamicImage::ImageRgba8(_)));
    }

    #[test]
    fn test_encoding_is_lossless() {
        let source = DynamicImage::ImageRgba8(gradient(255));
        let encoded = encode_png(&reduce_channels(source.clone())).unwrap();
        let decoded = image::load_from_memory_with_format(&encoded, ImageFormat::Png).unwrap();
        assert_eq!(decoded.to_rgba8(), source.to_rgba8());
    }

    #[test]
    fn test_optimize_png_never_grows_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gear.png");
        write_png(&path, &gradient(255));
        let before = fs::read(&path).unwrap();

        let report = optimize_png(&path).unwrap();
        let after = fs::read(&path).unwrap();

        assert_eq!(report.original_size, before.len() as u64);
        assert!(report.size <= report.original_size);
        assert_eq!(after.len() as u64, report.size);
        if report.optimized {
            assert!(report.size < report.original_size);
        } else {
            assert_eq!(after, before);
        }

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.to_rgba8(), gradient(255));
    }

    #[test]
    fn test_optimize_dir_recurses_and_skips_other_files() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("items").join("arc");
        fs::create_dir_all(&nested).unwrap();

        write_png(&dir.path().join("a.png"), &gradient(255));
        write_png(&nested.join("b.PNG"), &gradient(128));
        fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

        let mut seen = Vec::new();
        let report = optimize_dir(dir.path(), |file| seen.push(file.summary())).unwrap();

        assert_eq!(report.count(), 2);
        assert_eq!(seen.len(), 2);
        assert!(seen[0].contains("a.png"));
        assert!(seen[1].contains("b.PNG"));
        assert_eq!(fs::read_to_string(dir.path().join("notes.txt")).unwrap(), "not an image");
        assert!(report.summary().starts_with("Optimized 2 images, saved "));
    }

    #[test]
    fn test_corrupt_png_aborts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.png"), b"definitely not a png").unwrap();

        let result = optimize_dir(dir.path(), |_| {});
        assert!(matches!(result, Err(OptimizeError::Decode { .. })));
    }

    #[test]
    fn test_summary_line() {
        let report = FileReport {
            path: PathBuf::from("img/gear.png"),
            original_size: 2048,
            size: 1024,
            optimized: true,
        };
        assert_eq!(report.summary(), "✓ gear.png: 2.0KB → 1.0KB");
        assert_eq!(report.saved(), 1024);
    }
}
