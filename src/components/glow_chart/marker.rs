use std::path::{Path, PathBuf};

use log::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    #[error("marker image {0} does not exist")]
    Missing(PathBuf),
    #[error("failed to decode marker image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Side length of the generated marker, in texels.
pub const BLOB_SIZE: usize = 128;

pub fn load_marker_image(path: &Path) -> Result<egui::ColorImage, MarkerError> {
    if !path.exists() {
        return Err(MarkerError::Missing(path.to_owned()));
    }
    let image = image::open(path)
        .map_err(|source| MarkerError::Decode {
            path: path.to_owned(),
            source,
        })?
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        image.as_flat_samples().as_slice(),
    ))
}

/// Soft lavender glow with four thin rays, so that rotation is visible.
pub fn blob_image(size: usize) -> egui::ColorImage {
    let size = size.max(1);
    let mut rgba = Vec::with_capacity(size * size * 4);
    let half = size as f32 * 0.5;
    for row in 0..size {
        for col in 0..size {
            let dx = (col as f32 + 0.5 - half) / half;
            let dy = (row as f32 + 0.5 - half) / half;
            let r = (dx * dx + dy * dy).sqrt();
            let falloff = (1.0 - r).max(0.0);
            let core = falloff.powi(4);
            let halo = 0.35 * falloff.powi(2);
            let rays = falloff.powi(2) * (-(dx * dy).abs() * 60.0).exp();
            let alpha = (core + halo + 0.6 * rays).min(1.0);
            // Whiter towards the centre.
            let white = core.min(1.0);
            let red = 120.0 + 135.0 * white;
            let green = 96.0 + 159.0 * white;
            rgba.extend_from_slice(&[red as u8, green as u8, 255, (alpha * 255.0) as u8]);
        }
    }
    egui::ColorImage::from_rgba_unmultiplied([size, size], &rgba)
}

/// The marker image at `path`, or the generated blob.
pub fn marker_image(path: Option<&Path>) -> egui::ColorImage {
    match path.map(load_marker_image) {
        Some(Ok(image)) => {
            info!("loaded marker image {:?} ({}x{})", path, image.size[0], image.size[1]);
            image
        }
        Some(Err(err)) => {
            warn!("{err}; using generated marker");
            blob_image(BLOB_SIZE)
        }
        None => blob_image(BLOB_SIZE),
    }
}
