// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia raster backend for chart scenes (PNG bytes/files and RGBA8 buffers).

pub mod error;
#[cfg(feature = "raster")]
mod raster;
#[cfg(feature = "raster")]
mod text;

use std::path::Path;

use fintrack_chart::Scene;

pub use error::{RenderError, Result};

/// Raster output settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterOptions {
    /// Device pixel ratio; output is `ceil(scene size * scale)` pixels.
    pub scale: f32,
    /// Skip text shapes; keeps pixel tests independent of installed fonts.
    pub draw_text: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 2.0, draw_text: true }
    }
}

/// Tightly packed RGBA8 pixels, unpremultiplied.
#[derive(Clone, Debug)]
pub struct RgbaImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

impl RgbaImage {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride + x as usize * 4;
        self.pixels.get(i..i + 4).and_then(|p| p.try_into().ok())
    }
}

/// Whether this build can rasterize.
pub const fn is_available() -> bool {
    cfg!(feature = "raster")
}

pub struct SkiaRenderer {
    options: RasterOptions,
    #[cfg(feature = "raster")]
    text: text::TextShaper,
}

impl SkiaRenderer {
    pub fn new(options: RasterOptions) -> Self {
        Self {
            options,
            #[cfg(feature = "raster")]
            text: text::TextShaper::new(),
        }
    }

    pub fn options(&self) -> RasterOptions {
        self.options
    }

    /// Encode `scene` as PNG bytes.
    pub fn render_png(&self, scene: &Scene) -> Result<Vec<u8>> {
        #[cfg(feature = "raster")]
        {
            raster::png_bytes(scene, &self.options, &self.text)
        }
        #[cfg(not(feature = "raster"))]
        {
            let _ = scene;
            Err(RenderError::BackendDisabled)
        }
    }

    pub fn render_rgba8(&self, scene: &Scene) -> Result<RgbaImage> {
        #[cfg(feature = "raster")]
        {
            raster::rgba8(scene, &self.options, &self.text)
        }
        #[cfg(not(feature = "raster"))]
        {
            let _ = scene;
            Err(RenderError::BackendDisabled)
        }
    }

    /// Render to a PNG file, creating parent directories.
    pub fn write_png(&self, scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_png(scene)?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        tracing::debug!(path = %path.display(), "wrote png");
        Ok(())
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(RasterOptions::default())
    }
}
