//! Piece image loading.
//!
//! Every piece identity (`wp`, `bK`, ...) maps to `<dir>/<id>.<ext>`. All
//! twelve are read up front so a missing file stops startup instead of
//! showing an empty square later.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chess_sim::Piece;
use iced::widget::{image, svg};
use iced::Element;
use tracing::debug;

use crate::error::AssetError;

#[derive(Debug, Clone)]
pub enum PieceImage {
    Svg(svg::Handle),
    Raster(image::Handle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Svg,
    Raster,
}

fn format_for(ext: &str) -> Result<Format, AssetError> {
    match ext.to_ascii_lowercase().as_str() {
        "svg" => Ok(Format::Svg),
        "png" | "jpg" | "jpeg" | "gif" | "bmp" => Ok(Format::Raster),
        _ => Err(AssetError::UnsupportedFormat(ext.to_string())),
    }
}

pub fn asset_path(dir: &Path, piece: Piece, ext: &str) -> PathBuf {
    dir.join(format!("{}.{}", piece.id(), ext))
}

/// The twelve piece images, drawn at a fixed size.
#[derive(Debug, Clone)]
pub struct PieceImages {
    images: HashMap<Piece, PieceImage>,
    size: f32,
}

impl PieceImages {
    /// Read every piece image from `dir`. `size` is the square edge the
    /// images are scaled to when drawn.
    pub fn load(dir: &Path, ext: &str, size: f32) -> Result<Self, AssetError> {
        let format = format_for(ext)?;
        let mut images = HashMap::with_capacity(12);

        for piece in Piece::all() {
            let path = asset_path(dir, piece, ext);
            let bytes = std::fs::read(&path).map_err(|source| AssetError::Missing {
                id: piece.id(),
                path: path.clone(),
                source,
            })?;
            debug!(id = piece.id(), path = %path.display(), bytes = bytes.len(), "loaded piece image");

            let handle = match format {
                Format::Svg => PieceImage::Svg(svg::Handle::from_memory(bytes)),
                Format::Raster => PieceImage::Raster(image::Handle::from_bytes(bytes)),
            };
            images.insert(piece, handle);
        }

        Ok(Self { images, size })
    }

    pub fn get(&self, piece: Piece) -> Option<&PieceImage> {
        self.images.get(&piece)
    }

    pub fn count(&self) -> usize {
        self.images.len()
    }

    /// Widget drawing `piece` scaled to the square size.
    pub fn view<'a, Message: 'a>(&self, piece: Piece) -> Option<Element<'a, Message>> {
        let size = self.size * 0.9;
        self.get(piece).map(|img| match img {
            PieceImage::Svg(h) => svg(h.clone()).width(size).height(size).into(),
            PieceImage::Raster(h) => image(h.clone()).width(size).height(size).into(),
        })
    }
}
