//! HUD text rendering
//!
//! Glyph outlines are rasterized on the CPU with `ab_glyph`; every covered
//! pixel becomes a 1×1 alpha-blended quad in the regular color pipeline, so
//! text needs no texture atlas or extra shader. Laid-out strings are cached
//! because the score and lives labels rarely change.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use glam::Vec2;

use super::shapes::push_rect;
use super::vertex::Vertex;

/// Coverage below this is skipped (anti-aliasing fringe)
const MIN_COVERAGE: f32 = 0.05;
/// Cached layouts kept before the cache is flushed
const MAX_CACHED_LAYOUTS: usize = 64;

/// Failure to load an asset the renderer can live without
#[derive(Debug)]
pub enum ResourceError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    InvalidFont {
        path: PathBuf,
        reason: String,
    },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            ResourceError::InvalidFont { path, reason } => {
                write!(f, "{} is not a usable font: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Io { source, .. } => Some(source),
            ResourceError::InvalidFont { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LayoutKey {
    text: String,
    x: u32,
    y: u32,
    size: u32,
    color: [u32; 4],
}

impl LayoutKey {
    fn new(text: &str, top_left: Vec2, size: f32, color: [f32; 4]) -> Self {
        Self {
            text: text.to_string(),
            x: top_left.x.to_bits(),
            y: top_left.y.to_bits(),
            size: size.to_bits(),
            color: color.map(f32::to_bits),
        }
    }
}

/// Text layout over an optional font; without a font every layout is empty
#[derive(Default)]
pub struct TextRenderer {
    font: Option<FontVec>,
    cache: HashMap<LayoutKey, Vec<Vertex>>,
}

impl TextRenderer {
    /// Renderer that draws no text
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: Vec<u8>, path: &Path) -> Result<Self, ResourceError> {
        let font = FontVec::try_from_vec(bytes).map_err(|e| ResourceError::InvalidFont {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            font: Some(font),
            cache: HashMap::new(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let bytes = std::fs::read(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(bytes, path)
    }

    /// Load the font, or log the failure and continue without text
    pub fn load_or_disabled(path: &Path) -> Self {
        match Self::load(path) {
            Ok(text) => {
                log::info!("Loaded font {}", path.display());
                text
            }
            Err(e) => {
                log::error!("Error loading font: {e}");
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.font.is_some()
    }

    /// Lay out a single line with its top-left corner at `top_left`
    pub fn layout(&mut self, text: &str, top_left: Vec2, size: f32, color: [f32; 4]) -> &[Vertex] {
        let Some(font) = &self.font else {
            return &[];
        };

        if self.cache.len() >= MAX_CACHED_LAYOUTS {
            self.cache.clear();
        }

        let key = LayoutKey::new(text, top_left, size, color);
        self.cache
            .entry(key)
            .or_insert_with(|| rasterize(font, text, top_left, size, color))
            .as_slice()
    }
}

fn rasterize(font: &FontVec, text: &str, top_left: Vec2, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let mut caret = point(top_left.x, top_left.y + scaled.ascent());
    let mut previous: Option<GlyphId> = None;
    let mut vertices = Vec::new();

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = previous {
            caret.x += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, caret);
        caret.x += scaled.h_advance(id);
        previous = Some(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue; // whitespace
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|x, y, coverage| {
            if coverage < MIN_COVERAGE {
                return;
            }
            let mut pixel = color;
            pixel[3] *= coverage.min(1.0);
            push_rect(
                &mut vertices,
                Vec2::new(bounds.min.x + x as f32, bounds.min.y + y as f32),
                Vec2::ONE,
                pixel,
            );
        });
    }

    vertices
}
