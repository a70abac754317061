//! Bitmap font atlas.
//!
//! The overlay font is a fixed-width monochrome bitmap packed one bit per
//! texel. [`FontAtlas::decode`] expands it once into an RGBA image for the
//! backend; [`GlyphTable`] maps bytes to glyph columns for text emission.

use crate::error::{DrawError, DrawResult};
use crate::font_data::{FONT_BITMAP, GLYPH_OFFSETS};

/// Fully opaque white texel.
pub const OPAQUE_TEXEL: u32 = 0xffff_ffff;
/// Fully transparent black texel.
pub const CLEAR_TEXEL: u32 = 0x0000_0000;

/// Glyph and atlas dimensions in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Width of one glyph cell.
    pub glyph_width: u32,
    /// Height of a glyph, without the shadow row.
    pub glyph_height: u32,
    pub atlas_width: u32,
    pub atlas_height: u32,
}

impl FontMetrics {
    /// Horizontal pen advance per glyph: one texel of spacing.
    pub fn advance(&self) -> f32 {
        (self.glyph_width + 1) as f32
    }

    /// Height of a glyph quad on screen: the glyph plus its shadow row.
    pub fn line_height(&self) -> f32 {
        (self.glyph_height + 1) as f32
    }

    /// Width of one glyph cell in texture space.
    pub fn glyph_u_width(&self) -> f32 {
        self.glyph_width as f32 / self.atlas_width as f32
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            glyph_width: 5,
            glyph_height: 8,
            atlas_width: 1024,
            atlas_height: 9,
        }
    }
}

/// Byte to glyph column lookup.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    metrics: FontMetrics,
    offsets: [u16; 256],
}

impl GlyphTable {
    pub fn new(metrics: FontMetrics, offsets: [u16; 256]) -> Self {
        Self { metrics, offsets }
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Texel x of the glyph column for `byte`.
    #[inline]
    pub fn offset(&self, byte: u8) -> u16 {
        self.offsets[byte as usize]
    }

    /// Left texture coordinate of the glyph for `byte`.
    #[inline]
    pub fn u(&self, byte: u8) -> f32 {
        self.offset(byte) as f32 / self.metrics.atlas_width as f32
    }

    /// Width in pixels of `text` when drawn with this table.
    pub fn text_width(&self, text: &str) -> f32 {
        text.len() as f32 * self.metrics.advance()
    }
}

/// Source data for a font: metrics, glyph table and packed bitmap.
#[derive(Debug, Clone)]
pub struct FontData {
    pub metrics: FontMetrics,
    pub glyph_offsets: [u16; 256],
    pub bitmap: Vec<u8>,
}

impl FontData {
    /// The built-in 5x8 overlay font.
    pub fn builtin() -> Self {
        Self {
            metrics: FontMetrics::default(),
            glyph_offsets: GLYPH_OFFSETS,
            bitmap: FONT_BITMAP.to_vec(),
        }
    }

    pub fn glyph_table(&self) -> GlyphTable {
        GlyphTable::new(self.metrics, self.glyph_offsets)
    }

    pub fn decode_atlas(&self) -> DrawResult<FontAtlas> {
        FontAtlas::decode(&self.bitmap, self.metrics.atlas_width, self.metrics.atlas_height)
    }
}

impl Default for FontData {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Decoded RGBA font image.
///
/// Texels are either [`CLEAR_TEXEL`] or [`OPAQUE_TEXEL`]. The last texel is
/// always opaque: primitives without a glyph use texture coordinates past the
/// edge, which clamp onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAtlas {
    width: u32,
    height: u32,
    texels: Vec<u32>,
}

impl FontAtlas {
    /// Unpack a row-major, MSB-first 1 bit per texel bitmap.
    pub fn decode(bits: &[u8], width: u32, height: u32) -> DrawResult<Self> {
        let texel_count = width as usize * height as usize;
        if texel_count == 0 || texel_count % 8 != 0 {
            return Err(DrawError::InvalidAtlasSize { width, height });
        }

        let expected = texel_count / 8;
        if bits.len() != expected {
            return Err(DrawError::InvalidFontBitmap {
                expected,
                actual: bits.len(),
            });
        }

        let mut texels = Vec::with_capacity(texel_count);
        for &byte in bits {
            for bit in (0..8).rev() {
                let set = byte & (1 << bit) != 0;
                texels.push(if set { OPAQUE_TEXEL } else { CLEAR_TEXEL });
            }
        }

        if let Some(last) = texels.last_mut() {
            *last = OPAQUE_TEXEL;
        }

        Ok(Self {
            width,
            height,
            texels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn texels(&self) -> &[u32] {
        &self.texels
    }

    /// Texels as tightly packed RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }

    pub fn texel(&self, x: u32, y: u32) -> u32 {
        self.texels[(y * self.width + x) as usize]
    }
}
