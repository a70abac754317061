//! Built-in 5x8 bitmap font.
//!
//! The atlas is 1024x9 texels packed one bit per texel, row-major, MSB first.
//! Each glyph occupies a 5 texel wide column; the glyph table maps a byte to
//! the texel x of its column. Bytes without a glyph map to a blank cell.

/// Byte to texel-x offset of the glyph column in [`FONT_BITMAP`].
#[rustfmt::skip]
pub(crate) const GLYPH_OFFSETS: [u16; 256] = [
    0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce,
    0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce,
    0x0ce, 0x201, 0x209, 0x211, 0x219, 0x221, 0x229, 0x231, 0x239, 0x241, 0x249, 0x251, 0x259, 0x261, 0x269, 0x271,
    0x1b1, 0x1b9, 0x1c1, 0x1c9, 0x1d1, 0x1d9, 0x1e1, 0x1e9, 0x1f1, 0x1f9, 0x279, 0x281, 0x289, 0x291, 0x299, 0x2a1,
    0x2a9, 0x001, 0x009, 0x011, 0x019, 0x021, 0x029, 0x031, 0x039, 0x041, 0x049, 0x051, 0x059, 0x061, 0x069, 0x071,
    0x079, 0x081, 0x089, 0x091, 0x099, 0x0a1, 0x0a9, 0x0b1, 0x0b9, 0x0c1, 0x0c9, 0x2b1, 0x2b9, 0x2c1, 0x2c9, 0x2d1,
    0x0ce, 0x0d9, 0x0e1, 0x0e9, 0x0f1, 0x0f9, 0x101, 0x109, 0x111, 0x119, 0x121, 0x129, 0x131, 0x139, 0x141, 0x149,
    0x151, 0x159, 0x161, 0x169, 0x171, 0x179, 0x181, 0x189, 0x191, 0x199, 0x1a1, 0x2d9, 0x2e1, 0x2e9, 0x2f1, 0x0ce,
    0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce,
    0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce,
    0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce,
    0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce,
    0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce,
    0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce,
    0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce,
    0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce, 0x0ce,
];

/// Packed 1024x9 monochrome glyph bitmap.
#[rustfmt::skip]
pub(crate) const FONT_BITMAP: [u8; 1152] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x10, 0x78, 0x38, 0x78, 0x7c, 0x7c, 0x3c, 0x44, 0x38, 0x04, 0x44, 0x40, 0x44, 0x44, 0x38, 0x78,
    0x38, 0x78, 0x38, 0x7c, 0x44, 0x44, 0x44, 0x44, 0x44, 0x7c, 0x00, 0x00, 0x40, 0x00, 0x04, 0x00,
    0x18, 0x00, 0x40, 0x10, 0x08, 0x40, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x38, 0x10, 0x38, 0x7c, 0x08, 0x7c, 0x1c, 0x7c, 0x38, 0x38,
    0x10, 0x28, 0x28, 0x10, 0x00, 0x20, 0x10, 0x08, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x04, 0x00, 0x20, 0x38, 0x38, 0x70, 0x00, 0x1c, 0x10, 0x00, 0x1c, 0x10, 0x70, 0x30, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x28, 0x44, 0x44, 0x44, 0x40, 0x40, 0x40, 0x44, 0x10, 0x04, 0x48, 0x40, 0x6c, 0x44, 0x44, 0x44,
    0x44, 0x44, 0x44, 0x10, 0x44, 0x44, 0x44, 0x44, 0x44, 0x04, 0x00, 0x00, 0x40, 0x00, 0x04, 0x00,
    0x24, 0x00, 0x40, 0x00, 0x00, 0x40, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x44, 0x30, 0x44, 0x04, 0x18, 0x40, 0x20, 0x04, 0x44, 0x44,
    0x10, 0x28, 0x28, 0x3c, 0x44, 0x50, 0x10, 0x10, 0x08, 0x54, 0x10, 0x00, 0x00, 0x00, 0x04, 0x00,
    0x00, 0x08, 0x00, 0x10, 0x44, 0x44, 0x40, 0x40, 0x04, 0x28, 0x00, 0x30, 0x10, 0x18, 0x58, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x44, 0x44, 0x40, 0x44, 0x40, 0x40, 0x40, 0x44, 0x10, 0x04, 0x50, 0x40, 0x54, 0x64, 0x44, 0x44,
    0x44, 0x44, 0x40, 0x10, 0x44, 0x44, 0x44, 0x28, 0x28, 0x08, 0x00, 0x38, 0x78, 0x3c, 0x3c, 0x38,
    0x20, 0x38, 0x78, 0x30, 0x18, 0x44, 0x10, 0x6c, 0x78, 0x38, 0x78, 0x3c, 0x5c, 0x3c, 0x3c, 0x44,
    0x44, 0x44, 0x44, 0x44, 0x7c, 0x00, 0x4c, 0x10, 0x04, 0x08, 0x28, 0x78, 0x40, 0x08, 0x44, 0x44,
    0x10, 0x00, 0x7c, 0x50, 0x08, 0x50, 0x00, 0x20, 0x04, 0x38, 0x10, 0x00, 0x00, 0x00, 0x08, 0x10,
    0x10, 0x10, 0x7c, 0x08, 0x08, 0x54, 0x40, 0x20, 0x04, 0x44, 0x00, 0x30, 0x10, 0x18, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x44, 0x78, 0x40, 0x44, 0x78, 0x78, 0x40, 0x7c, 0x10, 0x04, 0x60, 0x40, 0x54, 0x54, 0x44, 0x78,
    0x44, 0x78, 0x38, 0x10, 0x44, 0x44, 0x54, 0x10, 0x10, 0x10, 0x00, 0x04, 0x44, 0x40, 0x44, 0x44,
    0x78, 0x44, 0x44, 0x10, 0x08, 0x48, 0x10, 0x54, 0x44, 0x44, 0x44, 0x44, 0x60, 0x40, 0x10, 0x44,
    0x44, 0x44, 0x28, 0x44, 0x08, 0x00, 0x54, 0x10, 0x18, 0x18, 0x48, 0x04, 0x78, 0x10, 0x38, 0x3c,
    0x10, 0x00, 0x28, 0x38, 0x10, 0x20, 0x00, 0x20, 0x04, 0x10, 0x7c, 0x00, 0x7c, 0x00, 0x10, 0x00,
    0x00, 0x20, 0x00, 0x04, 0x10, 0x5c, 0x40, 0x10, 0x04, 0x00, 0x00, 0x60, 0x10, 0x0c, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x7c, 0x44, 0x40, 0x44, 0x40, 0x40, 0x4c, 0x44, 0x10, 0x04, 0x50, 0x40, 0x44, 0x4c, 0x44, 0x40,
    0x54, 0x50, 0x04, 0x10, 0x44, 0x44, 0x54, 0x28, 0x10, 0x20, 0x00, 0x3c, 0x44, 0x40, 0x44, 0x7c,
    0x20, 0x44, 0x44, 0x10, 0x08, 0x70, 0x10, 0x54, 0x44, 0x44, 0x44, 0x44, 0x40, 0x38, 0x10, 0x44,
    0x44, 0x54, 0x10, 0x44, 0x10, 0x00, 0x64, 0x10, 0x20, 0x04, 0x7c, 0x04, 0x44, 0x20, 0x44, 0x04,
    0x10, 0x00, 0x7c, 0x14, 0x20, 0x54, 0x00, 0x20, 0x04, 0x38, 0x10, 0x10, 0x00, 0x00, 0x20, 0x10,
    0x10, 0x10, 0x7c, 0x08, 0x10, 0x58, 0x40, 0x08, 0x04, 0x00, 0x00, 0x30, 0x10, 0x18, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x44, 0x44, 0x44, 0x44, 0x40, 0x40, 0x44, 0x44, 0x10, 0x44, 0x48, 0x40, 0x44, 0x44, 0x44, 0x40,
    0x48, 0x48, 0x44, 0x10, 0x44, 0x28, 0x6c, 0x44, 0x10, 0x40, 0x00, 0x44, 0x44, 0x40, 0x44, 0x40,
    0x20, 0x3c, 0x44, 0x10, 0x08, 0x48, 0x10, 0x54, 0x44, 0x44, 0x44, 0x44, 0x40, 0x04, 0x12, 0x4c,
    0x28, 0x54, 0x28, 0x3c, 0x20, 0x00, 0x44, 0x10, 0x40, 0x44, 0x08, 0x44, 0x44, 0x20, 0x44, 0x08,
    0x00, 0x00, 0x28, 0x78, 0x44, 0x48, 0x00, 0x10, 0x08, 0x54, 0x10, 0x10, 0x00, 0x00, 0x40, 0x00,
    0x10, 0x08, 0x00, 0x10, 0x00, 0x40, 0x40, 0x04, 0x04, 0x00, 0x00, 0x30, 0x10, 0x18, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x44, 0x78, 0x38, 0x78, 0x7c, 0x40, 0x3c, 0x44, 0x38, 0x38, 0x44, 0x7c, 0x44, 0x44, 0x38, 0x40,
    0x34, 0x44, 0x38, 0x10, 0x38, 0x10, 0x44, 0x44, 0x10, 0x7c, 0x00, 0x3c, 0x78, 0x3c, 0x3c, 0x3c,
    0x20, 0x04, 0x44, 0x38, 0x48, 0x44, 0x38, 0x44, 0x44, 0x38, 0x78, 0x3c, 0x40, 0x78, 0x0c, 0x34,
    0x10, 0x6c, 0x44, 0x04, 0x7c, 0x00, 0x38, 0x38, 0x7c, 0x38, 0x08, 0x38, 0x38, 0x20, 0x38, 0x70,
    0x10, 0x00, 0x28, 0x10, 0x00, 0x34, 0x00, 0x08, 0x10, 0x10, 0x00, 0x20, 0x00, 0x10, 0x00, 0x00,
    0x20, 0x04, 0x00, 0x20, 0x10, 0x3c, 0x70, 0x00, 0x1c, 0x00, 0x7c, 0x1c, 0x10, 0x70, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x38, 0x00, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x04, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x38, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
