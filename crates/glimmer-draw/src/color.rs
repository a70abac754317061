//! Packed color conversion.
//!
//! Overlay colors are given as `0xAARRGGBB`. Vertices carry them in the
//! backend's native order `0xAABBGGRR`, which is the same word with the red
//! and blue bytes exchanged.

/// Alpha bits of a packed color.
pub const ALPHA_MASK: u32 = 0xff00_0000;

/// Exchanges bits 0..8 and 16..24, leaving green and alpha in place.
#[inline]
pub const fn swap_red_blue(color: u32) -> u32 {
    ((color & 0xff) << 16) | ((color >> 16) & 0xff) | (color & 0xff00_ff00)
}

/// Native color with alpha forced to fully opaque. Used for text and flat boxes.
#[inline]
pub const fn to_native_opaque(color: u32) -> u32 {
    ALPHA_MASK | swap_red_blue(color)
}

/// Native color keeping the input alpha. Used for line strips.
#[inline]
pub const fn to_native(color: u32) -> u32 {
    swap_red_blue(color)
}

/// Top and bottom colors of a shaded box, in native order.
///
/// Every channel is averaged with the brightest channel (at least 30) for the
/// top and with the darkest channel (at most 180) for the bottom. Alpha is
/// kept from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub top: u32,
    pub bottom: u32,
}

impl Gradient {
    pub fn shade(color: u32) -> Self {
        let r = (color >> 16) & 0xff;
        let g = (color >> 8) & 0xff;
        let b = color & 0xff;
        let hi = r.max(g).max(b).max(30);
        let lo = r.min(g).min(b).min(180);
        let alpha = color & ALPHA_MASK;

        let pack = |toward: u32| {
            let r = ((r + toward) / 2) & 0xff;
            let g = ((g + toward) / 2) & 0xff;
            let b = ((b + toward) / 2) & 0xff;
            r | (g << 8) | (b << 16) | alpha
        };

        Self {
            top: pack(hi),
            bottom: pack(lo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_red_blue() {
        assert_eq!(swap_red_blue(0xaabb_ccdd), 0xaadd_ccbb);
        assert_eq!(swap_red_blue(0x0011_2233), 0x0033_2211);
    }

    #[test]
    fn test_swap_is_an_involution() {
        for color in [0u32, 0xffff_ffff, 0x1234_5678, 0x80ff_0001] {
            assert_eq!(swap_red_blue(swap_red_blue(color)), color);
        }
    }

    #[test]
    fn test_opaque_forces_alpha() {
        assert_eq!(to_native_opaque(0x0011_2233), 0xff33_2211);
        assert_eq!(to_native_opaque(0x80ff_ffff), 0xffff_ffff);
    }

    #[test]
    fn test_native_keeps_alpha() {
        assert_eq!(to_native(0x8011_2233), 0x8033_2211);
        assert_eq!(to_native(0x0000_00ff), 0x00ff_0000);
    }

    #[test]
    fn test_shade_grey() {
        // r = g = b = 100: hi = 100, lo = 100, both halves stay at 100.
        let gradient = Gradient::shade(0xff64_6464);
        assert_eq!(gradient.top, 0xff64_6464);
        assert_eq!(gradient.bottom, 0xff64_6464);
    }

    #[test]
    fn test_shade_mixed_channels() {
        // r = 200, g = 100, b = 0 -> hi = 200, lo = 0.
        let gradient = Gradient::shade(0x80c8_6400);
        // top: r = 200, g = 150, b = 100; native order puts r low.
        assert_eq!(gradient.top, 0x8064_96c8);
        // bottom: r = 100, g = 50, b = 0.
        assert_eq!(gradient.bottom, 0x8000_3264);
    }

    #[test]
    fn test_shade_clamps_dark_and_bright() {
        // Black: hi is raised to 30, lo is 0.
        let black = Gradient::shade(0xff00_0000);
        assert_eq!(black.top, 0xff0f_0f0f);
        assert_eq!(black.bottom, 0xff00_0000);

        // White: hi is 255, lo is capped at 180.
        let white = Gradient::shade(0x00ff_ffff);
        assert_eq!(white.top, 0x00ff_ffff);
        assert_eq!(white.bottom, 0x00d9_d9d9);
    }
}
