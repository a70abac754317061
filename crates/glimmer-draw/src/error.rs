//! Error types for draw context setup.

/// Errors raised while setting up the draw context or its backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Packed font bitmap does not match the declared atlas size.
    InvalidFontBitmap { expected: usize, actual: usize },

    /// Atlas dimensions cannot hold a packed 1 bit per texel image.
    InvalidAtlasSize { width: u32, height: u32 },

    /// The backend failed to create the font texture.
    TextureCreation(String),

    /// The backend is not usable (lost device, missing resources).
    BackendUnavailable(String),
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawError::InvalidFontBitmap { expected, actual } => write!(
                f,
                "Invalid font bitmap: expected {} bytes but got {}",
                expected, actual
            ),
            DrawError::InvalidAtlasSize { width, height } => write!(
                f,
                "Invalid font atlas size {}x{}: texel count must be a non-zero multiple of 8",
                width, height
            ),
            DrawError::TextureCreation(msg) => write!(f, "Failed to create font texture: {}", msg),
            DrawError::BackendUnavailable(msg) => write!(f, "Draw backend unavailable: {}", msg),
        }
    }
}

impl std::error::Error for DrawError {}

/// Result type for draw setup operations.
pub type DrawResult<T> = Result<T, DrawError>;
