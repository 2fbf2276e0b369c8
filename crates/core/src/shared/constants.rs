/// Versioned platform contract gating composition effect support.
pub const GRAPHICS_COMPOSITION_CONTRACT: &str = "GraphicsCompositionContract";

/// Minimum contract version providing effect factories and backdrop capture.
pub const GRAPHICS_COMPOSITION_MIN_VERSION: u16 = 3;

/// Packaged noise texture screened over the blurred backdrop.
pub const NOISE_TEXTURE_URI: &str = "app:///assets/noise.png";

/// Placeholder parameter bound to the live window backdrop.
pub const BACKDROP_PARAMETER: &str = "source";

/// Placeholder parameter bound to the decoded noise texture.
pub const NOISE_PARAMETER: &str = "NoiseImage";
