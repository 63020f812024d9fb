use log::Level;

/// A static image together with its intrinsic width in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageAsset {
    pub src: &'static str,
    pub width: u32,
}

impl ImageAsset {
    pub fn css_url(&self) -> String {
        format!("url({})", self.src)
    }
}

pub const STARS: ImageAsset = ImageAsset {
    src: "/assets/stars.png",
    width: 1024,
};

pub const GRID_LINES: ImageAsset = ImageAsset {
    src: "/assets/grid-lines.png",
    width: 1024,
};

/// One full horizontal pass of the star field.
pub const STARS_LOOP_MS: f64 = 60_000.0;

/// Vertical background offset, in pixels, as the panel scrolls through.
pub const PARALLAX_RANGE: (f64, f64) = (-100.0, 100.0);

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
