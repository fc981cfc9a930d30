//! Agent colours handed out by the agent factory and read by renderers.

use std::fmt;

/// An 8-bit RGB colour.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const YELLOW:  Rgb = Rgb(255, 255, 0);
    pub const CYAN:    Rgb = Rgb(0, 255, 255);
    pub const MAGENTA: Rgb = Rgb(255, 0, 255);
    pub const ORANGE:  Rgb = Rgb(255, 165, 0);
    /// Every chaser gets this colour.
    pub const CHASER:  Rgb = Rgb(255, 50, 50);

    /// Seeker colours, assigned round-robin in spawn order.
    pub const DEFAULT_PALETTE: [Rgb; 4] = [Rgb::YELLOW, Rgb::CYAN, Rgb::MAGENTA, Rgb::ORANGE];

    /// A darker shade, used to draw protected seekers.
    pub fn dimmed(self) -> Rgb {
        Rgb(self.0 / 3, self.1 / 3, self.2 / 3)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}
