//! Visual styles for segment digits

/// The five digit styles the renderer can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Style {
    /// Burroughs Panaplex gas-discharge segments: thick, square-ended
    Panaplex,
    /// Bar-segment LED display
    LedBar,
    /// Dot-matrix LED display; the only style with segments H to N
    LedDot,
    /// Vacuum fluorescent display: tapered segments
    #[default]
    Vfd,
    /// Pre-rasterised petrol station price digits, blitted from an atlas
    PetrolStation,
}

impl Style {
    /// All styles, in console key order `n v w x y`
    pub const ALL: [Style; 5] = [
        Style::PetrolStation,
        Style::Vfd,
        Style::LedDot,
        Style::Panaplex,
        Style::LedBar,
    ];

    /// Whether this style draws from the segment tables
    pub fn uses_segments(&self) -> bool {
        !matches!(self, Style::PetrolStation)
    }
}
