//! Character maps - glyph ramps ordered from darkest to brightest
//!
//! An intensity value (0-255) picks a glyph out of the ramp. The mapping is
//! `index = intensity * (len - 1) / 255` in integer math, which agrees with
//! the conventional float-floor formula at every u8 input.

/// Simple grayscale ramp.
pub const DEFAULT_CHARS: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Finer-grained ramp for smoother gradients.
pub const DETAILED_CHARS: [char; 23] = [
    ' ', '.', ',', ':', ';', 'i', 'l', 'I', 'L', 'Y', 'V', 'X', 'K', 'W', 'M', 'N', '8', 'B', '&',
    '%', '$', '#', '@',
];

/// An ordered glyph ramp used to render intensities as characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharMap {
    glyphs: Vec<char>,
}

impl CharMap {
    /// Build a map from a custom ramp. Returns None when the ramp is empty.
    pub fn new(glyphs: Vec<char>) -> Option<Self> {
        if glyphs.is_empty() {
            return None;
        }
        Some(Self { glyphs })
    }

    /// Look up a predefined ramp by name ("default" or "detailed").
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self {
                glyphs: DEFAULT_CHARS.to_vec(),
            }),
            "detailed" => Some(Self {
                glyphs: DETAILED_CHARS.to_vec(),
            }),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Map an intensity to a glyph.
    pub fn glyph(&self, intensity: u8) -> char {
        let index = (intensity as usize) * (self.glyphs.len() - 1) / 255;
        self.glyphs[index]
    }
}

impl Default for CharMap {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_CHARS.to_vec(),
        }
    }
}
