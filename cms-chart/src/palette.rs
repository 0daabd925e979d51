//! Colour assignment for chart categories.

/// Fill colours, one per category slot.
pub const BACKGROUND_COLORS: [&str; 8] = [
    "rgba(75,192,192,0.4)",
    "rgba(54,162,235,0.4)",
    "rgba(255,206,86,0.4)",
    "rgba(231,233,237,0.4)",
    "rgba(153,102,255,0.4)",
    "rgba(255,159,64,0.4)",
    "rgba(255,99,132,0.4)",
    "rgba(201,203,207,0.4)",
];

/// Border colours, same hues as [`BACKGROUND_COLORS`] at full opacity.
pub const BORDER_COLORS: [&str; 8] = [
    "rgba(75,192,192,1)",
    "rgba(54,162,235,1)",
    "rgba(255,206,86,1)",
    "rgba(231,233,237,1)",
    "rgba(153,102,255,1)",
    "rgba(255,159,64,1)",
    "rgba(255,99,132,1)",
    "rgba(201,203,207,1)",
];

/// Paired fill/border colours for a series that does not cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColor {
    pub background: &'static str,
    pub border: &'static str,
}

pub const RED: FixedColor = FixedColor {
    background: "rgba(255, 99, 132, 0.6)",
    border: "rgba(255, 99, 132, 1)",
};

pub const BLUE: FixedColor = FixedColor {
    background: "rgba(54, 162, 235, 0.6)",
    border: "rgba(54, 162, 235, 1)",
};

/// An immutable fill/border palette indexed modulo its length.
///
/// The ninth category reuses the first colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    background: &'static [&'static str],
    border: &'static [&'static str],
}

impl Palette {
    pub const STANDARD: Palette = Palette {
        background: &BACKGROUND_COLORS,
        border: &BORDER_COLORS,
    };

    pub fn len(&self) -> usize {
        self.background.len()
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_empty()
    }

    pub fn background(&self, index: usize) -> &'static str {
        self.background[index % self.background.len()]
    }

    pub fn border(&self, index: usize) -> &'static str {
        self.border[index % self.border.len()]
    }

    /// Fill colours for `count` categories.
    pub fn backgrounds(&self, count: usize) -> Vec<String> {
        (0..count).map(|i| self.background(i).to_string()).collect()
    }

    /// Border colours for `count` categories.
    pub fn borders(&self, count: usize) -> Vec<String> {
        (0..count).map(|i| self.border(i).to_string()).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::STANDARD
    }
}

/// A stable "#rrggbb" colour for a series key (FNV-1a over the key bytes).
///
/// The same key gets the same colour on every call and in every chart.
pub fn color_for_key(key: &str) -> String {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in key.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    format!("#{:06x}", hash & 0x00ff_ffff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles_with_period_eight() {
        let palette = Palette::STANDARD;
        assert_eq!(palette.len(), 8);
        assert_eq!(palette.background(8), palette.background(0));
        assert_eq!(palette.border(9), palette.border(1));
        assert_eq!(palette.background(0), "rgba(75,192,192,0.4)");
        assert_eq!(palette.border(7), "rgba(201,203,207,1)");
    }

    #[test]
    fn test_backgrounds_and_borders() {
        let palette = Palette::default();
        let backgrounds = palette.backgrounds(10);
        let borders = palette.borders(10);
        assert_eq!(backgrounds.len(), 10);
        assert_eq!(backgrounds[8], backgrounds[0]);
        assert_eq!(borders[9], "rgba(54,162,235,1)");
        assert!(palette.backgrounds(0).is_empty());
    }

    #[test]
    fn test_color_for_key_is_stable() {
        let hanoi = color_for_key("Hanoi");
        assert_eq!(hanoi, color_for_key("Hanoi"));
        assert_eq!(hanoi.len(), 7);
        assert!(hanoi.starts_with('#'));
        assert!(hanoi[1..].chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(hanoi, color_for_key("Hue"));
    }

    #[test]
    fn test_color_for_empty_key() {
        // FNV-1a offset basis, low 24 bits
        assert_eq!(color_for_key(""), "#1c9dc5");
    }
}
