//! The fixed character palette used for rendering.

/// Number of brightness levels in [`PALETTE`].
pub const PALETTE_LEN: usize = 70;

/// Character density ramp (70 levels).
/// Characters ordered from densest (`@`, darkest pixels) to sparsest
/// (space, brightest pixels). Works well on light backgrounds and in
/// plain text files.
#[rustfmt::skip]
pub const PALETTE: [char; PALETTE_LEN] = [
    '@', '$', 'B', '%', '8', '&', 'W', 'M', '#', '*',
    'o', 'a', 'h', 'k', 'b', 'd', 'p', 'q', 'w', 'm',
    'Z', 'O', '0', 'Q', 'L', 'C', 'J', 'U', 'Y', 'X',
    'z', 'c', 'v', 'u', 'n', 'x', 'r', 'j', 'f', 't',
    '/', '\\', '|', '(', ')', '1', '{', '}', '[', ']',
    '?', '-', '_', '+', '~', '<', '>', 'i', '!', 'l',
    'I', ';', ':', ',', '"', '^', '`', '\'', '.', ' ',
];

/// Densest glyph, used for pure black.
pub const DARKEST: char = PALETTE[0];

/// Sparsest glyph, used for pure white.
pub const LIGHTEST: char = PALETTE[PALETTE_LEN - 1];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_palette_endpoints() {
        assert_eq!(DARKEST, '@');
        assert_eq!(LIGHTEST, ' ');
    }

    #[test]
    fn test_palette_is_ascii_and_unique() {
        let unique: HashSet<char> = PALETTE.iter().copied().collect();
        assert_eq!(unique.len(), PALETTE_LEN);
        assert!(PALETTE.iter().all(|c| c.is_ascii() && !c.is_ascii_control()));
    }
}
