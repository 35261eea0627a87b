//! Color Codec
//!
//! Fixed palette of recognized color tokens with their Thai display names.
//! The store keeps colors as a comma-joined string of names (what the shop
//! staff reads in the spreadsheet); the UI works with hex tokens. Reverse
//! lookup never fails: an unrecognized or renamed color degrades to a
//! neutral placeholder.

/// Fallback token for names the palette no longer recognizes
pub const PLACEHOLDER_HEX: &str = "#cccccc";

/// One palette entry: hex token, localized display name, terminal RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub hex: &'static str,
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

/// Recognized colors, in picker display order
pub const PALETTE: [PaletteColor; 12] = [
    PaletteColor { hex: "#ef4444", name: "แดง", rgb: (0xef, 0x44, 0x44) },
    PaletteColor { hex: "#f97316", name: "ส้ม", rgb: (0xf9, 0x73, 0x16) },
    PaletteColor { hex: "#f59e0b", name: "เหลือง", rgb: (0xf5, 0x9e, 0x0b) },
    PaletteColor { hex: "#84cc16", name: "เขียวอ่อน", rgb: (0x84, 0xcc, 0x16) },
    PaletteColor { hex: "#10b981", name: "เขียว", rgb: (0x10, 0xb9, 0x81) },
    PaletteColor { hex: "#06b6d4", name: "ฟ้าคราม", rgb: (0x06, 0xb6, 0xd4) },
    PaletteColor { hex: "#3b82f6", name: "น้ำเงิน", rgb: (0x3b, 0x82, 0xf6) },
    PaletteColor { hex: "#8b5cf6", name: "ม่วง", rgb: (0x8b, 0x5c, 0xf6) },
    PaletteColor { hex: "#d946ef", name: "ชมพูเข้ม", rgb: (0xd9, 0x46, 0xef) },
    PaletteColor { hex: "#f43f5e", name: "ชมพู", rgb: (0xf4, 0x3f, 0x5e) },
    PaletteColor { hex: "#1f2937", name: "ดำ", rgb: (0x1f, 0x29, 0x37) },
    PaletteColor { hex: "#ffffff", name: "ขาว", rgb: (0xff, 0xff, 0xff) },
];

/// Display name for a hex token; unrecognized tokens pass through unchanged
pub fn name_of(hex: &str) -> &str {
    PALETTE
        .iter()
        .find(|c| c.hex == hex)
        .map(|c| c.name)
        .unwrap_or(hex)
}

/// Hex token for a display name; unrecognized names map to the placeholder
pub fn hex_of(name: &str) -> &'static str {
    PALETTE
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.hex)
        .unwrap_or(PLACEHOLDER_HEX)
}

/// Terminal RGB for a hex token ("#rrggbb"); falls back to placeholder grey
pub fn rgb_of(hex: &str) -> (u8, u8, u8) {
    if let Some(color) = PALETTE.iter().find(|c| c.hex == hex) {
        return color.rgb;
    }
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    // is_ascii guard keeps the byte slicing on char boundaries
    if digits.len() == 6
        && digits.is_ascii()
        && let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&digits[0..2], 16),
            u8::from_str_radix(&digits[2..4], 16),
            u8::from_str_radix(&digits[4..6], 16),
        )
    {
        return (r, g, b);
    }
    (0xcc, 0xcc, 0xcc)
}

/// Encode a selection of hex tokens into the stored name string
///
/// Names are joined with ", " in selection order. An empty selection
/// encodes to the empty string.
pub fn encode_selection<'a, I>(selection: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    selection
        .into_iter()
        .map(name_of)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decode a stored name string back to hex tokens for display
///
/// Splits on comma, trims each token, and looks each up independently.
/// Blank input decodes to no tokens. Returned tokens are palette entries
/// (or the placeholder), so they do not borrow from the input.
pub fn decode_names(stored: &str) -> Vec<&'static str> {
    if stored.trim().is_empty() {
        return Vec::new();
    }
    stored.split(',').map(|name| hex_of(name.trim())).collect()
}
