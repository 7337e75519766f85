//! Chart colours
//!
//! Kept as plain RGB triples so the core stays free of egui; the app converts
//! them with `Color32::from_rgb`.

pub type Rgb = [u8; 3];

/// Pie slice palette, cycled by slice index
pub const SLICE_PALETTE: [Rgb; 10] = [
    [0x00, 0x88, 0xFE], // #0088FE
    [0x00, 0xC4, 0x9F], // #00C49F
    [0xFF, 0xBB, 0x28], // #FFBB28
    [0xFF, 0x80, 0x42], // #FF8042
    [0x84, 0x5E, 0xC2], // #845EC2
    [0xD6, 0x5D, 0xB1], // #D65DB1
    [0xFF, 0x6F, 0x91], // #FF6F91
    [0xFF, 0xC7, 0x5F], // #FFC75F
    [0xF9, 0xF8, 0x71], // #F9F871
    [0x2C, 0x73, 0xD2], // #2C73D2
];

/// Single fill used for every bar
pub const BAR_FILL: Rgb = [0x88, 0x84, 0xD8]; // #8884d8

pub fn slice_color(index: usize) -> Rgb {
    SLICE_PALETTE[index % SLICE_PALETTE.len()]
}
