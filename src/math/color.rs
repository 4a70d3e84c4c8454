/// Split a `0xRRGGBB` value into sRGB channels in `[0, 1]`
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    [r, g, b]
}

/// Convert one sRGB-encoded channel to linear light
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` to linear RGB, ready for an sRGB render target
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    hex_to_rgb(hex).map(srgb_to_linear)
}
