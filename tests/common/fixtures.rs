//! Test images encoded as PNG in memory.

/// Encode 8-bit samples as a PNG.
pub fn png_bytes(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("Failed to write PNG header");
        writer
            .write_image_data(data)
            .expect("Failed to write PNG data");
    }
    buf
}

pub fn rgb_png(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
    png_bytes(width, height, png::ColorType::Rgb, data)
}

/// The 2x2 red, green, blue, white image.
pub fn four_colors() -> (Vec<u8>, Vec<u8>) {
    let data = vec![
        255, 0, 0, 0, 255, 0, //
        0, 0, 255, 255, 255, 255,
    ];
    (rgb_png(2, 2, &data), data)
}

/// A single flat color.
pub fn flat(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let data = rgb.repeat((width * height) as usize);
    rgb_png(width, height, &data)
}

/// Deterministic gradient with flat bands, RGB samples.
pub fn gradient_data(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            if y % 5 == 0 {
                data.extend_from_slice(&[20, 40, 200]);
            } else {
                data.extend_from_slice(&[
                    (x * 255 / width.max(1)) as u8,
                    (y * 255 / height.max(1)) as u8,
                    ((x + y) * 7 % 256) as u8,
                ]);
            }
        }
    }
    data
}

pub fn gradient(width: u32, height: u32) -> Vec<u8> {
    rgb_png(width, height, &gradient_data(width as usize, height as usize))
}
