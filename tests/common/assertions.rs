//! Assertion helpers for tests.

use std::io::Cursor;

use pretty_assertions::assert_eq;

/// An indexed PNG read back without expansion.
pub struct IndexedPng {
    pub width: u32,
    pub height: u32,
    pub bit_depth: png::BitDepth,
    pub plte: Vec<[u8; 3]>,
    /// One index per pixel, unpacked
    pub indices: Vec<u8>,
}

/// Decode `bytes` as a palette PNG, asserting color type 3.
pub fn read_indexed_png(bytes: &[u8]) -> IndexedPng {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().expect("Output should be a valid PNG");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("Failed to decode frame");

    assert_eq!(info.color_type, png::ColorType::Indexed, "Expected indexed PNG");

    let plte = reader
        .info()
        .palette
        .as_ref()
        .expect("Indexed PNG should carry PLTE")
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();

    let bits = info.bit_depth as usize;
    let per_byte = 8 / bits;
    let mask = ((1u16 << bits) - 1) as u8;
    let mut indices = Vec::with_capacity((info.width * info.height) as usize);
    for row in buf.chunks(info.line_size).take(info.height as usize) {
        for x in 0..info.width as usize {
            let byte = row[x / per_byte];
            let shift = 8 - bits - (x % per_byte) * bits;
            indices.push((byte >> shift) & mask);
        }
    }

    IndexedPng {
        width: info.width,
        height: info.height,
        bit_depth: info.bit_depth,
        plte,
        indices,
    }
}

/// Assert every pixel of `rgb` is reproduced exactly through the palette.
pub fn assert_exact_reproduction(image: &IndexedPng, rgb: &[u8]) {
    let expanded: Vec<u8> = image
        .indices
        .iter()
        .flat_map(|&i| image.plte[i as usize])
        .collect();
    assert_eq!(expanded, rgb.to_vec(), "Indexed output should match input");
}

/// Assert `text` is JASC-PAL with `count` entries.
pub fn assert_jasc_header(text: &str, count: usize) {
    let count_line = count.to_string();
    let header: Vec<&str> = text.lines().take(3).collect();
    assert_eq!(header, vec!["JASC-PAL", "0100", count_line.as_str()]);
    assert_eq!(
        text.lines().count(),
        3 + count,
        "Expected {} entries in:\n{}",
        count,
        text
    );
}
