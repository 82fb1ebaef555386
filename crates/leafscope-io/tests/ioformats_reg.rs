//! I/O formats regression test
//!
//! Format detection, PNG lossless round trip and JPEG encode/decode on the
//! synthetic test images.

use leafscope_io::{
    ImageFormat, IoError, detect_format, detect_format_from_bytes, read_image, read_image_mem,
    write_image, write_image_mem, write_jpeg_mem,
};
use leafscope_test::{RegParams, load_test_image};

#[test]
fn ioformats_reg() {
    let mut rp = RegParams::new("ioformats");

    let pixs = load_test_image("leaf64").expect("load leaf64");

    // --- Test 1: PNG memory round trip is lossless, alpha included ---
    eprintln!("=== PNG round trip ===");
    for name in ["leaf64", "leaf63", "translucent16"] {
        let pix = load_test_image(name).expect("load image");
        let bytes = write_image_mem(&pix, ImageFormat::Png).expect("encode png");
        rp.check(
            detect_format_from_bytes(&bytes).ok() == Some(ImageFormat::Png),
            "encoded PNG detected as PNG",
        );
        let back = read_image_mem(&bytes).expect("decode png");
        rp.compare_raster(&pix, &back);
        eprintln!("  {}: {} bytes", name, bytes.len());
    }

    // --- Test 2: JPEG keeps size, is opaque and close in color ---
    eprintln!("=== JPEG round trip ===");
    let bytes = write_jpeg_mem(&pixs, 95).expect("encode jpeg");
    rp.check(
        detect_format_from_bytes(&bytes).ok() == Some(ImageFormat::Jpeg),
        "encoded JPEG detected as JPEG",
    );
    let back = read_image_mem(&bytes).expect("decode jpeg");
    rp.compare_values(pixs.width() as f64, back.width() as f64, 0.0);
    rp.compare_values(pixs.height() as f64, back.height() as f64, 0.0);
    let (r0, g0, b0) = pixs.get_rgb(2, 2).expect("src pixel");
    let (r1, g1, b1, a1) = back.get_rgba(2, 2).expect("jpeg pixel");
    rp.compare_values(r0 as f64, r1 as f64, 12.0);
    rp.compare_values(g0 as f64, g1 as f64, 12.0);
    rp.compare_values(b0 as f64, b1 as f64, 12.0);
    rp.compare_values(255.0, a1 as f64, 0.0);

    // --- Test 3: unsupported and truncated headers ---
    eprintln!("=== Format detection ===");
    let gif = detect_format_from_bytes(b"GIF89a\x01\x00\x01\x00");
    rp.check(
        matches!(gif, Err(IoError::UnsupportedFormat(_))),
        "GIF rejected as unsupported",
    );
    let short = detect_format_from_bytes(&[0x89]);
    rp.check(matches!(short, Err(IoError::InvalidData(_))), "short header");
    rp.check(
        ImageFormat::from_extension("JPG") == Some(ImageFormat::Jpeg),
        "extension lookup is case-insensitive",
    );

    // --- Test 4: file round trip through the filesystem ---
    eprintln!("=== File round trip ===");
    let path = std::env::temp_dir().join(format!("leafscope_ioformats_{}.png", std::process::id()));
    write_image(&pixs, &path, ImageFormat::Png).expect("write png file");
    rp.check(
        detect_format(&path).ok() == Some(ImageFormat::Png),
        "file detected as PNG",
    );
    let back = read_image(&path).expect("read png file");
    rp.compare_raster(&pixs, &back);
    let _ = std::fs::remove_file(&path);

    assert!(rp.cleanup(), "ioformats regression test failed");
}
