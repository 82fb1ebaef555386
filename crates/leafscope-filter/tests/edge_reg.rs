//! Edge view regression test
//!
//! Sobel magnitude, skeleton, blueprint, direction and zero-crossing views
//! on synthetic images with known structure.

use leafscope_core::{LumaPlane, color};
use leafscope_filter::{
    EdgeOptions, blueprint, gradient_direction, gradient_magnitude, laplacian_response, skeleton,
    sobel_gradients, zero_crossing,
};
use leafscope_io::ImageFormat;
use leafscope_test::{RegParams, load_test_image};

#[test]
fn edge_reg() {
    let mut rp = RegParams::new("edge");
    let opts = EdgeOptions::default();

    let pixs = load_test_image("leaf64").expect("load leaf64");
    let w = pixs.width();
    let h = pixs.height();
    eprintln!("Image size: {}x{}", w, h);

    // --- Test 1: every view keeps the source size and is opaque ---
    let views = [
        ("magnitude", gradient_magnitude(&pixs).expect("gradient_magnitude")),
        ("skeleton", skeleton(&pixs, &opts).expect("skeleton")),
        ("blueprint", blueprint(&pixs, &opts).expect("blueprint")),
        ("direction", gradient_direction(&pixs, &opts).expect("gradient_direction")),
        ("zero-crossing", zero_crossing(&pixs).expect("zero_crossing")),
    ];
    for (name, view) in &views {
        rp.compare_values(w as f64, view.width() as f64, 0.0);
        rp.compare_values(h as f64, view.height() as f64, 0.0);
        let opaque = view.data().iter().all(|&p| color::alpha(p) == 255);
        rp.check(opaque, &format!("{name} output opaque"));
        rp.write_raster_and_check(view, ImageFormat::Png)
            .expect("write view");
    }

    // --- Test 2: the blade outline produces edges, the background does not ---
    let mag = &views[0].1;
    let corner = mag.get_rgb(0, 0).expect("corner");
    rp.check(corner == (0, 0, 0), "flat background has zero magnitude");
    let strong = mag.data().iter().filter(|&&p| color::red(p) > 50).count();
    eprintln!("  strong edge pixels: {}", strong);
    rp.check(strong > 0, "leaf outline has strong edges");

    // --- Test 3: skeleton is a subset of the magnitude ---
    let skel = &views[1].1;
    let subset = skel
        .pixels()
        .all(|(x, y, p)| p == color::BLACK || p == mag.get_pixel_unchecked(x, y));
    rp.check(subset, "skeleton pixels match magnitude or are black");

    // --- Test 4: blueprint uses exactly two colors ---
    let ink = color::compose_rgb(30, 64, 175);
    let two_tone = views[2].1.data().iter().all(|&p| p == ink || p == color::WHITE);
    rp.check(two_tone, "blueprint is white on ink");

    // --- Test 5: flat input gives vanishing Sobel and Laplacian responses ---
    let flat = load_test_image("flat8").expect("load flat8");
    let plane = LumaPlane::from_raster(&flat).expect("luma plane");
    let grad = sobel_gradients(&plane).expect("sobel_gradients");
    let max_g = grad
        .gx
        .data()
        .iter()
        .chain(grad.gy.data())
        .fold(0.0f32, |m, v| m.max(v.abs()));
    rp.compare_values(0.0, max_g as f64, 1e-3);
    let lap = laplacian_response(&plane).expect("laplacian_response");
    let max_l = lap.data().iter().fold(0.0f32, |m, v| m.max(v.abs()));
    rp.compare_values(0.0, max_l as f64, 1e-3);
    let flat_mag = gradient_magnitude(&flat).expect("flat magnitude");
    rp.check(
        flat_mag.data().iter().all(|&p| p == color::BLACK),
        "flat magnitude is all zero",
    );

    // --- Test 6: checkerboard cell borders saturate the magnitude ---
    let checker = load_test_image("checker16").expect("load checker16");
    let cmag = gradient_magnitude(&checker).expect("checker magnitude");
    rp.compare_values(255.0, color::red(cmag.get_pixel_unchecked(3, 1)) as f64, 0.0);
    rp.compare_values(0.0, color::red(cmag.get_pixel_unchecked(1, 1)) as f64, 0.0);

    assert!(rp.cleanup(), "edge regression test failed");
}
