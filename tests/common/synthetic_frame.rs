use image::{Rgb, RgbImage};

/// Black frame with full-height white vertical stripes, one per entry in
/// `stripe_xs`, each `stripe_w` pixels wide. Stripe borders produce strong
/// vertical edges for the detection front-end.
pub fn striped_frame(width: u32, height: u32, stripe_xs: &[u32], stripe_w: u32) -> RgbImage {
    let mut frame = RgbImage::new(width, height);
    for &x0 in stripe_xs {
        for x in x0..(x0 + stripe_w).min(width) {
            for y in 0..height {
                frame.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
    }
    frame
}
