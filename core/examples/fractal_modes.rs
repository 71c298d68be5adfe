use core::utils::{normalize2, render2};
use core::{FractalType, Noise, NoiseType};
use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use std::path::Path;

fn main() {
    let size = 512;

    // Color gradient - deep water to beach to grass to rock to snow
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)), // deep blue
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)), // sand
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)), // green
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)), // rock
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)), // snow
    ]);

    for (fractal_type, name) in [
        (FractalType::Fbm, "fbm.png"),
        (FractalType::Billow, "billow.png"),
        (FractalType::RidgedMulti, "ridged.png"),
    ] {
        let mut n = Noise::configured(2025, 1.0 / 64.0, NoiseType::SimplexFractal, 5, 2.0, 0.5);
        n.set_fractal_type(fractal_type);

        let mut map = render2(&n, size, size, 0, 0);
        normalize2(&mut map);

        let mut img = RgbImage::new(size as u32, size as u32);
        for (y, row) in map.iter().enumerate() {
            for (x, &h) in row.iter().enumerate() {
                let c = gradient.get(h as f32);
                let r = (c.red * 255.0).round() as u8;
                let g = (c.green * 255.0).round() as u8;
                let b = (c.blue * 255.0).round() as u8;
                img.put_pixel(x as u32, y as u32, Rgb([r, g, b]));
            }
        }
        img.save(Path::new(name)).unwrap();
        println!("Saved {}", name);
    }
}
