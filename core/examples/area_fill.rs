use core::{AreaContext2D, LatticeNoise, LatticeOrientation2D};
use image::{GrayImage, Luma};
use std::path::Path;
use std::time::Instant;

// Renders the same region twice, once with the flood-fill area generator and
// once with per-point evaluation, and reports the timings.
fn main() {
    let size = 512usize;
    let freq = 1.0 / 48.0;
    let noise = LatticeNoise::new(2025);
    let context = AreaContext2D::new(LatticeOrientation2D::Standard, freq, freq, 1.0);

    let start = Instant::now();
    let mut buffer = vec![vec![0.0f64; size]; size];
    noise.generate2(&context, &mut buffer, 0, 0);
    println!("flood fill:   {:?}", start.elapsed());

    let start = Instant::now();
    let mut pointwise = vec![vec![0.0f64; size]; size];
    for (y, row) in pointwise.iter_mut().enumerate() {
        for (x, v) in row.iter_mut().enumerate() {
            *v = noise.noise2(x as f64 * freq, y as f64 * freq);
        }
    }
    println!("per point:    {:?}", start.elapsed());

    for (map, name) in [(&buffer, "area_fill.png"), (&pointwise, "area_pointwise.png")] {
        let mut img = GrayImage::new(size as u32, size as u32);
        for (y, row) in map.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                let gray = ((v.clamp(-1.0, 1.0) * 0.5 + 0.5) * 255.0).round() as u8;
                img.put_pixel(x as u32, y as u32, Luma([gray]));
            }
        }
        img.save(Path::new(name)).unwrap();
        println!("Saved {}", name);
    }
}
