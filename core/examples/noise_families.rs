use core::{LatticeNoise, Noise, NoiseGenerator, NoiseType};
use image::{GrayImage, Luma};
use std::path::Path;

fn save_noise2d<N: NoiseGenerator>(generator: &N, size: usize, scale: f64, filename: &str) {
    let mut img = GrayImage::new(size as u32, size as u32);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut data = vec![vec![0.0f64; size]; size];

    // Sample noise
    for y in 0..size {
        for x in 0..size {
            let v = generator.get2(x as f64 * scale, y as f64 * scale);
            data[y][x] = v;
            min = min.min(v);
            max = max.max(v);
        }
    }

    // Write image
    for y in 0..size {
        for x in 0..size {
            let v = data[y][x];
            let norm = if (max - min).abs() < f64::EPSILON {
                0.5
            } else {
                (v - min) / (max - min)
            };
            let gray = (norm * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn main() {
    let size = 256;

    for (noise_type, name) in [
        (NoiseType::Value, "value2d.png"),
        (NoiseType::Foam, "foam2d.png"),
        (NoiseType::Simplex, "simplex2d.png"),
    ] {
        let mut n = Noise::with_seed(2025);
        n.set_noise_type(noise_type);
        save_noise2d(&n, size, 1.0, name);
    }

    // Permutation-table lattice noise, both 2D and a 3D slice
    let lattice = LatticeNoise::new(2025);
    save_noise2d(&lattice, size, 1.0 / 32.0, "lattice2d.png");

    let mut img = GrayImage::new(size as u32, size as u32);
    for y in 0..size {
        for x in 0..size {
            let v = lattice.noise3_xy_before_z(x as f64 / 32.0, y as f64 / 32.0, 4.0);
            let gray = ((v * 0.5 + 0.5) * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img.save(Path::new("lattice3d_slice.png")).unwrap();
    println!("Saved lattice3d_slice.png");
}
