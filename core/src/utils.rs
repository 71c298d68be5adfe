use crate::engine::Noise;

const GAMMA_CORRECTION: f64 = 1.2;
const WATER_THRESHOLD: f64 = 0.3;
const SAND_THRESHOLD: f64 = 0.4;
const GRASS_THRESHOLD: f64 = 0.6;
const ROCK_THRESHOLD: f64 = 0.8;

// 2D height map: row-major Vec<Vec<f64>>, access as `map[y][x]`.
pub type HeightMap2D = Vec<Vec<f64>>;

/// Sample a configured engine over a grid of cells starting at (x0, y0).
pub fn render2(noise: &Noise, width: usize, height: usize, x0: i32, y0: i32) -> HeightMap2D {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| noise.get_noise2((x0 + x as i32) as f64, (y0 + y as i32) as f64))
                .collect()
        })
        .collect()
}

// Flatten a 2D map (row-major) into a single Vec<f64>, e.g. for an image
// buffer.
pub fn flatten2(map: &HeightMap2D) -> Vec<f64> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Linearly interpolate between two RGB triples
fn lerp_color(a: [u8; 3], b: [u8; 3], t: f64) -> [u8; 3] {
    [
        (a[0] as f64 + (b[0] as f64 - a[0] as f64) * t) as u8,
        (a[1] as f64 + (b[1] as f64 - a[1] as f64) * t) as u8,
        (a[2] as f64 + (b[2] as f64 - a[2] as f64) * t) as u8,
    ]
}

// Map a height in [0.0, 1.0] to a terrain color
fn height_to_rgb(h: f64) -> [u8; 3] {
    match h {
        x if x < WATER_THRESHOLD => {
            let t = x / WATER_THRESHOLD;
            lerp_color([0, 0, 128], [0, 128, 255], t) // deep to shallow water
        }
        x if x < SAND_THRESHOLD => {
            let t = (x - WATER_THRESHOLD) / (SAND_THRESHOLD - WATER_THRESHOLD);
            lerp_color([194, 178, 128], [220, 200, 160], t) // sand
        }
        x if x < GRASS_THRESHOLD => {
            let t = (x - SAND_THRESHOLD) / (GRASS_THRESHOLD - SAND_THRESHOLD);
            lerp_color([34, 139, 34], [50, 205, 50], t) // grass
        }
        x if x < ROCK_THRESHOLD => {
            let t = (x - GRASS_THRESHOLD) / (ROCK_THRESHOLD - GRASS_THRESHOLD);
            lerp_color([128, 128, 128], [192, 192, 192], t) // rock
        }
        x => {
            let t = (x - ROCK_THRESHOLD) / (1.0 - ROCK_THRESHOLD);
            lerp_color([220, 220, 220], [255, 255, 255], t) // snow
        }
    }
}

// Convert a flat &[f64] of heights in [0, 1] into an RGB byte buffer
pub fn to_terrain_image(flat: &[f64]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(flat.len() * 3);
    for &h in flat {
        let [r, g, b] = height_to_rgb(h);
        buf.extend_from_slice(&[r, g, b]);
    }
    buf
}

/// Convert a flat &[f64] of raw noise in [-1, 1] into a grayscale byte
/// buffer.
pub fn to_grayscale_image(flat: &[f64]) -> Vec<u8> {
    flat.iter()
        .map(|&v| ((v.clamp(-1.0, 1.0) * 0.5 + 0.5) * 255.0) as u8)
        .collect()
}

// Normalize a map to [0, 1] with a gamma curve for contrast
pub fn normalize2(map: &mut HeightMap2D) {
    let mut min = f64::MAX;
    let mut max = f64::MIN;

    for row in map.iter() {
        for &val in row.iter() {
            min = min.min(val);
            max = max.max(val);
        }
    }

    let range = (max - min).max(0.001); // prevent zero-division
    for row in map.iter_mut() {
        for val in row.iter_mut() {
            *val = ((*val - min) / range).powf(GAMMA_CORRECTION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render2_matches_point_queries() {
        let n = Noise::with_seed(2025);
        let map = render2(&n, 8, 4, 10, -5);
        assert_eq!(map.len(), 4);
        assert_eq!(map[0].len(), 8);
        assert!((map[2][3] - n.get_noise2(13.0, -3.0)).abs() < 1e-12);
    }

    #[test]
    fn flatten2_is_row_major() {
        let map = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(flatten2(&map), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn normalize2_maps_to_unit_range() {
        let mut map = vec![vec![-3.0, 0.0], vec![1.0, 5.0]];
        normalize2(&mut map);
        for row in &map {
            for &v in row {
                assert!((0.0..=1.0).contains(&v));
            }
        }
        assert!(map[0][0].abs() < 1e-12);
        assert!((map[1][1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn grayscale_covers_full_range() {
        let buf = to_grayscale_image(&[-1.0, 0.0, 1.0]);
        assert_eq!(buf[0], 0);
        assert_eq!(buf[1], 127);
        assert_eq!(buf[2], 255);
    }

    #[test]
    fn terrain_image_has_three_bytes_per_cell() {
        let buf = to_terrain_image(&[0.1, 0.5, 0.9]);
        assert_eq!(buf.len(), 9);
    }
}
