use std::collections::{HashSet, VecDeque};

use crate::lattice::{LatticeNoise, LatticeOrientation2D, PMASK};

// Hexagon surrounding each lattice vertex.
const NEIGHBOR_MAP_2D: [(i32, i32); 6] = [(1, 0), (1, 1), (0, 1), (0, -1), (-1, -1), (-1, 0)];

/// Precomputed state for repeated 2D area generation at one frequency pair:
/// the rasterized contribution kernel, its per-row clipping bounds, and the
/// lattice transform. Build once, then call
/// [`LatticeNoise::generate2`] as many times as needed.
pub struct AreaContext2D {
    pub(crate) orientation: LatticeOrientation2D,
    x_frequency: f64,
    y_frequency: f64,
    x_frequency_inverse: f64,
    y_frequency_inverse: f64,
    scaled_radius_x: i32,
    scaled_radius_y: i32,
    // Full mirrored kernel, 2*scaled_radius_y rows.
    kernel: Vec<Vec<f64>>,
    kernel_bounds: Vec<i32>,
}

impl AreaContext2D {
    pub fn new(
        orientation: LatticeOrientation2D,
        x_frequency: f64,
        y_frequency: f64,
        amplitude: f64,
    ) -> Self {
        let x_frequency_inverse = 1.0 / x_frequency;
        let y_frequency_inverse = 1.0 / y_frequency;

        // The extra 0.25 covers the kernel's half-cell center offset.
        let scaled_radius_x = (0.5_f64.sqrt() * x_frequency_inverse + 0.25).ceil() as i32;
        let scaled_radius_y = (0.5_f64.sqrt() * y_frequency_inverse + 0.25).ceil() as i32;

        let srx = scaled_radius_x as usize;
        let sry = scaled_radius_y as usize;
        let mut kernel = vec![vec![0.0; srx * 2]; sry * 2];
        let mut kernel_bounds = vec![0_i32; sry * 2];
        for yy in 0..sry * 2 {
            let dy_rel = yy as f64 + 0.5 - sry as f64;
            kernel_bounds[yy] = ((1.0 - dy_rel * dy_rel / (sry * sry) as f64).max(0.0).sqrt()
                * scaled_radius_x as f64)
                .ceil() as i32;

            if yy < sry {
                for xx in 0..srx * 2 {
                    let dx = (xx as f64 + 0.5 - srx as f64) * x_frequency;
                    let dy = dy_rel * y_frequency;
                    let attn = 0.5 - dx * dx - dy * dy;
                    kernel[yy][xx] = if attn > 0.0 {
                        let attn = attn * attn;
                        attn * attn * amplitude
                    } else {
                        0.0
                    };
                }
            } else {
                kernel[yy] = kernel[sry * 2 - yy - 1].clone();
            }
        }

        AreaContext2D {
            orientation,
            x_frequency,
            y_frequency,
            x_frequency_inverse,
            y_frequency_inverse,
            scaled_radius_x,
            scaled_radius_y,
            kernel,
            kernel_bounds,
        }
    }

    /// Output-space cell this lattice vertex lands on, via the inverse
    /// lattice transform.
    pub(crate) fn dest_point(&self, xsv: i32, ysv: i32) -> (i32, i32) {
        let t = self.orientation.unskew();
        let x = ((t[0] * xsv as f64 + t[1] * ysv as f64) * self.x_frequency_inverse).ceil() as i32;
        let y = ((t[2] * xsv as f64 + t[3] * ysv as f64) * self.y_frequency_inverse).ceil() as i32;
        (x, y)
    }
}

#[inline]
fn pack2(xsv: i32, ysv: i32) -> i64 {
    (xsv as i64) << 32 | (ysv as u32 as i64)
}

impl LatticeNoise {
    /// Fill `buffer` (indexed `[y][x]`, covering output cells starting at
    /// `(x0, y0)`) with noise, accumulating additively into whatever the
    /// buffer already holds. Values may slightly exceed [-1, 1] because the
    /// pregenerated kernel is grid-snapped.
    pub fn generate2(&self, context: &AreaContext2D, buffer: &mut [Vec<f64>], x0: i32, y0: i32) {
        let height = buffer.len() as i32;
        let width = buffer[0].len() as i32;
        self.generate2_tiled(context, buffer, x0, y0, width, height, 0, 0);
    }

    /// [`generate2`](Self::generate2) with explicit extents and a skipped
    /// margin, for phase-aligned tiling: adjacent tiles generated separately
    /// match a single large generation exactly.
    #[allow(clippy::too_many_arguments)]
    pub fn generate2_tiled(
        &self,
        context: &AreaContext2D,
        buffer: &mut [Vec<f64>],
        x0: i32,
        y0: i32,
        width: i32,
        height: i32,
        skip_x: i32,
        skip_y: i32,
    ) {
        let srx = context.scaled_radius_x;
        let sry = context.scaled_radius_y;
        let x0_skipped = x0 + skip_x;
        let y0_skipped = y0 + skip_y;

        // Seed the frontier with the lattice vertex under the first
        // generated cell.
        let x0f = x0_skipped as f64 * context.x_frequency;
        let y0f = y0_skipped as f64 * context.y_frequency;
        let s = context.orientation.skew();
        let x0s = s[0] * x0f + s[1] * y0f;
        let y0s = s[2] * x0f + s[3] * y0f;
        let first = (x0s.floor() as i32, y0s.floor() as i32);

        let mut queue: VecDeque<(i32, i32)> = VecDeque::new();
        let mut seen: HashSet<i64> = HashSet::new();
        queue.push_back(first);
        seen.insert(pack2(first.0, first.1));

        while let Some((xsv, ysv)) = queue.pop_front() {
            let (dest_x, dest_y) = context.dest_point(xsv, ysv);

            let pxm = xsv as usize & PMASK;
            let pym = ysv as usize & PMASK;
            let (gdx, gdy) = self.grad2(context.orientation, pxm, pym);
            let gx = gdx * context.x_frequency;
            let gy = gdy * context.y_frequency;
            // Corrects for the kernel's (0.5, 0.5) center offset.
            let g_off = 0.5 * (gx + gy);

            let yy0 = (dest_y - sry).max(y0_skipped);
            let yy1 = (dest_y + sry).min(y0 + height);
            for yy in yy0..yy1 {
                let dy = yy - dest_y;
                let ky = (dy + sry) as usize;

                let row_radius = context.kernel_bounds[ky];
                let xx0 = (dest_x - row_radius).max(x0_skipped);
                let xx1 = (dest_x + row_radius).min(x0 + width);
                let row = &mut buffer[(yy - y0) as usize];
                let kernel_row = &context.kernel[ky];
                for xx in xx0..xx1 {
                    let dx = xx - dest_x;
                    let kx = (dx + srx) as usize;
                    let extrapolation = gx * dx as f64 + gy * dy as f64 + g_off;
                    row[(xx - x0) as usize] += kernel_row[kx] * extrapolation;
                }
            }

            for (nx, ny) in NEIGHBOR_MAP_2D {
                let neighbor = (xsv + nx, ysv + ny);
                let (ndx, ndy) = context.dest_point(neighbor.0, neighbor.1);
                // Enqueue only vertices whose footprint overlaps the region,
                // marking on enqueue so each vertex is processed once.
                if ndx + srx >= x0_skipped
                    && ndx - srx <= x0 + width - 1
                    && ndy + sry >= y0_skipped
                    && ndy - sry <= y0 + height - 1
                    && seen.insert(pack2(neighbor.0, neighbor.1))
                {
                    queue.push_back(neighbor);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FREQ: f64 = 1.0 / 32.0;

    fn buffer(width: usize, height: usize) -> Vec<Vec<f64>> {
        vec![vec![0.0; width]; height]
    }

    // Independent rasterization over every lattice vertex in a padded
    // bounding box, no flood fill. Exercises the same kernel but none of the
    // frontier logic.
    fn rasterize_exhaustively(
        noise: &LatticeNoise,
        context: &AreaContext2D,
        x0: i32,
        y0: i32,
        width: i32,
        height: i32,
    ) -> Vec<Vec<f64>> {
        let mut buf = buffer(width as usize, height as usize);
        let srx = context.scaled_radius_x;
        let sry = context.scaled_radius_y;
        let s = context.orientation.skew();

        let mut min_xs = f64::INFINITY;
        let mut max_xs = f64::NEG_INFINITY;
        let mut min_ys = f64::INFINITY;
        let mut max_ys = f64::NEG_INFINITY;
        for cx in [x0 - srx, x0 + width + srx] {
            for cy in [y0 - sry, y0 + height + sry] {
                let xf = cx as f64 * context.x_frequency;
                let yf = cy as f64 * context.y_frequency;
                let xs = s[0] * xf + s[1] * yf;
                let ys = s[2] * xf + s[3] * yf;
                min_xs = min_xs.min(xs);
                max_xs = max_xs.max(xs);
                min_ys = min_ys.min(ys);
                max_ys = max_ys.max(ys);
            }
        }

        for xsv in (min_xs.floor() as i32 - 2)..(max_xs.ceil() as i32 + 3) {
            for ysv in (min_ys.floor() as i32 - 2)..(max_ys.ceil() as i32 + 3) {
                let (dest_x, dest_y) = context.dest_point(xsv, ysv);
                let pxm = xsv as usize & PMASK;
                let pym = ysv as usize & PMASK;
                let (gdx, gdy) = noise.grad2(context.orientation, pxm, pym);
                let gx = gdx * context.x_frequency;
                let gy = gdy * context.y_frequency;
                let g_off = 0.5 * (gx + gy);

                for yy in (dest_y - sry).max(y0)..(dest_y + sry).min(y0 + height) {
                    let dy = yy - dest_y;
                    let ky = (dy + sry) as usize;
                    let row_radius = context.kernel_bounds[ky];
                    for xx in (dest_x - row_radius).max(x0)..(dest_x + row_radius).min(x0 + width) {
                        let dx = xx - dest_x;
                        let kx = (dx + srx) as usize;
                        buf[(yy - y0) as usize][(xx - x0) as usize] +=
                            context.kernel[ky][kx] * (gx * dx as f64 + gy * dy as f64 + g_off);
                    }
                }
            }
        }
        buf
    }

    #[test]
    fn flood_fill_matches_exhaustive_rasterization() {
        let noise = LatticeNoise::new(2025);
        let context = AreaContext2D::new(LatticeOrientation2D::Standard, FREQ, FREQ, 1.0);
        for (x0, y0) in [(0, 0), (-17, -9), (103, 56)] {
            let mut flooded = buffer(24, 24);
            noise.generate2(&context, &mut flooded, x0, y0);
            let exhaustive = rasterize_exhaustively(&noise, &context, x0, y0, 24, 24);
            for y in 0..24 {
                for x in 0..24 {
                    let d = (flooded[y][x] - exhaustive[y][x]).abs();
                    assert!(d < 1e-10, "cell ({x}, {y}) of origin ({x0}, {y0}) differs by {d}");
                }
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let noise = LatticeNoise::new(7);
        let context = AreaContext2D::new(LatticeOrientation2D::Standard, FREQ, FREQ, 1.0);
        let mut a = buffer(16, 16);
        let mut b = buffer(16, 16);
        noise.generate2(&context, &mut a, 5, -3);
        noise.generate2(&context, &mut b, 5, -3);
        assert_eq!(a, b);
    }

    #[test]
    fn tiles_match_one_large_generation() {
        let noise = LatticeNoise::new(2025);
        let context = AreaContext2D::new(LatticeOrientation2D::Standard, FREQ, FREQ, 1.0);
        let mut whole = buffer(32, 32);
        noise.generate2(&context, &mut whole, 0, 0);

        for ty in 0..2 {
            for tx in 0..2 {
                let mut tile = buffer(16, 16);
                noise.generate2(&context, &mut tile, tx * 16, ty * 16);
                for y in 0..16 {
                    for x in 0..16 {
                        let w = whole[(ty * 16) as usize + y][(tx * 16) as usize + x];
                        let t = tile[y][x];
                        assert!(
                            (w - t).abs() < 1e-12,
                            "tile ({tx}, {ty}) cell ({x}, {y}): {t} vs {w}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn skip_margin_fills_only_past_the_margin() {
        let noise = LatticeNoise::new(2025);
        let context = AreaContext2D::new(LatticeOrientation2D::Standard, FREQ, FREQ, 1.0);
        let mut whole = buffer(32, 32);
        noise.generate2(&context, &mut whole, 0, 0);

        let mut skipped = buffer(32, 32);
        noise.generate2_tiled(&context, &mut skipped, 0, 0, 32, 32, 16, 0);
        for y in 0..32 {
            for x in 0..16 {
                assert_eq!(skipped[y][x], 0.0, "cell ({x}, {y}) inside the margin written");
            }
            for x in 16..32 {
                assert!(
                    (skipped[y][x] - whole[y][x]).abs() < 1e-12,
                    "cell ({x}, {y}) differs past the margin"
                );
            }
        }
    }

    #[test]
    fn tracks_point_noise_within_quantization_bound() {
        // The kernel is rasterized on the output grid at a half-cell offset,
        // so the fill is a quantized rendition of the point kernel; the gap
        // shrinks as frequency drops.
        let noise = LatticeNoise::new(2025);
        let context = AreaContext2D::new(LatticeOrientation2D::Standard, FREQ, FREQ, 1.0);
        let mut buf = buffer(32, 32);
        noise.generate2(&context, &mut buf, 0, 0);
        let mut max_diff: f64 = 0.0;
        for (y, row) in buf.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                let p = noise.noise2(x as f64 * FREQ, y as f64 * FREQ);
                max_diff = max_diff.max((v - p).abs());
            }
        }
        assert!(max_diff < 0.1, "max deviation {max_diff}");
    }

    #[test]
    fn accumulates_into_existing_buffer() {
        let noise = LatticeNoise::new(11);
        let context = AreaContext2D::new(LatticeOrientation2D::Standard, FREQ, FREQ, 0.5);
        let mut once = buffer(8, 8);
        noise.generate2(&context, &mut once, 0, 0);
        let mut twice = buffer(8, 8);
        noise.generate2(&context, &mut twice, 0, 0);
        noise.generate2(&context, &mut twice, 0, 0);
        for y in 0..8 {
            for x in 0..8 {
                assert!((twice[y][x] - 2.0 * once[y][x]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn x_before_y_orientation_generates() {
        let noise = LatticeNoise::new(404);
        let context = AreaContext2D::new(LatticeOrientation2D::XBeforeY, FREQ, FREQ, 1.0);
        let mut buf = buffer(16, 16);
        noise.generate2(&context, &mut buf, 0, 0);
        let nonzero = buf.iter().flatten().filter(|v| v.abs() > 1e-9).count();
        assert!(nonzero > 128, "only {nonzero} cells written");
        for v in buf.iter().flatten() {
            assert!(v.abs() <= 1.05, "area value {v} far out of range");
        }
    }
}
