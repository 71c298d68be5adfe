use std::collections::{HashSet, VecDeque};

use crate::lattice::{LatticeNoise, LatticeOrientation3D, PMASK};

// Cube surrounding each vertex, alternating between the two cubic
// half-lattices of the BCC arrangement. Offsets carry the +-1024 lattice
// encoding also used by the point-noise lookup.
const NEIGHBOR_MAP_3D: [[(i32, i32, i32); 8]; 2] = [
    [
        (1024, 1024, 1024),
        (1025, 1024, 1024),
        (1024, 1025, 1024),
        (1025, 1025, 1024),
        (1024, 1024, 1025),
        (1025, 1024, 1025),
        (1024, 1025, 1025),
        (1025, 1025, 1025),
    ],
    [
        (-1024, -1024, -1024),
        (-1025, -1024, 1024),
        (-1024, -1025, -1024),
        (-1025, -1025, -1024),
        (-1024, -1024, -1025),
        (-1025, -1024, -1025),
        (-1024, -1025, -1025),
        (-1025, -1025, 1025),
    ],
];

/// Precomputed state for repeated 3D volume generation: the rasterized
/// spherical kernel with per-slice and per-row clipping bounds, plus the
/// lattice rotation. See [`AreaContext2D`](crate::AreaContext2D).
pub struct AreaContext3D {
    pub(crate) orientation: LatticeOrientation3D,
    x_frequency: f64,
    y_frequency: f64,
    z_frequency: f64,
    x_frequency_inverse: f64,
    y_frequency_inverse: f64,
    z_frequency_inverse: f64,
    scaled_radius_x: i32,
    scaled_radius_y: i32,
    scaled_radius_z: i32,
    // Full mirrored kernel, [z][y][x].
    kernel: Vec<Vec<Vec<f64>>>,
    kernel_bounds_y: Vec<i32>,
    kernel_bounds_x: Vec<Vec<i32>>,
}

impl AreaContext3D {
    pub fn new(
        orientation: LatticeOrientation3D,
        x_frequency: f64,
        y_frequency: f64,
        z_frequency: f64,
        amplitude: f64,
    ) -> Self {
        let x_frequency_inverse = 1.0 / x_frequency;
        let y_frequency_inverse = 1.0 / y_frequency;
        let z_frequency_inverse = 1.0 / z_frequency;

        let scaled_radius_x = (0.5_f64.sqrt() * x_frequency_inverse + 0.25).ceil() as i32;
        let scaled_radius_y = (0.5_f64.sqrt() * y_frequency_inverse + 0.25).ceil() as i32;
        let scaled_radius_z = (0.5_f64.sqrt() * z_frequency_inverse + 0.25).ceil() as i32;

        let srx = scaled_radius_x as usize;
        let sry = scaled_radius_y as usize;
        let srz = scaled_radius_z as usize;

        let mut kernel = vec![vec![vec![0.0; srx * 2]; sry * 2]; srz * 2];
        let mut kernel_bounds_y = vec![0_i32; srz * 2];
        let mut kernel_bounds_x = vec![vec![0_i32; sry * 2]; srz * 2];

        for zz in 0..srz * 2 {
            let dz_rel = zz as f64 + 0.5 - srz as f64;
            let dz_frac = dz_rel * dz_rel / (srz * srz) as f64;
            kernel_bounds_y[zz] =
                ((1.0 - dz_frac).max(0.0).sqrt() * scaled_radius_y as f64).ceil() as i32;

            if zz >= srz {
                kernel[zz] = kernel[srz * 2 - zz - 1].clone();
                kernel_bounds_x[zz] = kernel_bounds_x[srz * 2 - zz - 1].clone();
                continue;
            }

            for yy in 0..sry * 2 {
                let dy_rel = yy as f64 + 0.5 - sry as f64;
                let dy_frac = dy_rel * dy_rel / (sry * sry) as f64;
                kernel_bounds_x[zz][yy] = ((1.0 - dy_frac - dz_frac).max(0.0).sqrt()
                    * scaled_radius_x as f64)
                    .ceil() as i32;

                if yy >= sry {
                    kernel[zz][yy] = kernel[zz][sry * 2 - yy - 1].clone();
                    continue;
                }

                for xx in 0..srx * 2 {
                    let dx = (xx as f64 + 0.5 - srx as f64) * x_frequency;
                    let dy = dy_rel * y_frequency;
                    let dz = dz_rel * z_frequency;
                    let attn = 0.5 - dx * dx - dy * dy - dz * dz;
                    kernel[zz][yy][xx] = if attn > 0.0 {
                        let attn = attn * attn;
                        attn * attn * amplitude
                    } else {
                        0.0
                    };
                }
            }
        }

        AreaContext3D {
            orientation,
            x_frequency,
            y_frequency,
            z_frequency,
            x_frequency_inverse,
            y_frequency_inverse,
            z_frequency_inverse,
            scaled_radius_x,
            scaled_radius_y,
            scaled_radius_z,
            kernel,
            kernel_bounds_y,
            kernel_bounds_x,
        }
    }

    /// Output-space cell of a lattice vertex, via the inverse rotation.
    pub(crate) fn dest_point(&self, xsv: i32, ysv: i32, zsv: i32, lattice: i32) -> (i32, i32, i32) {
        let offset = lattice as f64 * 1024.5;
        let xr = xsv as f64 - offset;
        let yr = ysv as f64 - offset;
        let zr = zsv as f64 - offset;

        let [qx, qy, qz, qw] = self.orientation.quaternion();
        let (qx, qy, qz) = (-qx, -qy, -qz);
        let tx = 2.0 * (qy * zr - qz * yr);
        let ty = 2.0 * (qz * xr - qx * zr);
        let tz = 2.0 * (qx * yr - qy * xr);
        let xrr = xr + qw * tx + (qy * tz - qz * ty);
        let yrr = yr + qw * ty + (qz * tx - qx * tz);
        let zrr = zr + qw * tz + (qx * ty - qy * tx);

        (
            (xrr * self.x_frequency_inverse).ceil() as i32,
            (yrr * self.y_frequency_inverse).ceil() as i32,
            (zrr * self.z_frequency_inverse).ceil() as i32,
        )
    }
}

// 21 bits per masked coordinate plus the half-lattice bit.
#[inline]
fn pack3(xsv: i32, ysv: i32, zsv: i32, lattice: i32) -> i64 {
    (lattice as i64) << 63
        | (xsv as i64 & 0x1FFFFF) << 42
        | (ysv as i64 & 0x1FFFFF) << 21
        | (zsv as i64 & 0x1FFFFF)
}

impl LatticeNoise {
    /// Fill `buffer` (indexed `[z][y][x]`, covering output cells starting at
    /// `(x0, y0, z0)`) with noise, accumulating additively. Values may
    /// slightly exceed [-1, 1] because the pregenerated kernel is
    /// grid-snapped.
    pub fn generate3(
        &self,
        context: &AreaContext3D,
        buffer: &mut [Vec<Vec<f64>>],
        x0: i32,
        y0: i32,
        z0: i32,
    ) {
        let depth = buffer.len() as i32;
        let height = buffer[0].len() as i32;
        let width = buffer[0][0].len() as i32;
        self.generate3_tiled(context, buffer, x0, y0, z0, width, height, depth, 0, 0, 0);
    }

    /// [`generate3`](Self::generate3) with explicit extents and skipped
    /// margins for phase-aligned tiling.
    #[allow(clippy::too_many_arguments)]
    pub fn generate3_tiled(
        &self,
        context: &AreaContext3D,
        buffer: &mut [Vec<Vec<f64>>],
        x0: i32,
        y0: i32,
        z0: i32,
        width: i32,
        height: i32,
        depth: i32,
        skip_x: i32,
        skip_y: i32,
        skip_z: i32,
    ) {
        let srx = context.scaled_radius_x;
        let sry = context.scaled_radius_y;
        let srz = context.scaled_radius_z;
        let x0_skipped = x0 + skip_x;
        let y0_skipped = y0 + skip_y;
        let z0_skipped = z0 + skip_z;

        // Rotate the first generated cell into lattice space to seed the
        // frontier, lattice 0.
        let [qx, qy, qz, qw] = context.orientation.quaternion();
        let x0f = x0_skipped as f64 * context.x_frequency;
        let y0f = y0_skipped as f64 * context.y_frequency;
        let z0f = z0_skipped as f64 * context.z_frequency;
        let tx = 2.0 * (qy * z0f - qz * y0f);
        let ty = 2.0 * (qz * x0f - qx * z0f);
        let tz = 2.0 * (qx * y0f - qy * x0f);
        let x0r = x0f + qw * tx + (qy * tz - qz * ty);
        let y0r = y0f + qw * ty + (qz * tx - qx * tz);
        let z0r = z0f + qw * tz + (qx * ty - qy * tx);
        let first = (
            x0r.floor() as i32,
            y0r.floor() as i32,
            z0r.floor() as i32,
            0_i32,
        );

        let mut queue: VecDeque<(i32, i32, i32, i32)> = VecDeque::new();
        let mut seen: HashSet<i64> = HashSet::new();
        queue.push_back(first);
        seen.insert(pack3(first.0, first.1, first.2, first.3));

        let gradients = context.orientation.gradients();

        while let Some((xsv, ysv, zsv, lattice)) = queue.pop_front() {
            let (dest_x, dest_y, dest_z) = context.dest_point(xsv, ysv, zsv, lattice);

            let pxm = xsv as usize & PMASK;
            let pym = ysv as usize & PMASK;
            let pzm = zsv as usize & PMASK;
            let (gdx, gdy, gdz) = self.grad3(gradients, pxm, pym, pzm);
            let gx = gdx * context.x_frequency;
            let gy = gdy * context.y_frequency;
            let gz = gdz * context.z_frequency;
            let g_off = 0.5 * (gx + gy + gz);

            let zz0 = (dest_z - srz).max(z0_skipped);
            let zz1 = (dest_z + srz).min(z0 + depth);
            for zz in zz0..zz1 {
                let dz = zz - dest_z;
                let kz = (dz + srz) as usize;

                let slice_radius_y = context.kernel_bounds_y[kz];
                let yy0 = (dest_y - slice_radius_y).max(y0_skipped);
                let yy1 = (dest_y + slice_radius_y).min(y0 + height);
                let slice = &mut buffer[(zz - z0) as usize];
                for yy in yy0..yy1 {
                    let dy = yy - dest_y;
                    let ky = (dy + sry) as usize;

                    let row_radius = context.kernel_bounds_x[kz][ky];
                    let xx0 = (dest_x - row_radius).max(x0_skipped);
                    let xx1 = (dest_x + row_radius).min(x0 + width);
                    let row = &mut slice[(yy - y0) as usize];
                    let kernel_row = &context.kernel[kz][ky];
                    for xx in xx0..xx1 {
                        let dx = xx - dest_x;
                        let kx = (dx + srx) as usize;
                        let extrapolation =
                            gx * dx as f64 + gy * dy as f64 + gz * dz as f64 + g_off;
                        row[(xx - x0) as usize] += kernel_row[kx] * extrapolation;
                    }
                }
            }

            for (nx, ny, nz) in NEIGHBOR_MAP_3D[lattice as usize] {
                let neighbor = (xsv + nx, ysv + ny, zsv + nz, 1 ^ lattice);
                let (ndx, ndy, ndz) =
                    context.dest_point(neighbor.0, neighbor.1, neighbor.2, neighbor.3);
                if ndx + srx >= x0_skipped
                    && ndx - srx <= x0 + width - 1
                    && ndy + sry >= y0_skipped
                    && ndy - sry <= y0 + height - 1
                    && ndz + srz >= z0_skipped
                    && ndz - srz <= z0 + depth - 1
                    && seen.insert(pack3(neighbor.0, neighbor.1, neighbor.2, neighbor.3))
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

    fn volume(width: usize, height: usize, depth: usize) -> Vec<Vec<Vec<f64>>> {
        vec![vec![vec![0.0; width]; height]; depth]
    }

    #[test]
    fn generation_is_deterministic() {
        let noise = LatticeNoise::new(2025);
        let context = AreaContext3D::new(LatticeOrientation3D::Classic, FREQ, FREQ, FREQ, 1.0);
        let mut a = volume(8, 8, 8);
        let mut b = volume(8, 8, 8);
        noise.generate3(&context, &mut a, 3, -2, 5);
        noise.generate3(&context, &mut b, 3, -2, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn tiles_match_one_large_generation() {
        let noise = LatticeNoise::new(2025);
        let context = AreaContext3D::new(LatticeOrientation3D::Classic, FREQ, FREQ, FREQ, 1.0);
        let mut whole = volume(16, 16, 16);
        noise.generate3(&context, &mut whole, 0, 0, 0);

        for tz in 0..2 {
            for ty in 0..2 {
                for tx in 0..2 {
                    let mut tile = volume(8, 8, 8);
                    noise.generate3(&context, &mut tile, tx * 8, ty * 8, tz * 8);
                    for z in 0..8 {
                        for y in 0..8 {
                            for x in 0..8 {
                                let w = whole[(tz * 8) as usize + z][(ty * 8) as usize + y]
                                    [(tx * 8) as usize + x];
                                let t = tile[z][y][x];
                                assert!(
                                    (w - t).abs() < 1e-12,
                                    "tile ({tx}, {ty}, {tz}) cell ({x}, {y}, {z}): {t} vs {w}"
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn tracks_point_noise_within_quantization_bound() {
        let noise = LatticeNoise::new(1337);
        let context = AreaContext3D::new(LatticeOrientation3D::Classic, FREQ, FREQ, FREQ, 1.0);
        let mut buf = volume(16, 16, 16);
        noise.generate3(&context, &mut buf, 0, 0, 0);
        let mut max_diff: f64 = 0.0;
        for (z, slice) in buf.iter().enumerate() {
            for (y, row) in slice.iter().enumerate() {
                for (x, &v) in row.iter().enumerate() {
                    let p =
                        noise.noise3_classic(x as f64 * FREQ, y as f64 * FREQ, z as f64 * FREQ);
                    max_diff = max_diff.max((v - p).abs());
                }
            }
        }
        assert!(max_diff < 0.2, "max deviation {max_diff}");
    }

    #[test]
    fn all_orientations_fill_the_volume() {
        let noise = LatticeNoise::new(909);
        for orientation in [
            LatticeOrientation3D::Classic,
            LatticeOrientation3D::XYBeforeZ,
            LatticeOrientation3D::XZBeforeY,
        ] {
            let context = AreaContext3D::new(orientation, FREQ, FREQ, FREQ, 1.0);
            let mut buf = volume(12, 12, 12);
            noise.generate3(&context, &mut buf, 0, 0, 0);
            let nonzero = buf
                .iter()
                .flatten()
                .flatten()
                .filter(|v| v.abs() > 1e-9)
                .count();
            assert!(nonzero > 864, "{orientation:?}: only {nonzero} cells written");
        }
    }
}
