use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::gradients::{
    LATTICE_GRAD_2, LATTICE_GRAD_2_X_BEFORE_Y, LATTICE_GRAD_3, LATTICE_GRAD_3_CLASSIC,
    LATTICE_GRAD_3_XY_BEFORE_Z, LATTICE_GRAD_3_XZ_BEFORE_Y,
};
use crate::value::fast_floor;

pub(crate) const PSIZE: usize = 2048;
pub(crate) const PMASK: usize = 2047;

/// Which way the 2D simplex lattice is oriented relative to output space.
/// `XBeforeY` bakes a 45-degree rotation into the skew so the lattice's main
/// diagonal lines up with the y axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatticeOrientation2D {
    #[default]
    Standard,
    XBeforeY,
}

impl LatticeOrientation2D {
    /// Forward transform from output space to lattice space, row-major 2x2.
    pub(crate) fn skew(self) -> [f64; 4] {
        match self {
            LatticeOrientation2D::Standard => [
                1.366025403784439,
                0.366025403784439,
                0.366025403784439,
                1.366025403784439,
            ],
            LatticeOrientation2D::XBeforeY => [
                0.7071067811865476,
                1.224744871380249,
                -0.7071067811865476,
                1.224744871380249,
            ],
        }
    }

    /// Inverse transform from lattice space back to output space.
    pub(crate) fn unskew(self) -> [f64; 4] {
        match self {
            LatticeOrientation2D::Standard => [
                0.788675134594813,
                -0.211324865405187,
                -0.211324865405187,
                0.788675134594813,
            ],
            LatticeOrientation2D::XBeforeY => [
                0.7071067811865476,
                -0.7071067811865476,
                0.40824829046764305,
                0.40824829046764305,
            ],
        }
    }

    /// Gradient set expressed in this orientation's output space.
    pub(crate) fn gradients(self) -> &'static [(f64, f64); 24] {
        match self {
            LatticeOrientation2D::Standard => &LATTICE_GRAD_2,
            LatticeOrientation2D::XBeforeY => &LATTICE_GRAD_2_X_BEFORE_Y,
        }
    }
}

/// Orientation of the rotated BCC lattice used by the 3D noise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatticeOrientation3D {
    #[default]
    Classic,
    XYBeforeZ,
    XZBeforeY,
}

impl LatticeOrientation3D {
    /// The rotation from output space to lattice space as a quaternion
    /// (x, y, z, w).
    pub(crate) fn quaternion(self) -> [f64; 4] {
        match self {
            LatticeOrientation3D::Classic => {
                [0.577350269189626, 0.577350269189626, 0.577350269189626, 0.0]
            }
            LatticeOrientation3D::XYBeforeZ => {
                [0.3250575836718682, -0.3250575836718682, 0.0, 0.8880738339771154]
            }
            LatticeOrientation3D::XZBeforeY => {
                [-0.3250575836718682, 0.0, 0.3250575836718682, 0.8880738339771154]
            }
        }
    }

    pub(crate) fn gradients(self) -> &'static [(f64, f64, f64); 48] {
        match self {
            LatticeOrientation3D::Classic => &LATTICE_GRAD_3_CLASSIC,
            LatticeOrientation3D::XYBeforeZ => &LATTICE_GRAD_3_XY_BEFORE_Z,
            LatticeOrientation3D::XZBeforeY => &LATTICE_GRAD_3_XZ_BEFORE_Y,
        }
    }
}

struct LatticeStep2 {
    xsv: i32,
    ysv: i32,
    dx: f64,
    dy: f64,
}

impl LatticeStep2 {
    fn new(xsv: i32, ysv: i32) -> Self {
        let ssv = (xsv + ysv) as f64 * -0.211324865405187;
        LatticeStep2 {
            xsv,
            ysv,
            dx: -xsv as f64 - ssv,
            dy: -ysv as f64 - ssv,
        }
    }
}

// Two rows of three contributing points, picked by which half of the skewed
// unit square the sample falls in.
static LOOKUP_2D: LazyLock<[LatticeStep2; 6]> = LazyLock::new(|| {
    [
        LatticeStep2::new(0, 0),
        LatticeStep2::new(1, 1),
        LatticeStep2::new(1, 0),
        LatticeStep2::new(0, 0),
        LatticeStep2::new(1, 1),
        LatticeStep2::new(0, 1),
    ]
});

// Walked as a decision chain: a failed attenuation test jumps to
// `next_on_failure`, a contribution jumps to `next_on_success`, STEP_DONE
// terminates. Encodes which of the eight candidate points around an octant
// can still contribute once earlier tests have resolved.
pub(crate) const STEP_DONE: u8 = 8;

pub(crate) struct LatticeStep3 {
    pub dxr: f64,
    pub dyr: f64,
    pub dzr: f64,
    pub xrv: i32,
    pub yrv: i32,
    pub zrv: i32,
    pub next_on_failure: u8,
    pub next_on_success: u8,
}

impl LatticeStep3 {
    fn new(xrv: i32, yrv: i32, zrv: i32, lattice: i32, fail: u8, success: u8) -> Self {
        LatticeStep3 {
            dxr: -xrv as f64 + lattice as f64 * 0.5,
            dyr: -yrv as f64 + lattice as f64 * 0.5,
            dzr: -zrv as f64 + lattice as f64 * 0.5,
            xrv: xrv + lattice * 1024,
            yrv: yrv + lattice * 1024,
            zrv: zrv + lattice * 1024,
            next_on_failure: fail,
            next_on_success: success,
        }
    }
}

pub(crate) static LOOKUP_3D: LazyLock<[[LatticeStep3; 8]; 8]> = LazyLock::new(|| {
    std::array::from_fn(|i| {
        let i1 = (i & 1) as i32;
        let j1 = ((i >> 1) & 1) as i32;
        let k1 = ((i >> 2) & 1) as i32;
        let i2 = i1 ^ 1;
        let j2 = j1 ^ 1;
        let k2 = k1 ^ 1;
        [
            // The two points of this octant, one per cubic half-lattice,
            // always tested.
            LatticeStep3::new(i1, j1, k1, 0, 1, 1),
            LatticeStep3::new(i1 + i2, j1 + j2, k1 + k2, 1, 2, 2),
            // Single steps away on the first half-lattice; a hit here also
            // rules out one second-lattice candidate.
            LatticeStep3::new(i1 ^ 1, j1, k1, 0, 3, 6),
            LatticeStep3::new(i1, j1 ^ 1, k1, 0, 4, 5),
            LatticeStep3::new(i1, j1, k1 ^ 1, 0, 5, 5),
            // Single steps away on the second half-lattice.
            LatticeStep3::new(i1 + (i2 ^ 1), j1 + j2, k1 + k2, 1, 6, STEP_DONE),
            LatticeStep3::new(i1 + i2, j1 + (j2 ^ 1), k1 + k2, 1, 7, STEP_DONE),
            LatticeStep3::new(i1 + i2, j1 + j2, k1 + (k2 ^ 1), 1, STEP_DONE, STEP_DONE),
        ]
    })
});

/// Smooth simplex-style noise driven by a seeded permutation table instead of
/// per-point seed hashing. Building the table costs a pass over 2048 entries;
/// evaluation after that touches only a few table slots per sample. Also the
/// engine behind the flood-fill area generators.
pub struct LatticeNoise {
    pub(crate) perm: [i16; PSIZE],
}

impl LatticeNoise {
    /// Builds the permutation with a partial Fisher-Yates shuffle driven by
    /// an LCG stream, matching the layout any other port of this generator
    /// produces for the same seed.
    pub fn new(seed: i64) -> Self {
        let mut perm = [0_i16; PSIZE];
        let mut source = [0_i16; PSIZE];
        for (i, slot) in source.iter_mut().enumerate() {
            *slot = i as i16;
        }
        let mut state = seed;
        for i in (0..PSIZE).rev() {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let mut r = (state.wrapping_add(31) % (i as i64 + 1)) as i32;
            if r < 0 {
                r += i as i32 + 1;
            }
            perm[i] = source[r as usize];
            source[r as usize] = source[i];
        }
        LatticeNoise { perm }
    }

    #[inline]
    pub(crate) fn grad2(
        &self,
        orientation: LatticeOrientation2D,
        pxm: usize,
        pym: usize,
    ) -> (f64, f64) {
        let index = self.perm[(self.perm[pxm] as usize) ^ pym] as usize;
        orientation.gradients()[index % 24]
    }

    #[inline]
    pub(crate) fn grad3(
        &self,
        gradients: &[(f64, f64, f64); 48],
        pxm: usize,
        pym: usize,
        pzm: usize,
    ) -> (f64, f64, f64) {
        let index =
            self.perm[(self.perm[(self.perm[pxm] as usize) ^ pym] as usize) ^ pzm] as usize;
        gradients[index % 48]
    }

    /// 2D noise, standard lattice orientation.
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        let s = 0.366025403784439 * (x + y);
        self.noise2_base(x + s, y + s)
    }

    /// 2D noise with y pointing down the lattice's main diagonal. Suits
    /// side-view worlds where y is vertical.
    pub fn noise2_x_before_y(&self, x: f64, y: f64) -> f64 {
        let xx = x * 0.7071067811865476;
        let yy = y * 1.224744871380249;
        self.noise2_base(yy + xx, yy - xx)
    }

    fn noise2_base(&self, xs: f64, ys: f64) -> f64 {
        let xsb = fast_floor(xs);
        let ysb = fast_floor(ys);
        let xsi = xs - xsb as f64;
        let ysi = ys - ysb as f64;

        let index = ((ysi - xsi) / 2.0 + 1.0) as usize * 3;

        let ssi = (xsi + ysi) * -0.211324865405187;
        let xi = xsi + ssi;
        let yi = ysi + ssi;

        let mut value = 0.0;
        for c in &LOOKUP_2D[index..index + 3] {
            let dx = xi + c.dx;
            let dy = yi + c.dy;
            let attn = 0.5 - dx * dx - dy * dy;
            if attn <= 0.0 {
                continue;
            }

            let pxm = (xsb + c.xsv) as usize & PMASK;
            let pym = (ysb + c.ysv) as usize & PMASK;
            let (gx, gy) = self.grad2(LatticeOrientation2D::Standard, pxm, pym);
            let extrapolation = gx * dx + gy * dy;

            let attn = attn * attn;
            value += attn * attn * extrapolation;
        }
        value
    }

    /// 3D noise on the rotated BCC lattice, classic orientation: good on the
    /// cardinal planar slices.
    pub fn noise3_classic(&self, x: f64, y: f64, z: f64) -> f64 {
        let r = (2.0 / 3.0) * (x + y + z);
        self.noise3_bcc(r - x, r - y, r - z)
    }

    /// 3D noise rotated so the (x, y) plane gets the triangular look of 2D.
    /// Use for heightmaps sampled over (x, y) or (x, y, time).
    pub fn noise3_xy_before_z(&self, x: f64, y: f64, z: f64) -> f64 {
        let xy = x + y;
        let s2 = xy * -0.211324865405187;
        let zz = z * 0.577350269189626;
        self.noise3_bcc(x + s2 - zz, y + s2 - zz, xy * 0.577350269189626 + zz)
    }

    /// 3D noise rotated so the (x, z) plane gets the triangular look of 2D.
    pub fn noise3_xz_before_y(&self, x: f64, y: f64, z: f64) -> f64 {
        let xz = x + z;
        let s2 = xz * -0.211324865405187;
        let yy = y * 0.577350269189626;
        self.noise3_bcc(x + s2 - yy, xz * 0.577350269189626 + yy, z + s2 - yy)
    }

    fn noise3_bcc(&self, xr: f64, yr: f64, zr: f64) -> f64 {
        let xrb = fast_floor(xr);
        let yrb = fast_floor(yr);
        let zrb = fast_floor(zr);
        let xri = xr - xrb as f64;
        let yri = yr - yrb as f64;
        let zri = zr - zrb as f64;

        // Octant of the cube; narrows which points of either half-lattice can
        // contribute.
        let xht = (xri + 0.5) as usize;
        let yht = (yri + 0.5) as usize;
        let zht = (zri + 0.5) as usize;
        let index = xht | (yht << 1) | (zht << 2);

        let steps = &LOOKUP_3D[index];
        let mut value = 0.0;
        let mut at = 0_u8;
        while at != STEP_DONE {
            let c = &steps[at as usize];
            let dxr = xri + c.dxr;
            let dyr = yri + c.dyr;
            let dzr = zri + c.dzr;
            let attn = 0.5 - dxr * dxr - dyr * dyr - dzr * dzr;
            if attn < 0.0 {
                at = c.next_on_failure;
            } else {
                let pxm = (xrb + c.xrv) as usize & PMASK;
                let pym = (yrb + c.yrv) as usize & PMASK;
                let pzm = (zrb + c.zrv) as usize & PMASK;
                let (gx, gy, gz) = self.grad3(&LATTICE_GRAD_3, pxm, pym, pzm);
                let extrapolation = gx * dxr + gy * dyr + gz * dzr;

                let attn = attn * attn;
                value += attn * attn * extrapolation;
                at = c.next_on_success;
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_table() {
        let a = LatticeNoise::new(2025);
        let b = LatticeNoise::new(2025);
        assert_eq!(a.perm, b.perm);
    }

    #[test]
    fn perm_is_a_permutation() {
        let n = LatticeNoise::new(-777);
        let mut hit = [false; PSIZE];
        for &v in &n.perm {
            let v = v as usize;
            assert!(!hit[v], "duplicate perm entry {v}");
            hit[v] = true;
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = LatticeNoise::new(1);
        let b = LatticeNoise::new(2);
        assert_ne!(a.perm, b.perm);
    }

    #[test]
    fn noise_is_deterministic_and_bounded() {
        let n = LatticeNoise::new(2025);
        for i in 0..2000 {
            let x = i as f64 * 0.157 - 150.0;
            let y = i as f64 * -0.083 + 40.0;
            let v = n.noise2(x, y);
            assert!((n.noise2(x, y) - v).abs() < 1e-12);
            assert!(v.abs() <= 1.0 + 1e-9, "noise2 {v} at ({x}, {y})");
            for v in [
                n.noise2_x_before_y(x, y),
                n.noise3_classic(x, y, x * 0.4),
                n.noise3_xy_before_z(x, y, x * 0.4),
                n.noise3_xz_before_y(x, y, x * 0.4),
            ] {
                assert!(v.abs() <= 1.0 + 1e-9, "{v} out of range");
            }
        }
    }

    #[test]
    fn orientations_produce_distinct_fields() {
        let n = LatticeNoise::new(31337);
        let mut diffs = 0;
        for i in 0..64 {
            let x = i as f64 * 0.61;
            let y = i as f64 * -0.43 + 7.0;
            let a = n.noise3_classic(x, y, 1.5);
            let b = n.noise3_xy_before_z(x, y, 1.5);
            if (a - b).abs() > 1e-9 {
                diffs += 1;
            }
        }
        assert!(diffs > 48);
    }

    #[test]
    fn chain_wiring_terminates() {
        // Whatever pattern of failures and successes occurs, both exits of
        // every step must lead to the terminator.
        for octant in LOOKUP_3D.iter() {
            for start in [0_u8] {
                let mut reachable = vec![start];
                let mut seen = [false; 9];
                while let Some(at) = reachable.pop() {
                    if at == STEP_DONE || seen[at as usize] {
                        continue;
                    }
                    seen[at as usize] = true;
                    reachable.push(octant[at as usize].next_on_failure);
                    reachable.push(octant[at as usize].next_on_success);
                }
                assert!(seen[0] && seen[1], "first two points must always be tested");
            }
        }
    }
}
