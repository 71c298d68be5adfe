use serde::{Deserialize, Serialize};

use crate::hashing::{hash_part_1024_2d, hash_part_1024_3d, hash_part_1024_4d};

// Value noise: hash the corners of the containing grid cell and blend them.
// The corner hashes take premultiplied coordinates so that moving one cell
// along an axis is a single wrapping add of the axis constant.

const STEP_X2: i32 = 0xD1B55;
const STEP_Y2: i32 = 0xABC99;
const STEP_X3: i32 = 0xDB4F1;
const STEP_Y3: i32 = 0xBBE05;
const STEP_Z3: i32 = 0xA0F2F;
const STEP_X4: i32 = 0xE19B1;
const STEP_Y4: i32 = 0xC6D1D;
const STEP_Z4: i32 = 0xAF36D;
const STEP_W4: i32 = 0x9A695;

/// Smoothing curve applied to the per-axis blend factors of value and foam
/// noise. `Linear` shows visible cell artifacts, `Hermite` is the usual
/// choice, `Quintic` has continuous second derivatives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interp {
    Linear,
    #[default]
    Hermite,
    Quintic,
}

#[inline]
pub(crate) fn fast_floor(f: f64) -> i32 {
    if f >= 0.0 { f as i32 } else { f as i32 - 1 }
}

#[inline]
fn hermite(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn smooth(t: f64, interp: Interp) -> f64 {
    match interp {
        Interp::Linear => t,
        Interp::Hermite => hermite(t),
        Interp::Quintic => quintic(t),
    }
}

/// Single octave of 2D value noise in [-1, 1].
pub fn value_2d(seed: i32, x: f64, y: f64, interp: Interp) -> f64 {
    let xf = fast_floor(x);
    let yf = fast_floor(y);
    let x = smooth(x - xf as f64, interp);
    let y = smooth(y - yf as f64, interp);
    let xf = xf.wrapping_mul(STEP_X2);
    let yf = yf.wrapping_mul(STEP_Y2);
    let x1 = xf.wrapping_add(STEP_X2);
    let y1 = yf.wrapping_add(STEP_Y2);
    ((1.0 - y)
        * ((1.0 - x) * hash_part_1024_2d(xf, yf, seed) as f64
            + x * hash_part_1024_2d(x1, yf, seed) as f64)
        + y * ((1.0 - x) * hash_part_1024_2d(xf, y1, seed) as f64
            + x * hash_part_1024_2d(x1, y1, seed) as f64))
        * (1.0 / 512.0)
}

/// Single octave of 3D value noise in [-1, 1].
pub fn value_3d(seed: i32, x: f64, y: f64, z: f64, interp: Interp) -> f64 {
    let xf = fast_floor(x);
    let yf = fast_floor(y);
    let zf = fast_floor(z);
    let x = smooth(x - xf as f64, interp);
    let y = smooth(y - yf as f64, interp);
    let z = smooth(z - zf as f64, interp);
    let xf = xf.wrapping_mul(STEP_X3);
    let yf = yf.wrapping_mul(STEP_Y3);
    let zf = zf.wrapping_mul(STEP_Z3);
    let x1 = xf.wrapping_add(STEP_X3);
    let y1 = yf.wrapping_add(STEP_Y3);
    let z1 = zf.wrapping_add(STEP_Z3);
    ((1.0 - z)
        * ((1.0 - y)
            * ((1.0 - x) * hash_part_1024_3d(xf, yf, zf, seed) as f64
                + x * hash_part_1024_3d(x1, yf, zf, seed) as f64)
            + y * ((1.0 - x) * hash_part_1024_3d(xf, y1, zf, seed) as f64
                + x * hash_part_1024_3d(x1, y1, zf, seed) as f64))
        + z * ((1.0 - y)
            * ((1.0 - x) * hash_part_1024_3d(xf, yf, z1, seed) as f64
                + x * hash_part_1024_3d(x1, yf, z1, seed) as f64)
            + y * ((1.0 - x) * hash_part_1024_3d(xf, y1, z1, seed) as f64
                + x * hash_part_1024_3d(x1, y1, z1, seed) as f64)))
        * (1.0 / 512.0)
}

/// Single octave of 4D value noise in [-1, 1].
pub fn value_4d(seed: i32, x: f64, y: f64, z: f64, w: f64, interp: Interp) -> f64 {
    let xf = fast_floor(x);
    let yf = fast_floor(y);
    let zf = fast_floor(z);
    let wf = fast_floor(w);
    let x = smooth(x - xf as f64, interp);
    let y = smooth(y - yf as f64, interp);
    let z = smooth(z - zf as f64, interp);
    let w = smooth(w - wf as f64, interp);
    let xf = xf.wrapping_mul(STEP_X4);
    let yf = yf.wrapping_mul(STEP_Y4);
    let zf = zf.wrapping_mul(STEP_Z4);
    let wf = wf.wrapping_mul(STEP_W4);
    let x1 = xf.wrapping_add(STEP_X4);
    let y1 = yf.wrapping_add(STEP_Y4);
    let z1 = zf.wrapping_add(STEP_Z4);
    let w1 = wf.wrapping_add(STEP_W4);
    let h = |x, y, z, w| hash_part_1024_4d(x, y, z, w, seed) as f64;
    ((1.0 - w)
        * ((1.0 - z)
            * ((1.0 - y) * ((1.0 - x) * h(xf, yf, zf, wf) + x * h(x1, yf, zf, wf))
                + y * ((1.0 - x) * h(xf, y1, zf, wf) + x * h(x1, y1, zf, wf)))
            + z * ((1.0 - y) * ((1.0 - x) * h(xf, yf, z1, wf) + x * h(x1, yf, z1, wf))
                + y * ((1.0 - x) * h(xf, y1, z1, wf) + x * h(x1, y1, z1, wf))))
        + w * ((1.0 - z)
            * ((1.0 - y) * ((1.0 - x) * h(xf, yf, zf, w1) + x * h(x1, yf, zf, w1))
                + y * ((1.0 - x) * h(xf, y1, zf, w1) + x * h(x1, y1, zf, w1)))
            + z * ((1.0 - y) * ((1.0 - x) * h(xf, yf, z1, w1) + x * h(x1, yf, z1, w1))
                + y * ((1.0 - x) * h(xf, y1, z1, w1) + x * h(x1, y1, z1, w1)))))
        * (1.0 / 512.0)
}

// Unit-range variants used as the building block of foam noise. Always
// Hermite-smoothed, and mapped to [0, 1] so the foam samples can feed straight
// into the next sample's coordinates.

pub(crate) fn value_unit_2d(seed: i32, x: f64, y: f64) -> f64 {
    let xf = fast_floor(x);
    let yf = fast_floor(y);
    let x = hermite(x - xf as f64);
    let y = hermite(y - yf as f64);
    let xf = xf.wrapping_mul(STEP_X2);
    let yf = yf.wrapping_mul(STEP_Y2);
    let x1 = xf.wrapping_add(STEP_X2);
    let y1 = yf.wrapping_add(STEP_Y2);
    ((1.0 - y)
        * ((1.0 - x) * hash_part_1024_2d(xf, yf, seed) as f64
            + x * hash_part_1024_2d(x1, yf, seed) as f64)
        + y * ((1.0 - x) * hash_part_1024_2d(xf, y1, seed) as f64
            + x * hash_part_1024_2d(x1, y1, seed) as f64))
        * (1.0 / 1024.0)
        + 0.5
}

pub(crate) fn value_unit_3d(seed: i32, x: f64, y: f64, z: f64) -> f64 {
    let xf = fast_floor(x);
    let yf = fast_floor(y);
    let zf = fast_floor(z);
    let x = hermite(x - xf as f64);
    let y = hermite(y - yf as f64);
    let z = hermite(z - zf as f64);
    let xf = xf.wrapping_mul(STEP_X3);
    let yf = yf.wrapping_mul(STEP_Y3);
    let zf = zf.wrapping_mul(STEP_Z3);
    let x1 = xf.wrapping_add(STEP_X3);
    let y1 = yf.wrapping_add(STEP_Y3);
    let z1 = zf.wrapping_add(STEP_Z3);
    ((1.0 - z)
        * ((1.0 - y)
            * ((1.0 - x) * hash_part_1024_3d(xf, yf, zf, seed) as f64
                + x * hash_part_1024_3d(x1, yf, zf, seed) as f64)
            + y * ((1.0 - x) * hash_part_1024_3d(xf, y1, zf, seed) as f64
                + x * hash_part_1024_3d(x1, y1, zf, seed) as f64))
        + z * ((1.0 - y)
            * ((1.0 - x) * hash_part_1024_3d(xf, yf, z1, seed) as f64
                + x * hash_part_1024_3d(x1, yf, z1, seed) as f64)
            + y * ((1.0 - x) * hash_part_1024_3d(xf, y1, z1, seed) as f64
                + x * hash_part_1024_3d(x1, y1, z1, seed) as f64)))
        * (1.0 / 1024.0)
        + 0.5
}

pub(crate) fn value_unit_4d(seed: i32, x: f64, y: f64, z: f64, w: f64) -> f64 {
    let xf = fast_floor(x);
    let yf = fast_floor(y);
    let zf = fast_floor(z);
    let wf = fast_floor(w);
    let x = hermite(x - xf as f64);
    let y = hermite(y - yf as f64);
    let z = hermite(z - zf as f64);
    let w = hermite(w - wf as f64);
    let xf = xf.wrapping_mul(STEP_X4);
    let yf = yf.wrapping_mul(STEP_Y4);
    let zf = zf.wrapping_mul(STEP_Z4);
    let wf = wf.wrapping_mul(STEP_W4);
    let x1 = xf.wrapping_add(STEP_X4);
    let y1 = yf.wrapping_add(STEP_Y4);
    let z1 = zf.wrapping_add(STEP_Z4);
    let w1 = wf.wrapping_add(STEP_W4);
    let h = |x, y, z, w| hash_part_1024_4d(x, y, z, w, seed) as f64;
    ((1.0 - w)
        * ((1.0 - z)
            * ((1.0 - y) * ((1.0 - x) * h(xf, yf, zf, wf) + x * h(x1, yf, zf, wf))
                + y * ((1.0 - x) * h(xf, y1, zf, wf) + x * h(x1, y1, zf, wf)))
            + z * ((1.0 - y) * ((1.0 - x) * h(xf, yf, z1, wf) + x * h(x1, yf, z1, wf))
                + y * ((1.0 - x) * h(xf, y1, z1, wf) + x * h(x1, y1, z1, wf))))
        + w * ((1.0 - z)
            * ((1.0 - y) * ((1.0 - x) * h(xf, yf, zf, w1) + x * h(x1, yf, zf, w1))
                + y * ((1.0 - x) * h(xf, y1, zf, w1) + x * h(x1, y1, zf, w1)))
            + z * ((1.0 - y) * ((1.0 - x) * h(xf, yf, z1, w1) + x * h(x1, yf, z1, w1))
                + y * ((1.0 - x) * h(xf, y1, z1, w1) + x * h(x1, y1, z1, w1)))))
        * (1.0 / 1024.0)
        + 0.5
}
