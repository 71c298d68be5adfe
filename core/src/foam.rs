use crate::value::{value_unit_2d, value_unit_3d, value_unit_4d};

// Foam noise: D+1 value-noise samples taken along the axes of a rotated
// simplex, each sample's first coordinate nudged by the previous sample's
// output. Averaging the correlated samples and reshaping with a contrast
// curve gives a cloudier look than any single value octave.

#[inline]
fn advance_seed(seed: i32) -> i32 {
    let s = seed.wrapping_add(0x9E3779BD_u32 as i32);
    s ^ ((s as u32) >> 14) as i32
}

/// Single octave of 2D foam noise in [-1, 1].
pub fn foam_2d(seed: i32, x: f64, y: f64) -> f64 {
    let p0 = x;
    let p1 = x * -0.5 + y * 0.8660254037844386;
    let p2 = x * -0.5 + y * -0.8660254037844387;

    let a = value_unit_2d(seed, p2, p0);
    let seed = advance_seed(seed);
    let b = value_unit_2d(seed, p1 + a, p2);
    let seed = advance_seed(seed);
    let c = value_unit_2d(seed, p0 + b, p1);
    let result = (a + b + c) * (1.0 / 3.0);
    if result <= 0.5 {
        result * result * 4.0 - 1.0
    } else {
        1.0 - (result - 1.0) * (result - 1.0) * 4.0
    }
}

/// Single octave of 3D foam noise in [-1, 1].
pub fn foam_3d(seed: i32, x: f64, y: f64, z: f64) -> f64 {
    let p0 = x;
    let p1 = x * -0.3333333333333333 + y * 0.9428090415820634;
    let p2 = x * -0.3333333333333333 + y * -0.4714045207910317 + z * 0.816496580927726;
    let p3 = x * -0.3333333333333333 + y * -0.4714045207910317 + z * -0.816496580927726;

    let a = value_unit_3d(seed, p3, p2, p0);
    let seed = advance_seed(seed);
    let b = value_unit_3d(seed, p0 + a, p1, p3);
    let seed = advance_seed(seed);
    let c = value_unit_3d(seed, p1 + b, p2, p3);
    let seed = advance_seed(seed);
    let d = value_unit_3d(seed, p0 + c, p1, p2);

    let result = (a + b + c + d) * 0.25;
    if result <= 0.5 {
        let r = result * 2.0;
        r * r * r - 1.0
    } else {
        let r = (result - 1.0) * 2.0;
        r * r * r + 1.0
    }
}

/// Single octave of 4D foam noise in [-1, 1].
pub fn foam_4d(seed: i32, x: f64, y: f64, z: f64, w: f64) -> f64 {
    let p0 = x;
    let p1 = x * -0.25 + y * 0.9682458365518543;
    let p2 = x * -0.25 + y * -0.3227486121839514 + z * 0.91287092917527690;
    let p3 = x * -0.25 + y * -0.3227486121839514 + z * -0.45643546458763834
        + w * 0.7905694150420949;
    let p4 = x * -0.25 + y * -0.3227486121839514 + z * -0.45643546458763834
        + w * -0.7905694150420947;

    let a = value_unit_4d(seed, p1, p2, p3, p4);
    let seed = advance_seed(seed);
    let b = value_unit_4d(seed, p0 + a, p2, p3, p4);
    let seed = advance_seed(seed);
    let c = value_unit_4d(seed, p0 + b, p1, p3, p4);
    let seed = advance_seed(seed);
    let d = value_unit_4d(seed, p0 + c, p1, p2, p4);
    let seed = advance_seed(seed);
    let e = value_unit_4d(seed, p0 + d, p1, p2, p3);

    let result = (a + b + c + d + e) * 0.2;
    if result <= 0.5 {
        let mut r = result * 2.0;
        r *= r;
        r * r - 1.0
    } else {
        let mut r = (result - 1.0) * 2.0;
        r *= r;
        1.0 - r * r
    }
}
