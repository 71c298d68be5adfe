use serde::{Deserialize, Serialize};

/// How octaves combine in the fractal noise variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractalType {
    #[default]
    Fbm,
    Billow,
    RidgedMulti,
}

/// Octave shaping shared by all fractal paths. `bounding` is the cached
/// normalizer `1 / (1 + gain + gain² + …)`, recomputed whenever octaves or
/// gain change.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FractalParams {
    pub octaves: usize,
    pub lacunarity: f64,
    pub gain: f64,
    pub bounding: f64,
}

/// Normalizer for FBM and billow sums.
pub(crate) fn fractal_bounding(octaves: usize, gain: f64) -> f64 {
    let mut amp = gain;
    let mut amp_fractal = 1.0;
    for _ in 1..octaves {
        amp_fractal += amp;
        amp *= gain;
    }
    1.0 / amp_fractal
}

/// Scale every coordinate by the lacunarity. The default octave advance;
/// the 2D foam paths substitute an axis-swapping variant.
pub(crate) fn scale_coords<const N: usize>(point: &mut [f64; N], lacunarity: f64) {
    for c in point.iter_mut() {
        *c *= lacunarity;
    }
}

/// Plain fractional-Brownian-motion sum: octave i uses seed+i, coordinates
/// advanced between octaves, amplitude shrinking by `gain`.
pub(crate) fn fbm<const N: usize>(
    seed: i32,
    mut point: [f64; N],
    params: &FractalParams,
    kernel: impl Fn(i32, [f64; N]) -> f64,
    advance: impl Fn(&mut [f64; N], f64),
) -> f64 {
    let mut sum = kernel(seed, point);
    let mut amp = 1.0;
    for i in 1..params.octaves as i32 {
        advance(&mut point, params.lacunarity);
        amp *= params.gain;
        sum += kernel(seed.wrapping_add(i), point) * amp;
    }
    sum * params.bounding
}

/// Billow variant: each octave is folded (`|n|·2 − 1`) before summing,
/// giving puffy ridgeless lobes.
pub(crate) fn billow<const N: usize>(
    seed: i32,
    mut point: [f64; N],
    params: &FractalParams,
    kernel: impl Fn(i32, [f64; N]) -> f64,
    advance: impl Fn(&mut [f64; N], f64),
) -> f64 {
    let mut sum = kernel(seed, point).abs() * 2.0 - 1.0;
    let mut amp = 1.0;
    for i in 1..params.octaves as i32 {
        advance(&mut point, params.lacunarity);
        amp *= params.gain;
        sum += (kernel(seed.wrapping_add(i), point).abs() * 2.0 - 1.0) * amp;
    }
    sum * params.bounding
}

/// Ridged-multi variant. Each octave's amplitude feeds back from the previous
/// spike, clamped to [0, 1], with bias weights doubling per octave; the sum is
/// normalized by the total bias weight. The configured gain is not consulted.
pub(crate) fn ridged_multi<const N: usize>(
    seed: i32,
    mut point: [f64; N],
    params: &FractalParams,
    kernel: impl Fn(i32, [f64; N]) -> f64,
    advance: impl Fn(&mut [f64; N], f64),
) -> f64 {
    let mut sum = 0.0;
    let mut amp = 1.0;
    let mut amp_bias = 1.0;
    for i in 0..params.octaves as i32 {
        let mut spike = 1.0 - kernel(seed.wrapping_add(i), point).abs();
        spike *= spike * amp;
        amp = (spike * 2.0).clamp(0.0, 1.0);
        sum += spike * amp_bias;
        amp_bias *= 2.0;
        advance(&mut point, params.lacunarity);
    }
    sum / ((amp_bias - 1.0) * 0.5) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::simplex_2d;

    fn params(octaves: usize, gain: f64) -> FractalParams {
        FractalParams {
            octaves,
            lacunarity: 2.0,
            gain,
            bounding: fractal_bounding(octaves, gain),
        }
    }

    #[test]
    fn bounding_normalizes_geometric_series() {
        assert!((fractal_bounding(1, 0.5) - 1.0).abs() < 1e-12);
        assert!((fractal_bounding(2, 0.5) - 1.0 / 1.5).abs() < 1e-12);
        assert!((fractal_bounding(3, 0.5) - 1.0 / 1.75).abs() < 1e-12);
    }

    #[test]
    fn single_octave_fbm_is_the_bare_kernel() {
        let p = params(1, 0.5);
        let point = [3.2, -1.7];
        let direct = simplex_2d(1337, point[0], point[1]);
        let fractal = fbm(1337, point, &p, simplex_2d_kernel, scale_coords);
        assert!((direct - fractal).abs() < 1e-12);
    }

    fn simplex_2d_kernel(seed: i32, p: [f64; 2]) -> f64 {
        simplex_2d(seed, p[0], p[1])
    }

    #[test]
    fn octaves_change_the_field() {
        let one = params(1, 0.5);
        let five = params(5, 0.5);
        let mut diffs = 0;
        for i in 0..32 {
            let point = [i as f64 * 0.21, i as f64 * -0.13];
            let a = fbm(7, point, &one, simplex_2d_kernel, scale_coords);
            let b = fbm(7, point, &five, simplex_2d_kernel, scale_coords);
            if (a - b).abs() > 1e-9 {
                diffs += 1;
            }
        }
        assert!(diffs > 24);
    }

    #[test]
    fn ridged_amplitude_feedback_stays_bounded() {
        let p = params(8, 0.5);
        for i in 0..500 {
            let point = [i as f64 * 0.37, i as f64 * 0.11 - 9.0];
            let v = ridged_multi(1337, point, &p, simplex_2d_kernel, scale_coords);
            assert!(v.is_finite(), "ridged NaN at {point:?}");
            assert!((-1.0..=1.0).contains(&v), "ridged {v} at {point:?}");
        }
    }

    #[test]
    fn billow_folds_before_summing() {
        let p = params(1, 0.5);
        let point = [0.8, 0.45];
        let direct = simplex_2d(42, point[0], point[1]).abs() * 2.0 - 1.0;
        let b = billow(42, point, &p, simplex_2d_kernel, scale_coords);
        assert!((direct - b).abs() < 1e-12);
    }
}
