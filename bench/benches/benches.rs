use core::{
    AreaContext2D, FractalType, LatticeNoise, LatticeOrientation2D, Noise, NoiseType,
    utils::{flatten2, normalize2, render2, to_terrain_image},
};
use criterion::{Criterion, criterion_group, criterion_main};

const SIZE: usize = 257;
const SEED: i32 = 2025;
const FREQ: f64 = 1.0 / 48.0;

fn bench_point_kernels(c: &mut Criterion) {
    let n = Noise::with_frequency(SEED, FREQ);
    c.bench_function("simplex2 point", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                acc += n.simplex2(i as f64, -i as f64);
            }
            acc
        })
    });
    c.bench_function("simplex3 point", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                acc += n.simplex3(i as f64, -i as f64, i as f64 * 0.5);
            }
            acc
        })
    });
    c.bench_function("simplex4 point", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                acc += n.simplex4(i as f64, -i as f64, i as f64 * 0.5, i as f64 * 0.25);
            }
            acc
        })
    });
    c.bench_function("value2 point", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                acc += n.value2(i as f64, -i as f64);
            }
            acc
        })
    });
    c.bench_function("foam2 point", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                acc += n.foam2(i as f64, -i as f64);
            }
            acc
        })
    });
}

fn bench_fractal_modes(c: &mut Criterion) {
    for (fractal_type, name) in [
        (FractalType::Fbm, "fbm 5-octave render"),
        (FractalType::Billow, "billow 5-octave render"),
        (FractalType::RidgedMulti, "ridged 5-octave render"),
    ] {
        let mut n = Noise::configured(SEED, FREQ, NoiseType::SimplexFractal, 5, 2.0, 0.5);
        n.set_fractal_type(fractal_type);
        c.bench_function(name, |b| {
            b.iter(|| {
                let mut map = render2(&n, SIZE, SIZE, 0, 0);
                normalize2(&mut map);
                let flat = flatten2(&map);
                to_terrain_image(&flat)
            })
        });
    }
}

fn bench_lattice_table_build(c: &mut Criterion) {
    c.bench_function("lattice permutation build", |b| {
        b.iter(|| LatticeNoise::new(SEED as i64))
    });
}

fn bench_area_generation(c: &mut Criterion) {
    let noise = LatticeNoise::new(SEED as i64);
    let context = AreaContext2D::new(LatticeOrientation2D::Standard, FREQ, FREQ, 1.0);

    c.bench_function("generate2 flood fill", |b| {
        b.iter(|| {
            let mut buffer = vec![vec![0.0; SIZE]; SIZE];
            noise.generate2(&context, &mut buffer, 0, 0);
            buffer
        })
    });

    c.bench_function("noise2 per-cell loop", |b| {
        b.iter(|| {
            let mut buffer = vec![vec![0.0; SIZE]; SIZE];
            for (y, row) in buffer.iter_mut().enumerate() {
                for (x, v) in row.iter_mut().enumerate() {
                    *v = noise.noise2(x as f64 * FREQ, y as f64 * FREQ);
                }
            }
            buffer
        })
    });
}

criterion_group!(
    noise_benchmarks,
    bench_point_kernels,
    bench_fractal_modes,
    bench_lattice_table_build,
    bench_area_generation
);
criterion_main!(noise_benchmarks);
