// core holds the noise kernels, the fractal combinators, and the flood-fill
// area generators
pub mod engine;
pub mod flood2;
pub mod flood3;
pub mod foam;
pub mod fractal;
mod gradients;
pub mod hashing;
pub mod lattice;
pub mod simplex;
pub mod utils;
pub mod value;

pub use engine::{ConfigError, Noise, NoiseType, sway_randomized};
pub use flood2::AreaContext2D;
pub use flood3::AreaContext3D;
pub use foam::{foam_2d, foam_3d, foam_4d};
pub use fractal::FractalType;
pub use lattice::{LatticeNoise, LatticeOrientation2D, LatticeOrientation3D};
pub use simplex::{simplex_2d, simplex_3d, simplex_4d};
pub use utils::{HeightMap2D, flatten2, normalize2, render2};
pub use value::{Interp, value_2d, value_3d, value_4d};

// noise generator that can sample 2D, 3D or 4D points
// implementations override the arities they support.
pub trait NoiseGenerator {
    // Sample 2D noise at (x, y).
    fn get2(&self, x: f64, y: f64) -> f64 {
        let _ = (x, y);
        panic!("get2 not implemented for this generator");
    }

    // Sample 3D noise at (x, y, z).
    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        let _ = (x, y, z);
        panic!("get3 not implemented for this generator");
    }

    // Sample 4D noise at (x, y, z, w).
    fn get4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let _ = (x, y, z, w);
        panic!("get4 not implemented for this generator");
    }
}

impl NoiseGenerator for Noise {
    fn get2(&self, x: f64, y: f64) -> f64 {
        self.get_noise2(x, y)
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.get_noise3(x, y, z)
    }

    fn get4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.get_noise4(x, y, z, w)
    }
}

impl NoiseGenerator for LatticeNoise {
    fn get2(&self, x: f64, y: f64) -> f64 {
        self.noise2(x, y)
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise3_classic(x, y, z)
    }
}
