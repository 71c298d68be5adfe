// Seed-parameter point hashes shared by the simplex, value, and foam kernels.
// Integer lattice coordinates are mixed with dimension-specific odd multipliers,
// folded into the seed, then run through one rotate/xor/multiply avalanche.
// Everything here is a pure function of its arguments, so two engines with the
// same seed always pick the same gradients.

const MIX_X2: i32 = 0x1827F5;
const MIX_Y2: i32 = 0x123C21;
const MIX_X3: i32 = 0x1A36A9;
const MIX_Y3: i32 = 0x157931;
const MIX_Z3: i32 = 0x119725;
const MIX_X4: i32 = 0x1B69E1;
const MIX_Y4: i32 = 0x177C0B;
const MIX_Z4: i32 = 0x141E5D;
const MIX_W4: i32 = 0x113C31;

#[inline]
fn avalanche(s: i32) -> i32 {
    (s ^ s.rotate_left(19) ^ s.rotate_left(5) ^ 0xD1B54A35u32 as i32).wrapping_mul(0x125493)
}

/// Full 32-bit hash of a 2D point with the given seed.
#[inline]
pub fn hash_all_2d(x: i32, y: i32, s: i32) -> i32 {
    let h = avalanche(s ^ x.wrapping_mul(MIX_X2) ^ y.wrapping_mul(MIX_Y2));
    h ^ ((h as u32) >> 11) as i32
}

/// Full 32-bit hash of a 3D point with the given seed.
#[inline]
pub fn hash_all_3d(x: i32, y: i32, z: i32, s: i32) -> i32 {
    let h = avalanche(s ^ x.wrapping_mul(MIX_X3) ^ y.wrapping_mul(MIX_Y3) ^ z.wrapping_mul(MIX_Z3));
    h ^ ((h as u32) >> 11) as i32
}

/// Full 32-bit hash of a 4D point with the given seed.
#[inline]
pub fn hash_all_4d(x: i32, y: i32, z: i32, w: i32, s: i32) -> i32 {
    let h = avalanche(
        s ^ x.wrapping_mul(MIX_X4)
            ^ y.wrapping_mul(MIX_Y4)
            ^ z.wrapping_mul(MIX_Z4)
            ^ w.wrapping_mul(MIX_W4),
    );
    h ^ ((h as u32) >> 11) as i32
}

/// 8-bit hash of a 2D point, used to pick one of 256 gradient directions.
#[inline]
pub fn hash256_2d(x: i32, y: i32, s: i32) -> usize {
    let h = avalanche(s ^ x.wrapping_mul(MIX_X2) ^ y.wrapping_mul(MIX_Y2));
    ((h as u32) >> 24) as usize
}

/// 8-bit hash of a 4D point; masked further by the caller to address the
/// flattened 4D gradient groups.
#[inline]
pub fn hash256_4d(x: i32, y: i32, z: i32, w: i32, s: i32) -> usize {
    let h = avalanche(
        s ^ x.wrapping_mul(MIX_X4)
            ^ y.wrapping_mul(MIX_Y4)
            ^ z.wrapping_mul(MIX_Z4)
            ^ w.wrapping_mul(MIX_W4),
    );
    ((h as u32) >> 24) as usize
}

/// 5-bit hash of a 3D point, used to pick one of 32 gradient directions.
#[inline]
pub fn hash32_3d(x: i32, y: i32, z: i32, s: i32) -> usize {
    let h = avalanche(s ^ x.wrapping_mul(MIX_X3) ^ y.wrapping_mul(MIX_Y3) ^ z.wrapping_mul(MIX_Z3));
    ((h as u32) >> 27) as usize
}

// The value-noise corner hashes below take coordinates that the caller has
// already premultiplied by the corner-step constants, so stepping one cell is
// one wrapping add at the call site. The arithmetic shift keeps the sign,
// giving a corner value in [-512, 512).

#[inline]
pub(crate) fn hash_part_1024_2d(x: i32, y: i32, s: i32) -> i32 {
    avalanche(s.wrapping_add(x ^ y)) >> 22
}

#[inline]
pub(crate) fn hash_part_1024_3d(x: i32, y: i32, z: i32, s: i32) -> i32 {
    avalanche(s.wrapping_add(x ^ y ^ z)) >> 22
}

#[inline]
pub(crate) fn hash_part_1024_4d(x: i32, y: i32, z: i32, w: i32, s: i32) -> i32 {
    avalanche(s.wrapping_add(x ^ y ^ z ^ w)) >> 22
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_deterministic() {
        assert_eq!(hash_all_2d(12, -34, 1337), hash_all_2d(12, -34, 1337));
        assert_eq!(hash256_2d(-5, 9, 42), hash256_2d(-5, 9, 42));
        assert_eq!(hash32_3d(1, 2, 3, 7), hash32_3d(1, 2, 3, 7));
    }

    #[test]
    fn hash256_stays_in_range() {
        for i in -50..50 {
            for j in -50..50 {
                assert!(hash256_2d(i, j, 1337) < 256);
                assert!(hash256_4d(i, j, i ^ 3, j ^ 5, 1337) < 256);
                assert!(hash32_3d(i, j, i + j, 1337) < 32);
            }
        }
    }

    #[test]
    fn hash_part_1024_stays_in_range() {
        for i in -40i32..40 {
            for j in -40i32..40 {
                let h = hash_part_1024_2d(i.wrapping_mul(0xD1B55), j.wrapping_mul(0xABC99), 99);
                assert!((-512..512).contains(&h), "corner hash {h} escaped its range");
            }
        }
    }

    #[test]
    fn seeds_decorrelate_hashes() {
        let mut same = 0;
        for i in 0..64 {
            for j in 0..64 {
                if hash_all_2d(i, j, 1) == hash_all_2d(i, j, 2) {
                    same += 1;
                }
            }
        }
        assert!(same < 8, "{same} of 4096 hashes collided across seeds");
    }
}
