use dlogcrypt_traits::dlp::{DiscreteLogInstance, DiscreteLogSolver};
use rug::Integer;

/// Linear scan of every exponent from 0 upward until `g^x` meets the target.
///
/// The running power is maintained with one modular multiplication per candidate, so the
/// whole scan costs `O(p)` group operations. There is exactly one solution in `[0, p-2]`
/// when `g` generates the group, and the scan stops at the first match. Useful as a
/// ground-truth oracle for small moduli; callers decide where "small" ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForce;

impl DiscreteLogSolver for BruteForce {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn attempt(&self, instance: &DiscreteLogInstance) -> (Option<Integer>, Option<u64>) {
        let p = &instance.modulus;
        let g = Integer::from(&instance.g % p);
        let h = Integer::from(&instance.h % p);

        // g^x for the current candidate x.
        let mut power = Integer::from(1);
        let mut x = Integer::from(0);
        let mut tried: u64 = 0;

        while x < *p {
            tried = tried.saturating_add(1);

            if power == h {
                return (Some(x), Some(tried));
            }

            power = power * &g % p;
            x += 1;
        }

        (None, Some(tried))
    }
}
