use std::collections::HashMap;

use dlogcrypt_numbertheory::modular;
use dlogcrypt_traits::dlp::{DiscreteLogInstance, DiscreteLogSolver};
use rug::Integer;

/// Shanks' baby-step/giant-step algorithm, `O(sqrt p)` in both time and space.
///
/// With `n = ceil(sqrt(p))`, every exponent in `[0, p-2]` decomposes as `x = i*n + j`
/// with `0 <= i, j < n`. The baby steps tabulate `g^j -> j`; the giant steps walk
/// `h * (g^-n)^i` through the table until the `j` column matches.
#[derive(Debug, Default, Clone, Copy)]
pub struct BabyStepGiantStep;

fn ceil_sqrt(n: &Integer) -> Integer {
    let (root, remainder) = n.clone().sqrt_rem(Integer::new());
    if remainder == 0 {
        root
    } else {
        root + 1
    }
}

impl DiscreteLogSolver for BabyStepGiantStep {
    fn name(&self) -> &'static str {
        "baby-step giant-step"
    }

    fn attempt(&self, instance: &DiscreteLogInstance) -> (Option<Integer>, Option<u64>) {
        let p = &instance.modulus;
        let n = ceil_sqrt(p);
        let steps = n.to_u64().unwrap_or(u64::MAX);

        // Baby steps: g^j -> j, the smallest j winning on the (unlikely) collision.
        let mut table: HashMap<Integer, u64> = HashMap::new();
        let mut power = Integer::from(1);
        for j in 0..steps {
            table.entry(power.clone()).or_insert(j);
            power = power * &instance.g % p;
        }

        // Giant-step factor g^-n, computed as g^(n*(p-2)) by Fermat's little theorem.
        let exponent = Integer::from(p - 2) * &n;
        let giant = modular::pow_mod(&instance.g, &exponent, p);

        let mut current = Integer::from(&instance.h % p);
        for i in 0..steps {
            if let Some(&j) = table.get(&current) {
                let x = Integer::from(&n * i) + j;
                return (Some(x), None);
            }
            current = current * &giant % p;
        }

        (None, None)
    }
}
