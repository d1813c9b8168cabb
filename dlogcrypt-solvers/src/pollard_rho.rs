use dlogcrypt_numbertheory::modular;
use dlogcrypt_traits::dlp::{DiscreteLogInstance, DiscreteLogSolver};
use rug::ops::RemRounding;
use rug::Integer;

/// Pollard's rho with Floyd cycle detection, expected `O(sqrt p)` time in `O(1)` space.
///
/// The walk advances a triple `(point, a, b)` with `point = g^a * h^b mod p` through a
/// deterministic partition function: depending on `point mod 3` it multiplies by `h`,
/// squares, or multiplies by `g`, with the exponents tracked modulo `p - 1`. A point
/// collision between the one-speed and two-speed walkers yields the congruence
/// `a_slow + x*b_slow = a_fast + x*b_fast (mod p-1)`, solvable whenever the coefficient
/// difference is invertible. An unsolvable collision ends that walk as a miss; a bounded
/// number of restarts from different starting exponents works around most of them.
#[derive(Debug, Clone)]
pub struct PollardRho {
    /// Iteration ceiling per walk; the modulus `p` itself when absent.
    pub max_iterations: Option<u64>,
    /// Number of walks tried before giving up.
    pub restarts: u32,
}

impl Default for PollardRho {
    fn default() -> Self {
        PollardRho {
            max_iterations: None,
            restarts: 5,
        }
    }
}

#[derive(Clone)]
struct Walk {
    point: Integer,
    a: Integer,
    b: Integer,
}

impl PollardRho {
    fn advance(walk: &mut Walk, instance: &DiscreteLogInstance, order: &Integer) {
        let p = &instance.modulus;

        match walk.point.mod_u(3) {
            0 => {
                walk.point = Integer::from(&walk.point * &instance.h) % p;
                walk.b = Integer::from(&walk.b + 1) % order;
            }
            1 => {
                walk.point = Integer::from(walk.point.square_ref()) % p;
                walk.a = Integer::from(&walk.a * 2) % order;
                walk.b = Integer::from(&walk.b * 2) % order;
            }
            _ => {
                walk.point = Integer::from(&walk.point * &instance.g) % p;
                walk.a = Integer::from(&walk.a + 1) % order;
            }
        }
    }

    fn solve_collision(
        slow: &Walk,
        fast: &Walk,
        instance: &DiscreteLogInstance,
        order: &Integer,
    ) -> Option<Integer> {
        let denominator = Integer::from(&fast.b - &slow.b).rem_euc(order);
        if denominator == 0 {
            return None;
        }

        // gcd(denominator, p-1) != 1 means this walk produced an unsolvable congruence.
        let inverse = match modular::invert(&denominator, order) {
            Ok(inverse) => inverse,
            Err(_) => return None,
        };

        let numerator = Integer::from(&slow.a - &fast.a).rem_euc(order);
        let candidate = numerator * inverse % order;

        // The congruence holds modulo the order of g, which may properly divide p - 1;
        // only exponents that check out against the instance are reported.
        if modular::pow_mod(&instance.g, &candidate, &instance.modulus) == instance.h {
            Some(candidate)
        } else {
            None
        }
    }

    fn walk_once(
        &self,
        instance: &DiscreteLogInstance,
        start_a: u64,
        start_b: u64,
        bound: u64,
    ) -> Option<Integer> {
        let p = &instance.modulus;
        let order = Integer::from(p - 1);

        let start = Walk {
            point: modular::pow_mod(&instance.g, &Integer::from(start_a), p)
                * modular::pow_mod(&instance.h, &Integer::from(start_b), p)
                % p,
            a: Integer::from(start_a) % &order,
            b: Integer::from(start_b) % &order,
        };
        let mut slow = start.clone();
        let mut fast = start;

        for _ in 0..bound {
            Self::advance(&mut slow, instance, &order);
            Self::advance(&mut fast, instance, &order);
            Self::advance(&mut fast, instance, &order);

            if slow.point == fast.point {
                return Self::solve_collision(&slow, &fast, instance, &order);
            }
        }

        None
    }
}

impl DiscreteLogSolver for PollardRho {
    fn name(&self) -> &'static str {
        "pollard-rho"
    }

    fn attempt(&self, instance: &DiscreteLogInstance) -> (Option<Integer>, Option<u64>) {
        let bound = self
            .max_iterations
            .unwrap_or_else(|| instance.modulus.to_u64().unwrap_or(u64::MAX));

        // point = 1 is a fixed point of the squaring branch, so walks start from the
        // non-trivial g^(t+1) * h^t instead, one pair of exponents per restart.
        for t in 0..self.restarts {
            let solution = self.walk_once(instance, u64::from(t) + 1, u64::from(t), bound);
            if solution.is_some() {
                return (solution, None);
            }
        }

        (None, None)
    }
}
