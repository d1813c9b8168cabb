#![warn(missing_docs, unused_imports)]

//! _This is a part of **dlogcrypt**. For more information, head to the
//! `dlogcrypt` crate._
//!
//! Number-theoretic building blocks for the cryptanalysis engine: random prime
//! generation, factorization into distinct primes, discovery of multiplicative
//! group generators, and exact modular arithmetic.

/// Exact modular exponentiation and inversion over arbitrary-precision integers.
pub mod modular;

use dlogcrypt_traits::randomness::{GeneralRng, SecureRng};
use dlogcrypt_traits::CryptoError;
use log::trace;
use rug::integer::IsPrime;
use rug::Integer;

const REPS: u32 = 25;

/// Generates a uniformly random prime number of a given bit length. So, the number contains
/// `bit_length` bits, of which the first and the last bit are always 1.
///
/// Candidates are drawn and tested until one passes; the expected number of attempts grows
/// linearly with the bit length.
pub fn gen_prime<R: SecureRng>(bit_length: u32, rng: &mut GeneralRng<R>) -> Integer {
    let mut attempts: u64 = 0;

    loop {
        attempts += 1;
        let mut candidate = Integer::from(Integer::random_bits(bit_length, &mut rng.rug_rng()));

        let set_bits = (Integer::from(1) << (bit_length - 1)) + Integer::from(1);
        candidate |= set_bits;

        if candidate.is_probably_prime(REPS) != IsPrime::No {
            trace!(
                "drew a {}-bit prime after {} candidate(s)",
                bit_length,
                attempts
            );
            return candidate;
        }
    }
}

/// Factors `n` into its distinct prime divisors, in ascending order.
///
/// Trial division by 2 and then every odd candidate up to the square root of whatever
/// remains. Intended for group orders `p - 1` at the tens-of-bits scale this engine
/// targets; the cost grows with `sqrt(n)`.
pub fn prime_factors(n: &Integer) -> Vec<Integer> {
    let mut factors = Vec::new();
    let mut remaining = n.clone();

    if remaining <= 1 {
        return factors;
    }

    if remaining.is_even() {
        factors.push(Integer::from(2));
        while remaining.is_even() {
            remaining >>= 1;
        }
    }

    let mut divisor = Integer::from(3);
    while Integer::from(divisor.square_ref()) <= remaining {
        if remaining.is_divisible(&divisor) {
            factors.push(divisor.clone());
            while remaining.is_divisible(&divisor) {
                remaining /= &divisor;
            }
        }
        divisor += 2;
    }

    if remaining > 1 {
        factors.push(remaining);
    }

    factors
}

/// Finds the smallest generator of the multiplicative group modulo the prime `p`.
///
/// A candidate `g` generates the full group precisely when `g^((p-1)/q) != 1 (mod p)` for
/// every distinct prime factor `q` of `p - 1`; candidates are scanned upward from 2 and
/// the first hit is returned. [`CryptoError::NoGeneratorFound`] can only surface when `p`
/// was not actually prime, so callers should treat it as an invariant violation.
pub fn find_generator(p: &Integer) -> Result<Integer, CryptoError> {
    let group_order = Integer::from(p - 1);
    let factors = prime_factors(&group_order);

    let mut candidate = Integer::from(2);
    while candidate < *p {
        let generates = factors.iter().all(|factor| {
            let exponent = Integer::from(&group_order / factor);
            modular::pow_mod(&candidate, &exponent, p) != 1
        });

        if generates {
            return Ok(candidate);
        }
        candidate += 1;
    }

    Err(CryptoError::NoGeneratorFound { modulus: p.clone() })
}

#[cfg(test)]
mod tests {
    use crate::{find_generator, gen_prime, modular, prime_factors};
    use dlogcrypt_traits::randomness::GeneralRng;
    use rand_core::OsRng;
    use rug::Integer;

    fn assert_no_factors_below_100_000(integer: &Integer) {
        let (_, hi) = primal::estimate_nth_prime(100_000);
        for prime in primal::Sieve::new(hi as usize).primes_from(0) {
            assert!(
                !integer.is_divisible_u(prime as u32),
                "{} is divisible by {}",
                integer,
                prime
            );
        }
    }

    #[test]
    fn test_gen_prime_for_factors() {
        let mut rng = GeneralRng::new(OsRng);
        let generated_prime = gen_prime(256, &mut rng);

        assert_no_factors_below_100_000(&generated_prime);
    }

    #[test]
    fn test_gen_prime_bit_length() {
        let mut rng = GeneralRng::new(OsRng);

        for &bits in &[8u32, 16, 24, 48] {
            let generated_prime = gen_prime(bits, &mut rng);
            assert_eq!(generated_prime.significant_bits(), bits);
            assert!(generated_prime.is_odd());
        }
    }

    #[test]
    fn test_prime_factors_known_values() {
        let factors = |n: u32| prime_factors(&Integer::from(n));

        assert_eq!(factors(22), vec![2, 11]);
        assert_eq!(factors(720), vec![2, 3, 5]);
        assert_eq!(factors(97), vec![97]);
        assert_eq!(factors(1024), vec![2]);
        assert!(factors(1).is_empty());
    }

    #[test]
    fn test_find_generator_returns_smallest() {
        let smallest = |p: u32| find_generator(&Integer::from(p)).unwrap();

        assert_eq!(smallest(17), 3);
        assert_eq!(smallest(23), 5);
        assert_eq!(smallest(101), 2);
        assert_eq!(smallest(1019), 2);
    }

    #[test]
    fn test_generator_has_full_order() {
        let mut rng = GeneralRng::new(OsRng);
        let p = gen_prime(20, &mut rng);
        let g = find_generator(&p).unwrap();
        let group_order = Integer::from(&p - 1);

        assert_eq!(modular::pow_mod(&g, &group_order, &p), 1);

        for factor in prime_factors(&group_order) {
            let exponent = Integer::from(&group_order / &factor);
            assert_ne!(modular::pow_mod(&g, &exponent, &p), 1);
        }
    }
}
