use dlogcrypt_traits::CryptoError;
use rug::Integer;

/// Raises `base` to `exponent` modulo `modulus` by repeated squaring.
///
/// Every intermediate product is reduced, so working values stay below `modulus^2` and the
/// cost is one or two multiplications per exponent bit. The exponent must be non-negative;
/// negative powers go through [`invert`] instead.
pub fn pow_mod(base: &Integer, exponent: &Integer, modulus: &Integer) -> Integer {
    debug_assert!(*exponent >= 0, "negative exponents must go through invert");
    debug_assert!(*modulus >= 2, "the modulus must be at least 2");

    let mut result = Integer::from(1);
    let mut square = Integer::from(base % modulus);
    if square < 0 {
        square += modulus;
    }
    let mut exponent = exponent.clone();

    while exponent != 0 {
        if exponent.is_odd() {
            result = result * &square % modulus;
        }
        square = Integer::from(square.square_ref()) % modulus;
        exponent >>= 1;
    }

    result
}

/// Computes the multiplicative inverse of `value` modulo `modulus` with the extended
/// Euclidean algorithm, normalized into `[0, modulus)`.
///
/// Fails with [`CryptoError::NoInverse`] when `gcd(value, modulus) != 1`.
pub fn invert(value: &Integer, modulus: &Integer) -> Result<Integer, CryptoError> {
    let mut remainder = Integer::from(value % modulus);
    if remainder < 0 {
        remainder += modulus;
    }
    let mut next_remainder = modulus.clone();

    // Bezout coefficient of `value`, maintained so that
    // coefficient * value = remainder (mod modulus) at every step.
    let mut coefficient = Integer::from(1);
    let mut next_coefficient = Integer::from(0);

    while next_remainder != 0 {
        let quotient = Integer::from(&remainder / &next_remainder);

        let updated = remainder - Integer::from(&quotient * &next_remainder);
        remainder = std::mem::replace(&mut next_remainder, updated);

        let updated = coefficient - Integer::from(&quotient * &next_coefficient);
        coefficient = std::mem::replace(&mut next_coefficient, updated);
    }

    if remainder != 1 {
        return Err(CryptoError::NoInverse {
            value: value.clone(),
            modulus: modulus.clone(),
        });
    }

    if coefficient < 0 {
        coefficient += modulus;
    }

    Ok(coefficient)
}
