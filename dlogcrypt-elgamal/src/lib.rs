#![warn(missing_docs, unused_imports)]

//! _This is a part of **dlogcrypt**. For more information, head to the
//! `dlogcrypt` crate._
//!
//! The ElGamal public-key cryptosystem over the multiplicative group of a randomly
//! generated prime, with a discovered group generator. This is an analysis target, not a
//! hardened implementation: key sizes are deliberately small enough for the companion
//! discrete logarithm solvers to attack.
//!
//! ```
//! use dlogcrypt_elgamal::ElGamal;
//! use dlogcrypt_traits::randomness::GeneralRng;
//! use rand_core::OsRng;
//! use rug::Integer;
//!
//! let mut rng = GeneralRng::new(OsRng);
//! let system = ElGamal::new(16, &mut rng).unwrap();
//! let (public_key, secret_key) = system.generate_keys(&mut rng);
//!
//! let ciphertext = public_key.encrypt(&Integer::from(42), &mut rng).unwrap();
//! assert_eq!(secret_key.decrypt(&ciphertext).unwrap(), 42);
//! ```

use dlogcrypt_numbertheory::{find_generator, gen_prime, modular};
use dlogcrypt_traits::dlp::DiscreteLogInstance;
use dlogcrypt_traits::randomness::{GeneralRng, SecureRng};
use dlogcrypt_traits::CryptoError;
use rug::integer::IsPrime;
use rug::Integer;
use serde::{Deserialize, Serialize};

const REPS: u32 = 25;

/// The ElGamal cryptosystem over `Z_p^*` for a prime `p` and group generator `g`.
///
/// Holds the group parameters; key pairs are drawn from them with
/// [`ElGamal::generate_keys`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamal {
    modulus: Integer,
    generator: Integer,
}

impl ElGamal {
    /// Sets up the cryptosystem over a freshly generated prime of `bit_length` bits and
    /// the smallest generator of its multiplicative group.
    pub fn new<R: SecureRng>(
        bit_length: u32,
        rng: &mut GeneralRng<R>,
    ) -> Result<Self, CryptoError> {
        let modulus = gen_prime(bit_length, rng);
        let generator = find_generator(&modulus)?;

        Ok(ElGamal { modulus, generator })
    }

    /// Sets up the cryptosystem over explicitly chosen group parameters.
    ///
    /// The modulus must be an odd probable prime; the generator is trusted as given, so
    /// callers picking one by hand should make sure it actually generates the group.
    pub fn from_parameters(modulus: Integer, generator: Integer) -> Result<Self, CryptoError> {
        if modulus == 2 || modulus.is_probably_prime(REPS) == IsPrime::No {
            return Err(CryptoError::CompositeModulus { modulus });
        }

        Ok(ElGamal { modulus, generator })
    }

    /// The prime modulus `p` of the group.
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    /// The generator `g` of the group.
    pub fn generator(&self) -> &Integer {
        &self.generator
    }

    /// Generates a fresh key pair: a secret exponent `x` drawn uniformly from
    /// `[1, p-2]` and its public component `h = g^x mod p`.
    pub fn generate_keys<R: SecureRng>(&self, rng: &mut GeneralRng<R>) -> (PublicKey, SecretKey) {
        let bound = Integer::from(&self.modulus - 2);
        let x = bound.random_below(&mut rng.rug_rng()) + 1;
        let h = modular::pow_mod(&self.generator, &x, &self.modulus);

        (
            PublicKey {
                p: self.modulus.clone(),
                g: self.generator.clone(),
                h,
            },
            SecretKey {
                x,
                modulus: self.modulus.clone(),
            },
        )
    }
}

/// Public parameters `(p, g, h)` of a key pair: everything a cryptanalyst gets to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    /// Prime modulus of the group.
    pub p: Integer,
    /// Generator of the multiplicative group.
    pub g: Integer,
    /// Public component `g^x mod p`.
    pub h: Integer,
}

impl PublicKey {
    /// Encrypts `message` under this key with a fresh ephemeral exponent.
    ///
    /// The message must lie strictly inside `(0, p)`; encoding anything larger into that
    /// range is the caller's concern.
    pub fn encrypt<R: SecureRng>(
        &self,
        message: &Integer,
        rng: &mut GeneralRng<R>,
    ) -> Result<Ciphertext, CryptoError> {
        let bound = Integer::from(&self.p - 2);
        let k = bound.random_below(&mut rng.rug_rng()) + 1;

        self.encrypt_with(message, &k)
    }

    /// Encrypts `message` with the caller-supplied ephemeral exponent `k`.
    ///
    /// An ephemeral must never cover more than one message; [`PublicKey::encrypt`] draws a
    /// fresh one per call and is the entry point to use outside of known-answer tests.
    pub fn encrypt_with(&self, message: &Integer, k: &Integer) -> Result<Ciphertext, CryptoError> {
        if *message <= 0 || *message >= self.p {
            return Err(CryptoError::OutOfRangeMessage {
                message: message.clone(),
                modulus: self.p.clone(),
            });
        }

        let c1 = modular::pow_mod(&self.g, k, &self.p);
        let c2 = message * modular::pow_mod(&self.h, k, &self.p) % &self.p;

        Ok(Ciphertext { c1, c2 })
    }

    /// The discrete logarithm instance `(g, h, p)` this key hands to an attacker.
    pub fn dlp_instance(&self) -> DiscreteLogInstance {
        DiscreteLogInstance::new(self.g.clone(), self.h.clone(), self.p.clone())
    }
}

/// Secret decryption exponent, kept together with the modulus it belongs to.
pub struct SecretKey {
    x: Integer,
    modulus: Integer,
}

impl SecretKey {
    /// Rebuilds a secret key from a known exponent, e.g. one recovered by a solver.
    pub fn from_exponent(x: Integer, modulus: Integer) -> Self {
        SecretKey { x, modulus }
    }

    /// The secret exponent, exposed for ground-truth comparisons in cryptanalysis runs.
    pub fn exponent(&self) -> &Integer {
        &self.x
    }

    /// Decrypts a ciphertext: `m = c2 * (c1^x)^-1 mod p`.
    ///
    /// [`CryptoError::NoInverse`] can only surface when the shared secret `c1^x` is zero,
    /// which no valid ciphertext under a prime modulus produces; treat it as corruption.
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Integer, CryptoError> {
        let shared = modular::pow_mod(&ciphertext.c1, &self.x, &self.modulus);
        let shared_inverse = modular::invert(&shared, &self.modulus)?;

        Ok(Integer::from(&ciphertext.c2 * &shared_inverse) % &self.modulus)
    }
}

/// An ElGamal ciphertext pair, tied to the single ephemeral exponent that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    /// First component `g^k mod p`.
    pub c1: Integer,
    /// Second component `m * h^k mod p`.
    pub c2: Integer,
}

#[cfg(test)]
mod tests {
    use crate::ElGamal;
    use crate::SecretKey;
    use dlogcrypt_traits::randomness::GeneralRng;
    use dlogcrypt_traits::CryptoError;
    use rand_core::OsRng;
    use rug::Integer;

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let mut rng = GeneralRng::new(OsRng);

        let system = ElGamal::new(32, &mut rng).unwrap();
        let (pk, sk) = system.generate_keys(&mut rng);

        for message in [1u32, 19, 4242].iter() {
            let message = Integer::from(*message);
            let ciphertext = pk.encrypt(&message, &mut rng).unwrap();

            assert_eq!(sk.decrypt(&ciphertext).unwrap(), message);
        }
    }

    #[test]
    fn test_encrypt_is_randomized() {
        let mut rng = GeneralRng::new(OsRng);

        let system = ElGamal::new(32, &mut rng).unwrap();
        let (pk, sk) = system.generate_keys(&mut rng);

        let message = Integer::from(19);
        let first = pk.encrypt(&message, &mut rng).unwrap();
        let second = pk.encrypt(&message, &mut rng).unwrap();

        assert_ne!(first, second);
        assert_eq!(sk.decrypt(&first).unwrap(), message);
        assert_eq!(sk.decrypt(&second).unwrap(), message);
    }

    #[test]
    fn test_encrypt_rejects_out_of_range_messages() {
        let mut rng = GeneralRng::new(OsRng);

        let system = ElGamal::new(16, &mut rng).unwrap();
        let (pk, _sk) = system.generate_keys(&mut rng);

        for message in [Integer::from(0), pk.p.clone(), Integer::from(&pk.p + 5)].iter() {
            match pk.encrypt(message, &mut rng) {
                Err(CryptoError::OutOfRangeMessage { .. }) => {}
                other => panic!("expected an out-of-range error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_generated_keys_are_consistent() {
        let mut rng = GeneralRng::new(OsRng);

        let system = ElGamal::new(16, &mut rng).unwrap();

        for _ in 0..10 {
            let (pk, sk) = system.generate_keys(&mut rng);

            assert!(*sk.exponent() >= 1);
            assert!(*sk.exponent() <= Integer::from(&pk.p - 2));
            assert_eq!(
                dlogcrypt_numbertheory::modular::pow_mod(&pk.g, sk.exponent(), &pk.p),
                pk.h
            );
        }
    }

    #[test]
    fn test_known_answer_encryption() {
        let system = ElGamal::from_parameters(Integer::from(23), Integer::from(5)).unwrap();
        let (pk, sk) = {
            // x = 6 gives h = 5^6 mod 23 = 8.
            let sk = SecretKey::from_exponent(Integer::from(6), system.modulus().clone());
            let pk = crate::PublicKey {
                p: system.modulus().clone(),
                g: system.generator().clone(),
                h: Integer::from(8),
            };
            (pk, sk)
        };

        let ciphertext = pk
            .encrypt_with(&Integer::from(10), &Integer::from(3))
            .unwrap();
        assert_eq!(ciphertext.c1, 10);
        assert_eq!(ciphertext.c2, 14);

        assert_eq!(sk.decrypt(&ciphertext).unwrap(), 10);
    }

    #[test]
    fn test_from_parameters_rejects_composite_moduli() {
        for modulus in [Integer::from(21), Integer::from(100), Integer::from(2)].iter() {
            match ElGamal::from_parameters(modulus.clone(), Integer::from(2)) {
                Err(CryptoError::CompositeModulus { .. }) => {}
                other => panic!("expected a composite-modulus error, got {:?}", other),
            }
        }
    }
}
