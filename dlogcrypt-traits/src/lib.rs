#![warn(missing_docs, unused_imports)]

//! _This is a part of **dlogcrypt**. For more information, head to the
//! `dlogcrypt` crate._
//!
//! Shared vocabulary for the workspace: the discrete logarithm solver contract,
//! the error taxonomy of the cryptosystem and number-theoretic routines, and
//! random number generation that is consistent with the dependencies'
//! requirements.

/// Random number generation that is consistent with the dependencies' requirements.
pub mod randomness;

/// The discrete logarithm solver contract shared by all cryptanalysis strategies.
pub mod dlp;

use rug::Integer;
use thiserror::Error;

/// Errors that can arise from the cryptosystem and the number-theoretic routines.
///
/// Discrete logarithm solvers never produce these: a failed search is a normal
/// outcome reported as data, not an error (see [`dlp::SolverReport`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Encryption was requested for a message outside the plaintext range `(0, p)`.
    #[error("message {message} lies outside the plaintext range (0, {modulus})")]
    OutOfRangeMessage {
        /// The rejected message.
        message: Integer,
        /// The modulus bounding the plaintext range.
        modulus: Integer,
    },

    /// A modular inverse was requested for a value that is not coprime to the
    /// modulus. Recoverable when it surfaces from a solver's congruence solve;
    /// fatal when decryption hits it, since a valid ciphertext under a prime
    /// modulus always has an invertible shared secret.
    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse {
        /// The value that could not be inverted.
        value: Integer,
        /// The modulus of the attempted inversion.
        modulus: Integer,
    },

    /// No generator was found for the multiplicative group. A true prime always
    /// has one, so this signals a primality or factorization bug upstream.
    #[error("no generator found for the multiplicative group modulo {modulus}")]
    NoGeneratorFound {
        /// The modulus whose group was searched.
        modulus: Integer,
    },

    /// Explicitly supplied group parameters used a modulus that is not an odd prime.
    #[error("modulus {modulus} is not an odd prime")]
    CompositeModulus {
        /// The rejected modulus.
        modulus: Integer,
    },
}
