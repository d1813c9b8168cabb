#![warn(missing_docs, unused_imports)]

//! _This is a part of **dlogcrypt**. For more information, head to the
//! `dlogcrypt` crate._
//!
//! Attacks on the discrete logarithm problem `g^x = h (mod p)`: an exhaustive scan, a
//! meet-in-the-middle table attack, and a randomized cycle-finding walk. All three
//! implement [`DiscreteLogSolver`] and, whenever they succeed, agree on the recovered
//! exponent.
//!
//! ```
//! use dlogcrypt_solvers::{BabyStepGiantStep, DiscreteLogSolver};
//! use dlogcrypt_traits::dlp::DiscreteLogInstance;
//! use rug::Integer;
//!
//! // 5^x = 8 (mod 23) has the unique solution x = 6.
//! let instance = DiscreteLogInstance::new(
//!     Integer::from(5),
//!     Integer::from(8),
//!     Integer::from(23),
//! );
//! let report = BabyStepGiantStep.solve(&instance);
//! assert_eq!(report.solution, Some(Integer::from(6)));
//! ```

/// Meet-in-the-middle attack trading `O(sqrt p)` memory for `O(sqrt p)` time.
pub mod baby_giant;

/// Exhaustive search over the exponent space.
pub mod brute_force;

/// Randomized cycle-finding attack in constant memory.
pub mod pollard_rho;

pub use baby_giant::BabyStepGiantStep;
pub use brute_force::BruteForce;
pub use pollard_rho::PollardRho;

pub use dlogcrypt_traits::dlp::DiscreteLogSolver;
