#![doc = include_str!("../README.md")]
#![warn(missing_docs, unused_imports)]

pub mod benchmark;

pub use dlogcrypt_elgamal;
pub use dlogcrypt_numbertheory;
pub use dlogcrypt_solvers;
pub use dlogcrypt_traits;
