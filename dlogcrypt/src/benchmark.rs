//! Races every solver against fresh key pairs across a sweep of key sizes.
//!
//! The harness generates a fresh key pair per (bit length, repetition), hands the public
//! parameters to every solver, and records timing and correctness against the ground-truth
//! secret. It performs no I/O of its own; rendering or persisting the records is the
//! caller's concern.

use std::fmt;
use std::time::Duration;

use dlogcrypt_elgamal::ElGamal;
use dlogcrypt_solvers::{BabyStepGiantStep, BruteForce, PollardRho};
use dlogcrypt_traits::dlp::DiscreteLogSolver;
use dlogcrypt_traits::randomness::{GeneralRng, SecureRng};
use dlogcrypt_traits::CryptoError;
use log::debug;
use rug::Integer;
use serde::{Deserialize, Serialize};

/// Sweep configuration for [`run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Key sizes to measure, in bits.
    pub bit_lengths: Vec<u32>,
    /// Fresh key pairs measured per bit length.
    pub repetitions: u32,
    /// Brute force is recorded as skipped, not run, above this bit length.
    pub brute_force_ceiling: u32,
}

impl Default for BenchmarkConfig {
    /// Key sizes every strategy can attack in at most seconds, with brute force capped
    /// at 16 bits.
    fn default() -> Self {
        BenchmarkConfig {
            bit_lengths: vec![8, 10, 12, 14],
            repetitions: 1,
            brute_force_ceiling: 16,
        }
    }
}

/// One measured (key size, solver) outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Bit length of the modulus in this row.
    pub bit_length: u32,
    /// Which repetition within the bit length produced this row.
    pub repetition: u32,
    /// The modulus that was attacked.
    pub modulus: Integer,
    /// Solver name, as reported by [`DiscreteLogSolver::name`].
    pub solver: String,
    /// Wall-clock duration of the attack; `None` when the solver was skipped.
    pub elapsed: Option<Duration>,
    /// The exponent the solver recovered, if any.
    pub recovered: Option<Integer>,
    /// Whether the recovered exponent equals the generated secret.
    pub success: bool,
    /// Set when the solver was not run for this key size.
    pub skipped: bool,
}

impl fmt::Display for BenchmarkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} bits  p = {:<12} {:<22}",
            self.bit_length, self.modulus, self.solver
        )?;

        if self.skipped {
            write!(f, " skipped")
        } else {
            write!(
                f,
                " {:>12?}  {}",
                self.elapsed.unwrap_or_default(),
                if self.success { "recovered" } else { "missed" }
            )
        }
    }
}

/// Runs every solver across the configured key sizes.
///
/// Record order is deterministic (bit length, then repetition, then solver) regardless
/// of how long individual attacks take. Solver misses become rows with `success == false`;
/// only key generation failures abort the run.
pub fn run<R: SecureRng>(
    config: &BenchmarkConfig,
    rng: &mut GeneralRng<R>,
) -> Result<Vec<BenchmarkRecord>, CryptoError> {
    let brute_force = BruteForce;
    let baby_giant = BabyStepGiantStep;
    let pollard_rho = PollardRho::default();

    // The bool marks the solvers subject to the brute-force ceiling.
    let solvers: [(&dyn DiscreteLogSolver, bool); 3] = [
        (&brute_force, true),
        (&baby_giant, false),
        (&pollard_rho, false),
    ];

    let mut records =
        Vec::with_capacity(config.bit_lengths.len() * config.repetitions as usize * solvers.len());

    for &bit_length in &config.bit_lengths {
        for repetition in 0..config.repetitions {
            let system = ElGamal::new(bit_length, rng)?;
            let (public_key, secret_key) = system.generate_keys(rng);
            let instance = public_key.dlp_instance();

            for &(solver, ceiling_bound) in &solvers {
                let record = if ceiling_bound && bit_length > config.brute_force_ceiling {
                    BenchmarkRecord {
                        bit_length,
                        repetition,
                        modulus: public_key.p.clone(),
                        solver: solver.name().to_string(),
                        elapsed: None,
                        recovered: None,
                        success: false,
                        skipped: true,
                    }
                } else {
                    let report = solver.solve(&instance);
                    let success = report.solution.as_ref() == Some(secret_key.exponent());

                    BenchmarkRecord {
                        bit_length,
                        repetition,
                        modulus: public_key.p.clone(),
                        solver: solver.name().to_string(),
                        elapsed: Some(report.elapsed),
                        recovered: report.solution,
                        success,
                        skipped: false,
                    }
                };

                debug!("{}", record);
                records.push(record);
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{run, BenchmarkConfig};
    use dlogcrypt_traits::randomness::GeneralRng;
    use rand_core::OsRng;

    #[test]
    fn test_record_order_is_deterministic() {
        let mut rng = GeneralRng::new(OsRng);
        let config = BenchmarkConfig {
            bit_lengths: vec![8, 10],
            repetitions: 2,
            brute_force_ceiling: 16,
        };

        let records = run(&config, &mut rng).unwrap();
        assert_eq!(records.len(), 12);

        let expected_names = ["brute-force", "baby-step giant-step", "pollard-rho"];
        for (index, record) in records.iter().enumerate() {
            assert_eq!(record.bit_length, config.bit_lengths[index / 6]);
            assert_eq!(record.repetition, (index / 3) as u32 % 2);
            assert_eq!(record.solver, expected_names[index % 3]);
        }
    }

    #[test]
    fn test_brute_force_is_skipped_above_the_ceiling() {
        let mut rng = GeneralRng::new(OsRng);
        let config = BenchmarkConfig {
            bit_lengths: vec![10],
            repetitions: 1,
            brute_force_ceiling: 8,
        };

        let records = run(&config, &mut rng).unwrap();

        assert!(records[0].skipped);
        assert_eq!(records[0].elapsed, None);
        assert_eq!(records[0].recovered, None);
        assert!(!records[1].skipped);
        assert!(!records[2].skipped);
    }

    #[test]
    fn test_exhaustive_strategies_recover_the_secret() {
        let mut rng = GeneralRng::new(OsRng);
        let config = BenchmarkConfig {
            bit_lengths: vec![10],
            repetitions: 1,
            brute_force_ceiling: 16,
        };

        let records = run(&config, &mut rng).unwrap();

        for record in records.iter().filter(|r| r.solver != "pollard-rho") {
            assert!(record.success, "{} missed", record.solver);
            assert!(record.recovered.is_some());
        }
    }
}
