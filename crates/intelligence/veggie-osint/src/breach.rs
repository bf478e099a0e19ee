//! Data breach status
//!
//! Nothing here consults a real breach database. The status comes from a
//! `BreachSource`; the default draws at random so repeated checks differ.

use crate::report::Report;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use veggie_config::BreachConfig;

/// Breaches listed for compromised addresses
pub const KNOWN_BREACHES: [&str; 3] = [
    "Adobe (2013) - 153M accounts",
    "LinkedIn (2012) - 117M accounts",
    "Yahoo (2014) - 500M accounts",
];

pub trait BreachSource: Send + Sync {
    fn is_compromised(&self, email: &str) -> bool;
}

/// Random draw per check
pub struct RandomBreachSource {
    rng: Mutex<StdRng>,
    rate: f64,
}

impl RandomBreachSource {
    pub fn new(rate: f64) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            rate,
        }
    }

    /// Reproducible sequence of draws
    pub fn seeded(seed: u64, rate: f64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            rate,
        }
    }

    pub fn from_config(config: &BreachConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed, config.compromise_rate),
            None => Self::new(config.compromise_rate),
        }
    }
}

impl BreachSource for RandomBreachSource {
    fn is_compromised(&self, _email: &str) -> bool {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen::<f64>() < self.rate
    }
}

/// Always answers the same way
#[derive(Debug, Clone, Copy)]
pub struct FixedBreachSource(pub bool);

impl BreachSource for FixedBreachSource {
    fn is_compromised(&self, _email: &str) -> bool {
        self.0
    }
}

pub fn breach_report(email: &str, compromised: bool) -> String {
    let report = Report::new(format!("Data Breach Report for {}", email));
    if compromised {
        report
            .field("Status", "COMPROMISED")
            .field("Breaches", KNOWN_BREACHES[..2].join("\n"))
            .field("Risk Level", "HIGH")
            .field("Pwned Date", "2021-03-15")
            .field("Advice", "Change passwords immediately")
            .render()
    } else {
        report
            .field("Status", "Clean")
            .field("Breaches", "No breaches found")
            .field("Risk Level", "LOW")
            .field("Pwned Date", "N/A")
            .field("Advice", "Continue monitoring")
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compromised_report() {
        let out = breach_report("user@domain.com", true);
        assert!(out.contains("Data Breach Report for user@domain.com"));
        assert!(out.contains("Status:       COMPROMISED\n"));
        assert!(out.contains(
            "Breaches:     Adobe (2013) - 153M accounts\n              LinkedIn (2012) - 117M accounts\n"
        ));
        assert!(out.contains("Risk Level:   HIGH\n"));
        assert!(!out.contains("Yahoo"));
    }

    #[test]
    fn test_clean_report() {
        let out = breach_report("user@domain.com", false);
        assert!(out.contains("Status:       Clean\n"));
        assert!(out.contains("Breaches:     No breaches found\n"));
        assert!(out.contains("Pwned Date:   N/A\n"));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = RandomBreachSource::seeded(42, 0.3);
        let b = RandomBreachSource::seeded(42, 0.3);
        let draws_a: Vec<bool> = (0..32).map(|_| a.is_compromised("x@y.z")).collect();
        let draws_b: Vec<bool> = (0..32).map(|_| b.is_compromised("x@y.z")).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_rate_extremes() {
        let never = RandomBreachSource::seeded(1, 0.0);
        let always = RandomBreachSource::seeded(1, 1.0);
        for _ in 0..100 {
            assert!(!never.is_compromised("a@b.c"));
            assert!(always.is_compromised("a@b.c"));
        }
    }

    #[test]
    fn test_rate_is_roughly_honoured() {
        let source = RandomBreachSource::seeded(7, 0.3);
        let hits = (0..10_000).filter(|_| source.is_compromised("a@b.c")).count();
        assert!((2_500..3_500).contains(&hits), "hits = {}", hits);
    }

    #[test]
    fn test_fixed_source() {
        assert!(FixedBreachSource(true).is_compromised("a@b.c"));
        assert!(!FixedBreachSource(false).is_compromised("a@b.c"));
    }
}
