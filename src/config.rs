use crate::error::{LifeError, Result};
use std::path::PathBuf;

/// Which pattern a grid starts from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SeedPattern {
    Random,
    Spaceship,
    Oscillator,
}

impl SeedPattern {
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "random" | "rand" => Ok(SeedPattern::Random),
            "spaceship" | "glider" => Ok(SeedPattern::Spaceship),
            "oscillator" | "osc" => Ok(SeedPattern::Oscillator),
            _ => Err(LifeError::UnknownPattern(name.to_string())),
        }
    }
}

/// Configuration for the live terminal view.
#[derive(Clone)]
pub struct ViewConfig {
    pub pattern: SeedPattern,
    pub size: usize,
    pub time_step: f32,
    pub seed: Option<u64>,
    pub draw_char: char,
}

/// Configuration for the batch lifetime analysis.
#[derive(Clone)]
pub struct LifetimeConfig {
    pub trials: usize,
    pub size: usize,
    pub seed: Option<u64>,
    pub cap: u32,
    pub window: u32,
    pub output: PathBuf,
}

/// Configuration for the centroid trajectory run.
#[derive(Clone)]
pub struct CentroidConfig {
    pub size: usize,
    pub generations: u32,
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_names_parse_case_insensitively() {
        assert_eq!(SeedPattern::from_name("Random").unwrap(), SeedPattern::Random);
        assert_eq!(SeedPattern::from_name("glider").unwrap(), SeedPattern::Spaceship);
        assert_eq!(SeedPattern::from_name("OSC").unwrap(), SeedPattern::Oscillator);
    }

    #[test]
    fn unknown_pattern_is_rejected() {
        assert!(matches!(
            SeedPattern::from_name("pulsar"),
            Err(LifeError::UnknownPattern(_))
        ));
    }
}
