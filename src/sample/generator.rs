//! Random recital generation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::config::SampleConfig;
use crate::model::{Dance, Dancer, Sequence};

fn roster(count: usize) -> Vec<Dancer> {
    (0..count)
        .map(|i| match u8::try_from(i) {
            Ok(i) if i < 26 => Dancer::new(char::from(b'a' + i).to_string()),
            _ => Dancer::new(format!("d{i}")),
        })
        .collect()
}

/// Generates a random recital from `config`, seeded from `config.seed`.
///
/// # Examples
///
/// ```
/// use u_recital::sample::{generate, SampleConfig};
///
/// let config = SampleConfig::default().with_seed(42);
/// let first = generate(&config).unwrap();
/// let second = generate(&config).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(first.len(), 7);
/// ```
pub fn generate(config: &SampleConfig) -> Result<Vec<Sequence>, String> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };
    generate_with(config, &mut rng)
}

/// Generates a random recital drawing from `rng`.
pub fn generate_with<R: Rng>(config: &SampleConfig, rng: &mut R) -> Result<Vec<Sequence>, String> {
    config.validate()?;

    let mut dancers = roster(config.dancer_count);
    let mut dances = Vec::with_capacity(config.dance_sizes.len());
    for (i, &size) in config.dance_sizes.iter().enumerate() {
        dancers.shuffle(rng);
        dances.push(Dance::new(dancers[..size].iter().cloned()).with_title(format!("Dance {}", i + 1)));
    }

    let mut dances = dances.into_iter();
    let mut sequences = Vec::with_capacity(config.grouping.len());
    for &group in &config.grouping {
        let block: Vec<Dance> = dances.by_ref().take(group).collect();
        sequences.push(Sequence::new(block).map_err(|e| e.to_string())?);
    }
    Ok(sequences)
}
