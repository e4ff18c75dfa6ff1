//! Menu roulette: pick one candidate uniformly at random.
//!
//! Besides the pick itself this provides the wheel geometry a UI needs to draw
//! the chart and animate the spin so the pointer stops on the chosen wedge.

use rand::Rng;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouletteError {
    /// Nothing to choose from.
    #[error("No candidates to spin")]
    EmptySelection,
}

/// Splits free text on newlines and commas, dropping blank entries.
#[must_use]
pub fn parse_candidates(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// One wedge of the wheel, in degrees clockwise from the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

/// The result of a spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spin {
    pub index: usize,
    pub label: String,
}

impl Spin {
    /// Total clockwise rotation that ends with the pointer in the middle of
    /// this spin's wedge after `turns` full revolutions.
    pub fn landing_rotation(&self, turns: u32, segment_count: usize) -> f64 {
        let full = f64::from(turns) * 360.0;
        if segment_count == 0 {
            return full;
        }
        let sweep = 360.0 / segment_count as f64;
        let middle = (self.index as f64 + 0.5) * sweep;
        full + (360.0 - middle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roulette {
    candidates: Vec<String>,
}

impl Roulette {
    pub fn new<I, S>(candidates: I) -> Result<Self, RouletteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
        if candidates.is_empty() {
            return Err(RouletteError::EmptySelection);
        }
        Ok(Self { candidates })
    }

    /// Builds a wheel from free text, see [`parse_candidates`].
    pub fn from_text(text: &str) -> Result<Self, RouletteError> {
        Self::new(parse_candidates(text))
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Picks one candidate, each with equal probability.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> Spin {
        let index = rng.gen_range(0..self.candidates.len());
        debug!(index, candidates = self.candidates.len(), "Spin");
        Spin {
            index,
            label: self.candidates[index].clone(),
        }
    }

    /// Equal wedges, one per candidate, in candidate order.
    pub fn segments(&self) -> Vec<Segment> {
        let sweep = 360.0 / self.candidates.len() as f64;
        self.candidates
            .iter()
            .enumerate()
            .map(|(i, label)| Segment {
                label: label.clone(),
                start_deg: i as f64 * sweep,
                sweep_deg: sweep,
            })
            .collect()
    }

    /// Picks, then waits `delay` before handing the result back.
    ///
    /// The pause only paces the reveal for the UI.
    pub async fn spin_with_reveal(&self, delay: Duration) -> Spin {
        let spin = self.spin(&mut rand::thread_rng());
        tokio::time::sleep(delay).await;
        info!(label = %spin.label, "Roulette revealed");
        spin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_candidates() {
        let parsed = parse_candidates("불고기 버거, 새우 버거\n\n  콜라 ,,\n");
        assert_eq!(parsed, vec!["불고기 버거", "새우 버거", "콜라"]);
        assert!(parse_candidates(" ,\n ").is_empty());
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(
            Roulette::new(Vec::<String>::new()),
            Err(RouletteError::EmptySelection)
        );
        assert_eq!(Roulette::from_text(" , "), Err(RouletteError::EmptySelection));
    }

    #[test]
    fn test_spin_is_roughly_uniform() {
        let roulette = Roulette::new(["A", "B", "C", "D"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 4];

        for _ in 0..40_000 {
            let spin = roulette.spin(&mut rng);
            assert_eq!(roulette.candidates()[spin.index], spin.label);
            counts[spin.index] += 1;
        }

        for count in counts {
            assert!((9_000..=11_000).contains(&count), "counts = {counts:?}");
        }
    }

    #[test]
    fn test_single_candidate_always_wins() {
        let roulette = Roulette::new(["콜라"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(roulette.spin(&mut rng).index, 0);
        }
    }

    #[test]
    fn test_segments_cover_the_wheel() {
        let roulette = Roulette::new(["A", "B", "C"]).unwrap();
        let segments = roulette.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].label, "B");
        assert!((segments[1].start_deg - 120.0).abs() < 1e-9);
        let covered: f64 = segments.iter().map(|s| s.sweep_deg).sum();
        assert!((covered - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_landing_rotation_stops_on_chosen_wedge() {
        let count = 6;
        for index in 0..count {
            let spin = Spin {
                index,
                label: String::new(),
            };
            let rotation = spin.landing_rotation(5, count);
            assert!(rotation >= 5.0 * 360.0);

            // Wheel angle now under the pointer
            let under_pointer = (360.0 - rotation % 360.0) % 360.0;
            let landed = (under_pointer / (360.0 / count as f64)).floor() as usize;
            assert_eq!(landed, index);
        }
    }

    #[tokio::test]
    async fn test_spin_with_reveal_returns_a_candidate() {
        let roulette = Roulette::new(["A", "B"]).unwrap();
        let spin = roulette.spin_with_reveal(Duration::from_millis(5)).await;
        assert!(roulette.candidates().contains(&spin.label));
    }
}
