//! Synthetic trade position generation.
//!
//! Produces a random batch of open positions for one trade date. Every slot of
//! the intraday grid gets a volume drawn without replacement, and labels and
//! volumes independently go missing with a small probability.

use power_core::{is_valid_date, slot_labels, Error, GenerationConfig, Result, TradePosition, Volume};
use rand::seq::index;
use rand::Rng;
use tracing::{error, info};
use uuid::{Builder, Uuid};

/// Generator of random trade positions.
#[derive(Debug, Clone)]
pub struct TradeGenerator {
    config: GenerationConfig,
    /// `HH:MM` labels of the full grid.
    grid: Vec<String>,
}

impl TradeGenerator {
    /// Create a new generator.
    pub fn new(config: GenerationConfig) -> Self {
        let grid = slot_labels(config.slot_minutes);
        Self { config, grid }
    }

    /// Labels of the full intraday grid.
    pub fn grid(&self) -> &[String] {
        &self.grid
    }

    /// Generate a random batch of positions for `date`.
    ///
    /// Fails with [`Error::InvalidDate`] before drawing anything if the date is
    /// not `DD/MM/YYYY`, and with [`Error::Config`] if the settings are inconsistent.
    pub fn generate<R: Rng + ?Sized>(&self, date: &str, rng: &mut R) -> Result<Vec<TradePosition>> {
        if !is_valid_date(date) {
            let err = Error::invalid_date(date);
            error!("{}", err);
            return Err(err);
        }
        self.config.validate()?;

        let count = rng.gen_range(self.config.min_trades..=self.config.max_trades);
        info!(count, date, "Generated open trade positions");

        Ok((0..count).map(|_| self.position(date, rng)).collect())
    }

    fn position<R: Rng + ?Sized>(&self, date: &str, rng: &mut R) -> TradePosition {
        let time_series = self
            .grid
            .iter()
            .map(|label| self.maybe_missing(label.clone(), rng))
            .collect();

        let drawn = index::sample(rng, self.config.volume_range_len(), self.grid.len());
        let volume_series = drawn
            .into_iter()
            .map(|offset| {
                let volume = self.config.volume_min + offset as Volume;
                self.maybe_missing(volume, rng)
            })
            .collect();

        TradePosition {
            date: date.to_string(),
            time_series,
            volume_series,
            id: random_id(rng),
        }
    }

    #[inline]
    fn maybe_missing<T, R: Rng + ?Sized>(&self, value: T, rng: &mut R) -> Option<T> {
        if rng.gen_ratio(1, self.config.missing_one_in) {
            None
        } else {
            Some(value)
        }
    }
}

impl Default for TradeGenerator {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}

/// Generate a batch of positions with the default generation settings.
pub fn generate_trades<R: Rng + ?Sized>(date: &str, rng: &mut R) -> Result<Vec<TradePosition>> {
    TradeGenerator::default().generate(date, rng)
}

/// v4 UUID drawn from the supplied RNG so seeded runs are reproducible.
fn random_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}
