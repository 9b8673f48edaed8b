//! Five-day synthetic weather table for the charting demo.

use std::fmt;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_DATASET_SEED: u64 = 42;
pub const DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
pub const TEMPERATURE_RANGE: RangeInclusive<i32> = 20..=35;
pub const HUMIDITY_RANGE: RangeInclusive<i32> = 40..=90;

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherRow {
    pub day: &'static str,
    pub temperature: i32,
    pub humidity: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherDataset {
    pub rows: Vec<WeatherRow>,
}

impl WeatherDataset {
    /// Draws every temperature first, then every humidity, from `rng`.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let temperatures: Vec<i32> = DAYS
            .iter()
            .map(|_| rng.gen_range(TEMPERATURE_RANGE))
            .collect();
        let humidities: Vec<i32> = DAYS
            .iter()
            .map(|_| rng.gen_range(HUMIDITY_RANGE))
            .collect();

        let rows = DAYS
            .iter()
            .zip(temperatures)
            .zip(humidities)
            .map(|((&day, temperature), humidity)| WeatherRow {
                day,
                temperature,
                humidity,
            })
            .collect();

        Self { rows }
    }

    pub fn days(&self) -> Vec<&'static str> {
        self.rows.iter().map(|r| r.day).collect()
    }

    pub fn temperatures(&self) -> Vec<i32> {
        self.rows.iter().map(|r| r.temperature).collect()
    }

    pub fn humidities(&self) -> Vec<i32> {
        self.rows.iter().map(|r| r.humidity).collect()
    }
}

impl fmt::Display for WeatherDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day_width = self
            .rows
            .iter()
            .map(|r| r.day.len())
            .max()
            .unwrap_or(0)
            .max("Day".len());

        writeln!(
            f,
            "{:>3}  {:>day_width$}  {:>11}  {:>8}",
            "", "Day", "Temperature", "Humidity"
        )?;
        for (idx, row) in self.rows.iter().enumerate() {
            writeln!(
                f,
                "{idx:>3}  {:>day_width$}  {:>11}  {:>8}",
                row.day, row.temperature, row.humidity
            )?;
        }
        Ok(())
    }
}
