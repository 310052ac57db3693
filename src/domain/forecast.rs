//! Groups the flat 3-hour forecast list into calendar days and splits it into
//! the "Today" series and the upcoming-days view.

use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::weather::{ForecastSample, day_key_date, today_key};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    #[error("could not parse forecast: sample {index} has malformed timestamp {timestamp:?}")]
    MalformedSample { index: usize, timestamp: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Drop the first-seen day from the upcoming view whatever its key. The API
    /// usually leads with an already-elapsed slot of the current day.
    pub skip_first_group: bool,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            skip_first_group: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub key: String,
    pub samples: Vec<ForecastSample>,
}

impl DayGroup {
    pub fn date(&self) -> Option<NaiveDate> {
        day_key_date(&self.key)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationResult {
    pub today_series: Vec<ForecastSample>,
    pub upcoming_day_groups: Vec<DayGroup>,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.today_series.is_empty() && self.upcoming_day_groups.is_empty()
    }
}

pub fn aggregate(
    samples: &[ForecastSample],
    reference_date: NaiveDate,
    options: AggregateOptions,
) -> Result<AggregationResult, ForecastError> {
    let keys = sample_keys(samples)?;
    let groups = group_by_day(samples, &keys);
    let today = today_key(reference_date);

    let today_series = groups
        .iter()
        .find(|group| group.key == today)
        .map(|group| {
            group
                .samples
                .iter()
                .filter(|sample| sample.day_key() == Some(today.as_str()))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    let skip = usize::from(options.skip_first_group);
    let upcoming_day_groups = groups
        .into_iter()
        .skip(skip)
        .filter(|group| group.key != today)
        .filter_map(|group| {
            let samples: Vec<ForecastSample> = group
                .samples
                .into_iter()
                .filter(|sample| sample.day_key() != Some(today.as_str()))
                .collect();
            (!samples.is_empty()).then_some(DayGroup {
                key: group.key,
                samples,
            })
        })
        .collect();

    Ok(AggregationResult {
        today_series,
        upcoming_day_groups,
    })
}

fn sample_keys(samples: &[ForecastSample]) -> Result<Vec<&str>, ForecastError> {
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            sample.day_key().ok_or_else(|| ForecastError::MalformedSample {
                index,
                timestamp: sample.timestamp_text.clone(),
            })
        })
        .collect()
}

/// Buckets in first-seen key order, samples in input order.
fn group_by_day(samples: &[ForecastSample], keys: &[&str]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (sample, key) in samples.iter().zip(keys) {
        let idx = *positions.entry(*key).or_insert_with(|| {
            groups.push(DayGroup {
                key: (*key).to_string(),
                samples: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].samples.push(sample.clone());
    }

    groups
}
