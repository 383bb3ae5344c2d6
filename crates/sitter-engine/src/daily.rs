//! Per-day counters keyed by calendar day.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::day::Day;

/// A mapping from day to a non-negative count (capacity, occupancy or free).
///
/// Days absent from the map read as zero. Iteration is in ascending day order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyMap(BTreeMap<Day, u32>);

impl DailyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value for `day`, or 0 when the day is absent.
    pub fn get(&self, day: Day) -> u32 {
        self.0.get(&day).copied().unwrap_or(0)
    }

    pub fn contains(&self, day: Day) -> bool {
        self.0.contains_key(&day)
    }

    pub fn set(&mut self, day: Day, value: u32) {
        self.0.insert(day, value);
    }

    /// Add `amount` to the day's value, inserting the day if needed.
    pub fn add(&mut self, day: Day, amount: u32) {
        let slot = self.0.entry(day).or_insert(0);
        *slot = slot.saturating_add(amount);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, u32)> + '_ {
        self.0.iter().map(|(day, value)| (*day, *value))
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = (&Day, &mut u32)> {
        self.0.iter_mut()
    }
}

impl FromIterator<(Day, u32)> for DailyMap {
    fn from_iter<I: IntoIterator<Item = (Day, u32)>>(iter: I) -> Self {
        DailyMap(iter.into_iter().collect())
    }
}
