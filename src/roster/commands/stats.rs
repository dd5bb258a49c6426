//! Descriptive statistics over student ages.
//!
//! Only numeric ages take part; records whose age was stored as text are
//! counted separately and reported.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq)]
pub struct AgeStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub skipped: usize,
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let records = store.load_or_empty()?;
    let ages: Vec<i64> = records.iter().filter_map(|r| r.age.years()).collect();
    let skipped = records.len() - ages.len();

    let mut stats = summarize(&ages)?;
    stats.skipped = skipped;

    let mut result = CmdResult::default();
    if skipped > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} record(s) with a non-numeric age were skipped.",
            skipped
        )));
    }
    Ok(result.with_stats(stats))
}

pub fn summarize(values: &[i64]) -> Result<AgeStats> {
    if values.is_empty() {
        return Err(RosterError::Validation(
            "no numeric ages to summarize".to_string(),
        ));
    }

    let n = values.len();
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n as f64;

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    } else {
        sorted[n / 2] as f64
    };

    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n as f64;

    Ok(AgeStats {
        count: n,
        mean,
        median,
        std_dev: variance.sqrt(),
        skipped: 0,
    })
}
