//! Caller-side policies for element errors.
//!
//! Extractors yield one `Result` per element and leave the decision to the caller.
//! [`collect_strict`] stops at the first failure. [`collect_lenient`] skips bad
//! elements with a warning, but still rejects a file when more than half of its
//! elements fail or when failures run on for [`MAX_CONSECUTIVE_ERRORS`] elements,
//! since at that point the file is more likely the wrong format than a few bad rows.

use crate::error::{Error, Result};

pub const MAX_CONSECUTIVE_ERRORS: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectStats {
    pub total: usize,
    pub skipped: usize,
}

/// Collect every record, returning the first element error
pub fn collect_strict<T>(items: impl IntoIterator<Item = Result<T>>) -> Result<Vec<T>> {
    items.into_iter().collect()
}

/// Collect records, skipping failed elements
///
/// # Errors
///
/// [`Error::TooManyConsecutiveFailures`] as soon as [`MAX_CONSECUTIVE_ERRORS`]
/// elements in a row fail, and [`Error::TooManyFailures`] when more than 50% of
/// all elements failed.
pub fn collect_lenient<T>(
    items: impl IntoIterator<Item = Result<T>>,
) -> Result<(Vec<T>, CollectStats)> {
    let mut records = Vec::new();
    let mut stats = CollectStats::default();
    let mut consecutive_errors = 0;

    for item in items {
        stats.total += 1;
        match item {
            Ok(record) => {
                records.push(record);
                consecutive_errors = 0;
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping element");
                stats.skipped += 1;
                consecutive_errors += 1;

                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    return Err(Error::TooManyConsecutiveFailures { count: consecutive_errors });
                }
            }
        }
    }

    if stats.total > 0 {
        let failure_rate = stats.skipped as f64 / stats.total as f64;
        if failure_rate > 0.5 {
            return Err(Error::TooManyFailures { failed: stats.skipped, total: stats.total });
        }
    }

    if stats.skipped > 0 {
        tracing::info!(kept = records.len(), skipped = stats.skipped, "collected with skipped elements");
    }

    Ok((records, stats))
}
