//! Mirrors the whole workout collection into one storage slot.
//!
//! Every write replaces the slot with the full JSON array; reads never fail,
//! an absent or damaged slot is an empty collection and entries that do not
//! read as a workout are skipped.

use crate::dlog;
use crate::storage::Storage;
use crate::types::Workout;
use anyhow::{Context, Result};

pub fn persist<S: Storage + ?Sized>(storage: &mut S, key: &str, workouts: &[Workout]) -> Result<()> {
    let json = serde_json::to_string(workouts).context("Encoding workouts as JSON")?;
    storage.set_item(key, &json)?;
    dlog!("persisted key={key} workouts={}", workouts.len());
    Ok(())
}

pub fn restore<S: Storage + ?Sized>(storage: &S, key: &str) -> Vec<Workout> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            dlog!("restore key={key} slot empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(err = %e, key, "storage slot unreadable; starting empty");
            return Vec::new();
        }
    };

    let items = match serde_json::from_str::<Option<Vec<serde_json::Value>>>(&raw) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            dlog!("restore key={key} unparsable: {e}");
            return Vec::new();
        }
    };

    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Workout>(item) {
            Ok(w) => out.push(w),
            Err(e) => {
                dlog!("restore_bad_entry key={key} idx={idx}: {e}");
            }
        }
    }
    dlog!("restored key={key} workouts={}", out.len());
    out
}
