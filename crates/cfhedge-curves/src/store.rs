//! In-memory registry of discount curve snapshots.

use std::collections::HashMap;
use std::sync::Arc;

use cfhedge_core::types::{Currency, Date, Tenor};

use crate::curve::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::key::CurveKey;

/// Discount curves keyed by (currency, tenor, as-of date).
///
/// Curves are immutable once stored; replacing one requires an explicit
/// overwrite. Entries are shared as `Arc` so independent valuations can
/// read them concurrently.
#[derive(Debug, Clone, Default)]
pub struct CurveStore {
    curves: HashMap<CurveKey, Arc<DiscountCurve>>,
}

impl CurveStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a curve under `key`.
    ///
    /// # Errors
    ///
    /// - `InvalidBaseline` if the key date differs from the curve base date
    /// - `CurveExists` if the key is taken and `overwrite` is false
    pub fn insert(&mut self, key: CurveKey, curve: DiscountCurve, overwrite: bool) -> CurveResult<()> {
        if key.as_of != curve.base_date() {
            return Err(CurveError::invalid_baseline(format!(
                "curve base date {} is not equal to key date {}",
                curve.base_date(),
                key.as_of
            )));
        }
        if self.curves.contains_key(&key) {
            if !overwrite {
                return Err(CurveError::CurveExists {
                    name: key.to_string(),
                });
            }
            log::warn!("overwriting curve {key}");
        }

        log::debug!("stored curve {key} ({} pillars)", curve.dates().len());
        self.curves.insert(key, Arc::new(curve));
        Ok(())
    }

    /// Returns the curve stored under `key`.
    pub fn get(&self, key: &CurveKey) -> CurveResult<Arc<DiscountCurve>> {
        self.curves
            .get(key)
            .cloned()
            .ok_or_else(|| CurveError::CurveNotFound {
                name: key.to_string(),
            })
    }

    /// Convenience lookup by components.
    pub fn lookup(&self, currency: Currency, tenor: Tenor, as_of: Date) -> CurveResult<Arc<DiscountCurve>> {
        self.get(&CurveKey::new(currency, tenor, as_of))
    }

    /// True if a curve is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &CurveKey) -> bool {
        self.curves.contains_key(key)
    }

    /// Number of stored curves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// True if no curves are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Stored keys ordered by name.
    #[must_use]
    pub fn keys(&self) -> Vec<CurveKey> {
        let mut keys: Vec<CurveKey> = self.curves.keys().copied().collect();
        keys.sort_by_key(|k| (k.currency.code(), k.tenor.to_string(), k.as_of));
        keys
    }
}
