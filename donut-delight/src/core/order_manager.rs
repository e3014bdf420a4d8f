//! Selection & Order Manager
//!
//! Owns the display order of a freshly loaded catalog and the set of chomped
//! items, keeping both in sync with the session store.
//!
//! Initialization reuses the persisted order only while the user has an
//! active selection and the persisted order still covers the catalog
//! exactly; otherwise the catalog is reshuffled and the new order persisted.

use super::persisted::{ORDER_KEY, PersistedStateError, SELECTION_KEY, read_ids, write_ids};
use super::session_store::{SessionStore, StoreError};
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use shared::Item;
use shared::money::sum_prices;
use std::collections::{BTreeSet, HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("No item with id {0}")]
    UnknownItem(u64),

    #[error("Session store error: {0}")]
    Store(#[from] StoreError),
}

pub type ManagerResult<T> = Result<T, ManagerError>;

/// Display order and selection for one loaded catalog
#[derive(Debug)]
pub struct OrderManager<S: SessionStore> {
    store: S,
    /// Items in display order; always a permutation of the catalog
    order: Vec<Item>,
    selection: BTreeSet<u64>,
}

impl<S: SessionStore> OrderManager<S> {
    /// Initialize against a fresh catalog using the thread RNG
    pub fn initialize(store: S, catalog: &[Item]) -> ManagerResult<Self> {
        Self::initialize_with_rng(store, catalog, &mut rand::thread_rng())
    }

    /// Initialize against a fresh catalog
    pub fn initialize_with_rng<R: Rng + ?Sized>(
        mut store: S,
        catalog: &[Item],
        rng: &mut R,
    ) -> ManagerResult<Self> {
        let stored_selection = read_or_discard(&store, SELECTION_KEY);
        let stored_order = read_or_discard(&store, ORDER_KEY);

        let selection_len = stored_selection.as_ref().map_or(0, Vec::len);
        let reconciled = match &stored_order {
            Some(order) if selection_len > 0 => reconcile(order, catalog),
            _ => None,
        };

        let order = match reconciled {
            Some(order) => {
                tracing::debug!(count = order.len(), "Reusing persisted display order");
                if stored_order.as_ref().map_or(0, Vec::len) != order.len() {
                    write_ids(&mut store, ORDER_KEY, &ids_of(&order))?;
                }
                order
            }
            None => {
                let mut order = catalog.to_vec();
                order.shuffle(rng);
                write_ids(&mut store, ORDER_KEY, &ids_of(&order))?;
                tracing::debug!(count = order.len(), "Generated new display order");
                order
            }
        };

        let known: HashSet<u64> = order.iter().map(|item| item.id).collect();
        let selection: BTreeSet<u64> = stored_selection
            .iter()
            .flatten()
            .copied()
            .filter(|id| known.contains(id))
            .collect();

        // Heal duplicates, foreign ids and corrupt values in the stored selection
        let needs_heal = match &stored_selection {
            Some(ids) => ids.len() != selection.len(),
            None => store.get(SELECTION_KEY).is_some(),
        };
        if needs_heal {
            tracing::info!(
                kept = selection.len(),
                stored = selection_len,
                "Pruned persisted selection"
            );
            let ids: Vec<u64> = selection.iter().copied().collect();
            write_ids(&mut store, SELECTION_KEY, &ids)?;
        }

        Ok(Self {
            store,
            order,
            selection,
        })
    }

    /// Mark an item as chomped
    ///
    /// Returns `false` if it already was. Selecting twice is a no-op.
    pub fn select(&mut self, id: u64) -> ManagerResult<bool> {
        if !self.contains(id) {
            return Err(ManagerError::UnknownItem(id));
        }
        if self.selection.contains(&id) {
            return Ok(false);
        }
        let mut next = self.selection.clone();
        next.insert(id);
        let ids: Vec<u64> = next.iter().copied().collect();
        write_ids(&mut self.store, SELECTION_KEY, &ids)?;
        self.selection = next;
        tracing::debug!(id, selected = self.selection.len(), "Item chomped");
        Ok(true)
    }

    /// Clear the selection; the display order is untouched
    pub fn reset(&mut self) -> ManagerResult<()> {
        write_ids(&mut self.store, SELECTION_KEY, &[])?;
        self.selection.clear();
        tracing::debug!("Selection reset");
        Ok(())
    }

    /// Sum of prices of chomped items
    pub fn total_price(&self) -> Decimal {
        sum_prices(
            self.order
                .iter()
                .filter(|item| self.selection.contains(&item.id))
                .map(|item| item.price),
        )
    }

    /// Whether every displayed item is chomped
    ///
    /// Vacuously true for an empty catalog; the view handles that case.
    pub fn is_complete(&self) -> bool {
        self.order
            .iter()
            .all(|item| self.selection.contains(&item.id))
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.contains(&id)
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn selection(&self) -> &BTreeSet<u64> {
        &self.selection
    }

    /// Items in display order
    pub fn items(&self) -> &[Item] {
        &self.order
    }

    /// Item ids in display order
    pub fn display_order(&self) -> Vec<u64> {
        ids_of(&self.order)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn contains(&self, id: u64) -> bool {
        self.order.iter().any(|item| item.id == id)
    }
}

/// Map a persisted order onto the catalog
///
/// Ids missing from the catalog are dropped. The result is accepted only if
/// it has the catalog's length and every catalog id was persisted.
pub fn reconcile(persisted: &[u64], catalog: &[Item]) -> Option<Vec<Item>> {
    let by_id: HashMap<u64, &Item> = catalog.iter().map(|item| (item.id, item)).collect();
    let reconciled: Vec<Item> = persisted
        .iter()
        .filter_map(|id| by_id.get(id).map(|item| (*item).clone()))
        .collect();

    let persisted_ids: HashSet<u64> = persisted.iter().copied().collect();
    let all_included = catalog.iter().all(|item| persisted_ids.contains(&item.id));

    (reconciled.len() == catalog.len() && all_included).then_some(reconciled)
}

fn ids_of(items: &[Item]) -> Vec<u64> {
    items.iter().map(|item| item.id).collect()
}

/// Corrupt values behave exactly like absent ones
fn read_or_discard(store: &impl SessionStore, key: &str) -> Option<Vec<u64>> {
    match read_ids(store, key) {
        Ok(ids) => ids,
        Err(PersistedStateError::Corrupt(e)) => {
            tracing::warn!(key = %key, error = %e, "Discarding corrupt persisted state");
            None
        }
    }
}
