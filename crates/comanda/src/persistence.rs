//! Snapshot persistence behind a store trait.
//!
//! The core depends only on "load the collection" / "replace the collection"
//! semantics over an opaque JSON blob. The file store is the local-storage
//! analog; document-style backends (Supabase, Firebase) would be further
//! implementations of the same trait and are out of scope. Save failures are
//! logged and swallowed by the autosaver: in-memory state stays authoritative
//! for the session.

use crate::order_board::board::BoardSnapshot;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Load/save seam for the order collection.
pub trait SnapshotStore: Send + Sync {
    /// The last saved snapshot, or `None` when nothing was ever saved.
    fn load(&self) -> Result<Option<BoardSnapshot>, PersistenceError>;

    /// Replaces the stored snapshot.
    fn save(&self, snapshot: &BoardSnapshot) -> Result<(), PersistenceError>;
}

/// JSON file on local disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<BoardSnapshot>, PersistenceError> {
        let blob = match std::fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let snapshot = serde_json::from_str(&blob)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &BoardSnapshot) -> Result<(), PersistenceError> {
        let blob = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&self.path, blob)?;
        debug!(path = %self.path.display(), revision = snapshot.revision, "Snapshot saved");
        Ok(())
    }
}

/// In-memory store for tests. Keeps the serialized blob, not the value, so
/// it exercises the same encode/decode path as the file store.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<BoardSnapshot>, PersistenceError> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        match slot.as_deref() {
            Some(blob) => Ok(Some(serde_json::from_str(blob)?)),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &BoardSnapshot) -> Result<(), PersistenceError> {
        let blob = serde_json::to_string(snapshot)?;
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(blob);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderDraft, OrderStatus, OrderType, RestaurantId};
    use crate::model::{MenuItemId, OrderLine};
    use crate::order_board::board::OrderBoard;
    use chrono::Utc;

    fn snapshot_with_one_order() -> BoardSnapshot {
        let mut board = OrderBoard::new();
        board
            .place(
                &OrderDraft {
                    restaurant: RestaurantId(1),
                    order_type: OrderType::Takeaway,
                    items: vec![(MenuItemId(1), 2)],
                    table_number: None,
                    delivery_address: None,
                },
                vec![OrderLine {
                    item: MenuItemId(1),
                    name: "Espresso".into(),
                    quantity: 2,
                    unit_price_cents: 250,
                }],
                OrderStatus::Pending,
                Utc::now(),
            )
            .unwrap();
        board.snapshot()
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let snapshot = snapshot_with_one_order();
        store.save(&snapshot).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.orders.len(), 1);
        assert_eq!(loaded.orders[0].total_cents, 500);
        assert_eq!(loaded.next_id, snapshot.next_id);
    }

    #[test]
    fn file_store_round_trips_and_misses_cleanly() {
        let path =
            std::env::temp_dir().join(format!("comanda-snapshot-{}.json", std::process::id()));
        let store = JsonFileStore::new(&path);
        assert!(store.load().unwrap().is_none());

        let snapshot = snapshot_with_one_order();
        store.save(&snapshot).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.orders.len(), 1);
        assert_eq!(loaded.revision, snapshot.revision);

        let _ = std::fs::remove_file(&path);
    }
}
