// ═══════════════════════════════════════════════════════════════════
// Storage Tests — envelope format, StorageManager, and file-mode
// persistence across restarts
// ═══════════════════════════════════════════════════════════════════

use chrono::Utc;

use stock_mentor_core::errors::CoreError;
use stock_mentor_core::models::alert::{AlertCondition, NewAlert};
use stock_mentor_core::models::holding::NewHolding;
use stock_mentor_core::models::settings::{RefreshInterval, SettingsPatch};
use stock_mentor_core::models::state::StoreState;
use stock_mentor_core::models::trade::{NewTrade, TradeKind};
use stock_mentor_core::models::watchlist::WatchlistItem;
use stock_mentor_core::storage::format::{self, CURRENT_VERSION, FORMAT_NAME};
use stock_mentor_core::storage::manager::StorageManager;
use stock_mentor_core::StockMentor;

fn populated_state() -> StoreState {
    let mut state = StoreState::default();
    state.watchlist.push(WatchlistItem::new("AAPL"));
    state.watchlist.push(WatchlistItem::new("7203.T"));
    state
}

// ═══════════════════════════════════════════════════════════════════
// Envelope Format
// ═══════════════════════════════════════════════════════════════════

mod envelope {
    use super::*;

    #[test]
    fn round_trip() {
        let state = populated_state();
        let bytes = format::write_envelope(&state).unwrap();
        let loaded = format::read_envelope(&bytes).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn bytes_carry_format_tag_and_version() {
        let bytes = format::write_envelope(&StoreState::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["format"], FORMAT_NAME);
        assert_eq!(value["version"], u64::from(CURRENT_VERSION));
        assert!(value["state"].is_object());
    }

    #[test]
    fn garbage_bytes_rejected() {
        let result = format::read_envelope(b"not json at all");
        assert!(matches!(result, Err(CoreError::InvalidFileFormat(_))));
    }

    #[test]
    fn wrong_format_tag_rejected() {
        let json = serde_json::json!({
            "format": "someone-elses-file",
            "version": 1,
            "state": StoreState::default(),
        });
        let bytes = serde_json::to_vec(&json).unwrap();
        let result = format::read_envelope(&bytes);
        assert!(matches!(result, Err(CoreError::InvalidFileFormat(_))));
    }

    #[test]
    fn future_version_rejected() {
        let json = serde_json::json!({
            "format": FORMAT_NAME,
            "version": CURRENT_VERSION + 1,
            "state": StoreState::default(),
        });
        let bytes = serde_json::to_vec(&json).unwrap();
        let result = format::read_envelope(&bytes);
        assert!(matches!(
            result,
            Err(CoreError::UnsupportedVersion(v)) if v == CURRENT_VERSION + 1
        ));
    }

    #[test]
    fn version_zero_rejected() {
        let json = serde_json::json!({
            "format": FORMAT_NAME,
            "version": 0,
            "state": StoreState::default(),
        });
        let bytes = serde_json::to_vec(&json).unwrap();
        assert!(matches!(
            format::read_envelope(&bytes),
            Err(CoreError::UnsupportedVersion(0))
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════
// StorageManager
// ═══════════════════════════════════════════════════════════════════

mod manager {
    use super::*;

    #[test]
    fn bytes_round_trip() {
        let state = populated_state();
        let bytes = StorageManager::save_to_bytes(&state).unwrap();
        assert_eq!(StorageManager::load_from_bytes(&bytes).unwrap(), state);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let state = populated_state();
        StorageManager::save_to_file(&state, &path).unwrap();
        assert_eq!(StorageManager::load_from_file(&path).unwrap(), state);
    }

    #[test]
    fn save_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        StorageManager::save_to_file(&StoreState::default(), &path).unwrap();
        let updated = populated_state();
        StorageManager::save_to_file(&updated, &path).unwrap();

        assert_eq!(StorageManager::load_from_file(&path).unwrap(), updated);
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        StorageManager::save_to_file(&StoreState::default(), &path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("store.json")]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = StorageManager::load_from_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(CoreError::FileIO(_))));
    }
}

// ═══════════════════════════════════════════════════════════════════
// File Mode — durable writes and restart-safe rehydration
// ═══════════════════════════════════════════════════════════════════

mod file_mode {
    use super::*;

    #[test]
    fn open_creates_the_file_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = StockMentor::open(&path).unwrap();
        assert!(path.exists());
        assert!(store.watchlist().is_empty());
        assert!(!store.has_unsaved_changes());
    }

    #[test]
    fn every_mutation_is_durable_before_returning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = StockMentor::open(&path).unwrap();
        store.add_to_watchlist("AAPL").unwrap();

        // A fresh read of the file — before any save call — already
        // sees the mutation.
        let on_disk = StorageManager::load_from_file(&path).unwrap();
        assert_eq!(on_disk.watchlist.len(), 1);
        assert_eq!(on_disk.watchlist[0].symbol, "AAPL");
    }

    #[test]
    fn restart_rehydrates_all_collections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let holding_id;
        {
            let mut store = StockMentor::open(&path).unwrap();
            store.add_to_watchlist("AAPL").unwrap();
            holding_id = store
                .add_holding(NewHolding {
                    symbol: "AAPL".into(),
                    shares: 10.0,
                    avg_price: 100.0,
                    current_price: 120.0,
                })
                .unwrap();
            store
                .add_alert(NewAlert {
                    symbol: "AAPL".into(),
                    target_price: 150.0,
                    condition: AlertCondition::Below,
                })
                .unwrap();
            store
                .record_trade(NewTrade {
                    symbol: "AAPL".into(),
                    kind: TradeKind::Sell,
                    shares: 2.0,
                    price: 118.0,
                    executed_at: Utc::now(),
                })
                .unwrap();
            store
                .update_settings(SettingsPatch {
                    refresh_interval: Some(RefreshInterval::ThirtySeconds),
                    ..Default::default()
                })
                .unwrap();
        }

        let store = StockMentor::open(&path).unwrap();
        assert_eq!(store.watchlist().len(), 1);
        assert_eq!(store.holdings().len(), 1);
        assert_eq!(store.holdings()[0].id, holding_id);
        assert_eq!(store.alerts().len(), 1);
        assert_eq!(store.alerts()[0].condition, AlertCondition::Below);
        assert_eq!(store.trade_history().len(), 1);
        assert_eq!(store.trade_history()[0].kind, TradeKind::Sell);
        assert_eq!(
            store.settings().refresh_interval,
            RefreshInterval::ThirtySeconds
        );
    }

    #[test]
    fn reset_all_is_durable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = StockMentor::open(&path).unwrap();
            store.add_to_watchlist("AAPL").unwrap();
            store.reset_all().unwrap();
        }

        let store = StockMentor::open(&path).unwrap();
        assert!(store.watchlist().is_empty());
    }

    #[test]
    fn corrupted_file_surfaces_as_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, b"{\"oops\": true}").unwrap();

        let result = StockMentor::open(&path);
        assert!(matches!(result, Err(CoreError::InvalidFileFormat(_))));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Bytes Mode — host-owned I/O
// ═══════════════════════════════════════════════════════════════════

mod bytes_mode {
    use super::*;

    #[test]
    fn save_and_reload_round_trip() {
        let mut store = StockMentor::create_new();
        store.add_to_watchlist("MSFT").unwrap();
        store
            .add_holding(NewHolding {
                symbol: "MSFT".into(),
                shares: 3.0,
                avg_price: 300.0,
                current_price: 310.0,
            })
            .unwrap();

        let bytes = store.save_to_bytes().unwrap();
        let reloaded = StockMentor::load_from_bytes(&bytes).unwrap();

        assert_eq!(reloaded.watchlist().len(), 1);
        assert_eq!(reloaded.holdings().len(), 1);
        assert_eq!(reloaded.holdings()[0].symbol, "MSFT");
        assert!(!reloaded.has_unsaved_changes());
    }

    #[test]
    fn load_from_garbage_fails() {
        assert!(StockMentor::load_from_bytes(b"\x00\x01\x02").is_err());
    }
}
