//! Sequential latency benchmarks for message writes and point reads.
//!
//! Both run single-threaded so numbers from different runs compare.

use super::{messages, users};
use crate::error::{CheeperError, Result, StoreContext};
use crate::model::Message;
use crate::store::backend::StorageBackend;
use crate::store::{Collection, DocumentStore, Filter};
use chrono::Utc;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchMode {
    Insert,
    Read,
}

/// Seconds spent saving `n` messages for `seed_login`, one write each.
/// Building the messages is not timed.
pub fn insert<B: StorageBackend>(store: &DocumentStore<B>, seed_login: &str, n: usize) -> Result<f64> {
    ensure_positive(n)?;
    let seed = users::find_by_login(store, seed_login)?;
    let batch: Vec<Message> = (0..n)
        .map(|i| messages::create(seed.id, &format!("message number {}", i), Utc::now()))
        .collect();

    let started = Instant::now();
    for message in &batch {
        messages::save(store, message)?;
    }
    let elapsed = started.elapsed().as_secs_f64();

    info!(n, elapsed, "insert benchmark");
    Ok(elapsed)
}

/// Seconds spent on `n` point lookups of `message_id`. Results are fetched
/// raw and dropped, so decoding into `Message` is not measured.
///
/// The store keeps no `_id` index: each lookup scans the collection up to
/// the probed message, parsing every line before it. Timings grow with the
/// message's position in the file, not only with `n`.
pub fn read<B: StorageBackend>(store: &DocumentStore<B>, message_id: &Uuid, n: usize) -> Result<f64> {
    ensure_positive(n)?;
    messages::find_by_id(store, message_id)?;

    let filter = Filter::id("_id", message_id);
    let started = Instant::now();
    for _ in 0..n {
        store
            .fetch_raw(Collection::Messages, &filter)
            .during("read benchmark")?;
    }
    let elapsed = started.elapsed().as_secs_f64();

    info!(n, elapsed, "read benchmark");
    Ok(elapsed)
}

/// The message probed by `read` when none is configured: the first one
/// stored for `seed_login`.
pub fn probe_message<B: StorageBackend>(store: &DocumentStore<B>, seed_login: &str) -> Result<Uuid> {
    let seed = users::find_by_login(store, seed_login)?;
    let first: Option<Message> = store
        .find_one(&Filter::id("user_id", &seed.id))
        .during("find probe message")?;
    first
        .map(|m| m.id)
        .ok_or_else(|| CheeperError::not_found("Messages", seed_login))
}

/// Runs `bench` once per entry of `counts`, keeping the order.
pub fn series<F>(counts: &[usize], mut bench: F) -> Result<Vec<f64>>
where
    F: FnMut(usize) -> Result<f64>,
{
    if counts.is_empty() {
        return Err(CheeperError::InvalidInput(
            "at least one request count is required".to_string(),
        ));
    }
    counts.iter().map(|&n| bench(n)).collect()
}

fn ensure_positive(n: usize) -> Result<()> {
    if n == 0 {
        return Err(CheeperError::InvalidInput(
            "request count must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::make_store;
    use crate::store::mem_backend::MemBackend;

    fn seeded() -> DocumentStore<MemBackend> {
        let store = make_store();
        users::create(&store, "user_0", "login_0").unwrap();
        store
    }

    #[test]
    fn test_insert_persists_every_message() {
        let store = seeded();
        let elapsed = insert(&store, "login_0", 25).unwrap();

        assert!(elapsed >= 0.0);
        assert_eq!(store.count(Collection::Messages, &Filter::All).unwrap(), 25);
    }

    #[test]
    fn test_insert_needs_seed_user() {
        let store = make_store();
        assert!(insert(&store, "login_0", 5).unwrap_err().is_not_found());
    }

    #[test]
    fn test_zero_requests_rejected() {
        let store = seeded();
        assert!(matches!(
            insert(&store, "login_0", 0),
            Err(CheeperError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_read_leaves_store_unchanged() {
        let store = seeded();
        insert(&store, "login_0", 3).unwrap();
        let probe = probe_message(&store, "login_0").unwrap();

        read(&store, &probe, 50).unwrap();
        assert_eq!(store.count(Collection::Messages, &Filter::All).unwrap(), 3);
    }

    #[test]
    fn test_read_unknown_message_is_not_found() {
        let store = seeded();
        assert!(read(&store, &Uuid::new_v4(), 5).unwrap_err().is_not_found());
    }

    #[test]
    fn test_probe_without_messages_is_not_found() {
        let store = seeded();
        assert!(probe_message(&store, "login_0").unwrap_err().is_not_found());
    }

    #[test]
    fn test_series_keeps_order_and_rejects_empty() {
        let times = series(&[3, 1, 2], |n| Ok(n as f64)).unwrap();
        assert_eq!(times, vec![3.0, 1.0, 2.0]);

        assert!(matches!(
            series(&[], |_| Ok(0.0)),
            Err(CheeperError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_series_stops_on_first_error() {
        let mut runs = 0;
        let result = series(&[1, 0, 2], |n| {
            runs += 1;
            ensure_positive(n).map(|_| 1.0)
        });
        assert!(result.is_err());
        assert_eq!(runs, 2);
    }
}
