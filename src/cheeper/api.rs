//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all cheeper operations, whatever the UI.
//!
//! It owns the store handle and the configuration, fills in configured
//! defaults (seed login, test message count, probe message) and dispatches to
//! `commands/*.rs`. It holds no business logic and does no I/O of its own.
//!
//! `CheeperApi<B: StorageBackend>` is generic over the backend:
//! - Production: `CheeperApi<FsBackend>` built from [`crate::store::connect`]
//! - Testing: `CheeperApi<MemBackend>`

use crate::commands::bench;
use crate::commands::testdata;
use crate::commands::{friends, messages, users, window};
use crate::config::CheeperConfig;
use crate::error::Result;
use crate::model::{Friendship, Message, User};
use crate::store::backend::StorageBackend;
use crate::store::DocumentStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub struct CheeperApi<B: StorageBackend> {
    store: DocumentStore<B>,
    config: CheeperConfig,
}

impl<B: StorageBackend> CheeperApi<B> {
    pub fn new(store: DocumentStore<B>, config: CheeperConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &DocumentStore<B> {
        &self.store
    }

    pub fn config(&self) -> &CheeperConfig {
        &self.config
    }

    // --- Users ---

    pub fn create_user(&self, name: &str, login: &str) -> Result<User> {
        users::create(&self.store, name, login)
    }

    pub fn find_user_by_login(&self, login: &str) -> Result<User> {
        users::find_by_login(&self.store, login)
    }

    pub fn find_user_by_id(&self, id: &Uuid) -> Result<User> {
        users::find_by_id(&self.store, id)
    }

    // --- Messages ---

    pub fn create_message(&self, user_id: Uuid, text: &str, at: DateTime<Utc>) -> Message {
        messages::create(user_id, text, at)
    }

    pub fn save_message(&self, message: &Message) -> Result<()> {
        messages::save(&self.store, message)
    }

    pub fn add_message(&self, login: &str, text: &str) -> Result<Message> {
        messages::add(&self.store, login, text)
    }

    pub fn find_message(&self, id: &Uuid) -> Result<Message> {
        messages::find_by_id(&self.store, id)
    }

    pub fn messages_in_range(
        &self,
        user_id: &Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Message>> {
        messages::find_in_range(&self.store, user_id, start, end)
    }

    pub fn messages_in_window(&self, login: &str, start: &str, end: &str) -> Result<Vec<Message>> {
        window::messages_in_window(&self.store, login, start, end)
    }

    // --- Friendships ---

    pub fn add_friendship(&self, user_login: &str, friend_login: &str) -> Result<Friendship> {
        friends::add(&self.store, user_login, friend_login)
    }

    pub fn friend_names(&self, login: &str) -> Result<Vec<String>> {
        friends::list_names(&self.store, login)
    }

    pub fn count_friends(&self, login: &str) -> Result<u64> {
        friends::count(&self.store, login)
    }

    // --- Test data & benchmarks ---

    pub fn generate_test_data(&self, num_users: usize) -> Result<TestDataReport> {
        testdata::generate(&self.store, num_users, self.config.test_message_count)
    }

    pub fn benchmark_insert(&self, n: usize) -> Result<f64> {
        bench::insert(&self.store, &self.config.seed_login, n)
    }

    pub fn benchmark_read(&self, n: usize) -> Result<f64> {
        let probe = self.probe_message()?;
        bench::read(&self.store, &probe, n)
    }

    pub fn benchmark_series(&self, mode: BenchMode, counts: &[usize]) -> Result<Vec<f64>> {
        match mode {
            BenchMode::Insert => bench::series(counts, |n| self.benchmark_insert(n)),
            BenchMode::Read => {
                let probe = self.probe_message()?;
                bench::series(counts, |n| bench::read(&self.store, &probe, n))
            }
        }
    }

    /// Insert series first, then read series over the same counts.
    pub fn benchmark_all(&self, counts: &[usize]) -> Result<(Vec<f64>, Vec<f64>)> {
        let writes = self.benchmark_series(BenchMode::Insert, counts)?;
        let reads = self.benchmark_series(BenchMode::Read, counts)?;
        Ok((writes, reads))
    }

    fn probe_message(&self) -> Result<Uuid> {
        match self.config.probe_message_id {
            Some(id) => Ok(id),
            None => bench::probe_message(&self.store, &self.config.seed_login),
        }
    }
}

pub use crate::commands::bench::BenchMode;
pub use crate::commands::testdata::TestDataReport;
pub use crate::commands::window::Window;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheeperError;
    use crate::store::mem_backend::MemBackend;
    use crate::store::{Collection, Filter};

    fn make_api() -> CheeperApi<MemBackend> {
        CheeperApi::new(
            DocumentStore::with_backend(MemBackend::new()),
            CheeperConfig::default(),
        )
    }

    #[test]
    fn test_generate_uses_configured_message_count() {
        let api = CheeperApi::new(
            DocumentStore::with_backend(MemBackend::new()),
            CheeperConfig {
                test_message_count: 3,
                ..CheeperConfig::default()
            },
        );
        let report = api.generate_test_data(2).unwrap();
        assert_eq!(report.messages, 3);
    }

    #[test]
    fn test_benchmarks_run_against_seed_user() {
        let api = make_api();
        api.generate_test_data(3).unwrap();

        let (writes, reads) = api.benchmark_all(&[2, 4]).unwrap();
        assert_eq!(writes.len(), 2);
        assert_eq!(reads.len(), 2);

        let seed = api.find_user_by_login("login_0").unwrap();
        let seeded = api
            .store()
            .count(Collection::Messages, &Filter::id("user_id", &seed.id))
            .unwrap();
        assert!(seeded >= 6);
    }

    #[test]
    fn test_read_benchmark_uses_configured_probe() {
        let api = CheeperApi::new(
            DocumentStore::with_backend(MemBackend::new()),
            CheeperConfig {
                probe_message_id: Some(Uuid::new_v4()),
                ..CheeperConfig::default()
            },
        );
        let err = api.benchmark_read(1).unwrap_err();
        assert!(matches!(err, CheeperError::NotFound { entity: "Message", .. }));
    }

    #[test]
    fn test_message_round_trip_through_api() {
        let api = make_api();
        let amy = api.create_user("Amy", "amy").unwrap();
        let at = Utc::now();

        let msg = api.create_message(amy.id, "hello", at);
        api.save_message(&msg).unwrap();

        let found = api.messages_in_range(&amy.id, at, at).unwrap();
        assert_eq!(found, vec![msg]);
    }

    #[test]
    fn test_friendship_dispatch() {
        let api = make_api();
        api.create_user("Bob", "b").unwrap();
        api.create_user("Amy", "a").unwrap();
        api.add_friendship("a", "b").unwrap();

        assert_eq!(api.friend_names("a").unwrap(), vec!["Bob"]);
        assert_eq!(api.count_friends("a").unwrap(), 1);
    }
}
