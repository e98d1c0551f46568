use crate::error::{CheeperError, Result, StoreContext};
use crate::model::{Friendship, Message, User};
use crate::store::backend::StorageBackend;
use crate::store::DocumentStore;
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::info;

pub const DEFAULT_MESSAGE_COUNT: usize = 10;

/// What one `generate` call wrote.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TestDataReport {
    pub users: usize,
    pub friendships: usize,
    pub messages: usize,
}

/// One generation batch, built in memory before anything is written.
#[derive(Debug)]
pub struct TestBatch {
    pub users: Vec<User>,
    pub friendships: Vec<Friendship>,
    pub messages: Vec<Message>,
}

/// Users `user_<i>`/`login_<i>`, one random outgoing edge each to a different
/// user, and `message_count` messages spread over random owners. Everything
/// shares the timestamp `now`.
pub fn build_batch<R: Rng>(
    num_users: usize,
    message_count: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<TestBatch> {
    if num_users < 2 {
        return Err(CheeperError::InvalidInput(format!(
            "need at least 2 users to build friendships, got {}",
            num_users
        )));
    }

    let users: Vec<User> = (0..num_users)
        .map(|i| User::new_at(format!("user_{}", i), format!("login_{}", i), now))
        .collect();

    let friendships = users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let mut friend = rng.random_range(0..num_users);
            while friend == i {
                friend = rng.random_range(0..num_users);
            }
            Friendship::new(user.id, users[friend].id, now)
        })
        .collect();

    let messages = (0..message_count)
        .map(|i| {
            let owner = rng.random_range(0..num_users);
            Message::new(
                users[owner].id,
                format!("message number {} for user_{}", i, owner),
                now,
            )
        })
        .collect();

    Ok(TestBatch {
        users,
        friendships,
        messages,
    })
}

/// Writes a generated batch, one bulk insert per collection.
pub fn generate<B: StorageBackend>(
    store: &DocumentStore<B>,
    num_users: usize,
    message_count: usize,
) -> Result<TestDataReport> {
    let batch = build_batch(num_users, message_count, &mut rand::rng(), Utc::now())?;

    store.insert_many(&batch.users).during("insert test users")?;
    store
        .insert_many(&batch.friendships)
        .during("insert test friendships")?;
    store
        .insert_many(&batch.messages)
        .during("insert test messages")?;

    let report = TestDataReport {
        users: batch.users.len(),
        friendships: batch.friendships.len(),
        messages: batch.messages.len(),
    };
    info!(?report, "test data generated");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::make_store;
    use crate::commands::{friends, users};
    use crate::store::{Collection, Filter};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_batch_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();
        let batch = build_batch(5, DEFAULT_MESSAGE_COUNT, &mut rng, now).unwrap();

        assert_eq!(batch.users.len(), 5);
        assert_eq!(batch.friendships.len(), 5);
        assert_eq!(batch.messages.len(), 10);
        assert_eq!(batch.users[3].login, "login_3");
        assert_eq!(batch.users[3].name, "user_3");
        assert!(batch.users.iter().all(|u| u.created_at == now));
        assert!(batch.messages.iter().all(|m| m.created_at == now));
    }

    #[test]
    fn test_batch_has_no_self_edges() {
        let mut rng = StdRng::seed_from_u64(42);
        let batch = build_batch(2, 0, &mut rng, Utc::now()).unwrap();

        for (user, edge) in batch.users.iter().zip(&batch.friendships) {
            assert_eq!(edge.user_id, user.id);
            assert_ne!(edge.friend_id, user.id);
        }
    }

    #[test]
    fn test_message_owners_exist() {
        let mut rng = StdRng::seed_from_u64(1);
        let batch = build_batch(3, 25, &mut rng, Utc::now()).unwrap();

        for msg in &batch.messages {
            let owner = batch.users.iter().position(|u| u.id == msg.user_id).unwrap();
            assert!(msg.text.ends_with(&format!("for user_{}", owner)));
        }
    }

    #[test]
    fn test_too_few_users_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            build_batch(1, 10, &mut rng, Utc::now()),
            Err(CheeperError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_generate_writes_everything() {
        let store = make_store();
        let report = generate(&store, 4, DEFAULT_MESSAGE_COUNT).unwrap();

        assert_eq!(
            report,
            TestDataReport {
                users: 4,
                friendships: 4,
                messages: 10
            }
        );
        assert_eq!(store.count(Collection::Messages, &Filter::All).unwrap(), 10);
        assert!(users::find_by_login(&store, "login_2").is_ok());
        assert_eq!(friends::count(&store, "login_0").unwrap(), 1);
    }

    #[test]
    fn test_generate_twice_hits_login_index() {
        let store = make_store();
        generate(&store, 3, 1).unwrap();

        let err = generate(&store, 3, 1).unwrap_err();
        assert!(matches!(err, CheeperError::Store { .. }));
        assert_eq!(store.count(Collection::Users, &Filter::All).unwrap(), 3);
    }
}
