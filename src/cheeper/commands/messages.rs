use super::{required, users};
use crate::error::{CheeperError, Result, StoreContext};
use crate::model::Message;
use crate::store::backend::StorageBackend;
use crate::store::{DocumentStore, Filter};
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

/// Builds a message without writing it, so batches and benchmarks can
/// construct up front and persist later.
pub fn create(user_id: Uuid, text: &str, at: DateTime<Utc>) -> Message {
    Message::new(user_id, text.to_string(), at)
}

pub fn save<B: StorageBackend>(store: &DocumentStore<B>, message: &Message) -> Result<()> {
    store.insert_one(message).during("save message")
}

/// Posts `text` as the user owning `login`, stamped now.
pub fn add<B: StorageBackend>(store: &DocumentStore<B>, login: &str, text: &str) -> Result<Message> {
    let text = required("text", text)?;
    let user = users::find_by_login(store, login)?;

    let message = create(user.id, text, Utc::now());
    save(store, &message)?;
    Ok(message)
}

pub fn find_by_id<B: StorageBackend>(store: &DocumentStore<B>, id: &Uuid) -> Result<Message> {
    store
        .find_one(&Filter::id("_id", id))
        .during("find message by id")?
        .ok_or_else(|| CheeperError::not_found("Message", id))
}

/// Messages of one user created within `[start, end]`, in store order.
/// An empty result is reported as `NotFound`.
pub fn find_in_range<B: StorageBackend>(
    store: &DocumentStore<B>,
    user_id: &Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<Message>> {
    let filter = Filter::id("user_id", user_id).and(Filter::between("created_at", start, end));
    let found: Vec<Message> = store.find(&filter).during("find messages in range")?;
    debug!(user = %user_id, count = found.len(), "range query");

    if found.is_empty() {
        return Err(CheeperError::not_found(
            "Messages",
            format!("{} between {} and {}", user_id, start, end),
        ));
    }
    Ok(found)
}
