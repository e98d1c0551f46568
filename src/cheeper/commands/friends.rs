use super::{required, users};
use crate::error::{CheeperError, Result, StoreContext, StoreError};
use crate::model::Friendship;
use crate::store::backend::StorageBackend;
use crate::store::{Collection, DocumentStore, Filter};
use chrono::Utc;
use std::collections::HashSet;
use tracing::{info, warn};
use uuid::Uuid;

/// Records the edge `user_login -> friend_login`. The reverse edge is not
/// implied and can be added on its own.
pub fn add<B: StorageBackend>(
    store: &DocumentStore<B>,
    user_login: &str,
    friend_login: &str,
) -> Result<Friendship> {
    let user_login = required("user login", user_login)?;
    let friend_login = required("friend login", friend_login)?;
    if user_login == friend_login {
        return Err(CheeperError::InvalidInput(
            "user and friend logins must be different".to_string(),
        ));
    }

    let friend = users::find_by_login(store, friend_login)?;
    let user = users::find_by_login(store, user_login)?;

    let already = match friend_ids(store, &user.id) {
        Ok(ids) => ids.contains(&friend.id),
        Err(e) if e.is_not_found() => false,
        Err(e) => return Err(e),
    };
    let duplicate = || CheeperError::DuplicateFriendship {
        user: user_login.to_string(),
        friend: friend_login.to_string(),
    };
    if already {
        return Err(duplicate());
    }

    let edge = Friendship::new(user.id, friend.id, Utc::now());
    match store.insert_one(&edge) {
        Ok(()) => {}
        Err(StoreError::DuplicateKey { .. }) => {
            warn!(user_login, friend_login, "edge added by a concurrent writer");
            return Err(duplicate());
        }
        Err(e) => return Err(e).during("add friendship"),
    }

    info!(user_login, friend_login, "friendship added");
    Ok(edge)
}

/// Display names of everyone `login` has befriended, sorted ascending.
pub fn list_names<B: StorageBackend>(store: &DocumentStore<B>, login: &str) -> Result<Vec<String>> {
    let user = users::find_by_login(store, login)?;
    let ids = friend_ids(store, &user.id)?;

    let mut names = Vec::with_capacity(ids.len());
    for id in &ids {
        names.push(users::find_by_id(store, id)?.name);
    }
    names.sort();
    Ok(names)
}

/// Number of outgoing edges of `login`, counted in the store.
pub fn count<B: StorageBackend>(store: &DocumentStore<B>, login: &str) -> Result<u64> {
    let user = users::find_by_login(store, login)?;
    store
        .count(Collection::Friendships, &Filter::id("user_id", &user.id))
        .during("count friends")
}

/// Targets of every outgoing edge of `user_id`. No edges is `NotFound`.
pub fn friend_ids<B: StorageBackend>(store: &DocumentStore<B>, user_id: &Uuid) -> Result<HashSet<Uuid>> {
    let edges: Vec<Friendship> = store
        .find(&Filter::id("user_id", user_id))
        .during("list friendships")?;

    if edges.is_empty() {
        return Err(CheeperError::not_found("Friendships", user_id));
    }
    Ok(edges.into_iter().map(|edge| edge.friend_id).collect())
}
