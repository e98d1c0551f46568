use crate::store::{Collection, Document};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    // Unique across all users; the key every lookup from the outside goes through.
    pub login: String,
}

impl User {
    pub fn new(name: String, login: String) -> Self {
        Self::new_at(name, login, Utc::now())
    }

    pub fn new_at(name: String, login: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name,
            login,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub text: String,
    pub user_id: Uuid,
}

impl Message {
    /// Builds a message without persisting it.
    pub fn new(user_id: Uuid, text: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            text,
            user_id,
        }
    }
}

/// A directed edge: `user_id` befriended `friend_id`. The reverse edge is a
/// separate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friendship {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub friend_id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl Friendship {
    pub fn new(user_id: Uuid, friend_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            user_id,
            friend_id,
            started_at: now,
        }
    }
}

impl Document for User {
    const COLLECTION: Collection = Collection::Users;
}

impl Document for Message {
    const COLLECTION: Collection = Collection::Messages;
}

impl Document for Friendship {
    const COLLECTION: Collection = Collection::Friendships;
}
