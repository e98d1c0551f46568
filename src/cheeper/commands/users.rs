use super::required;
use crate::error::{CheeperError, Result, StoreContext, StoreError};
use crate::model::User;
use crate::store::backend::StorageBackend;
use crate::store::{DocumentStore, Filter};
use tracing::{info, warn};
use uuid::Uuid;

pub fn create<B: StorageBackend>(store: &DocumentStore<B>, name: &str, login: &str) -> Result<User> {
    let name = required("name", name)?;
    let login = required("login", login)?;

    match find_by_login(store, login) {
        Ok(_) => return Err(CheeperError::DuplicateLogin(login.to_string())),
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e),
    }

    let user = User::new(name.to_string(), login.to_string());
    match store.insert_one(&user) {
        Ok(()) => {}
        Err(StoreError::DuplicateKey { .. }) => {
            warn!(login, "login taken by a concurrent writer");
            return Err(CheeperError::DuplicateLogin(login.to_string()));
        }
        Err(e) => return Err(e).during("create user"),
    }

    info!(login, id = %user.id, "user created");
    Ok(user)
}

/// Resolves a login to its user. This is the one place logins turn into IDs.
pub fn find_by_login<B: StorageBackend>(store: &DocumentStore<B>, login: &str) -> Result<User> {
    let login = required("login", login)?;
    store
        .find_one(&Filter::eq("login", login))
        .during("find user by login")?
        .ok_or_else(|| CheeperError::not_found("User", login))
}

pub fn find_by_id<B: StorageBackend>(store: &DocumentStore<B>, id: &Uuid) -> Result<User> {
    store
        .find_one(&Filter::id("_id", id))
        .during("find user by id")?
        .ok_or_else(|| CheeperError::not_found("User", id))
}
