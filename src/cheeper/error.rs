use thiserror::Error;

/// Failures raised by the storage layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Duplicate key in {collection}: {key}")]
    DuplicateKey { collection: &'static str, key: String },

    #[error("Store error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum CheeperError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Login already taken: {0}")]
    DuplicateLogin(String),

    #[error("{user} is already friends with {friend}")]
    DuplicateFriendship { user: String, friend: String },

    #[error("Malformed time: {0}")]
    MalformedTime(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{operation} failed: {source}")]
    Store {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl CheeperError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        CheeperError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CheeperError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, CheeperError>;

/// Tags a store failure with the operation that hit it.
pub trait StoreContext<T> {
    fn during(self, operation: &'static str) -> Result<T>;
}

impl<T> StoreContext<T> for std::result::Result<T, StoreError> {
    fn during(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| CheeperError::Store { operation, source })
    }
}
