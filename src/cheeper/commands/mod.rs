//! Repository and service operations.
//!
//! Every command takes the store handle explicitly and returns plain Rust
//! types. Nothing here prints or exits.

use crate::error::{CheeperError, Result};

pub mod bench;
pub mod friends;
pub mod messages;
pub mod testdata;
pub mod users;
pub mod window;

/// Rejects empty or whitespace-only arguments. Anything else is returned
/// untouched: logins and names are stored and compared verbatim.
pub(crate) fn required<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(CheeperError::InvalidInput(format!("{} cannot be empty", what)));
    }
    Ok(value)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_keeps_value_verbatim() {
        assert_eq!(required("login", "  amy ").unwrap(), "  amy ");
    }

    #[test]
    fn test_required_rejects_blank() {
        let err = required("login", " \t").unwrap_err();
        assert!(matches!(err, CheeperError::InvalidInput(msg) if msg == "login cannot be empty"));
    }
}
