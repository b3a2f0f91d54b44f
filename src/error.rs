//! Error type for everything between an inbound request and the store.
//!
//! The `Display` text of each variant is what ends up in the `error` field
//! of a 500 response, so keep messages short and free of secrets.

use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VotesError>;

#[derive(Debug, Error)]
pub enum VotesError {
    /// A required setting is absent. Holds the environment variable name.
    #[error("Missing {0} env var")]
    MissingConfig(&'static str),

    /// The store could not be reached or the address is invalid.
    #[error("store connection failed: {0}")]
    Connection(#[source] redis::RedisError),

    /// A command reached the store but failed.
    #[error("store read failed: {0}")]
    Read(#[source] redis::RedisError),

    #[error("store {op} timed out after {}ms", .after.as_millis())]
    Timeout { op: &'static str, after: Duration },

    /// The store answered a batched read with the wrong number of values.
    #[error("store returned {got} values for {expected} keys")]
    UnexpectedReply { expected: usize, got: usize },
}

impl VotesError {
    /// True when the underlying transport went away. The next request will
    /// run on a fresh connection.
    pub fn is_connection_lost(&self) -> bool {
        match self {
            VotesError::Connection(e) | VotesError::Read(e) => {
                e.is_connection_dropped() || e.is_io_error()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_message_names_the_variable() {
        let err = VotesError::MissingConfig("REDIS_URL");
        assert_eq!(err.to_string(), "Missing REDIS_URL env var");
    }

    #[test]
    fn test_timeout_message_includes_duration() {
        let err = VotesError::Timeout {
            op: "read",
            after: Duration::from_millis(2000),
        };
        assert_eq!(err.to_string(), "store read timed out after 2000ms");
        assert!(!err.is_connection_lost());
    }

    #[test]
    fn test_io_errors_count_as_connection_lost() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        let err = VotesError::Read(redis::RedisError::from(io));
        assert!(err.is_connection_lost());
    }

    #[test]
    fn test_server_errors_do_not_count_as_connection_lost() {
        let err = VotesError::Read(redis::RedisError::from((
            redis::ErrorKind::TypeError,
            "WRONGTYPE",
        )));
        assert!(!err.is_connection_lost());
    }
}
