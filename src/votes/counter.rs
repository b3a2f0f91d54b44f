//! Counter value parsing.
//!
//! The store holds counters as decimal strings, but nothing stops a stray
//! write from leaving junk behind. The display must keep rendering, so
//! parsing never fails: anything that is not a plain non-negative integer
//! reads as zero.
//!
//! | stored value             | counter |
//! |--------------------------|---------|
//! | key missing              | 0       |
//! | `""` or whitespace       | 0       |
//! | `"42"`, `" 42 "`, `"+42"`| 42      |
//! | `"-3"`                   | 0       |
//! | `"4.5"`, `"abc"`         | 0       |
//! | larger than `u64::MAX`   | 0       |

use tracing::warn;

/// Parse one raw stored value into a counter.
pub fn parse_counter(raw: Option<&str>) -> u64 {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return 0;
    };
    match value.parse::<u64>() {
        Ok(n) => n,
        Err(_) => {
            warn!(value, "non-numeric counter value, reading as 0");
            0
        }
    }
}
