//! Reading the live vote counters.

pub mod counter;

pub use counter::parse_counter;

use crate::error::Result;
use crate::models::votes::VoteCounts;
use crate::store::CounterStore;

pub const KEY_YES: &str = "dn:yes";
pub const KEY_NO: &str = "dn:no";
pub const KEY_ROUND: &str = "dn:round";

/// Keys in the order they are read: yes, no, round.
pub const COUNTER_KEYS: [&str; 3] = [KEY_YES, KEY_NO, KEY_ROUND];

/// Read all three counters in a single batched store call.
pub async fn read_snapshot<S>(store: &S) -> Result<VoteCounts>
where
    S: CounterStore + ?Sized,
{
    let values = store.mget(&COUNTER_KEYS).await?;
    let counter = |i: usize| parse_counter(values.get(i).and_then(|v| v.as_deref()));

    Ok(VoteCounts {
        yes: counter(0),
        no: counter(1),
        round: counter(2),
    })
}
