#![forbid(unsafe_code)]

//! Session-unique id generation.
//!
//! Ids combine a monotonic timestamp (nanoseconds since the first id was
//! requested) with 64 bits of randomness, both base36-encoded. The timestamp
//! keeps ids ordered and unique across rapid calls on a coarse clock; the
//! random tail makes collisions across concurrent sessions implausible.

use std::sync::OnceLock;

use web_time::Instant;

static EPOCH: OnceLock<Instant> = OnceLock::new();

fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

/// Generate a session-unique id with the given prefix.
///
/// The result has the shape `{prefix}-{time36}-{rand36}`.
pub fn session_uid(prefix: &str) -> String {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos();
    let entropy: u64 = rand::random();
    format!(
        "{prefix}-{}-{}",
        to_base36(nanos),
        to_base36(u128::from(entropy))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keeps_prefix() {
        let id = session_uid("alert-dialog");
        assert!(id.starts_with("alert-dialog-"));
    }

    #[test]
    fn many_ids_are_distinct() {
        let ids: HashSet<String> = (0..10_000).map(|_| session_uid("d")).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn base36_zero() {
        assert_eq!(to_base36(0), "0");
    }

    #[test]
    fn base36_round_numbers() {
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
