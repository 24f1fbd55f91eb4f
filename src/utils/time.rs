use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the UNIX epoch, used for order and snapshot timestamps.
pub fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_millis() as u64
}
