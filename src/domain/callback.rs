/// Timeout sent with a callback URL when the caller gave no usable one.
pub const DEFAULT_CALLBACK_TIMEOUT: u32 = 5;

/// Resolves the callback timeout to send, in seconds.
///
/// The gateway rejects a callback without a positive timeout, so anything
/// absent or non-positive becomes [`DEFAULT_CALLBACK_TIMEOUT`].
pub fn effective_timeout(requested: Option<i32>) -> u32 {
    match requested {
        Some(seconds) if seconds > 0 => seconds.unsigned_abs(),
        _ => DEFAULT_CALLBACK_TIMEOUT,
    }
}
