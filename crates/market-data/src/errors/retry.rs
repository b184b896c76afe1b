/// Classification for retry policy.
///
/// Callers use it to decide whether a failed lookup is worth repeating or
/// should degrade to an empty result straight away.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - bad symbol, bad configuration, or terminal failure.
    Never,

    /// Retry after a delay - rate limiting, timeouts, network hiccups.
    WithBackoff,
}
