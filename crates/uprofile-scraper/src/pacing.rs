//! Fixed pause between outbound listing requests.
//!
//! There is no retry or backoff: each listing request is attempted once and
//! then followed by the same pause whatever the outcome, which keeps a run
//! at roughly one listing request per `pause`.

use std::future::Future;
use std::time::Duration;

/// Awaits `operation`, then sleeps for `pause` before handing back its output.
///
/// The pause applies to failures as well as successes. A zero `pause`
/// returns immediately.
pub(crate) async fn paced<T, Fut>(pause: Duration, operation: Fut) -> T
where
    Fut: Future<Output = T>,
{
    let output = operation.await;
    if !pause.is_zero() {
        tokio::time::sleep(pause).await;
    }
    output
}
