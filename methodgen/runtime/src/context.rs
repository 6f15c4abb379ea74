//! Cancellation and deadline propagation.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::TransportError;

/// Carries cancellation and an optional deadline from the caller of a
/// generated `execute()` down to the transport.
///
/// Derived contexts share the parent's cancellation (cancelling the parent
/// cancels the child, not the other way around) and can only tighten the
/// deadline.
///
/// ## Examples
///
/// ```
/// use std::time::Duration;
/// use methodgen_runtime::Context;
///
/// let parent = Context::background();
/// let child = parent.with_timeout(Duration::from_secs(5));
///
/// parent.cancel();
/// assert!(child.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derives a context that expires `timeout` from now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derives a context that expires at `deadline`, or at the parent's
    /// deadline if that is earlier.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        };
        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    /// Derives a context that can be cancelled independently of its parent.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Cancels this context and every context derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drives `future` to completion unless the context is cancelled or its
    /// deadline passes first.
    ///
    /// ## Errors
    ///
    /// Returns `TransportError::Cancelled` or `TransportError::DeadlineExceeded`
    /// when the context ends first, otherwise whatever `future` returns.
    pub async fn run<T, F>(&self, future: F) -> Result<T, TransportError>
    where
        F: Future<Output = Result<T, TransportError>>,
    {
        if self.is_cancelled() {
            return Err(TransportError::Cancelled);
        }

        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(TransportError::Cancelled),
            _ = expired => Err(TransportError::DeadlineExceeded),
            result = future => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_has_no_deadline() {
        let ctx = Context::background();
        assert!(ctx.deadline().is_none());
        assert!(!ctx.is_cancelled());
    }

    #[tokio::test]
    async fn deadline_only_tightens() {
        let ctx = Context::background().with_timeout(Duration::from_secs(1));
        let looser = ctx.with_timeout(Duration::from_secs(60));
        assert_eq!(looser.deadline(), ctx.deadline());

        let tighter = ctx.with_timeout(Duration::from_millis(10));
        assert!(tighter.deadline() < ctx.deadline());
    }

    #[test]
    fn cancelling_child_leaves_parent_running() {
        let parent = Context::background();
        let child = parent.child();
        child.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());
    }

    #[tokio::test]
    async fn run_returns_future_result() {
        let ctx = Context::background();
        let result = ctx.run(async { Ok::<_, TransportError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn run_reports_cancellation() {
        let ctx = Context::background();
        ctx.cancel();
        let result = ctx
            .run(async { Ok::<_, TransportError>(()) })
            .await;
        assert!(matches!(result, Err(TransportError::Cancelled)));
    }

    #[tokio::test]
    async fn run_reports_deadline() {
        let ctx = Context::background().with_timeout(Duration::from_millis(10));
        let result = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, TransportError>(())
            })
            .await;
        assert!(matches!(result, Err(TransportError::DeadlineExceeded)));
    }
}
