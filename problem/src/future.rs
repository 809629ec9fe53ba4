//! Problem operations for futures that resolve to an [`Outcome`].

use std::future::Future;

use futures::future::{BoxFuture, FutureExt};

use crate::outcome::{Outcome, OutcomeExt};

/// Attach context or record severity once a future resolves.
///
/// ```ignore
/// let user = fetch_user(id).with_context("in load_profile").await?;
/// ```
pub trait OutcomeFutureExt<T, E>: Future<Output = Outcome<T, E>> + Send + Sized {
    fn with_context<'a>(self, context: impl Into<String>) -> BoxFuture<'a, Outcome<T, E>>
    where
        Self: 'a,
        T: 'a,
        E: 'a;

    fn with_defect<'a>(self, error: E) -> BoxFuture<'a, Outcome<T, E>>
    where
        Self: 'a,
        T: 'a,
        E: Send + 'a;

    fn with_failure<'a>(self, error: E) -> BoxFuture<'a, Outcome<T, E>>
    where
        Self: 'a,
        T: 'a,
        E: Send + 'a;
}

impl<T, E, Fut> OutcomeFutureExt<T, E> for Fut
where
    Fut: Future<Output = Outcome<T, E>> + Send,
{
    fn with_context<'a>(self, context: impl Into<String>) -> BoxFuture<'a, Outcome<T, E>>
    where
        Self: 'a,
        T: 'a,
        E: 'a,
    {
        let context = context.into();
        self.map(move |outcome| outcome.with_context(context)).boxed()
    }

    fn with_defect<'a>(self, error: E) -> BoxFuture<'a, Outcome<T, E>>
    where
        Self: 'a,
        T: 'a,
        E: Send + 'a,
    {
        self.map(move |outcome| outcome.with_defect(error)).boxed()
    }

    fn with_failure<'a>(self, error: E) -> BoxFuture<'a, Outcome<T, E>>
    where
        Self: 'a,
        T: 'a,
        E: Send + 'a,
    {
        self.map(move |outcome| outcome.with_failure(error)).boxed()
    }
}
