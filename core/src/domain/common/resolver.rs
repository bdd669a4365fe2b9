use futures::future::BoxFuture;
use tracing::{debug, error};

use crate::domain::common::entities::app_errors::CoreError;

/// A named, not yet started attempt at producing a value.
pub struct Strategy<'a, T> {
    pub name: &'static str,
    pub attempt: BoxFuture<'a, Result<T, CoreError>>,
}

impl<'a, T> Strategy<'a, T> {
    pub fn new(name: &'static str, attempt: BoxFuture<'a, Result<T, CoreError>>) -> Self {
        Self { name, attempt }
    }
}

/// Outcome of a resolver chain: the value and the strategy that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub strategy: &'static str,
    pub value: T,
}

/// Runs strategies in order and returns the first success.
///
/// Strategies are lazy, so later ones never start once an earlier one succeeds.
/// When every strategy fails the last error is returned.
pub async fn resolve_first<T>(
    chain: &str,
    strategies: Vec<Strategy<'_, T>>,
) -> Result<Resolved<T>, CoreError> {
    let mut last_error = CoreError::Invalid(format!("no strategy registered for {}", chain));

    for strategy in strategies {
        match strategy.attempt.await {
            Ok(value) => {
                debug!(chain, strategy = strategy.name, "resolver chain succeeded");
                return Ok(Resolved {
                    strategy: strategy.name,
                    value,
                });
            }
            Err(CoreError::ProviderNotConfigured(provider)) => {
                debug!(chain, strategy = strategy.name, %provider, "strategy skipped");
                last_error = CoreError::ProviderNotConfigured(provider);
            }
            Err(e) => {
                error!(chain, strategy = strategy.name, error = %e, "strategy failed, trying next");
                last_error = e;
            }
        }
    }

    Err(last_error)
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use futures::FutureExt;

    use super::*;

    #[tokio::test]
    async fn first_success_wins_and_later_strategies_never_run() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let resolved = resolve_first(
            "test",
            vec![
                Strategy::new(
                    "broken",
                    async { Err(CoreError::ExternalServiceError("down".to_string())) }.boxed(),
                ),
                Strategy::new("working", async { Ok(7) }.boxed()),
                Strategy::new(
                    "unused",
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        Ok(9)
                    }
                    .boxed(),
                ),
            ],
        )
        .await
        .unwrap();

        assert_eq!(resolved.strategy, "working");
        assert_eq!(resolved.value, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn last_error_is_returned_when_everything_fails() {
        let result: Result<Resolved<u8>, CoreError> = resolve_first(
            "test",
            vec![
                Strategy::new(
                    "a",
                    async { Err(CoreError::ProviderNotConfigured("a".to_string())) }.boxed(),
                ),
                Strategy::new("b", async { Err(CoreError::NotFound) }.boxed()),
            ],
        )
        .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn empty_chain_is_invalid() {
        let result: Result<Resolved<u8>, CoreError> = resolve_first("empty", vec![]).await;
        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }
}
