use std::future::Future;

use uuid::Uuid;

use crate::domain::common::{
    entities::app_errors::CoreError,
    query::{Filterable, ListQuery},
};

/// Anything stored in a content repository.
pub trait Entity: Clone + Send + Sync + Filterable + 'static {
    fn id(&self) -> Uuid;
}

/// Storage port shared by every content store (recipes, workouts, foods, exercise logs).
pub trait Repository<T>: Send + Sync
where
    T: Entity,
{
    fn get(&self, id: Uuid) -> impl Future<Output = Result<Option<T>, CoreError>> + Send;

    fn list(&self, query: ListQuery) -> impl Future<Output = Result<Vec<T>, CoreError>> + Send;

    fn add(&self, item: T) -> impl Future<Output = Result<T, CoreError>> + Send;

    /// Replaces the stored item carrying the same id. Fails with `NotFound` when absent.
    fn update(&self, item: T) -> impl Future<Output = Result<T, CoreError>> + Send;

    /// Fails with `NotFound` when absent.
    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn count(&self) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
