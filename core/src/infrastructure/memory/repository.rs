use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::common::{
    entities::app_errors::CoreError,
    ports::{Entity, Repository},
    query::ListQuery,
};

/// Process-local store; readers share the lock, writers hold it exclusively.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> InMemoryRepository<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(seed)),
        }
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get(&self, id: Uuid) -> Result<Option<T>, CoreError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn list(&self, query: ListQuery) -> Result<Vec<T>, CoreError> {
        let items = self.items.read().await;
        let result = query.apply(items.as_slice());
        debug!(total = items.len(), returned = result.len(), "listed items");
        Ok(result)
    }

    async fn add(&self, item: T) -> Result<T, CoreError> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id() == item.id()) {
            return Err(CoreError::Invalid(format!("item {} already exists", item.id())));
        }
        items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, item: T) -> Result<T, CoreError> {
        let mut items = self.items.write().await;
        let slot = items
            .iter_mut()
            .find(|existing| existing.id() == item.id())
            .ok_or(CoreError::NotFound)?;
        *slot = item.clone();
        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let mut items = self.items.write().await;
        let position = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(CoreError::NotFound)?;
        items.remove(position);
        Ok(())
    }

    async fn count(&self) -> Result<usize, CoreError> {
        Ok(self.items.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::query::{ConditionOperator, SortDirection},
        food::entities::{Food, FoodConfig},
    };

    fn food(name: &str, calories: f64) -> Food {
        Food::new(FoodConfig {
            name: name.to_string(),
            brand: None,
            category: "test".to_string(),
            serving_size: "100g".to_string(),
            calories,
            protein: 1.0,
            carbs: 1.0,
            fat: 1.0,
            fiber: 0.0,
            sugar: 0.0,
            sodium: 0.0,
        })
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let repository = InMemoryRepository::default();
        let apple = repository.add(food("apple", 52.0)).await.unwrap();

        assert_eq!(repository.get(apple.id).await.unwrap(), Some(apple.clone()));

        let mut renamed = apple.clone();
        renamed.name = "green apple".to_string();
        repository.update(renamed).await.unwrap();
        assert_eq!(
            repository.get(apple.id).await.unwrap().unwrap().name,
            "green apple"
        );

        repository.delete(apple.id).await.unwrap();
        assert_eq!(repository.get(apple.id).await.unwrap(), None);
        assert_eq!(repository.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_item_fail() {
        let repository: InMemoryRepository<Food> = InMemoryRepository::default();
        let ghost = food("ghost", 0.0);

        assert_eq!(repository.update(ghost.clone()).await, Err(CoreError::NotFound));
        assert_eq!(repository.delete(ghost.id).await, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected() {
        let repository = InMemoryRepository::default();
        let apple = repository.add(food("apple", 52.0)).await.unwrap();

        assert!(matches!(
            repository.add(apple).await,
            Err(CoreError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn list_applies_query() {
        let repository = InMemoryRepository::new(vec![
            food("apple", 52.0),
            food("banana", 89.0),
            food("cherry", 50.0),
        ]);

        let query = ListQuery::default()
            .with_condition("calories", ConditionOperator::Gte, "51")
            .sorted_by("calories", SortDirection::Desc);
        let names: Vec<_> = repository
            .list(query)
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();

        assert_eq!(names, vec!["banana", "apple"]);
    }
}
