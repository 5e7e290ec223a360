//! In-memory repositories for use case tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::gateways::{CategoryRepository, DestinationRepository, ReviewRepository};
use crate::domain::models::{
    Category, CategoryId, CreateCategoryData, CreateDestinationData, CreateReviewData, Destination,
    DestinationFilter, DestinationId, Pagination, Review, ReviewId,
};
use crate::shared::errors::RepositoryError;

fn page<T: Clone>(items: &[T], pagination: Pagination) -> Vec<T> {
    items
        .iter()
        .skip(usize::try_from(pagination.skip()).unwrap())
        .take(usize::try_from(pagination.limit()).unwrap())
        .cloned()
        .collect()
}

/// Stores rows in insertion order and hands out sequential IDs, like a SERIAL column
#[derive(Default)]
pub struct InMemoryStore {
    categories: Mutex<Vec<Category>>,
    destinations: Mutex<Vec<Destination>>,
    reviews: Mutex<Vec<Review>>,
    fail_with_database_error: Mutex<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call return a database error
    pub fn failing(self) -> Self {
        *self.fail_with_database_error.lock().unwrap() = true;
        self
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if *self.fail_with_database_error.lock().unwrap() {
            Err(RepositoryError::Database(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }

    pub fn category_count(&self) -> usize {
        self.categories.lock().unwrap().len()
    }

    pub fn destination_count(&self) -> usize {
        self.destinations.lock().unwrap().len()
    }

    pub fn review_count(&self) -> usize {
        self.reviews.lock().unwrap().len()
    }

    /// Insert a category directly, bypassing constraint checks
    pub fn seed_category(&self, name: &str) -> Category {
        let mut categories = self.categories.lock().unwrap();
        let id = i32::try_from(categories.len()).unwrap() + 1;
        let category = Category::restore(CategoryId::new(id), name.to_string());
        categories.push(category.clone());
        category
    }

    /// Insert a destination directly, bypassing constraint checks
    pub fn seed_destination(
        &self,
        name: &str,
        price: rust_decimal::Decimal,
        category_id: CategoryId,
    ) -> Destination {
        let mut destinations = self.destinations.lock().unwrap();
        let id = i32::try_from(destinations.len()).unwrap() + 1;
        let destination = Destination::restore(
            DestinationId::new(id),
            name.to_string(),
            format!("About {name}"),
            price,
            category_id,
        );
        destinations.push(destination.clone());
        destination
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        self.check()?;
        Ok(self.categories.lock().unwrap().iter().find(|c| c.id() == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<Category>, RepositoryError> {
        self.check()?;
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| ids.contains(&c.id()))
            .cloned()
            .collect())
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<Category>, RepositoryError> {
        self.check()?;
        Ok(page(&self.categories.lock().unwrap(), pagination))
    }

    async fn create(&self, data: &CreateCategoryData) -> Result<Category, RepositoryError> {
        self.check()?;
        if self.categories.lock().unwrap().iter().any(|c| c.name() == data.name) {
            return Err(RepositoryError::UniqueViolation("categories_name_key".to_string()));
        }
        Ok(self.seed_category(&data.name))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        self.check()?;
        Ok(self.categories.lock().unwrap().iter().any(|c| c.name() == name))
    }
}

#[async_trait]
impl DestinationRepository for InMemoryStore {
    async fn find_by_id(&self, id: DestinationId) -> Result<Option<Destination>, RepositoryError> {
        self.check()?;
        Ok(self.destinations.lock().unwrap().iter().find(|d| d.id() == id).cloned())
    }

    async fn list(&self, filter: &DestinationFilter) -> Result<Vec<Destination>, RepositoryError> {
        self.check()?;
        let matching: Vec<Destination> = self
            .destinations
            .lock()
            .unwrap()
            .iter()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect();
        Ok(page(&matching, filter.pagination))
    }

    async fn find_by_category_ids(
        &self,
        category_ids: &[CategoryId],
    ) -> Result<Vec<Destination>, RepositoryError> {
        self.check()?;
        Ok(self
            .destinations
            .lock()
            .unwrap()
            .iter()
            .filter(|d| category_ids.contains(&d.category_id()))
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateDestinationData) -> Result<Destination, RepositoryError> {
        self.check()?;
        let category_exists = self
            .categories
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.id() == data.category_id);
        if !category_exists {
            return Err(RepositoryError::ForeignKeyViolation(
                "destinations_category_id_fkey".to_string(),
            ));
        }
        let mut destinations = self.destinations.lock().unwrap();
        let id = i32::try_from(destinations.len()).unwrap() + 1;
        let destination = Destination::restore(
            DestinationId::new(id),
            data.name.clone(),
            data.description.clone(),
            data.price,
            data.category_id,
        );
        destinations.push(destination.clone());
        Ok(destination)
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn find_by_destination_ids(
        &self,
        destination_ids: &[DestinationId],
    ) -> Result<Vec<Review>, RepositoryError> {
        self.check()?;
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| destination_ids.contains(&r.destination_id()))
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateReviewData) -> Result<Review, RepositoryError> {
        self.check()?;
        let destination_exists = self
            .destinations
            .lock()
            .unwrap()
            .iter()
            .any(|d| d.id() == data.destination_id);
        if !destination_exists {
            return Err(RepositoryError::ForeignKeyViolation(
                "reviews_destination_id_fkey".to_string(),
            ));
        }
        let mut reviews = self.reviews.lock().unwrap();
        let id = i32::try_from(reviews.len()).unwrap() + 1;
        let review = Review::restore(
            ReviewId::new(id),
            data.content.clone(),
            data.rating,
            data.destination_id,
        );
        reviews.push(review.clone());
        Ok(review)
    }
}
