use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr,
};
use thiserror::Error;

use crate::{
    entities::movie,
    models::{MovieOrder, NewMovie},
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a movie with this title already exists")]
    DuplicateTitle,
    #[error("movie not found")]
    NotFound,
    #[error(transparent)]
    Db(#[from] DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// All persistence for movie records goes through this handle. Inserts
/// are single statements, so a unique-title conflict leaves the table
/// untouched.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all(&self, order: Option<MovieOrder>) -> StoreResult<Vec<movie::Model>> {
        let query = match order {
            Some(MovieOrder::RatingDesc) => {
                // SQLite sorts nulls first ascending, so descending puts
                // unrated entries at the bottom.
                movie::Entity::find().order_by_desc(movie::Column::Rating)
            },
            None => movie::Entity::find().order_by_asc(movie::Column::Id),
        };
        Ok(query.all(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> StoreResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(StoreError::NotFound)
    }

    pub async fn insert(&self, new: NewMovie) -> StoreResult<movie::Model> {
        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(new.rating),
            ranking: Set(new.ranking),
            review: Set(new.review),
            img_url: Set(new.img_url),
        };

        match model.insert(&self.db).await {
            Ok(movie) => Ok(movie),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(StoreError::DuplicateTitle),
                _ => Err(err.into()),
            },
        }
    }

    /// Overwrites rating and review, leaving every other column alone.
    pub async fn update_review(
        &self,
        id: i32,
        rating: f64,
        review: String,
    ) -> StoreResult<movie::Model> {
        let model = movie::ActiveModel {
            id: Unchanged(id),
            rating: Set(Some(rating)),
            review: Set(Some(review)),
            ..Default::default()
        };

        match model.update(&self.db).await {
            Ok(movie) => Ok(movie),
            Err(DbErr::RecordNotUpdated) => Err(StoreError::NotFound),
            Err(err) => Err(err.into()),
        }
    }

    /// Deleting an id that is not there is a no-op, not an error.
    pub async fn delete(&self, id: i32) -> StoreResult<()> {
        movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
