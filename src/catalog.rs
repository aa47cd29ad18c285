use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QueryTrait, Set, TransactionTrait,
};
use tracing::debug;

use crate::{
    entities::{director, genre, movie},
    error::{AppError, AppResult},
    models::{MovieFilter, MovieInput, NameInput},
};

/// Store handle shared by every handler. Cheap to clone: it only wraps the connection pool.
#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_movies(&self, filter: MovieFilter) -> AppResult<Vec<movie::Model>> {
        let movies = movie::Entity::find()
            .apply_if(filter.director_id, |q, id| q.filter(movie::Column::DirectorId.eq(id)))
            .apply_if(filter.genre_id, |q, id| q.filter(movie::Column::GenreId.eq(id)))
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;
        debug!(
            director_id = ?filter.director_id,
            genre_id = ?filter.genre_id,
            count = movies.len(),
            "listed movies"
        );
        Ok(movies)
    }

    pub async fn get_movie(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound)
    }

    pub async fn create_movie(&self, input: MovieInput) -> AppResult<i32> {
        let model = movie::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            trailer: Set(input.trailer),
            year: Set(input.year),
            rating: Set(input.rating),
            genre_id: Set(input.genre_id),
            director_id: Set(input.director_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        debug!(id = model.id, "created movie");
        Ok(model.id)
    }

    /// Overwrites everything but the title; fields absent from `input` become null.
    pub async fn update_movie(&self, id: i32, input: MovieInput) -> AppResult<()> {
        let txn = self.db.begin().await?;
        let existing = movie::Entity::find_by_id(id).one(&txn).await?.ok_or(AppError::NotFound)?;

        let mut model: movie::ActiveModel = existing.into();
        model.description = Set(input.description);
        model.trailer = Set(input.trailer);
        model.year = Set(input.year);
        model.rating = Set(input.rating);
        model.genre_id = Set(input.genre_id);
        model.director_id = Set(input.director_id);
        model.update(&txn).await?;

        txn.commit().await?;
        debug!(id, "updated movie");
        Ok(())
    }

    pub async fn delete_movie(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        debug!(id, "deleted movie");
        Ok(())
    }

    pub async fn list_directors(&self) -> AppResult<Vec<director::Model>> {
        Ok(director::Entity::find().order_by_asc(director::Column::Id).all(&self.db).await?)
    }

    pub async fn get_director(&self, id: i32) -> AppResult<director::Model> {
        director::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound)
    }

    pub async fn create_director(&self, input: NameInput) -> AppResult<i32> {
        let model = director::ActiveModel { name: Set(input.name), ..Default::default() }
            .insert(&self.db)
            .await?;
        debug!(id = model.id, "created director");
        Ok(model.id)
    }

    pub async fn update_director(&self, id: i32, input: NameInput) -> AppResult<()> {
        let txn = self.db.begin().await?;
        let existing =
            director::Entity::find_by_id(id).one(&txn).await?.ok_or(AppError::NotFound)?;

        let mut model: director::ActiveModel = existing.into();
        model.name = Set(input.name);
        model.update(&txn).await?;

        txn.commit().await?;
        debug!(id, "updated director");
        Ok(())
    }

    /// Movies referencing the director keep their (now dangling) `director_id`.
    pub async fn delete_director(&self, id: i32) -> AppResult<()> {
        let res = director::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        debug!(id, "deleted director");
        Ok(())
    }

    pub async fn list_genres(&self) -> AppResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().order_by_asc(genre::Column::Id).all(&self.db).await?)
    }

    pub async fn get_genre(&self, id: i32) -> AppResult<genre::Model> {
        genre::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound)
    }

    pub async fn create_genre(&self, input: NameInput) -> AppResult<i32> {
        let model = genre::ActiveModel { name: Set(input.name), ..Default::default() }
            .insert(&self.db)
            .await?;
        debug!(id = model.id, "created genre");
        Ok(model.id)
    }

    pub async fn update_genre(&self, id: i32, input: NameInput) -> AppResult<()> {
        let txn = self.db.begin().await?;
        let existing = genre::Entity::find_by_id(id).one(&txn).await?.ok_or(AppError::NotFound)?;

        let mut model: genre::ActiveModel = existing.into();
        model.name = Set(input.name);
        model.update(&txn).await?;

        txn.commit().await?;
        debug!(id, "updated genre");
        Ok(())
    }

    pub async fn delete_genre(&self, id: i32) -> AppResult<()> {
        let res = genre::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        debug!(id, "deleted genre");
        Ok(())
    }
}
