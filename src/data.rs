use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::debug;

use crate::{
    entities::{movie, user},
    error::AppResult,
    omdb::OmdbClient,
};

/// Owns every read and write against storage plus the one outbound
/// enrichment call. Stateless across requests.
#[derive(Clone)]
pub struct DataManager {
    db: DatabaseConnection,
    omdb: Arc<OmdbClient>,
}

impl DataManager {
    pub fn new(db: DatabaseConnection, omdb: Arc<OmdbClient>) -> Self {
        Self { db, omdb }
    }

    pub async fn create_user(&self, name: &str) -> AppResult<()> {
        let model = user::ActiveModel { id: Default::default(), name: Set(name.to_string()) };
        user::Entity::insert(model).exec(&self.db).await?;
        Ok(())
    }

    pub async fn list_users(&self) -> AppResult<Vec<user::Model>> {
        Ok(user::Entity::find().all(&self.db).await?)
    }

    /// A missing id is a normal outcome, not an error.
    pub async fn get_user(&self, user_id: i32) -> AppResult<Option<user::Model>> {
        Ok(user::Entity::find_by_id(user_id).one(&self.db).await?)
    }

    pub async fn list_movies(&self, user_id: i32) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find()
            .filter(movie::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?)
    }

    /// Creates a movie for `user_id`. When the enrichment lookup matches,
    /// the stored record takes the service's name, director, year, and
    /// poster (the corrected name deliberately wins over the typed title).
    /// When it does not, a title-only fallback record is stored instead;
    /// enrichment failure never aborts creation.
    pub async fn add_movie(&self, user_id: i32, title: &str) -> AppResult<movie::Model> {
        let model = match self.omdb.lookup(title).await {
            Some(info) => movie::ActiveModel {
                id: Default::default(),
                name: Set(info.name),
                director: Set(info.director),
                year: Set(info.year),
                poster_url: Set(info.poster_url),
                user_id: Set(user_id),
            },
            None => {
                debug!(title = %title, "no enrichment data, storing fallback record");
                movie::ActiveModel {
                    id: Default::default(),
                    name: Set(title.to_string()),
                    director: Set(None),
                    year: Set(None),
                    poster_url: Set(None),
                    user_id: Set(user_id),
                }
            }
        };

        Ok(model.insert(&self.db).await?)
    }

    /// Overwrites only the name of an existing movie. Returns `false` with
    /// no mutation when the id does not exist.
    pub async fn update_movie(&self, movie_id: i32, new_title: &str) -> AppResult<bool> {
        let Some(found) = movie::Entity::find_by_id(movie_id).one(&self.db).await? else {
            return Ok(false);
        };

        let mut model: movie::ActiveModel = found.into();
        model.name = Set(new_title.to_string());
        model.update(&self.db).await?;
        Ok(true)
    }

    pub async fn delete_movie(&self, movie_id: i32) -> AppResult<bool> {
        let result = movie::Entity::delete_by_id(movie_id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
