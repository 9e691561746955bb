use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set, Unchanged};

use crate::{entities::genre, error::AppResult, models::GenrePayload};

#[derive(Clone)]
pub struct GenreRepo {
    db: DatabaseConnection,
}

impl GenreRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().all(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<genre::Model>> {
        Ok(genre::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create(&self, payload: &GenrePayload) -> AppResult<i32> {
        let model = genre::ActiveModel { id: NotSet, name: Set(payload.name.clone()) };
        let res = genre::Entity::insert(model).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    pub async fn update(&self, id: i32, payload: &GenrePayload) -> AppResult<Option<genre::Model>> {
        if genre::Entity::find_by_id(id).one(&self.db).await?.is_none() {
            return Ok(None);
        }
        let model = genre::ActiveModel { id: Unchanged(id), name: Set(payload.name.clone()) };
        Ok(Some(model.update(&self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let res = genre::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
