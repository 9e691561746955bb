use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set, Unchanged};

use crate::{entities::director, error::AppResult, models::DirectorPayload};

#[derive(Clone)]
pub struct DirectorRepo {
    db: DatabaseConnection,
}

impl DirectorRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<director::Model>> {
        Ok(director::Entity::find().all(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<director::Model>> {
        Ok(director::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create(&self, payload: &DirectorPayload) -> AppResult<i32> {
        let model = director::ActiveModel { id: NotSet, name: Set(payload.name.clone()) };
        let res = director::Entity::insert(model).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    pub async fn update(
        &self,
        id: i32,
        payload: &DirectorPayload,
    ) -> AppResult<Option<director::Model>> {
        if director::Entity::find_by_id(id).one(&self.db).await?.is_none() {
            return Ok(None);
        }
        let model = director::ActiveModel { id: Unchanged(id), name: Set(payload.name.clone()) };
        Ok(Some(model.update(&self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let res = director::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
