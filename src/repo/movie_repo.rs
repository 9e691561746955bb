use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, NotSet, QueryFilter,
    QuerySelect, RelationTrait, Select, Set, Unchanged,
};

use crate::{
    entities::{director, genre, movie},
    error::AppResult,
    models::{MovieFilter, MoviePayload, MovieRecord},
};

#[derive(Clone)]
pub struct MovieRepo {
    db: DatabaseConnection,
}

impl MovieRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, filter: &MovieFilter) -> AppResult<Vec<MovieRecord>> {
        let mut query = select_with_names();
        if let Some(director_id) = filter.director_id {
            query = query.filter(movie::Column::DirectorId.eq(director_id));
        }
        if let Some(genre_id) = filter.genre_id {
            query = query.filter(movie::Column::GenreId.eq(genre_id));
        }
        Ok(query.into_model::<MovieRecord>().all(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<MovieRecord>> {
        Ok(select_with_names()
            .filter(movie::Column::Id.eq(id))
            .into_model::<MovieRecord>()
            .one(&self.db)
            .await?)
    }

    pub async fn create(&self, payload: &MoviePayload) -> AppResult<i32> {
        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(payload.title.clone()),
            description: Set(payload.description.clone()),
            trailer: Set(payload.trailer.clone()),
            year: Set(payload.year),
            rating: Set(payload.rating),
            genre_id: Set(payload.genre_id),
            director_id: Set(payload.director_id),
        };
        let res = movie::Entity::insert(model).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    pub async fn update(&self, id: i32, payload: &MoviePayload) -> AppResult<Option<movie::Model>> {
        if movie::Entity::find_by_id(id).one(&self.db).await?.is_none() {
            return Ok(None);
        }

        // full overwrite: absent payload fields null their column, the id stays
        let model = movie::ActiveModel {
            id: Unchanged(id),
            title: Set(payload.title.clone()),
            description: Set(payload.description.clone()),
            trailer: Set(payload.trailer.clone()),
            year: Set(payload.year),
            rating: Set(payload.rating),
            genre_id: Set(payload.genre_id),
            director_id: Set(payload.director_id),
        };
        Ok(Some(model.update(&self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}

fn select_with_names() -> Select<movie::Entity> {
    movie::Entity::find()
        .column_as(genre::Column::Name, "genre")
        .column_as(director::Column::Name, "director")
        .join(JoinType::LeftJoin, movie::Relation::Genre.def())
        .join(JoinType::LeftJoin, movie::Relation::Director.def())
}
