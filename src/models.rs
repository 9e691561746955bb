use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

// Wire shape for every movie read: the movie row plus the names of the
// referenced director and genre, pulled in by the repository's left joins.
#[derive(Debug, Serialize, FromQueryResult)]
pub struct MovieRecord {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre: Option<String>,
    pub genre_id: Option<i32>,
    pub director: Option<String>,
    pub director_id: Option<i32>,
}

// `id`, `director` and `genre` are read-only on the wire: they are accepted
// here so a client can PUT back exactly what it GETs, but never written.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoviePayload {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre: Option<String>,
    pub genre_id: Option<i32>,
    pub director: Option<String>,
    pub director_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorPayload {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenrePayload {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MovieFilter {
    pub director_id: Option<i32>,
    pub genre_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_payload_rejects_unknown_fields() {
        let res = serde_json::from_str::<MoviePayload>(r#"{"title":"Heat","poster":"heat.png"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn movie_payload_absent_fields_deserialize_to_none() {
        let payload: MoviePayload = serde_json::from_str(r#"{"title":"Heat"}"#).unwrap();
        assert_eq!(payload.title.as_deref(), Some("Heat"));
        assert_eq!(payload.description, None);
        assert_eq!(payload.year, None);
        assert_eq!(payload.rating, None);
        assert_eq!(payload.director_id, None);
        assert_eq!(payload.genre_id, None);
    }

    #[test]
    fn movie_payload_accepts_the_full_read_shape() {
        // a GET body fed straight back into PUT must parse
        let body = r#"{
            "id": 3,
            "title": "Heat",
            "description": "A heist crew and a detective.",
            "trailer": "https://example.com/heat",
            "year": 1995,
            "rating": 8.3,
            "genre": "Crime",
            "genre_id": 2,
            "director": "Michael Mann",
            "director_id": 1
        }"#;
        let payload: MoviePayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.id, Some(3));
        assert_eq!(payload.director.as_deref(), Some("Michael Mann"));
        assert_eq!(payload.director_id, Some(1));
    }

    #[test]
    fn director_payload_rejects_unknown_fields() {
        let res = serde_json::from_str::<DirectorPayload>(r#"{"name":"Mann","born":1943}"#);
        assert!(res.is_err());
    }
}
