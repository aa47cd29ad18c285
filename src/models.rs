use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::entities::{director, genre, movie};

/// Flat external representation of a movie row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieView {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl From<movie::Model> for MovieView {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            trailer: m.trailer,
            year: m.year,
            rating: m.rating,
            genre_id: m.genre_id,
            director_id: m.director_id,
        }
    }
}

/// Director and genre share the same `{id, name}` shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamedView {
    pub id: i32,
    pub name: String,
}

impl From<director::Model> for NamedView {
    fn from(m: director::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

impl From<genre::Model> for NamedView {
    fn from(m: genre::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

/// Body accepted by movie create and update. Every field is optional; update ignores `title`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trailer: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub genre_id: Option<i32>,
    #[serde(default)]
    pub director_id: Option<i32>,
}

/// Body accepted by director and genre create/update.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameInput {
    pub name: String,
}

/// Query string of `GET /movies/`. Empty values (`?director_id=`) count as absent.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct MovieFilter {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub director_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub genre_id: Option<i32>,
}

fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}
