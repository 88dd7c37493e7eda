//! Person entity and role aggregation types

use serde::{Deserialize, Serialize};

use crate::domain::film::Film;

/// A person document as stored in the search index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub full_name: String,
}

/// Closed set of roles a person can hold in a film
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Actor,
    Writer,
    Director,
}

impl Role {
    /// All roles, in the order role groups are emitted
    pub const ALL: [Role; 3] = [Role::Actor, Role::Writer, Role::Director];

    /// Name of the film document array holding this role
    pub fn film_field(&self) -> &'static str {
        match self {
            Role::Actor => "actors",
            Role::Writer => "writers",
            Role::Director => "directors",
        }
    }

    /// Ids listed under this role on a film
    pub fn member_ids<'a>(&self, film: &'a Film) -> impl Iterator<Item = &'a str> {
        let refs = match self {
            Role::Actor => &film.actors,
            Role::Writer => &film.writers,
            Role::Director => &film.directors,
        };
        refs.iter().map(|r| r.id.as_str())
    }
}

/// Films a person appears in under one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFilms {
    pub role: Role,
    pub film_ids: Vec<String>,
}

/// A person with their role aggregation across films
///
/// Derived by querying films for membership, never stored on the person
/// record. A role entry is present only when at least one film matched;
/// the same film may appear under more than one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonWithFilms {
    pub id: String,
    pub full_name: String,
    pub roles: Vec<RoleFilms>,
}

impl PersonWithFilms {
    /// Groups the given films by the person's role in each
    ///
    /// Roles with no matching film are omitted entirely.
    pub fn aggregate(person: Person, films: &[Film]) -> Self {
        let mut roles = Vec::new();

        for role in Role::ALL {
            let film_ids: Vec<String> = films
                .iter()
                .filter(|film| role.member_ids(film).any(|id| id == person.id))
                .map(|film| film.id.clone())
                .collect();

            if !film_ids.is_empty() {
                roles.push(RoleFilms {
                    role,
                    film_ids,
                });
            }
        }

        Self {
            id: person.id,
            full_name: person.full_name,
            roles,
        }
    }
}

/// Hydrated work summary for the person film-detail variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmSummary {
    pub id: String,
    pub title: String,
    pub rating: f64,
}

impl From<&Film> for FilmSummary {
    fn from(film: &Film) -> Self {
        Self {
            id: film.id.clone(),
            title: film.title.clone(),
            rating: film.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn film(id: &str, actors: &[&str], writers: &[&str], directors: &[&str]) -> Film {
        let refs = |ids: &[&str]| {
            ids.iter()
                .map(|id| json!({"id": id, "name": format!("name-{}", id)}))
                .collect::<Vec<_>>()
        };

        serde_json::from_value(json!({
            "id": id,
            "title": format!("title-{}", id),
            "actors": refs(actors),
            "writers": refs(writers),
            "directors": refs(directors)
        }))
        .unwrap()
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Actor).unwrap(), "\"actor\"");
        assert_eq!(
            serde_json::to_string(&Role::Director).unwrap(),
            "\"director\""
        );
    }

    #[test]
    fn test_aggregate_groups_by_role() {
        let person = Person {
            id: "p1".to_string(),
            full_name: "A".to_string(),
        };
        // Actor and director of W, writer of X
        let films = vec![
            film("w", &["p1"], &[], &["p1"]),
            film("x", &[], &["p1"], &[]),
        ];

        let aggregated = PersonWithFilms::aggregate(person, &films);

        assert_eq!(aggregated.roles.len(), 3);
        assert_eq!(
            aggregated.roles[0],
            RoleFilms {
                role: Role::Actor,
                film_ids: vec!["w".to_string()]
            }
        );
        assert_eq!(
            aggregated.roles[1],
            RoleFilms {
                role: Role::Writer,
                film_ids: vec!["x".to_string()]
            }
        );
        assert_eq!(
            aggregated.roles[2],
            RoleFilms {
                role: Role::Director,
                film_ids: vec!["w".to_string()]
            }
        );
    }

    #[test]
    fn test_aggregate_omits_empty_roles() {
        let person = Person {
            id: "p1".to_string(),
            full_name: "A".to_string(),
        };
        let films = vec![film("w", &["p1", "p2"], &[], &[])];

        let aggregated = PersonWithFilms::aggregate(person, &films);

        assert_eq!(aggregated.roles.len(), 1);
        assert_eq!(aggregated.roles[0].role, Role::Actor);
    }

    #[test]
    fn test_aggregate_with_no_films() {
        let person = Person {
            id: "p1".to_string(),
            full_name: "A".to_string(),
        };

        let aggregated = PersonWithFilms::aggregate(person, &[]);
        assert!(aggregated.roles.is_empty());
    }

    #[test]
    fn test_film_summary_from_film() {
        let film = film("w", &["p1"], &[], &[]);
        let summary = FilmSummary::from(&film);

        assert_eq!(summary.id, "w");
        assert_eq!(summary.title, "title-w");
        assert_eq!(summary.rating, 0.0);
    }
}
