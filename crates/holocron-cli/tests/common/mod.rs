//! Shared fixture: a small SWAPI served by wiremock
//!
//! Every collection is served from a single path and paged through the
//! `page` query parameter, ten records per page.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, Respond, ResponseTemplate,
};

pub const PAGE_SIZE: usize = 10;
pub const PEOPLE: usize = 15;

/// Serves one collection page by page
pub struct PagedCollection {
    base: String,
    name: String,
    records: Vec<Value>,
}

impl Respond for PagedCollection {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let page = request
            .url
            .query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);

        let start = (page - 1) * PAGE_SIZE;
        if page > 1 && start >= self.records.len() {
            return ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found"}));
        }

        let end = (start + PAGE_SIZE).min(self.records.len());
        let next = if end < self.records.len() {
            json!(format!("{}{}/?page={}", self.base, self.name, page + 1))
        } else {
            Value::Null
        };

        ResponseTemplate::new(200).set_body_json(json!({
            "count": self.records.len(),
            "next": next,
            "previous": null,
            "results": &self.records[start..end],
        }))
    }
}

/// A running mock API
pub struct Swapi {
    pub server: MockServer,
}

impl Swapi {
    /// Start a server with every collection healthy
    pub async fn start() -> Self {
        Self::start_with_failures(&[]).await
    }

    /// Start a server where the collections in `failing` answer HTTP 500
    pub async fn start_with_failures(failing: &[&str]) -> Self {
        let server = MockServer::start().await;
        let base = format!("{}/api/", server.uri());

        for (name, records) in collections(&base) {
            let mock = Mock::given(method("GET")).and(path(format!("/api/{}/", name)));
            if failing.contains(&name) {
                mock.respond_with(ResponseTemplate::new(500)).mount(&server).await;
            } else {
                mock.respond_with(PagedCollection {
                    base: base.clone(),
                    name: name.to_string(),
                    records,
                })
                .mount(&server)
                .await;
            }
        }

        Self { server }
    }

    /// Base URL with trailing slash
    pub fn base_url(&self) -> String {
        format!("{}/api/", self.server.uri())
    }
}

fn named(base: &str, collection: &str, id: usize, label_field: &str, label: &str) -> Value {
    json!({
        label_field: label,
        "created": "2014-12-10T16:36:50.509000Z",
        "edited": "2014-12-20T21:30:21.661000Z",
        "url": format!("{}{}/{}/", base, collection, id),
    })
}

/// Person `i` (1-based):
/// - `i % 3 == 1` is Human, `i % 3 == 0` a Droid, the rest have no species
/// - only person 1 owns a vehicle and a starship
pub fn person(base: &str, i: usize) -> Value {
    let species = match i % 3 {
        1 => vec![format!("{}species/1/", base)],
        0 => vec![format!("{}species/2/", base)],
        _ => Vec::new(),
    };
    let owned = |collection: &str, id: usize| {
        if i == 1 {
            vec![format!("{}{}/{}/", base, collection, id)]
        } else {
            Vec::new()
        }
    };

    json!({
        "name": person_name(i),
        "height": format!("{}", 150 + i),
        "mass": "77",
        "hair_color": "brown",
        "gender": "n/a",
        "birth_year": "19BBY",
        "homeworld": format!("{}planets/{}/", base, 1 + i % 2),
        "films": [format!("{}films/1/", base)],
        "species": species,
        "vehicles": owned("vehicles", 14),
        "starships": owned("starships", 12),
        "created": "2014-12-09T13:50:51.644000Z",
        "edited": "2014-12-20T21:17:56.891000Z",
        "url": format!("{}people/{}/", base, i),
    })
}

pub fn person_name(i: usize) -> String {
    match i {
        1 => "Luke Skywalker".to_string(),
        2 => "C-3PO".to_string(),
        _ => format!("Person {}", i),
    }
}

fn collections(base: &str) -> Vec<(&'static str, Vec<Value>)> {
    vec![
        ("people", (1..=PEOPLE).map(|i| person(base, i)).collect()),
        (
            "species",
            vec![
                named(base, "species", 1, "name", "Human"),
                named(base, "species", 2, "name", "Droid"),
            ],
        ),
        (
            "planets",
            vec![
                named(base, "planets", 1, "name", "Tatooine"),
                named(base, "planets", 2, "name", "Alderaan"),
            ],
        ),
        ("vehicles", vec![named(base, "vehicles", 14, "name", "Snowspeeder")]),
        (
            "films",
            vec![
                named(base, "films", 1, "title", "A New Hope"),
                named(base, "films", 2, "title", "The Empire Strikes Back"),
            ],
        ),
        ("starships", vec![named(base, "starships", 12, "name", "X-wing")]),
    ]
}
