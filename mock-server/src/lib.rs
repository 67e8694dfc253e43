use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: Name,
    pub flags: Flags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continents: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub common: String,
    pub official: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    pub png: String,
    pub svg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// How `/v3.1/all` answers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "status", rename_all = "snake_case")]
pub enum MockMode {
    #[default]
    Healthy,
    /// Respond with this status and a plain-text body.
    Status(u16),
    /// 200 with a body that is not JSON.
    Malformed,
    /// 200 with an empty body.
    Empty,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub countries: Vec<Country>,
    pub mode: MockMode,
}

pub type Db = Arc<RwLock<MockState>>;

#[derive(Deserialize)]
pub struct AllQuery {
    pub fields: Option<String>,
}

/// A healthy server seeded with `seed_countries`.
pub fn seeded_db() -> Db {
    Arc::new(RwLock::new(MockState {
        countries: seed_countries(),
        mode: MockMode::Healthy,
    }))
}

pub fn app() -> Router {
    app_with(seeded_db())
}

pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/v3.1/all", get(list_all))
        .route("/_mock/mode", put(set_mode))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(db)).await
}

async fn list_all(State(db): State<Db>, Query(query): Query<AllQuery>) -> Response {
    let state = db.read().await;
    info!(mode = ?state.mode, fields = ?query.fields, "GET /v3.1/all");
    match state.mode {
        MockMode::Healthy => {
            let fields = query.fields.as_deref().map(parse_fields);
            let body: Vec<Value> = state
                .countries
                .iter()
                .map(|c| select_fields(c, fields.as_deref()))
                .collect();
            Json(body).into_response()
        }
        MockMode::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, format!("mock status {code}")).into_response()
        }
        MockMode::Malformed => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            "{\"name\": [not json",
        )
            .into_response(),
        MockMode::Empty => StatusCode::OK.into_response(),
    }
}

async fn set_mode(State(db): State<Db>, Json(mode): Json<MockMode>) -> StatusCode {
    info!(?mode, "switching mock mode");
    db.write().await.mode = mode;
    StatusCode::NO_CONTENT
}

fn parse_fields(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep only the requested top-level keys, the way the real API's
/// `fields` filter does.
fn select_fields(country: &Country, fields: Option<&[String]>) -> Value {
    let mut value = serde_json::to_value(country).unwrap_or(Value::Null);
    if let (Some(fields), Value::Object(map)) = (fields, &mut value) {
        map.retain(|key, _| fields.iter().any(|f| f == key));
    }
    value
}

fn country(
    common: &str,
    official: &str,
    code: &str,
    capital: Option<&str>,
    continent: Option<&str>,
    population: Option<u64>,
) -> Country {
    Country {
        name: Name {
            common: common.to_string(),
            official: official.to_string(),
        },
        flags: Flags {
            png: format!("https://flagcdn.com/w320/{code}.png"),
            svg: format!("https://flagcdn.com/{code}.svg"),
            alt: None,
        },
        capital: capital.map(|c| vec![c.to_string()]),
        continents: continent.map(|c| vec![c.to_string()]),
        population,
    }
}

/// Fixture data, deliberately not in name order.
pub fn seed_countries() -> Vec<Country> {
    vec![
        country("France", "French Republic", "fr", Some("Paris"), Some("Europe"), Some(67_391_582)),
        country("Canada", "Canada", "ca", Some("Ottawa"), Some("North America"), Some(38_005_238)),
        country("Japan", "Japan", "jp", Some("Tokyo"), Some("Asia"), Some(125_836_021)),
        country("Antarctica", "Antarctica", "aq", None, None, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_serializes_wire_shape() {
        let json = serde_json::to_value(&seed_countries()[0]).unwrap();
        assert_eq!(json["name"]["common"], "France");
        assert_eq!(json["flags"]["png"], "https://flagcdn.com/w320/fr.png");
        assert_eq!(json["capital"][0], "Paris");
        assert_eq!(json["continents"][0], "Europe");
        assert_eq!(json["population"], 67_391_582);
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let antarctica = seed_countries().pop().unwrap();
        let json = serde_json::to_value(&antarctica).unwrap();
        assert!(json.get("capital").is_none());
        assert!(json.get("continents").is_none());
        assert!(json.get("population").is_none());
    }

    #[test]
    fn select_fields_keeps_only_requested_keys() {
        let fields = parse_fields("name, population");
        let json = select_fields(&seed_countries()[1], Some(&fields));
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(json["name"]["common"], "Canada");
        assert_eq!(json["population"], 38_005_238);
    }

    #[test]
    fn select_fields_without_filter_keeps_everything() {
        let json = select_fields(&seed_countries()[1], None);
        assert!(json.get("flags").is_some());
        assert!(json.get("capital").is_some());
    }

    #[test]
    fn parse_fields_skips_blanks() {
        assert_eq!(parse_fields("name,,flags,"), vec!["name", "flags"]);
    }

    #[test]
    fn mock_mode_json_shape() {
        let mode: MockMode = serde_json::from_str(r#"{"mode":"status","status":404}"#).unwrap();
        assert_eq!(mode, MockMode::Status(404));
        let mode: MockMode = serde_json::from_str(r#"{"mode":"malformed"}"#).unwrap();
        assert_eq!(mode, MockMode::Malformed);
        assert_eq!(
            serde_json::to_value(MockMode::Healthy).unwrap(),
            serde_json::json!({"mode": "healthy"})
        );
    }
}
