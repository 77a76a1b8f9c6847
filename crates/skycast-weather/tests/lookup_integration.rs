//! End-to-end lookups against mocked Nominatim and Open-Meteo servers.

use std::sync::Arc;
use std::time::Duration;

use skycast_core::WeatherConfig;
use skycast_weather::{
    ApplyOutcome, LookupError, ParticleField, ParticleStyle, WeatherCategory, WeatherLookup,
    WeatherSession,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a Nominatim search result
fn place(lat: &str, lon: &str, name: &str) -> serde_json::Value {
    serde_json::json!({"lat": lat, "lon": lon, "display_name": name})
}

/// Helper to create a forecast body with a full day of hourly data
fn forecast(temperature: f64, code: i64) -> serde_json::Value {
    let temps: Vec<f64> = (0..24).map(|h| 10.0 + h as f64 * 0.5).collect();
    let precipitation: Vec<u32> = (0..24).map(|h| h * 2).collect();
    serde_json::json!({
        "current_weather": {"temperature": temperature, "weathercode": code, "windspeed": 10.0},
        "hourly": {
            "temperature_2m": temps,
            "weathercode": vec![code; 24],
            "windspeed_10m": vec![10.0; 24],
            "precipitation_probability": precipitation
        }
    })
}

async fn lookup_for(server: &MockServer) -> WeatherLookup {
    let config = WeatherConfig {
        geocode_url: server.uri(),
        forecast_url: server.uri(),
        ..WeatherConfig::default()
    };
    WeatherLookup::new(&config).unwrap()
}

#[tokio::test]
async fn test_london_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("city", "London"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([place("51.5", "-0.12", "London")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "51.5"))
        .and(query_param("longitude", "-0.12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast(15.0, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let lookup = lookup_for(&server).await;
    let snapshot = lookup.fetch_at_hour("London", 14).await.unwrap();

    assert_eq!(snapshot.location, "London");
    assert_eq!(snapshot.temperature, 15.0);
    assert_eq!(snapshot.wind_speed, 10.0);
    assert_eq!(snapshot.precipitation_probability, 28);
    assert_eq!(snapshot.hourly_temperatures, vec![17.0, 17.5, 18.0, 18.5, 19.0, 19.5]);
    assert_eq!(
        snapshot.hourly_labels(),
        vec!["14:00", "15:00", "16:00", "17:00", "18:00", "19:00"]
    );
    assert_eq!(snapshot.category(), WeatherCategory::ClearSkies);
    assert_eq!(snapshot.category().icon_name(), "sun");

    let mut rng = rand::rng();
    let field = ParticleField::generate(snapshot.category(), &mut rng);
    assert_eq!(field.len(), 20);
    assert_eq!(field.style(), Some(ParticleStyle::Ray));
}

#[tokio::test]
async fn test_query_is_trimmed_before_geocoding() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("city", "Oslo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([place("59.91", "10.75", "Oslo, Norway")])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast(-2.0, 25)))
        .mount(&server)
        .await;

    let snapshot = lookup_for(&server).await.fetch_at_hour("  Oslo \n", 3).await.unwrap();
    assert_eq!(snapshot.category(), WeatherCategory::Snowy);
}

#[tokio::test]
async fn test_empty_query_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = lookup_for(&server).await.fetch_at_hour("   ", 12).await;
    assert!(matches!(result, Err(LookupError::EmptyQuery)));
}

#[tokio::test]
async fn test_unknown_city_skips_forecast() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast(15.0, 1)))
        .expect(0)
        .mount(&server)
        .await;

    let lookup = lookup_for(&server).await;
    let mut session = WeatherSession::new();
    let ticket = session.begin("Xyzzyville");
    let result = lookup.fetch_at_hour(ticket.query(), 12).await;
    assert!(matches!(result, Err(LookupError::NotFound(_))));

    session.apply(&ticket, result);
    assert!(session.snapshot().is_none());
    assert_eq!(session.error(), Some("City not found"));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_forecast_failure_clears_previous_snapshot() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([place("48.85", "2.35", "Paris, France")])),
        )
        .mount(&server)
        .await;

    // First forecast succeeds, every later one fails.
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast(18.0, 3)))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let lookup = lookup_for(&server).await;
    let mut session = WeatherSession::new();

    let first = session.begin("Paris");
    let result = lookup.fetch_at_hour("Paris", 8).await;
    session.apply(&first, result);
    assert_eq!(
        session.snapshot().map(|s| s.category()),
        Some(WeatherCategory::PartlyCloudy)
    );

    let second = session.begin("Paris");
    let result = lookup.fetch_at_hour("Paris", 8).await;
    assert!(matches!(result, Err(LookupError::Transport(_))));
    session.apply(&second, result);

    assert!(session.snapshot().is_none());
    assert!(session.error().is_some());
}

#[tokio::test]
async fn test_short_series_is_incomplete_not_a_crash() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([place("35.68", "139.69", "Tokyo, Japan")])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current_weather": {"temperature": 22.0, "weathercode": 61, "windspeed": 4.0},
            "hourly": {
                "temperature_2m": [20.0, 21.0, 22.0],
                "precipitation_probability": [10, 20, 30]
            }
        })))
        .mount(&server)
        .await;

    let result = lookup_for(&server).await.fetch_at_hour("Tokyo", 22).await;
    assert!(matches!(
        result,
        Err(LookupError::ForecastIncomplete { hour: 22, available: 3 })
    ));
}

#[tokio::test]
async fn test_latest_submission_wins() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("city", "Paris"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(400))
                .set_body_json(serde_json::json!([place("48.85", "2.35", "Paris, France")])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("city", "Rome"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([place("41.89", "12.48", "Rome, Italy")])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "48.85"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast(12.0, 10)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "41.89"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast(24.0, 0)))
        .mount(&server)
        .await;

    let lookup = Arc::new(lookup_for(&server).await);
    let mut session = WeatherSession::new();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    for city in ["Paris", "Rome"] {
        let ticket = session.begin(city);
        let lookup = Arc::clone(&lookup);
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = lookup.fetch_at_hour(ticket.query(), 12).await;
            let _ = tx.send((ticket, result));
        });
    }
    drop(tx);

    let mut outcomes = Vec::new();
    while let Some((ticket, result)) = rx.recv().await {
        outcomes.push((ticket.query().to_string(), session.apply(&ticket, result)));
    }

    assert_eq!(
        outcomes,
        vec![
            ("Rome".to_string(), ApplyOutcome::Applied),
            ("Paris".to_string(), ApplyOutcome::Stale),
        ]
    );
    let snapshot = session.snapshot().unwrap();
    assert_eq!(snapshot.location, "Rome, Italy");
    assert_eq!(snapshot.category(), WeatherCategory::ClearSkies);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_null_hourly_temperature_shortens_strip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([place("52.52", "13.40", "Berlin, Germany")])),
        )
        .mount(&server)
        .await;

    let mut body = forecast(9.0, 2);
    body["hourly"]["temperature_2m"][8] = serde_json::Value::Null;
    body["hourly"]["temperature_2m"][20] = serde_json::Value::Null;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let lookup = lookup_for(&server).await;

    let snapshot = lookup.fetch_at_hour("Berlin", 6).await.unwrap();
    assert_eq!(snapshot.hourly_temperatures, vec![13.0, 13.5]);

    let snapshot = lookup.fetch_at_hour("Berlin", 12).await.unwrap();
    assert_eq!(snapshot.hourly_temperatures.len(), 6);
}
