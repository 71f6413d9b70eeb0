//! End-to-end tests for the search-then-fetch lookup chain against a local
//! stub HTTP server.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use skycast_core::{Error, MetaWeatherClient};

struct Route {
    path: &'static str,
    status: &'static str,
    body: &'static str,
}

/// Serve canned responses on an ephemeral port. Routes are matched by path
/// prefix, in order. The task runs until aborted.
async fn spawn_stub(routes: Vec<Route>) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };

            let mut buf = vec![0u8; 4096];
            let n = stream.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]).into_owned();
            let path = request.split_whitespace().nth(1).unwrap_or("");

            let (status, body) = routes
                .iter()
                .find(|route| path.starts_with(route.path))
                .map(|route| (route.status, route.body))
                .unwrap_or(("404 Not Found", "{}"));

            let response = format!(
                "HTTP/1.1 {status}\r\n\
                 content-type: application/json\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\r\n{body}",
                body.len(),
            );
            let _ = stream.write_all(response.as_bytes()).await;
        }
    });

    (format!("http://{addr}"), handle)
}

const SEARCH_RESULTS: &str = r#"[
    {"title": "London", "location_type": "City", "woeid": 44418, "latt_long": "51.506321,-0.12714"},
    {"title": "Londonderry", "location_type": "City", "woeid": 21125, "latt_long": "55.0,-7.3"}
]"#;

const LONDON_DOC: &str = r#"{
    "consolidated_weather": [
        {
            "weather_state_name": "Light Rain",
            "weather_state_abbr": "lr",
            "wind_direction_compass": "WSW",
            "applicable_date": "2021/04/07",
            "min_temp": 6.48,
            "max_temp": 11.45,
            "the_temp": 10.8,
            "wind_speed": 5.95,
            "air_pressure": 1014.0,
            "humidity": 73,
            "visibility": 12.35
        }
    ],
    "time": "2021-04-07T20:57:37.637069+01:00",
    "title": "London",
    "location_type": "City",
    "woeid": 44418,
    "latt_long": "51.506321,-0.12714",
    "timezone": "Europe/London"
}"#;

const EMPTY_DOC: &str = r#"{
    "consolidated_weather": [],
    "time": "2021-04-07T20:57:37.637069+01:00",
    "title": "London",
    "woeid": 44418
}"#;

#[tokio::test]
async fn resolves_the_first_candidate() {
    let (base_url, server) = spawn_stub(vec![
        Route {
            path: "/api/location/search/",
            status: "200 OK",
            body: SEARCH_RESULTS,
        },
        Route {
            path: "/api/location/44418/",
            status: "200 OK",
            body: LONDON_DOC,
        },
    ])
    .await;

    let client = MetaWeatherClient::with_base_url(&base_url);
    let weather = client.location_by_query("london").await.unwrap();

    assert_eq!(weather.title, "London");
    let current = weather.current().unwrap();
    assert_eq!(current.weather_state_name, "Light Rain");
    assert!((current.the_temp - 10.8).abs() < f64::EPSILON);

    server.abort();
}

#[tokio::test]
async fn unknown_locations_are_reported_by_name() {
    let (base_url, server) = spawn_stub(vec![Route {
        path: "/api/location/search/",
        status: "200 OK",
        body: "[]",
    }])
    .await;

    let client = MetaWeatherClient::with_base_url(&base_url);
    let err = client.location_by_query("atlantis").await.unwrap_err();

    assert!(matches!(err, Error::LocationNotFound { ref query } if query == "atlantis"));
    assert!(err.to_string().contains("atlantis"));

    server.abort();
}

#[tokio::test]
async fn locations_without_observations_are_an_error() {
    let (base_url, server) = spawn_stub(vec![
        Route {
            path: "/api/location/search/",
            status: "200 OK",
            body: SEARCH_RESULTS,
        },
        Route {
            path: "/api/location/44418/",
            status: "200 OK",
            body: EMPTY_DOC,
        },
    ])
    .await;

    let client = MetaWeatherClient::with_base_url(&base_url);
    let err = client.location_by_query("london").await.unwrap_err();

    assert!(matches!(err, Error::MissingWeatherData { ref title } if title == "London"));

    server.abort();
}

#[tokio::test]
async fn server_errors_surface_the_status() {
    let (base_url, server) = spawn_stub(vec![Route {
        path: "/api/location/search/",
        status: "500 Internal Server Error",
        body: r#"{"detail": "upstream exploded"}"#,
    }])
    .await;

    let client = MetaWeatherClient::with_base_url(&base_url);
    let err = client.location_by_query("london").await.unwrap_err();

    assert!(matches!(err, Error::Status { .. }));
    let msg = err.to_string();
    assert!(msg.contains("500"));
    assert!(msg.contains("upstream exploded"));

    server.abort();
}

#[tokio::test]
async fn malformed_payloads_are_a_decode_error() {
    let (base_url, server) = spawn_stub(vec![Route {
        path: "/api/location/search/",
        status: "200 OK",
        body: r#"{"not": "a list"}"#,
    }])
    .await;

    let client = MetaWeatherClient::with_base_url(&base_url);
    let err = client.location_by_query("london").await.unwrap_err();

    assert!(matches!(
        err,
        Error::Decode {
            endpoint: "location search",
            ..
        }
    ));

    server.abort();
}

#[tokio::test]
async fn search_is_usable_on_its_own() {
    let (base_url, server) = spawn_stub(vec![Route {
        path: "/api/location/search/",
        status: "200 OK",
        body: SEARCH_RESULTS,
    }])
    .await;

    let client = MetaWeatherClient::with_base_url(&base_url);
    let candidates = client.search_location("london").await.unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].woeid, 44418);
    assert_eq!(candidates[1].title, "Londonderry");

    server.abort();
}
