//! Integration tests for the provider adapters using wiremock HTTP mocks.

use permitdb_geocode::{
    GeoProvider, GeocodeError, GoogleGeocoder, LocationIqClient, ProviderOutcome,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ADDRESS: &str = "301 College Ave, Athens, GA";

fn locationiq(base_url: &str) -> LocationIqClient {
    LocationIqClient::with_base_url(Some("pk.test"), 5, base_url)
        .expect("client construction should not fail")
}

fn google(base_url: &str) -> GoogleGeocoder {
    GoogleGeocoder::with_base_url(Some("g-test"), 5, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn locationiq_returns_first_place() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "place_id": "1",
            "lat": "33.9577",
            "lon": "-83.3747",
            "display_name": "301 College Ave, Athens, Clarke County, GA, 30601, USA"
        },
        {
            "place_id": "2",
            "lat": "0",
            "lon": "0",
            "display_name": "ignored"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/v1/search.php"))
        .and(query_param("key", "pk.test"))
        .and(query_param("q", ADDRESS))
        .and(query_param("format", "json"))
        .and(query_param("limit", "1"))
        .and(query_param("countrycodes", "us"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = locationiq(&server.uri()).attempt_geocode(ADDRESS).await;
    let ProviderOutcome::Found(location) = outcome else {
        panic!("should find a place, got {outcome:?}");
    };

    assert!((location.latitude - 33.9577).abs() < 1e-9);
    assert!((location.longitude + 83.3747).abs() < 1e-9);
    assert_eq!(location.city, "Athens");
    assert_eq!(location.county, "Clarke");
    assert_eq!(location.state, "GA");
    assert_eq!(
        location.formatted_address,
        "301 College Ave, Athens, Clarke County, GA, 30601, USA"
    );
}

#[tokio::test]
async fn locationiq_not_found_is_no_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"error": "Unable to geocode"})),
        )
        .mount(&server)
        .await;

    let outcome = locationiq(&server.uri()).attempt_geocode(ADDRESS).await;
    assert!(matches!(outcome, ProviderOutcome::NoMatch), "got {outcome:?}");
}

#[tokio::test]
async fn locationiq_empty_array_is_no_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let outcome = locationiq(&server.uri()).attempt_geocode(ADDRESS).await;
    assert!(matches!(outcome, ProviderOutcome::NoMatch), "got {outcome:?}");
}

#[tokio::test]
async fn locationiq_server_error_is_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let outcome = locationiq(&server.uri()).attempt_geocode(ADDRESS).await;
    assert!(
        matches!(
            outcome,
            ProviderOutcome::Failed(GeocodeError::UnexpectedStatus { status: 429, .. })
        ),
        "got {outcome:?}"
    );
}

#[tokio::test]
async fn locationiq_malformed_body_is_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let outcome = locationiq(&server.uri()).attempt_geocode(ADDRESS).await;
    assert!(
        matches!(outcome, ProviderOutcome::Failed(GeocodeError::Deserialize { .. })),
        "got {outcome:?}"
    );
}

#[tokio::test]
async fn locationiq_without_token_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = LocationIqClient::with_base_url(None, 5, &server.uri())
        .expect("client construction should not fail");
    let outcome = client.attempt_geocode(ADDRESS).await;
    assert!(matches!(outcome, ProviderOutcome::Unconfigured), "got {outcome:?}");
}

#[tokio::test]
async fn google_reads_structured_components() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "formatted_address": "301 College Ave, Athens, GA 30601, USA",
                "geometry": { "location": { "lat": 33.9577, "lng": -83.3747 } },
                "address_components": [
                    { "long_name": "301", "short_name": "301", "types": ["street_number"] },
                    { "long_name": "Athens", "short_name": "Athens", "types": ["locality", "political"] },
                    {
                        "long_name": "Clarke County",
                        "short_name": "Clarke County",
                        "types": ["administrative_area_level_2", "political"]
                    },
                    {
                        "long_name": "Georgia",
                        "short_name": "GA",
                        "types": ["administrative_area_level_1", "political"]
                    }
                ]
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .and(query_param("address", ADDRESS))
        .and(query_param("key", "g-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = google(&server.uri()).attempt_geocode(ADDRESS).await;
    let ProviderOutcome::Found(location) = outcome else {
        panic!("should find a result, got {outcome:?}");
    };

    assert_eq!(location.city, "Athens");
    assert_eq!(location.county, "Clarke");
    assert_eq!(location.state, "GA");
    assert_eq!(location.formatted_address, "301 College Ave, Athens, GA 30601, USA");
}

#[tokio::test]
async fn google_zero_results_is_no_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ZERO_RESULTS", "results": []})),
        )
        .mount(&server)
        .await;

    let outcome = google(&server.uri()).attempt_geocode(ADDRESS).await;
    assert!(matches!(outcome, ProviderOutcome::NoMatch), "got {outcome:?}");
}

#[tokio::test]
async fn google_denied_request_is_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        })))
        .mount(&server)
        .await;

    let outcome = google(&server.uri()).attempt_geocode(ADDRESS).await;
    match outcome {
        ProviderOutcome::Failed(GeocodeError::ProviderStatus {
            status, message, ..
        }) => {
            assert_eq!(status, "REQUEST_DENIED");
            assert_eq!(message, "The provided API key is invalid.");
        }
        other => panic!("expected provider status failure, got {other:?}"),
    }
}

#[tokio::test]
async fn google_http_error_is_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let outcome = google(&server.uri()).attempt_geocode(ADDRESS).await;
    assert!(
        matches!(
            outcome,
            ProviderOutcome::Failed(GeocodeError::UnexpectedStatus {
                provider: "google",
                status: 503
            })
        ),
        "got {outcome:?}"
    );
}

#[tokio::test]
async fn google_without_key_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = GoogleGeocoder::with_base_url(Some(""), 5, &server.uri())
        .expect("client construction should not fail");
    let outcome = client.attempt_geocode(ADDRESS).await;
    assert!(matches!(outcome, ProviderOutcome::Unconfigured), "got {outcome:?}");
}

#[tokio::test]
async fn transport_failure_does_not_expose_token() {
    // Nothing listens on port 1, so the connection is refused.
    let client = LocationIqClient::with_base_url(Some("pk.SECRET123"), 2, "http://127.0.0.1:1")
        .expect("client construction should not fail");

    let outcome = client.attempt_geocode(ADDRESS).await;
    let ProviderOutcome::Failed(err) = outcome else {
        panic!("expected transport failure, got {outcome:?}");
    };
    assert!(matches!(err, GeocodeError::Http(_)), "got {err:?}");
    assert!(!err.to_string().contains("pk.SECRET123"), "{err}");
    assert!(!format!("{err:?}").contains("pk.SECRET123"), "{err:?}");
}

#[tokio::test]
async fn google_rejection_does_not_expose_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = GoogleGeocoder::with_base_url(Some("AIzaSECRET456"), 5, &server.uri())
        .expect("client construction should not fail");
    let outcome = client.attempt_geocode(ADDRESS).await;
    let ProviderOutcome::Failed(err) = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(err.to_string(), "google returned HTTP 403");
    assert!(!format!("{err:?}").contains("AIzaSECRET456"), "{err:?}");
}
