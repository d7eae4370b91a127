//! Provider-chain behavior of `GeocodeResolver` against mocked upstreams.

use permitdb_core::ProviderId;
use permitdb_geocode::{GeocodeResolver, GoogleGeocoder, LocationIqClient, ResolveError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ADDRESS: &str = "55 Trinity Ave SW, Atlanta, GA";

fn resolver(primary: &MockServer, secondary: &MockServer) -> GeocodeResolver {
    let locationiq = LocationIqClient::with_base_url(Some("pk.test"), 5, &primary.uri())
        .expect("client construction should not fail");
    let google = GoogleGeocoder::with_base_url(Some("g-test"), 5, &secondary.uri())
        .expect("client construction should not fail");
    GeocodeResolver::new(Box::new(locationiq), Box::new(google))
}

async fn mount_locationiq_hit(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/search.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "lat": "33.7488",
            "lon": "-84.3903",
            "display_name": "55 Trinity Ave SW, Atlanta, Fulton County, GA, 30303, USA"
        }])))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_locationiq_miss(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/search.php"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_google_hit(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "results": [{
                "formatted_address": "55 Trinity Ave SW, Atlanta, GA 30303, USA",
                "geometry": { "location": { "lat": 33.7488, "lng": -84.3903 } },
                "address_components": [
                    { "long_name": "Atlanta", "short_name": "Atlanta", "types": ["locality"] },
                    {
                        "long_name": "Fulton County",
                        "short_name": "Fulton County",
                        "types": ["administrative_area_level_2"]
                    },
                    {
                        "long_name": "Georgia",
                        "short_name": "GA",
                        "types": ["administrative_area_level_1"]
                    }
                ]
            }]
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn primary_hit_never_calls_secondary() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    mount_locationiq_hit(&primary).await;
    mount_google_hit(&secondary, 0).await;

    let result = resolver(&primary, &secondary)
        .resolve(ADDRESS)
        .await
        .expect("primary should resolve");

    assert_eq!(result.provider_id, ProviderId::Primary);
    assert_eq!(result.city, "Atlanta");
    assert_eq!(result.county, "Fulton");
    assert_eq!(result.state, "GA");
}

#[tokio::test]
async fn primary_miss_falls_through_to_secondary() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    mount_locationiq_miss(&primary).await;
    mount_google_hit(&secondary, 1).await;

    let result = resolver(&primary, &secondary)
        .resolve(ADDRESS)
        .await
        .expect("secondary should resolve");

    assert_eq!(result.provider_id, ProviderId::Secondary);
    assert_eq!(result.formatted_address, "55 Trinity Ave SW, Atlanta, GA 30303, USA");
    assert_eq!(result.county, "Fulton");
}

#[tokio::test]
async fn primary_failure_falls_through_to_secondary() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&primary)
        .await;
    mount_google_hit(&secondary, 1).await;

    let result = resolver(&primary, &secondary)
        .resolve(ADDRESS)
        .await
        .expect("secondary should resolve");

    assert_eq!(result.provider_id, ProviderId::Secondary);
}

#[tokio::test]
async fn unconfigured_primary_falls_through_to_secondary() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&primary)
        .await;
    mount_google_hit(&secondary, 1).await;

    let locationiq = LocationIqClient::with_base_url(None, 5, &primary.uri())
        .expect("client construction should not fail");
    let google = GoogleGeocoder::with_base_url(Some("g-test"), 5, &secondary.uri())
        .expect("client construction should not fail");
    let resolver = GeocodeResolver::new(Box::new(locationiq), Box::new(google));

    let result = resolver.resolve(ADDRESS).await.expect("secondary should resolve");
    assert_eq!(result.provider_id, ProviderId::Secondary);
}

#[tokio::test]
async fn both_missing_is_not_found() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    mount_locationiq_miss(&primary).await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ZERO_RESULTS", "results": []})),
        )
        .expect(1)
        .mount(&secondary)
        .await;

    let err = resolver(&primary, &secondary)
        .resolve(ADDRESS)
        .await
        .expect_err("nothing should resolve");
    assert_eq!(err, ResolveError::NotFound);
}

#[tokio::test]
async fn blank_address_is_rejected_without_calls() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    for server in [&primary, &secondary] {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(server)
            .await;
    }

    let resolver = resolver(&primary, &secondary);
    assert_eq!(resolver.resolve("").await, Err(ResolveError::MissingAddress));
    assert_eq!(resolver.resolve("   ").await, Err(ResolveError::MissingAddress));
}
