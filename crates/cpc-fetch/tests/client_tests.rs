//! Integration tests for `CpcApi` against a stubbed HTTP server.

mod common;

use std::time::Duration;

use common::{client, deputies_client, deputy, png, vote, wrap_list};
use cpc_fetch::{CpcApi, ParliamentApi, ParliamentarianExt, SearchQuery};
use cpc_types::{
    BallotingIndex, ClientConfig, ConfigurationError, CpcError, EntityKind, Legislature,
    ParliamentType, Position, RemoteError,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn assembly() -> serde_json::Value {
    wrap_list(
        "deputes",
        "depute",
        vec![
            deputy("jean-francois-cope", "Jean-François Copé", "Copé"),
            deputy("jean-luc-melenchon", "Jean-Luc Mélenchon", "Mélenchon"),
            deputy("nadine-morano", "Nadine Morano", "Morano"),
        ],
    )
}

#[tokio::test]
async fn test_list_parliamentarians() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deputes/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assembly()))
        .expect(1)
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::L2017_2022);
    let list = api.parliamentarians(false).await.expect("should succeed");

    assert_eq!(list.len(), 3);
    assert_eq!(list[1].slug, "jean-luc-melenchon");
    assert_eq!(list[1].num_circo, Some(1));
    assert_eq!(list[1].get("id_an"), Some(&json!("1008")));
}

#[tokio::test]
async fn test_list_sitting_parliamentarians() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deputes/enmandat/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assembly()))
        .expect(1)
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::Current);
    let list = api.parliamentarians(true).await.expect("should succeed");

    assert_eq!(list.len(), 3);
}

#[tokio::test]
async fn test_senate_endpoint_family() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/senateurs/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wrap_list(
            "senateurs",
            "senateur",
            vec![json!({"slug": "gerard-larcher", "nom": "Gérard Larcher", "nom_de_famille": "Larcher"})],
        )))
        .mount(&server)
        .await;

    let api = client(&server, ParliamentType::Senateur, Legislature::Current);
    let found = api.search_parliamentarians("Larcher").await.expect("should succeed");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].nom_de_famille.as_deref(), Some("Larcher"));
}

#[tokio::test]
async fn test_search_then_lookup_returns_same_slug() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deputes/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assembly()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/jean-luc-melenchon/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "depute": deputy("jean-luc-melenchon", "Jean-Luc Mélenchon", "Mélenchon")
        })))
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::L2017_2022);
    let found = api.search_parliamentarians("Melenchon").await.expect("search");
    let slug = found[0].slug.clone();

    let detail = api.parliamentarian(&slug).await.expect("lookup");
    assert_eq!(detail.slug, slug);
    assert_eq!(detail.nom_de_famille.as_deref(), Some("Mélenchon"));
}

#[tokio::test]
async fn test_search_with_scores_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deputes/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assembly()))
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::Current);
    let query = SearchQuery::new("o").field("nom_de_famille").limit(2);
    let matches = api.search_parliamentarians_with(&query).await.expect("search");

    assert_eq!(matches.len(), 2);
    assert!(matches[0].score >= matches[1].score);
}

#[tokio::test]
async fn test_empty_search_is_empty_and_silent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assembly()))
        .expect(0)
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::Current);
    let found = api.search_parliamentarians("").await.expect("never fails");

    assert!(found.is_empty());
}

#[tokio::test]
async fn test_parliamentarian_not_found_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nonexistent-slug-xyz/json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::Current);
    let result = api.parliamentarian("nonexistent-slug-xyz").await;

    assert!(matches!(
        result,
        Err(CpcError::NotFound { kind: EntityKind::Parliamentarian, key }) if key == "nonexistent-slug-xyz"
    ));
}

#[tokio::test]
async fn test_parliamentarian_not_found_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nonexistent-slug-xyz/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::Current);
    let result = api.parliamentarian("nonexistent-slug-xyz").await;

    assert!(result.is_err_and(|e| e.is_not_found()));
}

#[tokio::test]
async fn test_parliamentarian_unexpected_shape_is_remote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/richard-ferrand/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::Current);
    let result = api.parliamentarian("richard-ferrand").await;

    assert!(matches!(
        result,
        Err(CpcError::Remote(RemoteError::Json { .. }))
    ));
}

#[tokio::test]
async fn test_votes_not_found_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nonexistent-slug-xyz/votes/json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::Current);
    let result = api.parliamentarian_votes("nonexistent-slug-xyz").await;

    assert!(matches!(
        result,
        Err(CpcError::NotFound { kind: EntityKind::Parliamentarian, key }) if key == "nonexistent-slug-xyz"
    ));
}

#[tokio::test]
async fn test_server_error_is_remote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deputes/json"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::Current);
    let result = api.parliamentarians(false).await;

    // One request only: failures are not retried.
    assert!(matches!(
        result,
        Err(CpcError::Remote(RemoteError::Status { status: 500, .. }))
    ));
}

#[tokio::test]
async fn test_malformed_json_is_remote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/synthese/data/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::L2017_2022);
    let result = api.synthese(None).await;

    assert!(matches!(
        result,
        Err(CpcError::Remote(RemoteError::Json { .. }))
    ));
}

#[tokio::test]
async fn test_synthese_global_and_monthly() {
    let server = MockServer::start().await;
    let body = wrap_list(
        "deputes",
        "depute",
        vec![json!({
            "nom": "Damien Abad",
            "slug": "damien-abad",
            "groupe_sigle": "LR",
            "semaines_presence": 31
        })],
    );
    Mock::given(method("GET"))
        .and(path("/synthese/data/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/synthese/201907/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::L2017_2022);

    let global = api.synthese(None).await.expect("global");
    assert!(global.month.is_none());
    assert_eq!(
        global.find("damien-abad").and_then(|e| e.counter("semaines_presence")),
        Some(31)
    );

    let month = "201907".parse().expect("valid month");
    let monthly = api.synthese(Some(month)).await.expect("monthly");
    assert_eq!(monthly.month, Some(month));
    assert_eq!(monthly.len(), 1);
}

#[tokio::test]
async fn test_global_synthese_unavailable_for_2012_2017() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::L2012_2017);
    let result = api.synthese(None).await;

    assert!(matches!(
        result,
        Err(CpcError::Configuration(
            ConfigurationError::GlobalSyntheseUnavailable(Legislature::L2012_2017)
        ))
    ));
}

#[tokio::test]
async fn test_votes_and_balloting_index() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jean-luc-melenchon/votes/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "votes": [
                vote(10, "jean-luc-melenchon", "pour"),
                vote(11, "jean-luc-melenchon", "contre"),
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/nadine-morano/votes/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "votes": [vote(10, "nadine-morano", "contre")]
        })))
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::L2017_2022);
    let melenchon = cpc_types::Parliamentarian::new("jean-luc-melenchon", "Jean-Luc Mélenchon");

    let votes = melenchon.votes(&api).await.expect("votes");
    let numbers: Vec<_> = votes.iter().map(|v| v.balloting_number()).collect();
    assert_eq!(numbers, vec![10, 11]);
    assert!(votes[1].is_dissent());

    let morano_votes = api.parliamentarian_votes("nadine-morano").await.expect("votes");
    let mut index = BallotingIndex::from_votes(&votes);
    index.extend(&morano_votes);

    assert_eq!(index.len(), 2);
    assert_eq!(index.position(10, "nadine-morano"), Some(&Position::Contre));
    assert_eq!(index.position(10, "jean-luc-melenchon"), Some(&Position::Pour));
}

#[tokio::test]
async fn test_picture_at_requested_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/depute/photo/jean-luc-melenchon/512"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(png(512, 512)),
        )
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::L2017_2022);
    let picture = api.picture("jean-luc-melenchon", 512).await.expect("picture");

    assert_eq!(picture.width(), 512);
    assert_eq!(picture.height(), 512);
    assert_eq!(picture.pixel(0, 0), Some([200, 150, 100, 255]));
}

#[tokio::test]
async fn test_picture_never_resized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/depute/photo/jean-luc-melenchon/512"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png(400, 512)))
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::L2017_2022);
    let result = api.picture("jean-luc-melenchon", 512).await;

    assert!(matches!(
        result,
        Err(CpcError::Remote(RemoteError::Resolution {
            requested: 512,
            width: 400,
            height: 512
        }))
    ));
}

#[tokio::test]
async fn test_picture_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/depute/photo/nobody/60"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::Current);
    let result = api.picture("nobody", 60).await;

    assert!(matches!(
        result,
        Err(CpcError::NotFound {
            kind: EntityKind::Picture,
            ..
        })
    ));
}

#[tokio::test]
async fn test_full_text_search_csv() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recherche/travail"))
        .and(query_param("page", "2"))
        .and(query_param("format", "csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "document_type;document_id;titre\nIntervention;42;Code du travail\n",
        ))
        .mount(&server)
        .await;

    let api = deputies_client(&server, Legislature::Current);
    let hits = api.full_text_search("travail", 2).await.expect("search");

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].get("titre"), Some("Code du travail"));
}

#[tokio::test]
async fn test_request_timeout_is_remote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deputes/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(assembly())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .expect("stub server URL")
        .with_timeout(Duration::from_millis(100));
    let api = CpcApi::new(config).expect("client build");

    let result = api.parliamentarians(false).await;

    assert!(matches!(result, Err(CpcError::Remote(RemoteError::Http(_)))));
}

#[test]
fn test_unsupported_pair_rejected_at_configuration() {
    // A CpcApi needs a ClientConfig, so no client can exist for this pair.
    let result = ClientConfig::new(ParliamentType::Senateur, Legislature::L2017_2022);
    assert!(matches!(
        result,
        Err(ConfigurationError::UnsupportedLegislature { .. })
    ));

    let err = CpcError::from(ClientConfig::parse("senateur", "2012-2017").unwrap_err());
    assert!(err.is_configuration());
}
