use anyhow::Result;
use httpmock::prelude::*;
use orkg_fair_checker::core::render::{
    render_json, render_resolution, render_text, RunDocument, EXIT_ASSESSMENT_FAILED,
    EXIT_INVALID_RESOURCE,
};
use orkg_fair_checker::core::session::ActionOutcome;
use orkg_fair_checker::domain::model::UriKind;
use orkg_fair_checker::utils::validation::Validate;
use orkg_fair_checker::{FairChecker, Settings};
use serde_json::json;

fn settings_for(graph: &MockServer, assessor: &MockServer) -> Settings {
    Settings {
        graph_base_url: graph.base_url(),
        assessor_base_url: assessor.base_url(),
        timeout_seconds: 5,
        ..Settings::default()
    }
}

fn metric(name: &str, score: &str, target: &str) -> serde_json::Value {
    json!({
        "metric": name,
        "score": score,
        "recommendation": format!("Improve {}", name),
        "comment": format!("INFO - Evaluating metrics for {}\nINFO - checked\nINFO - {} passed\n", name, name),
        "target_uri": target
    })
}

/// 完整流程：解析 → ORKG bundle → FAIR-Checker → 報告
#[tokio::test]
async fn test_resolve_then_assess_every_uri() -> Result<()> {
    let graph = MockServer::start();
    let assessor = MockServer::start();

    let bundle_mock = graph.mock(|when, then| {
        when.method(GET)
            .path("/api/statements/R8186/bundle/")
            .query_param("maxLevel", "2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"statements": [
                {"predicate": {"id": "P29"}, "object": {"label": "2021"}},
                {"predicate": {"id": "P26"}, "object": {"label": "10.1145/3360901.3364435"}},
                {"predicate": {"id": "url"}, "object": {"label": "https://example.org/paper.pdf"}}
            ]}));
    });

    let canonical = format!("{}/resource/R8186", graph.base_url());
    let canonical_mock = assessor.mock(|when, then| {
        when.method(GET)
            .path("/api/check/metrics_all")
            .query_param("url", &canonical);
        then.status(200).json_body(json!([
            metric("F1A", "2", &canonical),
            metric("F1B", "0", &canonical),
            metric("A1.1", "2", &canonical),
            metric("R1.1", "2", &canonical)
        ]));
    });
    let doi_mock = assessor.mock(|when, then| {
        when.method(GET)
            .path("/api/check/metrics_all")
            .query_param("url", "10.1145/3360901.3364435");
        then.status(200).json_body(json!({"message": "Invalid URL"}));
    });

    let settings = settings_for(&graph, &assessor);
    settings.validate()?;
    let checker = FairChecker::from_config(&settings)?;

    let input = format!("{}/paper/R8186", graph.base_url());
    let uris = checker.load_uri(&input).await.applied().unwrap();
    bundle_mock.assert();

    assert_eq!(uris.canonical_uri.as_deref(), Some(canonical.as_str()));
    assert_eq!(uris.doi_uri.as_deref(), Some("10.1145/3360901.3364435"));
    assert_eq!(uris.std_uri.as_deref(), Some("https://example.org/paper.pdf"));
    assert!(render_resolution(&uris).contains("Is a valid ORKG Resource URI"));

    let display = checker
        .assess_kind(UriKind::Canonical)
        .await
        .unwrap()
        .applied()
        .unwrap();
    canonical_mock.assert();

    let report = display.report().unwrap();
    assert_eq!(report.evaluation_score, 6);
    assert_eq!(report.max_score, 8);
    assert_eq!(report.percentage, 75.0);
    assert_eq!(report.assessed_uri.as_deref(), Some(canonical.as_str()));
    assert_eq!(report.rows[0].description, "for F1A");
    assert_eq!(report.rows[0].comment, "F1A passed");
    assert_eq!(report.rows[1].comment, "Improve F1B");

    let text = render_text(&display);
    assert!(text.contains("FAIRness: 75%"));
    assert!(text.contains("Evaluation Score: 6/8"));

    let failure = checker.assess_kind(UriKind::Doi).await.unwrap();
    doi_mock.assert();
    assert!(matches!(failure, ActionOutcome::Applied(ref d) if d.is_failure()));
    assert_eq!(
        render_text(&failure.clone().applied().unwrap()),
        "FAIR-Checker API Fetch Failed."
    );

    let state = checker.snapshot();
    assert!(!state.loading);
    assert!(state.fairness.unwrap().is_failure());

    let mut document = RunDocument::new(&input, Some(uris));
    document.push(&canonical, display);
    document.push("10.1145/3360901.3364435", failure.applied().unwrap());
    assert_eq!(document.exit_code(), EXIT_ASSESSMENT_FAILED);

    Ok(())
}

#[tokio::test]
async fn test_empty_bundle_is_not_a_valid_resource() -> Result<()> {
    let graph = MockServer::start();
    let assessor = MockServer::start();

    let bundle_mock = graph.mock(|when, then| {
        when.method(GET).path("/api/statements/R1/bundle/");
        then.status(200).json_body(json!({"statements": []}));
    });

    let checker = FairChecker::from_config(&settings_for(&graph, &assessor))?;
    let uris = checker
        .load_uri(&format!("{}/resource/R1", graph.base_url()))
        .await
        .applied()
        .unwrap();

    bundle_mock.assert();
    assert!(!uris.is_valid());
    assert_eq!(render_resolution(&uris), "Not a valid ORKG Resource URI");
    assert!(checker.assess_kind(UriKind::Canonical).await.is_none());

    let input = format!("{}/resource/R1", graph.base_url());
    let document = RunDocument::new(&input, Some(uris));
    let value: serde_json::Value = serde_json::from_str(&render_json(&document)?)?;
    assert_eq!(value["input"], input.as_str());
    assert_eq!(value["assessments"], json!([]));
    assert_eq!(document.exit_code(), EXIT_INVALID_RESOURCE);

    Ok(())
}

#[tokio::test]
async fn test_unparseable_input_never_calls_the_graph() -> Result<()> {
    let graph = MockServer::start();
    let assessor = MockServer::start();

    let bundle_mock = graph.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(json!({"statements": []}));
    });

    let checker = FairChecker::from_config(&settings_for(&graph, &assessor))?;
    let uris = checker
        .load_uri("https://orkg.org/resource/R1")
        .await
        .applied()
        .unwrap();

    assert!(!uris.is_valid());
    bundle_mock.assert_hits(0);

    Ok(())
}

#[tokio::test]
async fn test_lookup_server_error_is_not_a_valid_resource() -> Result<()> {
    let graph = MockServer::start();
    let assessor = MockServer::start();

    graph.mock(|when, then| {
        when.method(GET).path("/api/statements/R2/bundle/");
        then.status(503);
    });

    let checker = FairChecker::from_config(&settings_for(&graph, &assessor))?;
    let uris = checker
        .load_uri(&format!("{}/comparison/R2", graph.base_url()))
        .await
        .applied()
        .unwrap();

    assert!(!uris.is_valid());
    assert_eq!(checker.snapshot().uris, Some(uris));

    Ok(())
}

#[tokio::test]
async fn test_assessment_http_error_shows_failure() -> Result<()> {
    let graph = MockServer::start();
    let assessor = MockServer::start();

    let api_mock = assessor.mock(|when, then| {
        when.method(GET).path("/api/check/metrics_all");
        then.status(500);
    });

    let checker = FairChecker::from_config(&settings_for(&graph, &assessor))?;
    let display = checker
        .assess("https://doi.org/10.1000/xyz")
        .await
        .applied()
        .unwrap();

    api_mock.assert();
    assert!(display.is_failure());
    assert!(!checker.snapshot().loading);

    Ok(())
}

#[tokio::test]
async fn test_timeout_shows_failure() -> Result<()> {
    let graph = MockServer::start();
    let assessor = MockServer::start();

    assessor.mock(|when, then| {
        when.method(GET).path("/api/check/metrics_all");
        then.status(200)
            .delay(std::time::Duration::from_secs(3))
            .json_body(json!([]));
    });

    let settings = Settings {
        timeout_seconds: 1,
        ..settings_for(&graph, &assessor)
    };
    let checker = FairChecker::from_config(&settings)?;
    let display = checker
        .assess("https://example.org")
        .await
        .applied()
        .unwrap();

    assert!(display.is_failure());

    Ok(())
}
