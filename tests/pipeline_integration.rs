//! End-to-end tests for the scoring pipeline.
//!
//! Page fetches go to wiremock servers; the classifier is a fixed-label double
//! so verdicts depend only on the label mapping.

mod helpers;

use helpers::{build_detector, FixedClassifier, MODEL_COLUMNS};
use phishing_detector::error_handling::{FetchFailureType, OutcomeType};
use phishing_detector::{
    AssemblyError, ClassifierError, DetectionError, FeatureValue, TldFrequencyTable, Verdict,
};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const TITLE_AND_FORM_PAGE: &str =
    "<html><head><title>Welcome</title></head><body><form method=\"post\"></form></body></html>";

async fn html_server(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(body, "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;
    server
}

fn int(value: Option<&FeatureValue>) -> i64 {
    match value {
        Some(FeatureValue::Int(i)) => *i,
        other => panic!("expected integer, got {other:?}"),
    }
}

#[tokio::test]
async fn test_title_and_form_page_scored_legitimate() {
    let server = html_server(TITLE_AND_FORM_PAGE).await;
    let classifier = FixedClassifier::new(1);
    let detector = build_detector(MODEL_COLUMNS, TldFrequencyTable::empty(), classifier.clone());

    let row = detector.assemble(&server.uri()).await.expect("assemble");
    assert_eq!(int(row.get("HasTitle")), 1);
    assert_eq!(int(row.get("HasForm")), 1);
    for flag in [
        "HasJavaScript",
        "HasIframe",
        "HasFavicon",
        "HasMetaRedirect",
        "HasExternalLinks",
    ] {
        assert_eq!(int(row.get(flag)), 0, "{flag}");
    }
    assert_eq!(row.names().collect::<Vec<_>>(), MODEL_COLUMNS);

    let scored = detector.classify(&server.uri()).await.expect("classify");
    assert_eq!(scored.result, Verdict::Legitimate);
    assert_eq!(scored.url, server.uri());
    assert_eq!(classifier.call_count(), 1);
}

#[tokio::test]
async fn test_zero_label_is_phishing() {
    let server = html_server(TITLE_AND_FORM_PAGE).await;
    let detector = build_detector(
        MODEL_COLUMNS,
        TldFrequencyTable::empty(),
        FixedClassifier::new(0),
    );

    let scored = detector.classify(&server.uri()).await.expect("classify");
    assert_eq!(scored.result, Verdict::Phishing);
    assert_eq!(
        detector.stats().get_outcome_count(OutcomeType::Phishing),
        1
    );
}

#[tokio::test]
async fn test_unreachable_host_still_produces_verdict() {
    let detector = build_detector(
        MODEL_COLUMNS,
        TldFrequencyTable::empty(),
        FixedClassifier::new(0),
    );
    let url = "http://127.0.0.1:1/login";

    let record = detector.extract_features(url).await;
    for flag in [
        "HasTitle",
        "HasFavicon",
        "HasForm",
        "HasJavaScript",
        "HasIframe",
        "HasMetaRedirect",
        "HasExternalLinks",
    ] {
        assert_eq!(int(record.get(flag)), 0, "{flag}");
    }

    let scored = detector.classify(url).await.expect("classify");
    assert_eq!(scored.result, Verdict::Phishing);
    assert!(
        detector
            .stats()
            .get_fetch_failure_count(FetchFailureType::ConnectError)
            >= 1
    );
}

#[tokio::test]
async fn test_empty_tld_table_encodes_zero_and_drops_raw_tld() {
    let detector = build_detector(
        MODEL_COLUMNS,
        TldFrequencyTable::empty(),
        FixedClassifier::new(1),
    );
    let row = detector
        .assemble("http://127.0.0.1:1/")
        .await
        .expect("assemble");
    assert_eq!(row.get("TLD_Frequency"), Some(&FeatureValue::Float(0.0)));
    assert!(row.names().all(|name| name != "TLD"));
}

#[tokio::test]
async fn test_missing_feature_surfaces_named_error() {
    let classifier = FixedClassifier::new(1);
    let detector = build_detector(
        &["URLLength", "NoOfPopup", "TLD_Frequency"],
        TldFrequencyTable::empty(),
        classifier.clone(),
    );

    let err = detector
        .classify("http://127.0.0.1:1/")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DetectionError::MissingFeature(AssemblyError::MissingExpectedFeature(
            "NoOfPopup".to_string()
        ))
    );
    assert!(!err.is_fatal());
    // The classifier never sees an incomplete row
    assert_eq!(classifier.call_count(), 0);
}

#[tokio::test]
async fn test_out_of_contract_label_is_fatal() {
    let detector = build_detector(
        MODEL_COLUMNS,
        TldFrequencyTable::empty(),
        FixedClassifier::new(2),
    );

    let err = detector
        .classify("http://127.0.0.1:1/")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DetectionError::Classifier(ClassifierError::OutOfContract(2))
    );
    assert!(err.is_fatal());
    assert_eq!(
        detector
            .stats()
            .get_outcome_count(OutcomeType::ClassifierError),
        1
    );
}

#[tokio::test]
async fn test_same_row_same_verdict() {
    let server = html_server(TITLE_AND_FORM_PAGE).await;
    let detector = build_detector(
        MODEL_COLUMNS,
        TldFrequencyTable::empty(),
        FixedClassifier::new(1),
    );

    let first = detector.assemble(&server.uri()).await.expect("assemble");
    let second = detector.assemble(&server.uri()).await.expect("assemble");
    assert_eq!(first, second);
}
