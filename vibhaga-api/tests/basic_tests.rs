//! Basic tests for vibhaga-api

use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use vibhaga_api::*;
use vibhaga_core::{Analyzer, Lexicon};

fn sample_service() -> MorphologyService {
    let lexicon = Lexicon::builder()
        .name("English")
        .prefixes(["un"])
        .suffixes(["ing", "ed"])
        .roots(["play"])
        .known_words(["it"])
        .build();
    MorphologyService::from_analyzer(Analyzer::new(Arc::new(lexicon)))
}

#[test]
fn test_request_analysed_in_sentence_mode() {
    let service = sample_service();
    let response = service.handle(&AnalyzeRequest::new("  play it.  "));

    assert_eq!(
        response,
        AnalyzeResponse::success("play it.", "play_Root it_Root.")
    );
}

#[test]
fn test_single_word_request() {
    let service = sample_service();
    let response = service.handle(&AnalyzeRequest::new("unplayed"));

    assert!(response.is_success());
    assert_eq!(response.output(), Some("un_Prefix + play_Root + ed_Suffix"));
}

#[test]
fn test_blank_request_rejected() {
    let service = sample_service();

    for word in ["", "   ", "\t\n"] {
        let response = service.handle(&AnalyzeRequest::new(word));
        assert_eq!(
            response,
            AnalyzeResponse::error("Please enter an English word or sentence.")
        );
        assert!(response.output().is_none());
    }
}

#[test]
fn test_default_service_message_names_telugu() {
    let service = MorphologyService::new().unwrap();
    let response = service.handle(&AnalyzeRequest::default());

    assert_eq!(
        response,
        AnalyzeResponse::error("Please enter a Telugu word or sentence.")
    );
}

#[test]
fn test_handle_json() {
    let service = sample_service();

    let json = service.handle_json(r#"{"word": "playing"}"#).unwrap();
    assert_eq!(
        json,
        r#"{"input":"playing","output":"play_Root + ing_Suffix"}"#
    );

    let json = service.handle_json("{}").unwrap();
    assert_eq!(json, r#"{"error":"Please enter an English word or sentence."}"#);
}

#[test]
fn test_handle_json_rejects_malformed_request() {
    let service = sample_service();
    let err = service.handle_json("not json").unwrap_err();
    assert!(matches!(err, ApiError::Serde(_)));
}

#[test]
fn test_response_round_trip() {
    let success: AnalyzeResponse =
        serde_json::from_str(r#"{"input":"a","output":"a_Root"}"#).unwrap();
    assert_eq!(success, AnalyzeResponse::success("a", "a_Root"));

    let failure: AnalyzeResponse = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
    assert_eq!(failure, AnalyzeResponse::error("nope"));
}

#[test]
fn test_convenience_functions() {
    assert_eq!(
        analyze_text("ఇది ఒక పుస్తకం.").unwrap(),
        "ఇది_Root ఒక_Root పుస్తకం_Root."
    );
    assert_eq!(analyze_word("పిల్లలు").unwrap(), "పిల్ల_Root + లు_Suffix");
}

#[test]
fn test_with_lexicon() {
    let service = MorphologyService::with_lexicon("telugu").unwrap();
    assert_eq!(service.analyzer().lexicon().code(), "te");

    assert!(matches!(
        MorphologyService::with_lexicon("klingon"),
        Err(ApiError::Lexicon(_))
    ));
}

#[test]
fn test_manifest_with_model_override() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("lexicon.toml");
    fs::write(
        &manifest,
        r#"
[metadata]
code = "en"
name = "English"

[affixes]
suffixes = ["ing"]
"#,
    )
    .unwrap();
    let model = dir.path().join("morf.txt");
    fs::write(&model, "3 blue + berry\n").unwrap();

    let config = Config::builder()
        .lexicon_manifest(&manifest)
        .statistical_fallback(true)
        .morfessor_model(&model)
        .build()
        .unwrap();
    let service = MorphologyService::with_config(config).unwrap();

    assert_eq!(service.analyzer().segmenters().names(), vec!["morfessor"]);
    assert_eq!(
        service.handle(&AnalyzeRequest::new("blueberry")).output(),
        Some("blue_Root + berry_Root")
    );
}
