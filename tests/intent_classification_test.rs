//! Integration tests for intent classification through the public API.

use std::io::Write;

use vanlang_nlp::error::Result;
use vanlang_nlp::ml::intent_classifier::{
    BLOCKED_CONTENT_SCORE, KeywordCategory, load_keyword_table,
};
use vanlang_nlp::prelude::*;
use vanlang_nlp::util::numeric::round2;

#[test]
fn test_normalization_is_idempotent() {
    let samples = [
        "Tiết kiệm",
        "XIN CHÀO, Bạn là ai?",
        "Đầu tư cổ phiếu và VÀNG",
        "  mixed Ưu đãi 100%  ",
        "plain ascii",
        "",
    ];
    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "normalize not idempotent for {sample:?}");
    }
    assert_eq!(normalize("Tiết kiệm"), "tiet kiem");
}

#[test]
fn test_category_reported_once() -> Result<()> {
    let service = NlpService::new()?;

    // "budget", "budgeting", "ngân sách" and "ngan sach" all belong to
    // financial_primary.
    let result = service.analyze_intent("budgeting ngân sách ngan sach budget");
    assert_eq!(result.matched_categories(), ["financial_primary"]);
    assert_eq!(result.score, 1.0);

    Ok(())
}

#[test]
fn test_greeting_wins_over_financial() -> Result<()> {
    let service = NlpService::new()?;

    let result = service.analyze_intent("Xin chào, ngân sách của tôi");
    assert_eq!(result.intent, Intent::Greeting);
    assert_eq!(result.confidence, 0.9);
    assert_eq!(result.score, 2.0);
    assert_eq!(
        result.matched_categories(),
        ["greeting", "financial_primary"]
    );

    Ok(())
}

#[test]
fn test_blocked_topic_suppression() -> Result<()> {
    let service = NlpService::new()?;

    let result = service.analyze_intent("thời tiết hôm nay");
    assert_eq!(result.intent, Intent::BlockedTopic);
    assert_eq!(result.score, -1.0);
    assert_eq!(result.confidence, 0.8);
    assert!(service.is_blocked_content("thời tiết hôm nay"));

    let result = service.analyze_intent("What is the weather today");
    assert_eq!(result.intent, Intent::BlockedTopic);
    assert_eq!(result.score, -1.0);
    assert_eq!(result.confidence, 0.8);
    assert_eq!(result.language, Language::En);

    Ok(())
}

#[test]
fn test_threshold_boundaries() -> Result<()> {
    let service = NlpService::new()?;

    let primary = service.analyze_intent("budget");
    assert_eq!(primary.intent, Intent::FinancialHighConfidence);
    assert_eq!(primary.score, 1.0);
    assert_eq!(primary.confidence, 0.5);

    let secondary = service.analyze_intent("bitcoin");
    assert_eq!(secondary.intent, Intent::FinancialMediumConfidence);
    assert_eq!(secondary.score, 0.8);
    assert_eq!(secondary.confidence, 0.56);

    let contextual = service.analyze_intent("cash");
    assert_eq!(contextual.intent, Intent::FinancialMediumConfidence);
    assert_eq!(contextual.score, 0.5);
    assert_eq!(contextual.confidence, 0.35);

    let combined = service.analyze_intent("budget for gold and cash");
    assert_eq!(combined.intent, Intent::FinancialHighConfidence);
    assert_eq!(combined.score, 2.3);
    assert_eq!(combined.confidence, 0.95);

    Ok(())
}

#[test]
fn test_unknown_fallback() -> Result<()> {
    let service = NlpService::new()?;

    for result in [service.analyze_intent(""), service.analyze_intent(None)] {
        assert_eq!(result.intent, Intent::Unknown);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.language, Language::Unknown);
    }

    let unmatched = service.analyze_intent("lorem ipsum");
    assert_eq!(unmatched.intent, Intent::Unknown);
    assert!(unmatched.matched_categories().is_empty());

    Ok(())
}

#[test]
fn test_language_detection() {
    assert_eq!(detect_language("Tôi muốn xem chi tiêu"), Language::Vi);
    assert_eq!(detect_language("How much did I spend"), Language::En);
    assert_eq!(detect_language(""), Language::Unknown);
}

#[test]
fn test_about_bot_scenario() -> Result<()> {
    let service = NlpService::new()?;

    let result = service.analyze_intent("Bạn là ai?");
    assert_eq!(result.intent, Intent::AboutBot);
    assert_eq!(result.confidence, 0.9);
    assert_eq!(result.language, Language::Vi);
    assert_eq!(result.matched_categories(), ["about_bot"]);

    Ok(())
}

#[test]
fn test_result_wire_format() -> Result<()> {
    let service = NlpService::new()?;

    let json = serde_json::to_value(service.analyze_intent("Bạn là ai?"))?;
    assert_eq!(json["intent"], "about_bot");
    assert_eq!(json["language"], "vi");
    assert_eq!(json["matchedCategories"], serde_json::json!(["about_bot"]));

    let json = serde_json::to_value(service.analyze_intent(None))?;
    assert_eq!(json["intent"], "unknown");
    assert!(json.get("matchedCategories").is_none());

    Ok(())
}

#[test]
fn test_custom_table_from_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"[
            {{"name": "financial_primary", "terms": {{"vi": ["khoản vay"], "en": ["loan"]}}, "weight": 1.0}},
            {{"name": "blocked_topics", "terms": {{"en": ["football"]}}, "weight": -1.0}}
        ]"#
    )?;

    let table = load_keyword_table(Some(file.path()))?;
    let service = NlpService::with_keyword_table(table)?;

    let loan = service.analyze_intent("Khoản vay mua nhà");
    assert_eq!(loan.intent, Intent::FinancialHighConfidence);
    assert_eq!(loan.matched_categories(), ["financial_primary"]);

    let football = service.analyze_intent("football scores");
    assert_eq!(football.intent, Intent::BlockedTopic);
    assert!(service.is_blocked_content("football scores"));

    // The built-in terms are gone.
    assert_eq!(service.analyze_intent("budget").intent, Intent::Unknown);
    assert_eq!(service.stats().term_count, 3);

    Ok(())
}

#[test]
fn test_fractional_blocked_weight_boundary() -> Result<()> {
    // With a configurable weight the score can sit between -1.0 and -0.5.
    let table = KeywordTable::new(vec![KeywordCategory::new(
        "blocked_topics",
        vec![],
        vec!["gossip".into()],
        -0.7,
    )])?;
    let service = NlpService::with_keyword_table(table)?;

    let result = service.analyze_intent("celebrity gossip");
    assert_eq!(result.score, -0.7);
    assert_eq!(result.intent, Intent::BlockedTopic);
    assert!(result.score < BLOCKED_CONTENT_SCORE);
    assert!(service.is_blocked_content("celebrity gossip"));

    Ok(())
}

#[test]
fn test_rounding_helper() {
    assert_eq!(round2(0.8 * 0.7), 0.56);
    assert_eq!(round2(1.0 / 2.0), 0.5);
}

#[test]
fn test_sentiment_and_hash() -> Result<()> {
    let service = NlpService::new()?;

    let positive = service.analyze_sentiment("dịch vụ rất tốt", Language::Vi);
    assert_eq!(positive.label, SentimentLabel::Positive);
    assert!(positive.score > 0.0);

    let negative = service.analyze_sentiment("terrible and awful", Language::En);
    assert_eq!(negative.label, SentimentLabel::Negative);

    assert_eq!(
        service.generate_hash("hello"),
        "5d41402abc4b2a76b9719d911017c592"
    );
    assert_eq!(generate_hash(""), "d41d8cd98f00b204e9800998ecf8427e");

    Ok(())
}
