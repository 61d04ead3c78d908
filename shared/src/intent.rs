//! Keyword-based message analysis.
//!
//! Everything here is a plain substring test over the raw message, so the
//! result is fully determined by the input string.

use crate::models::{Complexity, Intent, IntentAnalysis};
use crate::prompts::text_length;

/// Messages shorter than this (in UTF-16 units) are simple.
const SIMPLE_BELOW: usize = 50;
/// Messages longer than this (in UTF-16 units) are complex.
const COMPLEX_ABOVE: usize = 200;

/// Topic buckets in reporting order.
const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("تقنية", &["برمجة", "كمبيوتر", "ذكاء اصطناعي", "تطوير"]),
    ("فلسفة", &["معنى", "وجود", "حياة", "فكر"]),
    ("علوم", &["رياضيات", "فيزياء", "كيمياء", "بحث"]),
    ("أعمال", &["شركة", "تسويق", "إدارة", "استراتيجية"]),
];

/// Classify a message by intent, complexity and topic.
pub fn analyze_message(message: &str) -> IntentAnalysis {
    IntentAnalysis {
        intent: classify_intent(message),
        complexity: classify_complexity(message),
        topics: extract_topics(message),
        language: "ar".to_string(),
    }
}

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| message.contains(keyword))
}

// Later checks override earlier ones.
fn classify_intent(message: &str) -> Intent {
    let mut intent = Intent::General;
    if message.contains('؟') {
        intent = Intent::Question;
    }
    if contains_any(message, &["برمج", "كود"]) {
        intent = Intent::Programming;
    }
    if contains_any(message, &["فلسف", "معنى"]) {
        intent = Intent::Philosophy;
    }
    if contains_any(message, &["مساعد", "ساعد"]) {
        intent = Intent::HelpRequest;
    }
    intent
}

fn classify_complexity(message: &str) -> Complexity {
    let length = text_length(message);
    if length < SIMPLE_BELOW {
        Complexity::Simple
    } else if length > COMPLEX_ABOVE {
        Complexity::Complex
    } else {
        Complexity::Medium
    }
}

fn extract_topics(message: &str) -> Vec<String> {
    TOPIC_KEYWORDS
        .iter()
        .filter(|(_, keywords)| contains_any(message, keywords))
        .map(|(topic, _)| topic.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_thresholds() {
        assert_eq!(analyze_message(&"a".repeat(30)).complexity, Complexity::Simple);
        assert_eq!(analyze_message(&"a".repeat(50)).complexity, Complexity::Medium);
        assert_eq!(analyze_message(&"a".repeat(200)).complexity, Complexity::Medium);
        assert_eq!(analyze_message(&"a".repeat(250)).complexity, Complexity::Complex);
    }

    #[test]
    fn test_complexity_counts_characters_not_bytes() {
        // 30 Arabic letters are 60 bytes of UTF-8.
        let message = "م".repeat(30);
        assert_eq!(analyze_message(&message).complexity, Complexity::Simple);
    }

    #[test]
    fn test_complexity_counts_utf16_units() {
        // Each emoji is a surrogate pair: 30 of them are 60 units.
        assert_eq!(analyze_message(&"😀".repeat(30)).complexity, Complexity::Medium);
        assert_eq!(analyze_message(&"😀".repeat(24)).complexity, Complexity::Simple);
        assert_eq!(analyze_message(&"😀".repeat(101)).complexity, Complexity::Complex);
    }

    #[test]
    fn test_intent_precedence() {
        assert_eq!(analyze_message("كيف حالك؟").intent, Intent::Question);
        assert_eq!(analyze_message("أريد كود بايثون؟").intent, Intent::Programming);
        assert_eq!(analyze_message("ما معنى الكود؟").intent, Intent::Philosophy);
        assert_eq!(analyze_message("ساعدني في معنى الكود؟").intent, Intent::HelpRequest);
        assert_eq!(analyze_message("hello").intent, Intent::General);
    }

    #[test]
    fn test_topics_keep_bucket_order() {
        let analysis = analyze_message("استراتيجية شركة في الرياضيات والبرمجة");
        assert_eq!(analysis.topics, vec!["تقنية", "علوم", "أعمال"]);
        assert!(analyze_message("مرحبا").topics.is_empty());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let message = "ما معنى الحياة في عصر الذكاء اصطناعي؟";
        assert_eq!(analyze_message(message), analyze_message(message));
        assert_eq!(analyze_message(message).language, "ar");
    }
}
