//! Models offered to the chat client.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Fast,
    Medium,
    Slow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    High,
    Medium,
    Basic,
}

/// A selectable model as shown in the client's model picker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub provider: &'static str,
    pub capabilities: &'static [&'static str],
    pub speed: Speed,
    pub quality: Quality,
    pub max_tokens: u32,
    pub is_active: bool,
}

const MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "groq-llama-70b",
        name: "Groq Llama 3.1 70B",
        description: "نموذج متقدم للمحادثات العامة والتحليل العميق",
        provider: "Groq",
        capabilities: &["محادثة", "تحليل", "برمجة", "كتابة"],
        speed: Speed::Fast,
        quality: Quality::High,
        max_tokens: 8000,
        is_active: true,
    },
    ModelInfo {
        id: "gemini-pro",
        name: "Google Gemini Pro",
        description: "نموذج Google المتقدم للمهام المعقدة",
        provider: "Google",
        capabilities: &["تحليل", "إبداع", "بحث", "ترجمة"],
        speed: Speed::Medium,
        quality: Quality::High,
        max_tokens: 4000,
        is_active: true,
    },
    ModelInfo {
        id: "deepseek-coder",
        name: "DeepSeek Coder",
        description: "متخصص في البرمجة والتطوير التقني",
        provider: "DeepSeek",
        capabilities: &["برمجة", "تطوير", "مراجعة كود", "تصحيح"],
        speed: Speed::Fast,
        quality: Quality::High,
        max_tokens: 6000,
        is_active: true,
    },
    ModelInfo {
        id: "3rb-custom",
        name: "3RB Custom Model",
        description: "نموذج مخصص محسن للثقافة العربية",
        provider: "3RB AI",
        capabilities: &["عربي", "ثقافة", "تاريخ", "أدب"],
        speed: Speed::Medium,
        quality: Quality::High,
        max_tokens: 5000,
        is_active: true,
    },
];

/// All models, in display order.
pub fn list_models() -> &'static [ModelInfo] {
    MODELS
}

/// Look up a model by id.
pub fn find_model(id: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|model| model.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let models = list_models();
        assert_eq!(models.len(), 4);
        assert!(models.iter().all(|m| m.is_active));
        assert_eq!(find_model("gemini-pro").map(|m| m.max_tokens), Some(4000));
        assert!(find_model("gpt-4").is_none());
    }

    #[test]
    fn test_wire_format() {
        let value = serde_json::to_value(find_model("groq-llama-70b").unwrap()).unwrap();
        assert_eq!(value["maxTokens"], 8000);
        assert_eq!(value["isActive"], true);
        assert_eq!(value["speed"], "fast");
        assert_eq!(value["capabilities"][2], "برمجة");
    }
}
