//! Prompt texts, thinking traces and canned replies for the 3RB assistant.

/// Apology used when Gemini answers without any candidate text.
pub const EMPTY_REPLY: &str = "عذراً، لم أتمكن من توليد إجابة.";

/// Error message returned for a missing or malformed `message`.
pub const INVALID_MESSAGE: &str = "رسالة غير صحيحة";

/// Error message returned when the request could not be processed.
pub const PROCESSING_ERROR: &str = "حدث خطأ في معالجة طلبك";

/// Reply text the client can show when the request could not be processed.
pub const PROCESSING_FALLBACK: &str = "عذراً، أواجه مشكلة تقنية حالياً. يرجى المحاولة مرة أخرى.";

const SYSTEM_PROMPT_HEAD: &str = "أنت 3RB، وكيل الذكاء الاصطناعي العام المطور في سلطنة عمان.

🌟 هويتك:
- نموذج ذكي متقدم يجمع بين قدرات Claude 3.5 Sonnet وQwen
- متخصص في التحليل العميق والتفكير الفلسفي
- مطور بتقنيات SOTA (State of the Art)

🧠 قدراتك الفريدة:
- التفكير العميق: تحليل فلسفي ومنطقي شامل
- البحث المتقدم: الوصول للمعلومات العالمية
- البرمجة: تطوير الكود باستخدام Pointer CLI
- الإبداع: الكتابة والتصميم والابتكار
- التحليل: معالجة البيانات والإحصائيات

🎯 مبادئك:
- تقديم إجابات شاملة ومتعمقة
- استخدام التفكير الفلسفي والمنطقي
- دعم اللغة العربية بشكل كامل
- خدمة المجتمع العماني والعربي
";

const SYSTEM_PROMPT_TAIL: &str = "يرجى الإجابة بشكل شامل ومفصل، مع إظهار عملية التفكير عند الحاجة.";

/// System prompt for chat-style providers, with optional conversation context.
pub fn system_prompt(context: Option<&str>) -> String {
    let context_line = context
        .map(|context| format!("\n📋 السياق الإضافي: {}", context))
        .unwrap_or_default();
    format!("{}\n{}\n\n{}", SYSTEM_PROMPT_HEAD, context_line, SYSTEM_PROMPT_TAIL)
}

/// Single-turn prompt for providers without a separate system role.
pub fn compact_prompt(context: Option<&str>, message: &str) -> String {
    format!(
        "أنت 3RB، وكيل الذكاء الاصطناعي العام من سلطنة عمان. {}\n\nالسؤال: {}",
        context.unwrap_or_default(),
        message
    )
}

/// Length of `text` in UTF-16 code units, the unit the chat client measures in.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Longest prefix of `text` that fits in `max_units` UTF-16 code units.
///
/// Never splits a surrogate pair.
pub fn text_prefix(text: &str, max_units: usize) -> &str {
    let mut units = 0;
    for (offset, ch) in text.char_indices() {
        units += ch.len_utf16();
        if units > max_units {
            return &text[..offset];
        }
    }
    text
}

/// Number of thinking-trace templates to choose from.
pub const THINKING_TEMPLATE_COUNT: usize = 2;

/// Render thinking-trace template `index` for `message`.
///
/// Indexes past the last template wrap around.
pub fn thinking_trace(index: usize, message: &str) -> String {
    match index % THINKING_TEMPLATE_COUNT {
        0 => {
            let excerpt = text_prefix(message, 50);
            let kind = if message.contains('؟') { "سؤال" } else { "طلب" };
            let level = if text_length(message) > 100 {
                "متقدم"
            } else {
                "متوسط"
            };
            format!(
                "🧠 **تحليل الطلب والتفكير العميق:**

🔍 **مرحلة الفهم:**
- تحليل السياق: {excerpt}...
- تحديد نوع الاستفسار: {kind}
- مستوى التعقيد: {level}

⚡ **مرحلة المعالجة:**
- البحث في قاعدة المعرفة الشاملة
- تطبيق خوارزميات 3RB المتقدمة
- دمج المعلومات من مصادر متعددة

✨ **مرحلة التركيب:**
- بناء إجابة متكاملة ومفصلة
- التحقق من الدقة والاتساق
- إضافة البعد الفلسفي والعملي

🎯 **النتيجة:** جاهز لتقديم إجابة شاملة ومتعمقة"
            )
        }
        _ => "🤔 **عملية التفكير المتقدمة:**

📊 **تحليل البيانات:**
- استخراج الكلمات المفتاحية
- تحديد السياق والمجال
- تقييم مستوى التخصص المطلوب

🔬 **البحث والاستكشاف:**
- مراجعة قاعدة المعرفة
- ربط المفاهيم المترابطة
- استكشاف الزوايا المختلفة

🎨 **التركيب الإبداعي:**
- دمج المعلومات بطريقة مبتكرة
- إضافة رؤى جديدة
- تقديم حلول عملية

✅ **التحقق والتأكيد:**
- مراجعة الدقة والاتساق
- التأكد من الشمولية
- ضمان الوضوح والفهم"
            .to_string(),
    }
}

/// Canned reply categories, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackKind {
    Greeting,
    Programming,
    Philosophy,
    Default,
}

const FALLBACK_KEYWORDS: &[(FallbackKind, &[&str])] = &[
    (FallbackKind::Greeting, &["مرحب", "السلام", "أهلا"]),
    (FallbackKind::Programming, &["برمج", "كود", "تطوير"]),
    (FallbackKind::Philosophy, &["فلسف", "معنى", "وجود"]),
];

impl FallbackKind {
    /// Pick the canned reply for a message; the first matching category wins.
    pub fn classify(message: &str) -> Self {
        let lowered = message.to_lowercase();
        FALLBACK_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
            .map(|(kind, _)| *kind)
            .unwrap_or(FallbackKind::Default)
    }

    pub fn reply(self) -> &'static str {
        match self {
            FallbackKind::Greeting => GREETING_REPLY,
            FallbackKind::Programming => PROGRAMMING_REPLY,
            FallbackKind::Philosophy => PHILOSOPHY_REPLY,
            FallbackKind::Default => DEFAULT_REPLY,
        }
    }
}

const GREETING_REPLY: &str = "مرحباً! أنا 3RB، وكيل الذكاء الاصطناعي العام من سلطنة عمان.

🌟 **أستطيع مساعدتك في:**
- الإجابة على الأسئلة المعقدة
- التحليل والتفكير العميق
- البرمجة والتطوير
- الكتابة والإبداع
- حل المشكلات

كيف يمكنني مساعدتك اليوم؟";

const PROGRAMMING_REPLY: &str = "بالطبع! أستطيع مساعدتك في البرمجة.

💻 **خبراتي تشمل:**
- Python, JavaScript, TypeScript
- React, Next.js, Node.js
- قواعد البيانات SQL وNoSQL
- تطوير التطبيقات الحديثة

🛠️ **أدواتي:**
- Pointer CLI للتطوير السريع
- GitHub Integration
- AI-Powered Coding

ما نوع المساعدة البرمجية التي تحتاجها؟";

const PHILOSOPHY_REPLY: &str = "سؤال فلسفي عميق يستحق التأمل...

🤔 **من منظور فلسفي:**
كل سؤال فلسفي يفتح أبواباً جديدة للفهم والاستكشاف.

🌟 **منهجي في التفكير:**
- التحليل المنطقي
- الاستكشاف الوجودي
- الربط بين المفاهيم
- البحث عن المعنى العميق

دعني أتأمل في سؤالك وأقدم لك رؤية شاملة...";

const DEFAULT_REPLY: &str = "شكراً لك على سؤالك المثير للاهتمام!

🧠 **كوكيل ذكي متقدم، أقدم لك:**
- تحليل شامل ومتعمق
- رؤى مبتكرة وعملية
- حلول مخصصة لاحتياجاتك
- دعم كامل باللغة العربية

يرجى إعادة صياغة سؤالك أو تقديم المزيد من التفاصيل لأتمكن من مساعدتك بشكل أفضل.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_scan_order() {
        assert_eq!(FallbackKind::classify("مرحبا"), FallbackKind::Greeting);
        assert_eq!(FallbackKind::classify("السلام عليكم، أريد كود"), FallbackKind::Greeting);
        assert_eq!(FallbackKind::classify("أحتاج كود عن معنى الوجود"), FallbackKind::Programming);
        assert_eq!(FallbackKind::classify("ما معنى الحياة"), FallbackKind::Philosophy);
        assert_eq!(FallbackKind::classify("كم الساعة"), FallbackKind::Default);
        assert_eq!(FallbackKind::classify(""), FallbackKind::Default);
    }

    #[test]
    fn test_replies_are_distinct() {
        let replies = [
            FallbackKind::Greeting.reply(),
            FallbackKind::Programming.reply(),
            FallbackKind::Philosophy.reply(),
            FallbackKind::Default.reply(),
        ];
        for (i, a) in replies.iter().enumerate() {
            for b in &replies[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_system_prompt_context() {
        let without = system_prompt(None);
        assert!(!without.contains("السياق الإضافي"));
        assert!(without.ends_with(SYSTEM_PROMPT_TAIL));

        let with = system_prompt(Some("user: مرحبا"));
        assert!(with.contains("📋 السياق الإضافي: user: مرحبا"));
    }

    #[test]
    fn test_compact_prompt() {
        let prompt = compact_prompt(None, "ما هو الذكاء؟");
        assert!(prompt.ends_with("\n\nالسؤال: ما هو الذكاء؟"));
    }

    #[test]
    fn test_first_thinking_template_reflects_message() {
        let question = thinking_trace(0, "لماذا السماء زرقاء؟");
        assert!(question.contains("تحديد نوع الاستفسار: سؤال"));
        assert!(question.contains("مستوى التعقيد: متوسط"));

        let long_request = "ا".repeat(120);
        let trace = thinking_trace(0, &long_request);
        assert!(trace.contains("تحديد نوع الاستفسار: طلب"));
        assert!(trace.contains("مستوى التعقيد: متقدم"));
        assert!(trace.contains(&format!("تحليل السياق: {}...", "ا".repeat(50))));
    }

    #[test]
    fn test_lengths_use_utf16_units() {
        assert_eq!(text_length("مرحبا"), 5);
        assert_eq!(text_length("😀"), 2);
        assert_eq!(text_prefix("ab😀c", 3), "ab");
        assert_eq!(text_prefix("ab😀c", 4), "ab😀");
        assert_eq!(text_prefix("abc", 50), "abc");
    }

    #[test]
    fn test_emoji_message_counts_as_long() {
        // 60 emoji are 120 code units; the excerpt keeps the first 50.
        let trace = thinking_trace(0, &"😀".repeat(60));
        assert!(trace.contains("مستوى التعقيد: متقدم"));
        assert!(trace.contains(&format!("تحليل السياق: {}...", "😀".repeat(25))));
    }

    #[test]
    fn test_thinking_index_wraps() {
        assert_eq!(thinking_trace(1, "x"), thinking_trace(3, "x"));
        assert_ne!(thinking_trace(0, "x"), thinking_trace(1, "x"));
    }
}
