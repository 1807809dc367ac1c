//! Every fixed string shown by the terminal pages, in both languages.

use crate::language::{Language, Localized};

/// Bilingual UI strings, looked up once per render with [`UiText::get`]
#[derive(Debug, Clone, Copy)]
pub struct UiText {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub navigation: &'static str,
    pub go_to: &'static str,
    pub switch_language: &'static str,
    pub quit: &'static str,
    pub home_body: &'static str,

    pub explorer_heading: &'static str,
    pub explorer_intro: &'static str,
    pub standard_label: &'static str,
    pub get_explanation: &'static str,
    pub generating_explanation: &'static str,
    pub explanation_heading: &'static str,

    pub tutorial_heading: &'static str,
    pub tutorial_intro: &'static str,
    pub tutorial_select: &'static str,
    pub enter_solution: &'static str,
    pub check_answer: &'static str,
    pub analyzing_answer: &'static str,
    pub feedback_heading: &'static str,
    pub expert_solution_heading: &'static str,
    pub feedback_error: &'static str,

    pub glossary_heading: &'static str,
    pub glossary_intro: &'static str,

    pub question_heading: &'static str,
    pub question_intro: &'static str,
    pub your_question: &'static str,
    pub get_answer: &'static str,
    pub generating_answer: &'static str,
    pub answer_heading: &'static str,

    pub multiline_hint: &'static str,
    pub empty_input: &'static str,
    pub error_label: &'static str,
}

impl UiText {
    pub fn get(language: Language) -> &'static UiText {
        TEXT.get(language)
    }
}

static TEXT: Localized<UiText> = Localized::new(
    UiText {
        app_title: "Islamic Finance Standards Simplified",
        app_subtitle: "Learn AAOIFI standards through simple examples",
        navigation: "Navigation",
        go_to: "Go to",
        switch_language: "Language / اللغة",
        quit: "Quit",
        home_body: "## Welcome to Islamic Finance Standards Simplified

This application helps you understand AAOIFI Financial Accounting Standards \
through simple explanations and practical examples.

### Features:
- Explore the five key standards: FAS 4, FAS 7, FAS 10, FAS 28, and FAS 32
- Learn through real-world examples and cases
- Interactive tutorials to test your understanding
- Multilingual support (English and Arabic)
- Ask custom questions about Islamic finance standards

Start by selecting a section from the menu!",

        explorer_heading: "AAOIFI Standards Explorer",
        explorer_intro: "Select a standard to learn more about it",
        standard_label: "Standard",
        get_explanation: "Get Explanation",
        generating_explanation: "Generating explanation...",
        explanation_heading: "Explanation",

        tutorial_heading: "Interactive Tutorial",
        tutorial_intro: "Test your understanding of Islamic finance standards",
        tutorial_select: "Select a standard for tutorial",
        enter_solution: "Enter your solution",
        check_answer: "Check My Answer",
        analyzing_answer: "Analyzing your answer...",
        feedback_heading: "Feedback",
        expert_solution_heading: "Expert Solution",
        feedback_error: "Error generating feedback",

        glossary_heading: "Islamic Finance Glossary",
        glossary_intro: "Key terms and concepts in Islamic finance",

        question_heading: "Ask Your Own Question",
        question_intro: "Ask any question about Islamic finance standards",
        your_question: "Your question",
        get_answer: "Get Answer",
        generating_answer: "Generating answer...",
        answer_heading: "Answer",

        multiline_hint: "(finish with an empty line)",
        empty_input: "Nothing entered.",
        error_label: "Error",
    },
    UiText {
        app_title: "تبسيط معايير التمويل الإسلامي",
        app_subtitle: "تعلم معايير هيئة المحاسبة والمراجعة للمؤسسات المالية الإسلامية من خلال أمثلة بسيطة",
        navigation: "التنقل",
        go_to: "اذهب إلى",
        switch_language: "Language / اللغة",
        quit: "خروج",
        home_body: "## مرحبًا بكم في تبسيط معايير التمويل الإسلامي

يساعدك هذا التطبيق على فهم معايير المحاسبة المالية لهيئة المحاسبة والمراجعة للمؤسسات المالية الإسلامية \
من خلال شروحات بسيطة وأمثلة عملية.

### الميزات:
- استكشاف المعايير الخمسة الرئيسية: FAS 4، FAS 7، FAS 10، FAS 28، و FAS 32
- التعلم من خلال أمثلة وحالات من العالم الحقيقي
- دروس تفاعلية لاختبار فهمك
- دعم متعدد اللغات (الإنجليزية والعربية)
- اطرح أسئلة مخصصة حول معايير التمويل الإسلامي

ابدأ باختيار قسم من القائمة!",

        explorer_heading: "مستكشف معايير هيئة المحاسبة والمراجعة للمؤسسات المالية الإسلامية",
        explorer_intro: "حدد معيارًا لمعرفة المزيد عنه",
        standard_label: "المعيار",
        get_explanation: "الحصول على شرح",
        generating_explanation: "جاري إنشاء الشرح...",
        explanation_heading: "الشرح",

        tutorial_heading: "الدروس التفاعلية",
        tutorial_intro: "اختبر فهمك لمعايير التمويل الإسلامي",
        tutorial_select: "اختر معيارًا للدرس",
        enter_solution: "أدخل حلك",
        check_answer: "تحقق من إجابتي",
        analyzing_answer: "تحليل إجابتك...",
        feedback_heading: "التعليق",
        expert_solution_heading: "حل الخبير",
        feedback_error: "خطأ في إنشاء التعليق",

        glossary_heading: "مصطلحات التمويل الإسلامي",
        glossary_intro: "المصطلحات والمفاهيم الرئيسية في التمويل الإسلامي",

        question_heading: "اطرح سؤالك الخاص",
        question_intro: "اطرح أي سؤال حول معايير التمويل الإسلامي",
        your_question: "سؤالك",
        get_answer: "الحصول على إجابة",
        generating_answer: "جاري إنشاء الإجابة...",
        answer_heading: "الإجابة",

        multiline_hint: "(أنهِ الإدخال بسطر فارغ)",
        empty_input: "لم يتم إدخال شيء.",
        error_label: "خطأ",
    },
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_headers_follow_the_language() {
        assert_eq!(UiText::get(Language::English).feedback_heading, "Feedback");
        assert_eq!(UiText::get(Language::Arabic).feedback_heading, "التعليق");
        assert_eq!(UiText::get(Language::English).feedback_error, "Error generating feedback");
    }

    #[test]
    fn home_text_lists_every_standard() {
        for language in Language::ALL {
            let body = UiText::get(language).home_body;
            for id in ["FAS 4", "FAS 7", "FAS 10", "FAS 28", "FAS 32"] {
                assert!(body.contains(id), "{language} home text is missing {id}");
            }
        }
    }
}
