//! Parallel English/Arabic prompt templates, one table per intent.
//!
//! Role instructions are fixed literals; task instructions are rendered by a
//! function per language so substitution stays typed.

use super::composer::{CustomQuestion, ExplainStandard, GradeAnswer};
use crate::language::Localized;

pub type ExplainRenderer = for<'a> fn(&ExplainStandard<'a>) -> String;
pub type GradeRenderer = for<'a> fn(&GradeAnswer<'a>) -> String;
pub type QuestionRenderer = for<'a> fn(&CustomQuestion<'a>) -> String;

/// Role instruction plus a task renderer for each language
pub struct IntentTemplates<R: 'static> {
    pub role: Localized<&'static str>,
    pub task: Localized<R>,
}

pub static EXPLAIN: IntentTemplates<ExplainRenderer> = IntentTemplates {
    role: Localized::new(
        "You are an expert in Islamic Finance standards, particularly AAOIFI standards. \
         Explain the accounting treatment for the given scenario in simple terms that a non-specialist can understand. \
         Use step-by-step explanations and include the journal entries where appropriate.",
        "أنت خبير في معايير التمويل الإسلامي، خاصة معايير هيئة المحاسبة والمراجعة للمؤسسات المالية الإسلامية. \
         قم بشرح المعالجة المحاسبية للسيناريو المعطى بمصطلحات بسيطة يمكن لغير المتخصص فهمها. \
         استخدم شرحًا خطوة بخطوة وقم بتضمين قيود اليومية حيثما كان ذلك مناسبًا.",
    ),
    task: Localized::new(explain_task_en as ExplainRenderer, explain_task_ar),
};

pub static GRADE: IntentTemplates<GradeRenderer> = IntentTemplates {
    role: Localized::new(
        "You are an expert in Islamic Finance standards. \
         Compare the user's solution to an expert solution and provide feedback.",
        "أنت خبير في معايير التمويل الإسلامي. قارن حل المستخدم بحل الخبير وقدم تعليقات.",
    ),
    task: Localized::new(grade_task_en as GradeRenderer, grade_task_ar),
};

pub static QUESTION: IntentTemplates<QuestionRenderer> = IntentTemplates {
    role: Localized::new(
        "You are an expert in Islamic Finance standards, particularly AAOIFI standards.",
        "أنت خبير في معايير التمويل الإسلامي، خاصة معايير هيئة المحاسبة والمراجعة للمؤسسات المالية الإسلامية.",
    ),
    task: Localized::new(question_task_en as QuestionRenderer, question_task_ar),
};

fn explain_task_en(vars: &ExplainStandard<'_>) -> String {
    format!(
        "Standard: {title}\n\n\
         Scenario: {scenario}\n\n\
         Please explain:\n\
         1. What this standard is about\n\
         2. How to account for this transaction step-by-step\n\
         3. The proper journal entries\n\
         4. Why this method complies with Islamic finance principles",
        title = vars.standard_title,
        scenario = vars.scenario,
    )
}

fn explain_task_ar(vars: &ExplainStandard<'_>) -> String {
    format!(
        "المعيار: {title}\n\n\
         السيناريو: {scenario}\n\n\
         يرجى شرح:\n\
         1. ما هو هذا المعيار\n\
         2. كيفية المحاسبة عن هذه المعاملة خطوة بخطوة\n\
         3. قيود اليومية المناسبة\n\
         4. لماذا تتوافق هذه الطريقة مع مبادئ التمويل الإسلامي",
        title = vars.standard_title,
        scenario = vars.scenario,
    )
}

fn grade_task_en(vars: &GradeAnswer<'_>) -> String {
    format!(
        "Scenario: {scenario}\n\n\
         User's solution:\n{user}\n\n\
         Expert solution:\n{expert}\n\n\
         Provide feedback on the user's solution. Highlight what they got correct and what needs improvement.\n\
         Rate their understanding on a scale of 1-10.",
        scenario = vars.scenario,
        user = vars.user_solution,
        expert = vars.expert_solution,
    )
}

fn grade_task_ar(vars: &GradeAnswer<'_>) -> String {
    format!(
        "السيناريو: {scenario}\n\n\
         حل المستخدم:\n{user}\n\n\
         حل الخبير:\n{expert}\n\n\
         قدم تعليقات على حل المستخدم. سلط الضوء على ما أصابوه بشكل صحيح وما يحتاج إلى تحسين.\n\
         قيّم فهمهم على مقياس من 1 إلى 10.",
        scenario = vars.scenario,
        user = vars.user_solution,
        expert = vars.expert_solution,
    )
}

fn question_task_en(vars: &CustomQuestion<'_>) -> String {
    format!(
        "The user has asked the following question about Islamic Finance:\n\n\
         {question}\n\n\
         Provide a clear, detailed answer using your knowledge of Islamic finance principles and standards.\n\
         Reference specific AAOIFI standards when relevant. Make your explanation easy for non-specialists to understand.",
        question = vars.question,
    )
}

fn question_task_ar(vars: &CustomQuestion<'_>) -> String {
    format!(
        "طرح المستخدم السؤال التالي حول التمويل الإسلامي:\n\n\
         {question}\n\n\
         قدم إجابة واضحة ومفصلة باستخدام معرفتك بمبادئ ومعايير التمويل الإسلامي.\n\
         أشر إلى معايير هيئة المحاسبة والمراجعة للمؤسسات المالية الإسلامية المحددة عندما يكون ذلك ذا صلة. اجعل شرحك سهلاً لغير المتخصصين لفهمه.",
        question = vars.question,
    )
}
