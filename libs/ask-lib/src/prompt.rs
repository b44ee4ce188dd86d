/// Instruction prepended to every question sent to the model.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant. Provide structured answers with clear sections like:\n\
- Required documents\n\
- Passport requirements\n\
- Additional notes\n\
- Travel advisories\n";

pub const USER_QUESTION_LABEL: &str = "User Question: ";

/// Builds the full prompt for an already trimmed question.
pub fn build_prompt(question: &str) -> String {
    format!("{SYSTEM_PROMPT}\n{USER_QUESTION_LABEL}{question}")
}
