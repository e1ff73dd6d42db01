//! Prompt construction for document review

/// Builds the review prompt sent to the completion provider
pub struct PromptBuilder<'a> {
    context: &'a str,
    document: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt over retrieved playbook context and the document under review
    pub fn new(context: &'a str, document: &'a str) -> Self {
        Self { context, document }
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::with_capacity(
            REVIEW_INSTRUCTIONS.len() + self.context.len() + self.document.len() + 128,
        );

        prompt.push_str(REVIEW_INSTRUCTIONS);
        prompt.push_str("\n\n");

        prompt.push_str("Playbook excerpts:\n");
        prompt.push_str("---\n");
        prompt.push_str(self.context);
        prompt.push_str("\n---\n\n");

        prompt.push_str("Document under review:\n");
        prompt.push_str("---\n");
        prompt.push_str(self.document);
        prompt.push_str("\n---\n\n");

        prompt.push_str(RESPONSE_FORMAT);
        prompt
    }
}

const REVIEW_INSTRUCTIONS: &str = r#"You are a contract reviewer. Compare the document under review against the company playbook excerpts below.

Identify:
1. Conflicts: statements in the document that contradict the playbook
2. Gaps: playbook requirements the document does not address
3. Irrelevant: document content that has no bearing on the playbook

Quote or paraphrase the relevant clauses. Be specific and concise."#;

const RESPONSE_FORMAT: &str = r#"Respond with exactly three bullet points and nothing else, in this order:
- Conflicts: <conflicts, or "none">
- Gaps: <gaps, or "none">
- Irrelevant: <irrelevant content, or "none">"#;
