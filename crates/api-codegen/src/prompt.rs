use codegen_openai::CompletionRequest;

pub const MAX_TOKENS: u32 = 150;

pub fn compose_prompt(language: &str, prompt: &str) -> String {
    format!("### Generate {language} code:\n\n{prompt}")
}

/// Deterministic sampling, a single choice, no stop sequence.
pub fn completion_request(model: &str, language: &str, prompt: &str) -> CompletionRequest {
    CompletionRequest {
        model: model.to_string(),
        prompt: compose_prompt(language, prompt),
        max_tokens: MAX_TOKENS,
        temperature: 0.0,
        top_p: 1.0,
        n: 1,
        stop: None,
    }
}
