/// Build the single user message sent for `word`
pub fn build_prompt(word: &str, language: &str) -> String {
    format!(
        r#"Provide a translation and explanation for the {language} word "{word}".

Respond ONLY with valid JSON, no markdown, no extra text:
{{
  "translation": "English translation (1-3 words)",
  "explanation": "Detailed explanation (1-2 sentences)"
}}"#
    )
}
