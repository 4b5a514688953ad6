use serde::{Deserialize, Serialize};

/// Body of `POST /translate`.
///
/// Language codes are the short forms the service detects on posts
/// (`"en"`, `"es"`, ...); the server hands them to its translation
/// provider untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub src_lang: String,
    pub dest_lang: String,
}

/// Response of `POST /translate`: the translated text only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub text: String,
}
