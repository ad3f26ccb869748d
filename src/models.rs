use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "english".to_string()
}

// Inbound generation request format
#[derive(Deserialize, Serialize, Clone)]
pub struct GenerateRequest {
    pub objective: String,
    pub tone: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub creativity: String,
    pub variants: u32,
}

// Outbound response format. Choices are the provider's choice objects,
// passed through unmodified.
#[derive(Deserialize, Serialize, Clone)]
pub struct GenerateResponse {
    pub message: String,
    pub status: String,
    pub choices: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_fills_defaults() {
        let req: GenerateRequest = serde_json::from_str(
            r#"{"objective":"Podcast","tone":"funny","variants":1}"#,
        )
        .unwrap();

        assert_eq!(req.language, "english");
        assert_eq!(req.keywords, "");
        assert_eq!(req.creativity, "");
        assert_eq!(req.variants, 1);
    }

    #[test]
    fn request_accepts_full_body() {
        let req: GenerateRequest = serde_json::from_str(
            r#"{"objective":"TV Commercials","tone":"serious","language":"french","keywords":"cars","creativity":"max","variants":3}"#,
        )
        .unwrap();

        assert_eq!(req.objective, "TV Commercials");
        assert_eq!(req.language, "french");
        assert_eq!(req.creativity, "max");
        assert_eq!(req.variants, 3);
    }
}
