use credcheck_config::Groq;
use credcheck_core::{probe, Validation, Validator};

const BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Checks a Groq API key by listing the available models.
#[derive(Clone)]
pub struct GroqValidator {
    agent: reqwest::Client,
    config: Groq,
    base: Option<String>,
}

impl GroqValidator {
    pub fn new(config: Groq) -> anyhow::Result<Self> {
        Self::new_with_ep(Option::<String>::None, config)
    }

    pub fn new_with_ep(ep: impl Into<Option<String>>, config: Groq) -> anyhow::Result<Self> {
        Ok(Self {
            agent: credcheck_core::http_client()?,
            config,
            base: ep.into(),
        })
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.base.as_deref().unwrap_or(BASE_URL))
    }
}

#[async_trait::async_trait]
impl Validator for GroqValidator {
    fn service(&self) -> &'static str {
        "Groq"
    }

    async fn validate(&self) -> Validation {
        let Some(api_key) = &self.config.api_key else {
            return Validation::missing(self.config.missing());
        };

        let url = self.models_url();
        log::debug!("listing models from {url}");
        probe(self.agent.get(url).bearer_auth(&**api_key)).await
    }
}
