use credcheck_config::Spotify;
use credcheck_core::{probe, Validation, Validator};

const BASE_URL: &str = "https://accounts.spotify.com";

/// Checks Spotify client credentials by requesting a client credentials token.
#[derive(Clone)]
pub struct SpotifyValidator {
    agent: reqwest::Client,
    config: Spotify,
    base: Option<String>,
}

impl SpotifyValidator {
    pub fn new(config: Spotify) -> anyhow::Result<Self> {
        Self::new_with_ep(Option::<String>::None, config)
    }

    pub fn new_with_ep(ep: impl Into<Option<String>>, config: Spotify) -> anyhow::Result<Self> {
        Ok(Self {
            agent: credcheck_core::http_client()?,
            config,
            base: ep.into(),
        })
    }

    fn token_url(&self) -> String {
        format!("{}/api/token", self.base.as_deref().unwrap_or(BASE_URL))
    }
}

#[async_trait::async_trait]
impl Validator for SpotifyValidator {
    fn service(&self) -> &'static str {
        "Spotify"
    }

    async fn validate(&self) -> Validation {
        let Spotify {
            client_id: Some(client_id),
            client_secret: Some(client_secret),
            redirect_uri: Some(_),
        } = &self.config
        else {
            return Validation::missing(self.config.missing());
        };

        let url = self.token_url();
        log::debug!("requesting a client credentials token from {url}");

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
        ];
        probe(self.agent.post(url).form(&form)).await
    }
}
