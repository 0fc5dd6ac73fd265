mod secret;
pub use secret::Secret;

mod env;
pub use env::{load_from, Assign, LoadFromEnv};

/// Client credentials for the Spotify accounts service.
#[derive(Clone, Debug, Default)]
pub struct Spotify {
    pub client_id: Option<String>,
    pub client_secret: Option<Secret<String>>,
    // only checked for presence, the client credentials flow never sends it
    pub redirect_uri: Option<String>,
}

impl Spotify {
    pub const CLIENT_ID: &'static str = "SPOTIFY_CLIENT_ID";
    pub const CLIENT_SECRET: &'static str = "SPOTIFY_CLIENT_SECRET";
    pub const REDIRECT_URI: &'static str = "SPOTIFY_REDIRECT_URI";

    pub fn missing(&self) -> Vec<&'static str> {
        [
            (Self::CLIENT_ID, self.client_id.is_none()),
            (Self::CLIENT_SECRET, self.client_secret.is_none()),
            (Self::REDIRECT_URI, self.redirect_uri.is_none()),
        ]
        .into_iter()
        .filter_map(|(key, missing)| missing.then_some(key))
        .collect()
    }
}

impl LoadFromEnv for Spotify {
    fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        load_from(
            lookup,
            &[
                (Self::CLIENT_ID, |t, v| t.client_id = Some(v)),
                (Self::CLIENT_SECRET, |t, v| {
                    t.client_secret = Some(Secret(v))
                }),
                (Self::REDIRECT_URI, |t, v| t.redirect_uri = Some(v)),
            ],
        )
    }
}

/// API key for the Groq inference service.
#[derive(Clone, Debug, Default)]
pub struct Groq {
    pub api_key: Option<Secret<String>>,
}

impl Groq {
    pub const API_KEY: &'static str = "GROQ_API_KEY";

    pub fn missing(&self) -> Vec<&'static str> {
        self.api_key
            .is_none()
            .then_some(Self::API_KEY)
            .into_iter()
            .collect()
    }
}

impl LoadFromEnv for Groq {
    fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        load_from(lookup, &[(Self::API_KEY, |t, v| t.api_key = Some(Secret(v)))])
    }
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub spotify: Spotify,
    pub groq: Groq,
}

impl LoadFromEnv for Config {
    fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            spotify: Spotify::load_from(&lookup),
            groq: Groq::load_from(&lookup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&str, &str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find_map(|(k, v)| (*k == key).then(|| v.to_string()))
        }
    }

    #[test]
    fn loads_everything() {
        let config = Config::load_from(lookup(&[
            ("SPOTIFY_CLIENT_ID", "id"),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
            ("SPOTIFY_REDIRECT_URI", "http://localhost:8888/callback"),
            ("GROQ_API_KEY", "gsk_key"),
        ]));

        assert_eq!(config.spotify.client_id.as_deref(), Some("id"));
        assert_eq!(
            config.spotify.client_secret.as_deref().map(String::as_str),
            Some("secret")
        );
        assert_eq!(
            config.spotify.redirect_uri.as_deref(),
            Some("http://localhost:8888/callback")
        );
        assert_eq!(
            config.groq.api_key.as_deref().map(String::as_str),
            Some("gsk_key")
        );
        assert!(config.spotify.missing().is_empty());
        assert!(config.groq.missing().is_empty());
    }

    #[test]
    fn nothing_set() {
        let config = Config::load_from(|_| None);
        assert_eq!(
            config.spotify.missing(),
            [
                Spotify::CLIENT_ID,
                Spotify::CLIENT_SECRET,
                Spotify::REDIRECT_URI
            ]
        );
        assert_eq!(config.groq.missing(), [Groq::API_KEY]);
    }

    #[test]
    fn empty_is_absent() {
        let spotify = Spotify::load_from(lookup(&[
            ("SPOTIFY_CLIENT_ID", "id"),
            ("SPOTIFY_CLIENT_SECRET", ""),
            ("SPOTIFY_REDIRECT_URI", "http://localhost:8888/callback"),
        ]));
        assert_eq!(spotify.missing(), [Spotify::CLIENT_SECRET]);
    }

    #[test]
    fn debug_output_is_redacted() {
        let groq = Groq::load_from(lookup(&[("GROQ_API_KEY", "gsk_very_secret")]));
        let out = format!("{groq:?}");
        assert!(!out.contains("gsk_very_secret"), "{out}");
        assert!(out.contains("{len = 15}"), "{out}");
    }
}
