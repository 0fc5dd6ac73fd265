use reqwest::StatusCode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Valid,
    MissingConfig { missing: Vec<&'static str> },
    Rejected { status: StatusCode, detail: String },
    TransportError(String),
}

impl Validation {
    pub fn missing(missing: Vec<&'static str>) -> Self {
        Self::MissingConfig { missing }
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn outcome<'a>(&'a self, service: &'a str) -> Outcome<'a> {
        Outcome {
            service,
            validation: self,
        }
    }
}

/// The console lines describing a [`Validation`] for a named service.
pub struct Outcome<'a> {
    service: &'a str,
    validation: &'a Validation,
}

impl std::fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let service = self.service;
        match self.validation {
            Validation::Valid => write!(f, "✅ {service} credentials are valid"),

            Validation::MissingConfig { missing } => {
                write!(f, "❌ Missing {service} credentials in .env file")?;
                if !missing.is_empty() {
                    write!(f, "\nMissing: {}", missing.join(", "))?;
                }
                Ok(())
            }

            Validation::Rejected { status, detail } => {
                write!(
                    f,
                    "❌ {service} credentials invalid. Status: {}",
                    status.as_u16()
                )?;
                if !detail.is_empty() {
                    write!(f, "\nResponse: {detail}")?;
                }
                Ok(())
            }

            Validation::TransportError(err) => {
                write!(f, "❌ Error checking {service} credentials: {err}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        let line = Validation::Valid.outcome("Spotify").to_string();
        insta::assert_snapshot!(line, @"✅ Spotify credentials are valid");
    }

    #[test]
    fn transport_error() {
        let line = Validation::TransportError(String::from("connection refused"))
            .outcome("Groq")
            .to_string();
        insta::assert_snapshot!(line, @"❌ Error checking Groq credentials: connection refused");
    }

    #[test]
    fn missing_lists_keys() {
        let validation = Validation::missing(vec!["SPOTIFY_CLIENT_ID", "SPOTIFY_REDIRECT_URI"]);
        assert!(!validation.is_valid());
        assert_eq!(
            validation.outcome("Spotify").to_string(),
            "❌ Missing Spotify credentials in .env file\n\
             Missing: SPOTIFY_CLIENT_ID, SPOTIFY_REDIRECT_URI"
        );
    }

    #[test]
    fn rejected_with_and_without_body() {
        let validation = Validation::Rejected {
            status: StatusCode::UNAUTHORIZED,
            detail: String::from(r#"{"error":"invalid_client"}"#),
        };
        assert_eq!(
            validation.outcome("Spotify").to_string(),
            "❌ Spotify credentials invalid. Status: 401\n\
             Response: {\"error\":\"invalid_client\"}"
        );

        let validation = Validation::Rejected {
            status: StatusCode::FORBIDDEN,
            detail: String::new(),
        };
        insta::assert_snapshot!(
            validation.outcome("Groq").to_string(),
            @"❌ Groq credentials invalid. Status: 403"
        );
    }
}
