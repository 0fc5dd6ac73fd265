use std::io::Write;

use credcheck_config::Config;
use credcheck_core::report::{self, Summary};
use credcheck_groq::GroqValidator;
use credcheck_spotify::SpotifyValidator;

mod args;
pub use args::Args;

mod env_file;
pub use env_file::load_env_files;

/// Base urls for the services, `None` uses the real endpoint.
#[derive(Clone, Debug, Default)]
pub struct Endpoints {
    pub spotify: Option<String>,
    pub groq: Option<String>,
}

/// Validates the Spotify credentials and then the Groq key, writing the report to `out`.
pub async fn check<W>(config: Config, out: &mut W) -> anyhow::Result<Summary>
where
    W: Write + ?Sized,
{
    check_against(config, Endpoints::default(), out).await
}

pub async fn check_against<W>(
    config: Config,
    endpoints: Endpoints,
    out: &mut W,
) -> anyhow::Result<Summary>
where
    W: Write + ?Sized,
{
    let spotify = SpotifyValidator::new_with_ep(endpoints.spotify, config.spotify)?;
    let groq = GroqValidator::new_with_ep(endpoints.groq, config.groq)?;
    report::run(out, &[&spotify, &groq]).await
}
