use credcheck::Args;
use credcheck_config::{Config, LoadFromEnv as _};
use gumdrop::Options as _;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args_default_or_exit();

    credcheck::load_env_files(args.env_files());
    alto_logger::TermLogger::new(
        alto_logger::Options::default()
            .with_time(alto_logger::TimeConfig::relative_now())
            .with_style(alto_logger::StyleConfig::SingleLine),
    )?
    .init()?;

    log::info!("loading configuration");
    let config = Config::load_from_env();

    let mut stdout = std::io::stdout().lock();
    match credcheck::check(config, &mut stdout).await {
        Ok(summary) => log::debug!("all valid: {}", summary.all_valid()),
        // the exit code never reflects the outcome of the check
        Err(err) => log::error!("cannot check credentials: {err:#}"),
    }

    Ok(())
}
