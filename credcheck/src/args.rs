#[derive(gumdrop::Options, Debug)]
pub struct Args {
    /// print this message
    help: bool,

    /// a settings file to load, can be repeated (defaults to .env)
    #[options(meta = "PATH")]
    env_file: Vec<String>,
}

impl Args {
    /// The settings files to merge into the environment, in load order.
    pub fn env_files(&self) -> Vec<&str> {
        let mut files = if self.env_file.is_empty() {
            vec![".env"]
        } else {
            self.env_file.iter().map(String::as_str).collect()
        };
        files.push(".log.env");
        files
    }
}
