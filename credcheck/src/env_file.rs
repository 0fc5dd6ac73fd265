use std::path::Path;

/// Merges each settings file into the process environment, in order.
///
/// Variables that are already set are kept, so an exported shell value
/// wins over the file and the first file to name a key wins over later ones.
/// Files that cannot be read are skipped.
pub fn load_env_files<I>(paths: I)
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(data) => {
                simple_env_load::parse_and_set(&data, set_if_unset);
            }
            Err(err) => log::trace!("skipping {}: {err}", path.display()),
        }
    }
}

fn set_if_unset(key: &str, val: &str) {
    if std::env::var_os(key).is_none() {
        std::env::set_var(key, val)
    }
}
