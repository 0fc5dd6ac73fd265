pub type Assign<T> = fn(&mut T, String);

/// Builds `T` by looking up each key with `lookup`.
///
/// Keys that are absent or hold an empty string are left at their default.
pub fn load_from<T, F>(lookup: F, keys: &[(&str, Assign<T>)]) -> T
where
    T: Default + std::fmt::Debug,
    F: Fn(&str) -> Option<String>,
{
    log::trace!("loading env vars for: {}", std::any::type_name::<T>());

    let this = keys.iter().fold(T::default(), |mut this, &(key, func)| {
        log::trace!("looking up {key}");
        match lookup(key).filter(|val| !val.is_empty()) {
            Some(val) => func(&mut this, val),
            None => log::trace!("key '{key}' was not found"),
        }
        this
    });

    log::debug!("created: {:?}", this);
    this
}

pub trait LoadFromEnv
where
    Self: Sized,
{
    fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Self;

    fn load_from_env() -> Self {
        Self::load_from(|key| std::env::var(key).ok())
    }
}
