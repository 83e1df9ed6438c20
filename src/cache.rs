use std::path::PathBuf;
use std::sync::RwLock;

static CACHE_DIR: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Environment variable that overrides the default cache location.
pub const CACHE_ENV: &str = "STDGRIMMSIM_CACHE_DIR";

/// Set the directory used for downloaded resources. `None` restores the
/// default location.
pub fn set_cache_dir(path: Option<PathBuf>) {
    let mut guard = CACHE_DIR.write().unwrap_or_else(|e| e.into_inner());
    *guard = path;
}

pub fn get_cache_dir() -> PathBuf {
    let guard = CACHE_DIR.read().unwrap_or_else(|e| e.into_inner());
    guard.clone().unwrap_or_else(default_cache_dir)
}

fn default_cache_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CACHE_ENV) {
        return PathBuf::from(dir);
    }
    let base = std::env::var_os("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".cache")))
        .unwrap_or_else(std::env::temp_dir);
    base.join("stdgrimmsim").join(env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins_until_reset() {
        set_cache_dir(Some(PathBuf::from("/some/cache_dir")));
        assert_eq!(get_cache_dir(), PathBuf::from("/some/cache_dir"));
        set_cache_dir(None);
        assert_ne!(get_cache_dir(), PathBuf::from("/some/cache_dir"));
    }
}
