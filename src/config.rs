//! Environment configuration.

use std::env;

#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub log_file: Option<String>,
    pub debug: bool,
    pub max_height: Option<usize>,
    pub quote_paste: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            log_file: env_string_opt("CODEAREA_LOG"),
            debug: env_flag("CODEAREA_DEBUG"),
            max_height: env_usize_opt("CODEAREA_MAX_HEIGHT"),
            quote_paste: env_flag("CODEAREA_QUOTE_PASTE"),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

fn env_usize_opt(key: &str) -> Option<usize> {
    env_string_opt(key)
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
}

#[cfg(test)]
mod tests {
    use super::EnvConfig;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                env::set_var(self.key, value);
            } else {
                env::remove_var(self.key);
            }
        }
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .expect("env lock poisoned")
    }

    fn set_env_guard(key: &'static str, value: Option<&str>) -> EnvGuard {
        let previous = env::var(key).ok();
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
        EnvGuard { key, previous }
    }

    #[test]
    fn env_defaults_are_off() {
        let _lock = env_lock();
        let _g1 = set_env_guard("CODEAREA_LOG", None);
        let _g2 = set_env_guard("CODEAREA_DEBUG", None);
        let _g3 = set_env_guard("CODEAREA_MAX_HEIGHT", None);
        let _g4 = set_env_guard("CODEAREA_QUOTE_PASTE", None);

        let config = EnvConfig::from_env();
        assert!(config.log_file.is_none());
        assert!(!config.debug);
        assert!(config.max_height.is_none());
        assert!(!config.quote_paste);
    }

    #[test]
    fn env_values_are_read() {
        let _lock = env_lock();
        let _g1 = set_env_guard("CODEAREA_LOG", Some("/tmp/codearea.log"));
        let _g2 = set_env_guard("CODEAREA_DEBUG", Some("1"));
        let _g3 = set_env_guard("CODEAREA_MAX_HEIGHT", Some(" 12 "));
        let _g4 = set_env_guard("CODEAREA_QUOTE_PASTE", Some("1"));

        let config = EnvConfig::from_env();
        assert_eq!(config.log_file.as_deref(), Some("/tmp/codearea.log"));
        assert!(config.debug);
        assert_eq!(config.max_height, Some(12));
        assert!(config.quote_paste);
    }

    #[test]
    fn bad_max_height_is_ignored() {
        let _lock = env_lock();
        let _g1 = set_env_guard("CODEAREA_MAX_HEIGHT", Some("tall"));
        assert!(EnvConfig::from_env().max_height.is_none());
        let _g2 = set_env_guard("CODEAREA_MAX_HEIGHT", Some("0"));
        assert!(EnvConfig::from_env().max_height.is_none());
    }

    #[test]
    fn empty_log_path_is_ignored() {
        let _lock = env_lock();
        let _g1 = set_env_guard("CODEAREA_LOG", Some("  "));
        assert!(EnvConfig::from_env().log_file.is_none());
    }
}
