use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_tracklist_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("TRACKLIST_CONFIG_PATH", "/tmp/tracklist-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/tracklist-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("tracklist")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("tracklist")
            .join("config.toml")
    );
}

#[test]
fn settings_default_when_no_file_or_env_present() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("TRACKLIST_CONFIG_PATH", "/nonexistent/tracklist.toml");
    let _g2 = EnvGuard::remove("TRACKLIST__QUEUE__PEEK_AMOUNT");
    let _g3 = EnvGuard::remove("TRACKLIST__QUEUE__MAX_BATCH");

    let s = Settings::load().unwrap();
    assert_eq!(s.queue.peek_amount, 5);
    assert_eq!(s.queue.max_batch, 0);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[queue]
peek_amount = 8
max_batch = 50
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TRACKLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("TRACKLIST__QUEUE__PEEK_AMOUNT");
    let _g3 = EnvGuard::remove("TRACKLIST__QUEUE__MAX_BATCH");

    let s = Settings::load().unwrap();
    assert_eq!(s.queue.peek_amount, 8);
    assert_eq!(s.queue.max_batch, 50);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[queue]
peek_amount = 8
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TRACKLIST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("TRACKLIST__QUEUE__PEEK_AMOUNT", "12");

    let s = Settings::load().unwrap();
    assert_eq!(s.queue.peek_amount, 12);
}

#[test]
fn validate_rejects_zero_peek_amount() {
    let mut s = Settings::default();
    s.queue.peek_amount = 0;
    assert!(s.validate().is_err());
}
