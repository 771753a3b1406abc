//! Shared helpers for the `run` integration tests.

/// Sets or removes environment variables until dropped.
///
/// Tests using this guard must be `#[serial]`.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&str, Option<&str>)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            let previous = std::env::var(key).ok();
            // SAFETY: tests touching the environment are #[serial]
            unsafe {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
            restores.push((key.to_string(), previous));
        }
        EnvGuard { restores }
    }

    /// Clears every `FIVECARD_*` variable, then applies `pairs`.
    pub fn with_clean_env(pairs: &[(&str, Option<&str>)]) -> Self {
        let mut all: Vec<(&str, Option<&str>)> = [
            "FIVECARD_CONFIG",
            "FIVECARD_SEED",
            "FIVECARD_SIM_HANDS",
            "FIVECARD_FORMAT",
        ]
        .iter()
        .map(|k| (*k, None))
        .collect();
        all.extend_from_slice(pairs);
        Self::apply(&all)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            // SAFETY: see EnvGuard::apply
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
