//! Environment overrides for tests that read `FIVECARD_*` variables.
//!
//! Tests using these helpers must be `#[serial]`.

pub(crate) struct EnvGuard {
    restores: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    /// Sets (`Some`) or removes (`None`) each variable until the guard drops.
    pub(crate) fn apply(pairs: &[(&'static str, Option<&str>)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            restores.push((*key, std::env::var(key).ok()));
            // SAFETY: tests touching the environment are #[serial]
            unsafe {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
        EnvGuard { restores }
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

const ALL_VARS: [&str; 4] = [
    "FIVECARD_CONFIG",
    "FIVECARD_SEED",
    "FIVECARD_SIM_HANDS",
    "FIVECARD_FORMAT",
];

/// Removes every `FIVECARD_*` variable for the lifetime of the guard.
pub(crate) fn cleared() -> EnvGuard {
    let pairs: Vec<(&'static str, Option<&str>)> = ALL_VARS.iter().map(|k| (*k, None)).collect();
    EnvGuard::apply(&pairs)
}
