//! CLI configuration, a thin wrapper around `fsremote_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (`--device`, `--timeout`, `--profile`).

use fsremote_core::RemoteConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use fsremote_config::{
    Config, Profile, config_path, load_config, profile_to_remote_config, save_config,
    timeout_from_secs,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .unwrap_or_else(|| config.active_profile_name())
}

/// Build the `RemoteConfig` for device-bound commands.
///
/// Flags beat the profile, the profile beats `[defaults]`. Without a
/// matching profile, `--device` alone is enough.
pub fn resolve(global: &GlobalOpts, config: &Config) -> Result<RemoteConfig, CliError> {
    let name = active_profile_name(global, config);

    let base = match config.profiles.get(&name) {
        Some(profile) => {
            let mut profile = profile.clone();
            if let Some(ref device) = global.device {
                profile.device.clone_from(device);
            }
            profile_to_remote_config(&profile, &config.defaults)?
        }
        None => {
            let Some(ref device) = global.device else {
                return Err(missing_profile(global, config, name));
            };
            let adhoc = Profile {
                device: device.clone(),
                timeout: None,
                volume_step: None,
            };
            profile_to_remote_config(&adhoc, &config.defaults)?
        }
    };

    Ok(match global.timeout {
        Some(secs) => RemoteConfig {
            timeout: timeout_from_secs(secs),
            ..base
        },
        None => base,
    })
}

fn missing_profile(global: &GlobalOpts, config: &Config, name: String) -> CliError {
    // An explicitly requested profile that does not exist is a lookup
    // failure; an empty config just needs a device.
    if global.profile.is_some() || !config.profiles.is_empty() {
        let names = config.profile_names();
        CliError::ProfileNotFound {
            name,
            available: if names.is_empty() {
                "(none)".into()
            } else {
                names.join(", ")
            },
        }
    } else {
        CliError::NoConfig {
            path: config_path().display().to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["fsremote"];
        argv.extend_from_slice(args);
        argv.push("status");
        Cli::try_parse_from(argv).unwrap().global
    }

    fn with_kitchen() -> Config {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                device: "http://192.168.1.40/".into(),
                timeout: Some(5),
                volume_step: Some(2),
            },
        );
        cfg
    }

    #[test]
    fn profile_values_are_used() {
        let remote = resolve(&global(&[]), &with_kitchen()).unwrap();
        assert_eq!(remote.url.as_str(), "http://192.168.1.40/");
        assert_eq!(remote.timeout, Some(Duration::from_secs(5)));
        assert_eq!(remote.volume_step, 2);
    }

    #[test]
    fn flags_override_profile() {
        let remote = resolve(
            &global(&["--device", "http://10.0.0.2:8080/", "--timeout", "0"]),
            &with_kitchen(),
        )
        .unwrap();
        assert_eq!(remote.url.as_str(), "http://10.0.0.2:8080/");
        assert_eq!(remote.timeout, None);
        assert_eq!(remote.volume_step, 2);
    }

    #[test]
    fn device_flag_works_without_config() {
        let remote = resolve(&global(&["-d", "http://10.0.0.3/"]), &Config::default()).unwrap();
        assert_eq!(remote.url.as_str(), "http://10.0.0.3/");
        assert_eq!(remote.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn empty_config_without_device_is_no_config() {
        let err = resolve(&global(&[]), &Config::default()).unwrap_err();
        assert!(matches!(err, CliError::NoConfig { .. }));
    }

    #[test]
    fn unknown_profile_lists_available() {
        let err = resolve(&global(&["-p", "attic"]), &with_kitchen()).unwrap_err();
        match err {
            CliError::ProfileNotFound { name, available } => {
                assert_eq!(name, "attic");
                assert_eq!(available, "default");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
