use std::fmt;

use crate::error::{AckError, Result};

/// Environment variable set by the lithos supervisor,
/// `"<role>/<process-descriptor>"`.
pub const LITHOS_NAME: &str = "LITHOS_NAME";

/// Outcome class of process-name resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal supervised invocation: acknowledge over the wire.
    Ack,
    /// `cmd.`-prefixed name: a human is running the command by hand, so
    /// print instructions instead of acting.
    Cmd,
    /// No process name in the environment at all.
    Warn,
}

/// Action addressing: which role/group/step the update targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub role: String,
    pub group: String,
    pub step: String,
}

impl Identity {
    /// Stand-in used when no process name is available; only ever printed
    /// as part of manual instructions, never submitted.
    pub fn placeholder() -> Self {
        Self {
            role: "example-role".to_string(),
            group: "example-group".to_string(),
            step: "cmd_example_step".to_string(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.role, self.group, self.step)
    }
}

/// Derive action addressing from a lithos process name.
///
/// A name looks like `my-app-staging/myapp-migrate-2.0`. The part before
/// the first `/` is the role; the process descriptor after it is reduced
/// to a group and step in stages:
///
/// 1. a `cmd.` prefix marks a manual command run ([`Mode::Cmd`])
/// 2. everything after the last `.` is a version/instance suffix
/// 3. a trailing `-1` or `-2` is a replica index (only those two; other
///    numeric suffixes are part of the name)
/// 4. the last `-`-separated component names the step, the rest is the
///    group, so `ru-slave-migrate` splits into `ru-slave` + `migrate`
///
/// `None` yields the placeholder identity and [`Mode::Warn`] so the caller
/// can print manual instructions and bail out.
pub fn resolve(name: Option<&str>) -> Result<(Identity, Mode)> {
    let Some(name) = name else {
        return Ok((Identity::placeholder(), Mode::Warn));
    };

    let (role, process) = name
        .split_once('/')
        .ok_or_else(|| AckError::Format(name.to_string()))?;

    let (process, mode) = match process.strip_prefix("cmd.") {
        Some(rest) => (rest, Mode::Cmd),
        None => (process, Mode::Ack),
    };

    let process = match process.rsplit_once('.') {
        Some((head, _version)) => head,
        None => process,
    };

    let process = process
        .strip_suffix("-1")
        .or_else(|| process.strip_suffix("-2"))
        .unwrap_or(process);

    let (group, step_name) = process
        .rsplit_once('-')
        .ok_or_else(|| AckError::Format(name.to_string()))?;

    Ok((
        Identity {
            role: role.to_string(),
            group: group.to_string(),
            step: format!("cmd_{step_name}"),
        },
        mode,
    ))
}

/// Read and resolve [`LITHOS_NAME`] from the process environment.
///
/// The parsing itself lives in [`resolve`], which takes the value as an
/// argument and stays testable without touching the environment.
pub fn resolve_from_env() -> Result<(Identity, Mode)> {
    let name = std::env::var(LITHOS_NAME).ok();
    resolve(name.as_deref())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_daemon_name() {
        let (identity, mode) = resolve(Some("my-app-staging/myapp-migrate-2.0")).unwrap();
        assert_eq!(mode, Mode::Ack);
        assert_eq!(identity.role, "my-app-staging");
        assert_eq!(identity.group, "myapp");
        assert_eq!(identity.step, "cmd_migrate");
    }

    #[test]
    fn splits_group_on_last_dash() {
        let (identity, mode) = resolve(Some("my-app-staging/ru-slave-migrate-2.0")).unwrap();
        assert_eq!(mode, Mode::Ack);
        assert_eq!(identity.role, "my-app-staging");
        assert_eq!(identity.group, "ru-slave");
        assert_eq!(identity.step, "cmd_migrate");
    }

    #[test]
    fn cmd_prefix_switches_mode() {
        let (identity, mode) = resolve(Some("my-app-staging/cmd.myapp-migrate-2.1235")).unwrap();
        assert_eq!(mode, Mode::Cmd);
        assert_eq!(identity.role, "my-app-staging");
        assert_eq!(identity.group, "myapp");
        assert_eq!(identity.step, "cmd_migrate");
    }

    #[test]
    fn absent_name_is_warn_with_placeholder() {
        let (identity, mode) = resolve(None).unwrap();
        assert_eq!(mode, Mode::Warn);
        assert_eq!(identity, Identity::placeholder());
        assert_eq!(identity.role, "example-role");
        assert_eq!(identity.group, "example-group");
        assert_eq!(identity.step, "cmd_example_step");
    }

    #[test]
    fn name_without_slash_is_format_error() {
        let err = resolve(Some("no-slash-here")).unwrap_err();
        assert!(matches!(err, AckError::Format(_)));
        assert!(!err.is_transient());
    }

    #[test]
    fn descriptor_without_dash_is_format_error() {
        let err = resolve(Some("role/migrate")).unwrap_err();
        assert!(matches!(err, AckError::Format(_)));
    }

    #[test]
    fn only_replica_one_and_two_are_stripped() {
        let (identity, _) = resolve(Some("role/myapp-migrate-3.0")).unwrap();
        // -3 is not a replica index, so it stays in the step name.
        assert_eq!(identity.group, "myapp-migrate");
        assert_eq!(identity.step, "cmd_3");
    }

    #[test]
    fn no_version_suffix_still_parses() {
        let (identity, mode) = resolve(Some("role/myapp-migrate")).unwrap();
        assert_eq!(mode, Mode::Ack);
        assert_eq!(identity.group, "myapp");
        assert_eq!(identity.step, "cmd_migrate");
    }
}
