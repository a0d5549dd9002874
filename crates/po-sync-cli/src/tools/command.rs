//! Running external programs with exit-status checking.

use crate::core::{CliError, ToolFailedError, ToolSpawnError};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Captured output of a tool that exited successfully.
#[derive(Debug)]
pub struct ToolOutput {
    pub stdout: Vec<u8>,
    pub stderr: String,
}

impl ToolOutput {
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// A single invocation of an external program in a working directory.
#[derive(Clone, Debug)]
pub struct ToolCommand {
    program: String,
    args: Vec<OsString>,
    dir: PathBuf,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            dir: dir.into(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// The command line as shown in logs and errors.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the program and capture its output, whatever the exit status.
    ///
    /// Only a failure to start the program is an error here.
    pub fn output(&self) -> Result<Output, CliError> {
        tracing::debug!(
            command = %self.command_line(),
            dir = %self.dir.display(),
            "running tool"
        );

        Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| {
                tracing::debug!(program = %self.program, error = %source, "failed to start tool");
                ToolSpawnError {
                    program: self.program.clone(),
                    source,
                }
                .into()
            })
    }

    /// Run the program and fail unless it exits successfully.
    pub fn run(&self) -> Result<ToolOutput, CliError> {
        let output = self.output()?;
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            tracing::debug!(
                command = %self.command_line(),
                status = %output.status,
                "tool failed"
            );
            return Err(ToolFailedError {
                command: self.command_line(),
                dir: self.dir.clone(),
                status: output.status.to_string(),
                stderr: (!stderr.trim().is_empty()).then(|| stderr.trim_end().to_string()),
            }
            .into());
        }

        Ok(ToolOutput {
            stdout: output.stdout,
            stderr,
        })
    }
}

/// Resolve a configured program against a base directory.
///
/// Bare names are left for `PATH` lookup; relative paths containing a
/// separator are taken relative to `base`.
pub fn resolve_program(program: &str, base: &Path) -> String {
    let path = Path::new(program);
    if path.is_relative() && path.components().count() > 1 {
        base.join(path).to_string_lossy().into_owned()
    } else {
        program.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_joins_args() {
        let cmd = ToolCommand::new("git", "/repo").args(["pull", "--rebase"]);
        assert_eq!(cmd.command_line(), "git pull --rebase");
    }

    #[test]
    fn test_resolve_program() {
        let base = Path::new("/work/repo");
        assert_eq!(resolve_program("msgfmt", base), "msgfmt");
        assert_eq!(resolve_program("/usr/bin/git", base), "/usr/bin/git");
        assert_eq!(
            resolve_program("locale/make-pot", base),
            "/work/repo/locale/make-pot"
        );
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let temp = tempfile::tempdir().unwrap();
        let result = ToolCommand::new("po-sync-no-such-program", temp.path()).run();
        assert!(matches!(result, Err(CliError::ToolSpawn(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_tool_failed() {
        let temp = tempfile::tempdir().unwrap();
        let result = ToolCommand::new("sh", temp.path())
            .args(["-c", "echo broken >&2; exit 3"])
            .run();

        match result {
            Err(CliError::ToolFailed(err)) => {
                assert_eq!(err.stderr.as_deref(), Some("broken"));
                assert!(err.command.starts_with("sh -c"));
            },
            other => panic!("expected ToolFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_success_captures_stdout() {
        let temp = tempfile::tempdir().unwrap();
        let output = ToolCommand::new("sh", temp.path())
            .args(["-c", "printf 'msgid \"\"'"])
            .run()
            .unwrap();
        assert_eq!(output.stdout_lossy(), "msgid \"\"");
    }
}
