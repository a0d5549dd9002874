use super::command::ToolCommand;
use crate::core::CliError;
use std::path::Path;

/// Git operations on one clone.
#[derive(Clone, Copy, Debug)]
pub struct Git<'a> {
    program: &'a str,
    repo: &'a Path,
}

impl<'a> Git<'a> {
    pub fn new(program: &'a str, repo: &'a Path) -> Self {
        Self { program, repo }
    }

    pub fn repo(&self) -> &Path {
        self.repo
    }

    fn command(&self) -> ToolCommand {
        ToolCommand::new(self.program, self.repo)
    }

    pub fn pull_rebase(&self) -> Result<(), CliError> {
        self.command().args(["pull", "--rebase"]).run()?;
        Ok(())
    }

    /// Unstaged changes of tracked files, as printed by `git diff`.
    pub fn diff(&self) -> Result<String, CliError> {
        Ok(self.command().arg("diff").run()?.stdout_lossy())
    }

    pub fn diff_stat(&self) -> Result<String, CliError> {
        Ok(self
            .command()
            .args(["diff", "--stat"])
            .run()?
            .stdout_lossy())
    }

    /// Commit every modified tracked file.
    pub fn commit_all(&self, message: &str) -> Result<(), CliError> {
        self.command()
            .args(["commit", "-a", "-m"])
            .arg(message)
            .run()?;
        Ok(())
    }

    pub fn push(&self) -> Result<(), CliError> {
        self.command().arg("push").run()?;
        Ok(())
    }
}
