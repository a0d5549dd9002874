use super::command::{ToolCommand, ToolOutput};
use crate::core::{CliError, ValidationOutcome};
use std::path::Path;

/// The gettext catalog compiler.
#[derive(Clone, Copy, Debug)]
pub struct Msgfmt<'a> {
    program: &'a str,
}

impl<'a> Msgfmt<'a> {
    pub fn new(program: &'a str) -> Self {
        Self { program }
    }

    /// Compile `po` into `mo`, printing statistics.
    ///
    /// A non-zero exit is an error.
    pub fn compile(&self, po: &Path, mo: &Path, dir: &Path) -> Result<ToolOutput, CliError> {
        ToolCommand::new(self.program, dir)
            .arg("--verbose")
            .arg("-o")
            .arg(mo)
            .arg(po)
            .run()
    }

    /// Run the format check on `po`, discarding the compiled output.
    ///
    /// A rejected file is reported as [`ValidationOutcome::Invalid`], not as an
    /// error. Failing to start the compiler is still an error.
    pub fn check(&self, po: &Path, dir: &Path) -> Result<ValidationOutcome, CliError> {
        let output = ToolCommand::new(self.program, dir)
            .arg("--check")
            .arg("-o")
            .arg("-")
            .arg(po)
            .output()?;

        if output.status.success() {
            Ok(ValidationOutcome::Valid)
        } else {
            let mut stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            if stderr.trim().is_empty() {
                stderr = format!("{} exited with {}\n", self.program, output.status);
            }
            tracing::debug!(po = %po.display(), "format check rejected file");
            Ok(ValidationOutcome::Invalid { stderr })
        }
    }
}
