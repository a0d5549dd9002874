use super::command::{ToolCommand, resolve_program};
use crate::core::CliError;
use std::path::Path;

/// Run the project's string extraction program inside `repo`.
///
/// Returns the template it printed on stdout. The first element of `command`
/// is the program; relative paths are resolved against `repo`.
pub fn extract_template(command: &[String], repo: &Path) -> Result<Vec<u8>, CliError> {
    let Some((program, args)) = command.split_first() else {
        return Err(CliError::Other("No extractor configured".to_string()));
    };

    let output = ToolCommand::new(resolve_program(program, repo), repo)
        .args(args)
        .run()?;

    if !output.stderr.trim().is_empty() {
        tracing::debug!(stderr = %output.stderr.trim_end(), "extractor diagnostics");
    }

    Ok(output.stdout)
}
