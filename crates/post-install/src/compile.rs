use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::{HookError, HookResult};

/// External compiler that turns the XML schema sources in a directory into
/// the binary cache the settings library reads at lookup time.
pub const SCHEMA_COMPILER: &str = "glib-compile-schemas";

/// Compile the schemas under `schema_dir`.
///
/// The compiler's stdout/stderr stay inherited so its diagnostics land in
/// the install log verbatim; the hook never captures or parses them.
pub async fn compile_schemas(schema_dir: &Path) -> HookResult<()> {
    let compiler = which::which(SCHEMA_COMPILER)
        .map_err(|_| HookError::CompilerNotFound(SCHEMA_COMPILER))?;
    run_compiler(&compiler, schema_dir).await
}

async fn run_compiler(compiler: &Path, schema_dir: &Path) -> HookResult<()> {
    let command = format!("{} {}", compiler.display(), schema_dir.display());
    tracing::debug!(command = %command, "exec");

    let status = Command::new(compiler)
        .arg(schema_dir)
        .stdin(Stdio::null())
        .status()
        .await
        .map_err(|source| HookError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !status.success() {
        return Err(HookError::CompilerFailed { command, status });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_compiler_succeeds_on_zero_exit() {
        run_compiler(Path::new("true"), Path::new("/tmp"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn run_compiler_reports_nonzero_exit() {
        let err = run_compiler(Path::new("false"), Path::new("/tmp"))
            .await
            .unwrap_err();
        match err {
            HookError::CompilerFailed { status, .. } => assert_eq!(status.code(), Some(1)),
            other => panic!("expected CompilerFailed, got {other}"),
        }
    }

    #[tokio::test]
    async fn run_compiler_reports_spawn_failure() {
        let err = run_compiler(
            Path::new("/nonexistent/glib-compile-schemas"),
            Path::new("/tmp"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, HookError::Spawn { .. }));
    }
}
