//! Meson post-install hook.
//!
//! Runs after the install step has copied files into the prefix and
//! compiles the GSettings schemas placed under `<prefix>/schemas/` so the
//! settings library finds an up-to-date binary cache at first lookup.

mod compile;
mod error;
mod paths;

use std::fmt;
use std::process::ExitCode;
use std::time::Instant;

use tracing_subscriber::fmt::time::FormatTime;

use crate::error::{HookError, HookResult};
use crate::paths::InstallPaths;

struct Elapsed(Instant);

impl FormatTime for Elapsed {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let d = self.0.elapsed();
        let secs = d.as_secs();
        let millis = d.subsec_millis();
        write!(w, "[{secs:02}:{millis:03}]")
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_timer(Elapsed(Instant::now()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            failure_code(&e)
        }
    }
}

async fn run() -> HookResult<()> {
    let paths = InstallPaths::from_env()?;
    let schema_dir = paths.schema_dir();
    tracing::info!(dir = %schema_dir.display(), "installing new schemas");
    compile::compile_schemas(&schema_dir).await
}

/// Mirror the compiler's exit code where it fits in a u8; a child killed by
/// a signal or reporting an out-of-range code becomes a plain failure.
fn failure_code(err: &HookError) -> ExitCode {
    if let HookError::CompilerFailed { status, .. } = err
        && let Some(code) = status.code()
        && let Ok(code) = u8::try_from(code)
        && code != 0
    {
        return ExitCode::from(code);
    }
    ExitCode::FAILURE
}
