//! Environment override handling.

use super::defaults::BACKEND_ENV_VAR;
use super::ConfigDiagnostics;
use crate::backend::Backend;

/// Resolve the backend named by `TXM_DEFAULT_BACKEND`, if any.
///
/// Empty values are treated as unset. Unknown names are ignored with a warning.
pub(super) fn backend_override_with<FEnv>(
    env_lookup: &FEnv,
    diagnostics: &mut ConfigDiagnostics,
) -> Option<Backend>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let raw = env_lookup(BACKEND_ENV_VAR)?;
    if raw.trim().is_empty() {
        return None;
    }
    match raw.parse::<Backend>() {
        Ok(backend) => Some(backend),
        Err(e) => {
            diagnostics
                .warnings
                .push(format!("ignoring {BACKEND_ENV_VAR}: {e}"));
            None
        }
    }
}
