//! `txm uninstall`.

use txm::install::{uninstall, Installation};
use txm::ui::RenderSink;

use crate::app::AppError;

pub(crate) fn handle_uninstall(
    installation: &Installation,
    sink: &dyn RenderSink,
) -> Result<(), AppError> {
    sink.info(&format!(
        "Uninstalling {} installation at {}",
        installation.kind,
        installation.binary.display()
    ));
    let removed = uninstall(installation)?;
    for path in &removed {
        sink.field("removed", &path.display().to_string());
    }
    sink.info(&format!(
        "Successfully uninstalled {} installation",
        installation.kind
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testsupport::RecordingSink;
    use std::path::PathBuf;
    use txm::install::detect_installation;

    fn scratch_home(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("txm-app-{label}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join(".local/bin")).unwrap();
        dir
    }

    #[test]
    fn user_install_is_removed_and_reported() {
        let home = scratch_home("uninstall");
        let binary = home.join(".local/bin/txm");
        std::fs::write(&binary, "#!/bin/sh\n").unwrap();
        let inst = detect_installation(&binary, &home).unwrap();

        let sink = RecordingSink::default();
        handle_uninstall(&inst, &sink).unwrap();
        assert!(!binary.exists());
        assert_eq!(
            sink.at("info").last().map(String::as_str),
            Some("Successfully uninstalled user installation")
        );
        assert_eq!(sink.at("field").len(), 1);
        let _ = std::fs::remove_dir_all(&home);
    }

    #[test]
    fn missing_binary_fails() {
        let home = scratch_home("uninstall-missing");
        let inst = detect_installation(&home.join(".local/bin/txm"), &home).unwrap();
        let sink = RecordingSink::default();
        let err = handle_uninstall(&inst, &sink).unwrap_err();
        assert!(matches!(err, AppError::Update(_)));
        let _ = std::fs::remove_dir_all(&home);
    }
}
