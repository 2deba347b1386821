//! `txm version` and `txm update`.

use txm::build_info;
use txm::update::{check_for_updates, UpdateCheck};
use txm::ui::RenderSink;

use crate::app::AppError;

pub(crate) async fn handle_version(
    check_update: bool,
    sink: &dyn RenderSink,
) -> Result<(), AppError> {
    sink.plain(&build_info::version_text());
    if check_update {
        let check = check_for_updates().await?;
        report_update_check(&check, false, sink);
    }
    Ok(())
}

pub(crate) async fn handle_update(sink: &dyn RenderSink) -> Result<(), AppError> {
    sink.info("Checking for updates...");
    let check = check_for_updates().await?;
    report_update_check(&check, true, sink);
    Ok(())
}

/// Render a release comparison. `with_download` adds the platform asset URL.
pub(crate) fn report_update_check(check: &UpdateCheck, with_download: bool, sink: &dyn RenderSink) {
    if !check.newer_available {
        sink.info(&format!(
            "txm {} is up to date (latest release {})",
            check.current, check.latest
        ));
        return;
    }
    sink.info(&format!(
        "A new version of txm is available: {} (current {})",
        check.latest, check.current
    ));
    if !with_download {
        sink.info("Run 'txm update' for download details");
        return;
    }
    match &check.asset_url {
        Some(url) => sink.field("download", url),
        None => sink.warn("No release asset is published for this platform"),
    }
}
