use std::path::Path;
use std::process::Command;

/// Opens `path` in the operator's image viewer and waits for the viewer
/// process to exit before returning.
///
/// The saved file is the contract; a missing or failing viewer is logged
/// and skipped so headless runs still complete.
pub fn open_blocking(path: &Path) {
    let viewer = default_viewer();
    match Command::new(viewer).arg(path).status() {
        Ok(status) if status.success() => {}
        Ok(status) => {
            tracing::warn!(viewer, %status, "image viewer exited abnormally");
        }
        Err(err) => {
            tracing::warn!(viewer, error = %err, "could not launch image viewer");
        }
    }
}

fn default_viewer() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}
