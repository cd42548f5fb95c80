//! External link dispatch.
//!
//! The only outbound collaboration in the application: asking the host OS to
//! open a tool's page on the ADZDiag platform. Fire-and-forget: the spawn is
//! detached, failures are logged and never surfaced to the caller.

use log::{info, warn};
use std::process::{Command, Stdio};
use std::sync::Mutex;

use crate::error::{AdzError, Result};

/// Default platform host.
pub const DEFAULT_BASE_URL: &str = "https://app.adzdiag.co.uk";

/// Build the platform URL for a tool slug.
pub fn tool_url(base: &str, id: &str) -> String {
    format!("{}/tools/{}", base.trim_end_matches('/'), id)
}

/// Seam for the outbound open-URL side effect.
///
/// The system implementation shells out to the platform opener; tests use
/// [`RecordingLauncher`] to observe dispatches without leaving the process.
pub trait Launcher {
    fn open_url(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the host platform's opener command.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }

    #[cfg(target_os = "macos")]
    fn command(url: &str) -> Command {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }

    #[cfg(target_os = "windows")]
    fn command(url: &str) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    fn command(url: &str) -> Command {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

impl Launcher for SystemLauncher {
    fn open_url(&self, url: &str) -> Result<()> {
        Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| AdzError::Launch(format!("failed to spawn opener for {url}: {e}")))
    }
}

/// Records dispatched URLs instead of opening them. Can be told to fail so
/// callers' swallow-the-error behavior is observable.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    opened: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher whose every dispatch fails.
    pub fn failing() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// URLs dispatched so far, in order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn open_url(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            Err(AdzError::Launch(format!("recording launcher set to fail: {url}")))
        } else {
            Ok(())
        }
    }
}

/// Dispatch a tool's platform page, swallowing launch failures.
///
/// The state machine transition that triggered the dispatch must not depend
/// on the outcome, so the error stops here.
pub fn open_tool(launcher: &dyn Launcher, base: &str, id: &str) {
    let url = tool_url(base, id);
    info!("Opening external URL: {}", url);
    if let Err(e) = launcher.open_url(&url) {
        warn!("External open failed: {}", e);
    }
}
