//! Navigation actions produced by clicking a hovered target.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::OrreryError;
use crate::options::NavigationOptions;
use crate::target::Target;

/// Request to open the experience belonging to a target in a new context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationAction {
    target: Target,
}

impl NavigationAction {
    /// Action for `target`.
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    /// The clicked target.
    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    /// Fixed resource name, e.g. `earth_experience`.
    #[must_use]
    pub fn resource_name(&self) -> &'static str {
        self.target.experience_name()
    }

    /// Document file name, e.g. `earth_experience.html`.
    #[must_use]
    pub fn document(&self) -> String {
        format!("{}.html", self.resource_name())
    }
}

/// Something that can carry out a [`NavigationAction`].
pub trait Navigator {
    /// Open the action's resource in a new browsing context.
    fn open(&mut self, action: &NavigationAction) -> Result<(), OrreryError>;
}

/// Navigator that only records the request in the log.
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn open(&mut self, action: &NavigationAction) -> Result<(), OrreryError> {
        log::info!(
            "navigate: {} -> {}",
            action.target(),
            action.document()
        );
        Ok(())
    }
}

/// Navigator that hands the document to the platform opener.
#[derive(Debug, Clone)]
pub struct SystemNavigator {
    base_dir: PathBuf,
}

impl SystemNavigator {
    /// Resolve documents against `base_dir`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Full path of the document an action would open.
    #[must_use]
    pub fn document_path(&self, action: &NavigationAction) -> PathBuf {
        self.base_dir.join(action.document())
    }
}

impl Navigator for SystemNavigator {
    fn open(&mut self, action: &NavigationAction) -> Result<(), OrreryError> {
        let path = self.document_path(action);
        log::info!("navigate: {} -> {}", action.target(), path.display());
        // Spawn without waiting; the opener owns the new context.
        let _child = opener_command(&path).spawn().map_err(|e| {
            OrreryError::Navigation(format!(
                "failed to open {}: {e}",
                path.display()
            ))
        })?;
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    let _ = cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    let _ = cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    let _ = cmd.arg(path);
    cmd
}

/// Pick a navigator according to the options.
#[must_use]
pub fn navigator_from_options(options: &NavigationOptions) -> Box<dyn Navigator> {
    if options.open_externally {
        let base = options.base_dir.clone().unwrap_or_else(|| ".".into());
        Box::new(SystemNavigator::new(base))
    } else {
        Box::new(LogNavigator)
    }
}
