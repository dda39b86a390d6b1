//! Temporary workspaces with a config file and message documents

use super::cli::M17nCommand;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MENU_JSON: &str = r#"{
  "menu": {
    "file": { "open": "Open", "save": "Save" },
    "edit.copy": "Copy"
  },
  "title": "App"
}"#;

/// A temp directory holding `config.toml` and any documents written to it
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Workspace with the default `en-US` / `USD` config
    pub fn new() -> Result<Self> {
        Self::with_locale("en-US", "USD")
    }

    pub fn with_locale(tag: &str, currency: &str) -> Result<Self> {
        let workspace = Self { dir: TempDir::new()? };
        workspace.write(
            "config.toml",
            &format!(
                "[locale]\ntag = \"{}\"\ncurrency = \"{}\"\n\n[output]\nformat = \"json\"\npretty = true\n",
                tag, currency
            ),
        )?;
        Ok(workspace)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("config.toml")
    }

    /// Write `contents` to `name` inside the workspace
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.path().join(name))?)
    }

    /// Command running in the workspace against its config file
    pub fn command(&self, args: &[&str]) -> M17nCommand {
        let mut cmd = M17nCommand::new(self.path());
        cmd.env("M17N_CONFIG", &self.config_path().to_string_lossy());
        cmd.args(args);
        cmd
    }
}
