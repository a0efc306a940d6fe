//! TestWorld pattern for declarative integration test setup.
//!
//! Every world points the CLI at a product API that refuses connections, so
//! commands always fall through to the snapshot placed with
//! [`TestWorld::with_fallback`]. Without one, both sources fail.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use shopcat_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new().with_fallback(fixtures::SHOE_AND_HAT);
///
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    api_url: String,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// A loopback URL nothing listens on
fn unreachable_api_url() -> String {
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .expect("Failed to reserve a local port");
    format!("http://127.0.0.1:{}/products", port)
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".shopcat");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let mut env_vars = HashMap::new();
        env_vars.insert("NO_PROXY".to_string(), "127.0.0.1,localhost".to_string());

        Self {
            temp_dir,
            data_dir,
            api_url: unreachable_api_url(),
            env_vars,
        }
    }

    /// Get the data directory path (.shopcat).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the fallback snapshot the CLI reads by default.
    pub fn fallback_path(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }

    /// Path of one persisted preference entry.
    pub fn storage_entry(&self, key: &str) -> PathBuf {
        self.data_dir.join("storage").join(key)
    }

    /// Place a fallback snapshot with the given JSON content.
    pub fn with_fallback(self, json: &str) -> Self {
        std::fs::write(self.fallback_path(), json).expect("Failed to write fallback snapshot");
        self
    }

    /// Seed a persisted preference entry, e.g. a corrupt `favorites` value.
    pub fn with_storage_entry(self, key: &str, value: &str) -> Self {
        let path = self.storage_entry(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create storage dir");
        }
        std::fs::write(path, value).expect("Failed to write storage entry");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Read a persisted preference entry, if present.
    pub fn read_storage_entry(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.storage_entry(key)).ok()
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--api-url")
            .arg(&self.api_url);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("SHOPCAT_PATH");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the CLI with the given arguments.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built, which `cargo test` does for integration tests of the CLI crate.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("shopcat")
            .map_err(|e| anyhow::anyhow!("Failed to find shopcat binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Execute the CLI with `--format json` and the given arguments.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        self.run(&full)
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
