//! Common test utilities for curlkit integration tests
//!
//! This module provides shared test infrastructure including:
//! - CLI invocation helpers with an isolated config directory
//! - Output parsing helpers

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Exit status codes matching the Rust application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }
}

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_status: ExitStatus,
}

impl CliResponse {
    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, self.stdout))
    }
}

/// Isolated environment for one CLI run
pub struct MockEnvironment {
    /// Temporary config directory
    pub config_dir: TempDir,
    /// Environment variables to set
    pub env_vars: HashMap<String, String>,
    /// Standard input content
    pub stdin: Option<Vec<u8>>,
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvironment {
    pub fn new() -> Self {
        let config_dir = TempDir::new().expect("Failed to create temp config dir");
        Self {
            config_dir,
            env_vars: HashMap::new(),
            stdin: None,
        }
    }

    pub fn set_env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_stdin(&mut self, content: &str) -> &mut Self {
        self.stdin = Some(content.as_bytes().to_vec());
        self
    }

    /// Write `config.toml` into the config directory
    pub fn write_config(&mut self, content: &str) -> &mut Self {
        self.write_file("config.toml", content);
        self
    }

    /// Write a file into the config directory and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.config_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().to_path_buf()
    }
}

/// Run the CLI with the given arguments
pub fn curlkit(args: &[&str]) -> CliResponse {
    curlkit_with_env(args, &MockEnvironment::new())
}

/// Run the CLI with the given arguments and environment
pub fn curlkit_with_env(args: &[&str], env: &MockEnvironment) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_curlkit"));
    cmd.args(args);

    cmd.env("CURLKIT_CONFIG_DIR", env.config_path());
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    for (key, value) in &env.env_vars {
        cmd.env(key, value);
    }

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    match &env.stdin {
        Some(stdin_data) => {
            cmd.stdin(Stdio::piped());
            let mut child = cmd.spawn().expect("Failed to spawn command");
            child
                .stdin
                .take()
                .expect("Failed to open stdin")
                .write_all(stdin_data)
                .expect("Failed to write to stdin");
            parse_output(child.wait_with_output().expect("Failed to wait for command"))
        }
        None => {
            cmd.stdin(Stdio::null());
            parse_output(cmd.output().expect("Failed to run command"))
        }
    }
}

fn parse_output(output: Output) -> CliResponse {
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).trim_end().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_status: ExitStatus::from(output.status.code().unwrap_or(1)),
    }
}
