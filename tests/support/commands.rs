//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Environment variables that must not leak in from the developer's shell.
const SCRUBBED: &[&str] = &[
    "SSM2ENV_PREFIX",
    "SSM2ENV_ASSUME_ROLE_ARN",
    "SSM2ENV_REGION",
    "SSM2ENV_ENDPOINT_URL",
    "SSM2ENV_STORE_FILE",
    "SSM2ENV_BATCH_SIZE",
    "SSM2ENV_CONCURRENCY",
    "SSM2ENV_LOG",
];

impl Test {
    /// An ssm2env command with a clean environment and no store configured.
    pub fn bare_cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ssm2env").expect("failed to find ssm2env binary");
        for var in SCRUBBED {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// An ssm2env command reading from this test's parameter file.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.env("SSM2ENV_STORE_FILE", &self.store);
        cmd
    }

    /// Shortcut for `ssm2env --prefix <prefix> write -o <file>`.
    pub fn write(&self, prefix: &str, file: &str) -> Output {
        self.cmd()
            .args(["--prefix", prefix, "write", "-o", file])
            .output()
            .expect("failed to run ssm2env write")
    }

    /// Shortcut for `ssm2env --prefix <prefix> write -o - -f <format>`.
    pub fn write_stdout(&self, prefix: &str, format: &str) -> Output {
        self.cmd()
            .args(["--prefix", prefix, "write", "-o", "-", "--format", format])
            .output()
            .expect("failed to run ssm2env write")
    }

    /// Shortcut for `ssm2env --prefix <prefix> exec -- <args>`.
    pub fn exec(&self, prefix: &str, args: &[&str]) -> Output {
        self.cmd()
            .args(["--prefix", prefix, "exec", "--"])
            .args(args)
            .output()
            .expect("failed to run ssm2env exec")
    }

    /// Shortcut for `ssm2env --prefix <prefix> list`.
    pub fn list(&self, prefix: &str) -> Output {
        self.cmd()
            .args(["--prefix", prefix, "list"])
            .output()
            .expect("failed to run ssm2env list")
    }

    /// Shortcut for `ssm2env --prefix <prefix> list --json`.
    pub fn list_json(&self, prefix: &str) -> Output {
        self.cmd()
            .args(["--prefix", prefix, "list", "--json"])
            .output()
            .expect("failed to run ssm2env list --json")
    }
}
