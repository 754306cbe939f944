//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a secretpull command running in the test directory.
    ///
    /// Inherited config and log settings are cleared and colors disabled so
    /// output is stable.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("secretpull").expect("failed to find secretpull binary");
        cmd.env_remove("SECRETPULL_CONFIG");
        cmd.env_remove("SECRETPULL_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run against `secret.json` with extra arguments.
    pub fn pull(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(["--secret-file", "secret.json"])
            .args(args)
            .output()
            .expect("failed to run secretpull")
    }

    /// Run against `secret.json` in the given format.
    pub fn pull_format(&self, format: &str) -> Output {
        self.pull(&["--format", format])
    }

    /// Feed `raw` on stdin with extra arguments.
    pub fn pull_stdin(&self, raw: &str, args: &[&str]) -> Output {
        self.cmd()
            .args(["--secret-file", "-"])
            .args(args)
            .write_stdin(raw)
            .output()
            .expect("failed to run secretpull")
    }

    /// Source shell text with `sh` and print the named variable.
    #[cfg(unix)]
    pub fn source_and_print(&self, script: &str, var: &str) -> String {
        let path = self.write("exports.sh", script);
        let output = std::process::Command::new("sh")
            .arg("-c")
            .arg(format!(". '{}'; printf '%s' \"${}\"", path.display(), var))
            .output()
            .expect("failed to run sh");
        assert!(
            output.status.success(),
            "sh failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("sh printed invalid utf-8")
    }
}
