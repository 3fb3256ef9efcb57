use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use log::debug;
use tokio::process::Command;
use tokio::runtime::Builder;
use tokio::time;

use crate::history::{HistoryError, HistoryResolver};

/// `git log --format=%ci` timestamp layout
const COMMITTER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Reads commit timestamps with `git log`
#[derive(Debug, Clone)]
pub struct GitHistory {
    binary: String,
    timeout: Duration,
}

impl GitHistory {
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        GitHistory {
            binary: binary.into(),
            timeout,
        }
    }

    fn log_command(&self, path: &Path) -> Command {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file = path.file_name().map(Path::new).unwrap_or(path);

        let mut cmd = Command::new(&self.binary);
        cmd.arg("-C")
            .arg(dir)
            .arg("log")
            .arg("--reverse")
            .arg("--format=%ci")
            .arg("--")
            .arg(file);
        cmd
    }
}

impl Default for GitHistory {
    fn default() -> Self {
        GitHistory::new("git", Duration::from_secs(5))
    }
}

impl HistoryResolver for GitHistory {
    fn resolve_history(&self, path: &Path) -> Result<Vec<DateTime<FixedOffset>>, HistoryError> {
        let output = run_with_timeout(self.log_command(path), self.timeout)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HistoryError::Exit(format!("{} {}", output.status, stderr.trim())));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let history = parse_log_output(&stdout)?;
        debug!("{} commit(s) for {}", history.len(), path.display());
        Ok(history)
    }
}

/// Parse one `%ci` timestamp per line, skipping blank lines and stray quotes
pub fn parse_log_output(stdout: &str) -> Result<Vec<DateTime<FixedOffset>>, HistoryError> {
    let history = stdout
        .lines()
        .map(|line| line.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|line| !line.is_empty())
        .map(|line| {
            DateTime::parse_from_str(line, COMMITTER_DATE_FORMAT)
                .map_err(|_| HistoryError::Parse(line.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if history.is_empty() {
        return Err(HistoryError::Empty);
    }
    Ok(history)
}

/// Run `cmd` to completion, killing it once `timeout` has elapsed
pub fn run_with_timeout(mut cmd: Command, timeout: Duration) -> Result<Output, HistoryError> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(HistoryError::Spawn)?;

    cmd.stdin(Stdio::null()).kill_on_drop(true);

    runtime.block_on(async {
        match time::timeout(timeout, cmd.output()).await {
            Ok(output) => output.map_err(HistoryError::Spawn),
            Err(_) => Err(HistoryError::Timeout(timeout)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use std::time::Instant;

    #[test]
    fn test_parse_log_output_oldest_first() {
        let out = "2023-01-05 09:30:00 +0800\n\n\"2024-02-10 18:00:01 +0000\"\n";
        let history = parse_log_output(out).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].year(), 2023);
        assert_eq!(history[0].hour(), 9);
        assert_eq!(history[1].month(), 2);
        assert!(history[0] < history[1]);
    }

    #[test]
    fn test_parse_log_output_empty() {
        assert!(matches!(parse_log_output("\n  \n"), Err(HistoryError::Empty)));
    }

    #[test]
    fn test_parse_log_output_garbage() {
        assert!(matches!(parse_log_output("fatal: not a git repository"), Err(HistoryError::Parse(_))));
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let git = GitHistory::new("definitely-not-a-vcs-binary", Duration::from_secs(1));
        let result = git.resolve_history(Path::new("docs/post.md"));
        assert!(matches!(result, Err(HistoryError::Spawn(_))));
    }

    #[test]
    fn test_untracked_directory_fails_softly() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("post.md");
        std::fs::write(&file, "# Post").unwrap();

        // Either git is missing, the dir is not a repository, or there are no commits
        assert!(GitHistory::default().resolve_history(&file).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_with_timeout_kills_slow_child() {
        let mut cmd = Command::new("sleep");
        cmd.arg("5");

        let started = Instant::now();
        let result = run_with_timeout(cmd, Duration::from_millis(50));

        assert!(matches!(result, Err(HistoryError::Timeout(_))));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_with_timeout_collects_output() {
        let mut cmd = Command::new("echo");
        cmd.arg("2024-01-01 00:00:00 +0000");

        let output = run_with_timeout(cmd, Duration::from_secs(5)).unwrap();
        assert!(output.status.success());
        assert_eq!(parse_log_output(&String::from_utf8_lossy(&output.stdout)).unwrap().len(), 1);
    }
}
