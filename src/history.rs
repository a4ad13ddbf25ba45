//! Prior snapshots of the source dictionary from version history.
//!
//! Snapshot policy: look at the `max_commits` most recent commits, skip the
//! newest one, and return the file as of the first remaining commit that has
//! it. This is not "the last commit that modified the file"; with a window of
//! 10 it is normally simply the file as of `HEAD~1`.

use crate::dictionary::NestedDict;
use crate::error::HistoryError;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info, warn};

/// Read-only access to file contents at past commits.
pub trait HistorySource {
    /// Commit ids, newest first, at most `max_count` of them
    fn recent_commits(&self, max_count: usize) -> Result<Vec<String>, HistoryError>;

    /// Contents of `path` at `commit`, or `None` when the file did not exist there
    fn file_at(&self, commit: &str, path: &str) -> Result<Option<String>, HistoryError>;
}

/// Find the prior snapshot of `path`.
///
/// Returns an empty dictionary when no examined commit has the file or the
/// history backend fails at any point, so every current entry counts as new.
///
/// # Errors
/// Fails only when a snapshot exists but is not a valid dictionary.
pub fn prior_snapshot<H>(
    source: &H,
    path: &str,
    max_commits: usize,
) -> Result<NestedDict, HistoryError>
where
    H: HistorySource + ?Sized,
{
    let commits = match source.recent_commits(max_commits) {
        Ok(commits) => commits,
        Err(e) => {
            warn!("History unavailable for {}, treating every entry as new: {}", path, e);
            return Ok(NestedDict::new());
        }
    };

    for commit in commits.iter().take(max_commits).skip(1) {
        let text = match source.file_at(commit, path) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("{} not present at {}", path, commit);
                continue;
            }
            Err(e) => {
                warn!(
                    "Could not read {} at {}, treating every entry as new: {}",
                    path, commit, e
                );
                return Ok(NestedDict::new());
            }
        };

        info!("Using snapshot of {} from commit {}", path, short_id(commit));
        return serde_json::from_str(&text).map_err(|source| HistoryError::Parse {
            path: path.to_string(),
            commit: commit.clone(),
            source,
        });
    }

    warn!(
        "No prior snapshot of {} in the last {} commits, treating every entry as new",
        path, max_commits
    );
    Ok(NestedDict::new())
}

fn short_id(commit: &str) -> &str {
    commit.get(..10).unwrap_or(commit)
}

/// History backed by the `git` executable.
///
/// Paths are relative to `repo_root`, which may be a subdirectory of the
/// work tree.
#[derive(Debug, Clone)]
pub struct GitHistory {
    repo_root: PathBuf,
}

impl GitHistory {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    fn git(&self, args: &[&str]) -> Result<String, HistoryError> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.repo_root)
            .args(args)
            .output()?;

        if !output.status.success() {
            return Err(HistoryError::Command {
                command: args.first().copied().unwrap_or_default().to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl HistorySource for GitHistory {
    fn recent_commits(&self, max_count: usize) -> Result<Vec<String>, HistoryError> {
        let max_count = format!("--max-count={}", max_count);
        let stdout = self.git(&["rev-list", &max_count, "HEAD"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn file_at(&self, commit: &str, path: &str) -> Result<Option<String>, HistoryError> {
        let listed = self.git(&["ls-tree", "--name-only", commit, "--", path])?;
        if listed.trim().is_empty() {
            return Ok(None);
        }

        // "./" resolves against the -C directory, like the ls-tree pathspec
        let object = format!("{}:./{}", commit, path);
        self.git(&["show", &object]).map(Some)
    }
}
