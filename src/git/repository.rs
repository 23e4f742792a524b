use crate::error::{BumpError, Result};
use crate::git::TagKind;
use git2::Repository as Git2Repo;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        debug!(path = %repo.path().display(), "opened repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn tag_exists(&self, name: &str) -> bool {
        self.repo
            .find_reference(&format!("refs/tags/{}", name))
            .is_ok()
    }

    /// git2 cannot sign tags, so signing goes through the git binary.
    fn signed_tag(&self, name: &str, message: &str) -> Result<()> {
        let workdir = self.repo.workdir().unwrap_or_else(|| self.repo.path());
        debug!(tag = name, dir = %workdir.display(), "running git tag -s");

        let output = Command::new("git")
            .args(["tag", "-s", name, "-m", message])
            .current_dir(workdir)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BumpError::tag(format!(
                "git tag -s exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }

    fn annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        let signature = self.repo.signature()?;

        self.repo
            .tag(name, head.as_object(), &signature, message, false)
            .map_err(|e| BumpError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        Ok(())
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.repo.is_empty()?)
    }

    fn create_tag(&self, name: &str, message: &str, sign: bool) -> Result<TagKind> {
        if self.repo.is_empty()? {
            return Err(BumpError::EmptyRepository);
        }

        if self.tag_exists(name) {
            return Err(BumpError::tag(format!("Tag '{}' already exists", name)));
        }

        if sign {
            match self.signed_tag(name, message) {
                Ok(()) => return Ok(TagKind::Signed),
                Err(e) => debug!(tag = name, error = %e, "signing failed, creating annotated tag"),
            }
        }

        self.annotated_tag(name, message)?;
        Ok(TagKind::Annotated)
    }
}
