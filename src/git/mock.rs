use crate::error::{BumpError, Result};
use crate::git::{Repository, TagKind};
use std::cell::RefCell;

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    tags: RefCell<Vec<String>>,
    created: RefCell<Vec<(String, String, TagKind)>>,
    empty: bool,
    signing_fails: bool,
}

impl MockRepository {
    /// Create a new mock repository with one commit and no tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock repository holding the given tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = Self::new();
        for tag in tags {
            repo.add_tag(tag);
        }
        repo
    }

    /// Add a tag
    pub fn add_tag(&self, name: impl Into<String>) {
        self.tags.borrow_mut().push(name.into());
    }

    /// Pretend the repository has no commits
    pub fn set_empty(&mut self, empty: bool) {
        self.empty = empty;
    }

    /// Make signed tag creation fail so the unsigned fallback is used
    pub fn set_signing_fails(&mut self, fails: bool) {
        self.signing_fails = fails;
    }

    /// Tags created through [Repository::create_tag] as `(name, message, kind)`
    pub fn created_tags(&self) -> Vec<(String, String, TagKind)> {
        self.created.borrow().clone()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.borrow().clone())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.empty)
    }

    fn create_tag(&self, name: &str, message: &str, sign: bool) -> Result<TagKind> {
        if self.empty {
            return Err(BumpError::EmptyRepository);
        }
        if self.tags.borrow().iter().any(|t| t == name) {
            return Err(BumpError::tag(format!("Tag '{}' already exists", name)));
        }

        let kind = if sign && !self.signing_fails {
            TagKind::Signed
        } else {
            TagKind::Annotated
        };

        self.tags.borrow_mut().push(name.to_string());
        self.created
            .borrow_mut()
            .push((name.to_string(), message.to_string(), kind));
        Ok(kind)
    }
}
