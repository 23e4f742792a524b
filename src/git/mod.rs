//! Git operations abstraction layer
//!
//! The version logic only needs two things from git: the names of the
//! existing tags, and a way to create a new one. Both live behind the
//! [Repository] trait so the workflow can run against a real repository or
//! an in-memory one.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust
//! # use git_bump::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! for tag in repo.list_tags()? {
//!     println!("{}", tag);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// How a tag ended up being created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// GPG-signed annotated tag
    Signed,
    /// Unsigned annotated tag
    Annotated,
}

/// Common git operation trait for abstraction
///
/// Implementations map underlying errors (like `git2::Error`) to
/// [crate::error::BumpError] variants.
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// The order is unspecified and the list may contain tags that are not
    /// versions.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Whether the repository has no commits yet
    fn is_empty(&self) -> Result<bool>;

    /// Create an annotated tag at `HEAD`
    ///
    /// When `sign` is set a signed tag is attempted first. If signing is not
    /// possible the tag is created unsigned instead.
    ///
    /// # Arguments
    /// * `name` - Name for the new tag
    /// * `message` - Annotation message
    /// * `sign` - Try to sign the tag
    ///
    /// # Returns
    /// * `Ok(TagKind)` - The kind of tag that was created
    /// * `Err` - If the tag already exists, there is no commit to tag, or git fails
    fn create_tag(&self, name: &str, message: &str, sign: bool) -> Result<TagKind>;
}
