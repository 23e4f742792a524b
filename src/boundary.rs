use std::fmt;

/// Warnings that occur when reading or creating version tags.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag looks like a version but one of its numbers is out of range
    UnparsableTag { tag: String, reason: String },
    /// No version tags exist, so an initial version was assumed
    BootstrappedVersion { version: String },
    /// Signing the tag failed and an unsigned annotated tag was created
    SigningFailed { tag: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Ignoring tag '{}': {}", tag, reason)
            }
            BoundaryWarning::BootstrappedVersion { version } => {
                write!(f, "No version tags found, starting from {}", version)
            }
            BoundaryWarning::SigningFailed { tag } => {
                write!(
                    f,
                    "Could not sign tag '{}', created an unsigned annotated tag",
                    tag
                )
            }
        }
    }
}
