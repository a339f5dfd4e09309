//! External-name strategies.

use std::fmt;

use serde::Serialize;

/// How the remote identifier of a managed resource is determined.
///
/// The identifier is what the remote API uses to address the resource; it is
/// stored in the `crossplane.io/external-name` annotation of the managed object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ExternalName {
    /// The object name is used as the remote identifier.
    #[default]
    NameAsIdentifier,

    /// The remote system assigns the identifier after creation.
    ///
    /// The identifier is unknown until the create call returns, so the name
    /// initializer is disabled for resources using this strategy.
    IdentifierFromProvider,

    /// A spec parameter carries the remote identifier.
    ParameterAsIdentifier(String),
}

impl fmt::Display for ExternalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameAsIdentifier => f.write_str("name-as-identifier"),
            Self::IdentifierFromProvider => f.write_str("identifier-from-provider"),
            Self::ParameterAsIdentifier(field) => write!(f, "parameter-as-identifier({field})"),
        }
    }
}
