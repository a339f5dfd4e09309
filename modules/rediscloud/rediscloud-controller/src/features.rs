//! Feature flags of the Redis Cloud provider.

use std::fmt;

/// A provider feature flag, enabled by name through
/// [`ControllerOptions::features`](provider_kit::ControllerOptions::features).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Alpha support for management policies.
    EnableAlphaManagementPolicies,
    /// Beta support for management policies.
    EnableBetaManagementPolicies,
}

impl Feature {
    /// Every known feature flag.
    pub const ALL: [Self; 2] = [
        Self::EnableAlphaManagementPolicies,
        Self::EnableBetaManagementPolicies,
    ];

    /// Flag name as it appears in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnableAlphaManagementPolicies => "EnableAlphaManagementPolicies",
            Self::EnableBetaManagementPolicies => "EnableBetaManagementPolicies",
        }
    }

    /// Looks a flag up by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
