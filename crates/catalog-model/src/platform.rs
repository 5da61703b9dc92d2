//! Target platforms named in the design documentation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Platform a component, variant, value or constraint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS and Android conventions.
    Mobile,
    /// Web admin and responsive web.
    Web,
    /// Documented for every platform.
    #[default]
    Both,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Mobile => "mobile",
            Platform::Web => "web",
            Platform::Both => "both",
        }
    }

    /// Returns true if an element documented for `self` may be used in `context`.
    ///
    /// Without a concrete context only cross-platform elements are admitted.
    pub fn admits(&self, context: Option<Platform>) -> bool {
        match (self, context) {
            (Platform::Both, _) => true,
            (_, None | Some(Platform::Both)) => false,
            (own, Some(ctx)) => *own == ctx,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" | "ios" | "android" => Ok(Platform::Mobile),
            "web" => Ok(Platform::Web),
            "both" | "all" | "" => Ok(Platform::Both),
            _ => Err(ModelError::InvalidPlatform(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_is_admitted_everywhere() {
        assert!(Platform::Both.admits(None));
        assert!(Platform::Both.admits(Some(Platform::Web)));
        assert!(Platform::Both.admits(Some(Platform::Mobile)));
    }

    #[test]
    fn platform_specific_needs_matching_context() {
        assert!(Platform::Web.admits(Some(Platform::Web)));
        assert!(!Platform::Web.admits(Some(Platform::Mobile)));
        assert!(!Platform::Web.admits(None));
        assert!(!Platform::Mobile.admits(Some(Platform::Both)));
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Mobile);
        assert_eq!(" web ".parse::<Platform>().unwrap(), Platform::Web);
        assert_eq!("".parse::<Platform>().unwrap(), Platform::Both);
        assert!("desktop".parse::<Platform>().is_err());
    }
}
