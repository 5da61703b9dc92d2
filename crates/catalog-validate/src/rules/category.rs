use serde::{Deserialize, Serialize};
use std::fmt;

/// Check family a violation belongs to, in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The component name does not resolve.
    Resolution,
    /// Supplied props and variant.
    Props,
    /// Required props that were not supplied.
    Presence,
    /// Touch targets, contrast and ARIA attributes.
    Accessibility,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Resolution,
        Category::Props,
        Category::Presence,
        Category::Accessibility,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Resolution => "resolution",
            Category::Props => "props",
            Category::Presence => "presence",
            Category::Accessibility => "accessibility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
