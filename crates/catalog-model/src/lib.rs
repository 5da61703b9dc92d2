pub mod color;
pub mod component;
pub mod dimension;
pub mod error;
pub mod platform;
pub mod token;
pub mod usage;

pub use color::Rgb;
pub use component::{
    AccessibilityConstraint, AllowedValue, ComponentDescriptor, ConstraintKind, ConstraintScope,
    PropDescriptor, PropType, VariantDescriptor,
};
pub use dimension::{REM_BASE_PX, parse_pixels};
pub use error::{ModelError, Result};
pub use platform::Platform;
pub use token::{Token, TokenCategory, TokenValue};
pub use usage::{CandidateUsage, MetricValue, UsageMetrics};
