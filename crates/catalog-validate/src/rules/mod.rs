//! Violation categories.
//!
//! Categories group violations by the check family that produced them so
//! reports can be summarized per family.

mod category;

pub use category::Category;
