//! Session orchestration from image load to reduced output

/// Owned session state and input dispatch
pub mod session;

pub use session::{Session, SessionEvent};
