//! Agent profile: typed policy records, defaults, overrides and the
//! plain-mapping accessor consumed by the agent runtime.

pub mod builder;
pub mod default;
pub mod error;
pub mod mapping;
pub mod overrides;
pub mod tools;
pub mod types;

pub use builder::*;
pub use error::*;
pub use overrides::*;
pub use tools::*;
pub use types::*;
