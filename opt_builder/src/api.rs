mod core;
mod matches;
mod parameter;

pub use self::core::{Command, CommandConfig};
pub use matches::Matches;
pub use parameter::{Parameter, ParameterConfig, Transform};
