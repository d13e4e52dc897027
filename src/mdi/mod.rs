//! MDI: line protocol driving an [`Engine`](crate::engine::Engine) from stdin

pub mod command;
pub mod protocol;

pub use command::parse_command;
pub use protocol::{handle_command, Flow};
