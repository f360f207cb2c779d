//! Greeting tool definitions.
//!
//! Two pure tools with no upstream call: `hello_world` and `goodbye`.
//! They are deterministic string transforms of the provided name.

mod goodbye;
mod hello;

pub use goodbye::{GoodbyeParams, GoodbyeTool};
pub use hello::{HelloWorldParams, HelloWorldTool};
