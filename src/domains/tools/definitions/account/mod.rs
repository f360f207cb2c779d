//! Account tool definitions.
//!
//! Tools backed by the account management REST API. Each takes a customer
//! email, performs one request, and returns the raw JSON response
//! re-serialized as text without interpreting its fields.

mod activate;
mod auto_messages;
mod common;
mod has_picture;

pub use activate::{ActivateAccountParams, ActivateAccountTool};
pub use auto_messages::{AutoMessagesParams, AutoMessagesTool};
pub use has_picture::{HasPictureParams, HasPictureTool};
