//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod account;
pub mod common;
pub mod finance;
pub mod greeting;

pub use account::{
    ActivateAccountParams, ActivateAccountTool, AutoMessagesParams, AutoMessagesTool,
    HasPictureParams, HasPictureTool,
};
pub use finance::{BillsDataParams, BillsDataTool, FinancialDataParams, FinancialDataTool};
pub use greeting::{GoodbyeParams, GoodbyeTool, HelloWorldParams, HelloWorldTool};
