//! Finance tool definitions.
//!
//! Tools backed by the n8n finance webhooks: a monthly financial summary
//! and a bills report. Both take no parameters and perform exactly one
//! outbound GET request.

mod bills;
mod summary;

pub use bills::{BillsDataParams, BillsDataTool};
pub use summary::{FinancialDataParams, FinancialDataTool, FinancialRecord};
