//! Financial summary tool definition.
//!
//! Fetches the monthly financial rows from the finance webhook, keeps the
//! rows that pass the validity check (non-empty month, numeric sales) and
//! renders each surviving row as a formatted multi-line block.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::config::Config;

use super::super::super::ToolError;
use super::super::common::{fetch_body, success_result};

const ENDPOINT: &str = "financial webhook";

/// Parameters for the financial summary tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct FinancialDataParams {}

/// One row of the webhook response, before validation.
///
/// The upstream sheet export is loosely typed: amounts arrive as numbers
/// or as numeric strings, and any field may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFinancialRow {
    #[serde(rename = "MONTH", default)]
    pub month: Option<Value>,

    #[serde(rename = "SALES", default)]
    pub sales: Option<Value>,

    #[serde(rename = "SPEND", default)]
    pub spend: Option<Value>,

    #[serde(rename = "PROFIT", default)]
    pub profit: Option<Value>,

    #[serde(rename = "Gross Margin", default)]
    pub gross_margin: Option<Value>,

    #[serde(default)]
    pub bills: Option<Value>,

    #[serde(default)]
    pub rent: Option<Value>,

    #[serde(default)]
    pub groceries: Option<Value>,
}

/// A validated financial record, one per month.
///
/// Exists only for the duration of a single invocation. A record is built
/// only if the month is a non-empty string and sales is a finite number;
/// the remaining amounts default to zero when absent or non-numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialRecord {
    pub month: String,
    pub sales: f64,
    pub spend: f64,
    pub profit: f64,
    pub gross_margin: f64,
    pub bills: f64,
    pub rent: f64,
    pub groceries: f64,
}

/// Financial summary tool - fetches and formats the monthly figures.
pub struct FinancialDataTool;

impl FinancialDataTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_financial_data";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Gets financial data";

    /// Execute the tool logic: one GET, filter, format.
    pub async fn execute(
        client: &reqwest::Client,
        config: &Config,
    ) -> Result<CallToolResult, ToolError> {
        info!("Fetching financial data");

        let body = fetch_body(client.get(&config.upstream.financial_webhook_url)).await?;
        let rows: Vec<RawFinancialRow> = serde_json::from_str(&body)
            .map_err(|e| ToolError::unexpected_shape(ENDPOINT, e.to_string()))?;

        let total = rows.len();
        let records = filter_rows(&rows);
        let dropped = total - records.len();
        if dropped > 0 {
            debug!(
                "Discarded {} of {} rows failing the month/sales check",
                dropped, total
            );
        }

        let summary = records
            .iter()
            .map(render_record)
            .collect::<Vec<_>>()
            .join("\n\n");

        Ok(success_result(format!(
            "Here's a summary of recent monthly financials:\n\n{}",
            summary
        )))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FinancialDataParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the tool router.
    pub fn create_route<S>(config: Arc<Config>, client: reqwest::Client) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            let client = client.clone();
            async move {
                let _params: FinancialDataParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&client, &config)
                    .await
                    .map_err(|e| McpError::internal_error(e.to_string(), None))
            }
            .boxed()
        })
    }
}

/// Keep the rows with a non-empty month and numeric sales.
pub fn filter_rows(rows: &[RawFinancialRow]) -> Vec<FinancialRecord> {
    rows.iter().filter_map(validate_row).collect()
}

/// Validate one raw row into a record, or reject it.
fn validate_row(raw: &RawFinancialRow) -> Option<FinancialRecord> {
    let month = raw.month.as_ref()?.as_str()?.to_string();
    if month.is_empty() {
        return None;
    }
    let sales = coerce_amount(raw.sales.as_ref())?;

    Some(FinancialRecord {
        month,
        sales,
        spend: coerce_amount(raw.spend.as_ref()).unwrap_or(0.0),
        profit: coerce_amount(raw.profit.as_ref()).unwrap_or(0.0),
        gross_margin: coerce_amount(raw.gross_margin.as_ref()).unwrap_or(0.0),
        bills: coerce_amount(raw.bills.as_ref()).unwrap_or(0.0),
        rent: coerce_amount(raw.rent.as_ref()).unwrap_or(0.0),
        groceries: coerce_amount(raw.groceries.as_ref()).unwrap_or(0.0),
    })
}

/// Coerce an amount to a finite number; numeric strings are accepted.
fn coerce_amount(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Render one record as a multi-line block.
fn render_record(record: &FinancialRecord) -> String {
    format!(
        "📅 **{}**\n\
         - Sales: KSH {}\n\
         - Spend: KSH {}\n\
         - Profit: KSH {}\n\
         - Gross Margin: KSH {}\n\
         - Bills: KSH {}\n\
         - Rent: KSH {}\n\
         - Groceries: KSH {}\n",
        record.month,
        format_amount(record.sales),
        format_amount(record.spend),
        format_amount(record.profit),
        format_amount(record.gross_margin),
        format_amount(record.bills),
        format_amount(record.rent),
        format_amount(record.groceries),
    )
}

/// Format an amount with thousands separators, e.g. `1234567` -> `1,234,567`.
///
/// Whole amounts render without a fractional part; others keep two digits.
fn format_amount(value: f64) -> String {
    let formatted = if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    };

    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}
