//! Invoke command - dry-runs a contract method

use super::CommandResult;
use anyhow::{bail, Context, Result};
use neo_primitives::UInt160;
use neo_rpc::ContractClient;
use serde_json::Value;

pub async fn execute(
    client: &ContractClient,
    contract: &UInt160,
    method: &str,
    args: Option<&str>,
) -> CommandResult {
    let args = parse_args(args)?;
    let result = client
        .test_invoke_json(contract, method, &args)
        .await
        .context("test invoke failed")?;

    Ok(serde_json::to_string_pretty(&result)?)
}

/// Reads `--args` as a JSON array; no flag means no arguments.
fn parse_args(args: Option<&str>) -> Result<Vec<Value>> {
    let Some(text) = args else {
        return Ok(Vec::new());
    };
    match serde_json::from_str::<Value>(text).context("--args is not valid JSON")? {
        Value::Array(items) => Ok(items),
        other => bail!("--args must be a JSON array, got {other}"),
    }
}
