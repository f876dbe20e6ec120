//! Deploy command - builds, and optionally sends, a deploy transaction
//!
//! The script file holds raw VM bytecode, not a NEF container.

use super::CommandResult;
use anyhow::Context;
use neo_core::ContractManifest;
use neo_crypto::KeyPair;
use neo_rpc::ContractClient;
use serde_json::json;
use std::path::Path;
use tracing::info;

pub async fn execute(
    client: &ContractClient,
    script: &Path,
    manifest: &Path,
    wif: &str,
    broadcast: bool,
    address_version: u8,
) -> CommandResult {
    let bytecode =
        std::fs::read(script).with_context(|| format!("failed to read {}", script.display()))?;
    let manifest_text = std::fs::read_to_string(manifest)
        .with_context(|| format!("failed to read {}", manifest.display()))?;
    let manifest = ContractManifest::parse(&manifest_text).context("invalid manifest")?;
    let key = KeyPair::from_wif(wif).context("invalid WIF")?;

    if broadcast {
        let hash = client
            .deploy(&bytecode, &manifest, &key)
            .await
            .context("deploy failed")?;
        info!(%hash, contract = %manifest.name, "deploy transaction accepted");
        return Ok(json!({ "hash": hash.to_string() }).to_string());
    }

    let signed = client
        .create_deploy_contract_tx(&bytecode, &manifest, &key)
        .await
        .context("failed to build deploy transaction")?;
    let output = json!({
        "hash": signed.hash()?.to_string(),
        "raw": signed.to_base64()?,
        "tx": signed.to_json(address_version)?,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
