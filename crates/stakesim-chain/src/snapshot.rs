// crates/stakesim-chain/src/snapshot.rs
//
// Live council staking snapshot.
//
// One JSON-RPC round trip fetches the current staking state; a pure
// consolidation step turns the node's parallel address/amount arrays into
// an ascending stake vector. No retry: callers impose their own timeout
// and cancellation around the fetch.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stakesim_core::{SimError, MIN_STAKE};

/// Default public JSON-RPC endpoint serving the staking snapshot.
pub const DEFAULT_RPC_ENDPOINT: &str = "https://public-en.node.kaia.io";

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize)]
struct JsonRpcRequest {
    jsonrpc: &'static str,
    method: &'static str,
    params: serde_json::Value,
    id: u64,
}

/// JSON-RPC 2.0 response envelope carrying the staking snapshot.
#[derive(Debug, Clone, Deserialize)]
struct JsonRpcResponse {
    result: Option<StakingInfo>,
    error: Option<serde_json::Value>,
}

/// The staking snapshot payload: parallel arrays of council reward
/// addresses and their staking amounts. The same reward address may appear
/// more than once; consolidation sums its entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingInfo {
    pub council_reward_addrs: Vec<String>,
    pub council_staking_amounts: Vec<u64>,
}

/// Fetch the latest staking snapshot and consolidate it into a stake
/// vector.
///
/// # Errors
/// Any transport, HTTP, or response-shape failure is `SimError::Source`;
/// the error is terminal for this invocation and no partial result is
/// returned.
pub async fn fetch_staking_snapshot(endpoint: &str) -> Result<Vec<u64>, SimError> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0",
        method: "kaia_getStakingInfo",
        params: serde_json::json!(["latest"]),
        id: 1,
    };

    let client = reqwest::Client::new();
    let response = client
        .post(endpoint)
        .json(&request)
        .send()
        .await
        .map_err(|e| SimError::Source(format!("staking info request failed: {}", e)))?;

    let envelope: JsonRpcResponse = response
        .json()
        .await
        .map_err(|e| SimError::Source(format!("malformed staking info response: {}", e)))?;

    if let Some(err) = envelope.error {
        return Err(SimError::Source(format!("node returned error: {}", err)));
    }
    let info = envelope
        .result
        .ok_or_else(|| SimError::Source("staking info response had no result".to_string()))?;

    if info.council_reward_addrs.len() != info.council_staking_amounts.len() {
        return Err(SimError::Source(format!(
            "mismatched council arrays: {} addresses, {} amounts",
            info.council_reward_addrs.len(),
            info.council_staking_amounts.len()
        )));
    }

    Ok(consolidate_staking(&info))
}

/// Aggregate staking amounts per reward address, drop aggregates below the
/// council minimum, and sort ascending.
pub fn consolidate_staking(info: &StakingInfo) -> Vec<u64> {
    let mut by_addr: HashMap<&str, u64> = HashMap::new();
    for (addr, amount) in info
        .council_reward_addrs
        .iter()
        .zip(&info.council_staking_amounts)
    {
        *by_addr.entry(addr.as_str()).or_insert(0) += amount;
    }

    let mut stakes: Vec<u64> = by_addr
        .into_values()
        .filter(|&stake| stake >= MIN_STAKE)
        .collect();
    stakes.sort_unstable();
    stakes
}
