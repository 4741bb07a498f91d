// crates/stakesim-chain/src/lib.rs
//
// stakesim-chain: the live stake source — fetches the current council
// staking snapshot from a remote node over JSON-RPC and consolidates it
// into an ordinary stake vector for the simulation engine.

pub mod snapshot;

pub use snapshot::{
    consolidate_staking, fetch_staking_snapshot, StakingInfo, DEFAULT_RPC_ENDPOINT,
};
