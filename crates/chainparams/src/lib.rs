//! Per-network chain parameters: genesis blocks, checkpoints, seeds and the
//! process-wide network selector.

pub mod error;
pub mod genesis;
pub mod networks;
pub mod params;
pub mod registry;
pub mod seeds;

use std::sync::{Arc, OnceLock};

use athrd_consensus::Network;

pub use error::{IntegrityError, ParamsError};
pub use params::{
    AuxiliaryParams, Base58Prefixes, Base58Type, ChainParams, DnsSeed, NetworkFlags, SeedAddress,
    SeedSpec6,
};
pub use registry::{ModifiableParams, ParamsRegistry};

static REGISTRY: OnceLock<ParamsRegistry> = OnceLock::new();

/// Builds and verifies the process-wide registry.
///
/// Hosts call this once before spawning threads so an integrity failure can be
/// reported and turned into an exit status instead of a panic.
pub fn initialize() -> Result<&'static ParamsRegistry, ParamsError> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }
    let registry = ParamsRegistry::new()?;
    Ok(REGISTRY.get_or_init(|| registry))
}

fn registry() -> &'static ParamsRegistry {
    match initialize() {
        Ok(registry) => registry,
        Err(err) => panic!("{err}"),
    }
}

pub fn params(network: Network) -> Arc<ChainParams> {
    registry().get(network)
}

pub fn select_params(network: Network) {
    registry().select(network);
}

pub fn active_params() -> Result<Arc<ChainParams>, ParamsError> {
    registry().active()
}

pub fn modifiable_params() -> Result<ModifiableParams<'static>, ParamsError> {
    registry().modifiable()
}
