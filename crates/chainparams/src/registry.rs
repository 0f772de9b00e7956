//! Holds every network's parameters and tracks which one is active.

use std::sync::{Arc, PoisonError, RwLock};

use athrd_consensus::Network;
use athrd_log::{log_debug, log_error, log_info, log_warn};

use crate::error::ParamsError;
use crate::networks::{main_params, regtest_params, testnet_params, unit_test_params};
use crate::params::ChainParams;

/// All four parameter sets plus the selected network.
///
/// Selection is expected to happen once at startup before other threads read
/// it. Only the UnitTest set can change after construction, through
/// [`ModifiableParams`]; readers holding an earlier `Arc` keep the old values.
#[derive(Debug)]
pub struct ParamsRegistry {
    main: Arc<ChainParams>,
    testnet: Arc<ChainParams>,
    regtest: Arc<ChainParams>,
    unit_test: RwLock<Arc<ChainParams>>,
    active: RwLock<Option<Network>>,
}

impl ParamsRegistry {
    /// Builds and verifies every network; nothing is selected yet.
    pub fn new() -> Result<Self, ParamsError> {
        let built = main_params().and_then(|main| {
            log_debug!("built {} parameters", main.name());
            let testnet = testnet_params(&main)?;
            log_debug!("built {} parameters", testnet.name());
            let regtest = regtest_params(&testnet)?;
            log_debug!("built {} parameters", regtest.name());
            let unit_test = unit_test_params(&main)?;
            log_debug!("built {} parameters", unit_test.name());
            Ok((main, testnet, regtest, unit_test))
        });

        let (main, testnet, regtest, unit_test) = match built {
            Ok(sets) => sets,
            Err(err) => {
                log_error!("chain parameter integrity check failed: {err}");
                return Err(err.into());
            }
        };

        Ok(Self {
            main: Arc::new(main),
            testnet: Arc::new(testnet),
            regtest: Arc::new(regtest),
            unit_test: RwLock::new(Arc::new(unit_test)),
            active: RwLock::new(None),
        })
    }

    pub fn get(&self, network: Network) -> Arc<ChainParams> {
        match network {
            Network::Main => Arc::clone(&self.main),
            Network::Testnet => Arc::clone(&self.testnet),
            Network::Regtest => Arc::clone(&self.regtest),
            Network::UnitTest => Arc::clone(
                &self
                    .unit_test
                    .read()
                    .unwrap_or_else(PoisonError::into_inner),
            ),
        }
    }

    /// Marks `network` active. Switching to a different network is allowed but logged.
    pub fn select(&self, network: Network) {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        match *active {
            Some(previous) if previous == network => {}
            Some(previous) => {
                log_warn!("switching active network from {previous} to {network}");
            }
            None => {
                log_info!("selected {network} network parameters");
            }
        }
        *active = Some(network);
    }

    pub fn selected(&self) -> Option<Network> {
        *self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn active(&self) -> Result<Arc<ChainParams>, ParamsError> {
        self.selected()
            .map(|network| self.get(network))
            .ok_or(ParamsError::NoActiveNetwork)
    }

    /// Setter handle for the UnitTest parameters; fails for any other active network.
    pub fn modifiable(&self) -> Result<ModifiableParams<'_>, ParamsError> {
        match self.selected() {
            None => Err(ParamsError::NoActiveNetwork),
            Some(Network::UnitTest) => Ok(ModifiableParams {
                params: &self.unit_test,
            }),
            Some(network) => Err(ParamsError::NotModifiable(network)),
        }
    }
}

/// Write access to the handful of UnitTest fields tests may perturb.
#[derive(Debug)]
pub struct ModifiableParams<'a> {
    params: &'a RwLock<Arc<ChainParams>>,
}

impl ModifiableParams<'_> {
    fn update(&self, field: &str, apply: impl FnOnce(&mut ChainParams)) {
        let mut guard = self.params.write().unwrap_or_else(PoisonError::into_inner);
        apply(Arc::make_mut(&mut guard));
        log_debug!("unittest parameter {field} updated");
    }

    pub fn set_subsidy_halving_interval(&self, interval: i32) {
        self.update("subsidy_halving_interval", |params| {
            params.consensus.subsidy_halving_interval = interval;
        });
    }

    pub fn set_enforce_block_upgrade_majority(&self, majority: i32) {
        self.update("majority_enforce_block_upgrade", |params| {
            params.consensus.majority_enforce_block_upgrade = majority;
        });
    }

    pub fn set_reject_block_outdated_majority(&self, majority: i32) {
        self.update("majority_reject_block_outdated", |params| {
            params.consensus.majority_reject_block_outdated = majority;
        });
    }

    pub fn set_to_check_block_upgrade_majority(&self, window: i32) {
        self.update("majority_window", |params| {
            params.consensus.majority_window = window;
        });
    }

    pub fn set_default_consistency_checks(&self, enabled: bool) {
        self.update("default_consistency_checks", |params| {
            params.flags.default_consistency_checks = enabled;
        });
    }

    pub fn set_allow_min_difficulty_blocks(&self, enabled: bool) {
        self.update("allow_min_difficulty_blocks", |params| {
            params.flags.allow_min_difficulty_blocks = enabled;
        });
    }

    pub fn set_skip_proof_of_work_check(&self, enabled: bool) {
        self.update("skip_proof_of_work_check", |params| {
            params.flags.skip_proof_of_work_check = enabled;
        });
    }
}
