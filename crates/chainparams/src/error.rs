use athrd_consensus::{hash256_to_hex, Hash256, Network};
use athrd_pow::PowError;

/// A hard-coded parameter set failed its own consistency checks.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrityError {
    GenesisHash {
        network: Network,
        expected: Hash256,
        actual: Hash256,
    },
    MerkleRoot {
        network: Network,
        expected: Hash256,
        actual: Hash256,
    },
    GenesisProofOfWork {
        network: Network,
        reason: PowError,
    },
    CheckpointOrder {
        network: Network,
        height: u32,
    },
    CheckpointGenesis {
        network: Network,
        expected: Hash256,
        actual: Hash256,
    },
    InvalidConstant {
        network: Network,
        what: &'static str,
    },
}

impl std::fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrityError::GenesisHash {
                network,
                expected,
                actual,
            } => write!(
                f,
                "{network} genesis hash mismatch (expected {}, got {})",
                hash256_to_hex(expected),
                hash256_to_hex(actual)
            ),
            IntegrityError::MerkleRoot {
                network,
                expected,
                actual,
            } => write!(
                f,
                "{network} genesis merkle root mismatch (expected {}, got {})",
                hash256_to_hex(expected),
                hash256_to_hex(actual)
            ),
            IntegrityError::GenesisProofOfWork { network, reason } => {
                write!(f, "{network} genesis fails proof of work: {reason}")
            }
            IntegrityError::CheckpointOrder { network, height } => {
                write!(f, "{network} checkpoint at height {height} is out of order")
            }
            IntegrityError::CheckpointGenesis {
                network,
                expected,
                actual,
            } => write!(
                f,
                "{network} checkpoint at height 0 is {} but genesis is {}",
                hash256_to_hex(actual),
                hash256_to_hex(expected)
            ),
            IntegrityError::InvalidConstant { network, what } => {
                write!(f, "{network} has a malformed {what}")
            }
        }
    }
}

impl std::error::Error for IntegrityError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamsError {
    Integrity(IntegrityError),
    NoActiveNetwork,
    NotModifiable(Network),
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamsError::Integrity(err) => write!(f, "configuration integrity failure: {err}"),
            ParamsError::NoActiveNetwork => write!(f, "no network parameters selected"),
            ParamsError::NotModifiable(network) => {
                write!(f, "{network} parameters are not modifiable")
            }
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Integrity(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IntegrityError> for ParamsError {
    fn from(err: IntegrityError) -> Self {
        ParamsError::Integrity(err)
    }
}
