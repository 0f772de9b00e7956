//! Fixed seed tables and their conversion into aged peer addresses.

use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

use athrd_consensus::constants::{NODE_NETWORK, ONE_WEEK};
use rand::Rng;

use crate::params::{DnsSeed, SeedAddress, SeedSpec6};

pub const MAIN_DNS_SEEDS: [DnsSeed; 5] = [
    DnsSeed {
        name: "authoracoin.com",
        host: "dnsseed.authoracoin.com",
    },
    DnsSeed {
        name: "seed1.authoracoin.com",
        host: "seed1.authoracoin.com",
    },
    DnsSeed {
        name: "seed2.authoracoin.com",
        host: "seed2.authoracoin.com",
    },
    DnsSeed {
        name: "seed3.authoracoin.com",
        host: "seed3.authoracoin.com",
    },
    DnsSeed {
        name: "seed4.authoracoin.com",
        host: "seed4.authoracoin.com",
    },
];

// No fixed seeds have been published for either network yet.
pub const MAIN_FIXED_SEEDS: [SeedSpec6; 0] = [];
pub const TEST_FIXED_SEEDS: [SeedSpec6; 0] = [];

/// Turns compiled-in seeds into addresses last seen one to two weeks before `now`.
///
/// Peer discovery prefers fresher addresses, so fixed seeds only win when
/// nothing better is known.
pub fn convert_seed6<R: Rng + ?Sized>(
    specs: &[SeedSpec6],
    now: i64,
    rng: &mut R,
) -> Vec<SeedAddress> {
    specs
        .iter()
        .map(|spec| {
            let ip = Ipv6Addr::from(spec.addr);
            let ip = match ip.to_ipv4_mapped() {
                Some(v4) => IpAddr::V4(v4),
                None => IpAddr::V6(ip),
            };
            SeedAddress {
                addr: SocketAddr::new(ip, spec.port),
                services: NODE_NETWORK,
                last_seen: now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK,
            }
        })
        .collect()
}

pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// `convert_seed6` against the wall clock and the thread-local RNG.
pub fn fixed_seeds(specs: &[SeedSpec6]) -> Vec<SeedAddress> {
    convert_seed6(specs, unix_now(), &mut rand::thread_rng())
}
