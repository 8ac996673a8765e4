use soroban_sdk::{contractclient, contracttype, Env};

/// Exchange rate of the held asset in the reference currency:
/// `price / 10^decimals` reference units per asset unit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceReading {
    pub price: i128,
    pub decimals: u32,
}

/// Price feed consulted by the fund gate.
///
/// A feed signals a stale or unavailable price either by failing the call
/// or by returning a non-positive `price`.
#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracle {
    fn latest_rate(env: Env) -> PriceReading;
}
