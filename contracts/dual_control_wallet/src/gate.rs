use soroban_sdk::{log, Address, Env};

use crate::errors::WalletError;
use crate::oracle::{PriceOracleClient, PriceReading};

/// Reads the feed, mapping a failed call or a non-positive price to
/// `InvalidOracleReading`.
pub fn read_oracle(env: &Env, oracle: &Address) -> Result<PriceReading, WalletError> {
    let reading = match PriceOracleClient::new(env, oracle).try_latest_rate() {
        Ok(Ok(reading)) => reading,
        _ => return Err(WalletError::InvalidOracleReading),
    };

    if reading.price <= 0 {
        return Err(WalletError::InvalidOracleReading);
    }

    log!(env, "oracle reading", reading.price, reading.decimals);
    Ok(reading)
}

/// `balance * price / 10^decimals`, truncated.
pub fn reference_value(balance: i128, reading: &PriceReading) -> Result<u128, WalletError> {
    let balance = u128::try_from(balance).map_err(|_| WalletError::ArithmeticOverflow)?;
    let price = u128::try_from(reading.price).map_err(|_| WalletError::InvalidOracleReading)?;
    let scale = 10u128
        .checked_pow(reading.decimals)
        .ok_or(WalletError::ArithmeticOverflow)?;

    balance
        .checked_mul(price)
        .map(|scaled| scaled / scale)
        .ok_or(WalletError::ArithmeticOverflow)
}

/// A zero threshold means the gate has not been set up yet.
pub fn configured_threshold(threshold_value: u128) -> Result<u128, WalletError> {
    if threshold_value == 0 {
        return Err(WalletError::ThresholdNotConfigured);
    }
    Ok(threshold_value)
}

pub fn meets_threshold(held_value: u128, threshold_value: u128) -> bool {
    held_value >= threshold_value
}

/// Amount each payout target receives. With two targets the odd unit is
/// left in the wallet.
pub fn payout_share(balance: i128, target_count: u32) -> i128 {
    if target_count > 1 {
        balance / 2
    } else {
        balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(price: i128, decimals: u32) -> PriceReading {
        PriceReading { price, decimals }
    }

    #[test]
    fn test_reference_value_scales_by_decimals() {
        // 25 units at 123.456_789 each
        let value = reference_value(25, &reading(123_456_789, 6)).unwrap();
        assert_eq!(value, 3_086);
    }

    #[test]
    fn test_reference_value_truncates() {
        assert_eq!(reference_value(3, &reading(5, 1)).unwrap(), 1);
        assert_eq!(reference_value(1, &reading(9, 1)).unwrap(), 0);
    }

    #[test]
    fn test_reference_value_zero_decimals() {
        assert_eq!(reference_value(100, &reading(1, 0)).unwrap(), 100);
    }

    #[test]
    fn test_reference_value_overflow() {
        assert_eq!(
            reference_value(i128::MAX, &reading(i128::MAX, 0)),
            Err(WalletError::ArithmeticOverflow)
        );
        assert_eq!(
            reference_value(1, &reading(1, 40)),
            Err(WalletError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_meets_threshold() {
        assert!(meets_threshold(100, 50));
        assert!(meets_threshold(50, 50));
        assert!(!meets_threshold(49, 50));
    }

    #[test]
    fn test_configured_threshold() {
        assert_eq!(configured_threshold(50), Ok(50));
        assert_eq!(configured_threshold(0), Err(WalletError::ThresholdNotConfigured));
    }

    #[test]
    fn test_payout_share_rounds_down_for_two_targets() {
        assert_eq!(payout_share(101, 2), 50);
        assert_eq!(payout_share(100, 2), 50);
        assert_eq!(payout_share(1, 2), 0);
        assert_eq!(payout_share(101, 1), 101);
    }
}
