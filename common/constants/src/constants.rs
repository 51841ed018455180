#![no_std]

/// Canonical fixed-point unit of every normalized price (1.0 = 10^18)
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Quote asset precision accepted by the adapter, inclusive bounds
pub const MIN_QUOTE_DECIMALS: u8 = 1;
pub const MAX_QUOTE_DECIMALS: u8 = 18;

/// TWAP ratios are Q128 fractions: true value = raw / 2^128
pub const Q128_BITS: usize = 128;

/// Normalized prices are unsigned 256-bit values for the risk engine
pub const MAX_PRICE_BITS: usize = 256;

/// Oracle-grade pools are full range with no swap fee
pub const ORACLE_POOL_FEE: u64 = 0;
pub const MAX_TICK_SPACING: u32 = 354_892;

/// Names accepted by `setParameter`
pub const PERIOD_PARAMETER: &[u8] = b"period";

/// TWAP window units
pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;
