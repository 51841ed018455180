#![no_std]

pub static ERROR_ALREADY_INITIALIZED: &[u8] = b"Price source already initialized.";

pub static ERROR_SOURCE_NOT_SET: &[u8] = b"Price source not set.";

pub static ERROR_INVALID_QUOTE_TOKEN: &[u8] = b"Invalid quote token.";

pub static ERROR_INVALID_QUOTE_DECIMALS: &[u8] = b"Invalid quote decimals.";

pub static ERROR_INVALID_PERIOD: &[u8] = b"Invalid period.";

pub static ERROR_ILLIQUID_POOL: &[u8] = b"Oracle pool has no liquidity.";

pub static ERROR_UNKNOWN_PARAMETER: &[u8] = b"Unknown parameter.";

pub static ERROR_INVALID_PARAMETER_VALUE: &[u8] = b"Invalid parameter value.";

pub static ERROR_CONFIG_NOT_FOUND: &[u8] = b"Oracle config not found.";

pub static ERROR_PRICE_OVERFLOW: &[u8] = b"Normalized price overflows 256 bits.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";

pub static ERROR_NO_PRICE_FOR_PERIOD: &[u8] = b"No price for this period.";
