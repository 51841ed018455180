#![no_std]

pub mod proxy_amm_engine;
pub mod proxy_twap_source;
