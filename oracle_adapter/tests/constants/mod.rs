use common_constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use multiversx_sc::types::{TestAddress, TestTokenIdentifier};
use multiversx_sc_scenario::imports::MxscPath;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const RISK_ENGINE_ADDRESS: TestAddress = TestAddress::new("risk-engine");
pub const OTHER_SOURCE_ADDRESS: TestAddress = TestAddress::new("other-source");

pub const ORACLE_ADAPTER_PATH: MxscPath = MxscPath::new("output/oracle-adapter.mxsc.json");
pub const AMM_MOCK_PATH: MxscPath = MxscPath::new("../amm_mock/output/amm-mock.mxsc.json");
pub const TWAP_MOCK_PATH: MxscPath = MxscPath::new("../twap_mock/output/twap-mock.mxsc.json");

pub const WEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-abcdef");
pub const XEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("XEGLD-abcdef");
pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const USDC_DECIMALS: u8 = 6;
pub const WBTC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WBTC-abcdef");
pub const WBTC_DECIMALS: u8 = 8;
pub const EGLD_DECIMALS: u8 = 18;
pub const INVALID_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("NOT-A-TOKEN");

pub const MAIN_POOL_ID: u64 = 1;
pub const ISOLATED_POOL_ID: u64 = 2;

pub const PERIOD_30_MINUTES: u64 = 30 * SECONDS_PER_MINUTE;
pub const PERIOD_1_HOUR: u64 = SECONDS_PER_HOUR;

pub const DEFAULT_LIQUIDITY: u64 = 1_000_000_000;

pub const SOURCE_SET_EVENT: &[u8] = b"source_set";
pub const CONFIG_SET_EVENT: &[u8] = b"config_set";
pub const PARAMETER_SET_EVENT: &[u8] = b"parameter_set";
