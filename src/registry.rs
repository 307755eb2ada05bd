//! Symbol to canonical coin-type resolution.
//!
//! Human-readable tickers map to normalized on-chain coin-type identifiers
//! (mainnet). Resolution is case-insensitive on the symbol. Anything not in
//! this table is unknown and must fail closed before a capability call.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Normalized coin type for native SUI.
pub const SUI_COIN_TYPE: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI";

/// Decimal places of the native SUI coin.
pub const SUI_DECIMALS: u8 = 9;

static COIN_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("SUI", SUI_COIN_TYPE),
        (
            "USDC",
            "0xdba34672e30cb065b1f93e3ab55318768fd6fef66c15942c9f7cb846e2f900e7::usdc::USDC",
        ),
        (
            "USDT",
            "0xc060006111016b8a020ad5b33834984a437aaa7d3c74c18e09a95d48aceab08c::coin::COIN",
        ),
        (
            "WETH",
            "0xaf8cd5edc19c4512f4259f0bee101a40d41ebed738ade5874359610ef8eeced5::coin::COIN",
        ),
        (
            "WBTC",
            "0x027792d9fed7f9844eb4839566001bb6f6cb4804f66aa2da6fe1ee242d896881::coin::COIN",
        ),
        (
            "SOL",
            "0xb7844e289a8410e50fb3ca48d69eb9cf29e27d223ef90353fe1bd8e27ff8f3f8::coin::COIN",
        ),
        (
            "DEEP",
            "0xdeeb7a4662eec9f2f3def03fb937a663dddaa2e215b8078a284d026b7946c270::deep::DEEP",
        ),
        (
            "BUCK",
            "0xce7ff77a83ea0cb6fd39bd8748e2ec89a3f41e8efdc3f4eb123e0ca37b184db2::buck::BUCK",
        ),
        (
            "AUSD",
            "0x2053d08c1e2bd02791056171aab0fd12bd7cd7efad2ab8f6b9c8902f14df2ff2::ausd::AUSD",
        ),
        (
            "BLUE",
            "0xe1b45a0e641b9955a20aa0ad1c1f4ad86aad8afb07296d4085e349a50e90bdca::blue::BLUE",
        ),
        (
            "NS",
            "0x5145494a5f5100e645e4b0aa950fa6b68f614e8c59e17bc5ded3495123a79178::ns::NS",
        ),
        (
            "CETUS",
            "0x06864a6f921804860930db6ddbe2e16acdf8504495ea7481637a1c8b9a8fe54b::cetus::CETUS",
        ),
    ])
});

/// Resolve a ticker symbol to its canonical coin type, if known.
pub fn coin_type_for_symbol(symbol: &str) -> Option<&'static str> {
    COIN_TYPES.get(symbol.to_uppercase().as_str()).copied()
}
