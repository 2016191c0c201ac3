//! Addresses of commonly used tokens.

use {alloy_primitives::Address, hex_literal::hex};

/// Address for the `WETH` token on mainnet.
pub const WETH: Address = Address::new(hex!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"));

/// Address for the `GNO` token on mainnet.
pub const GNO: Address = Address::new(hex!("6810e776880c02933d47db1b9fc05908e5386b96"));

/// Address for the `DAI` token on mainnet.
pub const DAI: Address = Address::new(hex!("6B175474E89094C44Da98b954EedeAC495271d0F"));

/// Address for the `USDC` token on mainnet.
pub const USDC: Address = Address::new(hex!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"));

/// Address for the `WBNB` token on BNB chain.
pub const WBNB: Address = Address::new(hex!("bb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"));

/// Address for the `BANANA` token on BNB chain.
pub const BANANA: Address = Address::new(hex!("603c7f932ED1fc6575303D8Fb018fDCBb0f39a95"));

/// Address for the `CAKE` token on BNB chain.
pub const CAKE: Address = Address::new(hex!("0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82"));
