//! Per chain native currency registry.

use {
    crate::{Amount, ChainId, Currency, NativeCurrency, Token, ValidationError},
    alloy_primitives::address,
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
};

/// The gas asset of a chain and the ERC20 token wrapping it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Network {
    pub native: NativeCurrency,
    pub wrapped: Token,
}

/// Wrapping configuration for the chains a caller works with.
///
/// This is a plain value that is passed to whatever needs to translate
/// between native currencies and tokens, so differently configured
/// registries can coexist.
#[derive(Clone, Debug, Default)]
pub struct Networks(HashMap<ChainId, Network>);

impl Networks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mainnet, BNB chain and Polygon.
    pub fn builtin() -> Self {
        let native = |decimals, symbol: &str, name: &str| NativeCurrency {
            decimals,
            symbol: symbol.to_string(),
            name: name.to_string(),
        };
        let mut networks = Self::new();
        for (chain_id, native, wrapped) in [
            (
                ChainId::MAINNET,
                native(18, "ETH", "Ether"),
                Token::new(
                    ChainId::MAINNET,
                    address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
                    18,
                )
                .with_symbol("WETH")
                .with_name("Wrapped Ether"),
            ),
            (
                ChainId::BNB,
                native(18, "BNB", "BNB"),
                Token::new(
                    ChainId::BNB,
                    address!("bb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
                    18,
                )
                .with_symbol("WBNB")
                .with_name("Wrapped BNB"),
            ),
            (
                ChainId::POLYGON,
                native(18, "MATIC", "Matic"),
                Token::new(
                    ChainId::POLYGON,
                    address!("0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"),
                    18,
                )
                .with_symbol("WMATIC")
                .with_name("Wrapped Matic"),
            ),
        ] {
            networks
                .insert(chain_id, Network { native, wrapped })
                .expect("builtin wrapped tokens live on their chain");
        }
        networks
    }

    /// Registers a chain, replacing any previous entry for it.
    pub fn insert(&mut self, chain_id: ChainId, network: Network) -> Result<(), ValidationError> {
        if network.wrapped.chain_id != chain_id {
            return Err(ValidationError::ChainMismatch);
        }
        self.0.insert(chain_id, network);
        Ok(())
    }

    pub fn get(&self, chain_id: ChainId) -> Result<&Network, ValidationError> {
        self.0
            .get(&chain_id)
            .ok_or(ValidationError::UnknownNetwork(chain_id))
    }

    /// The token that represents `currency` in pools on `chain_id`.
    pub fn wrap(&self, currency: &Currency, chain_id: ChainId) -> Result<Token, ValidationError> {
        match currency {
            Currency::Token(token) if token.chain_id == chain_id => Ok(token.clone()),
            Currency::Token(_) => Err(ValidationError::ChainMismatch),
            Currency::Native(native) => {
                let network = self.get(chain_id)?;
                if *native != network.native {
                    return Err(ValidationError::currency_mismatch(
                        &network.native.clone().into(),
                        currency,
                    ));
                }
                Ok(network.wrapped.clone())
            }
        }
    }

    pub fn wrap_amount(
        &self,
        amount: &Amount,
        chain_id: ChainId,
    ) -> Result<Amount, ValidationError> {
        Ok(amount.with_currency(self.wrap(amount.currency(), chain_id)?))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, alloy_primitives::U256};

    #[test]
    fn wraps_native_currency() {
        let networks = Networks::builtin();
        let ether = Currency::from(NativeCurrency::ether());
        let weth = networks.wrap(&ether, ChainId::MAINNET).unwrap();
        assert_eq!(weth.address, testlib::tokens::WETH);

        let amount = networks
            .wrap_amount(&Amount::new(NativeCurrency::ether(), U256::from(7)), ChainId::MAINNET)
            .unwrap();
        assert_eq!(amount.token().unwrap(), &weth);
        assert_eq!(amount.raw(), U256::from(7));
    }

    #[test]
    fn tokens_wrap_to_themselves() {
        let networks = Networks::builtin();
        let dai = Token::new(ChainId::MAINNET, testlib::tokens::DAI, 18);
        assert_eq!(
            networks.wrap(&dai.clone().into(), ChainId::MAINNET).unwrap(),
            dai
        );
        assert_eq!(
            networks.wrap(&dai.into(), ChainId::BNB),
            Err(ValidationError::ChainMismatch)
        );
    }

    #[test]
    fn rejects_foreign_native_currency() {
        let networks = Networks::builtin();
        let ether = Currency::from(NativeCurrency::ether());
        assert!(matches!(
            networks.wrap(&ether, ChainId::BNB),
            Err(ValidationError::CurrencyMismatch { .. })
        ));
        assert_eq!(
            networks.wrap(&ether, ChainId(5)),
            Err(ValidationError::UnknownNetwork(ChainId(5)))
        );
    }

    #[test]
    fn registries_are_independent() {
        let mut custom = Networks::new();
        let wrapped = Token::new(ChainId(5), testlib::tokens::WETH, 18);
        custom
            .insert(
                ChainId(5),
                Network {
                    native: NativeCurrency::ether(),
                    wrapped: wrapped.clone(),
                },
            )
            .unwrap();
        let ether = Currency::from(NativeCurrency::ether());
        assert_eq!(custom.wrap(&ether, ChainId(5)).unwrap(), wrapped);
        assert!(Networks::builtin().wrap(&ether, ChainId(5)).is_err());
        assert_eq!(
            custom.insert(
                ChainId(6),
                Network {
                    native: NativeCurrency::ether(),
                    wrapped,
                }
            ),
            Err(ValidationError::ChainMismatch)
        );
    }
}
