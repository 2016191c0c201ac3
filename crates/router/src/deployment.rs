//! Per chain factory deployments of the supported exchanges.

use {
    crate::pool::pair_provider::PairProvider,
    alloy_primitives::{B256, address},
    hex_literal::hex,
    model::{ChainId, ValidationError},
    num::rational::Ratio,
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
};

/// The Uniswap V2 fork a pool belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RouterVariant {
    Uniswap,
    SushiSwap,
    ApeSwap,
    PancakeSwap,
    QuickSwap,
}

impl RouterVariant {
    /// The swap fee charged on the input amount.
    pub fn default_fee(&self) -> Ratio<u32> {
        match self {
            Self::Uniswap | Self::SushiSwap | Self::QuickSwap => Ratio::new(3, 1000),
            Self::ApeSwap => Ratio::new(2, 1000),
            Self::PancakeSwap => Ratio::new(25, 10000),
        }
    }
}

pub const UNISWAP_INIT: [u8; 32] =
    hex!("96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f");
pub const SUSHISWAP_INIT: [u8; 32] =
    hex!("e18a34eb0e04b04f7a0ac29a6e80748dca96319b42c54d679cb821dca90c6303");
pub const APESWAP_INIT: [u8; 32] =
    hex!("f4ccce374816856d11f00e4069e7cada164065686fbef53c6167a63ec2fd8c5b");
pub const APESWAP_POLYGON_INIT: [u8; 32] =
    hex!("511f0f358fe530cda0859ec20becf391718fdf5a329be02f4c95361f3d6a42d8");
pub const PANCAKESWAP_INIT: [u8; 32] =
    hex!("00fb7f630766e6a796048ea87d01acd3068e8ff67d078148a3fa3f4a84f69bd5");

/// An exchange's factory on one chain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Deployment {
    pub chain_id: ChainId,
    pub variant: RouterVariant,
    pub pair_provider: PairProvider,
    /// Fraction of the input amount kept by the pool.
    pub fee: Ratio<u32>,
}

/// Lookup table of deployments keyed by chain and exchange.
#[derive(Clone, Debug, Default)]
pub struct Deployments(HashMap<(ChainId, RouterVariant), Deployment>);

impl Deployments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut deployments = Self::new();
        for (chain_id, variant, factory, init_code_digest) in [
            (
                ChainId::MAINNET,
                RouterVariant::Uniswap,
                address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f"),
                UNISWAP_INIT,
            ),
            (
                ChainId::MAINNET,
                RouterVariant::SushiSwap,
                address!("C0AEe478e3658e2610c5F7A4A2E1777cE9e4f2Ac"),
                SUSHISWAP_INIT,
            ),
            (
                ChainId::BNB,
                RouterVariant::ApeSwap,
                address!("0841BD0B734E4F5853f0dD8d7Ea041c241fb0Da6"),
                APESWAP_INIT,
            ),
            (
                ChainId::BNB,
                RouterVariant::PancakeSwap,
                address!("cA143Ce32Fe78f1f7019d7d551a6402fC5350c73"),
                PANCAKESWAP_INIT,
            ),
            (
                ChainId::POLYGON,
                RouterVariant::ApeSwap,
                address!("Cf083Be4164828f00cAE704EC15a36D711491284"),
                APESWAP_POLYGON_INIT,
            ),
            (
                ChainId::POLYGON,
                RouterVariant::QuickSwap,
                address!("5757371414417b8C6CAad45bAeF941aBc7d3Ab32"),
                UNISWAP_INIT,
            ),
        ] {
            deployments.insert(Deployment {
                chain_id,
                variant,
                pair_provider: PairProvider {
                    factory,
                    init_code_digest: B256::new(init_code_digest),
                },
                fee: variant.default_fee(),
            });
        }
        deployments
    }

    /// Registers a deployment, replacing any previous one for the same chain
    /// and exchange.
    pub fn insert(&mut self, deployment: Deployment) {
        self.0.insert((deployment.chain_id, deployment.variant), deployment);
    }

    pub fn get(
        &self,
        chain_id: ChainId,
        variant: RouterVariant,
    ) -> Result<&Deployment, ValidationError> {
        self.0
            .get(&(chain_id, variant))
            .ok_or_else(|| ValidationError::UnknownDeployment {
                chain_id,
                variant: variant.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
