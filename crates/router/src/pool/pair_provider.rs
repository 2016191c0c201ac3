use {
    alloy_primitives::{Address, B256, keccak256},
    model::TokenPair,
    serde::{Deserialize, Serialize},
    tracing::instrument,
};

/// Derives pair contract addresses of a Uniswap V2 style factory.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PairProvider {
    pub factory: Address,
    pub init_code_digest: B256,
}

impl PairProvider {
    #[instrument(skip_all)]
    pub fn pair_address(&self, pair: &TokenPair) -> Address {
        let (token0, token1) = pair.get();

        // https://uniswap.org/docs/v2/javascript-SDK/getting-pair-addresses/
        let salt = {
            let mut buffer = [0u8; 40];
            buffer[0..20].copy_from_slice(token0.as_slice());
            buffer[20..40].copy_from_slice(token1.as_slice());
            keccak256(buffer)
        };
        create2_target_address(self.factory, &salt, &self.init_code_digest)
    }
}

fn create2_target_address(creator: Address, salt: &B256, init_code_digest: &B256) -> Address {
    let mut preimage = [0xff; 85];
    preimage[1..21].copy_from_slice(creator.as_slice());
    preimage[21..53].copy_from_slice(salt.as_slice());
    preimage[53..85].copy_from_slice(init_code_digest.as_slice());
    Address::from_slice(&keccak256(preimage)[12..])
}
