use crate::{
    client::{params, BundlerClient},
    debug_api::DebugApi,
    error::{ClientError, ClientResult},
    methods::debug,
};
use async_trait::async_trait;
use bundler_client_primitives::{BundlingMode, RawUserOperation, UserOperation};
use ethers::{
    types::{Address, H256},
    utils::to_checksum,
};
use jsonrpsee::core::client::ClientT;
use serde::de::IgnoredAny;
use std::str::FromStr;

#[async_trait]
impl<C> DebugApi for BundlerClient<C>
where
    C: ClientT + Send + Sync,
{
    async fn clear_state(&self) -> ClientResult<()> {
        let _: IgnoredAny = self.request(debug::CLEAR_STATE, params![]).await?;
        Ok(())
    }

    async fn dump_mempool(&self, entry_point: Address) -> ClientResult<Vec<UserOperation>> {
        let uos: Vec<Option<RawUserOperation>> =
            self.request(debug::DUMP_MEMPOOL, params![to_checksum(&entry_point, None)]).await?;

        Ok(uos.into_iter().flatten().map(UserOperation::from).collect())
    }

    async fn send_bundle_now(&self) -> ClientResult<Option<H256>> {
        let res: Option<String> = self.request(debug::SEND_BUNDLE_NOW, params![]).await?;

        match res {
            Some(hash) if !hash.is_empty() => H256::from_str(&hash).map(Some).map_err(|err| {
                ClientError::Decode(serde::de::Error::custom(format!(
                    "invalid bundle transaction hash {hash}: {err}"
                )))
            }),
            _ => Ok(None),
        }
    }

    async fn set_bundling_mode(&self, mode: BundlingMode) -> ClientResult<()> {
        let _: IgnoredAny = self.request(debug::SET_BUNDLING_MODE, params![mode]).await?;
        Ok(())
    }
}
