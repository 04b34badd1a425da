//! ReleaseIndex trait for fetching the list of toolchain releases

#[cfg(test)]
use mockall::automock;

use crate::release::error::FetchError;
use crate::release::types::Release;

/// Trait for fetching releases from an upstream release index
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseIndex: Send + Sync {
    /// Fetches every release the index knows about, stable or not
    ///
    /// # Returns
    /// * `Ok(Vec<Release>)` - Releases in the order the index lists them
    /// * `Err(FetchError)` - If the request fails or the body cannot be decoded
    async fn fetch_releases(&self) -> Result<Vec<Release>, FetchError>;
}
