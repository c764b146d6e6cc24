use async_trait::async_trait;

use crate::Result;

mod imap;

#[async_trait]
pub trait DeleteFolder: Send {
    /// Definitely delete the given folder.
    ///
    /// Manipulate with caution: all emails contained in the given
    /// folder are also definitely deleted. Default folders cannot be
    /// deleted.
    async fn delete_folder(&mut self, folder: &str) -> Result<()>;
}
