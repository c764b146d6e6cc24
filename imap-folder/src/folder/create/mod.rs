use async_trait::async_trait;

use crate::Result;

mod imap;

#[async_trait]
pub trait CreateFolder: Send {
    /// Create the given folder.
    ///
    /// Fails with [`ErrorKind::FolderExists`](crate::ErrorKind) when
    /// the server reports that the folder already exists.
    async fn create_folder(&mut self, folder: &str) -> Result<()>;
}
