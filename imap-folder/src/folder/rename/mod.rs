use async_trait::async_trait;

use crate::Result;

mod imap;

#[async_trait]
pub trait RenameFolder: Send {
    /// Rename the given folder.
    ///
    /// Fails with [`ErrorKind::FolderNotFound`](crate::ErrorKind)
    /// when the server reports that the source folder does not exist.
    async fn rename_folder(&mut self, from: &str, to: &str) -> Result<()>;
}
