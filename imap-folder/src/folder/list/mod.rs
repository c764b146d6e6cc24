use async_trait::async_trait;

use crate::Result;

use super::Folders;

mod imap;
pub mod parser;

#[async_trait]
pub trait ListFolders: Send {
    /// List the names of all available folders (alias mailboxes), in
    /// the order sent by the server.
    async fn list_folders(&mut self) -> Result<Vec<String>>;

    /// List all available folders with their hierarchy delimiter and
    /// attributes, in the order sent by the server.
    async fn list_mailboxes(&mut self) -> Result<Folders>;
}
