//! Asynchronous library to manage IMAP folders.
//!
//! The main purpose of this library is to manage folders (as known as
//! mailboxes) of an IMAP account without caring about how the
//! connection to the server is established. The connection is
//! abstracted by the [`ImapSession`](crate::session::ImapSession)
//! trait: anything able to send CREATE, RENAME, DELETE and LIST
//! commands and to report their status can be used.
//!
//! The [`ImapFolderService`](crate::folder::ImapFolderService)
//! borrows such a session and exposes the following folder features:
//!
//! - [`CreateFolder`](crate::folder::create::CreateFolder)
//! - [`RenameFolder`](crate::folder::rename::RenameFolder)
//! - [`DeleteFolder`](crate::folder::delete::DeleteFolder)
//! - [`ListFolders`](crate::folder::list::ListFolders)
//!
//! Server responses are translated into a small set of typed errors,
//! see [`ErrorKind`].
//!
//! See examples in the /tests folder.

pub mod classify;
mod error;
pub mod folder;
pub mod session;

#[doc(inline)]
pub use self::{
    error::{Error, ErrorKind, Result},
    folder::{
        create::CreateFolder, delete::DeleteFolder, list::ListFolders, rename::RenameFolder,
        Folder, Folders, ImapFolderService,
    },
    session::{ImapSession, MemorySession, Response, Status},
};
