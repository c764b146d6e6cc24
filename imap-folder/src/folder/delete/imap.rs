use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::{
    classify::FailureKind,
    folder::ImapFolderService,
    session::ImapSession,
    Error, Result,
};

use super::DeleteFolder;

#[async_trait]
impl<'a, S: ImapSession + ?Sized> DeleteFolder for ImapFolderService<'a, S> {
    async fn delete_folder(&mut self, folder: &str) -> Result<()> {
        // checked before reaching the server
        if self.default_folders.contains(folder) {
            error!(folder, "cannot delete default imap folder");
            return Err(Error::DeleteDefaultFolderError(folder.to_owned()));
        }

        debug!(folder, "deleting imap folder");

        let mbox = self.encode(folder);
        debug!(%mbox, "utf7 encoded folder");

        let res = match self.session.delete(&mbox).await {
            Ok(res) => res,
            Err(err) => {
                error!(folder, %err, "cannot delete imap folder");
                return Err(Error::DeleteFolderSessionError(err, folder.to_owned()));
            }
        };

        if !res.is_ok() {
            if self.classify(&res) == FailureKind::NotFound {
                error!(folder, "cannot delete imap folder: folder does not exist");
                return Err(Error::DeleteFolderNotFoundError(folder.to_owned()));
            }

            let reason = res.reason();
            error!(folder, status = %res.status, %reason, "cannot delete imap folder");
            return Err(Error::DeleteFolderError(folder.to_owned(), reason));
        }

        info!(folder, "imap folder successfully deleted");
        Ok(())
    }
}
