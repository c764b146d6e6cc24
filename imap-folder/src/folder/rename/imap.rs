use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::{
    classify::FailureKind,
    folder::ImapFolderService,
    session::ImapSession,
    Error, Result,
};

use super::RenameFolder;

#[async_trait]
impl<'a, S: ImapSession + ?Sized> RenameFolder for ImapFolderService<'a, S> {
    async fn rename_folder(&mut self, from: &str, to: &str) -> Result<()> {
        debug!(from, to, "renaming imap folder");

        let from_mbox = self.encode(from);
        let to_mbox = self.encode(to);
        debug!(%from_mbox, %to_mbox, "utf7 encoded folders");

        let res = match self.session.rename(&from_mbox, &to_mbox).await {
            Ok(res) => res,
            Err(err) => {
                error!(from, to, %err, "cannot rename imap folder");
                let (from, to) = (from.to_owned(), to.to_owned());
                return Err(Error::RenameFolderSessionError(err, from, to));
            }
        };

        if !res.is_ok() {
            if self.classify(&res) == FailureKind::NotFound {
                error!(from, to, "cannot rename imap folder: folder does not exist");
                let (from, to) = (from.to_owned(), to.to_owned());
                return Err(Error::RenameFolderNotFoundError(from, to));
            }

            let reason = res.reason();
            error!(from, to, status = %res.status, %reason, "cannot rename imap folder");
            let (from, to) = (from.to_owned(), to.to_owned());
            return Err(Error::RenameFolderError(from, to, reason));
        }

        info!(from, to, "imap folder successfully renamed");
        Ok(())
    }
}
