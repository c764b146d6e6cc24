use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::{
    classify::FailureKind,
    folder::ImapFolderService,
    session::ImapSession,
    Error, Result,
};

use super::CreateFolder;

#[async_trait]
impl<'a, S: ImapSession + ?Sized> CreateFolder for ImapFolderService<'a, S> {
    async fn create_folder(&mut self, folder: &str) -> Result<()> {
        debug!(folder, "creating imap folder");

        let mbox = self.encode(folder);
        debug!(%mbox, "utf7 encoded folder");

        let res = match self.session.create(&mbox).await {
            Ok(res) => res,
            Err(err) => {
                error!(folder, %err, "cannot create imap folder");
                return Err(Error::CreateFolderSessionError(err, folder.to_owned()));
            }
        };

        if !res.is_ok() {
            if self.classify(&res) == FailureKind::AlreadyExists {
                error!(folder, "cannot create imap folder: folder already exists");
                return Err(Error::CreateFolderExistsError(folder.to_owned()));
            }

            let reason = res.reason();
            error!(folder, status = %res.status, %reason, "cannot create imap folder");
            return Err(Error::CreateFolderError(folder.to_owned(), reason));
        }

        info!(folder, "imap folder successfully created");
        Ok(())
    }
}
