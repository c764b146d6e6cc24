use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::{
    folder::{Folder, Folders, ImapFolderService},
    session::ImapSession,
    Error, Result,
};

use super::{parser, ListFolders};

#[async_trait]
impl<'a, S: ImapSession + ?Sized> ListFolders for ImapFolderService<'a, S> {
    async fn list_folders(&mut self) -> Result<Vec<String>> {
        Ok(self.list_mailboxes().await?.names())
    }

    async fn list_mailboxes(&mut self) -> Result<Folders> {
        debug!("listing imap folders");

        let res = match self.session.list().await {
            Ok(res) => res,
            Err(err) => {
                error!(%err, "cannot list imap folders");
                return Err(Error::ListFoldersSessionError(err));
            }
        };

        if !res.is_ok() {
            let reason = res.reason();
            error!(status = %res.status, %reason, "cannot list imap folders");
            return Err(Error::ListFoldersError(reason));
        }

        let folders = res
            .lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| self.parse_list_line(index, line))
            .collect::<Result<Folders>>()?;

        debug!("imap folders: {folders:#?}");
        info!(count = folders.len(), "imap folders successfully listed");

        Ok(folders)
    }
}

impl<'a, S: ImapSession + ?Sized> ImapFolderService<'a, S> {
    fn parse_list_line(&self, index: usize, line: Vec<u8>) -> Result<Folder> {
        let line = String::from_utf8(line).map_err(|err| {
            error!(index, %err, "cannot decode imap list response line");
            Error::DecodeListLineError(err, index)
        })?;

        let mut folder = parser::parse_list_line(&line).map_err(|err| {
            error!(index, %line, %err, "cannot parse imap list response line");
            Error::ParseListLineError(err, line.clone())
        })?;

        folder.name = self.decode(&folder.name).ok_or_else(|| {
            error!(index, name = %folder.name, "cannot decode imap folder name from utf7");
            Error::DecodeUtf7ListLineError(folder.name.clone(), index)
        })?;

        Ok(folder)
    }
}
