//! # Error
//!
//! Module dedicated to folder errors. It contains an [`Error`] enum
//! based on [`thiserror::Error`], its [`ErrorKind`] discriminant and a
//! type alias [`Result`].

use std::{fmt, result, string::FromUtf8Error};

use thiserror::Error;

use crate::{folder::list::parser, session::SessionError};

/// The global `Result` alias of the library.
pub type Result<T> = result::Result<T, Error>;

/// The global `Error` enum of the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot create folder {0}: folder already exists")]
    CreateFolderExistsError(String),
    #[error("cannot create folder {0}: {1}")]
    CreateFolderError(String, String),
    #[error("cannot create folder {1}")]
    CreateFolderSessionError(#[source] SessionError, String),

    #[error("cannot rename folder {0} to {1}: folder does not exist")]
    RenameFolderNotFoundError(String, String),
    #[error("cannot rename folder {0} to {1}: {2}")]
    RenameFolderError(String, String, String),
    #[error("cannot rename folder {1} to {2}")]
    RenameFolderSessionError(#[source] SessionError, String, String),

    #[error("cannot delete default folder {0}")]
    DeleteDefaultFolderError(String),
    #[error("cannot delete folder {0}: folder does not exist")]
    DeleteFolderNotFoundError(String),
    #[error("cannot delete folder {0}: {1}")]
    DeleteFolderError(String, String),
    #[error("cannot delete folder {1}")]
    DeleteFolderSessionError(#[source] SessionError, String),

    #[error("cannot list folders: {0}")]
    ListFoldersError(String),
    #[error("cannot list folders")]
    ListFoldersSessionError(#[source] SessionError),
    #[error("cannot list folders: invalid UTF-8 in response line {1}")]
    DecodeListLineError(#[source] FromUtf8Error, usize),
    #[error("cannot list folders: cannot parse response line {1:?}")]
    ParseListLineError(#[source] parser::Error, String),
    #[error("cannot list folders: invalid modified UTF-7 folder name {0:?} in response line {1}")]
    DecodeUtf7ListLineError(String, usize),
}

impl Error {
    /// Return the kind of the error.
    ///
    /// Variants are detailed per operation, while callers usually
    /// only care about one of the four kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CreateFolderExistsError(..) => ErrorKind::FolderExists,
            Self::RenameFolderNotFoundError(..) | Self::DeleteFolderNotFoundError(..) => {
                ErrorKind::FolderNotFound
            }
            Self::DeleteDefaultFolderError(..) => ErrorKind::UnexpectedOperation,
            Self::CreateFolderError(..)
            | Self::CreateFolderSessionError(..)
            | Self::RenameFolderError(..)
            | Self::RenameFolderSessionError(..)
            | Self::DeleteFolderError(..)
            | Self::DeleteFolderSessionError(..)
            | Self::ListFoldersError(..)
            | Self::ListFoldersSessionError(..)
            | Self::DecodeListLineError(..)
            | Self::ParseListLineError(..)
            | Self::DecodeUtf7ListLineError(..) => ErrorKind::FolderOperation,
        }
    }

    pub fn is_folder_not_found(&self) -> bool {
        self.kind() == ErrorKind::FolderNotFound
    }

    pub fn is_folder_exists(&self) -> bool {
        self.kind() == ErrorKind::FolderExists
    }

    pub fn is_folder_operation(&self) -> bool {
        self.kind() == ErrorKind::FolderOperation
    }

    pub fn is_unexpected_operation(&self) -> bool {
        self.kind() == ErrorKind::UnexpectedOperation
    }
}

/// The kind of a folder [`Error`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The target folder does not exist on the server.
    FolderNotFound,

    /// The target folder already exists on the server.
    FolderExists,

    /// The server rejected the command, the session failed or the
    /// response could not be understood.
    ///
    /// When the failure comes from the session or from decoding the
    /// response, the original fault is available via
    /// [`std::error::Error::source`].
    FolderOperation,

    /// The operation was refused locally, before reaching the server.
    UnexpectedOperation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::FolderNotFound => write!(f, "folder not found"),
            Self::FolderExists => write!(f, "folder already exists"),
            Self::FolderOperation => write!(f, "folder operation failed"),
            Self::UnexpectedOperation => write!(f, "unexpected folder operation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error as _, io};

    use super::{Error, ErrorKind};

    #[test]
    fn kinds() {
        let err = Error::CreateFolderExistsError("Foo".into());
        assert_eq!(err.kind(), ErrorKind::FolderExists);
        assert!(err.is_folder_exists());

        let err = Error::DeleteFolderNotFoundError("Foo".into());
        assert_eq!(err.kind(), ErrorKind::FolderNotFound);
        assert!(err.is_folder_not_found());

        let err = Error::DeleteDefaultFolderError("INBOX".into());
        assert_eq!(err.kind(), ErrorKind::UnexpectedOperation);
        assert!(err.is_unexpected_operation());
        assert!(!err.is_folder_operation());

        let err = Error::ListFoldersError("NO [SERVERBUG]".into());
        assert_eq!(err.kind(), ErrorKind::FolderOperation);

        let err = Error::DecodeUtf7ListLineError("R&D-Team".into(), 1);
        assert!(err.is_folder_operation());
    }

    #[test]
    fn session_fault_is_source() {
        let fault = io::Error::new(io::ErrorKind::ConnectionReset, "reset");
        let err = Error::CreateFolderSessionError(Box::new(fault), "Foo".into());

        assert!(err.is_folder_operation());
        assert_eq!(err.to_string(), "cannot create folder Foo");

        let source = err.source().unwrap();
        let fault = source.downcast_ref::<io::Error>().unwrap();
        assert_eq!(fault.kind(), io::ErrorKind::ConnectionReset);
    }
}
