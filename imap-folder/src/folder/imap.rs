use std::fmt;

use utf7_imap::{decode_utf7_imap as decode_utf7, encode_utf7_imap as encode_utf7};

use super::{config::FolderConfig, DefaultFolders, DEFAULT_FOLDERS};
use crate::{
    classify::{ClassifyFailure, FailureKind, SubstringClassifier},
    session::{ImapSession, Response},
};

/// The IMAP folder service.
///
/// The service borrows an already authenticated session for its
/// whole lifetime and sends exactly one command per folder
/// operation. It never connects, authenticates nor closes the
/// session: this stays the responsibility of the caller.
///
/// Because the session is mutably borrowed, only one command can be
/// in flight at a time. Callers sharing a session between tasks need
/// to serialize the access themselves, for example with a mutex.
///
/// Operations are exposed through the folder feature traits:
/// [`CreateFolder`](super::create::CreateFolder),
/// [`RenameFolder`](super::rename::RenameFolder),
/// [`DeleteFolder`](super::delete::DeleteFolder) and
/// [`ListFolders`](super::list::ListFolders).
pub struct ImapFolderService<'a, S: ImapSession + ?Sized> {
    pub(super) session: &'a mut S,
    pub(super) default_folders: &'a DefaultFolders,
    classifier: Box<dyn ClassifyFailure>,
    utf7: bool,
}

impl<'a, S: ImapSession + ?Sized> ImapFolderService<'a, S> {
    /// Create a new service on top of the given session, using the
    /// process-wide [`DEFAULT_FOLDERS`] and the
    /// [`SubstringClassifier`].
    pub fn new(session: &'a mut S) -> Self {
        Self {
            session,
            default_folders: &DEFAULT_FOLDERS,
            classifier: Box::new(SubstringClassifier),
            utf7: true,
        }
    }

    /// Create a new service on top of the given session, following
    /// the given configuration.
    pub fn from_config(session: &'a mut S, config: &FolderConfig) -> Self {
        Self {
            session,
            default_folders: &DEFAULT_FOLDERS,
            classifier: config.classifier().to_classifier(),
            utf7: config.is_utf7_enabled(),
        }
    }

    /// Replace the set of folders protected from deletion.
    pub fn with_default_folders(mut self, folders: &'a DefaultFolders) -> Self {
        self.default_folders = folders;
        self
    }

    /// Replace the strategy used to classify failed responses.
    pub fn with_classifier(mut self, classifier: impl ClassifyFailure + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Enable or disable the modified UTF-7 encoding of folder names.
    pub fn with_utf7(mut self, utf7: bool) -> Self {
        self.utf7 = utf7;
        self
    }

    pub(super) fn classify(&self, res: &Response) -> FailureKind {
        self.classifier.classify(res)
    }

    pub(super) fn encode(&self, folder: &str) -> String {
        if self.utf7 {
            encode_utf7(folder.to_owned())
        } else {
            folder.to_owned()
        }
    }

    /// Decode the given mailbox name from modified UTF-7, or return
    /// `None` if the name is not valid modified UTF-7.
    pub(super) fn decode(&self, mbox: &str) -> Option<String> {
        if !self.utf7 {
            return Some(mbox.to_owned());
        }

        if !is_valid_utf7(mbox) {
            return None;
        }

        Some(decode_utf7(mbox.to_owned()))
    }
}

impl<S: ImapSession + ?Sized> fmt::Debug for ImapFolderService<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImapFolderService")
            .field("default_folders", &self.default_folders)
            .field("classifier", &self.classifier)
            .field("utf7", &self.utf7)
            .finish_non_exhaustive()
    }
}

/// Check every `&…-` shift sequence of the given name (RFC 3501
/// §5.1.3): either `&-`, or modified base64 whose last character
/// carries no leftover bits.
fn is_valid_utf7(mbox: &str) -> bool {
    let mut rest = mbox;

    while let Some(start) = rest.find('&') {
        let Some(len) = rest[start + 1..].find('-') else {
            // no shift sequence can end, decoding leaves it as is
            return true;
        };

        let run = &rest[start + 1..start + 1 + len];
        rest = &rest[start + 2 + len..];

        if run.is_empty() {
            continue;
        }

        let Some(values) = run.chars().map(base64_value).collect::<Option<Vec<_>>>() else {
            return false;
        };

        let last = values[values.len() - 1];
        let valid = match values.len() % 4 {
            0 => true,
            2 => last & 0b1111 == 0,
            3 => last & 0b11 == 0,
            _ => false,
        };

        if !valid {
            return false;
        }
    }

    true
}

/// Value of a modified base64 character, where `,` replaces `/`.
fn base64_value(c: char) -> Option<u8> {
    let value = match c {
        'A'..='Z' => c as u8 - b'A',
        'a'..='z' => c as u8 - b'a' + 26,
        '0'..='9' => c as u8 - b'0' + 52,
        '+' => 62,
        ',' => 63,
        _ => return None,
    };

    Some(value)
}
