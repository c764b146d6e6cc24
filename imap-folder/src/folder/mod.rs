//! # Folder module
//!
//! Module dedicated to folder (as known as mailbox) management.
//!
//! The main entities are [`Folder`], [`Folders`] and the
//! [`ImapFolderService`] operating on them.
//!
//! The [`config`] module exposes the configuration of the service.
//!
//! Folder features reside in their own module as well: [`create`],
//! [`rename`], [`delete`], [`list`].
pub mod config;
pub mod create;
pub mod delete;
mod imap;
pub mod list;
pub mod rename;

use std::{
    collections::HashSet,
    fmt,
    ops::{Deref, DerefMut},
};

use once_cell::sync::Lazy;

#[doc(inline)]
pub use self::imap::ImapFolderService;

pub const INBOX: &str = "INBOX";
pub const SENT: &str = "Sent";
pub const DRAFTS: &str = "Drafts";
pub const TRASH: &str = "Trash";

/// The process-wide set of default folders.
///
/// Default folders are the well-known folders of an account. They
/// cannot be deleted through the [`ImapFolderService`].
pub static DEFAULT_FOLDERS: Lazy<DefaultFolders> = Lazy::new(DefaultFolders::default);

/// The set of default folders.
///
/// The INBOX name is matched case-insensitively, as required by the
/// IMAP protocol. Other names are matched exactly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DefaultFolders(HashSet<String>);

impl DefaultFolders {
    /// Return `true` if the given folder is a default one.
    pub fn contains(&self, folder: impl AsRef<str>) -> bool {
        let folder = folder.as_ref();

        if folder.eq_ignore_ascii_case(INBOX) {
            self.0.iter().any(|f| f.eq_ignore_ascii_case(INBOX))
        } else {
            self.0.contains(folder)
        }
    }
}

impl Default for DefaultFolders {
    fn default() -> Self {
        Self::from_iter([INBOX, SENT, DRAFTS, TRASH])
    }
}

impl<T: ToString> FromIterator<T> for DefaultFolders {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(|f| f.to_string()).collect())
    }
}

/// The folder structure.
///
/// The folder is a container for emails, known as mailbox in the
/// IMAP protocol.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub struct Folder {
    /// The folder name, decoded.
    pub name: String,

    /// The hierarchy delimiter, if the server uses one.
    pub delimiter: Option<char>,

    /// The folder attributes as sent by the server, like
    /// `\HasNoChildren`.
    pub attributes: Vec<String>,
}

impl Folder {
    /// Return `true` if the folder has the given attribute. The
    /// comparison is case-insensitive.
    pub fn has_attribute(&self, attr: impl AsRef<str>) -> bool {
        let attr = attr.as_ref();
        self.attributes.iter().any(|a| a.eq_ignore_ascii_case(attr))
    }

    /// Return `false` if the folder cannot be selected, in which case
    /// it exists only as a level of the hierarchy.
    pub fn is_selectable(&self) -> bool {
        !self.has_attribute("\\Noselect") && !self.has_attribute("\\NonExistent")
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The list of folders.
///
/// The order is the one sent by the server.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Folders(Vec<Folder>);

impl Folders {
    /// Return the folder names, in order.
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|folder| folder.name.clone()).collect()
    }
}

impl Deref for Folders {
    type Target = Vec<Folder>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Folders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl IntoIterator for Folders {
    type Item = Folder;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Folder> for Folders {
    fn from_iter<T: IntoIterator<Item = Folder>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{DefaultFolders, Folder, Folders, DEFAULT_FOLDERS};

    #[test]
    fn default_folders() {
        assert!(DEFAULT_FOLDERS.contains("INBOX"));
        assert!(DEFAULT_FOLDERS.contains("inbox"));
        assert!(DEFAULT_FOLDERS.contains("Sent"));
        assert!(DEFAULT_FOLDERS.contains("Drafts"));
        assert!(DEFAULT_FOLDERS.contains("Trash"));

        assert!(!DEFAULT_FOLDERS.contains("sent"));
        assert!(!DEFAULT_FOLDERS.contains("Archive"));
        assert!(!DEFAULT_FOLDERS.contains(""));
    }

    #[test]
    fn custom_default_folders() {
        let folders = DefaultFolders::from_iter(["Archive"]);

        assert!(folders.contains("Archive"));
        assert!(!folders.contains("INBOX"));
    }

    #[test]
    fn selectable() {
        let folder = Folder {
            name: "[Gmail]".into(),
            delimiter: Some('/'),
            attributes: vec!["\\NoSelect".into(), "\\HasChildren".into()],
        };
        assert!(!folder.is_selectable());

        let folder = Folder {
            name: "INBOX".into(),
            delimiter: Some('/'),
            attributes: vec!["\\HasNoChildren".into()],
        };
        assert!(folder.is_selectable());
    }

    #[test]
    fn retain_selectable() {
        let mut folders = Folders::from_iter([
            Folder {
                name: "[Gmail]".into(),
                delimiter: Some('/'),
                attributes: vec!["\\Noselect".into()],
            },
            Folder {
                name: "[Gmail]/Sent Mail".into(),
                delimiter: Some('/'),
                attributes: vec!["\\Sent".into()],
            },
        ]);

        folders.retain(Folder::is_selectable);

        assert_eq!(folders.names(), ["[Gmail]/Sent Mail"]);
    }
}
