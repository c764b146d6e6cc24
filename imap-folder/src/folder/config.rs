use crate::classify::ClassifierKind;

/// The folder service configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub struct FolderConfig {
    /// Define how failed responses are classified.
    ///
    /// Defaults to [`ClassifierKind::Substring`], which recognizes
    /// the `NONEXISTENT` and `ALREADYEXISTS` keywords anywhere in the
    /// server response. Use [`ClassifierKind::ResponseCode`] for
    /// servers sending RFC 5530 response codes.
    pub classifier: Option<ClassifierKind>,

    /// Enable the IMAP modified UTF-7 encoding of folder names.
    ///
    /// When enabled (the default), folder names are encoded before
    /// being sent and decoded when listed, so that non-ASCII names
    /// round-trip.
    pub utf7: Option<bool>,
}

impl FolderConfig {
    pub fn classifier(&self) -> ClassifierKind {
        self.classifier.unwrap_or_default()
    }

    pub fn is_utf7_enabled(&self) -> bool {
        self.utf7.unwrap_or(true)
    }
}
