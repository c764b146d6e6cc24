//! # Classify
//!
//! Module dedicated to the classification of failed IMAP responses.
//!
//! Servers mix free text and response codes when refusing a command,
//! so recognizing that a folder does not exist (or already exists)
//! depends on the server vocabulary. The [`ClassifyFailure`] trait
//! isolates this knowledge: [`SubstringClassifier`] searches the RFC
//! 5530 keywords anywhere in the response text, while
//! [`ResponseCodeClassifier`] only trusts the bracketed response code.

use std::fmt;

use crate::session::Response;

const NONEXISTENT: &str = "NONEXISTENT";
const ALREADYEXISTS: &str = "ALREADYEXISTS";

/// The kind of failure found in a non-OK response.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FailureKind {
    /// The mailbox targeted by the command does not exist.
    NotFound,
    /// The mailbox targeted by the command already exists.
    AlreadyExists,
    /// Any other failure.
    Other,
}

/// Map a failed response to a [`FailureKind`].
pub trait ClassifyFailure: fmt::Debug + Send + Sync {
    fn classify(&self, res: &Response) -> FailureKind;
}

/// Classifier searching keywords anywhere in the response text.
///
/// This is the most lenient strategy: `NO Mailbox NONEXISTENT` is
/// classified as [`FailureKind::NotFound`], the same as `NO
/// [NONEXISTENT] Unknown mailbox`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SubstringClassifier;

impl ClassifyFailure for SubstringClassifier {
    fn classify(&self, res: &Response) -> FailureKind {
        let text = res.text();

        if text.contains(NONEXISTENT) {
            FailureKind::NotFound
        } else if text.contains(ALREADYEXISTS) {
            FailureKind::AlreadyExists
        } else {
            FailureKind::Other
        }
    }
}

/// Classifier reading the bracketed response code only.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ResponseCodeClassifier;

impl ClassifyFailure for ResponseCodeClassifier {
    fn classify(&self, res: &Response) -> FailureKind {
        match res.code() {
            Some(code) if code.eq_ignore_ascii_case(NONEXISTENT) => FailureKind::NotFound,
            Some(code) if code.eq_ignore_ascii_case(ALREADYEXISTS) => FailureKind::AlreadyExists,
            _ => FailureKind::Other,
        }
    }
}

/// The configurable classifier strategies.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ClassifierKind {
    /// See [`SubstringClassifier`].
    #[default]
    Substring,
    /// See [`ResponseCodeClassifier`].
    ResponseCode,
}

impl ClassifierKind {
    pub fn to_classifier(self) -> Box<dyn ClassifyFailure> {
        match self {
            Self::Substring => Box::new(SubstringClassifier),
            Self::ResponseCode => Box::new(ResponseCodeClassifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassifyFailure, FailureKind::*, ResponseCodeClassifier, SubstringClassifier};
    use crate::session::Response;

    #[test]
    fn substring() {
        let classify = |text: &str| SubstringClassifier.classify(&Response::no(text));

        assert_eq!(classify("[NONEXISTENT] Unknown mailbox"), NotFound);
        assert_eq!(classify("Mailbox NONEXISTENT"), NotFound);
        assert_eq!(classify("[ALREADYEXISTS] Mailbox exists"), AlreadyExists);
        assert_eq!(classify("[CANNOT] Invalid name"), Other);
        assert_eq!(classify("nonexistent"), Other);
        assert_eq!(SubstringClassifier.classify(&Response::default()), Other);
    }

    #[test]
    fn response_code() {
        let classify = |text: &str| ResponseCodeClassifier.classify(&Response::no(text));

        assert_eq!(classify("[NONEXISTENT] Unknown mailbox"), NotFound);
        assert_eq!(classify("[nonexistent] Unknown mailbox"), NotFound);
        assert_eq!(classify("[ALREADYEXISTS] Mailbox exists"), AlreadyExists);
        assert_eq!(classify("Mailbox NONEXISTENT"), Other);
        assert_eq!(classify("[TRYCREATE] ALREADYEXISTS"), Other);
    }
}
