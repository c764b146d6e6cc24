//! # Session
//!
//! Module dedicated to the IMAP session capability consumed by the
//! folder service. The session is owned by the caller: it is
//! connected, authenticated and closed outside of this library.
//!
//! A [`MemorySession`] backed by an in-memory list of mailboxes is
//! also available, mostly for testing purpose.

mod memory;

use std::{error, fmt, result};

use async_trait::async_trait;

#[doc(inline)]
pub use self::memory::{Command, MemorySession};

/// The fault raised by a session while sending a command, for example
/// a dropped connection.
pub type SessionError = Box<dyn error::Error + Send + Sync>;

/// The `Result` alias of session commands.
pub type SessionResult<T> = result::Result<T, SessionError>;

/// The coarse status of a completed IMAP command.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Status {
    #[default]
    Ok,
    No,
    Bad,
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::No => write!(f, "NO"),
            Self::Bad => write!(f, "BAD"),
        }
    }
}

/// The response of a completed IMAP command.
///
/// For failed commands, the first line holds the text sent by the
/// server, which may start with a bracketed response code like
/// `[ALREADYEXISTS]`. For LIST commands, each line holds one mailbox.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Response {
    pub status: Status,
    pub lines: Vec<Vec<u8>>,
}

impl Response {
    pub fn new(status: Status, lines: impl IntoIterator<Item = impl Into<Vec<u8>>>) -> Self {
        Self {
            status,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a successful response with the given lines.
    pub fn ok(lines: impl IntoIterator<Item = impl Into<Vec<u8>>>) -> Self {
        Self::new(Status::Ok, lines)
    }

    /// Build a NO response with the given text.
    pub fn no(text: impl Into<Vec<u8>>) -> Self {
        Self::new(Status::No, [text])
    }

    /// Build a BAD response with the given text.
    pub fn bad(text: impl Into<Vec<u8>>) -> Self {
        Self::new(Status::Bad, [text])
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Return the first line as lossy string, or an empty string when
    /// the server sent nothing.
    pub fn text(&self) -> String {
        self.lines
            .first()
            .map(|line| String::from_utf8_lossy(line).trim_end().to_owned())
            .unwrap_or_default()
    }

    /// Return the text of the response, or its status when the
    /// server sent no text at all.
    pub fn reason(&self) -> String {
        let text = self.text();

        if text.is_empty() {
            self.status.to_string()
        } else {
            text
        }
    }

    /// Return the bracketed response code starting the first line,
    /// without its arguments.
    ///
    /// `[ALREADYEXISTS] Mailbox exists` gives `ALREADYEXISTS`.
    pub fn code(&self) -> Option<String> {
        let text = self.text();
        let (code, _) = text.trim_start().strip_prefix('[')?.split_once(']')?;
        let code = code.split_whitespace().next()?;
        Some(code.to_owned())
    }
}

/// The IMAP session capability.
///
/// Each function sends exactly one command and waits for its
/// completion. A returned `Err` means the command could not be
/// carried out at all (transport fault), while a server refusal is an
/// `Ok` response with a non-OK [`Status`].
///
/// Mailbox names are passed as they should appear on the wire: the
/// folder service takes care of the modified UTF-7 encoding, the
/// session takes care of quoting.
#[async_trait]
pub trait ImapSession: Send {
    /// Send a CREATE command.
    async fn create(&mut self, mailbox: &str) -> SessionResult<Response>;

    /// Send a RENAME command.
    async fn rename(&mut self, from: &str, to: &str) -> SessionResult<Response>;

    /// Send a DELETE command.
    async fn delete(&mut self, mailbox: &str) -> SessionResult<Response>;

    /// Send a LIST command matching every mailbox reachable from the
    /// root, `LIST "" "*"`.
    async fn list(&mut self) -> SessionResult<Response>;
}

#[async_trait]
impl<S: ImapSession + ?Sized> ImapSession for Box<S> {
    async fn create(&mut self, mailbox: &str) -> SessionResult<Response> {
        (**self).create(mailbox).await
    }

    async fn rename(&mut self, from: &str, to: &str) -> SessionResult<Response> {
        (**self).rename(from, to).await
    }

    async fn delete(&mut self, mailbox: &str) -> SessionResult<Response> {
        (**self).delete(mailbox).await
    }

    async fn list(&mut self) -> SessionResult<Response> {
        (**self).list().await
    }
}

#[cfg(test)]
mod tests {
    use super::{Response, Status};

    #[test]
    fn text() {
        assert_eq!(Response::ok(Vec::<Vec<u8>>::new()).text(), "");
        assert_eq!(Response::no("Mailbox exists\r\n").text(), "Mailbox exists");
    }

    #[test]
    fn reason() {
        assert_eq!(Response::no("Mailbox exists").reason(), "Mailbox exists");
        assert_eq!(Response::new(Status::No, Vec::<Vec<u8>>::new()).reason(), "NO");
        assert_eq!(Response::bad("\r\n").reason(), "BAD");
    }

    #[test]
    fn code() {
        let res = Response::no("[ALREADYEXISTS] Mailbox exists");
        assert_eq!(res.code().as_deref(), Some("ALREADYEXISTS"));

        let res = Response::no("[BADCHARSET (UTF-8)] Unsupported charset");
        assert_eq!(res.code().as_deref(), Some("BADCHARSET"));

        let res = Response::no("Mailbox NONEXISTENT");
        assert_eq!(res.code(), None);

        let res = Response::new(Status::Bad, Vec::<Vec<u8>>::new());
        assert_eq!(res.code(), None);
    }
}
