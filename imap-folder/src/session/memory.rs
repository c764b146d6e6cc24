use std::collections::VecDeque;

use async_trait::async_trait;
use tracing::{debug, trace};

use super::{ImapSession, Response, SessionError, SessionResult};

const INBOX: &str = "INBOX";
const DELIMITER: char = '/';

/// A command received by a [`MemorySession`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Create(String),
    Rename(String, String),
    Delete(String),
    List,
}

/// An IMAP session backed by an in-memory, ordered list of mailboxes.
///
/// The session answers like a server supporting RFC 5530 response
/// codes would, using `/` as hierarchy delimiter. Every received
/// command is recorded, and replies can be scripted in advance to
/// simulate server refusals or transport faults.
#[derive(Debug)]
pub struct MemorySession {
    mailboxes: Vec<String>,
    commands: Vec<Command>,
    scripted: VecDeque<SessionResult<Response>>,
}

impl MemorySession {
    /// Create a session containing only the INBOX.
    pub fn new() -> Self {
        Self::with_mailboxes([INBOX])
    }

    /// Create a session containing the given mailboxes, in order.
    pub fn with_mailboxes(mailboxes: impl IntoIterator<Item = impl ToString>) -> Self {
        Self {
            mailboxes: mailboxes.into_iter().map(|mbox| mbox.to_string()).collect(),
            commands: Vec::new(),
            scripted: VecDeque::new(),
        }
    }

    /// Return the current mailboxes, in order.
    pub fn mailboxes(&self) -> &[String] {
        &self.mailboxes
    }

    /// Return all the commands received so far.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Answer the next command with the given response, whatever the
    /// state of the mailboxes.
    pub fn push_response(&mut self, res: Response) {
        self.scripted.push_back(Ok(res));
    }

    /// Fail the next command with the given fault, as a broken
    /// connection would.
    pub fn push_fault(&mut self, err: impl Into<SessionError>) {
        self.scripted.push_back(Err(err.into()));
    }

    fn position(&self, mailbox: &str) -> Option<usize> {
        self.mailboxes.iter().position(|mbox| same_mailbox(mbox, mailbox))
    }

    fn exec(&mut self, cmd: Command) -> SessionResult<Response> {
        debug!(?cmd, "memory session received command");

        self.commands.push(cmd.clone());

        if let Some(res) = self.scripted.pop_front() {
            trace!("answering with scripted reply");
            return res;
        }

        let res = match cmd {
            Command::Create(mbox) => self.create_mailbox(mbox),
            Command::Rename(from, to) => self.rename_mailbox(&from, to),
            Command::Delete(mbox) => self.delete_mailbox(&mbox),
            Command::List => self.list_mailboxes(),
        };

        trace!(status = %res.status, "answering with computed reply");
        Ok(res)
    }

    fn create_mailbox(&mut self, mbox: String) -> Response {
        let mbox = mbox.trim_end_matches(DELIMITER).to_owned();

        if mbox.is_empty() {
            return Response::bad("Missing mailbox name");
        }

        if self.position(&mbox).is_some() {
            return Response::no("[ALREADYEXISTS] Mailbox already exists");
        }

        self.mailboxes.push(mbox);
        Response::ok(["CREATE completed"])
    }

    fn rename_mailbox(&mut self, from: &str, to: String) -> Response {
        let Some(pos) = self.position(from) else {
            return Response::no("[NONEXISTENT] Mailbox does not exist");
        };

        if self.position(&to).is_some() {
            return Response::no("[ALREADYEXISTS] Mailbox already exists");
        }

        let prefix = format!("{}{DELIMITER}", self.mailboxes[pos]);
        for mbox in self.mailboxes.iter_mut() {
            if let Some(rest) = mbox.strip_prefix(&prefix) {
                *mbox = format!("{to}{DELIMITER}{rest}");
            }
        }

        self.mailboxes[pos] = to;
        Response::ok(["RENAME completed"])
    }

    fn delete_mailbox(&mut self, mbox: &str) -> Response {
        if mbox.eq_ignore_ascii_case(INBOX) {
            return Response::no("[CANNOT] Cannot delete INBOX");
        }

        let Some(pos) = self.position(mbox) else {
            return Response::no("[NONEXISTENT] Mailbox does not exist");
        };

        self.mailboxes.remove(pos);
        Response::ok(["DELETE completed"])
    }

    fn list_mailboxes(&self) -> Response {
        let lines = self.mailboxes.iter().map(|mbox| {
            let prefix = format!("{mbox}{DELIMITER}");
            let attr = if self.mailboxes.iter().any(|m| m.starts_with(&prefix)) {
                "\\HasChildren"
            } else {
                "\\HasNoChildren"
            };
            format!("({attr}) \"{DELIMITER}\" {}", quote(mbox))
        });

        Response::ok(lines)
    }
}

impl Default for MemorySession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImapSession for MemorySession {
    async fn create(&mut self, mailbox: &str) -> SessionResult<Response> {
        self.exec(Command::Create(mailbox.to_owned()))
    }

    async fn rename(&mut self, from: &str, to: &str) -> SessionResult<Response> {
        self.exec(Command::Rename(from.to_owned(), to.to_owned()))
    }

    async fn delete(&mut self, mailbox: &str) -> SessionResult<Response> {
        self.exec(Command::Delete(mailbox.to_owned()))
    }

    async fn list(&mut self) -> SessionResult<Response> {
        self.exec(Command::List)
    }
}

/// INBOX is case-insensitive, other names are not (RFC 3501 §5.1).
fn same_mailbox(a: &str, b: &str) -> bool {
    if a.eq_ignore_ascii_case(INBOX) {
        b.eq_ignore_ascii_case(INBOX)
    } else {
        a == b
    }
}

/// Quote the mailbox name when it cannot be sent as an atom.
fn quote(mbox: &str) -> String {
    let is_atom = !mbox.is_empty()
        && mbox
            .chars()
            .all(|c| c.is_ascii_graphic() && !"(){%*\"\\".contains(c));

    if is_atom {
        mbox.to_owned()
    } else {
        let escaped = mbox.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{escaped}\"")
    }
}
