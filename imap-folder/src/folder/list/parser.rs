//! # LIST response parser
//!
//! This module contains the parser of LIST response lines, as
//! described in RFC 3501 §7.2.2. Parsing is based on the great lib
//! [chumsky].
//!
//! Lines may start with the untagged `* LIST ` prefix or directly
//! with the attributes, depending on the session. Mailbox names can
//! be quoted strings, or sent as is up to the end of the line. IMAP
//! literals are not supported.

use chumsky::prelude::*;
use thiserror::Error;

use crate::folder::Folder;

/// Error dedicated to LIST response line parsing.
#[derive(Debug, Error)]
#[error("{}", display_errors(.0))]
pub struct Error(pub Vec<Rich<'static, char>>);

fn display_errors(errs: &[Rich<'static, char>]) -> String {
    errs.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

type ParserError<'a> = extra::Err<Rich<'a, char>>;

/// Parse the given LIST response line into a [`Folder`].
///
/// The folder name is returned as sent by the server, it still needs
/// to be decoded from modified UTF-7.
pub(crate) fn parse_list_line(line: &str) -> Result<Folder, Error> {
    list_line()
        .parse(line.trim_end())
        .into_result()
        .map_err(|errs| Error(errs.into_iter().map(|err| err.into_owned()).collect()))
}

fn list_line<'a>() -> impl Parser<'a, &'a str, Folder, ParserError<'a>> + Clone {
    prefix()
        .or_not()
        .ignore_then(attributes())
        .then_ignore(space())
        .then(delimiter())
        .then_ignore(space())
        .then(mailbox())
        .then_ignore(end())
        .map(|((attributes, delimiter), name)| Folder {
            name,
            delimiter,
            attributes,
        })
}

fn space<'a>() -> impl Parser<'a, &'a str, (), ParserError<'a>> + Clone {
    just(' ').repeated().at_least(1).labelled("space")
}

fn prefix<'a>() -> impl Parser<'a, &'a str, (), ParserError<'a>> + Clone {
    just('*')
        .then(space())
        .then(choice((just("LIST"), just("LSUB"), just("XLIST"))))
        .then(space())
        .ignored()
        .labelled("`* LIST`")
}

fn attributes<'a>() -> impl Parser<'a, &'a str, Vec<String>, ParserError<'a>> + Clone {
    attribute()
        .separated_by(space())
        .collect::<Vec<_>>()
        .delimited_by(just('('), just(')'))
        .labelled("(attributes)")
}

fn attribute<'a>() -> impl Parser<'a, &'a str, String, ParserError<'a>> + Clone {
    just('\\')
        .or_not()
        .then(none_of("()\\\" {").repeated().at_least(1).collect::<String>())
        .map(|(backslash, name)| match backslash {
            Some(_) => format!("\\{name}"),
            None => name,
        })
        .labelled("attribute")
}

fn delimiter<'a>() -> impl Parser<'a, &'a str, Option<char>, ParserError<'a>> + Clone {
    choice((
        quoted_char().delimited_by(just('"'), just('"')).map(Some),
        just("NIL").to(None),
    ))
    .labelled("delimiter")
}

fn mailbox<'a>() -> impl Parser<'a, &'a str, String, ParserError<'a>> + Clone {
    choice((
        quoted_char()
            .repeated()
            .collect::<String>()
            .delimited_by(just('"'), just('"')),
        none_of("\"{")
            .then(any().repeated().collect::<String>())
            .map(|(first, rest)| format!("{first}{rest}")),
    ))
    .labelled("mailbox")
}

/// A character of a quoted string, with `\"` and `\\` escapes.
fn quoted_char<'a>() -> impl Parser<'a, &'a str, char, ParserError<'a>> + Clone {
    choice((just('\\').ignore_then(one_of("\\\"")), none_of("\\\"")))
}
