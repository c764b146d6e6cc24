use std::{error::Error as _, string::FromUtf8Error};

use imap_folder::{
    folder::list::parser, ErrorKind, Folder, ImapFolderService, ListFolders, MemorySession,
    Response, Status,
};

#[test_log::test(tokio::test)]
async fn test_list_folders_keeps_server_order() {
    let mut session = MemorySession::new();
    session.push_response(Response::ok([
        r#"(\HasNoChildren) "/" INBOX"#,
        r#"(\HasNoChildren) "/" Sent"#,
    ]));

    let mut imap = ImapFolderService::new(&mut session);
    assert_eq!(imap.list_folders().await.unwrap(), ["INBOX", "Sent"]);
}

#[test_log::test(tokio::test)]
async fn test_list_folders_empty() {
    let mut session = MemorySession::new();
    session.push_response(Response::ok(Vec::<Vec<u8>>::new()));

    let mut imap = ImapFolderService::new(&mut session);
    assert!(imap.list_folders().await.unwrap().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_list_mailboxes() {
    let mut session = MemorySession::new();
    session.push_response(Response::ok([
        "* LIST (\\HasNoChildren) \".\" INBOX\r\n",
        "* LIST (\\HasChildren \\Noselect) \".\" \"[Gmail]\"\r\n",
        "* LIST (\\HasNoChildren \\Sent) \".\" \"[Gmail].Sent Mail\"\r\n",
        "* LIST () NIL &AMk-t&AOk-\r\n",
    ]));

    let mut imap = ImapFolderService::new(&mut session);
    let folders = imap.list_mailboxes().await.unwrap();

    assert_eq!(
        *folders,
        vec![
            Folder {
                name: "INBOX".into(),
                delimiter: Some('.'),
                attributes: vec!["\\HasNoChildren".into()],
            },
            Folder {
                name: "[Gmail]".into(),
                delimiter: Some('.'),
                attributes: vec!["\\HasChildren".into(), "\\Noselect".into()],
            },
            Folder {
                name: "[Gmail].Sent Mail".into(),
                delimiter: Some('.'),
                attributes: vec!["\\HasNoChildren".into(), "\\Sent".into()],
            },
            Folder {
                name: "Été".into(),
                delimiter: None,
                attributes: vec![],
            },
        ]
    );

    let selectable: Vec<_> = folders
        .iter()
        .filter(|folder| folder.is_selectable())
        .map(|folder| folder.name.as_str())
        .collect();
    assert_eq!(selectable, ["INBOX", "[Gmail].Sent Mail", "Été"]);
}

#[test_log::test(tokio::test)]
async fn test_list_folders_refused() {
    let mut session = MemorySession::new();
    session.push_response(Response::new(Status::Bad, ["Invalid arguments"]));

    let mut imap = ImapFolderService::new(&mut session);
    let err = imap.list_folders().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FolderOperation);
    assert_eq!(err.to_string(), "cannot list folders: Invalid arguments");
    assert!(err.source().is_none());
}

#[test_log::test(tokio::test)]
async fn test_list_folders_malformed_line() {
    let mut session = MemorySession::new();
    session.push_response(Response::ok([
        r#"(\HasNoChildren) "/" INBOX"#,
        r#"(\HasNoChildren) INBOX"#,
    ]));

    let mut imap = ImapFolderService::new(&mut session);
    let err = imap.list_folders().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FolderOperation);
    assert_eq!(
        err.to_string(),
        r#"cannot list folders: cannot parse response line "(\\HasNoChildren) INBOX""#
    );
    assert!(err.source().unwrap().is::<parser::Error>());
}

#[test_log::test(tokio::test)]
async fn test_list_folders_invalid_utf8() {
    let mut session = MemorySession::new();
    session.push_response(Response::ok([b"() \"/\" \xff\xfe".to_vec()]));

    let mut imap = ImapFolderService::new(&mut session);
    let err = imap.list_folders().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FolderOperation);
    assert!(err.source().unwrap().is::<FromUtf8Error>());
}

#[test_log::test(tokio::test)]
async fn test_list_folders_without_utf7() {
    let mut session = MemorySession::new();
    session.push_response(Response::ok(["() \"/\" &AMk-t&AOk-"]));

    let mut imap = ImapFolderService::new(&mut session).with_utf7(false);
    assert_eq!(imap.list_folders().await.unwrap(), ["&AMk-t&AOk-"]);
}

#[test_log::test(tokio::test)]
async fn test_list_folders_invalid_utf7() {
    let mut session = MemorySession::with_mailboxes(["INBOX", "R&D-Team"]);

    let mut imap = ImapFolderService::new(&mut session);
    let err = imap.list_folders().await.unwrap_err();

    assert!(err.is_folder_operation());
    assert_eq!(
        err.to_string(),
        r#"cannot list folders: invalid modified UTF-7 folder name "R&D-Team" in response line 1"#
    );

    let mut session = MemorySession::new();
    session.push_response(Response::ok([
        r#"(\HasNoChildren) "/" "Tom & Jerry-Archive""#,
    ]));

    let mut imap = ImapFolderService::new(&mut session);
    let err = imap.list_mailboxes().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FolderOperation);
}

#[test_log::test(tokio::test)]
async fn test_list_folders_invalid_utf7_without_utf7() {
    let mut session = MemorySession::with_mailboxes(["INBOX", "R&D-Team"]);

    let mut imap = ImapFolderService::new(&mut session).with_utf7(false);
    assert_eq!(imap.list_folders().await.unwrap(), ["INBOX", "R&D-Team"]);
}
