/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use boxnet::v1::api::{SoapRequest, parse_envelope};
    use boxnet::v1::lazy::Fetch;
    use boxnet::v1::messages::{
        Materializers, decode_tree_payload, decode_updates_payload, parse_export_tags,
        parse_folder_structure, parse_updates, parse_upload_response, unzip_first_entry,
    };
    use boxnet::v1::*;
    use futures::future::BoxFuture;
    use std::fmt::Debug;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TREE_XML: &str = r#"<folder id="0" name="" shared="0">
        <tags><tag id="3"/></tags>
        <folders>
            <folder id="10" name="Docs" shared="1" user_id="42" description="work">
                <files>
                    <file id="100" file_name="a.txt" shared="0" size="12" created="1700000000" updated="1700000100" user_id="42">
                        <tags><tag id="3"/></tags>
                    </file>
                    <file id="101" file_name="b.txt" shared="1" size="3" user_id="42"/>
                </files>
            </folder>
        </folders>
    </folder>"#;

    fn counting_materializers(owner_calls: Arc<AtomicUsize>, tag_calls: Arc<AtomicUsize>) -> Materializers {
        let owner: Fetch<u64, UserProfile> = Arc::new(move |id: u64| -> BoxFuture<'static, Result<UserProfile, BoxError>> {
            owner_calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                Ok(UserProfile {
                    login: format!("user{}", id),
                    email: format!("user{}@example.com", id),
                    ..UserProfile::default()
                })
            })
        });
        let tag: Fetch<u64, String> = Arc::new(move |id: u64| -> BoxFuture<'static, Result<String, BoxError>> {
            tag_calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move { Ok(format!("tag{}", id)) })
        });
        Materializers { owner, tag }
    }

    fn check_table<S: OperationStatus + PartialEq + Debug>(table: &[(&str, S)]) {
        for (raw, expected) in table {
            assert_eq!(S::parse(raw), *expected, "status text {:?}", raw);
        }
        assert_eq!(S::parse("something_new"), S::default());
        assert!(!S::default().is_expected());
    }

    #[test]
    fn status_text_maps_to_family_members() {
        check_table(&[
            ("get_ticket_ok", GetTicketStatus::Successful),
            ("wrong_input", GetTicketStatus::WrongInput),
            ("application_restricted", GetTicketStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("get_auth_token_ok", GetAuthTokenStatus::Successful),
            ("not_logged_in", GetAuthTokenStatus::Failed),
        ]);
        check_table(&[
            ("logged", AuthenticateUserStatus::Successful),
            ("invalid_login", AuthenticateUserStatus::InvalidLogin),
            ("application_restricted", AuthenticateUserStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("logout_ok", LogoutStatus::Successful),
            ("not_logged_in", LogoutStatus::NotLoggedIn),
            ("invalid_auth_token", LogoutStatus::InvalidAuthToken),
            ("application_restricted", LogoutStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("successful_register", RegisterNewUserStatus::Successful),
            ("e_register", RegisterNewUserStatus::Failed),
            ("email_invalid", RegisterNewUserStatus::EmailInvalid),
            ("email_already_registered", RegisterNewUserStatus::EmailAlreadyRegistered),
            ("application_restricted", RegisterNewUserStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("email_ok", VerifyRegistrationEmailStatus::EmailOk),
            ("email_invalid", VerifyRegistrationEmailStatus::EmailInvalid),
            (
                "email_already_registered",
                VerifyRegistrationEmailStatus::EmailAlreadyRegistered,
            ),
            ("application_restricted", VerifyRegistrationEmailStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("get_account_info_ok", GetAccountInfoStatus::Successful),
            ("not_logged_in", GetAccountInfoStatus::NotLoggedIn),
            ("application_restricted", GetAccountInfoStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("get_server_time_ok", GetServerTimeStatus::Successful),
            ("not_logged_in", GetServerTimeStatus::NotLoggedIn),
            ("application_restricted", GetServerTimeStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("upload_ok", UploadFileStatus::Successful),
            ("upload_some_files_failed", UploadFileStatus::Failed),
            ("upload_invalid_file_name", UploadFileStatus::Failed),
            ("e_upload", UploadFileStatus::Failed),
            ("not_logged_in", UploadFileStatus::NotLoggedIn),
            ("application_restricted", UploadFileStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("upload_ok", OverwriteFileStatus::Successful),
            ("e_upload", OverwriteFileStatus::Failed),
            ("not_logged_in", OverwriteFileStatus::NotLoggedIn),
            ("application_restricted", OverwriteFileStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("upload_ok", FileNewCopyStatus::Successful),
            ("upload_some_files_failed", FileNewCopyStatus::Failed),
            ("not_logged_in", FileNewCopyStatus::NotLoggedIn),
            ("application_restricted", FileNewCopyStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("create_ok", CreateFolderStatus::Successful),
            ("e_no_parent_folder", CreateFolderStatus::NoParentFolder),
            ("not_logged_in", CreateFolderStatus::NotLoggedIn),
            ("application_restricted", CreateFolderStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("s_delete_node", DeleteObjectStatus::Successful),
            ("e_delete_node", DeleteObjectStatus::Failed),
            ("not_logged_in", DeleteObjectStatus::NotLoggedIn),
            ("application_restricted", DeleteObjectStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("s_rename_node", RenameObjectStatus::Successful),
            ("e_rename_node", RenameObjectStatus::Failed),
            ("not_logged_in", RenameObjectStatus::NotLoggedIn),
            ("application_restricted", RenameObjectStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("s_move_node", MoveObjectStatus::Successful),
            ("e_move_node", MoveObjectStatus::Failed),
            ("not_logged_in", MoveObjectStatus::NotLoggedIn),
            ("application_restricted", MoveObjectStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("s_copy_node", CopyObjectStatus::Successful),
            ("e_copy_node", CopyObjectStatus::Failed),
        ]);
        check_table(&[
            ("listing_ok", GetAccountTreeStatus::Successful),
            ("not_logged_in", GetAccountTreeStatus::NotLoggedIn),
            ("e_folder_id", GetAccountTreeStatus::FolderIdError),
            ("application_restricted", GetAccountTreeStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("s_get_updates", GetUpdatesStatus::Successful),
            ("e_get_updates", GetUpdatesStatus::Failed),
            ("not_logged_in", GetUpdatesStatus::NotLoggedIn),
            ("application_restricted", GetUpdatesStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("export_tags_ok", ExportTagsStatus::Successful),
            ("not_logged_in", ExportTagsStatus::NotLoggedIn),
            ("application_restricted", ExportTagsStatus::ApplicationRestricted),
        ]);
        check_table(&[
            ("s_set_description", SetDescriptionStatus::Successful),
            ("e_set_description", SetDescriptionStatus::Failed),
        ]);
        check_table(&[
            ("share_ok", PublicShareStatus::Successful),
            ("share_error", PublicShareStatus::Failed),
            ("not_logged_in", PublicShareStatus::NotLoggedIn),
            ("application_restricted", PublicShareStatus::ApplicationRestricted),
            ("wrong_node", PublicShareStatus::WrongNode),
        ]);
        check_table(&[
            ("unshare_ok", PublicUnshareStatus::Successful),
            ("unshare_error", PublicUnshareStatus::Failed),
            ("not_logged_in", PublicUnshareStatus::NotLoggedIn),
            ("application_restricted", PublicUnshareStatus::ApplicationRestricted),
            ("wrong_node", PublicUnshareStatus::WrongNode),
        ]);
        check_table(&[
            ("private_share_ok", PrivateShareStatus::Successful),
            ("private_share_error", PrivateShareStatus::Failed),
            ("not_logged_in", PrivateShareStatus::NotLoggedIn),
            ("application_restricted", PrivateShareStatus::ApplicationRestricted),
            ("wrong_node", PrivateShareStatus::WrongNode),
        ]);
        check_table(&[
            ("addtomybox_ok", AddToMyBoxStatus::Successful),
            ("addtomybox_error", AddToMyBoxStatus::Failed),
            ("not_logged_in", AddToMyBoxStatus::NotLoggedIn),
            ("application_restricted", AddToMyBoxStatus::ApplicationRestricted),
            ("s_link_exists", AddToMyBoxStatus::LinkExists),
        ]);
        check_table(&[
            ("add_comment_ok", AddCommentStatus::Successful),
            ("add_comment_error", AddCommentStatus::Failed),
            ("not_logged_in", AddCommentStatus::NotLoggedIn),
            ("application_restricted", AddCommentStatus::ApplicationRestricted),
        ]);
    }

    #[test]
    fn unmatched_status_text_is_unknown() {
        assert_eq!(GetTicketStatus::parse(""), GetTicketStatus::Unknown);
        assert_eq!(CreateFolderStatus::parse(" create_ok "), CreateFolderStatus::Successful);
        // Only ever set locally
        assert_eq!(UploadFileStatus::parse("Cancelled"), UploadFileStatus::Unknown);
        assert_eq!(OverwriteFileStatus::parse("Cancelled"), OverwriteFileStatus::Unknown);
    }

    #[test]
    fn upload_flavours_share_wire_values() {
        assert_eq!(
            OverwriteFileStatus::from(UploadFileStatus::Cancelled),
            OverwriteFileStatus::Cancelled
        );
        assert_eq!(
            FileNewCopyStatus::from(UploadFileStatus::Failed),
            FileNewCopyStatus::Failed
        );
        assert_eq!(u8::from(FileNewCopyStatus::Successful), 5);
    }

    #[test]
    fn logout_only_expects_success_and_invalid_token() {
        assert!(LogoutStatus::Successful.is_expected());
        assert!(LogoutStatus::InvalidAuthToken.is_expected());
        assert!(!LogoutStatus::NotLoggedIn.is_expected());
        assert!(!LogoutStatus::ApplicationRestricted.is_expected());
    }

    #[test]
    fn upload_status_values() {
        assert_eq!(u8::from(UploadFileStatus::ApplicationRestricted), 1);
        assert_eq!(u8::from(UploadFileStatus::NotLoggedIn), 2);
        assert_eq!(u8::from(UploadFileStatus::Failed), 4);
        assert_eq!(u8::from(UploadFileStatus::Successful), 5);
        assert!(UploadFileStatus::try_from(3u8).is_err());
    }

    #[test]
    fn object_type_tokens_and_codes() {
        assert_eq!(ObjectType::File.token(), "file");
        assert_eq!(ObjectType::Folder.token(), "folder");
        assert_eq!(ObjectType::try_from(2u8).unwrap(), ObjectType::Folder);

        let err: BoxError = ObjectType::try_from(9u8).unwrap_err().into();
        assert!(matches!(err, BoxError::UnsupportedObjectType(_)));
    }

    #[test]
    fn folder_options_to_params() {
        let options = FolderStructureOptions::ONE_LEVEL | FolderStructureOptions::NO_ZIP;
        assert_eq!(options.to_params(), vec!["nozip", "onelevel"]);
        assert!(FolderStructureOptions::NONE.to_params().is_empty());
        assert!(options.contains(FolderStructureOptions::NO_ZIP));
        assert!(!options.contains(FolderStructureOptions::NO_FILES));
    }

    #[test]
    fn upload_body_with_per_file_errors() {
        let body = r#"<response>
            <status>upload_ok</status>
            <files>
                <file file_name="a.txt" id="11"/>
                <file file_name="b.txt" error="filesize_limit_exceeded"/>
            </files>
        </response>"#;
        let result = parse_upload_response(body, UploadTarget::Folder(5));
        assert_eq!(result.status, UploadFileStatus::Successful);
        assert_eq!(result.folder_id(), Some(5));
        assert_eq!(result.files.len(), 2);
        assert_eq!(result.files[0].id, Some(11));
        assert_eq!(result.files[1].id, None);
        assert_eq!(result.files[1].error, Some(UploadFileError::FileSizeLimitExceeded));
        assert_eq!(result.uploaded().count(), 1);
    }

    #[test]
    fn malformed_upload_body_is_unknown() {
        let result = parse_upload_response("<html>oops</html>", UploadTarget::Overwrite(5));
        assert_eq!(result.status, UploadFileStatus::Unknown);
        assert_eq!(result.folder_id(), None);
        assert!(result.files.is_empty());
    }

    #[tokio::test]
    async fn export_tags_list() {
        let tags = parse_export_tags(r#"<tags><tag id="1">work</tag><tag id="2">home</tag></tags>"#);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.to_id_list(), "1,2");
        assert_eq!(tags.get(2).unwrap().text().await.unwrap(), "home");
        assert!(tags.get(3).is_none());

        assert!(parse_export_tags("not xml at all <").is_empty());
    }

    #[tokio::test]
    async fn folder_tree_is_decoded_without_fetching() {
        let owner_calls = Arc::new(AtomicUsize::new(0));
        let tag_calls = Arc::new(AtomicUsize::new(0));
        let materializers = counting_materializers(owner_calls.clone(), tag_calls.clone());

        let root = parse_folder_structure(TREE_XML, &materializers);
        assert_eq!(root.id, 0);
        assert_eq!(root.tags.len(), 1);
        assert_eq!(root.folders.len(), 1);
        assert_eq!(root.file_count(), 2);

        let docs = root.find_folder(10).unwrap();
        assert_eq!(docs.name, "Docs");
        assert!(docs.is_shared);
        assert_eq!(docs.description.as_deref(), Some("work"));

        let a = &docs.files[0];
        assert_eq!(a.name, "a.txt");
        assert_eq!(a.size, 12);
        assert_eq!(a.created.unwrap().timestamp(), 1_700_000_000);
        assert!(docs.files[1].is_shared);
        assert!(docs.files[1].created.is_none());

        assert!(!a.owner.as_ref().unwrap().is_resolved());
        assert!(!a.tags[0].is_resolved());
        assert_eq!(owner_calls.load(Ordering::SeqCst), 0);
        assert_eq!(tag_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn folder_tree_fetches_owner_once() {
        let owner_calls = Arc::new(AtomicUsize::new(0));
        let tag_calls = Arc::new(AtomicUsize::new(0));
        let materializers = counting_materializers(owner_calls.clone(), tag_calls.clone());

        let root = parse_folder_structure(TREE_XML, &materializers);
        let file = &root.folders[0].files[0];
        let owner = file.owner.as_ref().unwrap();
        assert_eq!(owner.id, 42);
        assert_eq!(owner.email().await.unwrap(), "user42@example.com");
        assert_eq!(owner.login().await.unwrap(), "user42");
        assert!(owner.is_resolved());
        assert_eq!(owner_calls.load(Ordering::SeqCst), 1);

        assert_eq!(file.tags[0].text().await.unwrap(), "tag3");
        assert_eq!(file.tags[0].text().await.unwrap(), "tag3");
        assert_eq!(tag_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn malformed_tree_is_empty_folder() {
        let materializers = counting_materializers(
            Arc::new(AtomicUsize::new(0)),
            Arc::new(AtomicUsize::new(0)),
        );
        let root = parse_folder_structure("<folder", &materializers);
        assert_eq!(root, Folder::default());
    }

    #[test]
    fn tree_payload_unzipped_unless_nozip() {
        let archive = helpers::zip_single("tree.xml", TREE_XML.as_bytes());
        assert_eq!(unzip_first_entry(&archive).unwrap(), TREE_XML.as_bytes());
        assert_eq!(decode_tree_payload(&archive, FolderStructureOptions::NONE), TREE_XML);
        assert_eq!(
            decode_tree_payload(TREE_XML.as_bytes(), FolderStructureOptions::NO_ZIP),
            TREE_XML
        );

        assert!(unzip_first_entry(b"not a zip archive").is_none());
        assert_eq!(decode_tree_payload(b"not a zip archive", FolderStructureOptions::NONE), "");
    }

    #[test]
    fn folder_tree_decodes_the_same_twice() {
        let materializers = counting_materializers(
            Arc::new(AtomicUsize::new(0)),
            Arc::new(AtomicUsize::new(0)),
        );
        let first = parse_folder_structure(TREE_XML, &materializers);
        let second = parse_folder_structure(TREE_XML, &materializers);
        assert_eq!(first, second);

        let archive = helpers::zip_single("tree.xml", TREE_XML.as_bytes());
        let zipped = decode_tree_payload(&archive, FolderStructureOptions::NONE);
        let plain = decode_tree_payload(TREE_XML.as_bytes(), FolderStructureOptions::NO_ZIP);
        assert_eq!(
            parse_folder_structure(&zipped, &materializers),
            parse_folder_structure(&plain, &materializers)
        );

        let other_owner = TREE_XML.replace(r#"user_id="42" description"#, r#"user_id="43" description"#);
        assert_ne!(first, parse_folder_structure(&other_owner, &materializers));
    }

    #[tokio::test]
    async fn resolved_owner_still_equals_unresolved() {
        let materializers = counting_materializers(
            Arc::new(AtomicUsize::new(0)),
            Arc::new(AtomicUsize::new(0)),
        );
        let first = parse_folder_structure(TREE_XML, &materializers);
        let second = parse_folder_structure(TREE_XML, &materializers);
        first.folders[0].owner.as_ref().unwrap().profile().await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn oversized_declared_entry_size() {
        let content = b"0123456789abcdef";
        let mut archive = helpers::zip_single("tree.xml", content);
        // Local header keeps the uncompressed size at offset 22, the central directory at 24
        for (signature, offset) in [(&b"PK\x03\x04"[..], 22), (&b"PK\x01\x02"[..], 24)] {
            let start = archive.windows(4).position(|w| w == signature).unwrap();
            archive[start + offset..start + offset + 4]
                .copy_from_slice(&0xFFFF_FFF0u32.to_le_bytes());
        }

        let output = unzip_first_entry(&archive);
        assert!(output.is_none() || output.as_deref() == Some(&content[..]));
    }

    #[test]
    fn updates_list() {
        let xml = r#"<updates>
            <update>
                <update_id>7</update_id>
                <user_id>42</user_id>
                <user_name>owner</user_name>
                <user_email>owner@example.com</user_email>
                <updated>1700000000</updated>
                <update_type>added</update_type>
                <folder_id>10</folder_id>
                <folder_name>Docs</folder_name>
                <shared>1</shared>
                <owner_id>42</owner_id>
                <files><file file_id="100" file_name="a.txt"/></files>
            </update>
            <update>
                <update_id>8</update_id>
                <update_type>renamed</update_type>
                <user_name/>
                <folders><folder folder_id="11" folder_name="Old"/></folders>
            </update>
        </updates>"#;
        let updates = parse_updates(xml);
        assert_eq!(updates.len(), 2);

        let added = &updates[0];
        assert_eq!(added.id, 7);
        assert_eq!(added.update_type, UpdateType::Added);
        assert_eq!(added.updated.unwrap().timestamp(), 1_700_000_000);
        assert_eq!(added.user_email.as_deref(), Some("owner@example.com"));
        assert_eq!(added.folder_id, Some(10));
        assert!(added.is_shared);
        assert_eq!(added.files, vec![UpdatedItem { id: 100, name: "a.txt".into() }]);
        assert!(added.folders.is_empty());

        let renamed = &updates[1];
        assert_eq!(renamed.update_type, UpdateType::Other("renamed".into()));
        assert_eq!(renamed.user_name, None);
        assert_eq!(renamed.folders[0].id, 11);

        assert!(parse_updates("<updates").is_empty());

        let archive = helpers::zip_single("updates.xml", xml.as_bytes());
        assert_eq!(decode_updates_payload(&archive, GetUpdatesOptions::NONE), xml);
        assert_eq!(decode_updates_payload(xml.as_bytes(), GetUpdatesOptions::NO_ZIP), xml);
        assert_eq!(GetUpdatesOptions::NO_ZIP.to_params(), vec!["nozip"]);
    }

    #[test]
    fn envelope_with_record_output() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
            <SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns1="urn:boxnet">
            <SOAP-ENV:Body>
                <ns1:get_account_infoResponse>
                    <status>get_account_info_ok</status>
                    <user>
                        <login>someone@example.com</login>
                        <user_id>42</user_id>
                        <access_id/>
                    </user>
                </ns1:get_account_infoResponse>
            </SOAP-ENV:Body>
            </SOAP-ENV:Envelope>"#;
        let resp = parse_envelope(body).unwrap();
        assert_eq!(resp.status, "get_account_info_ok");
        let user = resp.record("user").unwrap();
        assert_eq!(user.text("login").unwrap(), "someone@example.com");
        assert_eq!(user.parse::<u64>("user_id").unwrap(), 42);
        assert_eq!(user.text_or_default("access_id"), "");
    }

    #[test]
    fn envelope_fault_and_missing_status() {
        let fault = r#"<Envelope><Body><Fault><faultcode>Server</faultcode><faultstring>Bad</faultstring></Fault></Body></Envelope>"#;
        assert!(matches!(parse_envelope(fault), Err(BoxError::SoapFault(_))));

        let no_status = r#"<Envelope><Body><get_ticketResponse><ticket>abc</ticket></get_ticketResponse></Body></Envelope>"#;
        assert!(matches!(
            parse_envelope(no_status),
            Err(BoxError::MissingField("status"))
        ));
    }

    #[test]
    fn request_envelope_is_escaped() {
        let request = SoapRequest::new("rename", "key", Some("token"))
            .arg("target", ObjectType::File.token())
            .arg("target_id", 12u64)
            .arg("new_name", "a&b <c>");
        let envelope = request.to_envelope();
        assert!(envelope.contains("<box:rename>"));
        assert!(envelope.contains("<auth_token>token</auth_token>"));
        assert!(envelope.contains("<target_id>12</target_id>"));
        assert!(envelope.contains("<new_name>a&amp;b &lt;c&gt;</new_name>"));
    }
}
