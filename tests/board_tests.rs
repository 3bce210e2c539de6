//! Integration tests for the lost-and-found board

mod common;

use campus_assistant::api::SelectedFile;
use campus_assistant::board::ItemBoard;
use campus_assistant::types::{Filter, ItemKind};
use common::{MockLostFound, item, server_error, wallet_receipt, wallet_report};

const BASE: &str = "http://lost-and-found:8002";

fn two_wallets() -> Vec<campus_assistant::types::Item> {
    vec![
        item("1", ItemKind::Lost, "Lost a wallet"),
        item("2", ItemKind::Found, "Found a wallet"),
    ]
}

fn filled_board() -> ItemBoard {
    let mut board = ItemBoard::new();
    board.form.kind = ItemKind::Lost;
    board.form.description = "Lost a black wallet".to_string();
    board.form.location = "Bloc Prepa".to_string();
    board.form.contact_info = "john.doe@example.com".to_string();
    board.on_file_selected(vec![
        SelectedFile::new("test.jpg", b"fake content".to_vec()).with_content_type("image/jpeg"),
    ]);
    board
}

mod fetch_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_rewrites_image_path() {
        let backend = MockLostFound::new(BASE).with_listing(Ok(vec![wallet_report()]));
        let mut board = ItemBoard::new();

        board.fetch_items(&backend).await;

        assert_eq!(board.items().len(), 1);
        assert_eq!(board.filtered_items().count(), 1);
        let fetched = &board.items()[0];
        assert_eq!(fetched.description, "Lost a black wallet");
        assert_eq!(
            fetched.image_path.as_deref(),
            Some("http://lost-and-found:8002/data/test.jpg")
        );
        assert!(!fetched.expanded);
    }

    #[tokio::test]
    async fn test_fetch_resets_expanded() {
        let backend = MockLostFound::new(BASE)
            .with_listing(Ok(vec![wallet_report()]))
            .with_listing(Ok(vec![wallet_report()]));
        let mut board = ItemBoard::new();
        board.fetch_items(&backend).await;
        board.toggle_expanded("1");
        assert!(board.items()[0].expanded);

        board.fetch_items(&backend).await;

        assert!(!board.items()[0].expanded);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_items() {
        let backend = MockLostFound::new(BASE)
            .with_listing(Ok(two_wallets()))
            .with_listing(Err(server_error()));
        let mut board = ItemBoard::new();
        board.fetch_items(&backend).await;

        board.fetch_items(&backend).await;

        assert_eq!(backend.list_calls(), 2);
        assert_eq!(board.items().len(), 2);
        assert_eq!(board.filtered_items().count(), 2);
    }

    #[tokio::test]
    async fn test_fetch_keeps_current_filter() {
        let backend = MockLostFound::new(BASE).with_listing(Ok(two_wallets()));
        let mut board = ItemBoard::new();
        board.change_filter(Filter::Found);

        board.fetch_items(&backend).await;

        let ids: Vec<_> = board.filtered_items().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }
}

mod filter_tests {
    use super::*;

    #[test]
    fn test_every_filter_matches_its_predicate() {
        let mut board = ItemBoard::new();
        board.replace_items(two_wallets(), BASE);

        for filter in Filter::ALL {
            board.change_filter(filter);
            let expected: Vec<_> = board
                .items()
                .iter()
                .filter(|i| filter.matches(i.kind))
                .cloned()
                .collect();
            let visible: Vec<_> = board.filtered_items().cloned().collect();
            assert_eq!(board.filter(), filter);
            assert_eq!(visible, expected);
        }
    }

    #[test]
    fn test_all_is_identity() {
        let mut board = ItemBoard::new();
        board.replace_items(two_wallets(), BASE);
        board.change_filter(Filter::Lost);
        board.change_filter(Filter::All);

        let visible: Vec<_> = board.filtered_items().cloned().collect();
        assert_eq!(visible, board.items());
    }

    #[test]
    fn test_change_filter_applies_it() {
        let mut board = ItemBoard::new();
        board.replace_items(two_wallets(), BASE);
        let revision = board.filter_revision();

        board.change_filter(Filter::Lost);

        assert_eq!(board.filter(), Filter::Lost);
        assert_eq!(board.filter_revision(), revision + 1);
        let visible: Vec<_> = board.filtered_items().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind, ItemKind::Lost);
    }
}

mod submit_tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_success_resets_form_and_refetches() {
        let backend = MockLostFound::new(BASE)
            .with_upload(Ok(wallet_receipt()))
            .with_listing(Ok(vec![wallet_report()]));
        let mut board = filled_board();
        let file_key = board.file_input_key();

        let submitted = board.submit_item(&backend).await;

        assert!(submitted);
        assert_eq!(backend.list_calls(), 1);
        assert_eq!(board.items().len(), 1);
        assert_eq!(board.form.description, "");
        assert_eq!(board.form.location, "");
        assert_eq!(board.form.contact_info, "");
        assert!(board.form.selected_file.is_none());
        assert_ne!(board.file_input_key(), file_key);
    }

    #[tokio::test]
    async fn test_submit_sends_every_filled_field() {
        let backend = MockLostFound::new(BASE).with_upload(Ok(wallet_receipt()));
        let mut board = filled_board();

        board.submit_item(&backend).await;

        let forms = backend.sent_forms();
        assert_eq!(forms.len(), 1);
        let fields = forms[0].text_fields();
        assert_eq!(
            fields,
            vec![
                ("type", "lost".to_string()),
                ("description", "Lost a black wallet".to_string()),
                ("location", "Bloc Prepa".to_string()),
                ("contactInfo", "john.doe@example.com".to_string()),
            ]
        );
        assert_eq!(
            forms[0].file.as_ref().map(|f| f.name.as_str()),
            Some("test.jpg")
        );
    }

    #[tokio::test]
    async fn test_submit_omits_empty_optionals() {
        let backend = MockLostFound::new(BASE).with_upload(Ok(wallet_receipt()));
        let mut board = ItemBoard::new();
        board.form.kind = ItemKind::Found;
        board.form.description = "Found an umbrella".to_string();

        board.submit_item(&backend).await;

        let form = &backend.sent_forms()[0];
        let names: Vec<_> = form.text_fields().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["type", "description"]);
        assert!(form.file.is_none());
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_form() {
        let backend = MockLostFound::new(BASE).with_upload(Err(server_error()));
        let mut board = filled_board();
        let before = board.form.clone();
        let file_key = board.file_input_key();

        let submitted = board.submit_item(&backend).await;

        assert!(!submitted);
        assert_eq!(backend.list_calls(), 0);
        assert_eq!(board.form, before);
        assert_eq!(board.file_input_key(), file_key);
    }
}
