//! Integration tests for document construction through the public API,
//! plus concurrent dispatch through a shared client.

use std::sync::Arc;

use monday_api::query::{
    assemble, format_args, format_select, ArgMap, ArgValue, FieldSpec, OperationKind,
    QueryDocument, QueryError,
};
use monday_api::{ApiToken, EndpointUrl, GraphqlClient, MondayConfig};
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Formatting Tests
// ============================================================================

#[test]
fn test_arguments_keep_insertion_order() {
    let args = ArgMap::new()
        .arg("z", 1)
        .arg("a", ArgValue::Null)
        .arg("m", false);

    assert_eq!(format_args(&args).unwrap(), "(z: 1, a: null, m: false)");
}

#[test]
fn test_empty_arguments_format_to_nothing() {
    assert_eq!(format_args(&ArgMap::new()).unwrap(), "");
}

#[test]
fn test_nested_values() {
    let rule = ArgMap::new()
        .arg("column_id", "status")
        .arg("compare_value", [1])
        .arg("operator", ArgValue::raw("any_of"));
    let filter = ArgMap::new()
        .arg("rules", vec![rule])
        .arg("operator", ArgValue::raw("and"));
    let args = ArgMap::new().arg("limit", 25).arg("query_params", filter);

    assert_eq!(
        format_args(&args).unwrap(),
        r#"(limit: 25, query_params: {rules: [{column_id: "status", compare_value: [1], operator: any_of}], operator: and})"#
    );
}

#[test]
fn test_strings_are_escaped() {
    let args = ArgMap::new().arg("item_name", "Line 1\nQuote \" and \\ slash");

    assert_eq!(
        format_args(&args).unwrap(),
        r#"(item_name: "Line 1\nQuote \" and \\ slash")"#
    );
}

#[test]
fn test_invalid_argument_name_is_rejected() {
    let args = ArgMap::new().arg("bad name", 1);

    assert!(matches!(
        format_args(&args),
        Err(QueryError::ArgumentSerialization { .. })
    ));
}

#[test]
fn test_non_finite_float_is_rejected() {
    let args = ArgMap::new().arg("ratio", f64::NAN);

    assert!(matches!(
        format_args(&args),
        Err(QueryError::ArgumentSerialization { .. })
    ));
}

#[test]
fn test_deep_selection() {
    let select = vec![
        FieldSpec::leaf("id"),
        FieldSpec::nested(
            "boards",
            [
                FieldSpec::leaf("name"),
                FieldSpec::nested("groups", [FieldSpec::nested("items_page", ["cursor"])]),
            ],
        ),
    ];

    assert_eq!(
        format_select(&select).unwrap(),
        "id boards { name groups { items_page { cursor } } }"
    );
}

#[test]
fn test_invalid_selections_are_rejected() {
    assert!(matches!(
        format_select(&[]),
        Err(QueryError::InvalidSelection { .. })
    ));
    assert!(matches!(
        format_select(&[FieldSpec::leaf("")]),
        Err(QueryError::InvalidSelection { .. })
    ));
    assert!(matches!(
        format_select(&[FieldSpec::nested("boards", Vec::<FieldSpec>::new())]),
        Err(QueryError::InvalidSelection { .. })
    ));
}

#[test]
fn test_assemble_and_document_agree() {
    let args = ArgMap::new().arg("item_id", 9);
    let fields = FieldSpec::list(&["id"]);

    let assembled = assemble(OperationKind::Mutation, "archive_item", &args, &fields).unwrap();
    let rendered =
        QueryDocument::operation(OperationKind::Mutation, "archive_item", args, fields)
            .render()
            .unwrap();

    assert_eq!(assembled, "mutation { archive_item(item_id: 9) { id } }");
    assert_eq!(assembled, rendered);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

fn client_for(server: &MockServer) -> GraphqlClient {
    let config = MondayConfig::builder()
        .api_token(ApiToken::new("test-token").unwrap())
        .endpoint(EndpointUrl::new(format!("{}/v2", server.uri())).unwrap())
        .build()
        .unwrap();
    GraphqlClient::new(&config)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_client_serves_concurrent_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ok": true}})))
        .expect(8)
        .mount(&server)
        .await;

    let client = Arc::new(client_for(&server));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .dispatch(&format!("query {{ items(ids: [{i}]) {{ id }} }}"))
                    .await
            })
        })
        .collect();

    for handle in handles {
        let data = handle.await.unwrap().unwrap();
        assert_eq!(data, json!({"ok": true}));
    }
}

#[test]
fn test_dispatch_on_current_thread_runtime() {
    tokio_test::block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"me": null}})))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .dispatch("query { me { id } }")
            .await
            .unwrap_err();

        assert!(err.is_transport_error());
    });
}
