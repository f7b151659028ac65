//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results or errors. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use serde_json::Value;
use todo_core::{
    ApiError, CreateItem, HttpMethod, HttpRequest, HttpResponse, Item, ItemClient, ItemId, ItemKind,
    UpdateItem,
};

const BASE_URL: &str = "http://localhost:3000";

fn load(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn client_for(case: &Value) -> ItemClient {
    let kind: ItemKind = case["kind"].as_str().unwrap().parse().unwrap();
    ItemClient::new(BASE_URL, kind)
}

fn input_id(case: &Value) -> ItemId {
    case["input_id"].as_u64().unwrap()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

/// Check method, path and (when present) JSON body of a built request.
fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    match expected.get("body") {
        Some(expected_body) => {
            let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&body, expected_body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }

    if let Some(headers) = expected.get("headers") {
        let expected_headers: Vec<(String, String)> = headers
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }
}

/// Check a parse result against `expected_result` or `expected_error`.
fn assert_outcome<T>(name: &str, case: &Value, result: Result<T, ApiError>)
where
    T: std::fmt::Debug + PartialEq + serde::de::DeserializeOwned,
{
    match case.get("expected_error") {
        Some(expected_error) => {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
                "Validation" => {
                    let ApiError::Validation(errors) = err else {
                        panic!("{name}: expected Validation, got {err:?}");
                    };
                    let messages: Vec<&str> = errors.iter().map(|e| e.msg.as_str()).collect();
                    let expected: Vec<&str> = case["expected_messages"]
                        .as_array()
                        .unwrap()
                        .iter()
                        .map(|m| m.as_str().unwrap())
                        .collect();
                    assert_eq!(messages, expected, "{name}: messages");
                }
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        }
        None => {
            let value = result.unwrap();
            let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(value, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    for case in load(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let c = client_for(&case);
        let input: CreateItem = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_item(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result: Result<Item, _> = c.parse_create_item(simulated_response(&case));
        assert_outcome(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    for case in load(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        let c = client_for(&case);

        let req = c.build_list_items();
        assert_request(name, &req, &case["expected_request"]);

        let result: Result<Vec<Item>, _> = c.parse_list_items(simulated_response(&case));
        assert_outcome(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    for case in load(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();
        let c = client_for(&case);

        let req = c.build_get_item(input_id(&case));
        assert_request(name, &req, &case["expected_request"]);

        let result: Result<Item, _> = c.parse_get_item(simulated_response(&case));
        assert_outcome(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    for case in load(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let c = client_for(&case);
        let input: UpdateItem = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update_item(input_id(&case), &input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result: Result<Item, _> = c.parse_update_item(simulated_response(&case));
        assert_outcome(name, &case, result);
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    for case in load(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let c = client_for(&case);

        let req = c.build_delete_item(input_id(&case));
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_delete_item(simulated_response(&case));
        if case.get("expected_error").is_some() {
            assert!(matches!(result, Err(ApiError::NotFound)), "{name}: expected NotFound");
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}
