//! Client integration tests against a mock JSON-RPC node

use mockito::{Matcher, Server, ServerGuard};
use ontrpc::{
    CallOptions, Endpoint, Error, HttpTransport, RpcClient, RpcError, RpcSettings, Transport,
    TransportError,
};
use serde_json::{json, Value};
use std::time::Duration;

/// Mocks `getblockcount` on `server` returning `height`
async fn mock_height(server: &mut ServerGuard, height: u64) -> mockito::Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({"method": "getblockcount"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"jsonrpc": "2.0", "id": 1, "result": height}).to_string())
        .create_async()
        .await
}

#[tokio::test]
async fn test_setup_ranks_by_height() {
    let mut tall = Server::new_async().await;
    let mut short = Server::new_async().await;
    let tall_mock = mock_height(&mut tall, 100).await;
    let short_mock = mock_height(&mut short, 50).await;

    let client = RpcClient::connect(RpcSettings::from_list([tall.url(), short.url()]))
        .await
        .unwrap();

    tall_mock.assert_async().await;
    short_mock.assert_async().await;

    let best = client.default_endpoint().await.unwrap();
    assert_eq!(best.address(), tall.url());
    assert_eq!(best.status(), Some(200));
    assert_eq!(best.height(), Some(100));
    assert!(best.elapsed_micros().is_some());

    // Unchanged health, same answer
    assert_eq!(client.default_endpoint().await.unwrap(), best);
}

#[tokio::test]
async fn test_unreachable_endpoint_ranks_last() {
    let mut live = Server::new_async().await;
    let _mock = mock_height(&mut live, 7).await;

    let client = RpcClient::connect(RpcSettings::from_list([
        "http://127.0.0.1:1".to_string(),
        live.url(),
    ]))
    .await
    .unwrap();

    let endpoints = client.endpoints().await;
    assert_eq!(endpoints[0].status(), None);
    assert_eq!(endpoints[1].height(), Some(7));

    assert_eq!(client.default_endpoint().await.unwrap().address(), live.url());
}

#[tokio::test]
async fn test_call_returns_result() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "jsonrpc": "2.0",
            "method": "getblockhash",
            "params": [12344],
            "id": 3
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"jsonrpc": "2.0", "id": 3, "result": "0x1e67372c"}).to_string())
        .create_async()
        .await;

    let client = RpcClient::new(RpcSettings::from_list([server.url()])).unwrap();
    let hash = client
        .get_block_hash(12344, CallOptions::new().with_id(3))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(hash, json!("0x1e67372c"));
}

#[tokio::test]
async fn test_redirect_body_is_returned() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(302)
        .with_header("content-type", "application/json")
        .with_body(json!({"Found": "Moved"}).to_string())
        .create_async()
        .await;

    let client = RpcClient::new(RpcSettings::from_list([server.url()])).unwrap();
    let response = client.get_height(CallOptions::new()).await.unwrap();

    assert_eq!(response, json!({"Found": "Moved"}));
}

#[tokio::test]
async fn test_error_body_without_result_is_returned() {
    let mut server = Server::new_async().await;
    let body = json!({
        "jsonrpc": "2.0",
        "id": 0,
        "error": {"code": -32601, "message": "Method not found"}
    });
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = RpcClient::new(RpcSettings::from_list([server.url()])).unwrap();
    let response = client.get_version(CallOptions::new()).await.unwrap();

    assert_eq!(response, body);
}

#[tokio::test]
async fn test_connection_error_is_transport_failure() {
    let client = RpcClient::new(RpcSettings::from_list(["http://127.0.0.1:1"])).unwrap();

    let err = client.get_height(CallOptions::new()).await.unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("getblockcount"), "{msg}");
    assert!(msg.contains("http://127.0.0.1:1"), "{msg}");
    assert!(matches!(err, Error::Rpc(RpcError::TransportFailure { .. })));
}

#[tokio::test]
async fn test_server_error_status_is_transport_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = RpcClient::new(RpcSettings::from_list([server.url()])).unwrap();
    let err = client.get_best_blockhash(CallOptions::new()).await.unwrap_err();

    match err {
        Error::Rpc(RpcError::TransportFailure {
            method, source, ..
        }) => {
            assert_eq!(method, "getbestblockhash");
            assert!(matches!(source, TransportError::Status(500)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_transport_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = RpcClient::new(RpcSettings::from_list([server.url()])).unwrap();
    let err = client.get_height(CallOptions::new()).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Rpc(RpcError::TransportFailure {
            source: TransportError::InvalidBody(_),
            ..
        })
    ));
}

#[tokio::test]
async fn test_explicit_endpoint_bypasses_ranking() {
    let mut best = Server::new_async().await;
    let mut other = Server::new_async().await;
    let _best_height = mock_height(&mut best, 100).await;
    let _other_height = mock_height(&mut other, 1).await;

    let invoke = other
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "invoke",
            "params": [
                "d7678dd97c000be3f33e9362e673101bac4ca654",
                [{"type": 7, "value": "symbol"}, {"type": 16, "value": []}]
            ]
        })))
        .with_status(200)
        .with_body(json!({"result": {"state": "HALT, BREAK", "stack": []}}).to_string())
        .create_async()
        .await;

    let client = RpcClient::connect(RpcSettings::from_list([best.url(), other.url()]))
        .await
        .unwrap();
    assert_eq!(client.default_endpoint().await.unwrap().address(), best.url());

    let target = Endpoint::new(other.url());
    let params: Vec<Value> = vec![
        json!({"type": 7, "value": "symbol"}),
        json!({"type": 16, "value": []}),
    ];
    let result = client
        .invoke_contract(
            "d7678dd97c000be3f33e9362e673101bac4ca654",
            params,
            CallOptions::new().with_endpoint(&target),
        )
        .await
        .unwrap();

    invoke.assert_async().await;
    assert_eq!(result["state"], json!("HALT, BREAK"));
}

#[tokio::test]
async fn test_transport_accepts_bare_host_port() {
    let mut server = Server::new_async().await;
    let _mock = mock_height(&mut server, 9).await;

    let transport = HttpTransport::new().unwrap();
    let response = transport
        .post(
            &server.host_with_port(),
            &json!({"jsonrpc": "2.0", "method": "getblockcount", "params": [], "id": 1}),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body.unwrap()["result"], json!(9));
}
