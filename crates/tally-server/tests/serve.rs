//! End-to-end test over a real TCP listener.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tally_config::ServerSettings;
use tally_db::service::TallyService;
use tally_server::Server;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[tokio::test]
async fn serves_issue_lifecycle_and_shuts_down() {
    let store = TallyService::new_local(":memory:").await.unwrap();
    let server = Server::new(&ServerSettings::default(), store).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.serve(listener, async {
        let _ = stop_rx.await;
    }));

    let client = reqwest::Client::new();
    let health = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(health.text().await.unwrap(), "OK");

    let created: Value = client
        .post(format!("{base}/api/issues/e2e"))
        .json(&json!({"issue_title": "Wire", "issue_text": "over tcp", "created_by": "ann"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["_id"].as_str().unwrap().to_string();

    let closed: Value = client
        .put(format!("{base}/api/issues/e2e"))
        .json(&json!({"_id": id, "open": "false"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(closed, json!({"result": "successfully updated", "_id": id}));

    let listed: Vec<Value> = client
        .get(format!("{base}/api/issues/e2e?open=false"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["_id"], id.as_str());

    stop_tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
}
