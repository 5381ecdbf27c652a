use crate::common::TestServer;

#[tokio::test]
async fn tampered_session_is_forbidden() {
    let server = TestServer::start().await;
    let game = server.new_game(3).await;
    let forged = game.last.session.replace("+++++++++", "XXXX+++++");

    let (status, body) = server.post_go_err(4, 4, &forged, &game.last.signature).await;
    assert_eq!(status, 403);
    assert_eq!(body["error"], "invalid signature");
}

#[tokio::test]
async fn missing_signature_is_forbidden() {
    let server = TestServer::start().await;
    let game = server.new_game(3).await;
    let (status, _) = server.post_go_err(0, 0, &game.last.session, "").await;
    assert_eq!(status, 403);
}

#[tokio::test]
async fn malformed_session_is_unprocessable() {
    let server = TestServer::start().await;
    for session in [
        "0003 0 -001 0000 0065 1",
        "0003 0 -001 0000 six +++++++++ 1",
        "0003 0 -001 0000 0065 +++++++++ 9",
        "0003 0 -001 0000 0065 ++++?++++ 1",
    ] {
        let signature = server.signer.sign(session);
        let (status, body) = server.post_go_err(0, 0, session, &signature).await;
        assert_eq!(status, 422, "{session}");
        assert!(body["error"].as_str().unwrap().starts_with("malformed session"));
    }
}

#[tokio::test]
async fn missing_fields_are_unprocessable() {
    let server = TestServer::start().await;
    let resp = server
        .client
        .post(format!("{}/go", server.base))
        .body("x=1&session=new")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
}

#[tokio::test]
async fn sessions_from_another_key_are_forbidden() {
    let server = TestServer::start().await;
    let other = TestServer::start_with(gus_server::config::Config {
        secret: Some("another-secret".to_string()),
        opponent: false,
        ..Default::default()
    })
    .await;
    let game = other.new_game(3).await;

    let (status, _) = server
        .post_go_err(0, 0, &game.last.session, &game.last.signature)
        .await;
    assert_eq!(status, 403);
}
