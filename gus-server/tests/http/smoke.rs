use crate::common::TestServer;

#[tokio::test]
async fn health_check() {
    let server = TestServer::start().await;
    let resp = server
        .client
        .get(format!("{}/up", server.base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn new_game_returns_signed_empty_board() {
    let server = TestServer::start().await;
    let game = server.new_game(9).await;

    assert_eq!(game.token(6), "1");
    assert_eq!(game.token(0), "0009");
    assert_eq!(game.token(1), "0");
    assert_eq!(game.token(2), "-001");
    assert_eq!(game.token(4), "0065");
    assert_eq!(game.cells(), "+".repeat(81));
    assert!(server.signer.verify(&game.last.session, &game.last.signature));
    assert_eq!((game.last.status, game.last.x, game.last.y), (0, -1, -1));
}

#[tokio::test]
async fn accepts_mislabelled_form_body() {
    let server = TestServer::start().await;
    let resp = server
        .client
        .post(format!("{}/go", server.base))
        .header("Content-type", "applicaton/www-form-urlencoded")
        .body("x=-1&y=-1&session=new&signature=&size=5")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["session"], format!("0005 0 -001 0000 0065 {} 1", "+".repeat(25)));
}
