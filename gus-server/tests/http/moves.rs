use crate::common::TestServer;

#[tokio::test]
async fn moves_alternate_colors() {
    let server = TestServer::start().await;
    let mut game = server.new_game(5).await;

    let resp = game.play(1, 1).await;
    assert_eq!((resp.status, resp.x, resp.y), (0, 1, 1));
    assert_eq!(game.token(1), "1");

    game.play(2, 2).await;
    assert_eq!(game.token(1), "0");
    assert_eq!(&game.cells()[..15], "++++++X+++++O++");
}

#[tokio::test]
async fn rejections_report_status_and_keep_session() {
    let server = TestServer::start().await;
    let mut game = server.new_game(5).await;
    game.play(0, 0).await;
    let before = game.last.session.clone();

    assert_eq!(game.play(0, 0).await.status, -1);
    assert_eq!(game.last.session, before);
    assert_eq!(game.play(5, 0).await.status, -2);
    assert_eq!(game.play(-7, 100).await.status, -2);
    assert_eq!(game.last.session, before);
}

#[tokio::test]
async fn suicide_is_rejected() {
    let server = TestServer::start().await;
    let mut game = server.game_from("0003 1 -001 0000 0065 +X+X+++++ 1");
    let resp = game.play(0, 0).await;
    assert_eq!(resp.status, -3);
    assert_eq!(game.cells(), "+X+X+++++");
}

#[tokio::test]
async fn surround_capture_scores_a_point() {
    let server = TestServer::start().await;
    let mut game = server.new_game(5).await;

    // B(1,1) is surrounded by W(1,0), W(0,1), W(2,1), W(1,2); Black plays elsewhere meanwhile.
    for (x, y) in [(1, 1), (1, 0), (4, 4), (0, 1), (4, 3), (2, 1), (4, 2)] {
        assert_eq!(game.play(x, y).await.status, 0);
    }
    let resp = game.play(1, 2).await;
    assert_eq!(resp.status, 1);
    assert_eq!(&game.cells()[6..7], "+");
    assert_eq!(game.token(3), "0000");
    assert_eq!(game.token(4), "0075");
}

#[tokio::test]
async fn pass_hands_over_the_turn() {
    let server = TestServer::start().await;
    let mut game = server.new_game(5).await;
    let resp = game.pass().await;
    assert_eq!((resp.status, resp.x, resp.y), (0, -1, -1));
    assert_eq!(game.token(1), "1");
}
