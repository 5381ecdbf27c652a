use gus_server::config::Config;

use crate::common::{SECRET, TestServer};

async fn start() -> TestServer {
    TestServer::start_with(Config {
        secret: Some(SECRET.to_string()),
        opponent: true,
        ..Config::default()
    })
    .await
}

#[tokio::test]
async fn opponent_answers_each_move() {
    let server = start().await;
    let mut game = server.new_game(9).await;

    let resp = game.play(4, 4).await;
    assert_eq!(resp.status, 0);
    let (x, y) = (resp.x, resp.y);
    assert!((0..9).contains(&x) && (0..9).contains(&y));
    assert_ne!((x, y), (4, 4));

    // Black to move again, one stone of each color on the board.
    assert_eq!(game.token(1), "0");
    assert_eq!(game.cells().matches('X').count(), 1);
    assert_eq!(game.cells().matches('O').count(), 1);
    assert_eq!(&game.cells()[(y * 9 + x) as usize..][..1], "O");
}

#[tokio::test]
async fn opponent_stays_silent_after_rejection() {
    let server = start().await;
    let mut game = server.new_game(9).await;
    game.play(4, 4).await;
    let before = game.last.session.clone();

    let resp = game.play(4, 4).await;
    assert_eq!(resp.status, -1);
    assert_eq!(game.last.session, before);
}

#[tokio::test]
async fn opponent_passes_when_it_cannot_move() {
    let server = start().await;
    let mut game = server.game_from("0003 0 -001 0000 0065 +X+XX++X+ 1");

    let resp = game.play(2, 1).await;
    assert_eq!(resp.status, -5);
    assert_eq!((resp.x, resp.y), (2, 1));
    assert_eq!(game.cells(), "+X+XXX+X+");
    assert_eq!(game.token(1), "0");
}
