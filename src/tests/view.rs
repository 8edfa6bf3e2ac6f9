use super::fake::{FakeRoster, player};
use crate::actions::Action;
use crate::player::NewPlayer;
use crate::roster::ApiError;
use crate::view::{ROSTER_UNAVAILABLE, View, ViewController};

fn controller() -> ViewController<FakeRoster> {
    ViewController::new(FakeRoster::with_players(vec![
        player(1, "Fido"),
        player(2, "Rover"),
    ]))
}

#[tokio::test]
async fn test_starts_blank() {
    let controller = controller();

    assert_eq!(controller.view(), &View::Blank);
    assert_eq!(controller.main_region(), "");
    assert!(controller.store().calls().is_empty());
}

#[tokio::test]
async fn test_init_shows_roster() {
    let mut controller = controller();
    controller.init().await.unwrap();

    match controller.view() {
        View::Roster(players) => assert_eq!(players.len(), 2),
        other => panic!("Expected the roster, got {:?}", other),
    }
    assert!(controller.page().contains("Fido"));
    assert!(controller.page().contains("new-player-form"));
}

#[tokio::test]
async fn test_failed_list_shows_unavailable() {
    let mut controller = controller();
    controller.store().fail("list");

    let result = controller.init().await;

    assert!(matches!(result, Err(ApiError::Http { status: 500 })));
    assert_eq!(
        controller.view(),
        &View::Unavailable(ROSTER_UNAVAILABLE.to_string())
    );
    assert!(controller.main_region().contains(ROSTER_UNAVAILABLE));
    // the form is still there to use
    assert!(controller.page().contains("new-player-form"));
}

#[tokio::test]
async fn test_see_details_and_back() {
    let mut controller = controller();
    controller.init().await.unwrap();

    controller.dispatch(Action::SeeDetails(2)).await.unwrap();
    assert_eq!(controller.view(), &View::Player(player(2, "Rover")));
    assert!(controller.main_region().contains("Team: Unassigned"));

    controller.dispatch(Action::Back).await.unwrap();
    assert!(matches!(controller.view(), View::Roster(_)));
    assert_eq!(controller.store().calls(), vec!["list", "get 2", "list"]);
}

#[tokio::test]
async fn test_failed_details_keeps_view() {
    let mut controller = controller();
    controller.init().await.unwrap();
    let before = controller.view().clone();

    let result = controller.show_player(42).await;

    assert!(matches!(result, Err(ApiError::Http { status: 404 })));
    assert_eq!(controller.view(), &before);
}

#[tokio::test]
async fn test_remove_refetches_roster() {
    let mut controller = controller();
    controller.init().await.unwrap();

    controller.dispatch(Action::Remove(1)).await.unwrap();

    assert_eq!(controller.view(), &View::Roster(vec![player(2, "Rover")]));
    assert_eq!(controller.store().calls(), vec!["list", "delete 1", "list"]);
}

#[tokio::test]
async fn test_failed_remove_still_refetches() {
    let mut controller = controller();
    controller.init().await.unwrap();
    controller.store().fail("delete");

    let result = controller.remove(1).await;

    assert!(result.is_err());
    match controller.view() {
        View::Roster(players) => assert_eq!(players.len(), 2),
        other => panic!("Expected the roster, got {:?}", other),
    }
    assert_eq!(controller.store().calls(), vec!["list", "delete 1", "list"]);
}

#[tokio::test]
async fn test_submit_adds_and_refetches() {
    let mut controller = controller();
    controller.init().await.unwrap();

    let rex = NewPlayer::new("Rex", "Beagle", None);
    controller.dispatch(Action::AddPlayer(rex)).await.unwrap();

    match controller.view() {
        View::Roster(players) => {
            assert_eq!(players.len(), 3);
            let added = players.last().unwrap();
            assert_eq!(added.id, 3);
            assert_eq!(added.name, "Rex");
            assert_eq!(added.image_url, None);
        }
        other => panic!("Expected the roster, got {:?}", other),
    }
    assert_eq!(controller.store().calls(), vec!["list", "create Rex", "list"]);
}

#[tokio::test]
async fn test_failed_submit_keeps_view() {
    let mut controller = controller();
    controller.dispatch(Action::SeeDetails(1)).await.unwrap();
    controller.store().fail("create");

    let result = controller
        .submit(NewPlayer::new("Rex", "Beagle", None))
        .await;

    assert!(result.is_err());
    assert_eq!(controller.view(), &View::Player(player(1, "Fido")));
    // no re-fetch after a failed create
    assert_eq!(controller.store().calls(), vec!["get 1", "create Rex"]);

    controller.store().heal();
    controller
        .submit(NewPlayer::new("Rex", "Beagle", None))
        .await
        .unwrap();
    assert!(matches!(controller.view(), View::Roster(_)));
}
