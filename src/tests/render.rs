use super::fake::player;
use crate::player::Player;
use crate::render::{self, FORM_ID, escape};
use crate::view::View;

fn fido() -> Player {
    Player {
        image_url: Some("x.png".to_string()),
        ..player(1, "Fido")
    }
}

#[test]
fn test_empty_roster() {
    let html = render::roster(&[]);

    assert_eq!(html, "No players found.");
    assert!(!html.contains("player-card"));
}

#[test]
fn test_single_card_roster() {
    let html = render::roster(&[fido()]);

    assert_eq!(html.matches(r#"class="player-card""#).count(), 1);
    assert!(html.contains("Fido"));
    assert!(html.contains("ID: 1"));
    assert!(html.contains(r#"<img src="x.png" alt="Fido">"#));
}

#[test]
fn test_roster_card_actions() {
    let html = render::roster(&[fido(), player(7, "Rover")]);

    assert_eq!(html.matches(r#"class="player-card""#).count(), 2);
    assert_eq!(html.matches(r#"data-action="see-details""#).count(), 2);
    assert_eq!(html.matches(r#"data-action="remove""#).count(), 2);
    assert!(html.contains(r#"action="/actions/see-details""#));
    assert!(html.contains(r#"action="/actions/remove""#));
    assert!(html.contains(r#"<input type="hidden" name="player" value="7">"#));
    assert!(html.contains("See details"));
    assert!(html.contains("Remove from roster"));
}

#[test]
fn test_roster_card_without_image() {
    let html = render::roster(&[Player {
        image_url: None,
        ..fido()
    }]);

    assert!(!html.contains("<img"));
    assert!(html.contains("Fido"));
}

#[test]
fn test_single_player_unassigned() {
    let html = render::player(&fido());

    assert!(html.contains("Team: Unassigned"));
    assert!(html.contains("Breed: Beagle"));
    assert!(html.contains("ID: 1"));
    assert!(html.contains(r#"alt="Image of Fido""#));
    assert!(html.contains(r#"data-action="back""#));
    assert!(!html.contains(r#"name="player""#));
}

#[test]
fn test_single_player_with_team() {
    let html = render::player(&Player {
        team_name: Some("Ruff".to_string()),
        ..fido()
    });

    assert!(html.contains("Team: Ruff"));
    assert!(!html.contains("Unassigned"));
}

#[test]
fn test_new_player_form() {
    let html = render::new_player_form();

    assert!(html.contains(r#"name="name" placeholder="Name" required"#));
    assert!(html.contains(r#"name="breed" placeholder="Breed" required"#));
    assert!(html.contains(r#"name="image" placeholder="Image URL">"#));
    assert!(html.contains(r#"<button type="submit">Add Player</button>"#));
}

#[test]
fn test_page_layout() {
    let html = render::page(&View::Roster(vec![fido()]));

    assert!(html.contains(&format!(r#"<form id="{}""#, FORM_ID)));
    assert!(html.contains(r#"action="/actions/add-player""#));
    assert!(html.contains("<main><div class=\"player-card\">"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn test_page_unavailable() {
    let html = render::page(&View::Unavailable("Nope".to_string()));
    assert!(html.contains(r#"<main><p class="unavailable">Nope</p>"#));
    assert!(html.contains(r#"data-action="back">Try again</button>"#));
}

#[test]
fn test_escaping() {
    assert_eq!(
        escape(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );

    let html = render::roster(&[player(3, "<script>")]);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}
