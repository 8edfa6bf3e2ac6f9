/// Creation form markup
pub mod form;

/// Player card markup
pub mod player;

/// Roster list markup
pub mod roster;

pub use form::new_player_form;
pub use player::player;
pub use roster::roster;

use crate::{player::PlayerId, view::View};

/// The `id` of the creation form element
pub const FORM_ID: &str = "new-player-form";

/// Escapes text for use inside HTML content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// The post target of an action
pub fn action_path(action: &str) -> String {
    format!("/actions/{}", action)
}

/// A button posting `action`, optionally on behalf of one player
///
/// Only the action's name ends up in the markup; what it does is decided
/// by the [`ActionRegistry`](crate::actions::ActionRegistry).
pub fn action_button(action: &str, label: &str, player: Option<PlayerId>) -> String {
    let player_field = player
        .map(|id| format!(r#"<input type="hidden" name="player" value="{}">"#, id))
        .unwrap_or_default();
    format!(
        r#"<form class="action" method="post" action="{path}">{player_field}<button type="submit" data-action="{action}">{label}</button></form>"#,
        path = escape(&action_path(action)),
        action = escape(action),
        label = escape(label),
    )
}

/// Contents of `<main>` when the roster could not be loaded, with a way to
/// try again
pub fn unavailable(message: &str) -> String {
    format!(
        r#"<p class="unavailable">{}</p>{}"#,
        escape(message),
        action_button(crate::actions::BACK, "Try again", None)
    )
}

/// Contents of `<main>` for the given view
pub fn view(view: &View) -> String {
    match view {
        View::Blank => String::new(),
        View::Roster(players) => roster(players),
        View::Player(p) => player(p),
        View::Unavailable(message) => unavailable(message),
    }
}

/// The whole page: the creation form above the `<main>` view region
pub fn page(current: &View) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Puppy Bowl</title>
</head>
<body>
<h1>Puppy Bowl</h1>
<form id="{form_id}" method="post" action="{form_action}">{form}</form>
<main>{main}</main>
</body>
</html>
"#,
        form_id = FORM_ID,
        form_action = escape(&action_path(crate::actions::ADD_PLAYER)),
        form = new_player_form(),
        main = view(current),
    )
}
