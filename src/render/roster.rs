use super::{action_button, escape};
use crate::{
    actions::{REMOVE, SEE_DETAILS},
    player::Player,
};

pub const NO_PLAYERS: &str = "No players found.";

/// Contents of `<main>` listing every player, one card each
///
/// An empty roster renders only the "No players found." message.
pub fn roster(players: &[Player]) -> String {
    if players.is_empty() {
        return NO_PLAYERS.to_string();
    }

    players.iter().map(card).collect()
}

fn card(player: &Player) -> String {
    let image = player
        .image_url
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}">"#,
                escape(src),
                escape(&player.name)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="player-card">{image}<h2>{name}</h2><p>ID: {id}</p>{details}{remove}</div>"#,
        name = escape(&player.name),
        id = player.id,
        details = action_button(SEE_DETAILS, "See details", Some(player.id)),
        remove = action_button(REMOVE, "Remove from roster", Some(player.id)),
    )
}
