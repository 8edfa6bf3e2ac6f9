use super::{action_button, escape};
use crate::{actions::BACK, player::Player};

/// Contents of `<main>` showing one player in detail
pub fn player(player: &Player) -> String {
    let image = player
        .image_url
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="Image of {}">"#,
                escape(src),
                escape(&player.name)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="player-card">{image}<h2>{name}</h2><p>ID: {id}</p><p>Breed: {breed}</p><p>Team: {team}</p>{back}</div>"#,
        name = escape(&player.name),
        id = player.id,
        breed = escape(&player.breed),
        team = escape(player.team_label()),
        back = action_button(BACK, "Back to all players", None),
    )
}
