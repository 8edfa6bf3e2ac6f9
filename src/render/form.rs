/// Inner markup of the creation form: name and breed are required, the
/// image is not
pub fn new_player_form() -> String {
    concat!(
        r#"<input type="text" id="player-name" name="name" placeholder="Name" required>"#,
        r#"<input type="text" id="player-breed" name="breed" placeholder="Breed" required>"#,
        r#"<input type="text" id="player-image" name="image" placeholder="Image URL">"#,
        r#"<button type="submit">Add Player</button>"#,
    )
    .to_string()
}
