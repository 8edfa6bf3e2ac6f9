use serde::{Deserialize, Serialize};

/// Server-assigned player identifier
pub type PlayerId = u64;

/// Represents a player on the roster, as the remote store reports it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// The unique identifier of the player
    pub id: PlayerId,

    /// The name of the player
    pub name: String,

    /// The breed of the player
    pub breed: String,

    /// Where the player's picture lives, if it has one
    #[serde(default, alias = "image", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// The name of the player's team
    /// None means the player is unassigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,

    /// The identifier of the player's team, when the store reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<u64>,

    /// Where the player currently is, e.g. "bench" or "field"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Player {
    /// Returns the team name, or "Unassigned" when the player has no team
    pub fn team_label(&self) -> &str {
        self.team_name.as_deref().unwrap_or("Unassigned")
    }
}

/// The payload sent to the remote store when creating a player
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewPlayer {
    /// The name of the new player
    pub name: String,

    /// The breed of the new player
    pub breed: String,

    /// The picture of the new player
    /// Left out of the request body entirely when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewPlayer {
    /// Builds a payload, treating a blank image as no image at all
    pub fn new(name: impl Into<String>, breed: impl Into<String>, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
            image: image.filter(|image| !image.trim().is_empty()),
        }
    }
}
