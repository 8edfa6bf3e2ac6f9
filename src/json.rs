use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::player::Player;
use crate::roster::ApiError;

/// The error object the store attaches to a rejected response
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A response body, either as the payload itself or wrapped by the store in
/// `{ success, error, data }`
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped {
        success: bool,
        #[serde(default)]
        error: Option<ErrorBody>,
        data: Option<T>,
    },
    Bare(T),
}

impl<T> Envelope<T> {
    /// Unwraps the payload, turning `success: false` into a rejection
    pub fn into_data(self) -> Result<T, ApiError> {
        match self {
            Envelope::Bare(data) => Ok(data),
            Envelope::Wrapped {
                success: false,
                error,
                ..
            } => Err(rejection(error)),
            Envelope::Wrapped {
                data: Some(data), ..
            } => Ok(data),
            Envelope::Wrapped { data: None, .. } => Err(ApiError::Malformed(
                serde::de::Error::custom("response contained no data"),
            )),
        }
    }
}

fn rejection(error: Option<ErrorBody>) -> ApiError {
    let message = error
        .and_then(|e| e.message.or(e.name))
        .unwrap_or_else(|| "request was not successful".to_string());
    ApiError::Rejected(message)
}

/// Body of the list endpoint
#[derive(Deserialize, Debug)]
pub struct PlayerList {
    pub players: Vec<Player>,
}

/// Body of the single-player endpoints
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum SinglePlayer {
    Keyed { player: Player },
    Created {
        #[serde(rename = "newPlayer")]
        new_player: Player,
    },
    Listed { players: Vec<Player> },
    Bare(Player),
}

impl SinglePlayer {
    fn into_player(self) -> Option<Player> {
        match self {
            SinglePlayer::Keyed { player }
            | SinglePlayer::Created { new_player: player }
            | SinglePlayer::Bare(player) => Some(player),
            SinglePlayer::Listed { players } => players.into_iter().next(),
        }
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    envelope.into_data()
}

/// Decodes the body of `GET /players`
pub fn decode_player_list(body: &str) -> Result<Vec<Player>, ApiError> {
    decode::<PlayerList>(body).map(|list| list.players)
}

/// Decodes the body of `GET /players/:id` and `POST /players`
pub fn decode_single_player(body: &str) -> Result<Player, ApiError> {
    decode::<SinglePlayer>(body)?.into_player().ok_or_else(|| {
        ApiError::Malformed(serde::de::Error::custom("response contained no player"))
    })
}

/// Checks the body of a request that carries no payload, e.g. `DELETE`
///
/// An empty body is fine; a wrapped body must not say `success: false`.
pub fn decode_acknowledgement(body: &str) -> Result<(), ApiError> {
    if body.trim().is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<Envelope<serde_json::Value>>(body)? {
        Envelope::Wrapped {
            success: false,
            error,
            ..
        } => Err(rejection(error)),
        _ => Ok(()),
    }
}
