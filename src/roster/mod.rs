/// reqwest-backed roster module
pub mod http;

use std::future::Future;

use thiserror::Error;

use crate::player::{NewPlayer, Player, PlayerId};

pub use http::HttpRoster;

/// Everything that can go wrong while talking to the remote roster
#[derive(Debug, Error)]
pub enum ApiError {
    /// The store answered with a non-success status
    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },

    /// The request never completed, or its body could not be read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not the JSON we expected
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The store wrapped its answer with `success: false`
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Denotes a place players can be listed, fetched, created and removed
///
/// Every operation performs exactly one request and never retries.
pub trait PlayerStore {
    /// Fetches the whole roster
    fn list_players(&self) -> impl Future<Output = Result<Vec<Player>, ApiError>> + Send;

    /// Fetches a single player by id
    fn get_player(&self, id: PlayerId) -> impl Future<Output = Result<Player, ApiError>> + Send;

    /// Adds a player, returning it as the store assigned it (with its new id)
    fn create_player(
        &self,
        player: &NewPlayer,
    ) -> impl Future<Output = Result<Player, ApiError>> + Send;

    /// Removes a player by id
    fn delete_player(&self, id: PlayerId) -> impl Future<Output = Result<(), ApiError>> + Send;
}
