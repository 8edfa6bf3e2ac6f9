use std::future::Future;

use log::{error, info};
use reqwest::{Client, RequestBuilder};

use super::{ApiError, PlayerStore};
use crate::{
    config::ApiConfig,
    json::{decode_acknowledgement, decode_player_list, decode_single_player},
    player::{NewPlayer, Player, PlayerId},
};

/// Represents the remote players collection of one cohort
#[derive(Clone, Debug)]
pub struct HttpRoster {
    client: Client,
    endpoint: String,
}

impl HttpRoster {
    /// Points a new roster at `{base_url}/{cohort}/players`
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.players_url(),
        }
    }

    /// The collection URL every request is made against
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn player_url(&self, id: PlayerId) -> String {
        format!("{}/{}", self.endpoint, id)
    }
}

/// Sends the request and returns the body of a successful response
async fn send(request: RequestBuilder) -> Result<String, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Http {
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}

impl PlayerStore for HttpRoster {
    fn list_players(&self) -> impl Future<Output = Result<Vec<Player>, ApiError>> + Send {
        let request = self.client.get(&self.endpoint);
        async move {
            send(request)
                .await
                .and_then(|body| decode_player_list(&body))
                .inspect_err(|e| error!("Uh oh, trouble fetching players! {}", e))
        }
    }

    fn get_player(&self, id: PlayerId) -> impl Future<Output = Result<Player, ApiError>> + Send {
        let request = self.client.get(self.player_url(id));
        async move {
            send(request)
                .await
                .and_then(|body| decode_single_player(&body))
                .inspect_err(|e| error!("Oh no, trouble fetching player #{}! {}", id, e))
        }
    }

    fn create_player(
        &self,
        player: &NewPlayer,
    ) -> impl Future<Output = Result<Player, ApiError>> + Send {
        let request = self.client.post(&self.endpoint).json(player);
        async move {
            send(request)
                .await
                .and_then(|body| decode_single_player(&body))
                .inspect(|created| {
                    info!("Player #{} ({}) added to the roster", created.id, created.name)
                })
                .inspect_err(|e| {
                    error!("Oops, something went wrong with adding that player! {}", e)
                })
        }
    }

    fn delete_player(&self, id: PlayerId) -> impl Future<Output = Result<(), ApiError>> + Send {
        let request = self.client.delete(self.player_url(id));
        async move {
            send(request)
                .await
                .and_then(|body| decode_acknowledgement(&body))
                .map(|_| info!("Player #{} removed successfully.", id))
                .inspect_err(|e| {
                    error!("Whoops, trouble removing player #{} from the roster! {}", id, e)
                })
        }
    }
}
