use log::{debug, warn};

use crate::{
    actions::Action,
    player::{NewPlayer, Player, PlayerId},
    render,
    roster::{ApiError, PlayerStore},
};

pub const ROSTER_UNAVAILABLE: &str = "Uh oh, trouble fetching players!";

/// What the `<main>` region is currently showing
#[derive(Clone, Debug, Default, PartialEq)]
pub enum View {
    /// Nothing has been rendered yet
    #[default]
    Blank,
    /// The full roster
    Roster(Vec<Player>),
    /// A single player's details
    Player(Player),
    /// The roster could not be loaded
    Unavailable(String),
}

/// Owns the current view and moves it between roster and detail display
///
/// Every operation makes at most two store calls, one after the other,
/// and applies its view transition before returning the store's outcome.
pub struct ViewController<S: PlayerStore> {
    store: S,
    view: View,
}

impl<S: PlayerStore> ViewController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            view: View::Blank,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Markup of the `<main>` region
    #[cfg(test)]
    pub fn main_region(&self) -> String {
        render::view(&self.view)
    }

    /// Markup of the whole page
    pub fn page(&self) -> String {
        render::page(&self.view)
    }

    /// Loads the roster, as every page load does
    pub async fn init(&mut self) -> Result<(), ApiError> {
        self.show_roster().await
    }

    /// Fetches the roster and shows it
    pub async fn show_roster(&mut self) -> Result<(), ApiError> {
        match self.store.list_players().await {
            Ok(players) => {
                debug!("Showing {} players", players.len());
                self.view = View::Roster(players);
                Ok(())
            }
            Err(e) => {
                self.view = View::Unavailable(ROSTER_UNAVAILABLE.to_string());
                Err(e)
            }
        }
    }

    /// Fetches one player and shows its details
    /// On failure the current view stays as it is
    pub async fn show_player(&mut self, id: PlayerId) -> Result<(), ApiError> {
        let player = self.store.get_player(id).await?;
        self.view = View::Player(player);
        Ok(())
    }

    pub async fn back(&mut self) -> Result<(), ApiError> {
        self.show_roster().await
    }

    /// Removes a player, then re-fetches the roster whether or not the
    /// removal went through
    pub async fn remove(&mut self, id: PlayerId) -> Result<(), ApiError> {
        let removed = self.store.delete_player(id).await;
        let shown = self.show_roster().await;
        removed.and(shown)
    }

    /// Adds a player, then re-fetches the roster
    /// On failure the current view stays as it is
    pub async fn submit(&mut self, player: NewPlayer) -> Result<(), ApiError> {
        if let Err(e) = self.store.create_player(&player).await {
            warn!("Uh oh, trouble adding the new player! {}", e);
            return Err(e);
        }
        self.show_roster().await
    }

    pub async fn dispatch(&mut self, action: Action) -> Result<(), ApiError> {
        match action {
            Action::SeeDetails(id) => self.show_player(id).await,
            Action::Remove(id) => self.remove(id).await,
            Action::Back => self.back().await,
            Action::AddPlayer(player) => self.submit(player).await,
        }
    }
}
