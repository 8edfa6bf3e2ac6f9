use std::collections::HashMap;

use rocket::FromForm;
use thiserror::Error;

use crate::player::{NewPlayer, PlayerId};

pub const SEE_DETAILS: &str = "see-details";
pub const REMOVE: &str = "remove";
pub const BACK: &str = "back";
pub const ADD_PLAYER: &str = "add-player";

/// Something the user asked the page to do
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Show a single player's card
    SeeDetails(PlayerId),
    /// Remove a player, then show the roster again
    Remove(PlayerId),
    /// Go back to the full roster
    Back,
    /// Add a player from the creation form, then show the roster again
    AddPlayer(NewPlayer),
}

/// The fields a page form submits alongside an action name
#[derive(FromForm, Clone, Debug, Default, PartialEq)]
pub struct ActionFields {
    pub player: Option<PlayerId>,
    pub name: Option<String>,
    pub breed: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ActionError {
    #[error("no action named '{0}'")]
    Unknown(String),

    #[error("action '{action}' needs a '{field}' field")]
    MissingField {
        action: &'static str,
        field: &'static str,
    },
}

/// Turns submitted fields into an action
pub type Binder = fn(&ActionFields) -> Result<Action, ActionError>;

/// Maps the action names used in the markup to the behavior they trigger
#[derive(Clone, Debug)]
pub struct ActionRegistry {
    binders: HashMap<&'static str, Binder>,
}

impl ActionRegistry {
    /// A registry with no actions at all
    pub fn empty() -> Self {
        Self {
            binders: HashMap::new(),
        }
    }

    /// Registers (or replaces) the binder for `name`
    pub fn register(&mut self, name: &'static str, binder: Binder) -> &mut Self {
        self.binders.insert(name, binder);
        self
    }

    #[cfg(test)]
    pub fn contains(&self, name: &str) -> bool {
        self.binders.contains_key(name)
    }

    /// Looks up `name` and binds the submitted fields to an action
    pub fn bind(&self, name: &str, fields: &ActionFields) -> Result<Action, ActionError> {
        let binder = self
            .binders
            .get(name)
            .ok_or_else(|| ActionError::Unknown(name.to_string()))?;
        binder(fields)
    }
}

impl Default for ActionRegistry {
    /// The actions the roster page renders
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(SEE_DETAILS, |fields| {
                player_id(SEE_DETAILS, fields).map(Action::SeeDetails)
            })
            .register(REMOVE, |fields| player_id(REMOVE, fields).map(Action::Remove))
            .register(BACK, |_| Ok(Action::Back))
            .register(ADD_PLAYER, bind_new_player);
        registry
    }
}

fn player_id(action: &'static str, fields: &ActionFields) -> Result<PlayerId, ActionError> {
    fields.player.ok_or(ActionError::MissingField {
        action,
        field: "player",
    })
}

fn required(field: &'static str, value: &Option<String>) -> Result<String, ActionError> {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ActionError::MissingField {
            action: ADD_PLAYER,
            field,
        }),
    }
}

fn bind_new_player(fields: &ActionFields) -> Result<Action, ActionError> {
    let name = required("name", &fields.name)?;
    let breed = required("breed", &fields.breed)?;
    let image = fields.image.as_ref().map(|image| image.trim().to_string());
    Ok(Action::AddPlayer(NewPlayer::new(name, breed, image)))
}
