use hecs::{ComponentError, NoSuchEntity, QueryOneError};
use thiserror::Error;

/// Errors that can occur while manipulating the pawn or the world around it.
///
/// Gameplay code treats most of these as "nothing to do this tick" and skips the action.
#[derive(Error, Debug)]
pub enum VrPawnError {
    /// A component lookup failed
    #[error("The entity was missing a component: {0}")]
    ComponentError(#[from] ComponentError),
    /// The entity has been despawned, or never existed
    #[error("The entity does not exist")]
    NoSuchEntity(#[from] NoSuchEntity),
    /// A single-entity query failed
    #[error("The entity did not match the query")]
    QueryOneError(#[from] QueryOneError),
    /// The entity has no rigid body in the physics simulation
    #[error("Unable to find a rigid body for entity {0:?}")]
    MissingRigidBody(hecs::Entity),
    /// Configuration could not be parsed
    #[error("Unable to parse configuration")]
    ConfigError(#[from] serde_json::Error),
    /// Configuration could not be read
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
