//! The player: a physics body with a first-person view.

mod first_person_look;
mod player;

pub use first_person_look::FirstPersonLook;
pub use player::{BodyDimensions, Player};
