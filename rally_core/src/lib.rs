//! Pickleball rally adjudication and shot resolution.
//!
//! The physics layer owns motion and collision detection. It reports each
//! contact to a [`RallyReferee`], which decides whether the rally continues,
//! rewrites the ball's velocity for legal bounces and strikes, and settles
//! finished rallies with the [`ScoreLedger`].

pub mod assist;
pub mod bounce;
pub mod components;
pub mod config;
pub mod contact;
pub mod court;
pub mod ledger;
pub mod modes;
pub mod params;
pub mod referee;
pub mod resources;
pub mod result;
pub mod rules;
pub mod shot;

pub use assist::*;
pub use bounce::bounce_velocity;
pub use components::*;
pub use config::*;
pub use contact::*;
pub use court::*;
pub use ledger::*;
pub use modes::*;
pub use params::*;
pub use referee::*;
pub use resources::*;
pub use result::*;
pub use shot::*;
