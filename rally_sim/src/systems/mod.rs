pub mod brain;
pub mod contacts;
pub mod movement;
pub mod serve;

pub use brain::*;
pub use contacts::*;
pub use movement::*;
pub use serve::*;
