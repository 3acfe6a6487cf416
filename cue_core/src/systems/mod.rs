pub mod collision;
pub mod movement;
pub mod pockets;
pub mod rails;

pub use collision::*;
pub use movement::*;
pub use pockets::*;
pub use rails::*;
