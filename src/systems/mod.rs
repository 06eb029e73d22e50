pub mod arena;
pub mod game_state;
pub mod icons;
pub mod input;
pub mod session;
pub mod setup;
pub mod top_bar;

pub use arena::*;
pub use game_state::*;
pub use input::*;
pub use session::*;
pub use setup::*;
pub use top_bar::*;
