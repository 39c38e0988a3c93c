pub mod movie;
pub mod recommendation;
pub mod user_state;

pub use movie::Movie;
pub use recommendation::Recommendation;
pub use user_state::{MovieUserState, UserState};
