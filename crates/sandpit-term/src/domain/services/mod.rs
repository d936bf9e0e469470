pub mod actions;
pub mod events;
pub mod session;

pub use actions::ActionsService;
pub use events::EventsService;
pub use session::{EditorSession, SessionProps};
