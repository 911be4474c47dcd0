pub mod dispatcher;
pub mod handlers;
pub mod registry;
pub mod saved;
pub mod state;

pub use dispatcher::{CommandDispatcher, DispatchOutcome};
pub use registry::SessionRegistry;
pub use state::SessionSnapshot;
