pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod prompt;
pub mod repl;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::TrackerError;
pub use model::{Contact, ContactUpdate, NewContact, Note, Status};
pub use repl::Session;
pub use store::ContactStore;
