//! Reusable UI components

pub mod badge;
pub mod form_field;
pub mod modal;
pub mod nav;
pub mod phases;
pub mod status_bar;
pub mod table;
pub mod toasts;

// Component exports
pub use modal::{ModalAction, ModalContent, ModalMsg, ModalState};
pub use nav::{NavLink, NavMsg, NavState};
pub use phases::{PhasesMsg, PhasesParams, PhasesState};
pub use status_bar::StatusBar;
pub use table::{BodyCell, HeadCell, TableMsg, TableParams, TableState};
pub use toasts::Toast;
