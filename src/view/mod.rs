//! The component layer: one generic view per lifecycle role.
//!
//! Each view owns its own request lifecycle and nothing else; no state is
//! shared across views except the record handed over through route data and
//! dialog inputs. A view going away does not cancel a request it has in
//! flight.

pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

pub use delete::{DeleteDialog, DialogOutcome};
pub use detail::DetailView;
pub use list::ListView;
pub use update::{SaveOutcome, UpdateView};
