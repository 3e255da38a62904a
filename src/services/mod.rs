//! Application service layer.
//!
//! The contact store owns the in-memory list of records and dispatches add,
//! edit, delete, search, import and export to the domain rules, the codec and
//! the repository. A UI shell talks to this layer only.

mod contact_store;

pub use contact_store::{ContactStore, NewContact};
