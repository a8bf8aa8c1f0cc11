//! # API Module
//!
//! Business operations of the owner/pet service. Handlers in [`crate::front`]
//! call these with the repository held in the application state.
//!
//! ## Modules
//!
//! - [`owner`] - Owner creation, listing, renaming and removal
//! - [`pet`] - Adding pets to an owner and removing them

pub mod owner;
pub mod pet;
