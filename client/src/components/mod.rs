//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the space list handed to them by the page; they read no
//! context and own no fetch logic.

pub mod space_card;
pub mod spaces_view;
