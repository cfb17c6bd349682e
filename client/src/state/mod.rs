//! Reactive page state, held in `RwSignal`s and provided via context.

pub mod spaces;
