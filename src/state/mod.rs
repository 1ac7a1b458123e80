//! State management components
//!
//! Binds the pure picker reducer to its observers: the dispatcher owns the
//! state, applies events through `PickerState::apply`, and notifies
//! subscribers so the presentation layer can re-render on change.

pub mod dispatcher;

pub use dispatcher::{StateDispatcher, StateSubscriber};
