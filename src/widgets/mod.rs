//! UI widgets for the TUI application
//!
//! This module contains all reusable UI components/widgets
//! used by the TUI for rendering different parts of the interface.

pub mod tag_picker;
