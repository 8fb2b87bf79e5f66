//! Integration tests for the editor.
//!
//! These drive an `Editor` through buttons, clicks and render passes and
//! check the resulting graph, selection and mode.

mod connect_workflow_tests;
mod selection_workflow_tests;
