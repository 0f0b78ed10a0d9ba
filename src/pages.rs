//! Page generation modules for different view types
//!
//! This module organizes HTML page generators by page type (list, detail,
//! editor). Each page module handles its specific view logic and utilizes
//! shared components from the components module.

pub mod detail;
pub mod editor;
pub mod list;
