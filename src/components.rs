//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across multiple
//! page types (list, detail, editor). Components handle specific UI
//! elements with consistent styling and behavior, eliminating duplication
//! across page generators.

pub mod article_card;
pub mod comments;
pub mod footer;
pub mod forms;
pub mod layout;
pub mod nav;
pub mod pagination;
pub mod toc;
