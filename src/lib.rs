//! Self-hosted Markdown blog engine.

mod assets;
pub mod auth;
pub mod avatar;
pub mod components;
mod config;
mod error;
mod form;
mod markdown;
mod model;
mod paginate;
pub mod pages;
mod query;
pub mod server;
mod store;
mod util;

pub use auth::{ensure_author, CurrentUser, RequireUser};
pub use config::Config;
pub use error::AppError;
pub use form::{split_tags, ArticleForm, ValidArticle, ValidationError, TITLE_MAX};
pub use markdown::{MarkdownRenderer, RenderedMarkdown, TocEntry};
pub use model::{Article, Column, Comment, User};
pub use paginate::{paginate, parse_page, Page, PAGE_SIZE};
pub use query::{ArticleQuery, ListParams, Order};
pub use store::{ArticleUpdate, NewArticle, Store, StoreError};
