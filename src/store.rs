//! SQLite persistence for articles, tags, columns, comments and users.

use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

use crate::model::{Article, Column, Comment, User};
use crate::query::ArticleQuery;
use crate::util::unix_now;

/// Persistence-layer failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested record id does not exist.
    #[error("record not found")]
    NotFound,
    /// Underlying SQLite failure. Propagated untouched; no retries.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// Fields for a new article submission.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub body: String,
    pub author_id: i64,
    pub column_id: Option<i64>,
    pub tags: Vec<String>,
    pub avatar: Option<String>,
}

/// Fields overwritten by an article update.
///
/// `avatar` is only replaced when a new value is supplied; `None` keeps
/// the stored one. The tag set is always replaced wholesale.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub title: String,
    pub body: String,
    pub avatar: Option<String>,
    pub tags: Vec<String>,
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id       INTEGER PRIMARY KEY,
    username TEXT NOT NULL UNIQUE
);
CREATE TABLE IF NOT EXISTS columns (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);
CREATE TABLE IF NOT EXISTS articles (
    id          INTEGER PRIMARY KEY,
    title       TEXT NOT NULL,
    body        TEXT NOT NULL,
    author_id   INTEGER NOT NULL REFERENCES users(id),
    column_id   INTEGER REFERENCES columns(id),
    total_views INTEGER NOT NULL DEFAULT 0 CHECK (total_views >= 0),
    likes       INTEGER NOT NULL DEFAULT 0 CHECK (likes >= 0),
    avatar      TEXT,
    created     INTEGER NOT NULL,
    updated     INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS article_tags (
    article_id INTEGER NOT NULL REFERENCES articles(id) ON DELETE CASCADE,
    tag        TEXT NOT NULL,
    PRIMARY KEY (article_id, tag)
);
CREATE TABLE IF NOT EXISTS comments (
    id         INTEGER PRIMARY KEY,
    article_id INTEGER NOT NULL REFERENCES articles(id) ON DELETE CASCADE,
    author     TEXT NOT NULL,
    body       TEXT NOT NULL,
    created    INTEGER NOT NULL
);
";

const SELECT_ARTICLE: &str = "
SELECT a.id, a.title, a.body, a.author_id, u.username,
       a.column_id, c.name,
       a.total_views, a.likes, a.avatar, a.created, a.updated,
       (SELECT group_concat(tag) FROM
           (SELECT tag FROM article_tags WHERE article_id = a.id ORDER BY tag))
FROM articles a
JOIN users u ON u.id = a.author_id
LEFT JOIN columns c ON c.id = a.column_id";

/// Shared handle to the blog database.
///
/// Wraps a single SQLite connection behind a mutex; every operation is a
/// short synchronous statement, so handlers call these methods directly.
/// Counter updates are single `SET x = x + 1` statements, so concurrent
/// views and likes never lose increments.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Opens (creating if needed) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or schema setup fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens a throwaway in-memory database.
    ///
    /// # Errors
    ///
    /// Returns error if schema setup fails.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("store mutex poisoned")
    }

    /// Returns the user with `username`, creating it if absent.
    ///
    /// The external auth layer owns registration; this seam lets it (and
    /// the test suite) materialize users on first sight.
    ///
    /// # Errors
    ///
    /// Returns error on SQLite failure.
    pub fn ensure_user(&self, username: &str) -> Result<User, StoreError> {
        let conn = self.lock();
        conn.execute(
            "INSERT OR IGNORE INTO users (username) VALUES (?)",
            params![username],
        )?;
        let user = conn.query_row(
            "SELECT id, username FROM users WHERE username = ?",
            params![username],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                })
            },
        )?;
        Ok(user)
    }

    /// Looks up a user by id. Unknown session ids resolve to `None`.
    ///
    /// # Errors
    ///
    /// Returns error on SQLite failure.
    pub fn user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let conn = self.lock();
        let user = conn
            .query_row(
                "SELECT id, username FROM users WHERE id = ?",
                params![id],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        username: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    /// Creates a column, returning the existing one on name collision.
    ///
    /// # Errors
    ///
    /// Returns error on SQLite failure.
    pub fn ensure_column(&self, name: &str) -> Result<Column, StoreError> {
        let conn = self.lock();
        conn.execute(
            "INSERT OR IGNORE INTO columns (name) VALUES (?)",
            params![name],
        )?;
        let column = conn.query_row(
            "SELECT id, name FROM columns WHERE name = ?",
            params![name],
            |row| {
                Ok(Column {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )?;
        Ok(column)
    }

    /// All columns in name order, for the article form selector.
    ///
    /// # Errors
    ///
    /// Returns error on SQLite failure.
    pub fn columns(&self) -> Result<Vec<Column>, StoreError> {
        let conn = self.lock();
        let mut stmt = conn.prepare("SELECT id, name FROM columns ORDER BY name")?;
        let columns = stmt
            .query_map([], |row| {
                Ok(Column {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(columns)
    }

    /// Persists a new article together with its tag set.
    ///
    /// # Returns
    ///
    /// The id of the created article.
    ///
    /// # Errors
    ///
    /// Returns error on SQLite failure (including an unknown column id).
    pub fn create_article(&self, article: &NewArticle) -> Result<i64, StoreError> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;
        let now = unix_now();
        tx.execute(
            "INSERT INTO articles (title, body, author_id, column_id, avatar, created, updated)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                article.title,
                article.body,
                article.author_id,
                article.column_id,
                article.avatar,
                now,
                now
            ],
        )?;
        let id = tx.last_insert_rowid();
        for tag in &article.tags {
            tx.execute(
                "INSERT OR IGNORE INTO article_tags (article_id, tag) VALUES (?, ?)",
                params![id, tag],
            )?;
        }
        tx.commit()?;
        Ok(id)
    }

    /// Fetches one article with its author, column and tags.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id.
    pub fn article(&self, id: i64) -> Result<Article, StoreError> {
        let conn = self.lock();
        let sql = format!("{SELECT_ARTICLE} WHERE a.id = ?");
        conn.query_row(&sql, params![id], article_from_row)
            .optional()?
            .ok_or(StoreError::NotFound)
    }

    /// Lists articles matching `query`, filtered and ordered in SQL.
    ///
    /// # Errors
    ///
    /// Returns error on SQLite failure.
    pub fn list_articles(&self, query: &ArticleQuery) -> Result<Vec<Article>, StoreError> {
        let clauses = query.clauses();
        let sql = format!("{SELECT_ARTICLE}{}{}", clauses.where_sql, clauses.order_sql);
        let conn = self.lock();
        let mut stmt = conn.prepare(&sql)?;
        let articles = stmt
            .query_map(params_from_iter(clauses.params.iter()), article_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(articles)
    }

    /// Overwrites title, body, optional avatar and the whole tag set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id.
    pub fn update_article(&self, id: i64, update: &ArticleUpdate) -> Result<(), StoreError> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;
        let changed = tx.execute(
            "UPDATE articles
             SET title = ?, body = ?, avatar = coalesce(?, avatar), updated = ?
             WHERE id = ?",
            params![update.title, update.body, update.avatar, unix_now(), id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound);
        }
        tx.execute("DELETE FROM article_tags WHERE article_id = ?", params![id])?;
        for tag in &update.tags {
            tx.execute(
                "INSERT OR IGNORE INTO article_tags (article_id, tag) VALUES (?, ?)",
                params![id, tag],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Deletes an article; tags and comments cascade.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id.
    pub fn delete_article(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.lock();
        let changed = conn.execute("DELETE FROM articles WHERE id = ?", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Bumps the view counter by exactly one.
    ///
    /// The increment happens inside a single UPDATE so concurrent viewers
    /// cannot lose counts; no other field is touched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id.
    pub fn increment_views(&self, id: i64) -> Result<(), StoreError> {
        self.increment(id, "total_views")
    }

    /// Bumps the like counter by exactly one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id.
    pub fn increment_likes(&self, id: i64) -> Result<(), StoreError> {
        self.increment(id, "likes")
    }

    fn increment(&self, id: i64, counter: &str) -> Result<(), StoreError> {
        let conn = self.lock();
        // counter is one of two compile-time names, never user input
        let sql = format!("UPDATE articles SET {counter} = {counter} + 1 WHERE id = ?");
        let changed = conn.execute(&sql, params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Comments on an article, oldest first.
    ///
    /// # Errors
    ///
    /// Returns error on SQLite failure.
    pub fn comments_for(&self, article_id: i64) -> Result<Vec<Comment>, StoreError> {
        let conn = self.lock();
        let mut stmt = conn.prepare(
            "SELECT id, article_id, author, body, created
             FROM comments WHERE article_id = ? ORDER BY created, id",
        )?;
        let comments = stmt
            .query_map(params![article_id], |row| {
                Ok(Comment {
                    id: row.get(0)?,
                    article_id: row.get(1)?,
                    author: row.get(2)?,
                    body: row.get(3)?,
                    created: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(comments)
    }

    /// Records a comment. The comment subsystem owns posting flow; this
    /// is its write seam into the shared database.
    ///
    /// # Errors
    ///
    /// Returns error on SQLite failure (including an unknown article id).
    pub fn add_comment(&self, article_id: i64, author: &str, body: &str) -> Result<(), StoreError> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO comments (article_id, author, body, created) VALUES (?, ?, ?, ?)",
            params![article_id, author, body, unix_now()],
        )?;
        Ok(())
    }
}

fn article_from_row(row: &Row<'_>) -> rusqlite::Result<Article> {
    let column = match (row.get::<_, Option<i64>>(5)?, row.get::<_, Option<String>>(6)?) {
        (Some(id), Some(name)) => Some(Column { id, name }),
        _ => None,
    };
    let tags = row
        .get::<_, Option<String>>(12)?
        .map(|joined| joined.split(',').map(str::to_string).collect())
        .unwrap_or_default();
    Ok(Article {
        id: row.get(0)?,
        title: row.get(1)?,
        body: row.get(2)?,
        author_id: row.get(3)?,
        author_name: row.get(4)?,
        column,
        tags,
        total_views: row.get(7)?,
        likes: row.get(8)?,
        avatar: row.get(9)?,
        created: row.get(10)?,
        updated: row.get(11)?,
    })
}
