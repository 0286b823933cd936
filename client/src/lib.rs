//! Typed SDK for the hosted row-store backend: configuration, token auth,
//! a filtered-select query builder, per-table gateways, and the composite
//! debt writes. The service itself is external; this crate only speaks its
//! REST dialect.

pub mod auth;
pub mod config;
pub mod debts;
pub mod error;
mod http;
pub mod query;
pub mod tables;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use auth::{Listener, Session};
pub use config::Config;
pub use error::Error;
pub use query::{OrderDirection, QueryBuilder};

/// Cheaply cloneable handle to the backend. All clones share the same
/// session slot, so a sign-in through one is visible to every other.
#[derive(Clone)]
pub struct Client {
    config: Config,
    session: Rc<RefCell<Option<Session>>>,
    listeners: Rc<RefCell<Vec<(usize, Listener)>>>,
    next_listener_id: Rc<Cell<usize>>,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: Rc::new(RefCell::new(None)),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn auth_token(&self) -> Option<String> {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, table)
    }

    /// Starts a filtered select against `table`.
    pub fn from(&self, table: &str) -> QueryBuilder {
        QueryBuilder::new(self.clone(), table)
    }

    /// Inserts one row and returns the created row as the backend stored it.
    pub async fn insert<T, R>(&self, table: &str, row: &T) -> Result<R, Error>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let request = http::attach_headers(
            Request::post(&self.rest_url(table)),
            &self.config,
            self.auth_token().as_deref(),
        )
        .header("Prefer", "return=representation")
        .json(row)
        .map_err(|err| Error::Decode(err.to_string()))?;
        let response = http::check(request.send().await?).await?;
        // the row API answers with an array even for single-row inserts
        let mut rows: Vec<R> = http::decode(response).await?;
        if rows.is_empty() {
            return Err(Error::Decode("insert returned no rows".to_string()));
        }
        Ok(rows.remove(0))
    }

    /// Patches the row with the given id and returns the updated row.
    pub async fn update<T, R>(&self, table: &str, id: Uuid, patch: &T) -> Result<R, Error>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = format!("{}?id=eq.{}", self.rest_url(table), id);
        let request = http::attach_headers(
            Request::patch(&url),
            &self.config,
            self.auth_token().as_deref(),
        )
        .header("Prefer", "return=representation")
        .json(patch)
        .map_err(|err| Error::Decode(err.to_string()))?;
        let response = http::check(request.send().await?).await?;
        let mut rows: Vec<R> = http::decode(response).await?;
        if rows.is_empty() {
            return Err(Error::Decode("update matched no rows".to_string()));
        }
        Ok(rows.remove(0))
    }

    pub async fn delete(&self, table: &str, id: Uuid) -> Result<(), Error> {
        let url = format!("{}?id=eq.{}", self.rest_url(table), id);
        let request = http::attach_headers(
            Request::delete(&url),
            &self.config,
            self.auth_token().as_deref(),
        );
        http::check(request.send().await?).await?;
        Ok(())
    }
}
