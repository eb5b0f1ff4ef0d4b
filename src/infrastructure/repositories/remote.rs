//! Remote-API-backed Repository
//!
//! Stands in for a repository backed by a remote service: `find`/`save`/
//! `update`/`delete` speak JSON over HTTP against `{base_url}/entities/...`.
//! Every call blocks the calling thread; no cancellation or timeout
//! behavior beyond the configured request timeout is offered at this
//! abstraction level.
//!
//! HTTP status is mapped onto the shared error taxonomy: 404 -> `NotFound`,
//! 409 -> `Conflict`, any other non-2xx status or transport failure ->
//! `Unavailable`.

use std::marker::PhantomData;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::entities::Identifiable;
use crate::domain::ports::Repository;
use crate::error::{RepositoryError, RepositoryResult};
use crate::infrastructure::config::RemoteRepositoryConfig;

/// A `Repository` backed by a remote HTTP API.
pub struct RemoteRepository<E> {
    client: Client,
    base_url: String,
    _marker: PhantomData<E>,
}

impl<E> RemoteRepository<E> {
    pub fn new(config: RemoteRepositoryConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url,
            _marker: PhantomData,
        })
    }

    fn url_for(&self, id: &str) -> String {
        format!("{}/entities/{id}", self.base_url.trim_end_matches('/'))
    }

    fn url(&self) -> String {
        format!("{}/entities", self.base_url.trim_end_matches('/'))
    }
}

impl<E> Repository<E> for RemoteRepository<E>
where
    E: Identifiable + Serialize + DeserializeOwned,
{
    fn find(&self, id: &str) -> RepositoryResult<E> {
        let response = self
            .client
            .get(self.url_for(id))
            .send()
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<E>()
                .map_err(|err| RepositoryError::Unavailable(format!("corrupt response: {err}"))),
            StatusCode::NOT_FOUND => Err(RepositoryError::NotFound),
            status => Err(RepositoryError::Unavailable(format!(
                "unexpected status {status}"
            ))),
        }
    }

    fn save(&self, entity: &E) -> RepositoryResult<()> {
        let response = self
            .client
            .post(self.url())
            .json(entity)
            .send()
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::CONFLICT => Err(RepositoryError::Conflict(format!(
                "entity '{}' already exists",
                entity.id()
            ))),
            status => Err(RepositoryError::Unavailable(format!(
                "unexpected status {status}"
            ))),
        }
    }

    fn update(&self, entity: &E) -> RepositoryResult<()> {
        let response = self
            .client
            .put(self.url_for(entity.id()))
            .json(entity)
            .send()
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(RepositoryError::NotFound),
            status => Err(RepositoryError::Unavailable(format!(
                "unexpected status {status}"
            ))),
        }
    }

    fn delete(&self, id: &str) -> RepositoryResult<()> {
        let response = self
            .client
            .delete(self.url_for(id))
            .send()
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(RepositoryError::NotFound),
            status => Err(RepositoryError::Unavailable(format!(
                "unexpected status {status}"
            ))),
        }
    }
}
