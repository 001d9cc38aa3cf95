use std::marker::PhantomData;

use ureq::Agent;

use super::{Entity, RecordStore, StoreError};

/// JSON-over-HTTP collaborator: one resource collection per entity type,
/// conventional verbs (`GET`/`POST` on the collection, `GET`/`PUT`/`DELETE`
/// on a single record).
pub struct RestStore<T> {
    agent: Agent,
    base_url: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Entity> RestStore<T> {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            agent: Agent::new_with_defaults(),
            base_url,
            _marker: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, T::COLLECTION)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, T::COLLECTION, id)
    }
}

fn transport_error(err: ureq::Error) -> StoreError {
    match err {
        ureq::Error::StatusCode(404) => StoreError::NotFound,
        other => StoreError::Unavailable(other.to_string()),
    }
}

fn decode_error(err: ureq::Error) -> StoreError {
    StoreError::Malformed(err.to_string())
}

impl<T: Entity> RecordStore<T> for RestStore<T> {
    fn list(&self) -> Result<Vec<T>, StoreError> {
        let mut response = self
            .agent
            .get(&self.collection_url())
            .call()
            .map_err(transport_error)?;
        response.body_mut().read_json::<Vec<T>>().map_err(decode_error)
    }

    fn fetch(&self, id: &str) -> Result<Option<T>, StoreError> {
        let result = self.agent.get(&self.record_url(id)).call();
        match result {
            Ok(mut response) => {
                let record = response.body_mut().read_json::<T>().map_err(decode_error)?;
                Ok(Some(record))
            }
            Err(ureq::Error::StatusCode(404)) => Ok(None),
            Err(other) => Err(transport_error(other)),
        }
    }

    fn create(&self, record: T) -> Result<T, StoreError> {
        // The record serializes without an id; the collaborator assigns one
        // and echoes the created record back.
        let mut response = self
            .agent
            .post(&self.collection_url())
            .send_json(&record)
            .map_err(transport_error)?;
        response.body_mut().read_json::<T>().map_err(decode_error)
    }

    fn update(&self, record: &T) -> Result<(), StoreError> {
        self.agent
            .put(&self.record_url(record.id()))
            .send_json(record)
            .map_err(transport_error)?;
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.agent
            .delete(&self.record_url(id))
            .call()
            .map_err(transport_error)?;
        Ok(())
    }
}
