//! Decoding of response bodies into bound resources.
//!
//! Every resource carries a skipped `client` field. After a body is decoded
//! the client (and any parent ID) is stamped onto the value and its nested
//! resources, so the caller can keep issuing requests from what it got back.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::TrelloClient;
use crate::error::{Error, Result};

/// Stamps a client handle onto a decoded resource and its nested resources.
pub(crate) trait Bind {
    fn bind(&mut self, client: &TrelloClient);
}

impl<T: Bind> Bind for Vec<T> {
    fn bind(&mut self, client: &TrelloClient) {
        for item in self.iter_mut() {
            item.bind(client);
        }
    }
}

/// Decodes a JSON body without binding (ID lists, untyped payloads).
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Decodes a JSON body and binds the result to `client`.
pub(crate) fn decode_bound<T>(body: &[u8], client: &TrelloClient) -> Result<T>
where
    T: DeserializeOwned + Bind,
{
    let mut value: T = decode(body)?;
    value.bind(client);
    Ok(value)
}

/// Overlays a response body onto `current` and binds the result.
///
/// Only the keys present in the body replace existing values, recursing into
/// nested objects, so a trimmed response leaves the other fields intact.
/// Skipped fields (parent IDs) are not carried over; callers restore them.
pub(crate) fn merge_bound<T>(current: &T, body: &[u8], client: &TrelloClient) -> Result<T>
where
    T: Serialize + DeserializeOwned + Bind,
{
    let mut merged = serde_json::to_value(current)?;
    merge_json(&mut merged, decode(body)?);
    let mut value: T = serde_json::from_value(merged)?;
    value.bind(client);
    Ok(value)
}

fn merge_json(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(fields), Value::Object(patch)) => {
            for (key, value) in patch {
                match fields.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        fields.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}

/// Returns the client a resource is bound to.
pub(crate) fn bound<'a>(
    client: &'a Option<TrelloClient>,
    resource: &'static str,
) -> Result<&'a TrelloClient> {
    client.as_ref().ok_or(Error::Unbound { resource })
}

impl TrelloClient {
    pub(crate) async fn get_resource<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Bind,
    {
        let body = self.get(path).await?;
        decode_bound(&body, self)
    }

    pub(crate) async fn post_resource<T, F>(&self, path: &str, form: &F) -> Result<T>
    where
        T: DeserializeOwned + Bind,
        F: Serialize + ?Sized,
    {
        let body = self.post(path, form).await?;
        decode_bound(&body, self)
    }

    pub(crate) async fn put_resource<T, F>(&self, path: &str, form: &F) -> Result<T>
    where
        T: DeserializeOwned + Bind,
        F: Serialize + ?Sized,
    {
        let body = self.put(path, form).await?;
        decode_bound(&body, self)
    }

    pub(crate) async fn delete_resource<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Bind,
    {
        let body = self.delete(path).await?;
        decode_bound(&body, self)
    }

    pub(crate) async fn get_resource_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned + Bind,
        Q: Serialize + ?Sized,
    {
        let body = self.get_with_query(path, query).await?;
        decode_bound(&body, self)
    }

    /// PUTs `form` and overlays the response onto `current`.
    pub(crate) async fn put_merged<T, F>(&self, current: &T, path: &str, form: &F) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Bind,
        F: Serialize + ?Sized,
    {
        let body = self.put(path, form).await?;
        merge_bound(current, &body, self)
    }

    /// DELETEs `path` and overlays the response onto `current`.
    pub(crate) async fn delete_merged<T>(&self, current: &T, path: &str) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Bind,
    {
        let body = self.delete(path).await?;
        merge_bound(current, &body, self)
    }
}
