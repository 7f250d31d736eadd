//! Response body decoding.
//!
//! The API wraps every record in a member named after its type:
//!
//! ```text
//! {"deputes": [{"depute": {...}}, ...]}    lists
//! {"depute": {...}}                        details
//! ```

use cpc_types::{RemoteError, SearchHit};
use csv_async::AsyncReaderBuilder;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Column delimiter of the CSV search results.
pub const CSV_DELIMITER: u8 = b';';

/// Decodes a wrapped list: `{plural: [{singular: record}, ...]}`.
///
/// # Errors
///
/// Returns [`RemoteError::Json`] if the body is not JSON, lacks the
/// envelope members, or a record does not decode.
pub fn decode_list<T: DeserializeOwned>(
    url: &str,
    body: &[u8],
    plural: &str,
    singular: &str,
) -> Result<Vec<T>, RemoteError> {
    let mut root: Value = serde_json::from_slice(body).map_err(|e| json_error(url, e))?;

    let items = match root.get_mut(plural).map(Value::take) {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(shape_error(url, format!("`{plural}` is not an array"))),
        None => return Err(shape_error(url, format!("missing `{plural}`"))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, mut item)| {
            let record = item
                .get_mut(singular)
                .map(Value::take)
                .ok_or_else(|| shape_error(url, format!("{plural}[{i}] has no `{singular}`")))?;
            serde_json::from_value(record).map_err(|e| json_error(url, e))
        })
        .collect()
}

/// Decodes a wrapped record: `{singular: record}`.
///
/// Returns `Ok(None)` when the body is a JSON object without that member (or
/// with it set to `null`), which is how the API answers lookups that match
/// nothing.
///
/// # Errors
///
/// Returns [`RemoteError::Json`] if the body is not a JSON object or the
/// record does not decode.
pub fn decode_member<T: DeserializeOwned>(
    url: &str,
    body: &[u8],
    singular: &str,
) -> Result<Option<T>, RemoteError> {
    let mut root: Value = serde_json::from_slice(body).map_err(|e| json_error(url, e))?;
    let Some(members) = root.as_object_mut() else {
        return Err(shape_error(url, "expected an object".to_string()));
    };
    match members.get_mut(singular).map(Value::take) {
        None | Some(Value::Null) => Ok(None),
        Some(record) => serde_json::from_value(record)
            .map(Some)
            .map_err(|e| json_error(url, e)),
    }
}

/// Parses the `;`-delimited CSV emitted by the full-text search.
///
/// # Errors
///
/// Returns [`RemoteError::Csv`] on malformed CSV.
pub async fn parse_search_csv(url: &str, body: &[u8]) -> Result<Vec<SearchHit>, RemoteError> {
    let mut reader = AsyncReaderBuilder::new()
        .delimiter(CSV_DELIMITER)
        .flexible(true)
        .create_reader(body);

    let headers = reader
        .headers()
        .await
        .map_err(|e| csv_error(url, &e))?
        .clone();

    let mut hits = Vec::new();
    let mut records = reader.records();
    while let Some(record) = records.next().await {
        let record = record.map_err(|e| csv_error(url, &e))?;
        hits.push(SearchHit::from_pairs(headers.iter().zip(record.iter())));
    }
    Ok(hits)
}

fn json_error(url: &str, e: serde_json::Error) -> RemoteError {
    RemoteError::Json {
        url: url.to_string(),
        message: e.to_string(),
    }
}

fn shape_error(url: &str, message: String) -> RemoteError {
    RemoteError::Json {
        url: url.to_string(),
        message,
    }
}

fn csv_error(url: &str, e: &csv_async::Error) -> RemoteError {
    RemoteError::Csv {
        url: url.to_string(),
        message: e.to_string(),
    }
}
