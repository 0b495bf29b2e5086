//! Query-parameter rewriting for click-to-navigate.

use chrono::NaiveDate;

use crate::error::{GraphError, GraphResult};

/// Returns `url` with its `from` and `to` query parameters both set to
/// `date`, preserving every other parameter, parameter order, and any
/// fragment.
///
/// Parameters already named `from` or `to` are overwritten in place;
/// otherwise both are appended.
pub fn with_range_params(url: &str, date: NaiveDate) -> GraphResult<String> {
    if url.trim().is_empty() {
        return Err(GraphError::InvalidUrl("current url is empty".to_owned()));
    }

    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    };
    let (base, query) = match rest.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (rest, None),
    };
    if base.is_empty() {
        return Err(GraphError::InvalidUrl(format!(
            "url {url:?} has a query but no base"
        )));
    }

    let date = date.format("%Y-%m-%d").to_string();
    let mut params: Vec<(String, Option<String>)> = Vec::new();
    if let Some(query) = query {
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            match pair.split_once('=') {
                Some((name, value)) => params.push((name.to_owned(), Some(value.to_owned()))),
                None => params.push((pair.to_owned(), None)),
            }
        }
    }
    for name in ["from", "to"] {
        match params.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = Some(date.clone()),
            None => params.push((name.to_owned(), Some(date.clone()))),
        }
    }

    let query = params
        .iter()
        .map(|(name, value)| match value {
            Some(value) => format!("{name}={value}"),
            None => name.clone(),
        })
        .collect::<Vec<_>>()
        .join("&");

    let mut rewritten = format!("{base}?{query}");
    if let Some(fragment) = fragment {
        rewritten.push('#');
        rewritten.push_str(fragment);
    }
    Ok(rewritten)
}
