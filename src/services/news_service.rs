use std::sync::PoisonError;

use chrono::Local;

use crate::errors::NewsError;
use crate::state::news::{News, NewNews, NewsStore, NewsView, TIME_FORMAT};

// Entries are never modified once pushed, so a poisoned lock still guards a
// consistent list and the guard is recovered instead of propagating the panic.

/// Render a stored entry in its external shape.
pub fn format_view(news: &News) -> NewsView {
    NewsView {
        id: news.id.clone(),
        headline: news.headline.clone(),
        author: news.author.clone(),
        description: news.description.clone(),
        time: news.created_at.format(TIME_FORMAT).to_string(),
    }
}

/// All entries in insertion order.
pub fn list(store: &NewsStore) -> Vec<NewsView> {
    let news = store.read().unwrap_or_else(PoisonError::into_inner);
    tracing::debug!("Listing {} news entries", news.len());
    news.iter().map(format_view).collect()
}

/// First entry whose id equals `id` exactly.
pub fn get(store: &NewsStore, id: &str) -> Result<NewsView, NewsError> {
    let news = store.read().unwrap_or_else(PoisonError::into_inner);

    match news.iter().find(|n| n.id == id) {
        Some(found) => Ok(format_view(found)),
        None => {
            tracing::debug!("News {id:?} not found");
            Err(NewsError::NotFound)
        }
    }
}

/// Stamp `candidate` with the current time and push it to the end of the list.
///
/// Ids are not checked for uniqueness; a duplicate stays behind the earlier
/// entry and is never returned by [`get`].
pub fn append(store: &NewsStore, candidate: NewNews) -> NewsView {
    let view = {
        let mut news = store.write().unwrap_or_else(PoisonError::into_inner);
        let entry = candidate.stamp(Local::now());
        let view = format_view(&entry);
        news.push(entry);
        view
    };

    tracing::debug!("Appended news {:?} at {}", view.id, view.time);
    view
}

/// Number of stored entries.
pub fn count(store: &NewsStore) -> usize {
    store.read().unwrap_or_else(PoisonError::into_inner).len()
}
