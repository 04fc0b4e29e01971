//! Random quotes for the `quote` command, from zenquotes.io.
//!
//! Quotes are random by nature, so there is no cache. Offline, a built-in
//! pool stands in.

use rand::Rng;
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;

use crate::api::DataSource;
use crate::constants::{HTTP_TIMEOUT_SECS, USER_AGENT};

#[derive(Debug, Clone)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

#[derive(Debug, Deserialize)]
struct QuoteDto {
    q: String,
    a: String,
}

const FALLBACK_QUOTES: &[(&str, &str)] = &[
    (
        "Simplicity is prerequisite for reliability.",
        "Edsger W. Dijkstra",
    ),
    ("Talk is cheap. Show me the code.", "Linus Torvalds"),
    (
        "Programs must be written for people to read, and only incidentally for machines to execute.",
        "Harold Abelson",
    ),
    (
        "The best way to predict the future is to invent it.",
        "Alan Kay",
    ),
    ("Make it work, make it right, make it fast.", "Kent Beck"),
    ("Deleted code is debugged code.", "Jeff Sickel"),
];

fn fetch() -> Result<Quote, Box<dyn Error>> {
    let dtos: Vec<QuoteDto> = ureq::get("https://zenquotes.io/api/random")
        .set("User-Agent", USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .call()?
        .into_json()?;
    let dto = dtos.into_iter().next().ok_or("empty quote response")?;
    Ok(Quote {
        text: dto.q,
        author: dto.a,
    })
}

/// Fetch a quote, falling back to the built-in pool.
pub fn load_quote<R: Rng>(rng: &mut R, offline: bool) -> (Quote, DataSource) {
    if !offline {
        if let Ok(quote) = fetch() {
            return (quote, DataSource::Live);
        }
    }
    let (text, author) = FALLBACK_QUOTES[rng.gen_range(0..FALLBACK_QUOTES.len())];
    (
        Quote {
            text: text.to_string(),
            author: author.to_string(),
        },
        DataSource::Sample,
    )
}
