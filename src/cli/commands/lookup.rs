//! One-off Genius lookups.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::credentials::TokenSource;
use crate::genius::dto::{Artist, Hit};
use crate::genius::{Genius, NOT_AVAILABLE};

/// Look up a single artist and print what the collectors would record
pub fn cmd_artist(
    rt: &Runtime,
    config: &Config,
    term: &str,
    token: &TokenSource,
) -> anyhow::Result<()> {
    let genius = Genius::from_source(token, config.genius.settings())?;

    println!("Looking up {:?}...", term);
    println!();

    match rt.block_on(genius.lookup_artist(term)) {
        Ok(envelope) => match envelope.response.artist {
            Some(artist) => {
                println!("✓ Match found");
                for line in artist_lines(&artist) {
                    println!("  {}", line);
                }
            }
            None => println!("? Artist payload was empty"),
        },
        Err(e) if e.is_no_match() => {
            println!("? No artist found for {:?}", term);
        }
        Err(e) => {
            eprintln!("✗ Lookup failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}

/// Run a raw search and list the hits
pub fn cmd_search(
    rt: &Runtime,
    config: &Config,
    query: &str,
    per_page: u32,
    token: &TokenSource,
) -> anyhow::Result<()> {
    let genius = Genius::from_source(token, config.genius.settings())?;
    let hits = rt.block_on(genius.search(query, per_page));

    if hits.is_empty() {
        println!("No hits for {:?}", query);
        return Ok(());
    }

    println!("{} hit(s) for {:?}:", hits.len(), query);
    for (i, hit) in hits.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, hit_line(hit));
    }
    Ok(())
}

fn artist_lines(artist: &Artist) -> Vec<String> {
    let or_na = |v: Option<String>| v.unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let mut lines = vec![
        format!("Name:      {}", or_na(artist.name.clone())),
        format!("ID:        {}", or_na(artist.id.map(|id| id.to_string()))),
        format!(
            "Followers: {}",
            or_na(artist.followers_count.map(|n| n.to_string()))
        ),
    ];
    if let Some(url) = &artist.url {
        lines.push(format!("URL:       {}", url));
    }
    lines
}

fn hit_line(hit: &Hit) -> String {
    let Some(result) = &hit.result else {
        return format!("({} with no payload)", hit.hit_type.as_deref().unwrap_or("hit"));
    };

    let title = result
        .full_title
        .as_deref()
        .or(result.title.as_deref())
        .unwrap_or("Untitled");

    match &result.primary_artist {
        Some(artist) => format!(
            "{} [primary artist: {} #{}]",
            title,
            artist.name.as_deref().unwrap_or("?"),
            artist
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "?".to_string())
        ),
        None => title.to_string(),
    }
}
