//! Terminal output for the one-shot `latest` and `search` commands

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use newsfeed_core::Story;

/// Format stories as a table or pretty JSON
///
/// `first_rank` is the 1-based position of the first story in the full feed.
pub fn format_story_table(stories: &[Story], first_rank: usize, json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(stories).unwrap_or_else(|_| "[]".to_string());
    }

    if stories.is_empty() {
        return "No stories found.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers = ["#", "Title", "Site", "By", "Score", "Posted"];
    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }

    for (i, story) in stories.iter().enumerate() {
        let rank = (first_rank + i).to_string();
        let title = truncate(&story.title, 60);
        let site = story
            .url
            .as_deref()
            .map(site_of)
            .unwrap_or_else(|| "-".to_string());
        let by = story.by.clone().unwrap_or_else(|| "-".to_string());
        let score = story
            .score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let posted = story
            .time
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string());

        table.add_row(Row::from(vec![rank, title, site, by, score, posted]));
    }

    table.to_string()
}

// ============================================================================
// Utilities
// ============================================================================

fn truncate(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        // Char-based so multi-byte titles never split mid-codepoint
        s.chars().take(max - 1).collect::<String>() + "…"
    }
}

/// Host part of a URL without `www.`, or the input when it has no scheme
fn site_of(url: &str) -> String {
    let Some((_, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    host.trim_start_matches("www.").to_string()
}
