//! Blog entries loaded from the spreadsheet-values read API.
//!
//! One GET per mount, no polling and no retry. The endpoint returns a grid of
//! string cells under a `values` key; title comes from the first column, the
//! article link from the second.

use gloo_console::{error, warn};
use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::Config;

#[derive(Deserialize)]
struct ValueRange {
    values: Option<Vec<Vec<String>>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlogPost {
    pub title: String,
    /// `None` when the source row had no second column. Such rows are kept
    /// but flagged in the diagnostic log instead of being silently accepted.
    pub link: Option<String>,
}

impl BlogPost {
    /// Address of the article rendered inside the expanded panel.
    pub fn embed_url(&self) -> Option<String> {
        self.link.as_ref().map(|link| format!("{}?embedded=true", link))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Posts(Vec<BlogPost>),
    /// The read succeeded but the dataset was empty or missing. Shown as a
    /// neutral notice, not a failure.
    Empty,
    Failed,
}

pub fn values_url(config: &Config) -> String {
    format!(
        "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}?key={}",
        config.sheet_id,
        urlencoding::encode(config.sheet_range),
        config.sheets_api_key,
    )
}

/// Row *n* becomes post *n*; order preserved, duplicates permitted.
pub fn posts_from_rows(rows: Vec<Vec<String>>) -> Vec<BlogPost> {
    rows.into_iter()
        .map(|row| {
            let mut cells = row.into_iter();
            BlogPost {
                title: cells.next().unwrap_or_default(),
                link: cells.next(),
            }
        })
        .collect()
}

/// A present, non-empty grid yields posts; a missing or empty `values` key is
/// the empty dataset, not an error.
fn outcome_from_grid(grid: ValueRange) -> FetchOutcome {
    match grid.values {
        Some(rows) if !rows.is_empty() => FetchOutcome::Posts(posts_from_rows(rows)),
        _ => FetchOutcome::Empty,
    }
}

pub async fn fetch_posts(config: &Config) -> FetchOutcome {
    let response = match Request::get(&values_url(config)).send().await {
        Ok(response) => response,
        Err(err) => {
            error!(format!("blog fetch failed: {err}"));
            return FetchOutcome::Failed;
        }
    };

    if !response.ok() {
        error!(format!("blog fetch returned status {}", response.status()));
        return FetchOutcome::Failed;
    }

    let grid = match response.json::<ValueRange>().await {
        Ok(grid) => grid,
        Err(err) => {
            error!(format!("blog response was malformed: {err}"));
            return FetchOutcome::Failed;
        }
    };

    let outcome = outcome_from_grid(grid);
    if let FetchOutcome::Posts(posts) = &outcome {
        let missing = posts.iter().filter(|post| post.link.is_none()).count();
        if missing > 0 {
            warn!(format!("{missing} blog row(s) have no link column"));
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RequiredFields;

    fn config() -> Config {
        Config {
            sheet_id: "sheet-123",
            sheet_range: "Blogs!A2:B",
            sheets_api_key: "api-key",
            webhook_url: "https://script.example/exec",
            email: None,
            required: RequiredFields {
                email: true,
                phone: true,
            },
        }
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn values_url_encodes_the_range() {
        assert_eq!(
            values_url(&config()),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-123/values/Blogs%21A2%3AB?key=api-key"
        );
    }

    #[test]
    fn rows_map_to_posts_in_source_order() {
        let posts = posts_from_rows(vec![
            row(&["First", "https://a.example/1"]),
            row(&["Second", "https://a.example/2", "extra column ignored"]),
            row(&["First", "https://a.example/1"]),
        ]);
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].title, "First");
        assert_eq!(posts[0].link.as_deref(), Some("https://a.example/1"));
        assert_eq!(posts[1].title, "Second");
        // duplicates are allowed
        assert_eq!(posts[0], posts[2]);
    }

    #[test]
    fn short_rows_keep_the_title_but_lose_the_link() {
        let posts = posts_from_rows(vec![row(&["Lonely title"]), row(&[])]);
        assert_eq!(posts[0].title, "Lonely title");
        assert_eq!(posts[0].link, None);
        assert_eq!(posts[1].title, "");
        assert_eq!(posts[1].link, None);
    }

    #[test]
    fn embed_url_appends_the_embedded_flag() {
        let post = BlogPost {
            title: "First".into(),
            link: Some("https://a.example/1".into()),
        };
        assert_eq!(post.embed_url().as_deref(), Some("https://a.example/1?embedded=true"));

        let unlinked = BlogPost {
            title: "First".into(),
            link: None,
        };
        assert_eq!(unlinked.embed_url(), None);
    }

    #[test]
    fn missing_values_key_yields_the_empty_outcome() {
        let grid: ValueRange = serde_json::from_str(r#"{"range":"Blogs!A2:B"}"#).unwrap();
        assert_eq!(outcome_from_grid(grid), FetchOutcome::Empty);
    }

    #[test]
    fn empty_grid_yields_the_empty_outcome() {
        let grid = ValueRange { values: Some(vec![]) };
        assert_eq!(outcome_from_grid(grid), FetchOutcome::Empty);
    }

    #[test]
    fn populated_grid_yields_posts() {
        let grid = ValueRange {
            values: Some(vec![row(&["First", "https://a.example/1"]), row(&["Lonely title"])]),
        };
        match outcome_from_grid(grid) {
            FetchOutcome::Posts(posts) => {
                assert_eq!(posts.len(), 2);
                assert_eq!(posts[0].title, "First");
                assert_eq!(posts[1].link, None);
            }
            other => panic!("expected posts, got {other:?}"),
        }
    }
}
