//! One-shot `--print` mode: fetch a page and write it to stdout.

use std::fmt::Write as _;
use std::time::Duration;

use crate::app::StartView;
use crate::config::Settings;
use crate::logic::pagination::page_count;
use crate::sources::TriviaClient;
use crate::state::{Category, QuestionPage, REQUEST_FAILED_MESSAGE, category_label};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Render a fetched page as plain text.
///
/// Inputs:
/// - `page`: Decoded response.
/// - `categories`: Categories used to label each question.
/// - `page_no`: Page number that was requested.
///
/// Output:
/// - A header line followed by one line per question.
#[must_use]
pub fn format_page(page: &QuestionPage, categories: &[Category], page_no: u32) -> String {
    let mut out = format!(
        "Page {page_no}/{} · {} questions\n",
        page_count(page.total_questions).max(1),
        page.total_questions
    );
    for q in &page.questions {
        let _ = writeln!(
            out,
            "[{}] {} ({}, difficulty {})",
            q.id,
            q.question,
            category_label(categories, q.category),
            q.difficulty
        );
    }
    out
}

/// What: Fetch the page described by `start` with `client`.
///
/// Details:
/// - Search wins over category, matching the TUI start view.
/// - Only the plain list endpoint returns categories; otherwise `GET /categories`
///   is tried and a failure there just leaves labels as `Category <id>`.
async fn fetch(client: &TriviaClient, start: &StartView) -> Result<(QuestionPage, Vec<Category>)> {
    let page_no = start.page.max(1);
    let page = if let Some(term) = start.search.as_deref() {
        client.search(term, page_no).await?
    } else if let Some(category) = start.category {
        client.category_questions(category, page_no).await?
    } else {
        client.list_questions(page_no).await?
    };
    let categories = match page.categories.clone() {
        Some(c) => c,
        None => client.categories().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load categories for labels");
            Vec::new()
        }),
    };
    Ok((page, categories))
}

/// What: Run `--print` mode.
///
/// Output:
/// - Process exit code: `0` after printing, `1` when the request failed.
pub async fn handle_print(settings: &Settings, start: &StartView) -> i32 {
    tracing::info!(base_url = %settings.api_base_url, ?start, "print mode requested from CLI");
    let client = match TriviaClient::new(
        &settings.api_base_url,
        Duration::from_secs(settings.request_timeout_secs),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{REQUEST_FAILED_MESSAGE}");
            tracing::error!(error = %e, "failed to build HTTP client");
            return 1;
        }
    };
    match fetch(&client, start).await {
        Ok((page, categories)) => {
            print!("{}", format_page(&page, &categories, start.page.max(1)));
            0
        }
        Err(e) => {
            eprintln!("{REQUEST_FAILED_MESSAGE}");
            tracing::error!(error = %e, "print mode request failed");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Question;

    #[test]
    /// What: The header counts pages; each question line carries its label.
    ///
    /// Inputs:
    /// - 23 questions in total, two on the page, one in an unknown category.
    ///
    /// Output:
    /// - `Page 3/3 · 23 questions` header and the `Category 9` fallback label.
    fn formats_header_and_rows() {
        let page = QuestionPage {
            questions: vec![
                Question {
                    id: 21,
                    question: "What is the heaviest organ in the human body?".into(),
                    answer: "The Liver".into(),
                    category: 1,
                    difficulty: 4,
                },
                Question {
                    id: 22,
                    question: "Who discovered penicillin?".into(),
                    answer: "Alexander Fleming".into(),
                    category: 9,
                    difficulty: 3,
                },
            ],
            total_questions: 23,
            categories: None,
            current_category: None,
        };
        let cats = vec![Category {
            id: 1,
            kind: "Science".into(),
        }];
        let text = format_page(&page, &cats, 3);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Page 3/3 · 23 questions");
        assert_eq!(
            lines[1],
            "[21] What is the heaviest organ in the human body? (Science, difficulty 4)"
        );
        assert_eq!(
            lines[2],
            "[22] Who discovered penicillin? (Category 9, difficulty 3)"
        );
    }

    #[test]
    /// What: An empty result still reports one page.
    fn empty_page_header() {
        let text = format_page(&QuestionPage::default(), &[], 1);
        assert_eq!(text, "Page 1/1 · 0 questions\n");
    }
}
