use crate::error::AcquireError;
use crate::normalize;
use kdvs_model::ScheduleAnchor;
use regex::{Regex, RegexBuilder};
use scraper::{Html, Selector};
use url::Url;

/// Fetch the schedule page as text.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, AcquireError> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(AcquireError::http(url))?;

    response.text().await.map_err(AcquireError::http(url))
}

/// Compile a show name into the pattern used to match link text.
///
/// The name is a regex, matched case-insensitively and only at the start of
/// the text: "apartment 5" matches "Apartment 5 Show" but not "The Apartment 5".
/// The name is checked on its own first so a syntax error points at what the
/// user typed.
pub fn show_pattern(show: &str) -> Result<Regex, AcquireError> {
    let invalid = |source| AcquireError::InvalidPattern {
        pattern: show.to_string(),
        source,
    };
    Regex::new(show).map_err(invalid)?;

    RegexBuilder::new(&format!("^(?:{show})"))
        .case_insensitive(true)
        .build()
        .map_err(invalid)
}

/// Every `<a href>` on the page with non-empty text, in document order.
pub fn parse_anchors(html: &str) -> Vec<ScheduleAnchor> {
    let document = Html::parse_document(html);
    let a_sel = Selector::parse("a[href]").expect("valid selector");

    document
        .select(&a_sel)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let text = normalize::normalize_anchor_text(&a.text().collect::<String>());
            if text.is_empty() {
                return None;
            }
            Some(ScheduleAnchor::new(text, href))
        })
        .collect()
}

/// First anchor whose text matches `pattern`. Earlier anchors win.
pub fn first_match<'a>(anchors: &'a [ScheduleAnchor], pattern: &Regex) -> Option<&'a ScheduleAnchor> {
    anchors.iter().find(|a| pattern.is_match(&a.text))
}

/// Find the first anchor on `html` whose text matches `show`.
///
/// This is the only part of the tool that knows anything about the page
/// layout; everything downstream works from the returned anchor.
pub fn find_show_link(html: &str, show: &str) -> Result<Option<ScheduleAnchor>, AcquireError> {
    let pattern = show_pattern(show)?;
    let anchors = parse_anchors(html);
    tracing::debug!(anchors = anchors.len(), "Parsed schedule links");
    Ok(first_match(&anchors, &pattern).cloned())
}

/// Extract the show id from a show link: the last non-empty path segment.
///
/// `href` may be relative; it is resolved against `page_url` first so the
/// query string and fragment never leak into the id.
pub fn show_id(page_url: &str, href: &str) -> Result<String, AcquireError> {
    let base = Url::parse(page_url).map_err(|source| AcquireError::InvalidUrl {
        url: page_url.to_string(),
        source,
    })?;
    let link = base.join(href).map_err(|source| AcquireError::InvalidUrl {
        url: href.to_string(),
        source,
    })?;

    link.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .ok_or_else(|| AcquireError::MissingShowId(href.to_string()))
}
