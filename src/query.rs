// Query builder: turns the user's answers into a `/books` query string.

use crate::error::QueryError;

/// Filters understood by the `/books` endpoint. An empty query lists the
/// first page of the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookQuery {
    pub search: Option<String>,
    pub author_year_start: Option<i32>,
    pub author_year_end: Option<i32>,
    pub languages: Option<String>,
}

impl BookQuery {
    pub fn all() -> Self {
        Self::default()
    }

    /// Title (or part of one). Blank input is rejected.
    pub fn by_title(title: &str) -> Result<Self, QueryError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(QueryError::EmptyTitle);
        }
        Ok(Self {
            search: Some(title.to_string()),
            ..Self::default()
        })
    }

    /// Authors alive at some point during `year`.
    pub fn alive_in(year: i32) -> Self {
        Self {
            author_year_start: Some(year),
            author_year_end: Some(year),
            ..Self::default()
        }
    }

    /// Language code such as `en` or `fr`, trimmed. Blank input is rejected.
    pub fn by_language(code: &str) -> Result<Self, QueryError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(QueryError::EmptyLanguage);
        }
        Ok(Self {
            languages: Some(code.to_string()),
            ..Self::default()
        })
    }

    /// Full request URL against `base_url`, values percent-encoded.
    pub fn to_url(&self, base_url: &str) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(start) = self.author_year_start {
            params.push(("author_year_start", start.to_string()));
        }
        if let Some(end) = self.author_year_end {
            params.push(("author_year_end", end.to_string()));
        }
        if let Some(languages) = &self.languages {
            params.push(("languages", languages.clone()));
        }

        if params.is_empty() {
            return base_url.to_string();
        }
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", base_url, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://gutendex.com/books";

    #[test]
    fn listing_uses_base_url_only() {
        assert_eq!(BookQuery::all().to_url(BASE), BASE);
    }

    #[test]
    fn title_spaces_are_encoded() {
        let q = BookQuery::by_title("pride and prejudice").unwrap();
        assert_eq!(
            q.to_url(BASE),
            "https://gutendex.com/books?search=pride%20and%20prejudice"
        );
    }

    #[test]
    fn title_reserved_characters_are_encoded() {
        let q = BookQuery::by_title("war&peace").unwrap();
        assert_eq!(q.to_url(BASE), "https://gutendex.com/books?search=war%26peace");
    }

    #[test]
    fn blank_title_is_rejected() {
        assert_eq!(BookQuery::by_title(""), Err(QueryError::EmptyTitle));
        assert_eq!(BookQuery::by_title("   \t"), Err(QueryError::EmptyTitle));
    }

    #[test]
    fn year_sets_both_bounds() {
        assert_eq!(
            BookQuery::alive_in(1850).to_url(BASE),
            "https://gutendex.com/books?author_year_start=1850&author_year_end=1850"
        );
        assert_eq!(
            BookQuery::alive_in(-300).to_url(BASE),
            "https://gutendex.com/books?author_year_start=-300&author_year_end=-300"
        );
    }

    #[test]
    fn language_is_trimmed() {
        let q = BookQuery::by_language("  fr \n").unwrap();
        assert_eq!(q.to_url(BASE), "https://gutendex.com/books?languages=fr");
    }

    #[test]
    fn blank_language_is_rejected() {
        assert_eq!(BookQuery::by_language("  "), Err(QueryError::EmptyLanguage));
    }
}
