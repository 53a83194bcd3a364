//! Per-article extraction and filtering.
//!
//! Turns one parsed article into a report row, or nothing when no author
//! classifies as non-academic.

use crate::classify::is_non_academic;
use crate::parser::PubmedArticle;

/// One row of the output report.
///
/// Exists only for articles with at least one non-academic author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub pmid: String,
    pub title: String,
    /// `"{year}-{month}"` with either part possibly empty ("2021-", "-Jan")
    pub publication_date: String,
    /// Display names of non-academic authors, in author order
    pub authors: Vec<String>,
    /// Distinct company affiliations, first occurrence first
    pub affiliations: Vec<String>,
    /// Best-effort corresponding email, empty when none found
    pub email: String,
}

/// Extract a report row from an article, or `None` when every author is
/// academic or unaffiliated.
///
/// Missing pmid/title/date parts become empty strings; partial data never
/// fails extraction. The email is mined from the affiliation text itself
/// (EFetch has no dedicated email field): the last `@`-bearing token seen
/// across non-academic affiliations wins. A crude heuristic, kept as-is.
pub fn extract(article: &PubmedArticle) -> Option<ReportRow> {
    let mut authors = Vec::new();
    let mut affiliations: Vec<String> = Vec::new();
    let mut email = String::new();

    for author in &article.authors {
        let Some(affiliation) = author.affiliations.first() else {
            continue;
        };
        if !is_non_academic(affiliation) {
            continue;
        }

        authors.push(display_name(author));
        if !affiliations.contains(affiliation) {
            affiliations.push(affiliation.clone());
        }
        if let Some(found) = find_email(affiliation) {
            email = found;
        }
    }

    if authors.is_empty() {
        return None;
    }

    Some(ReportRow {
        pmid: article.pmid.clone(),
        title: article.title.clone().unwrap_or_default(),
        publication_date: format!(
            "{}-{}",
            article.pub_year.as_deref().unwrap_or(""),
            article.pub_month.as_deref().unwrap_or("")
        ),
        authors,
        affiliations,
        email,
    })
}

/// `"{initials} {last_name}"`, collapsing gracefully when parts are missing
fn display_name(author: &crate::parser::Author) -> String {
    format!(
        "{} {}",
        author.initials.as_deref().unwrap_or(""),
        author.last_name.as_deref().unwrap_or("")
    )
    .trim()
    .to_string()
}

/// First `@`-bearing token in the text, trimmed of surrounding punctuation
fn find_email(text: &str) -> Option<String> {
    text.split_whitespace()
        .find(|token| token.contains('@'))
        .map(|token| {
            token
                .trim_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '(' | ')' | '<' | '>'))
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Author;

    fn author(last: &str, initials: &str, affiliation: Option<&str>) -> Author {
        Author {
            last_name: Some(last.to_string()),
            initials: Some(initials.to_string()),
            affiliations: affiliation.map(|a| vec![a.to_string()]).unwrap_or_default(),
        }
    }

    #[test]
    fn mixed_affiliations() {
        let article = PubmedArticle {
            pmid: "123".to_string(),
            title: Some("A study".to_string()),
            pub_year: Some("2023".to_string()),
            pub_month: Some("Mar".to_string()),
            authors: vec![
                author(
                    "Doe",
                    "J",
                    Some("Acme Biotech Inc, contact: jdoe@acme.com"),
                ),
                author("Roe", "R", Some("University of Example")),
            ],
        };

        let row = extract(&article).expect("one non-academic author");
        assert_eq!(row.pmid, "123");
        assert_eq!(row.publication_date, "2023-Mar");
        assert_eq!(row.authors, vec!["J Doe"]);
        assert_eq!(
            row.affiliations,
            vec!["Acme Biotech Inc, contact: jdoe@acme.com"]
        );
        assert_eq!(row.email, "jdoe@acme.com");
    }

    #[test]
    fn all_academic_is_excluded() {
        let article = PubmedArticle {
            pmid: "1".to_string(),
            authors: vec![
                author("A", "A", Some("University of Example")),
                author("B", "B", None),
            ],
            ..Default::default()
        };

        assert!(extract(&article).is_none());
    }

    #[test]
    fn no_authors_is_excluded() {
        let article = PubmedArticle {
            pmid: "2".to_string(),
            ..Default::default()
        };
        assert!(extract(&article).is_none());
    }

    #[test]
    fn author_count_matches_non_academic_affiliated() {
        let article = PubmedArticle {
            pmid: "3".to_string(),
            authors: vec![
                author("One", "A", Some("Acme Inc")),
                author("Two", "B", Some("Beta Corp")),
                author("Three", "C", Some("University of Example")),
                author("Four", "D", None),
            ],
            ..Default::default()
        };

        let row = extract(&article).unwrap();
        assert_eq!(row.authors, vec!["A One", "B Two"]);
    }

    #[test]
    fn duplicate_affiliations_deduped() {
        let article = PubmedArticle {
            pmid: "4".to_string(),
            authors: vec![
                author("One", "A", Some("Acme Inc")),
                author("Two", "B", Some("Acme Inc")),
            ],
            ..Default::default()
        };

        let row = extract(&article).unwrap();
        assert_eq!(row.authors.len(), 2);
        assert_eq!(row.affiliations, vec!["Acme Inc"]);
    }

    #[test]
    fn last_email_wins() {
        let article = PubmedArticle {
            pmid: "5".to_string(),
            authors: vec![
                author("One", "A", Some("Acme Inc first@acme.com")),
                author("Two", "B", Some("Beta Corp second@beta.com")),
            ],
            ..Default::default()
        };

        let row = extract(&article).unwrap();
        assert_eq!(row.email, "second@beta.com");
    }

    #[test]
    fn missing_date_parts() {
        let year_only = PubmedArticle {
            pmid: "6".to_string(),
            pub_year: Some("2021".to_string()),
            authors: vec![author("One", "A", Some("Acme Inc"))],
            ..Default::default()
        };
        assert_eq!(extract(&year_only).unwrap().publication_date, "2021-");

        let month_only = PubmedArticle {
            pmid: "7".to_string(),
            pub_month: Some("Jan".to_string()),
            authors: vec![author("One", "A", Some("Acme Inc"))],
            ..Default::default()
        };
        assert_eq!(extract(&month_only).unwrap().publication_date, "-Jan");
    }

    #[test]
    fn missing_title_becomes_empty() {
        let article = PubmedArticle {
            pmid: "8".to_string(),
            authors: vec![author("One", "A", Some("Acme Inc"))],
            ..Default::default()
        };
        assert_eq!(extract(&article).unwrap().title, "");
    }

    #[test]
    fn name_parts_collapse() {
        let article = PubmedArticle {
            pmid: "9".to_string(),
            authors: vec![Author {
                last_name: Some("Stone".to_string()),
                initials: None,
                affiliations: vec!["Acme Inc".to_string()],
            }],
            ..Default::default()
        };
        assert_eq!(extract(&article).unwrap().authors, vec!["Stone"]);
    }

    #[test]
    fn email_token_trimmed_of_punctuation() {
        assert_eq!(
            find_email("Acme Inc (jdoe@acme.com)."),
            Some("jdoe@acme.com".to_string())
        );
        assert_eq!(find_email("Acme Inc"), None);
    }
}
