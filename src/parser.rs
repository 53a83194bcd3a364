//! E-utilities XML parsers using quick-xml
//!
//! Streaming parsers for the ESearch identifier list and the EFetch
//! `PubmedArticleSet` document.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::FetchError;

/// Parsed PubMed article, reduced to the fields the report needs
#[derive(Debug, Default)]
pub struct PubmedArticle {
    pub pmid: String,
    pub title: Option<String>,
    /// Raw `<Year>` text from PubDate
    pub pub_year: Option<String>,
    /// Raw `<Month>` text from PubDate (may be "06" or "Jun")
    pub pub_month: Option<String>,
    pub authors: Vec<Author>,
}

#[derive(Debug, Default, Clone)]
pub struct Author {
    pub last_name: Option<String>,
    pub initials: Option<String>,
    pub affiliations: Vec<String>,
}

/// Parse the identifier list from an ESearch response, in document order.
pub fn parse_esearch_ids(xml: &str) -> Result<Vec<String>, FetchError> {
    parse_ids(xml).map_err(|e| FetchError::Parse(e.to_string()))
}

fn parse_ids(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut ids = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"Id" => {
                let id = read_text(&mut reader)?;
                if !id.is_empty() {
                    ids.push(id);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(ids)
}

/// Parse all `PubmedArticle` elements from an EFetch response.
///
/// Articles that fail to parse individually are skipped with a debug log;
/// only a structurally broken document is an error.
pub fn parse_article_set(xml: &str) -> Result<Vec<PubmedArticle>, FetchError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut articles = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"PubmedArticle" => {
                match parse_article(&mut reader) {
                    Ok(article) => articles.push(article),
                    Err(e) => log::debug!("Failed to parse article: {e}"),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FetchError::Parse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(articles)
}

fn parse_article(reader: &mut Reader<&[u8]>) -> Result<PubmedArticle, quick_xml::Error> {
    let mut article = PubmedArticle::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"MedlineCitation" => {
                parse_medline_citation(reader, &mut article)?;
            }
            Event::End(e) if e.name().as_ref() == b"PubmedArticle" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(article)
}

fn parse_medline_citation(
    reader: &mut Reader<&[u8]>,
    article: &mut PubmedArticle,
) -> Result<(), quick_xml::Error> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                // CommentsCorrections also carry PMID elements; first wins
                b"PMID" if article.pmid.is_empty() => article.pmid = read_text(reader)?,
                b"Article" => parse_article_element(reader, article)?,
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"MedlineCitation" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_article_element(
    reader: &mut Reader<&[u8]>,
    article: &mut PubmedArticle,
) -> Result<(), quick_xml::Error> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"ArticleTitle" => {
                    article.title = Some(read_text_content(reader, b"ArticleTitle")?)
                }
                b"Journal" => parse_journal(reader, article)?,
                b"AuthorList" => article.authors = parse_author_list(reader)?,
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"Article" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_journal(
    reader: &mut Reader<&[u8]>,
    article: &mut PubmedArticle,
) -> Result<(), quick_xml::Error> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"PubDate" => {
                parse_pub_date(reader, article)?;
            }
            Event::End(e) if e.name().as_ref() == b"Journal" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_pub_date(
    reader: &mut Reader<&[u8]>,
    article: &mut PubmedArticle,
) -> Result<(), quick_xml::Error> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                // Kept as raw text: the report composes "{year}-{month}"
                // without normalizing textual months
                b"Year" => article.pub_year = Some(read_text(reader)?),
                b"Month" => article.pub_month = Some(read_text(reader)?),
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"PubDate" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_author_list(reader: &mut Reader<&[u8]>) -> Result<Vec<Author>, quick_xml::Error> {
    let mut authors = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"Author" => {
                authors.push(parse_author(reader)?);
            }
            Event::End(e) if e.name().as_ref() == b"AuthorList" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(authors)
}

fn parse_author(reader: &mut Reader<&[u8]>) -> Result<Author, quick_xml::Error> {
    let mut author = Author::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"LastName" => author.last_name = Some(read_text(reader)?),
                b"Initials" => author.initials = Some(read_text(reader)?),
                b"AffiliationInfo" => {
                    if let Some(aff) = parse_affiliation(reader)? {
                        author.affiliations.push(aff);
                    }
                }
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"Author" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(author)
}

fn parse_affiliation(reader: &mut Reader<&[u8]>) -> Result<Option<String>, quick_xml::Error> {
    let mut buf = Vec::new();
    let mut affiliation = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"Affiliation" => {
                let text = read_text(reader)?;
                if !text.is_empty() {
                    affiliation = Some(text);
                }
            }
            Event::End(e) if e.name().as_ref() == b"AffiliationInfo" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(affiliation)
}

/// Read text content until next end tag
fn read_text(reader: &mut Reader<&[u8]>) -> Result<String, quick_xml::Error> {
    let mut buf = Vec::new();
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(e) => text.push_str(&e.unescape().map_err(quick_xml::Error::from)?),
            Event::End(_) => break,
            Event::Start(_) => {
                // Handle nested elements (like <i>, <b>, etc.)
                text.push_str(&read_text(reader)?);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Read text content of a specific element, handling nested tags
fn read_text_content(
    reader: &mut Reader<&[u8]>,
    end_tag: &[u8],
) -> Result<String, quick_xml::Error> {
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(e) => text.push_str(&e.unescape().map_err(quick_xml::Error::from)?),
            Event::Start(_) => depth += 1,
            Event::End(e) => {
                depth -= 1;
                if depth == 0 && e.name().as_ref() == end_tag {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}
