use plexarr_models::{MediaType, WatchlistEntry};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::ClientError;

/// Parse a Plex `MediaContainer` watchlist document.
///
/// Only direct children of the root count. `Directory` elements (shows) come
/// first, then `Video` elements (movies), each in document order. Anything
/// that is not a single well-formed root element is an error.
pub fn parse_watchlist(xml: &[u8]) -> Result<Vec<WatchlistEntry>, ClientError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut shows = Vec::new();
    let mut movies = Vec::new();
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                visit_element(&e, depth, &mut seen_root, &mut shows, &mut movies)?;
                depth += 1;
            }
            Ok(Event::Empty(e)) => {
                visit_element(&e, depth, &mut seen_root, &mut shows, &mut movies)?;
            }
            Ok(Event::End(_)) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ClientError::Xml("unexpected closing tag".to_string()))?;
            }
            Ok(Event::Text(text)) if depth == 0 => {
                let text = text.unescape().map_err(|e| ClientError::Xml(e.to_string()))?;
                if !text.trim().is_empty() {
                    return Err(ClientError::Xml("text outside of the root element".to_string()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ClientError::Xml(format!(
                    "error at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(ClientError::Xml("document has no root element".to_string()));
    }
    if depth != 0 {
        return Err(ClientError::Xml("document ended inside an element".to_string()));
    }

    shows.extend(movies);
    Ok(shows)
}

fn visit_element(
    element: &BytesStart<'_>,
    depth: usize,
    seen_root: &mut bool,
    shows: &mut Vec<WatchlistEntry>,
    movies: &mut Vec<WatchlistEntry>,
) -> Result<(), ClientError> {
    match depth {
        0 if *seen_root => Err(ClientError::Xml("more than one root element".to_string())),
        0 => {
            *seen_root = true;
            Ok(())
        }
        1 => {
            match element.name().as_ref() {
                b"Directory" => shows.push(entry_from_attributes(element)?),
                b"Video" => movies.push(entry_from_attributes(element)?),
                _ => {}
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn entry_from_attributes(element: &BytesStart<'_>) -> Result<WatchlistEntry, ClientError> {
    let mut title = None;
    let mut year = None;
    let mut guid = None;
    let mut kind = None;

    for attr in element.attributes() {
        let attr = attr.map_err(|e| ClientError::Xml(e.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| ClientError::Xml(e.to_string()))?
            .into_owned();
        match attr.key.as_ref() {
            b"title" => title = Some(value),
            b"year" => year = value.trim().parse::<u32>().ok(),
            b"guid" => guid = Some(value),
            b"type" => kind = Some(value),
            _ => {}
        }
    }

    Ok(WatchlistEntry {
        title: title.unwrap_or_default(),
        year,
        guid: guid.unwrap_or_default(),
        media_type: MediaType::from_plex_type(kind.as_deref().unwrap_or_default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATCHLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<MediaContainer librarySectionID="watchlist" offset="0" totalSize="4" size="4">
  <Video type="movie" title="Dune (2021)" year="2021" guid="plex://movie/5d776b59ad5437001f79c6f8" ratingKey="5d776b59ad5437001f79c6f8">
    <Image alt="Dune" type="coverPoster" url="https://metadata-static.plex.tv/poster.jpg"/>
  </Video>
  <Directory type="show" title="Severance" year="2022" guid="plex://show/5d9c086c46115600200aa2fe"/>
  <Video type="movie" title="Amélie &amp; Friends" guid="plex://movie/5d7768"/>
  <Directory type="show" title="The Office [US]" year="n/a" guid="plex://show/5d9c08"/>
</MediaContainer>"#;

    #[test]
    fn test_shows_come_before_movies_in_document_order() {
        let entries = parse_watchlist(WATCHLIST.as_bytes()).unwrap();
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Severance", "The Office [US]", "Dune (2021)", "Amélie & Friends"]
        );
    }

    #[test]
    fn test_attributes_are_mapped() {
        let entries = parse_watchlist(WATCHLIST.as_bytes()).unwrap();

        let severance = &entries[0];
        assert_eq!(severance.media_type, MediaType::Show);
        assert_eq!(severance.year, Some(2022));
        assert_eq!(severance.guid, "plex://show/5d9c086c46115600200aa2fe");

        let dune = &entries[2];
        assert_eq!(dune.media_type, MediaType::Movie);
        assert_eq!(dune.rating_key(), Some("5d776b59ad5437001f79c6f8"));
    }

    #[test]
    fn test_missing_or_bad_year_is_absent() {
        let entries = parse_watchlist(WATCHLIST.as_bytes()).unwrap();
        assert_eq!(entries[1].year, None);
        assert_eq!(entries[3].year, None);
    }

    #[test]
    fn test_nested_elements_are_ignored() {
        let xml = r#"<MediaContainer><Hub><Video type="movie" title="Nested" guid="x"/></Hub></MediaContainer>"#;
        assert!(parse_watchlist(xml.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let xml = r#"<MediaContainer><Video type="episode" title="Pilot" guid="plex://episode/1"/></MediaContainer>"#;
        let entries = parse_watchlist(xml.as_bytes()).unwrap();
        assert_eq!(entries[0].media_type, MediaType::Other("episode".to_string()));
    }

    #[test]
    fn test_empty_container() {
        let xml = r#"<?xml version="1.0"?><MediaContainer size="0"/>"#;
        assert!(parse_watchlist(xml.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_documents_are_rejected() {
        for xml in [
            "",
            "not xml at all",
            "<MediaContainer><Video title=\"Dune\"></MediaContainer>",
            "<MediaContainer>",
            "<MediaContainer/><MediaContainer/>",
            "{\"MediaContainer\": {}}",
        ] {
            assert!(
                matches!(parse_watchlist(xml.as_bytes()), Err(ClientError::Xml(_))),
                "expected XML error for {:?}",
                xml
            );
        }
    }
}
