//! Time-layout extraction.
//!
//! A `time-layout` block names an ordered grid of valid times:
//!
//! ```xml
//! <time-layout time-coordinate="local" summarization="none">
//!   <layout-key>k-p24h-n2-1</layout-key>
//!   <start-valid-time>2008-06-02T08:00:00-05:00</start-valid-time>
//!   <end-valid-time>2008-06-02T20:00:00-05:00</end-valid-time>
//!   ...
//! </time-layout>
//! ```
//!
//! Layout keys encode the period and count (`p24h`, `n2`) but only the
//! explicit times are trusted.

use std::collections::HashMap;

use ndfd_common::{parse_dwml_time, Interval, NdfdError, NdfdResult};
use tracing::debug;

use crate::document::{Document, Node};

/// Layout key → intervals in document order.
pub type TimeLayouts = HashMap<String, Vec<Interval>>;

const START_TAG: &str = "start-valid-time";
const END_TAG: &str = "end-valid-time";

/// Read every `time-layout` block in the document.
///
/// # Errors
/// `MissingElement` when a block has no `layout-key`; `InvalidTime` when a
/// timestamp does not parse.
pub fn extract_time_layouts(doc: &Document) -> NdfdResult<TimeLayouts> {
    let mut layouts = HashMap::new();

    for block in doc.find_all("time-layout") {
        let key = block.required_child("layout-key")?.text();
        if key.is_empty() {
            return Err(NdfdError::missing_element("layout-key", "time-layout"));
        }
        let intervals = read_intervals(block)?;
        debug!(layout = key, intervals = intervals.len(), "Extracted time layout");
        layouts.insert(key.to_string(), intervals);
    }

    Ok(layouts)
}

/// Intervals of one block.
///
/// When the block has any `end-valid-time`, each start is paired with the
/// element directly after it if that element is an end time. A start with no
/// end of its own stays instantaneous.
fn read_intervals(block: Node<'_>) -> NdfdResult<Vec<Interval>> {
    let has_ends = block.child(END_TAG).is_some();

    block
        .children()
        .filter(|c| c.tag() == START_TAG)
        .map(|start_node| {
            let start = parse_dwml_time(start_node.text())?;
            let end = match start_node.next_sibling() {
                Some(next) if has_ends && next.tag() == END_TAG => {
                    Some(parse_dwml_time(next.text())?)
                }
                _ => None,
            };
            Ok(Interval { start, end })
        })
        .collect()
}

/// Intervals for `key` or a `TimeLayoutNotFound` lookup error.
pub fn layout<'a>(layouts: &'a TimeLayouts, key: &str) -> NdfdResult<&'a [Interval]> {
    layouts
        .get(key)
        .map(Vec::as_slice)
        .ok_or_else(|| NdfdError::TimeLayoutNotFound(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndfd_common::ErrorKind;

    fn layouts(xml: &str) -> NdfdResult<TimeLayouts> {
        extract_time_layouts(&Document::parse(xml).unwrap())
    }

    #[test]
    fn test_instantaneous_layout() {
        let l = layouts(
            r#"<dwml><time-layout><layout-key>k-p3h-n2-1</layout-key>
                <start-valid-time>2008-06-02T11:00:00-05:00</start-valid-time>
                <start-valid-time>2008-06-02T14:00:00-05:00</start-valid-time>
            </time-layout></dwml>"#,
        )
        .unwrap();
        let iv = &l["k-p3h-n2-1"];
        assert_eq!(iv.len(), 2);
        assert!(iv.iter().all(|i| i.end.is_none()));
        assert!(iv[0].start < iv[1].start);
    }

    #[test]
    fn test_ranged_layout() {
        let l = layouts(
            r#"<dwml><time-layout><layout-key>k-p24h-n2-1</layout-key>
                <start-valid-time>2008-06-02T08:00:00-05:00</start-valid-time>
                <end-valid-time>2008-06-02T20:00:00-05:00</end-valid-time>
                <start-valid-time>2008-06-03T08:00:00-05:00</start-valid-time>
                <end-valid-time>2008-06-03T20:00:00-05:00</end-valid-time>
            </time-layout></dwml>"#,
        )
        .unwrap();
        let iv = &l["k-p24h-n2-1"];
        assert_eq!(iv.len(), 2);
        assert!(iv.iter().all(Interval::is_ranged));
        assert_eq!(
            iv[1].end.unwrap(),
            parse_dwml_time("2008-06-03T20:00:00-05:00").unwrap()
        );
    }

    #[test]
    fn test_partial_ends_keep_none() {
        let l = layouts(
            r#"<dwml><time-layout><layout-key>k</layout-key>
                <start-valid-time>2008-06-02T08:00:00-05:00</start-valid-time>
                <end-valid-time>2008-06-02T20:00:00-05:00</end-valid-time>
                <start-valid-time>2008-06-03T08:00:00-05:00</start-valid-time>
            </time-layout></dwml>"#,
        )
        .unwrap();
        let iv = &l["k"];
        assert!(iv[0].end.is_some());
        assert!(iv[1].end.is_none());
    }

    #[test]
    fn test_document_order_preserved() {
        let l = layouts(
            r#"<dwml><time-layout><layout-key>k</layout-key>
                <start-valid-time>2008-06-03T08:00:00-05:00</start-valid-time>
                <start-valid-time>2008-06-02T08:00:00-05:00</start-valid-time>
            </time-layout></dwml>"#,
        )
        .unwrap();
        let iv = &l["k"];
        assert!(iv[0].start > iv[1].start);
    }

    #[test]
    fn test_missing_layout_key() {
        let err = layouts("<dwml><time-layout/></dwml>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn test_bad_timestamp() {
        let err = layouts(
            "<dwml><time-layout><layout-key>k</layout-key><start-valid-time>soon</start-valid-time></time-layout></dwml>",
        )
        .unwrap_err();
        assert!(matches!(err, NdfdError::InvalidTime(_)));
    }

    #[test]
    fn test_layout_lookup() {
        let l = TimeLayouts::new();
        assert!(matches!(
            layout(&l, "k-p12h-n14-2").unwrap_err(),
            NdfdError::TimeLayoutNotFound(_)
        ));
    }
}
