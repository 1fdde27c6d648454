//! User-selectable column sorting.
//!
//! Generic field-path comparator used when the user picks an explicit sort
//! instead of the default best-match ranking. Paths resolve against the
//! release's structured fields first, then dot-traverse into `extra`.

use std::cmp::Ordering;

use serde_json::Value;

use crate::formats::release_formats;
use crate::types::{Release, SortDirection};

/// Render flavor of a column, used to infer its default sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Size,
    Number,
    Peers,
    Text,
    Badge,
    Date,
}

/// Default direction for a column: numeric-flavored columns default to
/// descending (bigger size / more peers is the interesting end), everything
/// else to ascending.
pub fn default_direction(kind: ColumnKind) -> SortDirection {
    match kind {
        ColumnKind::Size | ColumnKind::Number | ColumnKind::Peers => SortDirection::Descending,
        ColumnKind::Text | ColumnKind::Badge | ColumnKind::Date => SortDirection::Ascending,
    }
}

#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(FieldValue::Number),
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            Value::Bool(b) => Some(FieldValue::Text(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

fn resolve_extra<'a>(mut value: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    for segment in segments {
        value = value.get(segment)?;
    }
    Some(value)
}

/// Resolves a dot-separated field path against a release.
fn resolve_path(release: &Release, path: &str) -> Option<FieldValue> {
    let mut segments = path.split('.');
    let head = segments.next()?;
    let rest: Vec<&str> = segments.collect();

    let structured = match head {
        "title" => Some(FieldValue::Text(release.title.clone())),
        "source" => Some(FieldValue::Text(release.source.clone())),
        "source_id" => Some(FieldValue::Text(release.source_id.clone())),
        "size" | "size_bytes" => release.size_bytes.map(|s| FieldValue::Number(s as f64)),
        "seeders" => release.seeders.map(|s| FieldValue::Number(s as f64)),
        "format" => release.format.clone().map(FieldValue::Text),
        "language" => release.language.clone().map(FieldValue::Text),
        "protocol" => release.protocol.clone().map(FieldValue::Text),
        "indexer" => release.indexer.clone().map(FieldValue::Text),
        "author" => release.author.clone().map(FieldValue::Text),
        "added_date" => release.added_date.map(|d| FieldValue::Text(d.to_rfc3339())),
        "extra" => {
            let (first, remaining) = rest.split_first()?;
            let root = release.extra.get(*first)?;
            return FieldValue::from_json(resolve_extra(root, remaining)?);
        }
        _ => None,
    };

    if structured.is_some() && rest.is_empty() {
        return structured;
    }

    // Unknown head, or a structured head with trailing segments: fall back to
    // looking the whole path up in the extra map.
    let root = release.extra.get(head)?;
    FieldValue::from_json(resolve_extra(root, &rest)?)
}

fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Number(a), FieldValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        _ => {
            let a = field_text(a).to_lowercase();
            let b = field_text(b).to_lowercase();
            a.cmp(&b)
        }
    }
}

fn field_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Text(s) => s.clone(),
    }
}

/// Sorts releases by a resolved field path.
///
/// Missing values sort to the end regardless of direction. Numeric values
/// compare numerically when both sides are numeric, otherwise both sides
/// compare as case-folded text. The sort is stable.
pub fn sort_by_field(releases: Vec<Release>, path: &str, direction: SortDirection) -> Vec<Release> {
    let mut resolved: Vec<(Option<FieldValue>, Release)> = releases
        .into_iter()
        .map(|release| (resolve_path(&release, path), release))
        .collect();

    resolved.sort_by(|(a, _), (b, _)| match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = compare_values(a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    });

    resolved.into_iter().map(|(_, release)| release).collect()
}

/// Partitions releases by whether they advertise `target_format`.
///
/// Descending places matching releases first, ascending last; relative order
/// within each partition is preserved.
pub fn sort_by_format_priority(
    releases: Vec<Release>,
    target_format: &str,
    direction: SortDirection,
) -> Vec<Release> {
    let target = target_format.trim().to_lowercase();

    let mut resolved: Vec<(bool, Release)> = releases
        .into_iter()
        .map(|release| {
            let has_format = release_formats(&release).contains(&target);
            (has_format, release)
        })
        .collect();

    resolved.sort_by_key(|(has_format, _)| match direction {
        SortDirection::Descending => !has_format,
        SortDirection::Ascending => *has_format,
    });

    resolved.into_iter().map(|(_, release)| release).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;

    fn release(id: &str) -> Release {
        Release {
            source: "direct".to_string(),
            source_id: id.to_string(),
            title: format!("Book {id}"),
            format: None,
            language: None,
            size_bytes: None,
            protocol: None,
            indexer: None,
            seeders: None,
            content_type: None,
            author: None,
            added_date: None,
            extra: HashMap::new(),
        }
    }

    #[test]
    fn test_numeric_sort_with_missing_last() {
        let mut a = release("a");
        a.size_bytes = Some(100);
        let mut b = release("b");
        b.size_bytes = Some(300);
        let c = release("c"); // no size

        let sorted = sort_by_field(vec![a, b, c], "size", SortDirection::Descending);
        let ids: Vec<&str> = sorted.iter().map(|r| r.source_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_missing_sorts_last_in_both_directions() {
        let mut a = release("a");
        a.seeders = Some(5);
        let b = release("b");

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sort_by_field(vec![b.clone(), a.clone()], "seeders", direction);
            assert_eq!(sorted.last().unwrap().source_id, "b");
        }
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let mut a = release("a");
        a.indexer = Some("zeta".to_string());
        let mut b = release("b");
        b.indexer = Some("Alpha".to_string());

        let sorted = sort_by_field(vec![a, b], "indexer", SortDirection::Ascending);
        let ids: Vec<&str> = sorted.iter().map(|r| r.source_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_path_into_extra() {
        let mut a = release("a");
        a.extra.insert("grabs".to_string(), json!(3));
        let mut b = release("b");
        b.extra.insert("grabs".to_string(), json!(12));

        let sorted = sort_by_field(vec![a, b], "grabs", SortDirection::Descending);
        assert_eq!(sorted[0].source_id, "b");

        let mut c = release("c");
        c.extra
            .insert("stats".to_string(), json!({"grabs": {"week": 7}}));
        let d = release("d");

        let sorted = sort_by_field(
            vec![d, c],
            "extra.stats.grabs.week",
            SortDirection::Ascending,
        );
        assert_eq!(sorted[0].source_id, "c");
    }

    #[test]
    fn test_format_priority_partition_is_stable() {
        let mut a = release("a");
        a.format = Some("pdf".to_string());
        let mut b = release("b");
        b.extra
            .insert("formats".to_string(), json!(["MOBI", "EPUB"]));
        let mut c = release("c");
        c.format = Some("epub".to_string());
        let d = release("d"); // no formats

        let sorted = sort_by_format_priority(
            vec![a.clone(), b.clone(), c.clone(), d.clone()],
            "epub",
            SortDirection::Descending,
        );
        let ids: Vec<&str> = sorted.iter().map(|r| r.source_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a", "d"]);

        let sorted = sort_by_format_priority(vec![a, b, c, d], "epub", SortDirection::Ascending);
        let ids: Vec<&str> = sorted.iter().map(|r| r.source_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_default_directions() {
        assert_eq!(default_direction(ColumnKind::Size), SortDirection::Descending);
        assert_eq!(
            default_direction(ColumnKind::Peers),
            SortDirection::Descending
        );
        assert_eq!(
            default_direction(ColumnKind::Number),
            SortDirection::Descending
        );
        assert_eq!(default_direction(ColumnKind::Text), SortDirection::Ascending);
        assert_eq!(default_direction(ColumnKind::Badge), SortDirection::Ascending);
        assert_eq!(default_direction(ColumnKind::Date), SortDirection::Ascending);
    }
}
