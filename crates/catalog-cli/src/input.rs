//! Candidate usage input files.
//!
//! A file holds either a JSON array of usages or an object with an
//! `elements` array (the shape design-tool exports use). Usages without a
//! `location` get `<file>#/<index>`.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use catalog_model::{CandidateUsage, Platform};

/// Read and parse one input file.
pub fn load_usages(path: &Path, platform: Option<Platform>) -> Result<Vec<CandidateUsage>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read usages from {}", path.display()))?;
    parse_usages(&text, &path.display().to_string(), platform)
        .with_context(|| format!("parse usages from {}", path.display()))
}

/// Parse usages from JSON text; `source` names the input in generated locations.
///
/// `platform` is applied to usages that do not carry their own context.
pub fn parse_usages(
    text: &str,
    source: &str,
    platform: Option<Platform>,
) -> Result<Vec<CandidateUsage>> {
    let document: Value = serde_json::from_str(text).context("invalid JSON")?;
    let elements = match document {
        Value::Array(elements) => elements,
        Value::Object(mut object) => match object.remove("elements") {
            Some(Value::Array(elements)) => elements,
            Some(_) => bail!("`elements` must be an array"),
            None => bail!("expected an array of usages or an object with an `elements` array"),
        },
        _ => bail!("expected an array of usages or an object with an `elements` array"),
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            let mut usage: CandidateUsage = serde_json::from_value(element)
                .with_context(|| format!("element {index} is not a component usage"))?;
            if usage.location.is_none() {
                usage.location = Some(format!("{source}#/{index}"));
            }
            if usage.platform.is_none() {
                usage.platform = platform;
            }
            Ok(usage)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_input_gets_locations() {
        let usages = parse_usages(
            r#"[{"component": "Button"}, {"component": "Card", "location": "node:12"}]"#,
            "home.json",
            None,
        )
        .unwrap();
        assert_eq!(usages[0].location.as_deref(), Some("home.json#/0"));
        assert_eq!(usages[1].location.as_deref(), Some("node:12"));
    }

    #[test]
    fn elements_object_is_accepted() {
        let usages = parse_usages(
            r#"{"screen": "Settings", "elements": [{"component": "Toggle", "platform": "mobile"}]}"#,
            "settings.json",
            Some(Platform::Web),
        )
        .unwrap();
        assert_eq!(usages.len(), 1);
        assert_eq!(usages[0].platform, Some(Platform::Mobile));
    }

    #[test]
    fn platform_flag_fills_missing_context() {
        let usages = parse_usages(r#"[{"component": "Button"}]"#, "a.json", Some(Platform::Web))
            .unwrap();
        assert_eq!(usages[0].platform, Some(Platform::Web));
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(parse_usages(r#"{"component": "Button"}"#, "a.json", None).is_err());
        assert!(parse_usages(r#"{"elements": {}}"#, "a.json", None).is_err());
        assert!(parse_usages("42", "a.json", None).is_err());
    }

    #[test]
    fn element_errors_name_the_index() {
        let error = parse_usages(r#"[{"component": "Button"}, {"variant": "primary"}]"#, "a.json", None)
            .unwrap_err();
        assert!(format!("{error:#}").contains("element 1"));
    }
}
