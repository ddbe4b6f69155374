use crate::breadcrumb;
use crate::error::Error;
use crate::html;
use crate::key::Trail;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Breadcrumb markup
    #[default]
    Html,
    /// Node tree as JSON
    Json,
    /// Node tree as YAML
    Yaml,
    /// Segments joined by " > "
    Text,
}

pub fn format_key(key: &str, format: OutputFormat) -> Result<String, Error> {
    let trail = Trail::parse(key);

    let formatted = match format {
        OutputFormat::Text => trail.to_string(),
        OutputFormat::Html => html::to_html(&breadcrumb::render_trail(&trail)),
        OutputFormat::Json => serde_json::to_string(&breadcrumb::render_trail(&trail))?,
        OutputFormat::Yaml => serde_yaml::to_string(&breadcrumb::render_trail(&trail))?,
    };

    Ok(formatted)
}

/// Writes one document per key, each terminated by a newline.
pub fn write_keys<W, I, S>(out: &mut W, keys: I, format: OutputFormat) -> Result<(), Error>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for key in keys {
        let document = format_key(key.as_ref(), format)?;
        out.write_all(document.as_bytes())?;
        if !document.ends_with('\n') {
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn text() {
        assert_eq!(format_key(":a:b:", OutputFormat::Text).unwrap(), "a > b");
        assert_eq!(format_key("::", OutputFormat::Text).unwrap(), "");
    }

    #[test]
    fn json_reads_back_into_same_tree() {
        let json = format_key("a:b:c", OutputFormat::Json).unwrap();
        let node: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(node, breadcrumb::render("a:b:c"));
    }

    #[test]
    fn json_shape() {
        let json = format_key("x", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let unit = &value["element"]["children"][0]["element"];

        assert_eq!(value["element"]["tag"], "div");
        assert_eq!(unit["key"], "key-value-x-0");
        assert_eq!(unit["children"][0]["element"]["children"][0]["text"], "x");
    }

    #[test]
    fn yaml_reads_back_into_same_tree() {
        let yaml = format_key(":a", OutputFormat::Yaml).unwrap();
        let node: Node = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(node, breadcrumb::render(":a"));
    }

    #[test]
    fn write_keys_one_line_each() {
        let mut out = Vec::new();
        write_keys(&mut out, ["a:b", "", "c"], OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a > b\n\nc\n");
    }

    #[test]
    fn write_keys_yaml_not_double_terminated() {
        let mut out = Vec::new();
        write_keys(&mut out, ["a"], OutputFormat::Yaml).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.ends_with('\n'));
        assert!(!written.ends_with("\n\n"));
    }

    #[test]
    fn html_is_default() {
        assert_eq!(
            format_key("a", OutputFormat::default()).unwrap(),
            html::to_html(&breadcrumb::render("a"))
        );
    }
}
