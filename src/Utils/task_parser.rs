/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" which has titles and
/// pairs key-vector of values. Lines starting with //, #, % or ; are comments.
///
/// # Examples
/// ```rust, ignore
/// let doc = "engine\n rectify: false\n variable: t";
/// let map = parse_document_as(doc, None)?;
/// assert_eq!(map["engine"]["variable"], Some(vec![Value::String("t".to_string())]));
/// ```
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, recognize},
    multi::{many0, many1, separated_list1},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt::Display;

pub type SectionMap = HashMap<String, Option<Vec<Value>>>;
pub type DocumentMap = HashMap<String, SectionMap>;

/// enum to represent different value types:
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn as_string(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// floats, and integers widened to floats
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }
}

// Try parsing as different types in order: integer, float, boolean, string
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if let Ok(val) = s.parse::<i64>() {
            Value::Integer(val)
        } else if let Ok(val) = s.parse::<f64>() {
            Value::Float(val)
        } else if let Ok(val) = s.parse::<bool>() {
            Value::Boolean(val)
        } else {
            Value::String(s.to_string())
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Float(val) => write!(f, "{}", val),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Boolean(val) => write!(f, "{}", val),
        }
    }
}

/// word characters without spaces, starting with a letter or underscore
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)
}

/// Parses a title; trailing whitespace and newlines are dropped
fn parse_title(input: &str) -> IResult<&str, String> {
    map(terminated(identifier, multispace0), String::from).parse(input)
}

fn parse_key(input: &str) -> IResult<&str, String> {
    map(identifier, String::from).parse(input)
}

// a single value runs up to a comma, whitespace or semicolon
fn parse_value(input: &str) -> IResult<&str, Value> {
    map(
        take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\r' | '\n' | ';')),
        Value::from,
    )
    .parse(input)
}

fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    separated_list1(delimited(space0, tag(","), space0), parse_value).parse(input)
}

/// Parses a key-value pair where value is a list
fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    separated_pair(parse_key, delimited(space0, tag(":"), space0), parse_value_list).parse(input)
}

/// Parses a section with a title and one or more key-value pairs
fn parse_section(input: &str) -> IResult<&str, (String, SectionMap)> {
    let (input, title) = parse_title(input)?;
    let (input, pairs) = many1(terminated(parse_key_value_pair, multispace0)).parse(input)?;
    let section = pairs
        .into_iter()
        .map(|(key, values)| (key, Some(values)))
        .collect();
    Ok((input, (title, section)))
}

/// Filters out comment lines (starting with //, #, %, or ;) and empty lines
pub fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the sections of a document (comments must be filtered already)
pub fn parse_document(input: &str) -> IResult<&str, DocumentMap> {
    let (input, sections) =
        many1(delimited(multispace0, parse_section, multispace0)).parse(input)?;
    Ok((input, sections.into_iter().collect()))
}

/// Parses a whole document. Every title and key of the template that the document lacks
/// is added, keys with the value None.
pub fn parse_document_as(input: &str, template: Option<&DocumentMap>) -> Result<DocumentMap, String> {
    let filtered = filter_comments(input);
    let (remaining, mut parsed) =
        parse_document(&filtered).map_err(|e| format!("Parsing error: {:?}", e))?;
    if !remaining.trim().is_empty() {
        return Err(format!(
            "Failed to parse entire document. Remaining: '{}'",
            remaining
        ));
    }
    if let Some(template) = template {
        for (title, keys_map) in template {
            let section = parsed.entry(title.clone()).or_default();
            for key in keys_map.keys() {
                section.entry(key.clone()).or_insert(None);
            }
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_and_key() {
        let (remaining, title) = parse_title("engine\n rectify: true").unwrap();
        assert_eq!(title, "engine");
        assert_eq!(remaining, "rectify: true");

        let (remaining, key) = parse_key("simplify_results: false").unwrap();
        assert_eq!(key, "simplify_results");
        assert_eq!(remaining, ": false");
    }

    #[test]
    fn test_parse_value_types() {
        let (remaining, value) = parse_value("x, y").unwrap();
        assert_eq!(value, Value::String("x".to_string()));
        assert_eq!(remaining, ", y");
        assert_eq!(parse_value("12").unwrap().1, Value::Integer(12));
        assert_eq!(parse_value("1e-3").unwrap().1, Value::Float(1e-3));
        assert_eq!(parse_value("true").unwrap().1, Value::Boolean(true));
    }

    #[test]
    fn test_parse_value_list() {
        let (_, values) = parse_value_list("1, 2.5 ,false").unwrap();
        assert_eq!(
            values,
            vec![Value::Integer(1), Value::Float(2.5), Value::Boolean(false)]
        );
    }

    #[test]
    fn test_parse_document() {
        let doc = "
        // engine settings
        engine
        rectify: false
        variable: t
        # logging
        logging loglevel: debug
        ";
        let map = parse_document_as(doc, None).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map["engine"]["rectify"],
            Some(vec![Value::Boolean(false)])
        );
        assert_eq!(
            map["engine"]["variable"],
            Some(vec![Value::String("t".to_string())])
        );
        assert_eq!(
            map["logging"]["loglevel"],
            Some(vec![Value::String("debug".to_string())])
        );
    }

    #[test]
    fn test_template_adds_missing_keys() {
        let mut template = DocumentMap::new();
        let mut engine = SectionMap::new();
        engine.insert("rectify".to_string(), None);
        engine.insert("variable".to_string(), None);
        template.insert("engine".to_string(), engine);
        template.insert("extra".to_string(), SectionMap::new());

        let map = parse_document_as("engine rectify: true", Some(&template)).unwrap();
        assert_eq!(map["engine"]["rectify"], Some(vec![Value::Boolean(true)]));
        assert_eq!(map["engine"]["variable"], None);
        assert!(map["extra"].is_empty());
    }

    #[test]
    fn test_malformed_document() {
        assert!(parse_document_as("", None).is_err());
        assert!(parse_document_as("engine", None).is_err());
        assert!(parse_document_as("engine rectify: true ???", None).is_err());
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Integer(3).as_float(), Some(3.0));
        assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
        assert_eq!(Value::String("x".into()).as_string(), Some("x"));
        assert_eq!(Value::Float(1.5).as_integer(), None);
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
    }
}
