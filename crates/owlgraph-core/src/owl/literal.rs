use std::fmt;

use serde::{Deserialize, Serialize};

use super::Iri;

/// A data value: its lexical form plus an optional datatype or language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    lexical: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    datatype: Option<Iri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

impl Literal {
    /// Creates a plain literal.
    pub fn new(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    /// Creates a typed literal.
    pub fn typed(lexical: impl Into<String>, datatype: Iri) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype),
            language: None,
        }
    }

    /// Creates a language-tagged literal.
    pub fn tagged(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }

    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// Formats the literal the way it is shown in diagrams: `"value"`,
/// `"value"@lang` or `"value"^^fragment`.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.lexical)?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")?;
        } else if let Some(datatype) = &self.datatype {
            write!(f, "^^{}", datatype.fragment())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Literal::new("a").to_string(), "\"a\"");
        assert_eq!(Literal::tagged("chat", "fr").to_string(), "\"chat\"@fr");
        assert_eq!(
            Literal::typed("5", Iri::new("http://www.w3.org/2001/XMLSchema#integer")).to_string(),
            "\"5\"^^integer"
        );
    }
}
