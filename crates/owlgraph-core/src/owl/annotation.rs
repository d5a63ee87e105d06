//! Annotation subjects and values.

use serde::{Deserialize, Serialize};

use super::{AnonymousIndividual, Iri, Literal};

/// What an annotation assertion is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationSubject {
    Iri(Iri),
    AnonymousIndividual(AnonymousIndividual),
}

/// The value of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationValue {
    Iri(Iri),
    Literal(Literal),
    AnonymousIndividual(AnonymousIndividual),
}
