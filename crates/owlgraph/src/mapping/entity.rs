//! Named entities.

use owlgraph_core::{
    graph::{Graph, Node},
    identifier::Id,
    owl::{
        AnnotationProperty, Class, DataProperty, Datatype, Entity, EntityKind, Iri,
        NamedIndividual, ObjectProperty,
    },
};

use super::Mapper;

impl Mapper<'_> {
    /// Maps a named entity to a single node.
    pub fn map_entity(&mut self, entity: &Entity) -> Graph {
        match entity {
            Entity::Class(class) => self.map_class(class),
            Entity::ObjectProperty(property) => self.map_object_property(property),
            Entity::DataProperty(property) => self.map_data_property(property),
            Entity::AnnotationProperty(property) => self.map_annotation_property(property),
            Entity::NamedIndividual(individual) => self.map_named_individual(individual),
            Entity::Datatype(datatype) => self.map_datatype(datatype),
        }
    }

    pub fn map_class(&mut self, class: &Class) -> Graph {
        let (id, name) = self.entity(class.iri(), EntityKind::Class);
        Graph::new(Node::Class { id, name })
    }

    pub fn map_object_property(&mut self, property: &ObjectProperty) -> Graph {
        let (id, name) = self.entity(property.iri(), EntityKind::ObjectProperty);
        Graph::new(Node::ObjectProperty { id, name })
    }

    pub fn map_data_property(&mut self, property: &DataProperty) -> Graph {
        let (id, name) = self.entity(property.iri(), EntityKind::DataProperty);
        Graph::new(Node::DataProperty { id, name })
    }

    pub fn map_annotation_property(&mut self, property: &AnnotationProperty) -> Graph {
        let (id, name) = self.entity(property.iri(), EntityKind::AnnotationProperty);
        Graph::new(Node::AnnotationProperty { id, name })
    }

    pub fn map_named_individual(&mut self, individual: &NamedIndividual) -> Graph {
        let (id, name) = self.entity(individual.iri(), EntityKind::NamedIndividual);
        Graph::new(Node::Individual { id, name })
    }

    pub fn map_datatype(&mut self, datatype: &Datatype) -> Graph {
        let (id, name) = self.entity(datatype.iri(), EntityKind::Datatype);
        Graph::new(Node::Datatype { id, name })
    }

    // Entity ids are derived from the IRI and qualified by kind, so every
    // mention of the same entity lands on the same node while punned kinds
    // stay apart.
    fn entity(&self, iri: &Iri, kind: EntityKind) -> (Id, String) {
        let id = self.identifier.id_for_iri(iri).nested(kind.as_str());
        (id, self.names.name(iri))
    }
}
