//! End-to-end tests of mapping followed by the rewrite passes.

use std::collections::BTreeSet;

use proptest::prelude::*;

use owlgraph::{
    DiagramBuilder,
    graph::{Characteristic, Edge, EdgeLabel, EdgeType, ElementSet, Node, edges, nodes},
    identifier::{Id, Identifier},
    owl::{
        AnnotationProperty, AnnotationSubject, AnnotationValue, Axiom, Class, ClassExpression,
        DataProperty, Entity, Individual, Iri, Literal, NamedIndividual, ObjectProperty,
        ObjectPropertyExpression, Ontology, RDFS_LABEL,
    },
};

const NS: &str = "http://example.org/zoo#";

fn iri(name: &str) -> String {
    format!("{NS}{name}")
}

fn class(name: &str) -> ClassExpression {
    ClassExpression::Class(Class::new(&iri(name)))
}

fn object_property(name: &str) -> ObjectPropertyExpression {
    ObjectPropertyExpression::ObjectProperty(ObjectProperty::new(&iri(name)))
}

fn entity_id(name: &str, kind: &str) -> Id {
    Id::new(&format!("{}::{kind}", iri(name)))
}

fn build(axioms: Vec<Axiom>) -> ElementSet {
    let mut identifier = Identifier::with_ids((0..64).map(|i| format!("s{i:02}")));
    DiagramBuilder::default().build_graph_with(&Ontology::new(axioms), &mut identifier)
}

fn edges_into<'a>(elements: &'a ElementSet, target: &Id) -> Vec<&'a Edge> {
    edges(elements).filter(|edge| edge.target() == target).collect()
}

#[test]
fn test_punned_iri_receives_fanned_out_edges() {
    let elements = build(vec![
        Axiom::Declaration(Entity::Class(Class::new(&iri("Eagle")))),
        Axiom::Declaration(Entity::NamedIndividual(NamedIndividual::new(&iri("Eagle")))),
        Axiom::SubClassOf {
            sub: class("Eagle"),
            sup: class("Bird"),
        },
        Axiom::ClassAssertion {
            class: class("Species"),
            individual: Individual::Named(NamedIndividual::new(&iri("Eagle"))),
        },
        Axiom::SubClassOf {
            sub: class("Hawk"),
            sup: class("Eagle"),
        },
    ]);

    let class_id = entity_id("Eagle", "class");
    let individual_id = entity_id("Eagle", "individual");
    assert!(
        nodes(&elements)
            .filter(|node| node.is_named_entity())
            .any(|node| node.id() == &individual_id)
    );

    // The subsumption pointing at the class also reaches the individual.
    let hawk = entity_id("Hawk", "class");
    for target in [&class_id, &individual_id] {
        let incoming = edges_into(&elements, target);
        assert!(
            incoming
                .iter()
                .any(|edge| edge.source() == &hawk && edge.edge_type() == EdgeType::HollowArrow),
            "missing Hawk -> {target}"
        );
    }

    // Outgoing edges keep their source.
    assert_eq!(
        edges(&elements)
            .filter(|edge| edge.source() == &individual_id)
            .count(),
        1
    );
}

#[test]
fn test_characteristic_markers_are_consolidated() {
    let elements = build(vec![
        Axiom::FunctionalObjectProperty(object_property("hasMother")),
        Axiom::IrreflexiveObjectProperty(object_property("hasMother")),
        Axiom::AsymmetricObjectProperty(object_property("hasMother")),
        Axiom::FunctionalDataProperty(DataProperty::new(&iri("age"))),
    ]);

    let markers: Vec<&Node> = nodes(&elements)
        .filter(|node| node.is_property_marker())
        .collect();
    assert_eq!(markers.len(), 2);

    let mother = entity_id("hasMother", "object_property");
    let marker_edges: Vec<&Edge> = edges(&elements)
        .filter(|edge| edge.source() == &mother)
        .collect();
    assert_eq!(marker_edges.len(), 1);
    assert_eq!(marker_edges[0].edge_type(), EdgeType::DashedArrow);
    assert_eq!(marker_edges[0].target(), &Id::new("s00"));

    let merged = markers
        .iter()
        .find(|node| node.id() == &Id::new("s00"))
        .and_then(|node| node.as_property_marker())
        .expect("merged marker keeps the smallest id");
    assert_eq!(
        merged,
        &BTreeSet::from([
            Characteristic::Functional,
            Characteristic::Asymmetric,
            Characteristic::Irreflexive,
        ])
    );
}

#[test]
fn test_inverse_property_characteristics_share_one_marker() {
    let inverse =
        ObjectPropertyExpression::InverseObjectProperty(ObjectProperty::new(&iri("eats")));
    let elements = build(vec![
        Axiom::SymmetricObjectProperty(inverse.clone()),
        Axiom::TransitiveObjectProperty(inverse),
    ]);

    let inverses: Vec<&Node> = nodes(&elements)
        .filter(|node| matches!(node, Node::Inverse { .. }))
        .collect();
    assert_eq!(inverses.len(), 1);

    let markers: Vec<&Node> = nodes(&elements)
        .filter(|node| node.is_property_marker())
        .collect();
    assert_eq!(markers.len(), 1);
    assert_eq!(
        markers[0].as_property_marker(),
        Some(&BTreeSet::from([
            Characteristic::Symmetric,
            Characteristic::Transitive,
        ]))
    );

    let marker_edges: Vec<&Edge> = edges(&elements)
        .filter(|edge| edge.source() == inverses[0].id() && edge.target() == markers[0].id())
        .collect();
    assert_eq!(marker_edges.len(), 1);
}

#[test]
fn test_annotation_domain_reaches_every_punned_node() {
    let elements = build(vec![
        Axiom::Declaration(Entity::Class(Class::new(&iri("X")))),
        Axiom::Declaration(Entity::NamedIndividual(NamedIndividual::new(&iri("X")))),
        Axiom::AnnotationPropertyDomain {
            property: AnnotationProperty::new(&iri("note")),
            domain: Iri::new(&iri("X")),
        },
    ]);

    let note = entity_id("note", "annotation_property");
    let mut targets: Vec<&Id> = edges(&elements)
        .filter(|edge| edge.label() == Some(EdgeLabel::Domain))
        .inspect(|edge| assert_eq!(edge.source(), &note))
        .map(Edge::target)
        .collect();
    targets.sort();
    assert_eq!(
        targets,
        vec![&entity_id("X", "class"), &entity_id("X", "individual")]
    );
    assert!(!nodes(&elements).any(Node::is_iri_reference));
}

#[test]
fn test_annotation_domain_resolves_to_entity() {
    let elements = build(vec![
        Axiom::Declaration(Entity::Class(Class::new(&iri("Animal")))),
        Axiom::AnnotationPropertyDomain {
            property: AnnotationProperty::new(&iri("habitat")),
            domain: Iri::new(&iri("Animal")),
        },
        Axiom::AnnotationPropertyRange {
            property: AnnotationProperty::new(&iri("habitat")),
            range: Iri::new(&iri("Unknown")),
        },
    ]);

    let references: Vec<&Node> = nodes(&elements)
        .filter(|node| node.is_iri_reference())
        .collect();
    assert_eq!(references.len(), 1, "only the unmatched reference remains");
    assert_eq!(
        references[0].as_iri_reference().map(Iri::as_str),
        Some(iri("Unknown").as_str())
    );

    let habitat = entity_id("habitat", "annotation_property");
    let domain: Vec<&Edge> = edges(&elements)
        .filter(|edge| edge.label() == Some(EdgeLabel::Domain))
        .collect();
    assert_eq!(domain.len(), 1);
    assert_eq!(domain[0].source(), &habitat);
    assert_eq!(domain[0].target(), &entity_id("Animal", "class"));
}

#[test]
fn test_labels_name_entities() {
    let ontology = Ontology::new(vec![
        Axiom::Declaration(Entity::Class(Class::new(&iri("Lion")))),
        Axiom::AnnotationAssertion {
            property: AnnotationProperty::new(RDFS_LABEL),
            subject: AnnotationSubject::Iri(Iri::new(&iri("Lion"))),
            value: AnnotationValue::Literal(Literal::tagged("Lion (Panthera leo)", "en")),
        },
    ]);

    let elements = DiagramBuilder::default().build_graph(&ontology);
    assert!(nodes(&elements).any(|node| matches!(
        node,
        Node::Class { name, .. } if name == "Lion (Panthera leo)"
    )));

    // The annotation subject reference was resolved onto the class.
    let lion = entity_id("Lion", "class");
    assert!(edges(&elements).any(|edge| edge.source() == &lion
        && edge.edge_type() == EdgeType::NoArrow));
}

#[test]
fn test_same_supply_gives_identical_documents() {
    let axioms = vec![
        Axiom::SubClassOf {
            sub: class("Lion"),
            sup: ClassExpression::ObjectSomeValuesFrom {
                property: object_property("eats"),
                filler: Box::new(class("Meat")),
            },
        },
        Axiom::TransitiveObjectProperty(object_property("eats")),
    ];
    let builder = DiagramBuilder::default();

    let first = builder.render_dot(&build(axioms.clone())).unwrap();
    let second = builder.render_dot(&build(axioms)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_random_ids_differ_but_structure_matches() {
    let ontology = Ontology::new(vec![Axiom::SubClassOf {
        sub: class("A"),
        sup: ClassExpression::ObjectUnionOf(vec![class("B"), class("C")]),
    }]);
    let builder = DiagramBuilder::default();

    let first = builder.build_graph(&ontology);
    let second = builder.build_graph(&ontology);
    assert_eq!(first.len(), second.len());
    assert_eq!(edges(&first).count(), 3);
}

fn named_axioms() -> Vec<Axiom> {
    vec![
        Axiom::SubClassOf {
            sub: class("Lion"),
            sup: class("Cat"),
        },
        Axiom::SubClassOf {
            sub: class("Cat"),
            sup: class("Animal"),
        },
        Axiom::EquivalentClasses(vec![class("Animal"), class("Creature")]),
        Axiom::ObjectPropertyDomain {
            property: object_property("eats"),
            domain: class("Animal"),
        },
        Axiom::Declaration(Entity::Class(Class::new(&iri("Lion")))),
    ]
}

proptest! {
    #[test]
    fn document_is_independent_of_axiom_order(
        axioms in Just(named_axioms()).prop_shuffle()
    ) {
        let builder = DiagramBuilder::default();
        let expected = builder.render_dot(&build(named_axioms())).unwrap();
        let actual = builder.render_dot(&build(axioms)).unwrap();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn passes_are_idempotent_on_built_graphs(
        axioms in Just(vec![
            Axiom::Declaration(Entity::Class(Class::new(&iri("X")))),
            Axiom::Declaration(Entity::NamedIndividual(NamedIndividual::new(&iri("X")))),
            Axiom::SubClassOf { sub: class("Y"), sup: class("X") },
            Axiom::SymmetricObjectProperty(object_property("p")),
            Axiom::TransitiveObjectProperty(object_property("p")),
            Axiom::AnnotationPropertyDomain {
                property: AnnotationProperty::new(&iri("note")),
                domain: Iri::new(&iri("X")),
            },
        ]).prop_shuffle()
    ) {
        let once = build(axioms);
        let twice = owlgraph::transform::run_all(once.clone());
        prop_assert_eq!(once, twice);
    }
}
