//! Example: Creating a diagram from the ontology model
//!
//! This example demonstrates how to programmatically build an ontology
//! using the model types directly, without decoding a JSON document, and
//! print the DOT document it maps to.

use owlgraph::{
    DiagramBuilder,
    config::{AppConfig, Direction, LayoutConfig, RendererConfig, StyleConfig},
    owl::{
        Axiom, Class, ClassExpression, Entity, Individual, NamedIndividual, ObjectProperty,
        ObjectPropertyExpression, Ontology, SubObjectPropertyExpression,
    },
};

const NS: &str = "http://example.org/pizza#";

fn class(name: &str) -> ClassExpression {
    ClassExpression::Class(Class::new(&format!("{NS}{name}")))
}

fn property(name: &str) -> ObjectPropertyExpression {
    ObjectPropertyExpression::ObjectProperty(ObjectProperty::new(&format!("{NS}{name}")))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building diagram from the ontology model...\n");

    let ontology = Ontology::new(vec![
        Axiom::Declaration(Entity::Class(Class::new(&format!("{NS}Pizza")))),
        Axiom::SubClassOf {
            sub: class("Margherita"),
            sup: class("Pizza"),
        },
        // Every margherita has some tomato and some mozzarella topping.
        Axiom::SubClassOf {
            sub: class("Margherita"),
            sup: ClassExpression::ObjectIntersectionOf(vec![
                ClassExpression::ObjectSomeValuesFrom {
                    property: property("hasTopping"),
                    filler: Box::new(class("Tomato")),
                },
                ClassExpression::ObjectSomeValuesFrom {
                    property: property("hasTopping"),
                    filler: Box::new(class("Mozzarella")),
                },
            ]),
        },
        Axiom::DisjointClasses(vec![class("Tomato"), class("Mozzarella")]),
        Axiom::TransitiveObjectProperty(property("hasIngredient")),
        Axiom::SubObjectPropertyOf {
            sub: SubObjectPropertyExpression::Expression(property("hasTopping")),
            sup: property("hasIngredient"),
        },
        Axiom::ClassAssertion {
            class: class("Margherita"),
            individual: Individual::Named(NamedIndividual::new(&format!("{NS}tonightsDinner"))),
        },
    ]);

    let config = AppConfig::new(
        LayoutConfig::new(Direction::LeftToRight),
        StyleConfig::default(),
        RendererConfig::default(),
    );
    let builder = DiagramBuilder::new(config);

    let elements = builder.build_graph(&ontology);
    println!(
        "Mapped {} axioms to {} diagram elements\n",
        ontology.axioms().len(),
        elements.len()
    );

    let document = builder.render_dot(&elements)?;
    println!("{document}");

    Ok(())
}
