//! The linear demonstration run: builder, then factory method, then abstract
//! factory. Every observable step lands in the [`Transcript`].

use crate::abstract_factory::{Shape, ShapeIds};
use crate::builder::{Cook, HawaiianPizzaBuilder, PizzaBuilder, RecipePizzaBuilder, SpicyPizzaBuilder};
use crate::config::DemoConfig;
use crate::error::{DemoError, PatternError};
use crate::factory_method::{Application, MyApplication};
use crate::transcript::{Event, Transcript};
use tracing::info;

pub fn run(config: &DemoConfig, transcript: &mut Transcript) -> Result<(), DemoError> {
    run_builder(config, transcript)?;
    run_factory_method(config, transcript)?;
    run_abstract_factory(config, transcript)?;
    Ok(())
}

pub fn run_builder(config: &DemoConfig, transcript: &mut Transcript) -> Result<(), DemoError> {
    transcript.record(Event::section("BUILDER"));

    let mut builders: Vec<Box<dyn PizzaBuilder>> = vec![
        Box::new(HawaiianPizzaBuilder::default()),
        Box::new(SpicyPizzaBuilder::default()),
    ];
    builders.extend(
        config
            .recipes
            .iter()
            .cloned()
            .map(|recipe| Box::new(RecipePizzaBuilder::new(recipe)) as Box<dyn PizzaBuilder>),
    );

    let mut cook = Cook::new();
    for builder in builders {
        cook.make_pizza(builder)?;
        cook.open_pizza(transcript)?;
    }
    Ok(())
}

pub fn run_factory_method(
    config: &DemoConfig,
    transcript: &mut Transcript,
) -> Result<(), DemoError> {
    transcript.record(Event::section("FACTORY METHOD"));

    let mut app = Application::new(MyApplication, transcript);
    if let Some(capacity) = config.document_capacity {
        app = app.with_capacity_limit(capacity);
    }
    for name in &config.documents {
        app.new_document(name, transcript)?;
    }
    let names = app.report_docs(transcript);
    info!(count = names.len(), "documents reported");
    Ok(())
}

/// Creates every shape first, then draws them, matching the classic output.
pub fn run_abstract_factory(
    config: &DemoConfig,
    transcript: &mut Transcript,
) -> Result<Vec<Box<dyn Shape>>, PatternError> {
    transcript.record(Event::section("ABSTRACT FACTORY"));

    let factory = config
        .shape_family
        .factory(ShapeIds::starting_at(config.id_seed));
    let shapes: Vec<Box<dyn Shape>> = config
        .shape_plan
        .iter()
        .map(|role| factory.create(*role))
        .collect::<Result<_, _>>()?;

    for shape in &shapes {
        transcript.record(shape.draw());
    }
    info!(family = ?factory.family(), count = shapes.len(), "shapes drawn");
    Ok(shapes)
}
