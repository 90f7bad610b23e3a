use std::{convert::Infallible, sync::Arc};

use wrapp_cell::{ctor, group, provide, provide_private, ApplyConfig, Cell, DynError, Registry};

fn main() -> Result<(), DynError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let app = group![
        provide(vec![ctor(new_sun), ctor(new_flower)]),
        provide_private(vec![ctor(new_bee)]),
    ];

    let mut registry = Registry::new();
    app.apply(&mut registry, &ApplyConfig::default())?;
    registry.check()?;

    println!("{:?}", registry);
    println!("{}", app.info(&registry));
    Ok(())
}

#[derive(Debug)]
struct Sun;
#[derive(Debug)]
struct Flower;
#[derive(Debug)]
struct Bee;

fn new_sun() -> Result<Sun, Infallible> {
    Ok(Sun)
}

fn new_flower(_sun: Arc<Sun>) -> Result<Flower, Infallible> {
    Ok(Flower)
}

fn new_bee(_flower: Arc<Flower>, _sun: Option<Arc<Sun>>) -> Result<Bee, DynError> {
    Ok(Bee)
}
