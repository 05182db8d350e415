use gridcore_model::{BlueprintFactory, Channel, ChannelKind, Entity, EntityFactory, FactoryError};
use pretty_assertions::assert_eq;
use serde_json::json;

fn factory() -> BlueprintFactory {
    let mut f = BlueprintFactory::new();
    f.register("SimulatedStorage", |id, _args| {
        let mut e = Entity::new(id, "SimulatedStorage");
        e.add_channel(Channel::required("minSoc", ChannelKind::Integer))
            .map_err(|e| e.to_string())?;
        Ok(e)
    });
    f.register("Broken", |_id, _args| Err("boom".to_string()));
    f
}

#[test]
fn construct_builds_registered_class() {
    let f = factory();
    let e = f.construct("SimulatedStorage", "ess0", &[]).unwrap();
    assert_eq!(e.id(), "ess0");
    assert_eq!(e.class_name(), "SimulatedStorage");
    assert!(e.channel("minSoc").is_some());
}

#[test]
fn construct_unknown_class_fails() {
    let f = factory();
    let err = f.construct("Missing", "x0", &[]).unwrap_err();
    assert_eq!(err, FactoryError::UnknownClass("Missing".into()));
}

#[test]
fn constructor_failure_is_wrapped() {
    let f = factory();
    let err = f.construct("Broken", "x0", &[]).unwrap_err();
    assert_eq!(
        err,
        FactoryError::Construction {
            class_name: "Broken".into(),
            reason: "boom".into(),
        }
    );
}

#[test]
fn construction_args_are_forwarded() {
    let mut f = BlueprintFactory::new();
    f.register("Meter", |id, args| {
        let mut e = Entity::new(id, "Meter");
        if let Some(alias) = args.first().and_then(|v| v.as_str()) {
            e.set_alias(alias);
        }
        Ok(e)
    });
    let e = f.construct("Meter", "meter0", &[json!("Grid meter")]).unwrap();
    assert_eq!(e.alias(), "Grid meter");
}

#[test]
fn is_registered_and_classes() {
    let f = factory();
    assert!(f.is_registered("SimulatedStorage"));
    assert!(!f.is_registered("Missing"));
    let mut classes = f.classes();
    classes.sort();
    assert_eq!(classes, vec!["Broken", "SimulatedStorage"]);
}

#[test]
fn register_replaces_previous_constructor() {
    let mut f = BlueprintFactory::new();
    f.register("Meter", |id, _| Ok(Entity::new(id, "MeterV1")));
    f.register("Meter", |id, _| Ok(Entity::new(id, "MeterV2")));
    let e = f.construct("Meter", "meter0", &[]).unwrap();
    assert_eq!(e.class_name(), "MeterV2");
}
