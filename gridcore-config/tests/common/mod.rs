//! Shared fixtures for the conversion tests.

#![allow(dead_code)]

use gridcore_model::{
    BlueprintFactory, Channel, ChannelKind, ChannelValue, ContainerKind, Entity,
};
use gridcore_types::Role;

/// A storage unit with one channel of every commonly exercised kind.
pub fn storage_entity(id: &str) -> Entity {
    let mut e = Entity::new(id, "SimulatedStorage");
    e.add_channel(
        Channel::required("minSoc", ChannelKind::Integer).with_default(ChannelValue::Integer(10)),
    )
    .unwrap();
    e.add_channel(Channel::optional("capacity", ChannelKind::Long))
        .unwrap();
    e.add_channel(
        Channel::optional("password", ChannelKind::Text).with_read_role(Role::Installer),
    )
    .unwrap();
    e.add_channel(Channel::optional("ip", ChannelKind::Ipv4)).unwrap();
    e.add_channel(Channel::optional("profile", ChannelKind::LongArray))
        .unwrap();
    e.add_channel(Channel::optional(
        "schedule",
        ChannelKind::LongMatrix {
            container: ContainerKind::List,
        },
    ))
    .unwrap();
    e.add_channel(Channel::optional(
        "meter",
        ChannelKind::EntityRef {
            class_name: "GridMeter".to_string(),
        },
    ))
    .unwrap();
    e.add_channel(Channel::optional(
        "peers",
        ChannelKind::EntityCollection {
            class_name: "SimulatedStorage".to_string(),
            container: ContainerKind::List,
        },
    ))
    .unwrap();
    e
}

/// A meter with a single optional channel.
pub fn meter_entity(id: &str) -> Entity {
    let mut e = Entity::new(id, "GridMeter");
    e.add_channel(Channel::optional("voltage", ChannelKind::Integer))
        .unwrap();
    e
}

/// A meter whose `phase` channel is required and has no default.
pub fn strict_meter_entity(id: &str) -> Entity {
    let mut e = Entity::new(id, "StrictMeter");
    e.add_channel(Channel::required("phase", ChannelKind::Integer))
        .unwrap();
    e
}

/// Factory knowing every fixture class.
pub fn factory() -> BlueprintFactory {
    let mut f = BlueprintFactory::new();
    f.register("SimulatedStorage", |id, _args| Ok(storage_entity(id)));
    f.register("GridMeter", |id, _args| Ok(meter_entity(id)));
    f.register("StrictMeter", |id, _args| Ok(strict_meter_entity(id)));
    f
}
