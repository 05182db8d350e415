mod common;

use common::factory;
use gridcore_config::{ConfigError, DecodeContext, decode_value};
use gridcore_model::{
    ChannelKind, ChannelValue, ContainerKind, Entity, EntityRegistry,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::net::Ipv4Addr;

// ── Scalars ──────────────────────────────────────────────────────

#[test]
fn null_decodes_to_no_value() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    let decoded = decode_value(&ChannelKind::Integer, &json!(null), &ctx).unwrap();
    assert_eq!(decoded, None);
}

#[test]
fn integer_from_number_and_from_string() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    assert_eq!(
        decode_value(&ChannelKind::Integer, &json!(42), &ctx).unwrap(),
        Some(ChannelValue::Integer(42))
    );
    assert_eq!(
        decode_value(&ChannelKind::Integer, &json!("42"), &ctx).unwrap(),
        Some(ChannelValue::Integer(42))
    );
}

#[test]
fn array_against_scalar_is_a_shape_mismatch() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    assert!(matches!(
        decode_value(&ChannelKind::Long, &json!([1]), &ctx),
        Err(ConfigError::ShapeMismatch { .. })
    ));
}

#[test]
fn json_object_passes_through() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    let blob = json!({"vendor": {"x": [1, null, "y"]}});
    assert_eq!(
        decode_value(&ChannelKind::Json, &blob, &ctx).unwrap(),
        Some(ChannelValue::Json(blob.clone()))
    );
    assert!(decode_value(&ChannelKind::Json, &json!([1]), &ctx).is_err());
}

// ── IPv4 ─────────────────────────────────────────────────────────

#[test]
fn ipv4_from_dotted_decimal() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    assert_eq!(
        decode_value(&ChannelKind::Ipv4, &json!("192.168.0.1"), &ctx).unwrap(),
        Some(ChannelValue::Ipv4(Ipv4Addr::new(192, 168, 0, 1)))
    );
}

#[test]
fn bad_ipv4_is_invalid_address() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    assert!(matches!(
        decode_value(&ChannelKind::Ipv4, &json!("not-an-ip"), &ctx),
        Err(ConfigError::InvalidAddress(_))
    ));
}

#[test]
fn ipv4_requires_a_string() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    assert!(matches!(
        decode_value(&ChannelKind::Ipv4, &json!(19216801), &ctx),
        Err(ConfigError::ShapeMismatch { .. })
    ));
}

// ── Long arrays ──────────────────────────────────────────────────

#[test]
fn long_array_keeps_order() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    assert_eq!(
        decode_value(&ChannelKind::LongArray, &json!([3, 1, 2]), &ctx).unwrap(),
        Some(ChannelValue::LongArray(vec![3, 1, 2]))
    );
}

#[test]
fn long_array_accepts_numeric_strings() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    assert_eq!(
        decode_value(&ChannelKind::LongArray, &json!([1, "2"]), &ctx).unwrap(),
        Some(ChannelValue::LongArray(vec![1, 2]))
    );
}

#[test]
fn long_array_rejects_non_numeric_elements() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    assert!(matches!(
        decode_value(&ChannelKind::LongArray, &json!([1, "x"]), &ctx),
        Err(ConfigError::ShapeMismatch { .. })
    ));
}

#[test]
fn long_matrix_decodes_rows() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    let kind = ChannelKind::LongMatrix {
        container: ContainerKind::Set,
    };
    assert_eq!(
        decode_value(&kind, &json!([[1, 2], [3]]), &ctx).unwrap(),
        Some(ChannelValue::LongMatrix(vec![vec![1, 2], vec![3]]))
    );
}

#[test]
fn long_matrix_rejects_flat_arrays() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    let kind = ChannelKind::LongMatrix {
        container: ContainerKind::List,
    };
    assert!(matches!(
        decode_value(&kind, &json!([1, 2]), &ctx),
        Err(ConfigError::ShapeMismatch { .. })
    ));
}

// ── Entity collections ───────────────────────────────────────────

#[test]
fn collection_accepts_known_bare_ids() {
    let registry = EntityRegistry::new();
    registry.register(Entity::new("ess1", "SimulatedStorage"));
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    let kind = ChannelKind::EntityCollection {
        class_name: "SimulatedStorage".to_string(),
        container: ContainerKind::List,
    };
    assert_eq!(
        decode_value(&kind, &json!(["ess1"]), &ctx).unwrap(),
        Some(ChannelValue::EntityList(vec!["ess1".to_string()]))
    );
}

#[test]
fn collection_rejects_unknown_bare_ids() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    let kind = ChannelKind::EntityCollection {
        class_name: "SimulatedStorage".to_string(),
        container: ContainerKind::List,
    };
    assert!(matches!(
        decode_value(&kind, &json!(["ghost"]), &ctx),
        Err(ConfigError::UnknownEntity(id)) if id == "ghost"
    ));
}

#[test]
fn collection_resolves_entity_documents_elementwise() {
    let registry = EntityRegistry::new();
    let f = factory();
    let ctx = DecodeContext::new(&registry, &f);
    let kind = ChannelKind::EntityCollection {
        class_name: "SimulatedStorage".to_string(),
        container: ContainerKind::List,
    };
    let decoded = decode_value(
        &kind,
        &json!([{"id": "ess1"}, {"id": "ess2"}]),
        &ctx,
    )
    .unwrap();
    assert_eq!(
        decoded,
        Some(ChannelValue::EntityList(vec![
            "ess1".to_string(),
            "ess2".to_string()
        ]))
    );
    assert!(registry.contains("ess1"));
    assert!(registry.contains("ess2"));
}
