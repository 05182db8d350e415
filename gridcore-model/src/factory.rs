use crate::entity::Entity;
use crate::error::FactoryError;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Constructor callback registered per class name.
///
/// Receives the entity id and the caller-supplied construction arguments
/// forwarded verbatim by the resolver.
pub type BuildFn = Box<dyn Fn(&str, &[Value]) -> Result<Entity, String> + Send + Sync>;

/// Capability to construct an entity of a concrete class.
///
/// The conversion core calls this when resolving a reference to an id it
/// has not seen; it never discovers classes on its own.
pub trait EntityFactory: Send + Sync {
    fn construct(
        &self,
        class_name: &str,
        id: &str,
        args: &[Value],
    ) -> Result<Entity, FactoryError>;
}

/// Factory backed by an explicit table of registered constructors.
#[derive(Default)]
pub struct BlueprintFactory {
    builders: HashMap<String, BuildFn>,
}

impl BlueprintFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor for `class_name`, replacing any previous one.
    pub fn register<F>(&mut self, class_name: impl Into<String>, build: F)
    where
        F: Fn(&str, &[Value]) -> Result<Entity, String> + Send + Sync + 'static,
    {
        self.builders.insert(class_name.into(), Box::new(build));
    }

    pub fn is_registered(&self, class_name: &str) -> bool {
        self.builders.contains_key(class_name)
    }

    /// Registered class names, in unspecified order.
    pub fn classes(&self) -> Vec<&str> {
        self.builders.keys().map(String::as_str).collect()
    }
}

impl EntityFactory for BlueprintFactory {
    fn construct(
        &self,
        class_name: &str,
        id: &str,
        args: &[Value],
    ) -> Result<Entity, FactoryError> {
        let build = self
            .builders
            .get(class_name)
            .ok_or_else(|| FactoryError::UnknownClass(class_name.to_string()))?;
        build(id, args).map_err(|reason| FactoryError::Construction {
            class_name: class_name.to_string(),
            reason,
        })
    }
}

impl fmt::Debug for BlueprintFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlueprintFactory")
            .field("classes", &self.classes())
            .finish()
    }
}
