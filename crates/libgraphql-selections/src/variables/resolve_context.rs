use crate::value::ValueMap;
use crate::variables::ObjectData;
use std::sync::Arc;

/// Everything a [`VariablesResolver`](crate::variables::VariablesResolver)
/// may read from: the arguments of the field being resolved plus the data
/// loaded for the parent object and for the root query object.
#[derive(Clone, Debug)]
pub struct ResolveContext {
    arguments: ValueMap,
    object_data: Arc<dyn ObjectData>,
    query_data: Arc<dyn ObjectData>,
}
impl ResolveContext {
    /// A context with `arguments` and no loaded object or query data.
    pub fn new(arguments: ValueMap) -> Self {
        Self {
            arguments,
            object_data: Arc::new(ValueMap::new()),
            query_data: Arc::new(ValueMap::new()),
        }
    }

    pub fn arguments(&self) -> &ValueMap {
        &self.arguments
    }

    pub fn object_data(&self) -> &dyn ObjectData {
        self.object_data.as_ref()
    }

    pub fn query_data(&self) -> &dyn ObjectData {
        self.query_data.as_ref()
    }

    pub fn with_object_data(mut self, object_data: Arc<dyn ObjectData>) -> Self {
        self.object_data = object_data;
        self
    }

    pub fn with_query_data(mut self, query_data: Arc<dyn ObjectData>) -> Self {
        self.query_data = query_data;
        self
    }
}
