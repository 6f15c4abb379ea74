//! Grouping and ordering of catalog endpoints.
//!
//! A [`Plan`] fixes every naming and ordering decision before any code is
//! emitted, so the emitters only walk sorted collections and the output is
//! byte-identical for an identical catalog.

use std::collections::{BTreeMap, BTreeSet};

use methodgen_define::{Argument, Catalog, Endpoint};
use tracing::debug;

use crate::errors::GeneratorError;
use crate::naming::{pascal_case, snake_case};

/// Naming decisions for one endpoint.
#[derive(Debug, Clone)]
pub struct MethodPlan<'a> {
    pub endpoint: &'a Endpoint,

    /// Service group, after defaulting to the PascalCase namespace.
    pub group: String,

    /// PascalCase method identifier (`postMessage` becomes `PostMessage`).
    pub method: String,

    /// Output unit the endpoint lives in.
    pub unit: String,

    /// Arguments sorted by name.
    pub arguments: Vec<&'a Argument>,
}

impl<'a> MethodPlan<'a> {
    /// Derives the naming decisions for `endpoint`.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::InvalidEndpointName` if the name has no
    /// namespace separator.
    pub fn new(endpoint: &'a Endpoint) -> Result<Self, GeneratorError> {
        let (Some(namespace), Some(method), Some(unit)) = (
            endpoint.namespace(),
            endpoint.method_name(),
            endpoint.output_unit(),
        ) else {
            return Err(GeneratorError::InvalidEndpointName(endpoint.name.clone()));
        };

        let group = if endpoint.group.is_empty() {
            pascal_case(namespace)
        } else {
            endpoint.group.clone()
        };

        let mut arguments: Vec<&Argument> = endpoint.arguments.iter().collect();
        arguments.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            endpoint,
            group,
            method: pascal_case(method),
            unit,
            arguments,
        })
    }

    /// Name of the service type the endpoint hangs off.
    pub fn service_type(&self) -> String {
        service_type_name(&self.group)
    }

    /// Name of the call-state type, e.g. `ChatPostMessageCall`.
    pub fn call_type(&self) -> String {
        format!("{}{}Call", self.group, self.method)
    }

    /// Name of the constructor on the service, e.g. `post_message`.
    pub fn constructor(&self) -> String {
        snake_case(&self.method)
    }

    pub fn required_arguments(&self) -> impl Iterator<Item = &'a Argument> + '_ {
        self.arguments.iter().copied().filter(|arg| arg.required)
    }

    pub fn optional_arguments(&self) -> impl Iterator<Item = &'a Argument> + '_ {
        self.arguments.iter().copied().filter(|arg| !arg.required)
    }
}

/// Returns the service type name for a group.
pub fn service_type_name(group: &str) -> String {
    format!("{group}Service")
}

/// Endpoints partitioned into output units, plus the set of service groups.
#[derive(Debug, Clone, Default)]
pub struct Plan<'a> {
    /// Distinct groups, sorted.
    pub groups: BTreeSet<String>,

    /// Output units keyed and sorted by name; endpoints in each unit are
    /// sorted by full dotted name.
    pub units: BTreeMap<String, Vec<MethodPlan<'a>>>,
}

impl<'a> Plan<'a> {
    /// Builds the plan for every endpoint in `catalog`.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::InvalidEndpointName` if an endpoint name has
    /// no namespace separator.
    pub fn new(catalog: &'a Catalog) -> Result<Self, GeneratorError> {
        let mut plan = Plan::default();

        for endpoint in &catalog.endpoints {
            let method = MethodPlan::new(endpoint)?;
            debug!(
                endpoint = %endpoint.name,
                group = %method.group,
                unit = %method.unit,
                "planned endpoint"
            );
            plan.groups.insert(method.group.clone());
            plan.units.entry(method.unit.clone()).or_default().push(method);
        }

        for methods in plan.units.values_mut() {
            methods.sort_by(|a, b| a.endpoint.name.cmp(&b.endpoint.name));
        }

        Ok(plan)
    }

    /// Iterates over every planned endpoint in output order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodPlan<'a>> {
        self.units.values().flatten()
    }

    pub fn method_count(&self) -> usize {
        self.units.values().map(Vec::len).sum()
    }
}
