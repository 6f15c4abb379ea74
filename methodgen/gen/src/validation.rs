//! Validation of endpoint catalogs.
//!
//! Runs before any code is generated so a bad catalog is reported against
//! the entry that caused it, rather than as a parse failure of the
//! generated file.
//!
//! ## Validation Checks
//!
//! - **Endpoint names**: `<namespace>.<method>`, each part usable in a Rust
//!   identifier, and unique across the catalog
//! - **Arguments**: unique names, no reserved names, no argument sent under
//!   the token key
//! - **Types**: argument and return types parse as Rust types
//! - **Naming collisions**: call types, constructors, setters and module
//!   names are unique where they share a namespace

use std::collections::{BTreeMap, HashMap, HashSet};

use methodgen_define::{ArgType, Catalog, Endpoint};
use tracing::debug;

use crate::codegen::arguments::{parse_type, setter_names};
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::naming::{is_identifier, snake_case};
use crate::plan::MethodPlan;

/// Field name every call type uses for its service back-reference.
const SERVICE_FIELD: &str = "service";

/// Methods every call type defines besides its setters.
const CALL_METHODS: &[&str] = &["values", "execute"];

/// Module names the generator emits itself.
const RESERVED_UNITS: &[&str] = &["services", "mod"];

/// Validates a catalog before code generation.
///
/// ## Examples
///
/// ```
/// use methodgen_define::{ArgType, Argument, Catalog, Endpoint};
/// use methodgen_gen::config::GeneratorConfig;
/// use methodgen_gen::validation::validate_catalog;
///
/// let catalog = Catalog::new(vec![Endpoint {
///     name: "chat.postMessage".to_string(),
///     arguments: vec![Argument::required("channel", ArgType::Text)],
///     ..Default::default()
/// }]);
/// assert!(validate_catalog(&catalog, &GeneratorConfig::default()).is_ok());
/// ```
///
/// ## Errors
///
/// Returns the first problem found.
pub fn validate_catalog(catalog: &Catalog, config: &GeneratorConfig) -> Result<(), GeneratorError> {
    let mut names = HashSet::new();
    let mut call_types: HashMap<String, &str> = HashMap::new();
    let mut constructors: HashMap<(String, String), &str> = HashMap::new();
    let mut units: BTreeMap<String, &str> = BTreeMap::new();

    for endpoint in &catalog.endpoints {
        if !names.insert(endpoint.name.as_str()) {
            return Err(GeneratorError::DuplicateEndpoint(endpoint.name.clone()));
        }

        let method = validate_endpoint_name(endpoint)?;
        validate_arguments(endpoint, config)?;
        validate_types(endpoint)?;

        if let Some(first) = call_types.insert(method.call_type(), &endpoint.name) {
            return Err(collision(method.call_type(), first, &endpoint.name));
        }
        let constructor = (method.group.clone(), method.constructor());
        if let Some(first) = constructors.insert(constructor, &endpoint.name) {
            let name = format!("{}::{}", method.service_type(), method.constructor());
            return Err(collision(name, first, &endpoint.name));
        }
        units.entry(method.unit.clone()).or_insert(&endpoint.name);
    }

    for (unit, endpoint) in &units {
        if RESERVED_UNITS.contains(&unit.as_str()) {
            return Err(collision(format!("{unit}.rs"), "generated module", endpoint));
        }
    }

    debug!(endpoints = catalog.len(), units = units.len(), "catalog validated");
    Ok(())
}

fn collision(name: impl Into<String>, first: &str, second: &str) -> GeneratorError {
    GeneratorError::NameCollision {
        name: name.into(),
        first: first.to_string(),
        second: second.to_string(),
    }
}

fn validate_endpoint_name(endpoint: &Endpoint) -> Result<MethodPlan<'_>, GeneratorError> {
    let invalid = || GeneratorError::InvalidEndpointName(endpoint.name.clone());

    let method = MethodPlan::new(endpoint)?;
    let namespace_ok = endpoint
        .namespace()
        .is_some_and(|namespace| namespace.split('.').all(|part| !part.is_empty()));
    if !namespace_ok
        || !is_identifier(&method.group)
        || !is_identifier(&method.method)
        || !is_identifier(&method.unit)
    {
        return Err(invalid());
    }
    Ok(method)
}

fn validate_arguments(endpoint: &Endpoint, config: &GeneratorConfig) -> Result<(), GeneratorError> {
    let mut names = HashSet::new();
    let mut fields: HashMap<String, &str> = HashMap::new();
    let mut setters: HashMap<String, &str> = HashMap::new();

    for arg in &endpoint.arguments {
        let reserved = |reserved: &str| GeneratorError::ReservedName {
            endpoint: endpoint.name.clone(),
            argument: arg.name.clone(),
            reserved: reserved.to_string(),
        };

        if !names.insert(arg.name.as_str()) {
            return Err(GeneratorError::DuplicateArgument {
                endpoint: endpoint.name.clone(),
                argument: arg.name.clone(),
            });
        }

        let field = snake_case(&arg.name);
        if !is_identifier(&field) {
            return Err(GeneratorError::InvalidType {
                endpoint: endpoint.name.clone(),
                ty: arg.ty.to_string(),
                reason: format!("argument name '{}' is not a valid identifier", arg.name),
            });
        }
        if field == SERVICE_FIELD {
            return Err(reserved(SERVICE_FIELD));
        }
        if !endpoint.skip_token && arg.query_key() == config.token_key {
            return Err(reserved(config.token_key.as_str()));
        }
        if let Some(first) = fields.insert(field.clone(), &arg.name) {
            return Err(collision(field, first, &arg.name));
        }

        for setter in setter_names(arg) {
            if CALL_METHODS.contains(&setter.as_str()) {
                return Err(reserved(setter.as_str()));
            }
            if !is_identifier(&setter) {
                return Err(GeneratorError::InvalidType {
                    endpoint: endpoint.name.clone(),
                    ty: arg.ty.to_string(),
                    reason: format!("setter name '{setter}' is not a valid identifier"),
                });
            }
            if let Some(first) = setters.insert(setter.clone(), &arg.name) {
                return Err(collision(setter, first, &arg.name));
            }
        }
    }
    Ok(())
}

fn validate_types(endpoint: &Endpoint) -> Result<(), GeneratorError> {
    for arg in &endpoint.arguments {
        match &arg.ty {
            ArgType::List(ty) | ArgType::Object(ty) => {
                parse_type(&endpoint.name, ty)?;
            }
            ArgType::Text | ArgType::Boolean | ArgType::Integer => {}
        }
    }
    if endpoint.has_return() {
        parse_type(&endpoint.name, &endpoint.return_type)?;
    }
    Ok(())
}
