//! Output assembly and file writing for generated code.
//!
//! Every unit is rendered in memory first: token streams are validated with
//! `syn`, formatted with `prettyplease` and prefixed with the generated-code
//! header. Only a complete [`GeneratedOutput`] is handed to an
//! [`OutputSink`].
//!
//! ## Output Structure
//!
//! ```text
//! out/
//! ├── services.rs       # One service type per group
//! ├── chat.rs           # One unit per namespace
//! ├── users_profile.rs  # `users.profile.*` endpoints
//! └── mod.rs            # Module declarations (optional)
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use methodgen_define::Catalog;
use proc_macro2::TokenStream;
use quote::quote;
use tracing::{debug, info, warn};

use crate::codegen::{CodegenContext, generate_services_unit, generate_unit};
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::naming::{is_path_keyword, rust_ident};
use crate::plan::Plan;
use crate::validation::validate_catalog;

/// Name of the unit holding every service type.
pub const SERVICES_UNIT: &str = "services";

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the output directory, e.g. `chat.rs`.
    pub name: String,
    pub content: String,
}

/// The complete, rendered result of one generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedOutput {
    pub files: Vec<GeneratedFile>,
}

impl GeneratedOutput {
    /// Returns the content of the file called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|file| file.name == name)
            .map(|file| file.content.as_str())
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|file| file.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Destination for generated files.
///
/// A sink receives the whole output at once so it can commit it as a unit.
pub trait OutputSink {
    /// ## Errors
    ///
    /// Returns `GeneratorError::WriteError` if the output cannot be stored.
    fn commit(&mut self, output: &GeneratedOutput) -> Result<(), GeneratorError>;
}

/// Writes generated files into a directory.
///
/// All files are first written next to their targets as `<name>.tmp`; only
/// when every temp file is in place are they renamed over the targets. If
/// a temp write fails, the temps written so far are removed and no target
/// is touched.
#[derive(Debug, Clone)]
pub struct FsSink {
    dir: PathBuf,
}

impl FsSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn remove_temps(temps: &[(PathBuf, PathBuf)]) {
        for (temp, _) in temps {
            if let Err(e) = fs::remove_file(temp) {
                warn!(path = %temp.display(), error = %e, "failed to remove temp file");
            }
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

impl OutputSink for FsSink {
    fn commit(&mut self, output: &GeneratedOutput) -> Result<(), GeneratorError> {
        fs::create_dir_all(&self.dir).map_err(|e| GeneratorError::WriteError {
            path: self.dir.display().to_string(),
            source: e,
        })?;

        let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(output.len());
        for file in &output.files {
            let target = self.dir.join(&file.name);
            let temp = temp_path(&target);
            if let Err(e) = fs::write(&temp, &file.content) {
                Self::remove_temps(&staged);
                return Err(GeneratorError::WriteError {
                    path: temp.display().to_string(),
                    source: e,
                });
            }
            staged.push((temp, target));
        }

        for (index, (temp, target)) in staged.iter().enumerate() {
            if let Err(e) = fs::rename(temp, target) {
                Self::remove_temps(&staged[index..]);
                return Err(GeneratorError::WriteError {
                    path: target.display().to_string(),
                    source: e,
                });
            }
            info!(path = %target.display(), "wrote generated unit");
        }

        Ok(())
    }
}

/// Keeps generated files in memory, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub files: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }
}

impl OutputSink for MemorySink {
    fn commit(&mut self, output: &GeneratedOutput) -> Result<(), GeneratorError> {
        for file in &output.files {
            self.files.insert(file.name.clone(), file.content.clone());
        }
        Ok(())
    }
}

/// Validates generated code using syn.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` naming `unit` if the code fails
/// to parse.
pub fn validate_code(unit: &str, tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone()).map_err(|e| GeneratorError::CodeGenError {
        unit: unit.to_string(),
        message: format!("Generated code is invalid: {}", e),
    })
}

/// Formats generated code using prettyplease, prepending the
/// generated-code header.
pub fn format_code(file: &syn::File, config: &GeneratorConfig) -> String {
    let formatted = prettyplease::unparse(file);
    format!("{}\n\n{}", header(config), formatted)
}

/// The first line of every generated file.
pub fn header(config: &GeneratorConfig) -> String {
    format!(
        "// Code generated by methodgen from {}. DO NOT EDIT.",
        config.catalog_label
    )
}

fn render(
    unit: &str,
    tokens: &TokenStream,
    config: &GeneratorConfig,
) -> Result<GeneratedFile, GeneratorError> {
    let file = validate_code(unit, tokens)?;
    Ok(GeneratedFile {
        name: format!("{unit}.rs"),
        content: format_code(&file, config),
    })
}

/// Assembles `mod.rs`: declares the services unit and every output unit.
///
/// Units named after `self`, `super` and the like cannot be declared under
/// their own name, so they get an escaped module name and a `#[path]`
/// pointing at the unit file.
pub fn assemble_mod_file(plan: &Plan<'_>, config: &GeneratorConfig) -> TokenStream {
    let services = rust_ident(SERVICES_UNIT);
    let units = plan.units.keys().map(|unit| {
        let module = rust_ident(unit);
        if is_path_keyword(unit) {
            let file = format!("{unit}.rs");
            quote! {
                #[path = #file]
                pub mod #module;
            }
        } else {
            quote! { pub mod #module; }
        }
    });
    let doc = format!(" Generated bindings for the `{}` catalog.", config.catalog_label);

    quote! {
        #![doc = #doc]

        pub mod #services;

        #(#units)*
    }
}

/// Renders every output file for `catalog`.
///
/// ## Errors
///
/// Returns an error if the configuration or catalog is invalid, or if the
/// generated code fails to parse.
pub fn generate(catalog: &Catalog, config: &GeneratorConfig) -> Result<GeneratedOutput, GeneratorError> {
    let ctx = CodegenContext::new(config)?;
    validate_catalog(catalog, config)?;
    let plan = Plan::new(catalog)?;
    debug!(
        endpoints = plan.method_count(),
        groups = plan.groups.len(),
        units = plan.units.len(),
        "generating bindings"
    );

    let mut files = Vec::with_capacity(plan.units.len() + 2);
    files.push(render(
        SERVICES_UNIT,
        &generate_services_unit(&ctx, &plan.groups),
        config,
    )?);

    for (unit, methods) in &plan.units {
        files.push(render(unit, &generate_unit(&ctx, methods)?, config)?);
    }

    if config.emit_mod_file {
        files.push(render("mod", &assemble_mod_file(&plan, config), config)?);
    }

    Ok(GeneratedOutput { files })
}

/// Renders every output file for `catalog` and commits them to `sink`.
///
/// Nothing reaches the sink unless every file rendered successfully.
///
/// ## Errors
///
/// Returns an error if generation fails or the sink cannot store the output.
pub fn generate_and_write(
    catalog: &Catalog,
    config: &GeneratorConfig,
    sink: &mut dyn OutputSink,
) -> Result<GeneratedOutput, GeneratorError> {
    let output = generate(catalog, config)?;
    sink.commit(&output)?;
    info!(files = output.len(), "generation complete");
    Ok(output)
}
