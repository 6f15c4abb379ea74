use std::env;

use methodgen_define::Catalog;
use methodgen_gen::{FsSink, GeneratorConfig, GeneratorError, generate_and_write};

const CATALOG: &str = "endpoints.json";

fn main() -> Result<(), GeneratorError> {
    println!("cargo:rerun-if-changed={CATALOG}");

    let out_dir = env::var_os("OUT_DIR")
        .ok_or_else(|| GeneratorError::InvalidConfig("OUT_DIR is not set".to_string()))?;

    let catalog = Catalog::from_file(CATALOG)?;
    let config = GeneratorConfig::default()
        .with_catalog_label(CATALOG)
        .with_mod_file(false);

    generate_and_write(&catalog, &config, &mut FsSink::new(out_dir))?;
    Ok(())
}
