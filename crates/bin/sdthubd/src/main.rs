//! # sdthubd — sdthub bootstrap daemon
//!
//! Composition root that builds the module registry and wire schemas.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Construct the process-scoped [`ModuleRegistry`] and register the
//!   home-domain catalog (base descriptors + announcement mirrors)
//! - Build the wire [`SchemaRegistry`](sdthub_codec::SchemaRegistry)
//! - Optionally dump the descriptor catalog for discovery tooling
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use sdthub_codec::home::home_schema_registry;
use sdthub_domain::descriptor::Descriptor;
use sdthub_domain::home::register_home_modules;
use sdthub_domain::registry::ModuleRegistry;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Registration happens here, single-threaded, before anything reads.
    let mut modules = ModuleRegistry::new(config.registry.prefix.clone());
    register_home_modules(&mut modules)?;
    let schemas = home_schema_registry(&modules)?;

    tracing::info!(
        prefix = modules.prefix(),
        descriptors = modules.len(),
        schemas = schemas.len(),
        "module registry ready"
    );

    if config.discovery.dump_catalog {
        let mut catalog: Vec<&Descriptor> = modules.descriptors().collect();
        catalog.sort_by(|a, b| a.long_name().cmp(b.long_name()));
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    }

    Ok(())
}
