use quill_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `quill schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let Some(schema) = registry.get(&args.target) else {
        anyhow::bail!(
            "unknown schema target '{}'; available: {}",
            args.target,
            registry.list().join(", ")
        );
    };
    output(schema, flags.format)
}
