//! Debug script to see what the resolver produces for a small schema.
//!
//! Set `RUST_LOG=debug` to see every naming decision.

use tracing_subscriber::EnvFilter;
use ts_caligrapher::{ir, Caligrapher, CodegenConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let source = r#"[
        {
            "name": "Pet",
            "discriminator": "petType",
            "fields": [
                { "name": "petType", "property": { "kind": "scalar", "type": "string" } },
                { "name": "tags", "property": { "kind": "array", "items": { "kind": "model", "name": "tag" } } },
                { "name": "attributes", "property": { "kind": "map", "values": { "kind": "scalar", "type": "long" } } }
            ]
        },
        { "name": "Dog", "parent": "Pet", "fields": [{ "name": "packSize", "property": { "kind": "scalar", "type": "integer" } }] },
        { "name": "cat", "parent": "Pet", "fields": [{ "name": "photo", "property": { "kind": "file" } }] },
        { "name": "tag", "fields": [{ "name": "id", "property": { "kind": "scalar", "type": "UUID" } }] },
        { "name": "return", "imports": ["Pet"] },
        { "name": "200Response" }
    ]"#;

    let schema = match ir::parse_models(source) {
        Ok(schema) => schema,
        Err(e) => {
            println!("Error: {:?}", e);
            return;
        }
    };

    for tagged_unions in [false, true] {
        let caligrapher = Caligrapher::new(CodegenConfig {
            tagged_unions,
            ..Default::default()
        });
        let generated = caligrapher.generate(&schema);

        println!("taggedUnions = {}", tagged_unions);
        for warning in &generated.warnings {
            println!("  warning: {}", warning);
        }
        match serde_json::to_string_pretty(&generated.models) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("Error: {:?}", e),
        }
    }
}
