use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

/// Upper bound on violations quoted in one error message.
const MAX_REPORTED_ERRORS: usize = 20;

static LINK_DUMP_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/link_dump_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid link dump schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile link dump schema")
});

static PAGE_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/page_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid page schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile page schema")
});

static LINK_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/link_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid link schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile link schema")
});

fn check(schema: &JSONSchema, value: &Value, what: &str) -> Result<()> {
    match schema.validate(value) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors
                .take(MAX_REPORTED_ERRORS)
                .map(|e| format!("{} at {}", e, e.instance_path))
                .collect();
            Err(anyhow!(
                "{what} validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

/// Validate the top-level shape of a link dump document
pub fn validate_link_dump(dump: &Value) -> Result<()> {
    check(&LINK_DUMP_SCHEMA, dump, "Link dump")
}

/// Validate one row of the page table
pub fn validate_page_item(page: &Value) -> Result<()> {
    check(&PAGE_SCHEMA, page, "Page item")
}

/// Validate one row of the link table
pub fn validate_link_item(link: &Value) -> Result<()> {
    check(&LINK_SCHEMA, link, "Link item")
}

/// Validate the document and every page and link row in it
pub fn validate_all_dump_items(dump: &Value) -> Result<()> {
    validate_link_dump(dump)?;

    if let Some(pages) = dump.get("pages").and_then(Value::as_array) {
        for (i, page) in pages.iter().enumerate() {
            validate_page_item(page).map_err(|e| anyhow!("pages[{i}]: {e}"))?;
        }
    }

    if let Some(links) = dump.get("links").and_then(Value::as_array) {
        for (i, link) in links.iter().enumerate() {
            validate_link_item(link).map_err(|e| anyhow!("links[{i}]: {e}"))?;
        }
    }

    Ok(())
}
