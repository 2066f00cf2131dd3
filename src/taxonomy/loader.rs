//! Nested-document loader for skill taxonomies.
//!
//! External catalogs deliver skills as a nested JSON tree of
//! `{name, code, description, children}` nodes. The loader flattens that
//! document into [`TaxonomyBuilder`] declarations, so every structural
//! rule (unique codes, parent links, code shape, no cycles) is enforced
//! in one place.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

use super::{Skill, SkillTaxonomy, TaxonomyBuilder};

/// Top-level taxonomy document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxonomyDoc {
    pub skills_tree: Vec<SkillNodeDoc>,
}

/// One node of the nested document; children nest in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillNodeDoc {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SkillNodeDoc>,
}

/// Parse a taxonomy from raw JSON.
pub fn from_json_str(raw: &str) -> Result<SkillTaxonomy> {
    let doc: TaxonomyDoc = serde_json::from_str(raw)?;
    from_doc(&doc)
}

/// Parse a taxonomy from a JSON file.
pub fn from_json_file(path: &Path) -> Result<SkillTaxonomy> {
    let raw = std::fs::read_to_string(path)?;
    let taxonomy = from_json_str(&raw)?;
    info!(
        path = %path.display(),
        skills = taxonomy.len(),
        "skill taxonomy loaded"
    );
    Ok(taxonomy)
}

/// Flatten a parsed document into a validated taxonomy.
pub fn from_doc(doc: &TaxonomyDoc) -> Result<SkillTaxonomy> {
    let mut builder = TaxonomyBuilder::new();
    for root in &doc.skills_tree {
        flatten(root, None, &mut builder)?;
    }
    builder.build()
}

fn flatten(node: &SkillNodeDoc, parent: Option<&str>, builder: &mut TaxonomyBuilder) -> Result<()> {
    builder.insert(Skill {
        code: node.code.clone(),
        name: node.name.clone(),
        description: node.description.clone(),
        parent: parent.map(String::from),
    })?;
    for child in &node.children {
        flatten(child, Some(&node.code), builder)?;
    }
    Ok(())
}
