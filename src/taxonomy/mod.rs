//! Skill Taxonomy
//!
//! Skills form a tree identified by dotted codes: `python.django` is the
//! child of `python`. The taxonomy owns every skill in a flat table keyed
//! by code; a skill stores its parent as a plain code and child lists are
//! a derived index, so the tree carries no ownership cycles. Once built,
//! a taxonomy is immutable and can be shared read-only across learners.

pub mod loader;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TrajectoryError};

/// One node of the competency tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Parent code, `None` for a category root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Skill {
    pub fn root(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
            parent: None,
        }
    }

    pub fn child(
        parent: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
            parent: Some(parent.into()),
        }
    }
}

/// Immutable skill tree with code-keyed lookup and derived child index.
#[derive(Debug, Clone, Default)]
pub struct SkillTaxonomy {
    skills: HashMap<String, Skill>,
    /// Codes in declaration order.
    order: Vec<String>,
    children: HashMap<String, Vec<String>>,
    roots: Vec<String>,
}

impl SkillTaxonomy {
    #[must_use]
    pub fn builder() -> TaxonomyBuilder {
        TaxonomyBuilder::new()
    }

    /// Look up a skill by code.
    pub fn resolve(&self, code: &str) -> Result<&Skill> {
        self.skills
            .get(code)
            .ok_or_else(|| TrajectoryError::UnknownSkill(code.to_string()))
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.skills.contains_key(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All skills in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.order.iter().filter_map(|code| self.skills.get(code))
    }

    /// Category roots in declaration order.
    #[must_use]
    pub fn roots(&self) -> Vec<&Skill> {
        self.roots
            .iter()
            .filter_map(|code| self.skills.get(code))
            .collect()
    }

    /// Direct children of a skill, in declaration order.
    pub fn children(&self, code: &str) -> Result<Vec<&Skill>> {
        self.resolve(code)?;
        Ok(self
            .children
            .get(code)
            .map(|codes| {
                codes
                    .iter()
                    .filter_map(|child| self.skills.get(child))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Ancestor names from the category root down to the skill itself.
    ///
    /// `python.django` with parent `python` named "Python" yields
    /// `["Python", "Django"]`.
    pub fn full_path(&self, code: &str) -> Result<Vec<&str>> {
        let mut path = Vec::new();
        let mut current = Some(self.resolve(code)?);
        while let Some(skill) = current {
            path.push(skill.name.as_str());
            current = match &skill.parent {
                Some(parent) => Some(self.resolve(parent)?),
                None => None,
            };
        }
        path.reverse();
        Ok(path)
    }

    /// `full_path` rendered as a single `A > B > C` string.
    pub fn path_string(&self, code: &str) -> Result<String> {
        Ok(self.full_path(code)?.join(" > "))
    }

    /// True iff `ancestor` appears on `code`'s parent chain. A skill is
    /// not its own descendant.
    pub fn is_descendant_of(&self, code: &str, ancestor: &str) -> Result<bool> {
        self.resolve(ancestor)?;
        let mut current = self.resolve(code)?;
        while let Some(parent) = &current.parent {
            if parent == ancestor {
                return Ok(true);
            }
            current = self.resolve(parent)?;
        }
        Ok(false)
    }

    /// The skill and every descendant, preorder, declaration order within
    /// each level.
    pub fn subtree(&self, code: &str) -> Result<Vec<&Skill>> {
        let root = self.resolve(code)?;
        let mut collected = Vec::new();
        self.collect_subtree(root, &mut collected);
        Ok(collected)
    }

    fn collect_subtree<'a>(&'a self, skill: &'a Skill, out: &mut Vec<&'a Skill>) {
        out.push(skill);
        if let Some(child_codes) = self.children.get(&skill.code) {
            for child in child_codes {
                if let Some(child_skill) = self.skills.get(child) {
                    self.collect_subtree(child_skill, out);
                }
            }
        }
    }

    /// Case-insensitive substring search over names and codes.
    #[must_use]
    pub fn find_by_name(&self, query: &str) -> Vec<&Skill> {
        let needle = query.to_lowercase();
        self.iter()
            .filter(|skill| {
                skill.name.to_lowercase().contains(&needle) || skill.code.contains(&needle)
            })
            .collect()
    }

    /// Per-category totals: each root's name with its subtree size
    /// (root included).
    #[must_use]
    pub fn category_sizes(&self) -> Vec<(&str, usize)> {
        self.roots()
            .iter()
            .map(|root| {
                let size = self
                    .subtree(&root.code)
                    .map(|nodes| nodes.len())
                    .unwrap_or(0);
                (root.name.as_str(), size)
            })
            .collect()
    }
}

/// Collects skill declarations, then validates the whole tree at once:
/// duplicate codes fail at insertion, parent links, cycles, and code
/// shape fail at `build`.
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    skills: Vec<Skill>,
    codes: HashSet<String>,
}

impl TaxonomyBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a skill declaration. Codes must be dotted sequences of
    /// `[a-z0-9_]+` segments and unique within the builder.
    pub fn insert(&mut self, skill: Skill) -> Result<()> {
        validate_code_syntax(&skill.code)?;
        if !self.codes.insert(skill.code.clone()) {
            return Err(TrajectoryError::DuplicateSkill(skill.code));
        }
        self.skills.push(skill);
        Ok(())
    }

    /// Validate parent references, reject ancestry cycles, enforce that
    /// every code extends its parent's code by exactly one segment, and
    /// freeze the result.
    pub fn build(self) -> Result<SkillTaxonomy> {
        let by_code: HashMap<&str, &Skill> = self
            .skills
            .iter()
            .map(|skill| (skill.code.as_str(), skill))
            .collect();

        for skill in &self.skills {
            if let Some(parent) = &skill.parent {
                if !by_code.contains_key(parent.as_str()) {
                    return Err(TrajectoryError::UnknownSkill(parent.clone()));
                }
            }
        }

        for skill in &self.skills {
            check_ancestry(skill, &by_code)?;
        }

        for skill in &self.skills {
            check_code_extends_parent(skill)?;
        }

        let mut taxonomy = SkillTaxonomy::default();
        for skill in self.skills {
            match &skill.parent {
                Some(parent) => taxonomy
                    .children
                    .entry(parent.clone())
                    .or_default()
                    .push(skill.code.clone()),
                None => taxonomy.roots.push(skill.code.clone()),
            }
            taxonomy.order.push(skill.code.clone());
            taxonomy.skills.insert(skill.code.clone(), skill);
        }

        debug!(
            skills = taxonomy.len(),
            roots = taxonomy.roots.len(),
            "skill taxonomy built"
        );
        Ok(taxonomy)
    }
}

fn validate_code_syntax(code: &str) -> Result<()> {
    if code.is_empty() {
        return Err(TrajectoryError::InvalidSkillCode {
            code: code.to_string(),
            reason: "code is empty".to_string(),
        });
    }
    for segment in code.split('.') {
        if segment.is_empty() {
            return Err(TrajectoryError::InvalidSkillCode {
                code: code.to_string(),
                reason: "empty dot-segment".to_string(),
            });
        }
        if !segment
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(TrajectoryError::InvalidSkillCode {
                code: code.to_string(),
                reason: format!("segment '{segment}' must be [a-z0-9_]+"),
            });
        }
    }
    Ok(())
}

/// Walk the parent chain of `skill`, failing on the first repeated code.
fn check_ancestry(skill: &Skill, by_code: &HashMap<&str, &Skill>) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::from([skill.code.as_str()]);
    let mut chain = vec![skill.code.clone()];
    let mut current = skill;

    while let Some(parent) = &current.parent {
        chain.push(parent.clone());
        if !seen.insert(parent.as_str()) {
            return Err(TrajectoryError::TaxonomyCycle {
                code: skill.code.clone(),
                cycle: chain,
            });
        }
        current = by_code[parent.as_str()];
    }
    Ok(())
}

fn check_code_extends_parent(skill: &Skill) -> Result<()> {
    match &skill.parent {
        Some(parent) => {
            let expected_prefix = format!("{parent}.");
            let tail = skill.code.strip_prefix(&expected_prefix);
            match tail {
                Some(segment) if !segment.is_empty() && !segment.contains('.') => Ok(()),
                _ => Err(TrajectoryError::InvalidSkillCode {
                    code: skill.code.clone(),
                    reason: format!("must extend parent '{parent}' by one dot-segment"),
                }),
            }
        }
        None if skill.code.contains('.') => Err(TrajectoryError::InvalidSkillCode {
            code: skill.code.clone(),
            reason: "nested code declares no parent".to_string(),
        }),
        None => Ok(()),
    }
}
