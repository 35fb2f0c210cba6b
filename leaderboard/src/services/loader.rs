//! Instance loading from JSON and DIMACS CNF files
//!
//! JSON files carry a `kind` tag:
//! - `{"kind":"sat","clauses":[[1,-2],[2]]}`
//! - `{"kind":"knapsack","capacity":5,"items":[{"weight":2,"value":3}]}`
//!
//! Files ending in `.cnf` are parsed as DIMACS. The `p cnf` header counts are
//! informational; the variable count is still derived from the literals.

use std::path::Path;

use serde::Deserialize;
use shared::ProblemKind;
use tracing::warn;

use crate::core::{Clause, KnapsackInstance, KnapsackItem, SatInstance};
use crate::error::{LeaderboardError, LeaderboardResult};

/// A loaded instance of either problem kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceDefinition {
    Sat(SatInstance),
    Knapsack(KnapsackInstance),
}

impl InstanceDefinition {
    pub fn kind(&self) -> ProblemKind {
        match self {
            InstanceDefinition::Sat(_) => ProblemKind::Sat,
            InstanceDefinition::Knapsack(_) => ProblemKind::Knapsack,
        }
    }

    /// Short human description for startup logs
    pub fn describe(&self) -> String {
        match self {
            InstanceDefinition::Sat(sat) => format!(
                "sat instance with {} variables and {} clauses",
                sat.variable_count(),
                sat.clause_count()
            ),
            InstanceDefinition::Knapsack(knapsack) => format!(
                "knapsack instance with {} items and capacity {}",
                knapsack.item_count(),
                knapsack.capacity()
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum InstanceFile {
    Sat { clauses: Vec<Clause> },
    Knapsack { capacity: u64, items: Vec<KnapsackItem> },
}

/// Load an instance file, picking the format from the extension
pub async fn load_instance(path: &Path) -> LeaderboardResult<InstanceDefinition> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| load_error(path, e))?;

    let is_dimacs = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cnf"));

    let result = if is_dimacs {
        parse_dimacs(&text).map(InstanceDefinition::Sat)
    } else {
        parse_instance_json(&text)
    };
    result.map_err(|e| load_error(path, e))
}

fn load_error(path: &Path, reason: impl std::fmt::Display) -> LeaderboardError {
    LeaderboardError::InstanceLoadError {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Parse the tagged JSON instance format
pub fn parse_instance_json(text: &str) -> LeaderboardResult<InstanceDefinition> {
    match serde_json::from_str::<InstanceFile>(text)? {
        InstanceFile::Sat { clauses } => Ok(InstanceDefinition::Sat(SatInstance::new(clauses)?)),
        InstanceFile::Knapsack { capacity, items } => Ok(InstanceDefinition::Knapsack(
            KnapsackInstance::new(items, capacity),
        )),
    }
}

/// Parse a DIMACS CNF formula
pub fn parse_dimacs(text: &str) -> LeaderboardResult<SatInstance> {
    let mut declared: Option<(usize, usize)> = None;
    let mut clauses: Vec<Clause> = Vec::new();
    let mut current: Clause = Vec::new();

    for (line_index, raw) in text.lines().enumerate() {
        let line_no = line_index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        // SATLIB files end with a '%' marker
        if line.starts_with('%') {
            break;
        }
        if line.starts_with('p') {
            if declared.is_some() {
                return Err(LeaderboardError::invalid_instance(format!(
                    "line {line_no}: duplicate problem header"
                )));
            }
            declared = Some(parse_header(line, line_no)?);
            continue;
        }
        if declared.is_none() {
            return Err(LeaderboardError::invalid_instance(format!(
                "line {line_no}: clause before problem header"
            )));
        }

        for token in line.split_whitespace() {
            let literal: i64 = token.parse().map_err(|_| {
                LeaderboardError::invalid_instance(format!("line {line_no}: bad literal {token:?}"))
            })?;
            if literal == 0 {
                clauses.push(std::mem::take(&mut current));
            } else {
                current.push(literal);
            }
        }
    }

    let Some((_, declared_clauses)) = declared else {
        return Err(LeaderboardError::invalid_instance("missing problem header"));
    };

    // Tolerate a missing terminator on the final clause
    if !current.is_empty() {
        clauses.push(current);
    }

    if clauses.len() != declared_clauses {
        warn!(
            "DIMACS header declares {} clauses but {} were read",
            declared_clauses,
            clauses.len()
        );
    }

    SatInstance::new(clauses)
}

fn parse_header(line: &str, line_no: usize) -> LeaderboardResult<(usize, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        ["p", "cnf", vars, clauses] => {
            let vars = vars.parse().ok();
            let clauses = clauses.parse().ok();
            vars.zip(clauses).ok_or_else(|| {
                LeaderboardError::invalid_instance(format!("line {line_no}: bad header counts"))
            })
        }
        _ => Err(LeaderboardError::invalid_instance(format!(
            "line {line_no}: expected 'p cnf <vars> <clauses>'"
        ))),
    }
}
