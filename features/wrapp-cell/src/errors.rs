use std::sync::Arc;

use thiserror::Error;

use crate::types::{DependencyInfo, DynError, TypeInfo};

/// Errors when registering a constructor with a container
///
/// Cells pass these on unchanged.
#[derive(Error, Debug, Clone)]
pub enum ProvideError {
    /// The constructor's signature can not be provided
    #[error("Cannot provide '{constructor}': {reason}")]
    InvalidSignature {
        constructor: String,
        reason: &'static str,
    },
    /// Another constructor already provides the type
    #[error("Cannot provide '{constructor}': '{type_info}' already provided by '{existing}'")]
    AlreadyProvided {
        constructor: String,
        type_info: TypeInfo,
        existing: String,
    },
    /// The container refused the constructor for its own reasons
    #[error("Cannot provide '{constructor}': {error}")]
    Rejected {
        constructor: String,
        error: Arc<DynError>,
    },
}

#[derive(Error, Debug, Clone)]
pub enum GraphError {
    #[error("'{required_by}' needs '{dependency}' but it is missing")]
    MissingDependency {
        dependency: DependencyInfo,
        required_by: TypeInfo,
    },
    #[error("Circular Dependency between '{from}' and '{to}' through {}", format_chain(.chain))]
    CircularDependency {
        from: TypeInfo,
        to: TypeInfo,
        chain: Vec<TypeInfo>,
    },
}

fn format_chain(chain: &[TypeInfo]) -> String {
    chain
        .iter()
        .map(|info| info.type_name)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// All issues found while checking a dependency graph
#[derive(Error, Debug, Clone)]
pub struct GraphErrors {
    pub errors: Vec<GraphError>,
}
impl std::fmt::Display for GraphErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut display = Vec::new();
        display.push("The dependency graph had one or more errors:".to_string());
        for error in &self.errors {
            display.push(format!("- {}", error));
        }
        f.write_str(&display.join("\n"))
    }
}
