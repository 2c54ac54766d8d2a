//! Statement data model

mod ddl;
mod statement;

pub use ddl::Ddl;
pub use statement::{Parameters, QualifiedName, Statement, StatementKind};
