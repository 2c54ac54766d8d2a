//! Recursive-descent recognizer for DDL scripts
//!
//! A script is a sequence of `--` line comments and `;`-terminated
//! statements. Statement kinds are tried in a fixed order; the first keyword
//! that matches commits the recognizer to that kind, and any failure inside it
//! aborts the whole parse.

use tracing::{debug, trace};

use super::cursor::Cursor;
use crate::error::{Failure, Malformed, ParseError};
use crate::model::{Ddl, Parameters, QualifiedName, Statement};

/// Characters of remaining input reported with a parse failure.
pub const LOOKAHEAD: usize = 75;

/// Characters of remaining input shown in per-statement trace events.
const TRACE_PEEK: usize = 50;

const TERMINATOR: &str = ";";
const PARAMETER_SEPARATOR: char = ' ';

/// A keyword and the literal forms it may take in the script.
#[derive(Debug, Clone, Copy)]
struct Keyword {
    name: &'static str,
    forms: &'static [&'static str],
}

const CREATE: Keyword = Keyword {
    name: "CREATE",
    forms: &["CREATE ", "CREATE\n"],
};
const DATABASE: Keyword = Keyword {
    name: "DATABASE",
    forms: &["DATABASE ", "DATABASE\n"],
};
const TABLESPACE: Keyword = Keyword {
    name: "TABLESPACE",
    forms: &["TABLESPACE ", "TABLESPACE\n"],
};
const ALTER: Keyword = Keyword {
    name: "ALTER",
    forms: &["ALTER ", "ALTER\n"],
};
const SET: Keyword = Keyword {
    name: "SET",
    forms: &["SET ", "SET\n"],
};
const IN: Keyword = Keyword {
    name: "IN",
    forms: &["IN"],
};
const USING_STOGROUP: Keyword = Keyword {
    name: "USING STOGROUP",
    forms: &["USING STOGROUP"],
};

impl Keyword {
    fn consume(self, cursor: &mut Cursor) -> bool {
        self.forms.iter().any(|form| cursor.consume(form))
    }

    fn expect(self, cursor: &mut Cursor) -> Result<(), Malformed> {
        if self.consume(cursor) {
            Ok(())
        } else {
            Err(Malformed::MissingKeyword(self.name))
        }
    }
}

/// Outcome of trying one alternative.
///
/// `Failed` means the leading keyword matched but the rest of the statement
/// did not; it is distinct from `Unmatched`, which lets the next alternative
/// be tried.
#[derive(Debug)]
enum Recognition {
    Matched(Statement),
    Unmatched,
    Failed(Malformed),
}

type Handler = fn(&mut Cursor) -> Result<Statement, Malformed>;

/// A keyword predicate paired with the handler that recognizes the rest of
/// the statement once the keyword has been consumed.
struct Rule {
    keyword: Keyword,
    handler: Handler,
}

impl Rule {
    fn attempt(&self, cursor: &mut Cursor) -> Recognition {
        if !self.keyword.consume(cursor) {
            return Recognition::Unmatched;
        }
        match (self.handler)(cursor) {
            Ok(statement) => Recognition::Matched(statement),
            Err(malformed) => Recognition::Failed(malformed),
        }
    }
}

/// Top-level statement kinds, in priority order, each with the failure
/// reported when its keyword matched but the statement could not be completed.
const STATEMENT_RULES: &[(Rule, fn(Malformed) -> Failure)] = &[
    (
        Rule {
            keyword: CREATE,
            handler: create_body,
        },
        Failure::CreateStatement,
    ),
    (
        Rule {
            keyword: ALTER,
            handler: alter_body,
        },
        Failure::Statement,
    ),
    (
        Rule {
            keyword: SET,
            handler: set_body,
        },
        Failure::Statement,
    ),
];

/// Structured CREATE kinds, in priority order. Anything else after `CREATE`
/// is captured opaquely.
const CREATE_RULES: &[Rule] = &[
    Rule {
        keyword: DATABASE,
        handler: create_database_body,
    },
    Rule {
        keyword: TABLESPACE,
        handler: create_tablespace_body,
    },
];

/// Evaluate `rules` in order and stop at the first one whose keyword matched.
fn dispatch(rules: &[Rule], cursor: &mut Cursor) -> Recognition {
    rules
        .iter()
        .map(|rule| rule.attempt(cursor))
        .find(|recognition| !matches!(recognition, Recognition::Unmatched))
        .unwrap_or(Recognition::Unmatched)
}

/// Parse a complete DDL script into its statements.
///
/// Fails on the first statement that cannot be recognized; the statements
/// recognized before it are returned inside the error.
pub fn parse_ddl(text: &str) -> Result<Ddl, ParseError> {
    let mut cursor = Cursor::new(text);
    let mut ddl = Ddl::new();

    loop {
        cursor.skip_leading_whitespace();
        if cursor.is_empty() {
            break;
        }
        trace!(
            remaining = cursor.len(),
            "parsing: {} [...]",
            cursor.peek(TRACE_PEEK)
        );

        let start = cursor.offset();
        let step = match recognize_comment(&mut cursor) {
            Some(comment) => Ok(comment),
            None => recognize_statement(&mut cursor),
        };

        match step {
            Ok(statement) => {
                debug!(kind = %statement.kind(), "recognized statement");
                ddl.push(statement);
            }
            Err(failure) => {
                let lookahead = cursor.peek_from(start, LOOKAHEAD).to_string();
                debug!(%failure, %lookahead, "Failed to parse DDL! Aborting..");
                return Err(ParseError {
                    failure,
                    lookahead,
                    recognized: ddl,
                });
            }
        }
    }

    Ok(ddl)
}

/// `-- text` up to the end of the line. A comment on the last line needs no
/// trailing newline.
fn recognize_comment(cursor: &mut Cursor) -> Option<Statement> {
    if !cursor.consume("--") {
        return None;
    }
    let body = match cursor.consume_up_to("\n") {
        Some(body) => {
            cursor.consume("\n");
            body
        }
        None => cursor.consume_rest(),
    };
    Some(Statement::Comment { body })
}

fn recognize_statement(cursor: &mut Cursor) -> Result<Statement, Failure> {
    for (rule, failure) in STATEMENT_RULES {
        match rule.attempt(cursor) {
            Recognition::Unmatched => continue,
            Recognition::Matched(statement) => return Ok(statement),
            Recognition::Failed(malformed) => {
                let failure = failure(malformed);
                debug!(%failure, keyword = rule.keyword.name, "statement rejected");
                return Err(failure);
            }
        }
    }
    debug!("Failed to parse Statement!");
    Err(Failure::Unrecognized)
}

fn create_body(cursor: &mut Cursor) -> Result<Statement, Malformed> {
    match dispatch(CREATE_RULES, cursor) {
        Recognition::Matched(statement) => Ok(statement),
        Recognition::Failed(malformed) => Err(malformed),
        Recognition::Unmatched => create_opaque_body(cursor),
    }
}

fn create_database_body(cursor: &mut Cursor) -> Result<Statement, Malformed> {
    let name = identifier(cursor, "database")?;
    let parameters = parameters(cursor)?;
    Ok(Statement::CreateDatabase {
        name: QualifiedName::new(name),
        parameters,
    })
}

fn create_tablespace_body(cursor: &mut Cursor) -> Result<Statement, Malformed> {
    let name = identifier(cursor, "tablespace")?;
    IN.expect(cursor)?;
    let database = identifier(cursor, "database")?;
    USING_STOGROUP.expect(cursor)?;
    let storage_group = identifier(cursor, "storage group")?;
    let parameters = parameters(cursor)?;
    Ok(Statement::CreateTablespace {
        name: QualifiedName::new(name),
        database: QualifiedName::new(database),
        storage_group,
        parameters,
    })
}

/// Any other CREATE statement, kept verbatim including the kind keyword.
///
/// The variant is chosen by the first `TABLE`, `INDEX` or `VIEW` among the
/// words before the body proper starts (`(`, `ON` or `AS`), so `UNIQUE INDEX`,
/// `AUXILIARY TABLE` and `UNIQUE WHERE NOT NULL INDEX` are covered. Kinds
/// without a dedicated variant (`STOGROUP`, `ALIAS`, `LOB TABLESPACE`, ...)
/// become [`Statement::CreateOther`].
fn create_opaque_body(cursor: &mut Cursor) -> Result<Statement, Malformed> {
    let raw_body = body(cursor)?;
    let kind = raw_body
        .split_whitespace()
        .take_while(|word| !word.starts_with('(') && !matches!(*word, "ON" | "AS"))
        .find(|word| matches!(*word, "TABLE" | "INDEX" | "VIEW"));

    Ok(match kind {
        Some("TABLE") => Statement::CreateTable { raw_body },
        Some("INDEX") => Statement::CreateIndex { raw_body },
        Some("VIEW") => Statement::CreateView { raw_body },
        _ => Statement::CreateOther { raw_body },
    })
}

fn alter_body(cursor: &mut Cursor) -> Result<Statement, Malformed> {
    let raw_body = body(cursor)?;
    Ok(Statement::Alter { raw_body })
}

fn set_body(cursor: &mut Cursor) -> Result<Statement, Malformed> {
    let raw_body = body(cursor)?;
    Ok(Statement::Set { raw_body })
}

/// Everything up to the terminator, which is consumed as well.
fn body(cursor: &mut Cursor) -> Result<String, Malformed> {
    let text = cursor
        .consume_up_to(TERMINATOR)
        .ok_or(Malformed::Unterminated(TERMINATOR))?;
    cursor.consume(TERMINATOR);
    Ok(text)
}

fn identifier(cursor: &mut Cursor, what: &'static str) -> Result<String, Malformed> {
    cursor.consume_id().ok_or(Malformed::MissingIdentifier(what))
}

fn parameters(cursor: &mut Cursor) -> Result<Parameters, Malformed> {
    cursor
        .consume_dictionary(TERMINATOR, PARAMETER_SEPARATOR)
        .ok_or(Malformed::Unterminated(TERMINATOR))
}
