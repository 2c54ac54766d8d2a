//! Statement model tests: rendering and accessors

use rust_ddlparser::report::{render_script, Summary};
use rust_ddlparser::{parse_ddl, QualifiedName, StatementKind};

#[test]
fn test_render_each_kind() {
    let ddl = parse_ddl(
        "-- c\n\
         CREATE DATABASE DB1 CCSID UNICODE;\n\
         CREATE TABLESPACE TS1 IN DB1 USING STOGROUP SG1 LOCKSIZE ROW;\n\
         CREATE TABLE T1 (A INT);\n\
         CREATE INDEX I1 ON T1 (A);\n\
         CREATE VIEW V1 AS SELECT A FROM T1;\n\
         ALTER TABLE T1 ADD B INT;\n\
         SET SCHEMA S1;",
    )
    .unwrap();

    let rendered: Vec<String> = ddl.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "comment(c)",
            "database(DB1){CCSID=UNICODE}",
            "tablespace(TS1 in DB1 using SG1){LOCKSIZE=ROW}",
            "table(TABLE T1 (A INT))",
            "index(INDEX I1 ON T1 (A))",
            "view(VIEW V1 AS SELECT A FROM T1)",
            "alter(TABLE T1 ADD B INT)",
            "set(SCHEMA S1)",
        ]
    );
}

#[test]
fn test_structural_filter_matches_render() {
    let ddl = parse_ddl("-- a\nSET X = 1;\n-- b\nSET Y = 2;\n").unwrap();
    assert_eq!(ddl.structural().count(), 2);
    assert_eq!(render_script(&ddl, false).lines().count(), 2);
    assert_eq!(render_script(&ddl, true).lines().count(), 4);
}

#[test]
fn test_summary_counts_every_kind() {
    let ddl = parse_ddl("CREATE DATABASE D1;\nCREATE DATABASE D2;\nALTER TABLE T ADD C;").unwrap();
    let summary = Summary::of(&ddl);
    assert_eq!(summary.count(StatementKind::Database), 2);
    assert_eq!(summary.count(StatementKind::Alter), 1);
    assert_eq!(
        StatementKind::ALL.iter().map(|k| summary.count(*k)).sum::<usize>(),
        ddl.len()
    );
}

#[test]
fn test_names_are_unscoped_identifiers() {
    let ddl = parse_ddl("CREATE TABLESPACE TS1 IN DB1 USING STOGROUP SG1;").unwrap();
    let name = ddl[0].name().unwrap();
    assert_eq!(name, &QualifiedName::new("TS1"));
    assert!(name.scope.is_none());
    assert!(!name.name.is_empty());
}
