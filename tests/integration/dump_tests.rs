//! End-to-end tests for the dump and check entry points

use pretty_assertions::assert_eq;
use rust_ddlparser::{check_scripts, dump_scripts, DdlError, DumpOptions, Failure};

use crate::common::{create_ddl_file, fixture_path};

fn options_for(paths: Vec<std::path::PathBuf>) -> DumpOptions {
    DumpOptions {
        paths,
        ..DumpOptions::default()
    }
}

#[test]
fn test_dump_sample_schema() {
    let options = options_for(vec![fixture_path("sample_schema")]);
    let mut out = Vec::new();

    let scripts = dump_scripts(&options, &mut out).unwrap();
    assert_eq!(scripts.len(), 2, "README.txt must not be picked up");

    let output = String::from_utf8(out).unwrap();
    let statement_lines: Vec<&str> = output.lines().filter(|l| !l.starts_with("-- ")).collect();
    assert_eq!(
        statement_lines,
        vec![
            "set(CURRENT SQLID = 'DBAORD')",
            "database(DBORD01){BUFFERPOOL=BP1,CCSID=EBCDIC,INDEXBP=BP2,STOGROUP=SGORD01}",
            "tablespace(TSORD01 in DBORD01 using SGORD01){BUFFERPOOL=BP1,LOCKSIZE=PAGE,PRIQTY=720,SECQTY=720}",
            "table(TABLE DBAORD.ORDERS (ORDER_ID INTEGER NOT NULL, CUSTOMER_ID INTEGER NOT NULL, PLACED_AT TIMESTAMP NOT NULL WITH DEFAULT, PRIMARY KEY (ORDER_ID)) IN DBORD01.TSORD01)",
            "index(UNIQUE INDEX DBAORD.IXORD01 ON DBAORD.ORDERS (ORDER_ID ASC) USING STOGROUP SGORD01)",
            "view(VIEW DBAORD.VORDERS AS SELECT ORDER_ID, CUSTOMER_ID FROM DBAORD.ORDERS)",
            "alter(TABLE DBAORD.ORDERS ADD FOREIGN KEY (CUSTOMER_ID) REFERENCES DBAORD.CUSTOMERS)",
        ]
    );

    let headers = output.lines().filter(|l| l.starts_with("-- ")).count();
    assert_eq!(headers, 2);
}

#[test]
fn test_dump_single_script_has_no_header() {
    let file = create_ddl_file("-- only\nSET X = 1;\n");
    let options = DumpOptions {
        paths: vec![file.path().to_path_buf()],
        include_comments: true,
        ..DumpOptions::default()
    };
    let mut out = Vec::new();

    dump_scripts(&options, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "comment(only)\nset(X = 1)\n");
}

#[test]
fn test_check_sample_schema() {
    let options = options_for(vec![fixture_path("sample_schema")]);
    let mut out = Vec::new();

    check_scripts(&options, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("database.ddl: 5 statements (comment=2, database=1, tablespace=1, set=1)"));
    assert!(lines[1].ends_with(
        "orders.ddl: 5 statements (comment=1, table=1, index=1, view=1, alter=1)"
    ));
}

#[test]
fn test_broken_schema_fails_with_diagnostic() {
    let options = options_for(vec![fixture_path("broken_schema")]);
    let mut out = Vec::new();

    let err = check_scripts(&options, &mut out).unwrap_err();
    assert!(out.is_empty(), "nothing is reported for a failed run");

    let Some(DdlError::ScriptParseError { path, source }) = err.downcast_ref::<DdlError>() else {
        panic!("expected a parse error, got {:?}", err);
    };
    assert!(path.ends_with("broken.ddl"));
    assert!(matches!(source.failure, Failure::Statement(_)));
    assert!(source.lookahead.starts_with("ALTER TABLE DBBRK.T1 ADD COLUMN C1 INTEGER"));
    assert_eq!(source.recognized.len(), 2);
}

#[test]
fn test_custom_pattern_selects_no_scripts() {
    let options = DumpOptions {
        paths: vec![fixture_path("sample_schema")],
        pattern: "*.sql".to_string(),
        ..DumpOptions::default()
    };
    let mut out = Vec::new();

    let scripts = dump_scripts(&options, &mut out).unwrap();
    assert!(scripts.is_empty());
    assert!(out.is_empty());
}
