//! End-to-end scenarios against the public `parse_text` entry point.

use rdbc_network::model::{
    AttributeValue, EnvironmentVariableAccessType, EnvironmentVariableType, SignalByteOrder, SignalValueType,
};
use rdbc_network::parse_text;

#[test]
fn e1_message_with_two_signals() {
    let dbc = parse_text(
        r#"VERSION "1.0"
BU_: NODE1

BO_ 123 MESSAGE1: 8 NODE1
 SG_ SIGNAL11 : 0|8@1+ (1,0) [0|0] "" NODE1
 SG_ SIGNAL12 : 8|8@1+ (1,0) [0|0] "" NODE1
"#,
    )
    .unwrap();

    let message = dbc.get_message(123).unwrap();
    assert_eq!(message.id, 123);
    assert_eq!(message.name, "MESSAGE1");
    assert_eq!(message.size, 8);
    assert_eq!(message.get_signals().len(), 2);
    assert_eq!(message.transmitter, "NODE1");
}

#[test]
fn e2_envvar_with_multiple_access_nodes() {
    let dbc = parse_text(
        r#"VERSION "1.0"
BU_: NODE1 NODE2

EV_ EVAR1: 0 [-10|10] "UNIT" 0 1 DUMMY_NODE_VECTOR0 NODE1,NODE2;
"#,
    )
    .unwrap();

    let ev = dbc.get_environment_variable("EVAR1").unwrap();
    assert_eq!(ev.access_nodes, vec!["NODE1".to_string(), "NODE2".to_string()]);
    assert_eq!(ev.access_type, EnvironmentVariableAccessType::Unrestricted);
    assert_eq!(ev.env_type, EnvironmentVariableType::Integer);
    assert_eq!(ev.initial_value, 0.0);
    assert_eq!(ev.id, 1);
}

#[test]
fn e3_comment_overrides_version() {
    let dbc = parse_text(
        r#"VERSION "1.0"
BU_: NODE1

CM_ "COM_MATRIX";
"#,
    )
    .unwrap();

    assert_eq!(dbc.version, "COM_MATRIX");
}

#[test]
fn e4_signal_extended_type() {
    let dbc = parse_text(
        r#"VERSION "1.0"
BU_: NODE1

BO_ 123 MESSAGE1: 8 NODE1
 SG_ SIGNAL11 : 0|32@1+ (1,0) [0|0] "" NODE1

SIG_VALTYPE_ 123 SIGNAL11 : 2;
"#,
    )
    .unwrap();

    let signal = dbc.get_message(123).unwrap().get_signal("SIGNAL11").unwrap();
    assert_eq!(signal.value_type, SignalValueType::Float64);
}

#[test]
fn e5_duplicate_ba_rel_tolerated() {
    let dbc = parse_text(
        r#"VERSION "1.0"
BU_: NODE1

BO_ 123 MESSAGE1: 8 NODE1
 SG_ SIGNAL11 : 0|8@1+ (1,0) [0|0] "" NODE1

BA_DEF_REL_ BU_SG_REL_ "ATTR" INT 0 10000;
BA_REL_ "ATTR" BU_SG_REL_ NODE1 SG_ 123 SIGNAL11 3000;
BA_REL_ "ATTR" BU_SG_REL_ NODE1 SG_ 123 SIGNAL11 3000;
"#,
    )
    .unwrap();

    let signal = dbc.get_message(123).unwrap().get_signal("SIGNAL11").unwrap();
    let per_node = signal.get_node_attribute("ATTR").unwrap();
    assert_eq!(per_node.get("NODE1"), Some(&AttributeValue::Integer(3000)));
}

#[test]
fn e6_value_table_with_duplicated_labels() {
    let dbc = parse_text(
        r#"VERSION "1.0"
BU_: NODE1

VAL_TABLE_ vtname 1 "LABEL1" 2 "LABEL2" 3 "Not used" 4 "Not used";
"#,
    )
    .unwrap();

    let table = dbc.get_value_table("vtname").unwrap();
    assert_eq!(
        table.values,
        vec![
            (1, "LABEL1".to_string()),
            (2, "LABEL2".to_string()),
            (3, "Not used".to_string()),
            (4, "Not used".to_string()),
        ]
    );
}

#[test]
fn signal_round_trip_decodes_every_field() {
    let dbc = parse_text(
        r#"VERSION "1.0"
BU_: NODE1 NODE2 NODE3

BO_ 123 MESSAGE1: 8 NODE1
 SG_ SIGNAL11 : 3|12@0- (0.5,10) [-100|100] "degC" NODE2,NODE3
"#,
    )
    .unwrap();

    let signal = dbc.get_message(123).unwrap().get_signal("SIGNAL11").unwrap();
    assert_eq!(signal.start_bit, 3);
    assert_eq!(signal.size, 12);
    assert_eq!(signal.byte_order, SignalByteOrder::BigEndian);
    assert_eq!(signal.value_type, SignalValueType::Signed);
    assert_eq!(signal.factor, 0.5);
    assert_eq!(signal.offset, 10.0);
    assert_eq!(signal.minimum, Some(-100.0));
    assert_eq!(signal.maximum, Some(100.0));
    assert_eq!(signal.unit, "degC");
    assert_eq!(signal.receivers, vec!["NODE2".to_string(), "NODE3".to_string()]);
}

#[test]
fn attribute_schema_default_and_value_bind_together() {
    let dbc = parse_text(
        r#"VERSION "1.0"
BU_: NODE1

BO_ 123 MESSAGE1: 8 NODE1

BA_DEF_ BO_ "A" INT 0 0;
BA_DEF_DEF_ "A" 0;
BA_ "A" BO_ 123 7;
"#,
    )
    .unwrap();

    let message = dbc.get_message(123).unwrap();
    assert_eq!(message.get_attribute("A"), Some(&AttributeValue::Integer(7)));

    let schema = dbc.get_attribute_definition("A").unwrap();
    assert_eq!(schema.default, Some(AttributeValue::Integer(0)));
}

#[test]
fn envvar_data_promotes_type_regardless_of_original_code() {
    let dbc = parse_text(
        r#"VERSION "1.0"
BU_: NODE1

EV_ EVAR1: 0 [0|0] "" 0 1 DUMMY_NODE_VECTOR0 NODE1;

ENVVAR_DATA_ EVAR1 : 4;
"#,
    )
    .unwrap();

    let ev = dbc.get_environment_variable("EVAR1").unwrap();
    assert_eq!(ev.env_type, EnvironmentVariableType::Data);
    assert_eq!(ev.data_size, Some(4));
}

#[test]
fn duplicate_node_is_rejected() {
    let err = parse_text(
        r#"VERSION "1.0"
BU_: NODE1 NODE1
"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        rdbc_network::DbcError::DuplicateEntity { kind: "node", .. }
    ));
}

#[test]
fn malformed_source_is_a_syntax_error() {
    let err = parse_text("this is not a dbc file").unwrap_err();
    assert!(matches!(err, rdbc_network::DbcError::Syntax(_)));
}
