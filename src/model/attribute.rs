use std::fmt;

/// Which entity, or node-relation, a `BA_DEF_`/`BA_DEF_REL_` schema applies to.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum AttributeObjectType {
    Global,
    Node,
    Message,
    Signal,
    EnvironmentVariable,
    NodeMessage,
    NodeSignal,
    NodeEnvironmentVariable,
}

/// The type spec declared by a schema: bounds for the numeric kinds, the
/// label set for `ENUM`, nothing extra for `STRING`.
#[derive(PartialEq, Debug, Clone)]
pub enum AttributeValueType {
    Integer { minimum: i32, maximum: i32 },
    Hex { minimum: i32, maximum: i32 },
    Float { minimum: f64, maximum: f64 },
    Enum { labels: Vec<String> },
    String,
}

/// A decoded attribute value, as carried by a default or an assignment.
/// `INT`/`HEX` schemas decode to `Integer`, `FLOAT` to `Float`,
/// `STRING`/`ENUM` to `String`.
#[derive(PartialEq, Debug, Clone)]
pub enum AttributeValue {
    Integer(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Integer(v) => write!(f, "{v}"),
            AttributeValue::Float(v) => write!(f, "{v}"),
            AttributeValue::String(v) => write!(f, "{v}"),
        }
    }
}

/// An attribute schema declared by `BA_DEF_`/`BA_DEF_REL_`, with its default
/// (if any) attached by a later `BA_DEF_DEF_`/`BA_DEF_DEF_REL_` pass.
#[derive(PartialEq, Debug, Clone)]
pub struct DbcAttribute {
    pub name: String,
    pub object_type: AttributeObjectType,
    pub value_type: AttributeValueType,
    pub default: Option<AttributeValue>,
}

impl DbcAttribute {
    pub fn new(name: String, object_type: AttributeObjectType, value_type: AttributeValueType) -> Self {
        Self {
            name,
            object_type,
            value_type,
            default: None,
        }
    }
}
