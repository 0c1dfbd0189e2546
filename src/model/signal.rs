use std::collections::HashMap;

use super::attribute::AttributeValue;

/// Byte order of a signal's bit layout, as carried by the `@0`/`@1` token.
/// The DBC convention is inverted from the plain-English reading: `1`
/// means little-endian (Intel), `0` means big-endian (Motorola).
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum SignalByteOrder {
    LittleEndian,
    BigEndian,
}

/// A signal's numeric representation. `Float32`/`Float64` only arise from
/// a `SIG_VALTYPE_` override; the base grammar only ever yields `Signed`
/// or `Unsigned`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum SignalValueType {
    Unsigned,
    Signed,
    Float32,
    Float64,
}

/// A signal (`SG_`) nested within a message.
#[derive(PartialEq, Debug, Clone)]
pub struct DbcSignal {
    pub name: String,
    pub start_bit: u32,
    pub size: u32,
    pub byte_order: SignalByteOrder,
    pub value_type: SignalValueType,
    pub factor: f64,
    pub offset: f64,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub unit: String,
    pub receivers: Vec<String>,
    pub description: Option<String>,
    pub attribute_values: HashMap<String, AttributeValue>,
    /// Per-node attribute values (`BU_SG_REL_`), keyed by attribute name
    /// then by the node the value was assigned for.
    pub node_attribute_values: HashMap<String, HashMap<String, AttributeValue>>,
    pub value_descriptions: Vec<(i64, String)>,
}

impl DbcSignal {
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute_values.contains_key(name)
    }

    pub fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attribute_values.get(name)
    }

    pub fn has_node_attribute(&self, name: &str) -> bool {
        self.node_attribute_values.contains_key(name)
    }

    pub fn get_node_attribute(&self, name: &str) -> Option<&HashMap<String, AttributeValue>> {
        self.node_attribute_values.get(name)
    }
}
