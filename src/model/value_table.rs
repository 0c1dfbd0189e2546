/// A named `VAL_TABLE_` value-to-label mapping. Duplicate values are kept
/// as-is, in declaration order, mirroring the raw DBC text.
#[derive(PartialEq, Debug, Clone)]
pub struct DbcValueTable {
    pub name: String,
    pub values: Vec<(i64, String)>,
}
