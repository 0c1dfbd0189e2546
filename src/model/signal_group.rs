/// A named, repeated grouping of signals (`SIG_GROUP_`) within one message.
#[derive(PartialEq, Debug, Clone)]
pub struct DbcSignalGroup {
    pub name: String,
    pub message_id: u32,
    pub repetitions: u32,
    pub signal_names: Vec<String>,
}
