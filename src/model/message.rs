use std::collections::HashMap;

use super::attribute::AttributeValue;
use super::signal::DbcSignal;
use super::signal_group::DbcSignalGroup;

/// A message (`BO_`), owning its signals by name.
#[derive(PartialEq, Debug, Clone)]
pub struct DbcMessage {
    pub id: u32,
    pub name: String,
    pub size: u32,
    pub transmitter: String,
    pub description: Option<String>,
    signals: Vec<DbcSignal>,
    signals_by_name: HashMap<String, usize>,
    pub attribute_values: HashMap<String, AttributeValue>,
    pub signal_groups: Vec<DbcSignalGroup>,
}

impl DbcMessage {
    pub fn new(id: u32, name: String, size: u32, transmitter: String) -> Self {
        Self {
            id,
            name,
            size,
            transmitter,
            description: None,
            signals: Vec::new(),
            signals_by_name: HashMap::new(),
            attribute_values: HashMap::new(),
            signal_groups: Vec::new(),
        }
    }

    /// Adds a signal, returning its own name back as an error if a signal
    /// with that name is already attached to this message.
    pub fn add_signal(&mut self, signal: DbcSignal) -> Result<(), String> {
        if self.signals_by_name.contains_key(&signal.name) {
            return Err(signal.name);
        }
        self.signals_by_name.insert(signal.name.clone(), self.signals.len());
        self.signals.push(signal);
        Ok(())
    }

    pub fn get_signal(&self, name: &str) -> Option<&DbcSignal> {
        self.signals_by_name.get(name).map(|&i| &self.signals[i])
    }

    pub fn get_signal_mut(&mut self, name: &str) -> Option<&mut DbcSignal> {
        let index = *self.signals_by_name.get(name)?;
        Some(&mut self.signals[index])
    }

    pub fn get_signals(&self) -> &[DbcSignal] {
        &self.signals
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute_values.contains_key(name)
    }

    pub fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attribute_values.get(name)
    }
}
