//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Interactions are queued by the port and method they were recorded on.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Serves a cassette's interactions back in recorded order, with one queue
/// per port/method pair so unrelated calls do not disturb each other.
pub struct CassetteReplayer {
    queues: HashMap<PortMethodKey, VecDeque<Interaction>>,
    served: HashMap<PortMethodKey, u64>,
}

impl CassetteReplayer {
    /// Builds the per port/method queues from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().push_back(interaction.clone());
        }
        Self {
            queues,
            served: HashMap::new(),
        }
    }

    /// Takes the next interaction recorded for `port::method`.
    ///
    /// # Errors
    ///
    /// Returns a message if the cassette never recorded this port/method
    /// pair, or if every interaction for it has already been served. The
    /// message lists what the cassette does contain.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<Interaction, String> {
        let key = PortMethodKey {
            port: port.to_string(),
            method: method.to_string(),
        };

        let Some(queue) = self.queues.get_mut(&key) else {
            let mut available: Vec<String> = self
                .queues
                .keys()
                .map(|k| format!("{}::{}", k.port, k.method))
                .collect();
            available.sort();
            return Err(format!(
                "Cassette exhausted: no interactions recorded for {port}::{method}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            ));
        };

        let served = self.served.entry(key).or_insert(0);
        let Some(interaction) = queue.pop_front() else {
            return Err(format!(
                "Cassette exhausted: all {served} interactions for {port}::{method} \
                 have been consumed"
            ));
        };
        *served += 1;
        Ok(interaction)
    }
}
