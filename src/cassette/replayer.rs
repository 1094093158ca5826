//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use serde_json::Value;

use super::format::{Cassette, Interaction};

/// Replays a cassette, one queue per `port::method` pair.
///
/// Each call must present the same input that was recorded, so a task that
/// diverges from the recorded session (for example by running the transfer
/// after a failed build) fails instead of silently consuming the wrong entry.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Creates a replayer over every interaction in the cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Takes the next interaction for `port::method`, checking its input.
    ///
    /// # Errors
    ///
    /// Returns an error if no interaction is left for the pair or if the
    /// recorded input differs from `input`.
    pub fn next_output(
        &mut self,
        port: &str,
        method: &str,
        input: &Value,
    ) -> Result<Value, String> {
        let queue = self
            .queues
            .get_mut(&(port.to_string(), method.to_string()))
            .filter(|q| !q.is_empty())
            .ok_or_else(|| {
                format!("Cassette exhausted: no interaction left for {port}::{method}")
            })?;

        let next = queue.front().map(|i| &i.input);
        if next != Some(input) {
            let recorded = next.map_or_else(String::new, Value::to_string);
            return Err(format!(
                "Cassette mismatch for {port}::{method}: recorded input {recorded}, got {input}"
            ));
        }
        queue
            .pop_front()
            .map(|i| i.output)
            .ok_or_else(|| format!("Cassette exhausted: no interaction left for {port}::{method}"))
    }

    /// Number of interactions not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        }
    }

    fn shell_run(seq: u64, program: &str, exit_code: i32) -> Interaction {
        Interaction {
            seq,
            port: "shell".into(),
            method: "run".into(),
            input: json!({"program": program, "args": []}),
            output: json!({"ok": {"exit_code": exit_code}}),
        }
    }

    #[test]
    fn serves_each_port_method_in_order() {
        let cassette = make_cassette(vec![
            shell_run(0, "cargo", 0),
            Interaction {
                seq: 1,
                port: "fs".into(),
                method: "is_file".into(),
                input: json!({"path": "target/release/web"}),
                output: json!(true),
            },
            shell_run(2, "rsync", 23),
        ]);
        let mut replayer = CassetteReplayer::new(&cassette);
        assert_eq!(replayer.remaining(), 3);

        let cargo = json!({"program": "cargo", "args": []});
        assert_eq!(
            replayer.next_output("shell", "run", &cargo).unwrap(),
            json!({"ok": {"exit_code": 0}})
        );
        let rsync = json!({"program": "rsync", "args": []});
        assert_eq!(
            replayer.next_output("shell", "run", &rsync).unwrap(),
            json!({"ok": {"exit_code": 23}})
        );
        assert_eq!(replayer.remaining(), 1);
    }

    #[test]
    fn mismatched_input_is_rejected_and_not_consumed() {
        let mut replayer = CassetteReplayer::new(&make_cassette(vec![shell_run(0, "cargo", 0)]));
        let err = replayer
            .next_output("shell", "run", &json!({"program": "rsync", "args": []}))
            .unwrap_err();
        assert!(err.contains("Cassette mismatch"));
        assert_eq!(replayer.remaining(), 1);
    }

    #[test]
    fn exhausted_pair_is_an_error() {
        let mut replayer = CassetteReplayer::new(&make_cassette(vec![]));
        let err = replayer.next_output("fs", "exists", &json!({"path": "logs"})).unwrap_err();
        assert!(err.contains("Cassette exhausted"));
    }
}
