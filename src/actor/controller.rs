//! Controller Actor - triggers the pipeline and collects its outcome

use tracing::{Level, event};

use crate::{
    actor::message::{ControllerMessage, DataStorageMessage},
    domain::{
        constant::controller,
        frequency::{TOP_N, WordFrequencies}
    },
    runtime::{Actor, ActorError, ActorRef}
};

/// Controller Actor State
#[derive(Debug, Default)]
pub struct ControllerState {
    /// First pipeline stage, known once `Run` arrives
    data_storage: Option<ActorRef<DataStorageMessage>>,
    /// Ranked outcome, set once `Result` arrives
    result:       Option<WordFrequencies>
}

impl ControllerState {
    /// The collected outcome. Only reachable after the Controller's thread was joined.
    pub fn into_result(self) -> Option<WordFrequencies> {
        self.result
    }
}

/// Controller Actor - owns the externally observable result
pub struct Controller;

impl Actor for Controller {
    type Msg = ControllerMessage;
    type State = ControllerState;

    fn name(&self) -> &'static str {
        "Controller"
    }

    fn pre_start(&self, _myself: &ActorRef<Self::Msg>) -> Self::State {
        ControllerState::default()
    }

    fn dispatch(
        &self,
        myself: &ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State
    ) -> Result<(), ActorError> {
        match message {
            ControllerMessage::Run { data_storage } => self.handle_run(myself, data_storage, state),
            ControllerMessage::Result { frequencies } => self.handle_result(myself, frequencies, state),
            ControllerMessage::Die => Ok(())
        }
    }
}

impl Controller {
    fn handle_run(
        &self,
        myself: &ActorRef<ControllerMessage>,
        data_storage: ActorRef<DataStorageMessage>,
        state: &mut ControllerState
    ) -> Result<(), ActorError> {
        if state.data_storage.is_some() {
            return Err(ActorError::protocol(self.name(), "Run received twice"));
        }

        data_storage.send(DataStorageMessage::SendWordFrequencies { receiver: myself.clone() });
        state.data_storage = Some(data_storage);

        event!(Level::DEBUG, event = controller::PIPELINE_TRIGGERED);
        Ok(())
    }

    fn handle_result(
        &self,
        myself: &ActorRef<ControllerMessage>,
        frequencies: Vec<(String, u64)>,
        state: &mut ControllerState
    ) -> Result<(), ActorError> {
        let data_storage = state
            .data_storage
            .as_ref()
            .ok_or_else(|| ActorError::protocol(self.name(), "Result received before Run"))?;

        let result: WordFrequencies = frequencies.into_iter().take(TOP_N).collect();
        event!(Level::DEBUG, event = controller::RESULT_RECEIVED, entries = result.len());
        state.result = Some(result);

        data_storage.stop();
        myself.stop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{ActorSystem, create_mailbox};

    #[test]
    fn test_run_triggers_data_storage_and_result_stops_everyone() {
        let system = ActorSystem::new();
        let controller = system.spawn(Controller).unwrap();
        let (data_storage, storage_mailbox) = create_mailbox::<DataStorageMessage>("storage");

        controller.send(ControllerMessage::Run { data_storage });
        controller.send(ControllerMessage::Result {
            frequencies: vec![("sat".to_string(), 2), ("cat".to_string(), 1)]
        });

        let result = controller.join().unwrap().into_result().unwrap();
        assert_eq!(result.get_index(0), Some((&"sat".to_string(), &2)));
        assert_eq!(result.get_index(1), Some((&"cat".to_string(), &1)));

        assert!(matches!(storage_mailbox.try_dequeue(), Some(DataStorageMessage::SendWordFrequencies { .. })));
        assert!(matches!(storage_mailbox.try_dequeue(), Some(DataStorageMessage::Die)));
        assert!(storage_mailbox.try_dequeue().is_none());
    }

    #[test]
    fn test_result_is_truncated_to_top_25() {
        let system = ActorSystem::new();
        let controller = system.spawn(Controller).unwrap();
        let (data_storage, _storage_mailbox) = create_mailbox::<DataStorageMessage>("storage");

        let frequencies = (0..40u64).rev().map(|i| (format!("w{}", i), i + 1)).collect();
        controller.send(ControllerMessage::Run { data_storage });
        controller.send(ControllerMessage::Result { frequencies });

        let result = controller.join().unwrap().into_result().unwrap();
        assert_eq!(result.len(), TOP_N);
        assert_eq!(result.get("w39"), Some(&40));
        assert!(result.get("w14").is_none());
    }

    #[test]
    fn test_result_before_run_fails_fast() {
        let system = ActorSystem::new();
        let controller = system.spawn(Controller).unwrap();

        controller.send(ControllerMessage::Result { frequencies: vec![] });

        let error = controller.join().unwrap_err();
        assert_eq!(error, ActorError::protocol("Controller", "Result received before Run"));
    }
}
