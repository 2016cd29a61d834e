//! Action execution - runs service calls and reports back as messages

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use cropyield_client::CropApi;
use cropyield_core::{PredictionRequest, RequestToken};

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task.
///
/// The task's completion message carries the action's token so the update
/// function can discard it if a newer request has started since.
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: Arc<A>)
where
    A: CropApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::SubmitPrediction { token, request } => {
            spawn_prediction(token, request, msg_tx, api);
        }
        UpdateAction::LoadDistricts { token } => {
            spawn_district_load(token, msg_tx, api);
        }
    }
}

fn spawn_prediction<A>(
    token: RequestToken,
    request: PredictionRequest,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<A>,
) where
    A: CropApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        debug!("Prediction task {} started", token);
        let result = api.predict(&request).await.map_err(|e| e.to_string());
        if msg_tx
            .send(Message::PredictionCompleted { token, result })
            .await
            .is_err()
        {
            warn!("Prediction {} finished after the message loop closed", token);
        }
    });
}

fn spawn_district_load<A>(token: RequestToken, msg_tx: mpsc::Sender<Message>, api: Arc<A>)
where
    A: CropApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        debug!("District load task {} started", token);
        let result = api.list_districts().await.map_err(|e| e.to_string());
        if msg_tx
            .send(Message::DistrictsLoaded { token, result })
            .await
            .is_err()
        {
            warn!("District load {} finished after the message loop closed", token);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropyield_client::test_utils::{test_record, test_result, FakeCropApi};
    use cropyield_core::{Error, RequestLifecycle};

    fn request() -> PredictionRequest {
        PredictionRequest {
            nitrogen: "90".into(),
            phosphorous: "42".into(),
            potassium: "43".into(),
            ph: "6.5".into(),
            area: "2".into(),
            crop: "Rice".into(),
            region: "West Bengal".into(),
        }
    }

    #[tokio::test]
    async fn test_prediction_completion_carries_token() {
        let api = Arc::new(FakeCropApi::new().with_prediction(Ok(test_result(4.2))));
        let (tx, mut rx) = mpsc::channel(4);
        let token = RequestLifecycle::<()>::new().begin();

        handle_action(
            UpdateAction::SubmitPrediction {
                token,
                request: request(),
            },
            tx,
            api.clone(),
        );

        match rx.recv().await {
            Some(Message::PredictionCompleted { token: t, result }) => {
                assert_eq!(t, token);
                assert!(result.is_ok());
            }
            other => panic!("unexpected message {:?}", other),
        }
        assert_eq!(api.predict_calls(), 1);
        assert_eq!(api.received_requests(), vec![request()]);
    }

    #[tokio::test]
    async fn test_district_failure_becomes_message_text() {
        let api = Arc::new(FakeCropApi::new().with_districts(Err(Error::http_status(
            500,
            "Failed to fetch district data (status 500)",
        ))));
        let (tx, mut rx) = mpsc::channel(4);
        let token = RequestLifecycle::<()>::new().begin();

        handle_action(UpdateAction::LoadDistricts { token }, tx, api);

        match rx.recv().await {
            Some(Message::DistrictsLoaded { result, .. }) => {
                assert_eq!(
                    result.unwrap_err(),
                    "Failed to fetch district data (status 500)"
                );
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_district_success_passes_records() {
        let api = Arc::new(FakeCropApi::new().with_districts(Ok(vec![test_record("Nadia", "Rice")])));
        let (tx, mut rx) = mpsc::channel(4);
        let token = RequestLifecycle::<()>::new().begin();

        handle_action(UpdateAction::LoadDistricts { token }, tx, api);

        match rx.recv().await {
            Some(Message::DistrictsLoaded { result, .. }) => {
                assert_eq!(result.unwrap()[0].name, "Nadia");
            }
            other => panic!("unexpected message {:?}", other),
        }
    }
}
