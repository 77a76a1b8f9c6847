//! Weather backend: async lookups for the interactive session.
//! Every submission runs on its own task; results come back via mpsc.

use std::sync::Arc;

use skycast_core::NetworkError;
use skycast_weather::{LookupError, RequestTicket, WeatherLookup, WeatherSnapshot};
use tokio::sync::mpsc::UnboundedSender;

/// Messages sent from async operations back to the session loop
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of one submission, tagged with its ticket
    FetchDone {
        ticket: RequestTicket,
        result: Result<WeatherSnapshot, LookupError>,
    },
}

/// Request a lookup for `ticket.query()` asynchronously.
/// Sends `FetchDone` on the channel when complete.
pub fn request_fetch(
    tx: &UnboundedSender<WeatherServiceMessage>,
    lookup: Arc<WeatherLookup>,
    ticket: RequestTicket,
) {
    let tx = tx.clone();
    let runtime = match tokio::runtime::Handle::try_current() {
        Ok(handle) => handle,
        Err(_) => {
            let _ = tx.send(WeatherServiceMessage::FetchDone {
                ticket,
                result: Err(LookupError::Transport(NetworkError::ConnectionFailed(
                    "async runtime not available".to_string(),
                ))),
            });
            return;
        }
    };

    runtime.spawn(async move {
        let result = lookup.fetch(ticket.query()).await;
        if tx.send(WeatherServiceMessage::FetchDone { ticket, result }).is_err() {
            tracing::debug!("Session closed before lookup finished");
        }
    });
}
