//! Push channel subscription.
//!
//! Connects to the server's `/ws` endpoint and yields decoded
//! [`PushEvent`]s. Non-text frames are skipped; a close frame ends the
//! stream.

use std::fmt;

use futures::StreamExt;
use jeevansetu_types::PushEvent;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, info};

use crate::error::ViewerError;

/// An open push channel.
pub struct PushSubscription {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl PushSubscription {
    /// Connect to a push channel URL such as `ws://localhost:5000/ws`.
    pub async fn connect(url: &str) -> Result<Self, ViewerError> {
        let (stream, _response) = tokio_tungstenite::connect_async(url)
            .await
            .map_err(|e| ViewerError::WebSocket(format!("connect to {url} failed: {e}")))?;
        info!(url, "Push channel connected");
        Ok(Self { stream })
    }

    /// Wait for the next event.
    ///
    /// Returns `None` once the server closes the channel. A frame that
    /// fails to decode is returned as an error without ending the stream.
    pub async fn next_event(&mut self) -> Option<Result<PushEvent, ViewerError>> {
        loop {
            match self.stream.next().await? {
                Ok(Message::Close(_)) => {
                    debug!("Push channel closed by server");
                    return None;
                }
                Ok(message) => {
                    if let Some(event) = decode_frame(&message) {
                        return Some(event);
                    }
                }
                Err(e) => return Some(Err(ViewerError::WebSocket(e.to_string()))),
            }
        }
    }

    /// Close the channel.
    pub async fn close(mut self) {
        if let Err(e) = self.stream.close(None).await {
            debug!("Push channel close failed: {e}");
        }
    }
}

impl fmt::Debug for PushSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushSubscription").finish_non_exhaustive()
    }
}

/// Decode one frame. `None` for frames that carry no event.
pub fn decode_frame(message: &Message) -> Option<Result<PushEvent, ViewerError>> {
    match message {
        Message::Text(text) => Some(serde_json::from_str(text.as_str()).map_err(ViewerError::from)),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use jeevansetu_types::Snapshot;

    use super::*;

    #[test]
    fn decodes_alert_frame() {
        let frame = Message::text(r#"{"event":"alert","payload":"✅ System Reset Successfully"}"#);
        let event = decode_frame(&frame).unwrap().unwrap();
        assert_eq!(
            event,
            PushEvent::Alert(String::from("✅ System Reset Successfully"))
        );
    }

    #[test]
    fn decodes_update_frame() {
        let json = serde_json::to_string(&PushEvent::UpdateData(Snapshot::initial())).unwrap();
        let event = decode_frame(&Message::text(json)).unwrap().unwrap();
        assert_eq!(event, PushEvent::UpdateData(Snapshot::initial()));
    }

    #[test]
    fn malformed_text_is_a_decode_error() {
        let result = decode_frame(&Message::text(r#"{"event":"unknown"}"#)).unwrap();
        assert!(matches!(result, Err(ViewerError::Decode(_))));
    }

    #[test]
    fn control_frames_carry_no_event() {
        assert!(decode_frame(&Message::Ping(Vec::new().into())).is_none());
        assert!(decode_frame(&Message::binary(vec![1, 2, 3])).is_none());
    }
}
