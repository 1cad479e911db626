// Chunked JSON streaming utilities
use crate::domain::stream::StreamMessage;
use crate::infrastructure::http_response::brotli_compress;
use axum::body::Body;
use axum::http::{Response, StatusCode, header};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::StreamExt;
use futures::stream::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

/// Create a chunked streaming response, one framed message per chunk
pub fn chunked_json_stream<S>(stream: S, compress: bool) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = StreamMessage> + Send + 'static,
{
    let byte_stream = stream.then(move |msg| async move { serialize_chunk(&msg, compress).await });

    // No Content-Encoding header: individual frames are compressed, not the body.
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/x-ndjson-framed")
        .header(header::TRANSFER_ENCODING, "chunked")
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Serialize a single message: 4-byte big-endian length, then the payload
pub async fn serialize_chunk(msg: &StreamMessage, compress: bool) -> std::io::Result<Bytes> {
    let json = serde_json::to_vec(msg)?;

    let payload = if compress {
        brotli_compress(&json).await?
    } else {
        json
    };

    let mut chunk = BytesMut::with_capacity(4 + payload.len());
    chunk.put_u32(payload.len() as u32);
    chunk.put_slice(&payload);

    Ok(chunk.freeze())
}

/// Helper to create a streaming response from a receiver
pub fn stream_from_receiver(rx: mpsc::Receiver<StreamMessage>, compress: bool) -> impl IntoResponse {
    match chunked_json_stream(ReceiverStream::new(rx), compress) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Split a framed body back into payloads. Returns `None` on a truncated frame.
#[cfg(test)]
pub fn split_frames(mut body: &[u8]) -> Option<Vec<Vec<u8>>> {
    let mut frames = Vec::new();
    while !body.is_empty() {
        let len_bytes: [u8; 4] = body.get(..4)?.try_into().ok()?;
        let len = u32::from_be_bytes(len_bytes) as usize;
        frames.push(body.get(4..4 + len)?.to_vec());
        body = &body[4 + len..];
    }
    Some(frames)
}
