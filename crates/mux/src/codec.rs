//! Length-delimited protobuf framing over a blocking stream transport.
//!
//! Protocol messages travel as protobuf payloads prefixed with their
//! varint-encoded length, the framing the consensus host uses on its
//! application socket.

use std::io::{Read, Write};

use bytes::{Buf, BytesMut};
use prost::Message;

use crate::error::Error;

/// Size of the chunks read from the underlying stream.
const READ_CHUNK_SIZE: usize = 4096;

/// Longest possible varint length prefix.
const MAX_VARINT_LEN: usize = 10;

/// Frames protobuf messages over a blocking stream.
pub struct Framed<S> {
    stream: S,
    read_buf: BytesMut,
}

impl<S: Read + Write> Framed<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            read_buf: BytesMut::new(),
        }
    }

    /// Writes a single length-delimited message and flushes the stream.
    pub fn send<M: Message>(&mut self, message: &M) -> Result<(), Error> {
        let mut wire = Vec::with_capacity(message.encoded_len() + MAX_VARINT_LEN);
        message
            .encode_length_delimited(&mut wire)
            .map_err(Error::encode)?;
        self.stream.write_all(&wire).map_err(Error::io)?;
        self.stream.flush().map_err(Error::io)?;
        Ok(())
    }

    /// Reads the next length-delimited message, blocking until one full
    /// message is available. Returns `None` once the peer closes the stream.
    pub fn receive<M: Message + Default>(&mut self) -> Result<Option<M>, Error> {
        let mut chunk = [0; READ_CHUNK_SIZE];
        loop {
            if let Some(message) = self.decode_buffered()? {
                return Ok(Some(message));
            }

            let bytes_read = self.stream.read(&mut chunk).map_err(Error::io)?;
            if bytes_read == 0 {
                // EOF
                return Ok(None);
            }
            self.read_buf.extend_from_slice(&chunk[..bytes_read]);
        }
    }

    /// Attempts to decode one message from the bytes buffered so far.
    fn decode_buffered<M: Message + Default>(&mut self) -> Result<Option<M>, Error> {
        let buffered = self.read_buf.len();
        let mut peek = self.read_buf.clone().freeze();

        let message_len = match prost::encoding::decode_varint(&mut peek) {
            Ok(len) => len,
            // A length prefix longer than the longest valid varint cannot
            // complete with more input.
            Err(e) if buffered >= MAX_VARINT_LEN => return Err(Error::decode(e)),
            Err(_) => return Ok(None),
        };
        if (peek.remaining() as u64) < message_len {
            return Ok(None);
        }

        let prefix_len = buffered - peek.remaining();
        self.read_buf.advance(prefix_len);
        let mut frame = self.read_buf.split_to(message_len as usize);
        let message = M::decode(&mut frame).map_err(Error::decode)?;
        Ok(Some(message))
    }
}

#[cfg(test)]
mod tests {
    use std::os::unix::net::UnixStream;

    use cometmux_proto::tendermint::abci::{request, Request, RequestEcho, RequestInfo};

    use super::*;

    #[test]
    fn frames_survive_a_socket_pair() {
        let (left, right) = UnixStream::pair().unwrap();
        let mut sender = Framed::new(left);
        let mut receiver = Framed::new(right);

        let requests = vec![
            Request {
                value: Some(request::Value::Echo(RequestEcho {
                    message: "hello".to_string(),
                })),
            },
            Request {
                value: Some(request::Value::Info(RequestInfo {
                    version: "v1.0.0".to_string(),
                    block_version: 11,
                    p2p_version: 8,
                    abci_version: "2.0.0".to_string(),
                })),
            },
        ];

        for request in &requests {
            sender.send(request).unwrap();
        }

        for request in &requests {
            let received: Request = receiver.receive().unwrap().unwrap();
            assert_eq!(&received, request);
        }
    }

    #[test]
    fn receive_reports_end_of_stream() {
        let (left, right) = UnixStream::pair().unwrap();
        drop(left);
        let mut receiver = Framed::new(right);
        let received: Option<Request> = receiver.receive().unwrap();
        assert!(received.is_none());
    }
}
