use crate::error::ParseError;
use crate::unix_time::UnixNanos;

use super::{
    CommandType, CompareResponse, ConstPackedSizeBytes, FromBytes, Header, NowResponse, Request,
    ToBytes,
};

fn check_len(buf: &[u8], needed: usize) -> Result<(), ParseError> {
    if buf.len() < needed {
        return Err(ParseError::BufferTooShort {
            needed,
            available: buf.len(),
        });
    }
    Ok(())
}

// Parsing implementations.

impl FromBytes for UnixNanos {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError> {
        check_len(buf, Self::PACKED_SIZE_BYTES)?;
        let nanos = u64::from_be_bytes([
            buf[0], buf[1], buf[2], buf[3], buf[4], buf[5], buf[6], buf[7],
        ]);
        Ok((UnixNanos(nanos), Self::PACKED_SIZE_BYTES))
    }
}

impl FromBytes for Header {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError> {
        check_len(buf, Self::PACKED_SIZE_BYTES)?;
        // buf[3] is reserved.
        let header = Header {
            version: buf[0],
            command: CommandType(buf[1]),
            unsynchronized: buf[2] != 0,
        };
        Ok((header, Self::PACKED_SIZE_BYTES))
    }
}

impl FromBytes for Request {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError> {
        let (header, offset) = Header::from_bytes(buf)?;
        match header.command {
            CommandType::NOW => Ok((Request::Now, offset)),
            CommandType::BEFORE | CommandType::AFTER => {
                let (instant, n) = UnixNanos::from_bytes(&buf[offset..])?;
                let request = if header.command == CommandType::BEFORE {
                    Request::Before(instant)
                } else {
                    Request::After(instant)
                };
                Ok((request, offset + n))
            }
            CommandType(code) => Err(ParseError::UnknownCommand { code }),
        }
    }
}

impl FromBytes for NowResponse {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError> {
        check_len(buf, Self::PACKED_SIZE_BYTES)?;
        let (header, mut offset) = Header::from_bytes(buf)?;
        let (earliest, n) = UnixNanos::from_bytes(&buf[offset..])?;
        offset += n;
        let (latest, n) = UnixNanos::from_bytes(&buf[offset..])?;
        offset += n;
        Ok((
            NowResponse {
                header,
                earliest,
                latest,
            },
            offset,
        ))
    }
}

impl NowResponse {
    /// Parse a complete Now response datagram.
    ///
    /// Unlike [`FromBytes::from_bytes`], which accepts trailing bytes, the datagram must be
    /// exactly 20 bytes long; anything else is [`ParseError::InvalidLength`].
    pub fn decode_exact(datagram: &[u8]) -> Result<NowResponse, ParseError> {
        if datagram.len() != Self::PACKED_SIZE_BYTES {
            return Err(ParseError::InvalidLength {
                expected: Self::PACKED_SIZE_BYTES,
                actual: datagram.len(),
            });
        }
        NowResponse::from_bytes(datagram).map(|(response, _)| response)
    }
}

impl FromBytes for CompareResponse {
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), ParseError> {
        check_len(buf, Self::PACKED_SIZE_BYTES)?;
        let (header, offset) = Header::from_bytes(buf)?;
        let response = CompareResponse {
            header,
            result: buf[offset] != 0,
        };
        Ok((response, Self::PACKED_SIZE_BYTES))
    }
}

// Serialization implementations.

impl ToBytes for UnixNanos {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError> {
        check_len(buf, Self::PACKED_SIZE_BYTES)?;
        buf[..Self::PACKED_SIZE_BYTES].copy_from_slice(&self.0.to_be_bytes());
        Ok(Self::PACKED_SIZE_BYTES)
    }
}

impl ToBytes for Header {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError> {
        check_len(buf, Self::PACKED_SIZE_BYTES)?;
        buf[0] = self.version;
        buf[1] = self.command.0;
        buf[2] = self.unsynchronized as u8;
        buf[3] = 0;
        Ok(Self::PACKED_SIZE_BYTES)
    }
}

impl ToBytes for Request {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError> {
        check_len(buf, self.packed_len())?;
        let mut offset = Header::request(self.command()).to_bytes(buf)?;
        if let Some(instant) = self.instant() {
            offset += instant.to_bytes(&mut buf[offset..])?;
        }
        Ok(offset)
    }
}

impl ToBytes for NowResponse {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError> {
        check_len(buf, Self::PACKED_SIZE_BYTES)?;
        let mut offset = self.header.to_bytes(buf)?;
        offset += self.earliest.to_bytes(&mut buf[offset..])?;
        offset += self.latest.to_bytes(&mut buf[offset..])?;
        Ok(offset)
    }
}

impl ToBytes for CompareResponse {
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, ParseError> {
        check_len(buf, Self::PACKED_SIZE_BYTES)?;
        let offset = self.header.to_bytes(buf)?;
        buf[offset] = self.result as u8;
        Ok(Self::PACKED_SIZE_BYTES)
    }
}
