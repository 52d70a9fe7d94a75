use byteorder::{BE, ReadBytesExt, WriteBytesExt};
use std::io;

use super::{
    CommandType, CompareResponse, Header, NowResponse, ReadBytes, ReadFromBytes, Request,
    WriteBytes, WriteToBytes,
};
use crate::error::ParseError;
use crate::unix_time::UnixNanos;

// Writer implementations.

impl<W> WriteBytes for W
where
    W: WriteBytesExt,
{
    fn write_bytes<P: WriteToBytes>(&mut self, protocol: P) -> io::Result<()> {
        protocol.write_to_bytes(self)
    }
}

impl<P> WriteToBytes for &P
where
    P: WriteToBytes,
{
    fn write_to_bytes<W: WriteBytesExt>(&self, writer: W) -> io::Result<()> {
        (*self).write_to_bytes(writer)
    }
}

impl WriteToBytes for UnixNanos {
    fn write_to_bytes<W: WriteBytesExt>(&self, mut writer: W) -> io::Result<()> {
        writer.write_u64::<BE>(self.0)?;
        Ok(())
    }
}

impl WriteToBytes for Header {
    fn write_to_bytes<W: WriteBytesExt>(&self, mut writer: W) -> io::Result<()> {
        writer.write_u8(self.version)?;
        writer.write_u8(self.command.0)?;
        writer.write_u8(self.unsynchronized as u8)?;
        writer.write_u8(0)?;
        Ok(())
    }
}

impl WriteToBytes for Request {
    fn write_to_bytes<W: WriteBytesExt>(&self, mut writer: W) -> io::Result<()> {
        writer.write_bytes(Header::request(self.command()))?;
        if let Some(instant) = self.instant() {
            writer.write_bytes(instant)?;
        }
        Ok(())
    }
}

impl WriteToBytes for NowResponse {
    fn write_to_bytes<W: WriteBytesExt>(&self, mut writer: W) -> io::Result<()> {
        writer.write_bytes(self.header)?;
        writer.write_bytes(self.earliest)?;
        writer.write_bytes(self.latest)?;
        Ok(())
    }
}

impl WriteToBytes for CompareResponse {
    fn write_to_bytes<W: WriteBytesExt>(&self, mut writer: W) -> io::Result<()> {
        writer.write_bytes(self.header)?;
        writer.write_u8(self.result as u8)?;
        Ok(())
    }
}

// Reader implementations.

impl<R> ReadBytes for R
where
    R: ReadBytesExt,
{
    fn read_bytes<P: ReadFromBytes>(&mut self) -> io::Result<P> {
        P::read_from_bytes(self)
    }
}

impl ReadFromBytes for UnixNanos {
    fn read_from_bytes<R: ReadBytesExt>(mut reader: R) -> io::Result<Self> {
        Ok(UnixNanos(reader.read_u64::<BE>()?))
    }
}

impl ReadFromBytes for Header {
    fn read_from_bytes<R: ReadBytesExt>(mut reader: R) -> io::Result<Self> {
        let version = reader.read_u8()?;
        let command = CommandType(reader.read_u8()?);
        let unsynchronized = reader.read_u8()? != 0;
        let _reserved = reader.read_u8()?;
        Ok(Header {
            version,
            command,
            unsynchronized,
        })
    }
}

impl ReadFromBytes for Request {
    fn read_from_bytes<R: ReadBytesExt>(mut reader: R) -> io::Result<Self> {
        let header: Header = reader.read_bytes()?;
        let request = match header.command {
            CommandType::NOW => Request::Now,
            CommandType::BEFORE => Request::Before(reader.read_bytes()?),
            CommandType::AFTER => Request::After(reader.read_bytes()?),
            CommandType(code) => return Err(ParseError::UnknownCommand { code }.into()),
        };
        Ok(request)
    }
}

impl ReadFromBytes for NowResponse {
    fn read_from_bytes<R: ReadBytesExt>(mut reader: R) -> io::Result<Self> {
        let header = reader.read_bytes()?;
        let earliest = reader.read_bytes()?;
        let latest = reader.read_bytes()?;
        Ok(NowResponse {
            header,
            earliest,
            latest,
        })
    }
}

impl ReadFromBytes for CompareResponse {
    fn read_from_bytes<R: ReadBytesExt>(mut reader: R) -> io::Result<Self> {
        let header = reader.read_bytes()?;
        let result = reader.read_u8()? != 0;
        Ok(CompareResponse { header, result })
    }
}
