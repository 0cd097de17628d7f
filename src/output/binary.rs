//! Binary result files.
//!
//! All integers are big-endian. A file starts with the `u32` vertex count, followed by
//! one record per analysed source, in completion order:
//!
//! ```text
//! u32 source | u32 eccentric vertex | i64 cost | i32 path length | length x u32 vertex
//! ```

use std::fmt::Debug;
use std::io::{ErrorKind, Read, Write};
use num_traits::{PrimInt, Signed};

use crate::output::record::ResultRecord;
use crate::{Error, Result};

fn vertex_id(vertex: usize) -> Result<u32> {
    u32::try_from(vertex).map_err(|_| Error::Encoding(format!("vertex {}", vertex)))
}

/// Writes the file header holding the vertex count
pub fn write_header<O: Write>(out: &mut O, vertices: usize) -> Result<()> {
    out.write_all(&vertex_id(vertices)?.to_be_bytes())?;
    Ok(())
}

/// Writes one record
pub fn write_record<W, O>(out: &mut O, record: &ResultRecord<W>) -> Result<()>
where
    W: PrimInt + Signed + Debug,
    O: Write,
{
    let cost = record
        .eccentricity
        .cost
        .to_i64()
        .ok_or_else(|| Error::Encoding(format!("cost {:?}", record.eccentricity.cost)))?;
    let length = i32::try_from(record.path.len())
        .map_err(|_| Error::Encoding(format!("path length {}", record.path.len())))?;

    // Encode to a buffer first so a failing id never leaves half a record behind.
    let mut buf = Vec::with_capacity(24 + 4 * record.path.len());
    buf.extend_from_slice(&vertex_id(record.source)?.to_be_bytes());
    buf.extend_from_slice(&vertex_id(record.eccentricity.node)?.to_be_bytes());
    buf.extend_from_slice(&cost.to_be_bytes());
    buf.extend_from_slice(&length.to_be_bytes());
    for &vertex in &record.path {
        buf.extend_from_slice(&vertex_id(vertex)?.to_be_bytes());
    }
    out.write_all(&buf)?;
    Ok(())
}

/// A record as stored in a result file
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EncodedRecord {
    pub source: u32,
    pub destination: u32,
    pub cost: i64,
    pub path: Vec<u32>,
}

impl EncodedRecord {
    /// Returns the encoded form of an in-memory record
    pub fn from_record<W>(record: &ResultRecord<W>) -> Result<Self>
    where
        W: PrimInt + Signed + Debug,
    {
        let mut buf = Vec::new();
        write_record(&mut buf, record)?;
        Self::read(&mut buf.as_slice())?.ok_or(Error::Truncated("empty record"))
    }

    /// Reads one record, or `None` at a clean end of stream
    fn read<R: Read>(reader: &mut R) -> Result<Option<Self>> {
        let mut head = [0u8; 4];
        match read_full(reader, &mut head)? {
            0 => return Ok(None),
            4 => {}
            _ => return Err(Error::Truncated("partial record source")),
        }
        let source = u32::from_be_bytes(head);

        let mut fixed = [0u8; 16];
        if read_full(reader, &mut fixed)? != fixed.len() {
            return Err(Error::Truncated("partial record header"));
        }
        let destination = u32::from_be_bytes([fixed[0], fixed[1], fixed[2], fixed[3]]);
        let mut cost = [0u8; 8];
        cost.copy_from_slice(&fixed[4..12]);
        let cost = i64::from_be_bytes(cost);
        let length = i32::from_be_bytes([fixed[12], fixed[13], fixed[14], fixed[15]]);
        let length =
            usize::try_from(length).map_err(|_| Error::Encoding(format!("path length {}", length)))?;

        let mut path = Vec::with_capacity(length);
        let mut vertex = [0u8; 4];
        for _ in 0..length {
            if read_full(reader, &mut vertex)? != vertex.len() {
                return Err(Error::Truncated("partial record path"));
            }
            path.push(u32::from_be_bytes(vertex));
        }

        Ok(Some(EncodedRecord {
            source,
            destination,
            cost,
            path,
        }))
    }
}

/// Reads as many bytes as possible, stopping early only at the end of the stream
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// A parsed result file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Vertex count from the header
    pub nodes: u32,
    /// Records, in file order
    pub records: Vec<EncodedRecord>,
}

impl OutputFile {
    /// Sorts the records by source, giving a form that does not depend on completion order
    pub fn sort_by_source(&mut self) {
        self.records.sort();
    }

    /// Serializes the file back to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.nodes.to_be_bytes());
        for record in &self.records {
            buf.extend_from_slice(&record.source.to_be_bytes());
            buf.extend_from_slice(&record.destination.to_be_bytes());
            buf.extend_from_slice(&record.cost.to_be_bytes());
            buf.extend_from_slice(&(record.path.len() as i32).to_be_bytes());
            for vertex in &record.path {
                buf.extend_from_slice(&vertex.to_be_bytes());
            }
        }
        buf
    }
}

/// Parses a whole result stream
pub fn read_output<R: Read>(mut reader: R) -> Result<OutputFile> {
    let mut header = [0u8; 4];
    if read_full(&mut reader, &mut header)? != header.len() {
        return Err(Error::Truncated("missing vertex count header"));
    }
    let nodes = u32::from_be_bytes(header);

    let mut records = Vec::new();
    while let Some(record) = EncodedRecord::read(&mut reader)? {
        records.push(record);
    }
    Ok(OutputFile { nodes, records })
}
