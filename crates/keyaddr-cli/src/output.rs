//! Rendering derived addresses as text lines or JSON.

use std::io::Write;

use keyaddr_core::AddressType;
use serde::Serialize;

use crate::error::CliError;

/// One derived address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub address: String,
}

impl AddressRecord {
    pub fn new(address_type: AddressType, address: String) -> Self {
        AddressRecord {
            kind: address_type.name(),
            address,
        }
    }
}

/// Write one `[<type> addr]: <address>` line per record, or a JSON array.
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[AddressRecord],
    json: bool,
) -> Result<(), CliError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, records)?;
        writeln!(out)?;
    } else {
        for record in records {
            writeln!(out, "[{} addr]: {}", record.kind, record.address)?;
        }
    }
    out.flush()?;
    Ok(())
}
