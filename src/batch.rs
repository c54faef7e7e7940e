//! Streaming batch generation of payment codes from CSV.
//!
//! Each input row describes one payment request. Rows that fail to parse or
//! encode are logged and skipped; the rest are kept in input order.

use crate::config::MerchantConfig;
use crate::error::Result;
use crate::payload::assemble;
use crate::request::RequestRecord;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::{Read, Write};

/// A code produced for one input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    /// 1-indexed input row, counting the header as row 1.
    pub row: usize,

    /// Key exactly as it appeared in the input.
    pub key: String,

    /// The "Copia e Cola" payload.
    pub code: String,
}

/// Generates payment codes for every row of a CSV input.
pub struct BatchGenerator {
    config: MerchantConfig,
    codes: Vec<GeneratedCode>,
}

impl BatchGenerator {
    /// Creates a generator that applies `config` to every row.
    pub fn new(config: MerchantConfig) -> Self {
        BatchGenerator {
            config,
            codes: Vec::new(),
        }
    }

    /// Reads requests from a CSV reader in streaming fashion.
    ///
    /// Invalid rows are logged at warn level and skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<RequestRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => {
                    if let Err(e) = self.process_record(&record, row_num) {
                        warn!("Row {}: {}", row_num, e);
                    }
                }
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    fn process_record(&mut self, record: &RequestRecord, row: usize) -> Result<()> {
        let request = record.parse()?;
        let code = assemble(&request, &self.config)?;
        debug!("Row {}: Generated code for key {:?}", row, record.key);

        self.codes.push(GeneratedCode {
            row,
            key: record.key.clone(),
            code,
        });
        Ok(())
    }

    /// Returns the codes generated so far, in input order.
    pub fn codes(&self) -> &[GeneratedCode] {
        &self.codes
    }

    /// Writes `row,key,code` records to CSV in input order.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["row", "key", "code"])?;

        for generated in &self.codes {
            csv_writer.write_record([
                generated.row.to_string(),
                generated.key.clone(),
                generated.code.clone(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for BatchGenerator {
    fn default() -> Self {
        Self::new(MerchantConfig::default())
    }
}
