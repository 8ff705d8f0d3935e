use eyre::Result;

/// Sequential reader of parsed records (table rows, matrix lines).
pub trait ReadRecord {
    type Record: Default;

    /// Parse the next record into `into`, reusing its allocation.
    /// Returns `false` once the input is exhausted.
    fn read_record(&mut self, into: &mut Self::Record) -> Result<bool>;

    /// Fill `into` from the start and return how many records were read.
    fn read_records(&mut self, into: &mut [Self::Record]) -> Result<usize> {
        let mut total = 0;
        for record in into.iter_mut() {
            if !self.read_record(record)? {
                break;
            }
            total += 1;
        }
        Ok(total)
    }

    /// Append every remaining record to `into` and return their number.
    fn read_to_end(&mut self, into: &mut Vec<Self::Record>) -> Result<usize> {
        let mut total = 0;
        loop {
            let mut record = Self::Record::default();
            if !self.read_record(&mut record)? {
                return Ok(total);
            }
            into.push(record);
            total += 1;
        }
    }
}

/// Sink of records, the counterpart of [`ReadRecord`].
pub trait WriteRecord {
    type Record;

    fn write_record(&mut self, record: &Self::Record) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}
