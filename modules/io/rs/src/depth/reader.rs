use crate::compression::decode;
use crate::ReadRecord;
use depthwin_core_rs::num::Float;
use eyre::{bail, ensure, eyre, Result, WrapErr};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::Path;

pub struct Reader<R, F> {
    reader: R,
    names: Vec<String>,
    buffer: String,
    line: usize,
    _phantom: PhantomData<F>,
}

impl Reader<(), ()> {
    /// Open a depth table. The compression is detected from the file extension or, failing that,
    /// from the file signature.
    pub fn from_path<F: Float>(
        path: impl AsRef<Path>,
    ) -> Result<Reader<BufReader<decode::Stream<File>>, F>> {
        let path = path.as_ref();
        let stream = decode::infer_from_path(path)?;
        Reader::new(BufReader::new(stream))
            .wrap_err_with(|| format!("Failed to read the header of {}", path.display()))
    }
}

impl<R: BufRead, F: Float> Reader<R, F> {
    /// Wrap the reader and consume the header line.
    pub fn new(reader: R) -> Result<Self> {
        let mut slf = Self {
            reader,
            names: Vec::new(),
            buffer: String::new(),
            line: 0,
            _phantom: PhantomData,
        };
        if !slf.next_line()? {
            bail!("Depth table is empty, expected a header line");
        }
        slf.names = slf.buffer.split_whitespace().map(str::to_owned).collect();
        Ok(slf)
    }

    /// Sample names from the header, in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    // Load the next non-blank line into the buffer
    fn next_line(&mut self) -> Result<bool> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(false);
            }
            self.line += 1;
            if !self.buffer.trim().is_empty() {
                return Ok(true);
            }
        }
    }
}

impl<R: BufRead, F: Float> ReadRecord for Reader<R, F> {
    type Record = Vec<F>;

    fn read_record(&mut self, into: &mut Self::Record) -> Result<bool> {
        if !self.next_line()? {
            return Ok(false);
        }

        into.clear();
        for field in self.buffer.split_whitespace() {
            let value = field
                .parse::<F>()
                .ok()
                .filter(|x| x.is_finite())
                .ok_or_else(|| eyre!("Non-numeric value '{field}' at line {}", self.line))?;
            into.push(value);
        }
        ensure!(
            into.len() == self.names.len(),
            "Line {} has {} fields, but the header has {} columns",
            self.line,
            into.len(),
            self.names.len()
        );
        Ok(true)
    }

    fn read_to_end(&mut self, into: &mut Vec<Self::Record>) -> Result<usize> {
        let mut total = 0;
        loop {
            let mut record = Vec::with_capacity(self.names.len());
            if !self.read_record(&mut record)? {
                return Ok(total);
            }
            into.push(record);
            total += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn test_whitespace_delimited() -> Result<()> {
        let text = "s1\ts2   s3\n1 2 3\n\n4\t5\t6.5\r\n  7 8 9  \n";
        let mut reader = Reader::<_, f64>::new(Cursor::new(text))?;
        assert_eq!(reader.names(), ["s1", "s2", "s3"]);

        let mut records = Vec::new();
        assert_eq!(reader.read_to_end(&mut records)?, 3);
        assert_eq!(
            records,
            vec![
                vec![1.0, 2.0, 3.0],
                vec![4.0, 5.0, 6.5],
                vec![7.0, 8.0, 9.0]
            ]
        );
        assert_eq!(reader.line, 5);
        assert_eq!(reader.read_to_end(&mut records)?, 0);
        Ok(())
    }

    #[test]
    fn test_read_records() -> Result<()> {
        let mut reader = Reader::<_, f32>::new(Cursor::new("a\n1\n2\n3\n"))?;
        let mut buffer = vec![Vec::new(); 2];
        assert_eq!(reader.read_records(&mut buffer)?, 2);
        assert_eq!(buffer, vec![vec![1.0], vec![2.0]]);
        assert_eq!(reader.read_records(&mut buffer)?, 1);
        assert_eq!(buffer[0], vec![3.0]);
        assert_eq!(reader.read_records(&mut buffer)?, 0);
        Ok(())
    }

    #[test]
    fn test_invalid_tables() -> Result<()> {
        assert!(Reader::<_, f64>::new(Cursor::new("")).is_err());
        assert!(Reader::<_, f64>::new(Cursor::new("\n\n")).is_err());

        let mut record = Vec::new();
        for text in [
            "a b\n1 2\n1\n",
            "a b\n1 2 3\n",
            "a b\n1 x\n",
            "a b\n1 nan\n",
            "a b\n1 inf\n",
        ] {
            let mut reader = Reader::<_, f64>::new(Cursor::new(text))?;
            let result = (0..2).try_for_each(|_| reader.read_record(&mut record).map(|_| ()));
            assert!(result.is_err(), "{text:?}");
        }

        let mut reader = Reader::<_, f64>::new(Cursor::new("a b\n1 2\n1 q\n"))?;
        assert!(reader.read_record(&mut record)?);
        let err = reader.read_record(&mut record).unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
        Ok(())
    }

    #[test]
    fn test_example_table() -> Result<()> {
        for fname in ["example.txt", "example.txt.gz"] {
            let path = PathBuf::from(env!("DEPTHWIN_RESOURCES"))
                .join("depth")
                .join(fname);

            let mut reader = Reader::from_path::<f64>(&path)?;
            assert_eq!(reader.names(), ["ctrl_1", "ctrl_2", "treat_1"]);

            let mut records = Vec::new();
            assert_eq!(reader.read_to_end(&mut records)?, 12);
            assert_eq!(records[0], vec![0.0, 1.0, 2.0]);
            assert_eq!(records[11], vec![11.0, 1.0, 0.0]);
        }
        Ok(())
    }
}
