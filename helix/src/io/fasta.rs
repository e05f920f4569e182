use std::io::BufRead;

use crate::error::{HelixError, Result};

/// 一条 FASTA 记录，序列已去除空白并转为大写。
#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    line_no: usize,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line_no: 0,
            done: false,
            peek_header: None,
        }
    }

    fn next_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf)?;
        self.line_no += 1;
        Ok(n > 0)
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        let header = match self.peek_header.take() {
            Some(h) => h,
            None => loop {
                if !self.next_line()? {
                    self.done = true;
                    return Ok(None);
                }
                let line = self.buf.trim();
                if let Some(h) = line.strip_prefix('>') {
                    break h.trim().to_string();
                }
                // 首个 header 之前只允许空行和 ';' 注释
                if !line.is_empty() && !line.starts_with(';') {
                    return Err(HelixError::Parse(format!(
                        "line {}: sequence data before first FASTA header",
                        self.line_no
                    )));
                }
            },
        };

        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        if id.is_empty() {
            return Err(HelixError::Parse(format!("line {}: FASTA header without id", self.line_no)));
        }
        let desc = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let mut seq: Vec<u8> = Vec::new();
        loop {
            if !self.next_line()? {
                self.done = true;
                break;
            }
            if let Some(h) = self.buf.strip_prefix('>') {
                self.peek_header = Some(h.trim().to_string());
                break;
            }
            if self.buf.starts_with(';') {
                continue;
            }
            seq.extend(
                self.buf
                    .bytes()
                    .filter(|b| !b.is_ascii_whitespace())
                    .map(|b| b.to_ascii_uppercase()),
            );
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_simple_fasta() {
        let data = b">chr1 first\nACgTNN\n>chr2\nAAA\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.desc.as_deref(), Some("first"));
        assert_eq!(r1.seq, b"ACGTNN");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "chr2");
        assert_eq!(r2.desc, None);
        assert_eq!(r2.seq, b"AAA");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn crlf_whitespace_and_comments() {
        let data = b"; made by hand\r\n\r\n>chr1 desc\r\nAC g t\r\n; skipped\r\n acgt\r\n>chr2 \r\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.desc.as_deref(), Some("desc"));
        assert_eq!(r1.seq, b"ACGTACGT");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "chr2");
        assert!(r2.seq.is_empty());

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn sequence_before_header_is_rejected() {
        let data = b"ACGT\n>chr1\nACGT\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));
        assert!(matches!(r.next_record(), Err(HelixError::Parse(_))));
    }

    #[test]
    fn header_without_id_is_rejected() {
        let data = b">\nACGT\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));
        assert!(matches!(r.next_record(), Err(HelixError::Parse(_))));
    }
}
