//! 染色体数据源：按编号取出一条染色体，以“拉取”方式分块读出解码后的碱基文本。

use std::io::BufRead;

use crate::error::{HelixError, Result};
use crate::io::fasta::FastaReader;
use crate::seq::PackedSeq;

/// 一条染色体的分块读取流。返回空块表示读完，此后每次调用都返回空块。
pub trait ChromosomeStream {
    fn read_chunk(&mut self) -> Result<Vec<u8>>;
}

/// 提供若干条染色体的个体。
pub trait ChromosomeSource {
    type Stream<'a>: ChromosomeStream
    where
        Self: 'a;

    fn chromosome_count(&self) -> usize;

    fn chromosome(&self, index: usize) -> Result<Self::Stream<'_>>;
}

fn check_index(index: usize, count: usize) -> Result<()> {
    if index >= count {
        return Err(HelixError::InvalidArgument(format!(
            "chromosome {} does not exist (have {})",
            index, count
        )));
    }
    Ok(())
}

/// 内存中的打包数据源：每条染色体一段 2-bit 打包字节，每次读出 `chunk_size` 字节解码后的文本。
#[derive(Debug, Clone)]
pub struct PackedPerson {
    chromosomes: Vec<Vec<u8>>,
    chunk_size: usize,
}

impl PackedPerson {
    pub fn new(chromosomes: Vec<Vec<u8>>, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(HelixError::InvalidArgument("chunk size must be positive".into()));
        }
        Ok(Self { chromosomes, chunk_size })
    }
}

pub struct PackedStream<'a> {
    data: &'a [u8],
    pos: usize,
    chunk_size: usize,
}

impl ChromosomeStream for PackedStream<'_> {
    fn read_chunk(&mut self) -> Result<Vec<u8>> {
        let end = self.pos + self.chunk_size.min(self.data.len() - self.pos);
        let chunk = &self.data[self.pos..end];
        self.pos = end;
        Ok(PackedSeq::new(chunk).to_ascii())
    }
}

impl ChromosomeSource for PackedPerson {
    type Stream<'a> = PackedStream<'a>;

    fn chromosome_count(&self) -> usize {
        self.chromosomes.len()
    }

    fn chromosome(&self, index: usize) -> Result<PackedStream<'_>> {
        check_index(index, self.chromosomes.len())?;
        Ok(PackedStream { data: &self.chromosomes[index], pos: 0, chunk_size: self.chunk_size })
    }
}

/// FASTA 文件中的每条记录视为一条染色体，流中给出大写碱基文本。
#[derive(Debug, Clone)]
pub struct FastaPerson {
    names: Vec<String>,
    descs: Vec<Option<String>>,
    seqs: Vec<Vec<u8>>,
    chunk_size: usize,
}

impl FastaPerson {
    pub fn from_reader<R: BufRead>(reader: R, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(HelixError::InvalidArgument("chunk size must be positive".into()));
        }
        let mut reader = FastaReader::new(reader);
        let mut names = Vec::new();
        let mut descs = Vec::new();
        let mut seqs = Vec::new();
        while let Some(rec) = reader.next_record()? {
            names.push(rec.id);
            descs.push(rec.desc);
            seqs.push(rec.seq);
        }
        Ok(Self { names, descs, seqs, chunk_size })
    }

    pub fn from_path(path: &str, chunk_size: usize) -> Result<Self> {
        let fh = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(fh), chunk_size)
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// header 中 id 之后的描述文字
    pub fn description(&self, index: usize) -> Option<&str> {
        self.descs.get(index).and_then(|d| d.as_deref())
    }
}

pub struct TextStream<'a> {
    data: &'a [u8],
    chunk_size: usize,
}

impl ChromosomeStream for TextStream<'_> {
    fn read_chunk(&mut self) -> Result<Vec<u8>> {
        let take = self.chunk_size.min(self.data.len());
        let (head, rest) = self.data.split_at(take);
        self.data = rest;
        Ok(head.to_vec())
    }
}

impl ChromosomeSource for FastaPerson {
    type Stream<'a> = TextStream<'a>;

    fn chromosome_count(&self) -> usize {
        self.seqs.len()
    }

    fn chromosome(&self, index: usize) -> Result<TextStream<'_>> {
        check_index(index, self.seqs.len())?;
        Ok(TextStream { data: &self.seqs[index], chunk_size: self.chunk_size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drain<S: ChromosomeStream>(mut s: S) -> Vec<Vec<u8>> {
        let mut chunks = Vec::new();
        loop {
            let c = s.read_chunk().unwrap();
            if c.is_empty() {
                break;
            }
            chunks.push(c);
        }
        assert!(s.read_chunk().unwrap().is_empty());
        chunks
    }

    #[test]
    fn packed_person_streams_decoded_chunks() {
        let data = vec![0x5a, 0xe3, 0x3e, 0x3f, 0x8d, 0xed, 0x4d, 0x64];
        let person = PackedPerson::new(vec![data; 23], 4).unwrap();
        assert_eq!(person.chromosome_count(), 23);

        let chunks = drain(person.chromosome(0).unwrap());
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], b"CCGGTGATATTGATTT");
        assert_eq!(chunks[1], b"GATCTGTCCATCCGCA");
    }

    #[test]
    fn huge_chunk_size_reads_everything_at_once() {
        let person = PackedPerson::new(vec![vec![0x5a, 0xe3]], usize::MAX).unwrap();
        let chunks = drain(person.chromosome(0).unwrap());
        assert_eq!(chunks, vec![b"CCGGTGAT".to_vec()]);

        let fasta = FastaPerson::from_reader(Cursor::new(&b">c\nACGT\n"[..]), usize::MAX).unwrap();
        assert_eq!(drain(fasta.chromosome(0).unwrap()), vec![b"ACGT".to_vec()]);
    }

    #[test]
    fn missing_chromosome_is_invalid_argument() {
        let person = PackedPerson::new(vec![vec![0u8; 2]], 4).unwrap();
        assert!(matches!(person.chromosome(1), Err(HelixError::InvalidArgument(_))));
        assert!(PackedPerson::new(Vec::new(), 0).is_err());
    }

    #[test]
    fn fasta_person_one_chromosome_per_record() {
        let data = b">chr1 first\nACgT\nAC\n>chr2\nTTTT\n";
        let person = FastaPerson::from_reader(Cursor::new(&data[..]), 4).unwrap();
        assert_eq!(person.chromosome_count(), 2);
        assert_eq!(person.name(0), Some("chr1"));
        assert_eq!(person.name(1), Some("chr2"));
        assert_eq!(person.name(2), None);
        assert_eq!(person.description(0), Some("first"));
        assert_eq!(person.description(1), None);

        let chunks = drain(person.chromosome(0).unwrap());
        assert_eq!(chunks, vec![b"ACGT".to_vec(), b"AC".to_vec()]);
    }
}
