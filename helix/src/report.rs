use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::diff::interval::{covered, IntervalList};
use crate::error::Result;

/// 比较来源与生成时间
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub source_a: Option<String>,
    pub source_b: Option<String>,
    /// RFC 3339 时间戳
    pub created: Option<String>,
}

/// 一次染色体比较的结果，可用 bincode 保存与读回。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    pub chromosome: usize,
    pub name: String,
    pub window_size: i64,
    pub intervals: IntervalList,
    pub meta: ReportMeta,
}

impl DiffReport {
    pub fn new(chromosome: usize, name: impl Into<String>, window_size: i64, intervals: IntervalList) -> Self {
        Self { chromosome, name: name.into(), window_size, intervals, meta: ReportMeta::default() }
    }

    pub fn set_meta(&mut self, meta: ReportMeta) {
        self.meta = meta;
    }

    /// 所有区间覆盖的失配位置数
    pub fn mismatched_positions(&self) -> usize {
        covered(&self.intervals)
    }

    /// 每个区间一行 `name\tstart\tend`（半开区间，与 BED 一致）。
    pub fn write_bed<W: Write>(&self, out: &mut W) -> Result<()> {
        for iv in &self.intervals {
            writeln!(out, "{}\t{}\t{}", self.name, iv.start, iv.end)?;
        }
        Ok(())
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let f = std::fs::File::create(path)?;
        let mut w = std::io::BufWriter::new(f);
        bincode::serialize_into(&mut w, self)?;
        w.flush()?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let f = std::fs::File::open(path)?;
        let report: Self = bincode::deserialize_from(std::io::BufReader::new(f))?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::interval::Interval;

    fn sample() -> DiffReport {
        let mut r = DiffReport::new(0, "chr1", 8, vec![Interval::new(3, 5), Interval::new(31, 32)]);
        r.set_meta(ReportMeta {
            source_a: Some("a.fa".into()),
            source_b: Some("b.fa".into()),
            created: Some("2024-01-01T00:00:00+00:00".into()),
        });
        r
    }

    #[test]
    fn bed_lines() {
        let mut out = Vec::new();
        sample().write_bed(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "chr1\t3\t5\nchr1\t31\t32\n");
        assert_eq!(sample().mismatched_positions(), 3);
    }

    #[test]
    fn save_and_load() {
        let path = std::env::temp_dir().join(format!("helix-report-{}.bin", std::process::id()));
        let path = path.to_str().unwrap().to_string();
        let report = sample();
        report.save_to_file(&path).unwrap();
        let loaded = DiffReport::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, report);
    }

    #[test]
    fn load_garbage_fails() {
        let path = std::env::temp_dir().join(format!("helix-garbage-{}.bin", std::process::id()));
        std::fs::write(&path, [0xffu8; 3]).unwrap();
        let res = DiffReport::load_from_file(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        assert!(res.is_err());
    }
}
