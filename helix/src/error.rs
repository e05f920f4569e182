//! 库内统一错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelixError {
    /// 调用方传入的参数不合法（负偏移、不存在的染色体编号等）
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// 访问超出序列长度的碱基
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 输入数据格式错误（FASTA 等）
    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] bincode::Error),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, HelixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = HelixError::IndexOutOfRange { index: 9, len: 8 };
        assert_eq!(e.to_string(), "index 9 out of range for sequence of length 8");

        let e = HelixError::InvalidArgument("offset cannot be less than 0".into());
        assert!(e.to_string().contains("offset"));
    }

    #[test]
    fn io_errors_convert() {
        fn open() -> Result<std::fs::File> {
            Ok(std::fs::File::open("/definitely/not/here.fa")?)
        }
        assert!(matches!(open(), Err(HelixError::Io(_))));
    }
}
