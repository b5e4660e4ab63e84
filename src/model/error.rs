use super::*;

// 呼び出し側の契約違反
// 和了形でないという通常の結果とは区別してエラーとして通知する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandError {
    TileCount { expected: usize, found: usize }, // 牌数の不一致
    InvalidTile(Tile),                           // 数字が範囲外の牌
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandError::TileCount { expected, found } => {
                write!(f, "expected {} tiles, found {}", expected, found)
            }
            HandError::InvalidTile(t) => write!(f, "invalid tile: {}", t),
        }
    }
}

impl std::error::Error for HandError {}
