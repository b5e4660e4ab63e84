// 麻雀のデータモデル
mod define;
mod error;
mod tile;
mod win_context;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use define::*;
pub use error::*;
pub use tile::*;
pub use win_context::*;
