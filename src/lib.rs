// テーブル走査の一貫性を保つために以下のclippy警告は無効化
#![allow(clippy::needless_range_loop)]

pub mod hand;
pub mod model;
pub mod util;
