mod evaluate;
mod parse;
mod point;
mod win;
mod yaku;

pub use evaluate::{evaluate_hand, evaluate_tenpai};
pub use parse::{parse_into_chiitoitsu_win, parse_into_normal_win, ParsedHand, SetPair, SetPairType};
pub use point::{calc_fu, calc_score, ceil10, ceil100};
pub use win::{
    calc_winning_tiles, is_chiitoitsu_win, is_kokushimusou_win, is_normal_win, is_winning_hand,
};
pub use yaku::{calc_hand_yaku, YakuContext, CHIITOITSU, PINFU};
