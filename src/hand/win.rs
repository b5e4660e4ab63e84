use crate::model::*;

use super::parse::{parse_into_chiitoitsu_win, parse_into_normal_win};
use super::yaku::calc_hand_yaku;

// [和了形判定]

// 国士無双形 (么九牌13種 + いずれか1枚の重複)
pub fn is_kokushimusou_win(hand: &TileTable) -> bool {
    let mut count = 0;
    for ti in 0..TZ {
        for ni in [1, 9] {
            if hand[ti][ni] == 0 {
                return false;
            }
            count += hand[ti][ni];
        }
    }
    for ni in WE..=DR {
        if hand[TZ][ni] == 0 {
            return false;
        }
        count += hand[TZ][ni];
    }
    count == 14
}

// 七対子形 (対子7つ 同種4枚は不可)
pub fn is_chiitoitsu_win(hand: &TileTable) -> bool {
    parse_into_chiitoitsu_win(hand).is_some()
}

// 通常形 (雀頭1つ+面子4つ)
pub fn is_normal_win(hand: &TileTable) -> bool {
    parse_into_normal_win(hand).is_some()
}

// 和了判定 形が成立していても役がなければ和了とみなさない
pub fn is_winning_hand(hand: &TileTable) -> bool {
    calc_hand_yaku(hand).is_win()
}

// [聴牌判定]
// 13枚の手牌に対して34種の牌を1枚ずつ加えて和了判定を行い,
// 和了牌の一覧を(種別,数字)の昇順で返却する.
// 形が完成していても役がつかない牌は和了牌に含めない.
pub fn calc_winning_tiles(hand: &TileTable) -> Vec<Tile> {
    let mut tt = *hand;
    let mut res = vec![];
    for ti in 0..TYPE {
        let max = if ti == TZ { DR } else { 9 };
        for ni in 1..=max {
            if tt[ti][ni] == 4 {
                continue; // 5枚目は存在しない
            }
            tt[ti][ni] += 1;
            if is_winning_hand(&tt) {
                res.push(Tile(ti, ni));
            }
            tt[ti][ni] -= 1;
        }
    }
    res
}

#[cfg(test)]
use crate::util::common::{tiles_from_string, tiles_to_tile_table};

#[cfg(test)]
fn table_of(exp: &str) -> TileTable {
    tiles_to_tile_table(&tiles_from_string(exp).unwrap())
}

#[test]
fn test_win_normal() {
    assert!(is_normal_win(&table_of("m123456789p22s567")));
    assert!(!is_normal_win(&table_of("m123456789p22s568")));
}

#[test]
fn test_win_kokushimusou() {
    assert!(is_kokushimusou_win(&table_of("m119p19s19z1234567")));
    assert!(!is_kokushimusou_win(&table_of("m119p19s19z123456"))); // 13枚
    assert!(!is_kokushimusou_win(&table_of("m115p19s19z1234567"))); // 中張牌入り
}

#[test]
fn test_win_requires_yaku() {
    // 形は完成しているが役がない
    assert!(is_normal_win(&table_of("m123p456s789z111m99")));
    assert!(!is_winning_hand(&table_of("m123p456s789z111m99")));

    // 断么九がつく
    assert!(is_winning_hand(&table_of("m234p456s678m55s33s3")));
}

#[test]
fn test_winning_tiles_ryanmen() {
    let waits = calc_winning_tiles(&table_of("m123456789p22s56"));
    assert_eq!(waits, vec![Tile(TS, 4), Tile(TS, 7)]);
}

#[test]
fn test_winning_tiles_kokushimusou() {
    // 13面待ち
    let waits = calc_winning_tiles(&table_of("m19p19s19z1234567"));
    assert_eq!(waits.len(), 13);
    assert!(waits.contains(&Tile(TM, 1)));
    assert!(waits.contains(&Tile(TZ, DR)));
}

#[test]
fn test_winning_tiles_chiitoitsu() {
    let waits = calc_winning_tiles(&table_of("m2244p3355s66z117"));
    assert_eq!(waits, vec![Tile(TZ, 7)]);
}

#[test]
fn test_winning_tiles_yakuless() {
    // 形の上では聴牌だが何を引いても役がつかない
    let waits = calc_winning_tiles(&table_of("m123p456s789z111m9"));
    assert_eq!(waits, vec![]);
}

#[test]
fn test_winning_tiles_noten() {
    let waits = calc_winning_tiles(&table_of("m159p159s159z1234"));
    assert_eq!(waits, vec![]);
}
