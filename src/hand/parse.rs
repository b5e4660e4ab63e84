use crate::model::*;

use SetPairType::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetPairType {
    Pair,    // 雀頭
    Shuntsu, // 順子
    Koutsu,  // 刻子
}

// Tileは順子の場合は先頭の牌
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPair(pub SetPairType, pub Tile);

pub type ParsedHand = Vec<SetPair>;

impl SetPair {
    // 構成牌に展開 (順子は先頭の牌から展開)
    pub fn tiles(&self) -> Vec<Tile> {
        let SetPair(tp, t) = *self;
        match tp {
            Pair => vec![t, t],
            Shuntsu => vec![t, Tile(t.0, t.1 + 1), Tile(t.0, t.1 + 2)],
            Koutsu => vec![t, t, t],
        }
    }
}

// [面子分解]
// 14枚の手牌を雀頭1つ+面子4つに分解して返却 (分解できない場合はNone)
// 雀頭候補を(種別,数字)の昇順に試し,最初に成功した分解を採用する.
// 固定した雀頭に対する面子の取り方は貪欲法で一意に決まるため,
// 刻子と順子の両方に解釈できる形で低い点数の分解を返す場合がある.
// より高得点の分解を採用する実装に差し替える場合もこの関数の内部のみを変更すればよい.
pub fn parse_into_normal_win(hand: &TileTable) -> Option<ParsedHand> {
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            if hand[ti][ni] < 2 {
                continue;
            }
            // 雀頭を外したコピーに対して面子の取り出しを試行
            let mut tt = *hand;
            tt[ti][ni] -= 2;
            if let Some(mut ph) = parse_into_sets(&tt) {
                let mut res = vec![SetPair(Pair, Tile(ti, ni))];
                res.append(&mut ph);
                return Some(res);
            }
        }
    }
    None
}

// 残りの牌すべてを面子に分解 (4面子にならない場合はNone)
// 常に最小の牌種から取り出す: 3枚以上なら刻子,そうでなければ順子を試みる
fn parse_into_sets(hand: &TileTable) -> Option<ParsedHand> {
    let mut tt = *hand;
    let mut ph = vec![];
    'next: loop {
        for ti in 0..TYPE {
            for ni in 1..TNUM {
                if tt[ti][ni] == 0 {
                    continue;
                }
                if tt[ti][ni] >= 3 {
                    tt[ti][ni] -= 3;
                    ph.push(SetPair(Koutsu, Tile(ti, ni)));
                } else if ti != TZ && ni <= 7 && tt[ti][ni + 1] > 0 && tt[ti][ni + 2] > 0 {
                    tt[ti][ni] -= 1;
                    tt[ti][ni + 1] -= 1;
                    tt[ti][ni + 2] -= 1;
                    ph.push(SetPair(Shuntsu, Tile(ti, ni)));
                } else {
                    return None;
                }
                continue 'next;
            }
        }
        break;
    }

    if ph.len() == 4 {
        Some(ph)
    } else {
        None
    }
}

// 手牌が七対子形ならすべて対子に分解して返却
pub fn parse_into_chiitoitsu_win(hand: &TileTable) -> Option<ParsedHand> {
    let mut res = vec![];
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            match hand[ti][ni] {
                0 => {}
                2 => res.push(SetPair(Pair, Tile(ti, ni))),
                _ => return None,
            }
        }
    }

    if res.len() == 7 {
        Some(res)
    } else {
        None
    }
}

#[cfg(test)]
use crate::util::common::{tiles_from_string, tiles_to_tile_table};

#[test]
fn test_parse_normal_win() {
    let hand = tiles_to_tile_table(&tiles_from_string("m234567p345s456s88").unwrap());
    let ph = parse_into_normal_win(&hand).unwrap();
    assert_eq!(ph[0], SetPair(SetPairType::Pair, Tile(TS, 8)));
    assert_eq!(ph.len(), 5);

    // 分解の構成牌は元の手牌と完全に一致する
    let mut tiles: Vec<Tile> = ph.iter().flat_map(|sp| sp.tiles()).collect();
    tiles.sort();
    let mut hand_tiles = tiles_from_string("m234567p345s456s88").unwrap();
    hand_tiles.sort();
    assert_eq!(tiles, hand_tiles);
}

#[test]
fn test_parse_pair_order() {
    // 雀頭候補は昇順に試すため最小の牌が雀頭となる
    let hand = tiles_to_tile_table(&tiles_from_string("m11223344556677").unwrap());
    let ph = parse_into_normal_win(&hand).unwrap();
    assert_eq!(ph[0], SetPair(SetPairType::Pair, Tile(TM, 1)));
}

#[test]
fn test_parse_koutsu_priority() {
    // 3枚以上の牌種は刻子として取り出す
    let hand = tiles_to_tile_table(&tiles_from_string("m111222333p567s11").unwrap());
    let ph = parse_into_normal_win(&hand).unwrap();
    let n_koutsu = ph
        .iter()
        .filter(|sp| sp.0 == SetPairType::Koutsu)
        .count();
    assert_eq!(n_koutsu, 3);
}

#[test]
fn test_parse_normal_win_fail() {
    // 雀頭がない
    let hand = tiles_to_tile_table(&tiles_from_string("m123456789p123s19").unwrap());
    assert_eq!(parse_into_normal_win(&hand), None);

    // 字牌は順子にできない
    let hand = tiles_to_tile_table(&tiles_from_string("m123p456s789z12344").unwrap());
    assert_eq!(parse_into_normal_win(&hand), None);
}

#[test]
fn test_parse_chiitoitsu() {
    let hand = tiles_to_tile_table(&tiles_from_string("m2244p3355s66z1177").unwrap());
    let ph = parse_into_chiitoitsu_win(&hand).unwrap();
    assert_eq!(ph.len(), 7);
    assert!(ph.iter().all(|sp| sp.0 == SetPairType::Pair));

    // 同種4枚 (対子2つ扱い) は七対子と認めない
    let hand = tiles_to_tile_table(&tiles_from_string("m22224466p88s22z55").unwrap());
    assert_eq!(parse_into_chiitoitsu_win(&hand), None);
}
