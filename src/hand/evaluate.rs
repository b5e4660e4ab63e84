use crate::model::*;

use super::win::calc_winning_tiles;
use super::yaku::calc_hand_yaku;

// 牌のリストを検証してテーブル形式に変換
fn to_checked_table(tiles: &[Tile], expected: usize) -> Result<TileTable, HandError> {
    if tiles.len() != expected {
        return Err(HandError::TileCount {
            expected,
            found: tiles.len(),
        });
    }

    let mut tt = TileTable::default();
    for &t in tiles {
        if !t.is_valid() {
            return Err(HandError::InvalidTile(t));
        }
        tt[t.0][t.1] += 1;
        if tt[t.0][t.1] > 4 {
            return Err(HandError::InvalidTile(t)); // 同種5枚以上
        }
    }
    Ok(tt)
}

// [和了評価]
// 14枚の手牌から成立する役と翻数を求める
// 和了形でない場合や役がつかない場合は役なし・0翻を返却
pub fn evaluate_hand(tiles: &[Tile]) -> Result<YakuResult, HandError> {
    let tt = to_checked_table(tiles, 14)?;
    Ok(calc_hand_yaku(&tt))
}

// [聴牌評価]
// 13枚の手牌から和了牌の一覧を求める
pub fn evaluate_tenpai(tiles: &[Tile]) -> Result<Tenpai, HandError> {
    let tt = to_checked_table(tiles, 13)?;
    let waits = calc_winning_tiles(&tt);
    Ok(Tenpai {
        is_tenpai: !waits.is_empty(),
        waits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{calc_score, is_winning_hand};
    use crate::util::common::{tiles_from_string, tiles_to_tile_table};
    use rand::prelude::*;

    #[test]
    fn test_evaluate_hand() {
        let tiles = tiles_from_string("m234567p345s456s88").unwrap();
        let res = evaluate_hand(&tiles).unwrap();
        assert!(res.is_win());
        assert_eq!(res.han, 2);

        // 和了形でない場合はエラーではなく役なし
        let tiles = tiles_from_string("m159p159s159z12344").unwrap();
        let res = evaluate_hand(&tiles).unwrap();
        assert!(!res.is_win());
    }

    #[test]
    fn test_evaluate_tenpai() {
        let tiles = tiles_from_string("m123456789p22s56").unwrap();
        let res = evaluate_tenpai(&tiles).unwrap();
        assert!(res.is_tenpai);
        assert_eq!(res.waits, vec![Tile(TS, 4), Tile(TS, 7)]);

        let tiles = tiles_from_string("m159p159s159z1234").unwrap();
        let res = evaluate_tenpai(&tiles).unwrap();
        assert!(!res.is_tenpai);
        assert_eq!(res.waits, vec![]);
    }

    #[test]
    fn test_evaluate_errors() {
        let tiles = tiles_from_string("m123456789p22s5").unwrap(); // 12枚
        assert_eq!(tiles.len(), 12);
        assert_eq!(
            evaluate_hand(&tiles),
            Err(HandError::TileCount {
                expected: 14,
                found: 12
            })
        );
        assert_eq!(
            evaluate_tenpai(&tiles[..11]),
            Err(HandError::TileCount {
                expected: 13,
                found: 11
            })
        );

        // 範囲外の牌
        let mut tiles = tiles_from_string("m123456789p22s56").unwrap();
        tiles.push(Tile(TZ, 8));
        assert_eq!(evaluate_hand(&tiles), Err(HandError::InvalidTile(Tile(TZ, 8))));

        // 同種5枚
        let mut tiles = tiles_from_string("m1111p22s567m2345").unwrap();
        tiles.push(Tile(TM, 1));
        assert_eq!(evaluate_hand(&tiles), Err(HandError::InvalidTile(Tile(TM, 1))));
    }

    // 和了牌として返された牌を加えると必ず和了になる
    #[test]
    fn test_waits_consistent_with_win() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut wall = vec![];
        for ti in 0..TYPE {
            let max = if ti == TZ { DR } else { 9 };
            for ni in 1..=max {
                for _ in 0..4 {
                    wall.push(Tile(ti, ni));
                }
            }
        }

        for _ in 0..100 {
            wall.shuffle(&mut rng);
            let tiles = wall[..13].to_vec();
            let tenpai = evaluate_tenpai(&tiles).unwrap();
            for &w in &tenpai.waits {
                let mut full = tiles.clone();
                full.push(w);
                let tt = tiles_to_tile_table(&full);
                assert!(is_winning_hand(&tt));
                let res = evaluate_hand(&full).unwrap();
                assert!(res.is_win());
                assert!(calc_score(&res, false, WinType::Ron).total > 0);
            }
        }
    }
}
