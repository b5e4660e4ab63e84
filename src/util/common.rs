use std::fmt;

use crate::model::*;

pub fn vec_to_string<T: fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    vs.join(" ")
}

// "m1234p567s89z12"形式の文字列から牌のリストを生成
pub fn tiles_from_string(exp: &str) -> Result<Vec<Tile>, String> {
    let mut tiles = vec![];
    let mut ti = None;
    for c in exp.chars() {
        match c {
            'm' | 'p' | 's' | 'z' => ti = Some(tile_type_from_char(c)?),
            '1'..='9' => match ti {
                Some(ti) => {
                    let ni = tile_number_from_char(c)?;
                    tiles.push(Tile(ti, ni));
                }
                None => return Err("tile number before tile type".to_string()),
            },
            _ => {
                return Err(format!("invalid char: '{}'", c));
            }
        }
    }
    Ok(tiles)
}

pub fn tiles_to_tile_table(tiles: &[Tile]) -> TileTable {
    let mut tt = TileTable::default();
    for &t in tiles {
        tt[t.0][t.1] += 1;
    }
    tt
}

pub fn tiles_from_tile_table(tt: &TileTable) -> Vec<Tile> {
    let mut tiles = vec![];
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            for _ in 0..tt[ti][ni] {
                tiles.push(Tile(ti, ni));
            }
        }
    }
    tiles
}

#[test]
fn test_tiles_from_string() {
    let tiles = tiles_from_string("m12s3z45m6").unwrap();
    assert_eq!(
        tiles,
        vec![
            Tile(TM, 1),
            Tile(TM, 2),
            Tile(TS, 3),
            Tile(TZ, 4),
            Tile(TZ, 5),
            Tile(TM, 6),
        ]
    );

    assert!(tiles_from_string("123").is_err());
    assert!(tiles_from_string("m12x3").is_err());
}

#[test]
fn test_tile_table_roundtrip() {
    let mut tiles = tiles_from_string("z77m119p19s19z123456").unwrap();
    let tt = tiles_to_tile_table(&tiles);
    assert_eq!(tt[TM][1], 2);
    assert_eq!(tt[TZ][DR], 2);

    // テーブル経由の復元はソート済みのリストと一致する
    tiles.sort();
    assert_eq!(tiles_from_tile_table(&tt), tiles);
}

#[test]
fn test_vec_to_string() {
    let tiles = tiles_from_string("m1p2z3").unwrap();
    assert_eq!(vec_to_string(&tiles), "m1 p2 z3");
}
