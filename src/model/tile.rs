use serde::{de, ser};

use super::*;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tile(pub Type, pub Tnum); // (type index, number index)
pub const Z8: Tile = Tile(TZ, UK); // unknown tile

impl Tile {
    pub fn from_symbol(s: &str) -> Result<Self, String> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(format!("invalid tile symbol: '{}'", s));
        }
        let t = tile_type_from_char(chars[0])?;
        let n = tile_number_from_char(chars[1])?;
        Ok(Self(t, n))
    }

    // 数牌
    #[inline]
    pub fn is_suit(&self) -> bool {
        self.0 != TZ
    }

    // 字牌
    #[inline]
    pub fn is_honor(&self) -> bool {
        self.0 == TZ
    }

    // 1,9牌
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.0 != TZ && (self.1 == 1 || self.1 == 9)
    }

    // 么九牌
    #[inline]
    pub fn is_end(&self) -> bool {
        self.0 == TZ || self.1 == 1 || self.1 == 9
    }

    // 中張牌
    #[inline]
    pub fn is_simple(&self) -> bool {
        !self.is_end()
    }

    // 風牌
    #[inline]
    pub fn is_wind(&self) -> bool {
        self.0 == TZ && WE <= self.1 && self.1 <= WN
    }

    // 三元牌
    #[inline]
    pub fn is_doragon(&self) -> bool {
        self.0 == TZ && DW <= self.1 && self.1 <= DR
    }

    // 種別ごとの数字の範囲に収まっているかの判定
    pub fn is_valid(&self) -> bool {
        match self.0 {
            TM | TP | TS => 1 <= self.1 && self.1 <= 9,
            TZ => WE <= self.1 && self.1 <= DR,
            _ => false,
        }
    }
}

pub fn tile_type_from_char(c: char) -> Result<Type, String> {
    Ok(match c {
        'm' => TM,
        'p' => TP,
        's' => TS,
        'z' => TZ,
        _ => return Err(format!("invalid tile type char: '{}'", c)),
    })
}

pub fn tile_number_from_char(c: char) -> Result<Tnum, String> {
    match c.to_digit(10) {
        Some(n) => Ok(n as Tnum),
        None => Err(format!("invalid tile number char: '{}'", c)),
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ['m', 'p', 's', 'z'][self.0], self.1)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Tile::from_symbol(v).map_err(de::Error::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// [TileTable]
pub type TileRow = [usize; TNUM];
pub type TileTable = [TileRow; TYPE];

#[test]
fn test_tile_symbol() {
    assert_eq!(Tile::from_symbol("m5"), Ok(Tile(TM, 5)));
    assert_eq!(Tile::from_symbol("z7"), Ok(Tile(TZ, DR)));
    assert_eq!(Tile(TS, 9).to_string(), "s9");
    assert!(Tile::from_symbol("x5").is_err());
    assert!(Tile::from_symbol("m55").is_err());
}

#[test]
fn test_tile_order() {
    let mut tiles = vec![Tile(TZ, 1), Tile(TM, 9), Tile(TM, 1), Tile(TS, 5)];
    tiles.sort();
    assert_eq!(
        tiles,
        vec![Tile(TM, 1), Tile(TM, 9), Tile(TS, 5), Tile(TZ, 1)]
    );
}

#[test]
fn test_tile_valid() {
    assert!(Tile(TM, 1).is_valid());
    assert!(Tile(TZ, DR).is_valid());
    assert!(!Tile(TM, 0).is_valid());
    assert!(!Tile(TZ, UK).is_valid());
    assert!(!Tile(TYPE, 1).is_valid());
}

#[test]
fn test_tile_serde() {
    let t = Tile(TP, 3);
    let js = serde_json::to_string(&t).unwrap();
    assert_eq!(js, "\"p3\"");
    let t2: Tile = serde_json::from_str(&js).unwrap();
    assert_eq!(t, t2);
}
