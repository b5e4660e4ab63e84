use std::fmt;

use crate::model::*;

use super::parse::{
    parse_into_chiitoitsu_win, parse_into_normal_win, ParsedHand, SetPair, SetPairType,
};
use super::win::is_kokushimusou_win;

use SetPairType::*;

// 符計算と共有する役名
pub const PINFU: &str = "平和";
pub const CHIITOITSU: &str = "七対子";

#[derive(Debug)]
pub struct YakuContext {
    hand: TileTable,         // 元々の手牌 牌の所持判定(一気通貫,三色同順など)に使用
    parsed_hand: ParsedHand, // 雀頭+面子 (国士無双は空, 七対子は対子7つ)
    pair_tile: Tile,         // 雀頭の牌
    counts: Counts,          // 面子や牌種別のカウント
    iipeikou_count: usize,   // 同一順子の組数
    yakuhai_check: TileRow,  // 字牌刻子のカウント (雀頭は含まない)
}

impl YakuContext {
    pub fn new(hand: TileTable, parsed_hand: ParsedHand) -> Self {
        let pair_tile = get_pair(&parsed_hand);
        let counts = count_type(&parsed_hand);
        let iipeikou_count = count_iipeikou(&parsed_hand);
        let yakuhai_check = check_yakuhai(&parsed_hand);

        Self {
            hand,
            parsed_hand,
            pair_tile,
            counts,
            iipeikou_count,
            yakuhai_check,
        }
    }

    // 成立するすべての役を判定して翻数を合算
    // 役満が含まれる場合は役満のみを返却
    pub fn calc_yaku(&self) -> YakuResult {
        let mut yaku = vec![];
        for y in YAKU_LIST {
            if (y.func)(self) {
                yaku.push(y);
            }
        }

        let yakuman: Vec<&YakuDefine> = yaku.iter().copied().filter(|y| y.yakuman).collect();
        let list = if yakuman.is_empty() { yaku } else { yakuman };

        let mut res = YakuResult::default();
        for y in &list {
            res.yakus.push(Yaku {
                name: y.name.to_string(),
                han: y.han,
            });
            res.han += y.han;
            res.yakuman |= y.yakuman;
        }
        res
    }
}

#[derive(Debug, Default)]
struct Counts {
    pair: usize,
    shuntsu: usize,
    koutsu: usize,
    tis: [usize; TYPE], // 種別ごとのブロック数
}

fn get_pair(ph: &ParsedHand) -> Tile {
    for &SetPair(tp, t) in ph {
        if let Pair = tp {
            return t;
        }
    }
    Z8 // 雀頭なし(国士無双)
}

fn count_type(ph: &ParsedHand) -> Counts {
    let mut cnt = Counts::default();
    for SetPair(tp, t) in ph {
        match tp {
            Pair => cnt.pair += 1,
            Shuntsu => cnt.shuntsu += 1,
            Koutsu => cnt.koutsu += 1,
        }
        cnt.tis[t.0] += 1;
    }
    cnt
}

fn count_iipeikou(ph: &ParsedHand) -> usize {
    let mut n = 0;
    let mut shuntsu = TileTable::default();
    for SetPair(tp, t) in ph {
        if let Shuntsu = tp {
            shuntsu[t.0][t.1] += 1;
            if shuntsu[t.0][t.1] == 2 {
                n += 1;
            }
        }
    }
    n
}

fn check_yakuhai(ph: &ParsedHand) -> TileRow {
    let mut tr = TileRow::default();
    for SetPair(tp, t) in ph {
        if let Koutsu = tp {
            if t.is_honor() {
                tr[t.1] += 1;
            }
        }
    }
    tr
}

pub struct YakuDefine {
    pub name: &'static str,
    pub func: fn(&YakuContext) -> bool,
    pub han: usize,
    pub yakuman: bool,
}

impl fmt::Debug for YakuDefine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.name, self.han, self.yakuman)
    }
}

macro_rules! yaku {
    ($n: expr, $f: expr, $h: expr, $y: expr) => {
        YakuDefine {
            name: $n,
            func: $f,
            han: $h,
            yakuman: $y,
        }
    };
}

static YAKU_LIST: &[YakuDefine] = &[
    yaku!("国士無双", is_kokushimusou, 13, true),
    yaku!(CHIITOITSU, is_chiitoitsu, 2, false),
    yaku!(PINFU, is_pinfu, 1, false),
    yaku!("断么九", is_tanyaochuu, 1, false),
    yaku!("一盃口", is_iipeikou, 1, false),
    yaku!("一気通貫", is_ikkitsuukan, 2, false),
    yaku!("対々和", is_toitoihou, 2, false),
    yaku!("三暗刻", is_sanankou, 2, false),
    yaku!("三色同順", is_sanshokudoujun, 2, false),
    yaku!("混一色", is_honiisou, 3, false),
    yaku!("清一色", is_chiniisou, 6, false),
    yaku!("役牌", is_yakuhai, 1, false),
];

// [役判定]
// 特殊形(国士無双,七対子)は面子分解より先に判定し,成立した場合は分解を行わない.
// どの形にも当てはまらない場合は役なし・0翻を返却 (呼び出し側は0翻を和了不可として扱う)
pub fn calc_hand_yaku(hand: &TileTable) -> YakuResult {
    let parsed = if is_kokushimusou_win(hand) {
        Some(vec![])
    } else if let Some(ph) = parse_into_chiitoitsu_win(hand) {
        Some(ph)
    } else {
        parse_into_normal_win(hand)
    };

    match parsed {
        Some(ph) => YakuContext::new(*hand, ph).calc_yaku(),
        None => YakuResult::default(),
    }
}

// 国士無双
fn is_kokushimusou(ctx: &YakuContext) -> bool {
    ctx.parsed_hand.is_empty() && is_kokushimusou_win(&ctx.hand)
}

// 七対子
fn is_chiitoitsu(ctx: &YakuContext) -> bool {
    ctx.parsed_hand.len() == 7
}

// 平和 (簡易形: 順子4つ+中張数牌の雀頭)
fn is_pinfu(ctx: &YakuContext) -> bool {
    ctx.counts.shuntsu == 4 && ctx.pair_tile.is_simple()
}

// 断么九
fn is_tanyaochuu(ctx: &YakuContext) -> bool {
    if ctx.parsed_hand.is_empty() {
        return false; // 国士対策
    }

    let h = &ctx.hand;
    for ti in 0..TZ {
        if h[ti][1] != 0 || h[ti][9] != 0 {
            return false;
        }
    }
    for ni in WE..=DR {
        if h[TZ][ni] != 0 {
            return false;
        }
    }
    true
}

// 一盃口
fn is_iipeikou(ctx: &YakuContext) -> bool {
    ctx.iipeikou_count >= 1
}

// 一気通貫 (手牌全体での所持判定 面子構成との対応は確認しない)
fn is_ikkitsuukan(ctx: &YakuContext) -> bool {
    if ctx.parsed_hand.is_empty() {
        return false;
    }

    for ti in 0..TZ {
        if (1..=9).all(|ni| ctx.hand[ti][ni] > 0) {
            return true;
        }
    }
    false
}

// 対々和
fn is_toitoihou(ctx: &YakuContext) -> bool {
    ctx.counts.koutsu == 4
}

// 三暗刻
fn is_sanankou(ctx: &YakuContext) -> bool {
    ctx.counts.koutsu >= 3
}

// 三色同順 (手牌全体での所持判定 面子構成との対応は確認しない)
fn is_sanshokudoujun(ctx: &YakuContext) -> bool {
    if ctx.parsed_hand.is_empty() {
        return false;
    }

    let h = &ctx.hand;
    for ni in 1..=7 {
        if (0..TZ).all(|ti| h[ti][ni] > 0 && h[ti][ni + 1] > 0 && h[ti][ni + 2] > 0) {
            return true;
        }
    }
    false
}

// 混一色
fn is_honiisou(ctx: &YakuContext) -> bool {
    use std::cmp::min;
    let tis = &ctx.counts.tis;
    let suit = min(tis[TM], 1) + min(tis[TP], 1) + min(tis[TS], 1);
    suit == 1 && tis[TZ] > 0
}

// 清一色
fn is_chiniisou(ctx: &YakuContext) -> bool {
    use std::cmp::min;
    let tis = &ctx.counts.tis;
    let suit = min(tis[TM], 1) + min(tis[TP], 1) + min(tis[TS], 1);
    suit == 1 && tis[TZ] == 0
}

// 役牌 (三元牌の刻子 複数あっても1翻)
fn is_yakuhai(ctx: &YakuContext) -> bool {
    let yc = &ctx.yakuhai_check;
    yc[DW] + yc[DG] + yc[DR] >= 1
}

#[cfg(test)]
use crate::util::common::{tiles_from_string, tiles_to_tile_table};

#[cfg(test)]
fn yaku_of(exp: &str) -> YakuResult {
    let hand = tiles_to_tile_table(&tiles_from_string(exp).unwrap());
    calc_hand_yaku(&hand)
}

#[cfg(test)]
fn names(res: &YakuResult) -> Vec<&str> {
    res.yakus.iter().map(|y| y.name.as_str()).collect()
}

#[test]
fn test_yaku_tanyao_pinfu() {
    let res = yaku_of("m234567p345s456s88");
    assert_eq!(names(&res), vec!["平和", "断么九"]);
    assert_eq!(res.han, 2);
    assert!(!res.yakuman);
}

#[test]
fn test_yaku_iipeikou() {
    let res = yaku_of("m223344p567s789z77");
    assert_eq!(names(&res), vec!["一盃口"]);
    assert_eq!(res.han, 1);
}

#[test]
fn test_yaku_ikkitsuukan() {
    let res = yaku_of("m123456789p22s567");
    assert_eq!(names(&res), vec!["平和", "一気通貫"]);
    assert_eq!(res.han, 3);
}

#[test]
fn test_yaku_toitoi_sanankou() {
    let res = yaku_of("m111m99p222s333z111");
    assert_eq!(names(&res), vec!["対々和", "三暗刻"]);
    assert_eq!(res.han, 4);
}

#[test]
fn test_yaku_sanshoku() {
    let res = yaku_of("m234567p234s234z55");
    assert_eq!(names(&res), vec!["三色同順"]);
    assert_eq!(res.han, 2);
}

#[test]
fn test_yaku_honiisou() {
    let res = yaku_of("m111234678z222z33");
    assert_eq!(names(&res), vec!["混一色"]);
    assert_eq!(res.han, 3);
}

#[test]
fn test_yaku_chiniisou() {
    let res = yaku_of("m11223345667899");
    assert_eq!(names(&res), vec!["一盃口", "一気通貫", "清一色"]);
    assert_eq!(res.han, 9);
}

#[test]
fn test_yaku_yakuhai() {
    let res = yaku_of("m234p567s234s99z555");
    assert_eq!(names(&res), vec!["役牌"]);
    assert_eq!(res.han, 1);
}

#[test]
fn test_yaku_chiitoitsu() {
    let res = yaku_of("m2244p3355s66z1177");
    assert_eq!(names(&res), vec!["七対子"]);
    assert_eq!(res.han, 2);

    // 断么九と清一色は七対子と複合する
    let res = yaku_of("m22334455667788");
    assert_eq!(names(&res), vec!["七対子", "断么九", "清一色"]);
    assert_eq!(res.han, 9);
}

#[test]
fn test_yaku_kokushimusou() {
    let res = yaku_of("m119p19s19z1234567");
    assert_eq!(names(&res), vec!["国士無双"]);
    assert_eq!(res.han, 13);
    assert!(res.yakuman);

    // 么九牌以外が混ざると不成立
    let res = yaku_of("m119m5p19s19z123456");
    assert!(!res.is_win());
}

#[test]
fn test_yaku_none() {
    // 面子分解は成功するが役がない形 → 役なし・0翻 (和了不可)
    let res = yaku_of("m123p456s789z111m99");
    assert!(res.yakus.is_empty());
    assert_eq!(res.han, 0);
    assert!(!res.yakuman);
    assert!(!res.is_win());
}

#[test]
fn test_yaku_idempotent() {
    let hand = tiles_to_tile_table(&tiles_from_string("m123456789p22s567").unwrap());
    assert_eq!(calc_hand_yaku(&hand), calc_hand_yaku(&hand));
}
