use crate::model::*;

use super::yaku::{CHIITOITSU, PINFU};

// 100点単位の切り上げ
#[inline]
pub fn ceil100(n: Point) -> Point {
    (n + 99) / 100 * 100
}

// 10符単位の切り上げ
#[inline]
pub fn ceil10(n: usize) -> usize {
    (n + 9) / 10 * 10
}

// [符計算]
// 簡易形: 七対子は25符固定, 平和は20符, それ以外は30符
pub fn calc_fu(result: &YakuResult) -> usize {
    if result.has_yaku(CHIITOITSU) {
        25
    } else if result.has_yaku(PINFU) {
        20
    } else {
        ceil10(30)
    }
}

// 翻数に応じた点数区分と基本点の上限
// 上限がない場合はPoint::MAXを返却
fn calc_limit(han: usize, yakuman: bool) -> (ScoreTitle, Point) {
    use ScoreTitle::*;
    if yakuman || han >= 13 {
        (Yakuman, 8000)
    } else if han >= 11 {
        (Sanbaiman, 6000)
    } else if han >= 8 {
        (Baiman, 4000)
    } else if han >= 6 {
        (Haneman, 3000)
    } else if han == 5 {
        (Mangan, 2000)
    } else {
        (None, Point::MAX)
    }
}

// 基本点 = 符 × 2^(2+翻) (点数区分の上限でキャップ)
// 役満フラグが立っていても翻数そのままで計算するため,
// 翻数の低い役満は上限より小さい基本点となる場合がある.
fn calc_base_point(fu: usize, han: usize, cap: Point) -> Point {
    let shift = (han + 2).min(15); // 2^15 × 20符ですでに全上限を超過
    ((fu as u64) << shift).min(cap as u64) as Point
}

// [点数計算]
// 支払いはそれぞれ個別に100点単位へ切り上げてから合算する
pub fn calc_score(result: &YakuResult, is_dealer: bool, win_type: WinType) -> ScoreBreakdown {
    let fu = calc_fu(result);
    let han = result.han;
    let (title, cap) = calc_limit(han, result.yakuman);
    let base = calc_base_point(fu, han, cap);

    let (total, payment) = match (win_type, is_dealer) {
        (WinType::Ron, true) => {
            let p = ceil100(base * 6);
            (p, Payment::Ron(p))
        }
        (WinType::Ron, false) => {
            let p = ceil100(base * 4);
            (p, Payment::Ron(p))
        }
        (WinType::Tsumo, true) => {
            let each = ceil100(base * 2);
            (each * 3, Payment::TsumoDealer { each })
        }
        (WinType::Tsumo, false) => {
            let dealer = ceil100(base * 2);
            let other = ceil100(base);
            (dealer + other * 2, Payment::TsumoNonDealer { dealer, other })
        }
    };

    ScoreBreakdown {
        fu,
        han,
        title,
        base,
        total,
        payment,
    }
}

#[cfg(test)]
fn result_of(names_han: &[(&str, usize)], yakuman: bool) -> YakuResult {
    let yakus: Vec<Yaku> = names_han
        .iter()
        .map(|&(name, han)| Yaku {
            name: name.to_string(),
            han,
        })
        .collect();
    let han = yakus.iter().map(|y| y.han).sum();
    YakuResult {
        yakus,
        han,
        yakuman,
    }
}

#[test]
fn test_ceil() {
    assert_eq!(ceil100(0), 0);
    assert_eq!(ceil100(1), 100);
    assert_eq!(ceil100(100), 100);
    assert_eq!(ceil100(101), 200);
    assert_eq!(ceil100(640), 700);
    assert_eq!(ceil100(ceil100(640)), 700);
    assert_eq!(ceil10(25), 30);
    assert_eq!(ceil10(30), 30);
}

#[test]
fn test_score_ron() {
    // 30符2翻 基本点480
    let res = result_of(&[("断么九", 1), ("役牌", 1)], false);
    let score = calc_score(&res, false, WinType::Ron);
    assert_eq!(score.fu, 30);
    assert_eq!(score.base, 480);
    assert_eq!(score.total, 2000);
    assert_eq!(score.payment, Payment::Ron(2000));

    let score = calc_score(&res, true, WinType::Ron);
    assert_eq!(score.total, 2900);
}

#[test]
fn test_score_pinfu_tsumo() {
    // 20符2翻ツモ 基本点320
    let res = result_of(&[("平和", 1), ("断么九", 1)], false);
    let score = calc_score(&res, false, WinType::Tsumo);
    assert_eq!(score.fu, 20);
    assert_eq!(score.base, 320);
    assert_eq!(
        score.payment,
        Payment::TsumoNonDealer {
            dealer: 700,
            other: 400
        }
    );
    assert_eq!(score.total, 1500);

    // 20符1翻ツモ 基本点160
    let res = result_of(&[("平和", 1)], false);
    let score = calc_score(&res, false, WinType::Tsumo);
    assert_eq!(score.base, 160);
    assert_eq!(
        score.payment,
        Payment::TsumoNonDealer {
            dealer: 400,
            other: 200
        }
    );
    assert_eq!(score.total, 800);
}

#[test]
fn test_score_chiitoitsu() {
    // 25符3翻 基本点800
    let res = result_of(&[("七対子", 2), ("断么九", 1)], false);
    let score = calc_score(&res, false, WinType::Ron);
    assert_eq!(score.fu, 25);
    assert_eq!(score.base, 800);
    assert_eq!(score.total, 3200);
}

#[test]
fn test_score_titles() {
    use ScoreTitle::*;

    // 5翻は符によらず満貫
    let res = result_of(&[("混一色", 3), ("対々和", 2)], false);
    let score = calc_score(&res, false, WinType::Ron);
    assert_eq!(score.title, Mangan);
    assert_eq!(score.base, 2000);
    assert_eq!(score.total, 8000);

    // 6翻 親ロン 跳満
    let res = result_of(&[("清一色", 6)], false);
    let score = calc_score(&res, true, WinType::Ron);
    assert_eq!(score.title, Haneman);
    assert_eq!(score.total, 18000);

    // 8翻 倍満
    let res = result_of(&[("清一色", 6), ("一気通貫", 2)], false);
    let score = calc_score(&res, false, WinType::Ron);
    assert_eq!(score.title, Baiman);
    assert_eq!(score.total, 16000);

    // 11翻 親ツモ 三倍満
    let res = result_of(&[("清一色", 6), ("対々和", 2), ("三暗刻", 2), ("役牌", 1)], false);
    let score = calc_score(&res, true, WinType::Tsumo);
    assert_eq!(score.title, Sanbaiman);
    assert_eq!(score.payment, Payment::TsumoDealer { each: 12000 });
    assert_eq!(score.total, 36000);

    // 13翻 子ツモ 役満
    let res = result_of(&[("国士無双", 13)], true);
    let score = calc_score(&res, false, WinType::Tsumo);
    assert_eq!(score.title, Yakuman);
    assert_eq!(score.base, 8000);
    assert_eq!(
        score.payment,
        Payment::TsumoNonDealer {
            dealer: 16000,
            other: 8000
        }
    );
    assert_eq!(score.total, 32000);
}

#[test]
fn test_score_yakuman_low_han() {
    // 役満フラグ付きでも翻数が低い場合は基本点をそのまま計算
    let res = result_of(&[("国士無双", 1)], true);
    let score = calc_score(&res, false, WinType::Ron);
    assert_eq!(score.title, ScoreTitle::Yakuman);
    assert_eq!(score.base, 240);
    assert_eq!(score.total, 1000);
}

#[test]
fn test_score_high_han_no_overflow() {
    // 翻数が極端に大きくてもシフト量を制限して上限計算が破綻しない
    let res = result_of(&[("清一色", 6), ("七対子", 2), ("断么九", 1), ("混一色", 30)], false);
    let score = calc_score(&res, false, WinType::Ron);
    assert_eq!(score.base, 8000);
    assert_eq!(score.total, 32000);
}
