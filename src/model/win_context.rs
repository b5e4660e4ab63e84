use super::*;

// [YakuResult]

// 成立した役
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Yaku {
    pub name: String, // 役名
    pub han: usize,   // 翻数
}

// 役判定の結果
// 和了形でない場合は役なし・0翻となる (役なし == 和了不可として扱う)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct YakuResult {
    pub yakus: Vec<Yaku>, // 成立した役の一覧
    pub han: usize,       // 翻数の合計
    pub yakuman: bool,    // 役満かどうか
}

impl YakuResult {
    // 1つ以上の役が成立している場合のみ和了とみなす
    #[inline]
    pub fn is_win(&self) -> bool {
        !self.yakus.is_empty()
    }

    pub fn has_yaku(&self, name: &str) -> bool {
        self.yakus.iter().any(|y| y.name == name)
    }
}

// [Tenpai]

// 聴牌判定の結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tenpai {
    pub is_tenpai: bool,  // 聴牌しているかどうか
    pub waits: Vec<Tile>, // 和了牌の一覧 (種別,数字の昇順)
}

// [ScoreBreakdown]

// 和了の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum WinType {
    Tsumo, // ツモ和了
    Ron,   // ロン和了
}

// 点数の区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ScoreTitle {
    None,
    Mangan,    // 満貫
    Haneman,   // 跳満
    Baiman,    // 倍満
    Sanbaiman, // 三倍満
    Yakuman,   // 役満
}

impl fmt::Display for ScoreTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreTitle::None => "",
            ScoreTitle::Mangan => "満貫",
            ScoreTitle::Haneman => "跳満",
            ScoreTitle::Baiman => "倍満",
            ScoreTitle::Sanbaiman => "三倍満",
            ScoreTitle::Yakuman => "役満",
        };
        write!(f, "{}", s)
    }
}

// 支払いの内訳
// それぞれの支払いは個別に100点単位に切り上げ済み
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "t", content = "c")]
pub enum Payment {
    Ron(Point),                                    // 放銃者の支払い
    TsumoDealer { each: Point },                   // 親ツモ: 子3人の各支払い
    TsumoNonDealer { dealer: Point, other: Point }, // 子ツモ: 親の支払いと他の子2人の各支払い
}

// 点数計算の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreBreakdown {
    pub fu: usize,         // 符数
    pub han: usize,        // 翻数
    pub title: ScoreTitle, // 満貫, 跳満, ...
    pub base: Point,       // 基本点 (上限適用後)
    pub total: Point,      // 和了得点の合計
    pub payment: Payment,  // 支払いの内訳
}
