//! かな文字クラス
//!
//! 検索文字列に許可する文字の集合を、コードポイント範囲で明示的に定義する。
//!
//! | 範囲              | 内容                                   |
//! |-------------------|----------------------------------------|
//! | U+3041..=U+3096   | ひらがな（小書き含む）                 |
//! | U+3099..=U+309C   | 濁点・半濁点（結合文字・単独）         |
//! | U+309D..=U+309F   | ひらがな踊り字、ゟ                     |
//! | U+30A1..=U+30FA   | カタカナ（小書き含む）                 |
//! | U+30FC            | 長音符 ー                              |
//! | U+30FD..=U+30FF   | カタカナ踊り字、ヿ                     |
//! | U+31F0..=U+31FF   | カタカナ拡張（アイヌ語用小書き）       |
//! | U+FF66..=U+FF9F   | 半角カタカナ（ｰ ﾞ ﾟ を含む）            |
//!
//! ゠ (U+30A0)、中黒 ・ (U+30FB)、句読点、漢字、英数字、空白は含まない。
//! 囲みカタカナ (U+32D0..=U+32FE)、組文字 (U+3300..=U+3357)、
//! かな補助 (U+1B000..) と 🈀 (U+1F200) も対象外。

/// かな文字の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KanaKind {
  /// ひらがな
  Hiragana,
  /// 全角カタカナ
  Katakana,
  /// 半角カタカナ
  HalfwidthKatakana,
  /// 濁点・半濁点・長音符
  SoundMark,
}

/// 文字のかな種別を返す。かな文字クラスに含まれなければ `None`。
#[must_use]
pub fn classify(c: char) -> Option<KanaKind> {
  match c {
    // 半角の ｰ (U+FF70) は半角カタカナの範囲内にあるため先に判定する
    '\u{3099}'..='\u{309C}' | '\u{30FC}' | '\u{FF70}' | '\u{FF9E}'..='\u{FF9F}' => {
      Some(KanaKind::SoundMark)
    }
    '\u{3041}'..='\u{3096}' | '\u{309D}'..='\u{309F}' => Some(KanaKind::Hiragana),
    '\u{30A1}'..='\u{30FA}' | '\u{30FD}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' => {
      Some(KanaKind::Katakana)
    }
    '\u{FF66}'..='\u{FF9D}' => Some(KanaKind::HalfwidthKatakana),
    _ => None,
  }
}

/// 文字がかな文字クラスに含まれるか
#[must_use]
pub fn is_kana(c: char) -> bool {
  classify(c).is_some()
}

/// 最初に見つかった非かな文字を `(文字位置, 文字)` で返す。
///
/// 位置はバイトではなく文字単位。空文字列やかなのみの文字列では `None`。
#[must_use]
pub fn find_non_kana(input: &str) -> Option<(usize, char)> {
  input.chars().enumerate().find(|&(_, c)| !is_kana(c))
}
