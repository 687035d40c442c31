use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Цвет карты. `Wild` — «бесцветные» карты (Wild / Draw Four),
/// при розыгрыше им назначается обычный цвет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
    Wild,
}

/// Символ карты: цифры 0–9 и спецкарты.
/// Сериализуется строками протокола клиента: "0".."9", "R", "S",
/// "D", "W", "D4".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Symbol {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "R")]
    Reverse,
    #[serde(rename = "S")]
    Skip,
    #[serde(rename = "D")]
    DrawTwo,
    #[serde(rename = "W")]
    Wild,
    #[serde(rename = "D4")]
    DrawFour,
}

/// Карта UNO: пара (цвет, символ).
///
/// У разыгранной wild-карты поле `color` перезаписывается выбранным
/// цветом, поэтому верхняя карта стола всегда несёт актуальный цвет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub color: Color,
    pub symbol: Symbol,
}

impl Card {
    pub const fn new(color: Color, symbol: Symbol) -> Self {
        Self { color, symbol }
    }

    /// Можно ли положить `self` на `prev` (верхнюю карту стола):
    /// любая из карт wild, либо совпал цвет, либо совпал символ.
    pub fn playable(&self, prev: &Card) -> bool {
        if self.color == Color::Wild || prev.color == Color::Wild {
            return true;
        }
        self.color == prev.color || self.symbol == prev.symbol
    }

    /// Вес для сортировки руки на клиенте. Чисто косметический порядок:
    /// wild-карты первыми, затем цвета, внутри цвета спецкарты впереди,
    /// цифры по убыванию следом. НИКОГДА не участвует в правилах хода.
    pub fn sort_weight(&self) -> u32 {
        self.color.sort_weight() * 15 + self.symbol.sort_weight()
    }
}

impl Color {
    fn sort_weight(self) -> u32 {
        match self {
            Color::Wild => 0,
            Color::Red => 1,
            Color::Yellow => 2,
            Color::Blue => 3,
            Color::Green => 4,
        }
    }
}

impl Symbol {
    fn sort_weight(self) -> u32 {
        match self {
            Symbol::Zero => 12,
            Symbol::One => 11,
            Symbol::Two => 10,
            Symbol::Three => 9,
            Symbol::Four => 8,
            Symbol::Five => 7,
            Symbol::Six => 6,
            Symbol::Seven => 5,
            Symbol::Eight => 4,
            Symbol::Nine => 3,
            Symbol::Reverse => 2,
            Symbol::Skip => 1,
            Symbol::DrawTwo => 0,
            Symbol::Wild => 1,
            Symbol::DrawFour => 0,
        }
    }

    /// Сколько карт получает следующий игрок при розыгрыше этого символа.
    pub fn draw_penalty(self) -> usize {
        match self {
            Symbol::DrawTwo => 2,
            Symbol::DrawFour => 4,
            _ => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Wild => "Wild",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Symbol::Zero => "0",
            Symbol::One => "1",
            Symbol::Two => "2",
            Symbol::Three => "3",
            Symbol::Four => "4",
            Symbol::Five => "5",
            Symbol::Six => "6",
            Symbol::Seven => "7",
            Symbol::Eight => "8",
            Symbol::Nine => "9",
            Symbol::Reverse => "R",
            Symbol::Skip => "S",
            Symbol::DrawTwo => "D",
            Symbol::Wild => "W",
            Symbol::DrawFour => "D4",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `Red 7`, `Wild D4` — как в протоколе клиента.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.symbol)
    }
}

/// Парсинг строк протокола: "Red", "Yellow", "Blue", "Green", "Wild".
impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Red" => Ok(Color::Red),
            "Yellow" => Ok(Color::Yellow),
            "Blue" => Ok(Color::Blue),
            "Green" => Ok(Color::Green),
            "Wild" => Ok(Color::Wild),
            _ => Err(format!("Invalid color: {s}")),
        }
    }
}

/// Парсинг строк протокола: "0".."9", "R", "S", "D", "W", "D4".
impl FromStr for Symbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Symbol::Zero),
            "1" => Ok(Symbol::One),
            "2" => Ok(Symbol::Two),
            "3" => Ok(Symbol::Three),
            "4" => Ok(Symbol::Four),
            "5" => Ok(Symbol::Five),
            "6" => Ok(Symbol::Six),
            "7" => Ok(Symbol::Seven),
            "8" => Ok(Symbol::Eight),
            "9" => Ok(Symbol::Nine),
            "R" => Ok(Symbol::Reverse),
            "S" => Ok(Symbol::Skip),
            "D" => Ok(Symbol::DrawTwo),
            "W" => Ok(Symbol::Wild),
            "D4" => Ok(Symbol::DrawFour),
            _ => Err(format!("Invalid symbol: {s}")),
        }
    }
}
