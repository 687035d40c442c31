use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Color, Symbol};

/// Полный размер колоды UNO.
pub const DECK_SIZE: usize = 108;

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная колода из 108 карт:
    /// на каждый из 4 цветов — один 0, по две 1–9/R/S/D (25 карт),
    /// плюс 4 Wild и 4 Draw Four.
    pub fn standard_108() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for color in [Color::Red, Color::Yellow, Color::Blue, Color::Green] {
            for symbol in [
                Symbol::Zero,
                Symbol::One,
                Symbol::Two,
                Symbol::Three,
                Symbol::Four,
                Symbol::Five,
                Symbol::Six,
                Symbol::Seven,
                Symbol::Eight,
                Symbol::Nine,
                Symbol::Reverse,
                Symbol::Skip,
                Symbol::DrawTwo,
            ] {
                let amount = if symbol == Symbol::Zero { 1 } else { 2 };
                for _ in 0..amount {
                    cards.push(Card::new(color, symbol));
                }
            }
        }
        for symbol in [Symbol::Wild, Symbol::DrawFour] {
            for _ in 0..4 {
                cards.push(Card::new(Color::Wild, symbol));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху (с конца списка).
    /// После перемешивания порядок не важен — важен только порядок снятия.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять n карт сверху. Если карт меньше — вернёт сколько есть.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(card) = self.cards.pop() {
                taken.push(card);
            } else {
                break;
            }
        }
        taken
    }
}
