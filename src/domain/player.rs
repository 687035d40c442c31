use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Color, Symbol};
use crate::domain::SeatIndex;

/// Игрок внутри одной партии: рука, фиксированное место и флаг
/// «уже взял карту в этом ходу».
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub username: String,
    /// Место в порядке ходов (0..N-1), не меняется за всю партию.
    pub seat: SeatIndex,
    /// Рука. Порядок — только для отображения, на правила не влияет.
    pub hand: Vec<Card>,
    pub drew: bool,
}

impl Player {
    pub fn new(username: String, seat: SeatIndex) -> Self {
        Self {
            username,
            seat,
            hand: Vec::new(),
            drew: false,
        }
    }

    /// Игрок ещё в партии, пока рука не пуста.
    pub fn still_in_game(&self) -> bool {
        !self.hand.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Есть ли в руке карта с такой парой (цвет, символ).
    pub fn has_card(&self, color: Color, symbol: Symbol) -> bool {
        self.position_of(color, symbol).is_some()
    }

    /// Убрать из руки карту (цвет, символ) и вернуть её.
    ///
    /// В колоде есть дубликаты, поэтому поиск идёт по значению и
    /// детерминированно снимает ПЕРВОЕ совпадение в порядке руки.
    pub fn remove_card(&mut self, color: Color, symbol: Symbol) -> Option<Card> {
        let idx = self.position_of(color, symbol)?;
        Some(self.hand.remove(idx))
    }

    fn position_of(&self, color: Color, symbol: Symbol) -> Option<usize> {
        self.hand
            .iter()
            .position(|c| c.color == color && c.symbol == symbol)
    }

    /// Рука в косметическом порядке отображения (см. `Card::sort_weight`).
    pub fn sorted_hand(&self) -> Vec<Card> {
        let mut cards = self.hand.clone();
        cards.sort_by_key(|c| c.sort_weight());
        cards
    }
}
