//! Тесты владения ходом и порядка draw/skip (crate::engine).

use uno_engine::domain::*;
use uno_engine::engine::{Game, GameError, INITIAL_HAND_SIZE};
use uno_engine::infra::DeterministicRng;

/// Партия с заранее заданными руками, верхней картой и колодой.
/// Имена: p0, p1, … Ход у p0, направление +1.
fn fixed_game(hands: Vec<Vec<Card>>, top_card: Card, deck: Vec<Card>) -> Game {
    let players = hands
        .into_iter()
        .enumerate()
        .map(|(seat, hand)| {
            let mut p = Player::new(format!("p{seat}"), seat);
            p.hand = hand;
            p
        })
        .collect();
    Game {
        deck: Deck { cards: deck },
        players,
        direction: 1,
        current: 0,
        top_card,
        game_end: false,
        rank_list: Vec::new(),
    }
}

fn red(symbol: Symbol) -> Card {
    Card::new(Color::Red, symbol)
}

/// Конструктор: по 7 карт на руки, одна верхняя, остальное в колоде.
#[test]
fn new_game_deals_seven_each_and_one_top() {
    let names: Vec<String> = ["alice", "bob", "carol"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut rng = DeterministicRng::from_seed(7);
    let game = Game::new(&names, &mut rng).unwrap();

    assert_eq!(game.players.len(), 3);
    for (seat, player) in game.players.iter().enumerate() {
        assert_eq!(player.seat, seat);
        assert_eq!(player.hand.len(), INITIAL_HAND_SIZE);
        assert!(!player.drew);
    }
    assert_eq!(game.current, 0);
    assert_eq!(game.direction, 1);
    assert!(!game.game_end);
    assert!(game.rank_list.is_empty());
    assert_eq!(game.deck.len(), 108 - 3 * INITIAL_HAND_SIZE - 1);
}

/// Один и тот же seed — одна и та же раздача.
#[test]
fn new_game_is_reproducible_with_seed() {
    let names: Vec<String> = ["alice", "bob"].iter().map(|s| s.to_string()).collect();
    let a = Game::new(&names, &mut DeterministicRng::from_seed(42)).unwrap();
    let b = Game::new(&names, &mut DeterministicRng::from_seed(42)).unwrap();

    assert_eq!(a.top_card, b.top_card);
    assert_eq!(a.players[0].hand, b.players[0].hand);
    assert_eq!(a.players[1].hand, b.players[1].hand);
    assert_eq!(a.deck, b.deck);
}

#[test]
fn new_game_requires_two_players() {
    let names = vec!["alone".to_string()];
    let err = Game::new(&names, &mut DeterministicRng::from_seed(1)).unwrap_err();
    assert_eq!(err, GameError::NotEnoughPlayers);
}

/// Любая операция не с текущего места — NotCurrentPlayer.
#[test]
fn actions_from_wrong_seat_are_rejected() {
    let mut game = fixed_game(
        vec![vec![red(Symbol::One)], vec![red(Symbol::Two)]],
        red(Symbol::Five),
        vec![red(Symbol::Nine); 5],
    );

    assert_eq!(game.draw(1).unwrap_err(), GameError::NotCurrentPlayer);
    assert_eq!(game.skip(1).unwrap_err(), GameError::NotCurrentPlayer);
    assert_eq!(
        game.play(1, Color::Red, Symbol::Two, None).unwrap_err(),
        GameError::NotCurrentPlayer
    );
    // состояние не изменилось
    assert_eq!(game.current, 0);
    assert_eq!(game.players[1].hand.len(), 1);
}

#[test]
fn invalid_seat_is_rejected() {
    let mut game = fixed_game(
        vec![vec![red(Symbol::One)], vec![red(Symbol::Two)]],
        red(Symbol::Five),
        vec![],
    );
    assert_eq!(game.draw(9).unwrap_err(), GameError::InvalidSeat(9));
}

/// draw не передаёт ход; второй draw подряд запрещён.
#[test]
fn draw_sets_flag_and_double_draw_is_rejected() {
    let mut game = fixed_game(
        vec![vec![red(Symbol::One)], vec![red(Symbol::Two)]],
        red(Symbol::Five),
        vec![red(Symbol::Nine); 3],
    );

    game.draw(0).unwrap();
    assert_eq!(game.current, 0, "draw не передаёт ход");
    assert!(game.players[0].drew);
    assert_eq!(game.players[0].hand.len(), 2);

    assert_eq!(game.draw(0).unwrap_err(), GameError::AlreadyDrew);
    assert_eq!(game.players[0].hand.len(), 2);
}

/// skip разрешён только после draw в этом же ходу.
#[test]
fn skip_requires_prior_draw() {
    let mut game = fixed_game(
        vec![vec![red(Symbol::One)], vec![red(Symbol::Two)]],
        red(Symbol::Five),
        vec![red(Symbol::Nine); 3],
    );

    assert_eq!(game.skip(0).unwrap_err(), GameError::HaventDrawn);

    game.draw(0).unwrap();
    game.skip(0).unwrap();
    assert_eq!(game.current, 1);
    assert!(!game.players[0].drew, "skip сбрасывает флаг взятия");

    // новый ход p1: draw снова обязателен перед skip
    assert_eq!(game.skip(1).unwrap_err(), GameError::HaventDrawn);
}

/// Сыгранная карта сбрасывает флаг взятия: после draw можно играть,
/// и в следующем своём ходу игрок снова может взять карту.
#[test]
fn play_after_draw_resets_drew_flag() {
    let mut game = fixed_game(
        vec![
            vec![red(Symbol::One), red(Symbol::Two)],
            vec![red(Symbol::Three)],
        ],
        red(Symbol::Five),
        vec![red(Symbol::Nine); 4],
    );

    game.draw(0).unwrap();
    game.play(0, Color::Red, Symbol::One, None).unwrap();
    assert!(!game.players[0].drew);
    assert_eq!(game.current, 1);

    game.play(1, Color::Red, Symbol::Three, None).unwrap();
    // p1 опустошил руку, но p0 ещё с картами — партия закончилась
    // (двое игроков, с картами остался один)
    assert!(game.game_end);
}

/// draw на пустой колоде — DeckExhausted, рука не растёт.
#[test]
fn draw_from_empty_deck_fails() {
    let mut game = fixed_game(
        vec![vec![red(Symbol::One)], vec![red(Symbol::Two)]],
        red(Symbol::Five),
        vec![],
    );

    assert_eq!(game.draw(0).unwrap_err(), GameError::DeckExhausted);
    assert_eq!(game.players[0].hand.len(), 1);
    assert!(!game.players[0].drew);
}

/// После конца партии все операции отвергаются.
#[test]
fn finished_game_rejects_all_actions() {
    let mut game = fixed_game(
        vec![vec![red(Symbol::One)], vec![red(Symbol::Two)]],
        red(Symbol::Five),
        vec![red(Symbol::Nine); 3],
    );
    game.play(0, Color::Red, Symbol::One, None).unwrap();
    assert!(game.game_end);

    assert_eq!(game.draw(1).unwrap_err(), GameError::GameFinished);
    assert_eq!(game.skip(1).unwrap_err(), GameError::GameFinished);
    assert_eq!(
        game.play(1, Color::Red, Symbol::Two, None).unwrap_err(),
        GameError::GameFinished
    );
}

/// Сохранение карт: |колода| + Σ|руки| + 1 (верхняя) неизменно.
#[test]
fn card_conservation_through_operations() {
    let names: Vec<String> = ["alice", "bob", "carol", "dave"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut rng = DeterministicRng::from_seed(99);
    let mut game = Game::new(&names, &mut rng).unwrap();

    let total = |g: &Game| {
        g.deck.len() + g.players.iter().map(|p| p.hand.len()).sum::<usize>() + 1
    };
    assert_eq!(total(&game), 108);

    // несколько кругов draw + skip карт не создают и не уничтожают
    for _ in 0..8 {
        let seat = game.current;
        game.draw(seat).unwrap();
        assert_eq!(total(&game), 108);
        game.skip(seat).unwrap();
        assert_eq!(total(&game), 108);
    }
}
