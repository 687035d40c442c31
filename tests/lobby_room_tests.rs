//! Тесты комнаты: состав, хост, снэпшоты, жизненный цикл партии.

use uno_engine::api::dto::PlayerColor;
use uno_engine::domain::*;
use uno_engine::engine::INITIAL_HAND_SIZE;
use uno_engine::infra::DeterministicRng;
use uno_engine::lobby::{LobbyError, QuitOutcome, Room, MAX_ROOM_USERS};

fn room_with(host: &str, others: &[&str]) -> Room {
    let mut room = Room::new(5, host.to_string());
    for name in others {
        room.join_user(name).unwrap();
    }
    room
}

/// Новая комната: создатель — единственный участник и хост.
#[test]
fn new_room_has_creator_as_host() {
    let room = Room::new(3, "alice".to_string());

    assert_eq!(room.room_number, 3);
    assert_eq!(room.hostname, "alice");
    assert!(!room.in_game);
    assert!(room.game.is_none());

    assert_eq!(room.room_info.room_number, 3);
    assert_eq!(room.room_info.user_number, 1);
    assert_eq!(room.room_info.hostname, "alice");
    assert!(!room.room_info.in_game);
    let entry = &room.room_info.user_info["0"];
    assert_eq!(entry.username, "alice");
    assert!(!entry.ready);
}

/// Вход в комнату: готовность нового участника сброшена,
/// одиннадцатый не помещается.
#[test]
fn join_caps_at_max_users() {
    let mut room = Room::new(0, "host0".to_string());
    for i in 1..MAX_ROOM_USERS {
        room.join_user(&format!("user{i}")).unwrap();
    }
    assert_eq!(room.users.len(), 10);
    assert_eq!(room.join_user("latecomer").unwrap_err(), LobbyError::RoomFull);
    assert_eq!(room.room_info.user_number, 10);
}

/// Выход хоста: хостом становится первый в списке.
#[test]
fn quitting_host_promotes_first_remaining_user() {
    let mut room = room_with("alice", &["bob", "carol"]);

    assert_eq!(room.quit_user("alice"), QuitOutcome::Remaining);
    assert_eq!(room.hostname, "bob");
    assert_eq!(room.room_info.hostname, "bob");
    assert_eq!(room.room_info.user_number, 2);
}

/// Выход не-хоста хоста не меняет; последний выходящий опустошает комнату.
#[test]
fn quit_last_user_empties_room() {
    let mut room = room_with("alice", &["bob"]);

    assert_eq!(room.quit_user("bob"), QuitOutcome::Remaining);
    assert_eq!(room.hostname, "alice");
    assert_eq!(room.quit_user("alice"), QuitOutcome::Empty);
}

/// Готовность переключается и видна в снэпшоте.
#[test]
fn toggle_ready_updates_snapshot() {
    let mut room = room_with("alice", &["bob"]);

    room.toggle_ready("bob").unwrap();
    assert!(room.room_info.user_info["1"].ready);

    room.toggle_ready("bob").unwrap();
    assert!(!room.room_info.user_info["1"].ready);

    assert_eq!(
        room.toggle_ready("ghost").unwrap_err(),
        LobbyError::NotInRoom
    );
}

/// Старт партии: места по порядку списка, снэпшот партии готов.
#[test]
fn start_game_builds_game_info() {
    let mut room = room_with("alice", &["bob", "carol"]);
    room.start_game(&mut DeterministicRng::from_seed(11)).unwrap();

    assert!(room.in_game);
    assert!(room.room_info.in_game);

    let game = room.game.as_ref().unwrap();
    assert_eq!(game.players[0].username, "alice");
    assert_eq!(game.players[1].username, "bob");
    assert_eq!(game.players[2].username, "carol");

    let info = room.game_info.as_ref().unwrap();
    assert!(!info.game_end);
    assert_eq!(info.current_player, "alice");
    assert_eq!(info.next_player, "bob");
    assert_eq!(
        info.player_colors,
        vec![PlayerColor::Green, PlayerColor::Yellow, PlayerColor::White]
    );
    assert_eq!(info.player_card_nums, vec![INITIAL_HAND_SIZE; 3]);
    assert!(info.result.is_none());
    assert!(info.cards.is_empty(), "общая часть не содержит руки");

    // войти в игровую комнату нельзя
    assert_eq!(
        room.join_user("dave").unwrap_err(),
        LobbyError::GameAlreadyStarted
    );
}

/// Персональный снэпшот: своя рука в порядке отображения.
#[test]
fn game_info_for_fills_own_sorted_hand() {
    let mut room = room_with("alice", &["bob"]);
    room.start_game(&mut DeterministicRng::from_seed(4)).unwrap();

    let info = room.game_info_for("bob").unwrap();
    assert_eq!(info.cards.len(), INITIAL_HAND_SIZE);
    let game = room.game.as_ref().unwrap();
    assert_eq!(info.cards, game.players[1].sorted_hand());

    // не участвующий в партии снэпшота руки не получает
    assert_eq!(
        room.game_info_for("ghost").unwrap_err(),
        LobbyError::NotInGame
    );
}

/// Метаданные партии: имена по местам и место запрашивающего.
#[test]
fn game_meta_lists_players_by_seat() {
    let mut room = room_with("alice", &["bob"]);

    assert_eq!(
        room.game_meta_for("alice").unwrap_err(),
        LobbyError::GameNotStarted
    );

    room.start_game(&mut DeterministicRng::from_seed(4)).unwrap();
    let meta = room.game_meta_for("bob").unwrap();
    assert_eq!(meta.player_num, 2);
    assert_eq!(meta.index, 1);
    assert_eq!(meta.usernames["0"], "alice");
    assert_eq!(meta.usernames["1"], "bob");
}

/// До старта игровые действия отклоняются.
#[test]
fn game_actions_before_start_are_rejected() {
    let mut room = room_with("alice", &["bob"]);
    assert_eq!(
        room.draw_card("alice").unwrap_err(),
        LobbyError::GameNotStarted
    );
    assert_eq!(
        room.play_card("alice", Color::Red, Symbol::One, None)
            .unwrap_err(),
        LobbyError::GameNotStarted
    );
}

/// Завершение партии: комната возвращается в лобби, готовность
/// сброшена, итоговая таблица записана, партия доступна для чтения.
#[test]
fn finished_game_returns_room_to_lobby() {
    let mut room = room_with("alice", &["bob"]);
    room.toggle_ready("bob").unwrap();
    room.start_game(&mut DeterministicRng::from_seed(8)).unwrap();

    // подменяем раздачу на заведомо короткую концовку
    {
        let game = room.game.as_mut().unwrap();
        game.players[0].hand = vec![Card::new(Color::Red, Symbol::One)];
        game.players[1].hand = vec![Card::new(Color::Red, Symbol::Two)];
        game.top_card = Card::new(Color::Red, Symbol::Five);
        game.current = 0;
    }

    room.play_card("alice", Color::Red, Symbol::One, None).unwrap();

    assert!(!room.in_game, "комната вернулась в лобби");
    assert!(!room.room_info.in_game);
    assert!(room.users.iter().all(|u| !u.ready));

    let info = room.game_info.as_ref().unwrap();
    assert!(info.game_end);
    assert_eq!(info.result.as_deref(), Some("1. alice\n2. bob"));
    assert_eq!(info.player_colors[0], PlayerColor::Grey);
    assert_eq!(info.player_colors[1], PlayerColor::Green);

    // партия остаётся читаемой до следующего старта
    assert!(room.game_info_for("bob").is_ok());

    // а игровые действия по завершённой партии отклоняются движком
    assert_eq!(
        room.draw_card("bob").unwrap_err(),
        LobbyError::Game(uno_engine::engine::GameError::GameFinished)
    );
}

/// Подсветка хода: зелёный — текущий, жёлтый — следующий.
#[test]
fn player_colors_follow_turn() {
    let mut room = room_with("alice", &["bob", "carol"]);
    room.start_game(&mut DeterministicRng::from_seed(2)).unwrap();

    room.draw_card("alice").unwrap();
    room.skip_card("alice").unwrap();

    let info = room.game_info.as_ref().unwrap();
    assert_eq!(info.current_player, "bob");
    assert_eq!(info.next_player, "carol");
    assert_eq!(
        info.player_colors,
        vec![PlayerColor::White, PlayerColor::Green, PlayerColor::Yellow]
    );
}
