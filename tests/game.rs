//! Game integration tests.

use blackjack21::{
    ActionError, Card, Command, CommandError, DECK_SIZE, Deck, DrawError, Event, Game, Hand,
    Outcome, Phase, Table,
};

use Card::{Ace, Eight, Five, Four, King, Nine, Queen, Seven, Six, Ten, Three, Two};

/// Puts `game` in the middle of a round with the given hands.
fn mid_round(game: &mut Game, dealer: &[Card], player: &[Card]) {
    game.started = true;
    game.dealer_turn = false;
    game.dealer = Hand::from_cards(dealer.to_vec());
    game.player = Hand::from_cards(player.to_vec());
}

fn outcome(events: &[Event]) -> Option<Outcome> {
    match events.last() {
        Some(Event::Resolved(outcome)) => Some(*outcome),
        _ => None,
    }
}

#[test]
fn new_game_is_inert() {
    let game = Game::new(1);
    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(!game.started);
    assert!(game.dealer.is_empty());
    assert!(game.player.is_empty());
    assert_eq!(game.legal_commands(), &[Command::Deal, Command::Quit]);
}

#[test]
fn deal_gives_two_cards_each() {
    let mut game = Game::new(42);
    let events = game.apply(Command::Deal).unwrap();

    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert!(game.started);
    assert!(!game.dealer_turn);
    assert_eq!(game.dealer.len(), 2);
    assert_eq!(game.player.len(), 2);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
    assert_eq!(events, vec![Event::Table(game.table())]);

    let mut all: Vec<Card> = game.deck.cards().to_vec();
    all.extend_from_slice(game.dealer.cards());
    all.extend_from_slice(game.player.cards());
    all.sort_unstable();
    assert_eq!(all, Deck::new().cards());
}

#[test]
fn deal_hides_the_hole_card() {
    let mut game = Game::new(9);
    game.deal().unwrap();

    let table = game.table();
    assert!(!table.hole_revealed);
    assert!(table.house_line().starts_with("House: *, "));
    assert!(!table.player_line().contains('*'));
}

#[test]
fn deal_restarts_a_round_in_progress() {
    let mut game = Game::new(4);
    mid_round(&mut game, &[Ten, Six], &[Two, Three, Five]);
    game.dealer_turn = true;
    game.deck = Deck::from_cards(vec![]);

    game.apply(Command::Deal).unwrap();

    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.player.len(), 2);
    assert_eq!(game.dealer.len(), 2);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn same_seed_deals_same_cards() {
    let mut first = Game::new(2024);
    let mut second = Game::new(2024);
    first.deal().unwrap();
    second.deal().unwrap();

    assert_eq!(first.dealer, second.dealer);
    assert_eq!(first.player, second.player);
    assert_eq!(first.deck, second.deck);
}

#[test]
fn hit_on_21_always_busts() {
    for seed in 0..20 {
        let mut game = Game::new(seed);
        mid_round(&mut game, &[Nine, Seven], &[King, Queen, Ace]);
        game.deck = Deck::new();
        assert_eq!(game.player.value(), 21);

        let events = game.apply(Command::Hit).unwrap();

        assert_eq!(game.player.len(), 4);
        assert!(game.player.value() > 21);
        assert_eq!(outcome(&events), Some(Outcome::Loss));
        assert!(!game.started);
        assert_eq!(game.phase(), Phase::NotStarted);
        assert_eq!(game.dealer.len(), 2);
    }
}

#[test]
fn hit_without_bust_keeps_player_turn() {
    let mut game = Game::new(6);
    mid_round(&mut game, &[Nine, Seven], &[Two, Two]);
    game.deck = Deck::from_cards(vec![Five]);

    let events = game.apply(Command::Hit).unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(game.player.cards(), &[Two, Two, Five]);
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert!(game.deck.is_empty());
}

#[test]
fn dealer_stands_on_17_and_player_wins_with_20() {
    let mut game = Game::new(7);
    mid_round(&mut game, &[Ten, Seven], &[King, Queen]);
    let remaining = game.cards_remaining();

    let events = game.apply(Command::Stand).unwrap();

    assert_eq!(
        events,
        vec![
            Event::Table(Table {
                dealer: vec![Ten, Seven],
                player: vec![King, Queen],
                hole_revealed: true,
            }),
            Event::Resolved(Outcome::Win),
        ]
    );
    assert_eq!(game.cards_remaining(), remaining);
    assert!(game.dealer_turn);
    assert!(!game.started);
}

#[test]
fn equal_values_tie() {
    let mut game = Game::new(8);
    mid_round(&mut game, &[Ten, Eight], &[Nine, Nine]);

    let events = game.apply(Command::Stand).unwrap();
    assert_eq!(outcome(&events), Some(Outcome::Tie));
    assert_eq!(game.phase(), Phase::NotStarted);
}

#[test]
fn higher_dealer_value_loses() {
    let mut game = Game::new(8);
    mid_round(&mut game, &[Ten, Nine], &[Ten, Eight]);

    let events = game.apply(Command::Stand).unwrap();
    assert_eq!(outcome(&events), Some(Outcome::Loss));
}

#[test]
fn dealer_draws_until_17() {
    let mut game = Game::new(10);
    mid_round(&mut game, &[Ten, Two], &[Ten, Nine]);
    game.deck = Deck::from_cards(vec![Five]);

    let events = game.apply(Command::Stand).unwrap();

    assert_eq!(events.len(), 4);
    assert_eq!(events[1], Event::DealerHits);
    assert_eq!(game.dealer.cards(), &[Ten, Two, Five]);
    assert_eq!(outcome(&events), Some(Outcome::Win));
    assert!(game.deck.is_empty());
}

#[test]
fn dealer_bust_is_a_player_win() {
    let mut game = Game::new(11);
    mid_round(&mut game, &[Ten, Six], &[Ten, Two]);
    game.deck = Deck::from_cards(vec![King; 4]);

    let events = game.apply(Command::Stand).unwrap();

    assert_eq!(game.dealer.value(), 26);
    assert_eq!(game.dealer.len(), 3);
    assert_eq!(events[1], Event::DealerHits);
    assert_eq!(outcome(&events), Some(Outcome::Win));
    assert_eq!(game.cards_remaining(), 3);
    assert!(!game.started);
}

#[test]
fn hit_is_rejected_before_a_round() {
    let mut game = Game::new(12);
    game.player = Hand::from_cards(vec![Ten, Six]);
    game.dealer = Hand::from_cards(vec![Nine, Nine]);

    assert_eq!(game.apply(Command::Hit).unwrap_err(), ActionError::Illegal);
    assert_eq!(game.apply(Command::Stand).unwrap_err(), ActionError::Illegal);

    assert_eq!(game.player.cards(), &[Ten, Six]);
    assert_eq!(game.dealer.cards(), &[Nine, Nine]);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.phase(), Phase::NotStarted);
}

#[test]
fn commands_parse_case_insensitively() {
    assert_eq!("HIT".parse::<Command>(), Ok(Command::Hit));
    assert_eq!("hIt".parse::<Command>(), Ok(Command::Hit));
    assert_eq!(" Stand \n".parse::<Command>(), Ok(Command::Stand));
    assert_eq!("DEAL".parse::<Command>(), Ok(Command::Deal));
    assert_eq!("Quit".parse::<Command>(), Ok(Command::Quit));
    assert_eq!("hitme".parse::<Command>(), Err(CommandError::Unrecognized));
    assert_eq!("".parse::<Command>(), Err(CommandError::Unrecognized));
}

#[test]
fn mixed_case_hit_is_accepted_mid_round() {
    let mut game = Game::new(13);
    mid_round(&mut game, &[Nine, Seven], &[Two, Three]);
    game.deck = Deck::from_cards(vec![Four]);

    let command = "HIT".parse::<Command>().unwrap();
    game.apply(command).unwrap();

    assert_eq!(game.player.len(), 3);
}

#[test]
fn legal_commands_follow_the_phase() {
    assert_eq!(
        Phase::NotStarted.legal_commands(),
        &[Command::Deal, Command::Quit]
    );
    for phase in [Phase::PlayerTurn, Phase::DealerTurn] {
        assert_eq!(
            phase.legal_commands(),
            &[Command::Deal, Command::Hit, Command::Stand, Command::Quit]
        );
    }
    assert!(Phase::NotStarted.allows(Command::Quit));
    assert!(!Phase::NotStarted.allows(Command::Stand));
}

#[test]
fn empty_deck_aborts_the_round() {
    let mut game = Game::new(14);
    mid_round(&mut game, &[Nine, Seven], &[Two, Two]);
    game.deck = Deck::from_cards(vec![]);

    assert_eq!(
        game.apply(Command::Hit).unwrap_err(),
        ActionError::Draw(DrawError::EmptyDeck)
    );
    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.player.len(), 2);
}

#[test]
fn empty_deck_during_dealer_play_aborts_the_round() {
    let mut game = Game::new(15);
    mid_round(&mut game, &[Ten, Two], &[Ten, Nine]);
    game.deck = Deck::from_cards(vec![]);

    assert_eq!(game.stand().unwrap_err(), DrawError::EmptyDeck);
    assert!(!game.started);
    assert!(!game.dealer_turn);
    assert_eq!(game.dealer.len(), 2);
}

#[test]
fn quit_is_always_legal_and_changes_nothing() {
    let mut game = Game::new(16);
    assert!(game.apply(Command::Quit).unwrap().is_empty());
    assert_eq!(game.phase(), Phase::NotStarted);

    game.deal().unwrap();
    let before = game.clone();
    assert!(game.apply(Command::Quit).unwrap().is_empty());
    assert_eq!(game.player, before.player);
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

#[test]
fn table_renders_both_hands() {
    let table = Table {
        dealer: vec![Ten, Seven, Ace],
        player: vec![Ace, Queen],
        hole_revealed: false,
    };
    assert_eq!(table.house_line(), "House: *, 7, A");
    assert_eq!(table.player_line(), "Player: A, Q");

    let revealed = Table {
        hole_revealed: true,
        ..table
    };
    assert_eq!(revealed.house_line(), "House: 10, 7, A");
    assert_eq!(revealed.to_string(), "House: 10, 7, A\nPlayer: A, Q");
}

#[test]
fn events_render_messages() {
    assert_eq!(Event::DealerHits.lines(), ["Dealer hits..."]);
    assert_eq!(
        Event::Resolved(Outcome::Win).lines(),
        ["You won the game."]
    );
    assert_eq!(
        Event::Resolved(Outcome::Loss).lines(),
        ["You lost the game."]
    );
    assert_eq!(
        Event::Resolved(Outcome::Tie).lines(),
        ["The game is a Tie."]
    );
}
