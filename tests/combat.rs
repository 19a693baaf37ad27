//! Card, deck and combatant tests.

use cardclash::{
    AssetKey, Card, CardEffect, CardParseError, Combatant, DECK_SIZE, Deck, DeckError,
    MatchOptions, Rank, RandomSource, Stats, Suit, TurnReport, parse_deck_list,
};

/// Keeps every order as-is and always picks the first slot.
struct InOrder;

impl RandomSource for InOrder {
    fn shuffle(&mut self, _cards: &mut [Card]) {}

    fn choose(&mut self, len: usize) -> Option<usize> {
        (len > 0).then_some(0)
    }
}

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn combatant_with(stats: Stats) -> Combatant {
    let mut combatant = Combatant::new(Deck::standard(), &MatchOptions::default());
    combatant.set_stats(stats);
    combatant
}

fn fresh() -> Combatant {
    Combatant::new(Deck::standard(), &MatchOptions::default())
}

#[test]
fn rank_values_follow_the_table() {
    let values: Vec<i32> = Rank::ALL.iter().map(|rank| rank.value()).collect();
    assert_eq!(values, (2..=14).collect::<Vec<_>>());
    assert_eq!(Rank::Jack.value(), 11);
    assert_eq!(Rank::Ace.value(), 14);
}

#[test]
fn card_identifiers_parse_and_display() {
    let jack: Card = "Jack of Spades".parse().unwrap();
    assert_eq!(jack, card(Rank::Jack, Suit::Spades));
    assert_eq!(jack.to_string(), "Jack of Spades");

    let ten: Card = "10 of Hearts".parse().unwrap();
    assert_eq!(ten.value(), 10);

    for catalog_card in Card::catalog() {
        assert_eq!(catalog_card.to_string().parse::<Card>().unwrap(), catalog_card);
    }
}

#[test]
fn malformed_card_identifiers_are_rejected() {
    assert_eq!(
        "Jack Spades".parse::<Card>().unwrap_err(),
        CardParseError::MissingSeparator
    );
    assert_eq!(
        "11 of Spades".parse::<Card>().unwrap_err(),
        CardParseError::UnknownRank("11".to_string())
    );
    assert_eq!(
        "Ace of Stars".parse::<Card>().unwrap_err(),
        CardParseError::UnknownSuit("Stars".to_string())
    );
    assert_eq!(
        "jack of spades".parse::<Card>().unwrap_err(),
        CardParseError::UnknownRank("jack".to_string())
    );
}

#[test]
fn asset_keys_map_both_ways() {
    assert_eq!(
        AssetKey::from(card(Rank::Two, Suit::Clubs)).to_string(),
        "card_clubs_02"
    );
    assert_eq!(
        AssetKey::from(card(Rank::Ten, Suit::Hearts)).to_string(),
        "card_hearts_10"
    );
    assert_eq!(
        AssetKey::from(card(Rank::Ace, Suit::Diamonds)).to_string(),
        "card_diamonds_A"
    );

    let key: AssetKey = "card_spades_Q".parse().unwrap();
    assert_eq!(key.card(), card(Rank::Queen, Suit::Spades));

    for bad in ["card_spades_1", "card_stars_02", "spades_02", "card_spades"] {
        assert_eq!(
            bad.parse::<AssetKey>().unwrap_err(),
            CardParseError::InvalidAssetKey(bad.to_string())
        );
    }
}

#[test]
fn standard_deck_is_in_catalog_order() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.cards()[0], card(Rank::Two, Suit::Hearts));
    assert_eq!(deck.cards()[12], card(Rank::Ace, Suit::Hearts));
    assert_eq!(deck.cards()[13], card(Rank::Two, Suit::Diamonds));
    assert_eq!(deck.cards()[26], card(Rank::Two, Suit::Clubs));
    assert_eq!(deck.cards()[51], card(Rank::Ace, Suit::Spades));
}

#[test]
fn draw_is_all_or_nothing() {
    let mut deck = Deck::standard();

    let drawn = deck.draw(3).unwrap();
    assert_eq!(
        drawn,
        vec![
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Four, Suit::Hearts),
        ]
    );
    assert_eq!(deck.len(), 49);

    let before = deck.clone();
    assert_eq!(
        deck.draw(50).unwrap_err(),
        DeckError::InsufficientCards {
            requested: 50,
            remaining: 49
        }
    );
    assert_eq!(deck, before);

    assert!(deck.draw(0).unwrap().is_empty());
    assert_eq!(deck.draw(49).unwrap().len(), 49);
    assert!(deck.is_empty());
    assert!(deck.draw_one().is_err());
}

#[test]
fn put_back_appends_to_the_end() {
    let mut deck = Deck::standard();
    let jack = card(Rank::Jack, Suit::Spades);
    deck.put_back(jack);
    assert_eq!(deck.len(), DECK_SIZE + 1);
    assert_eq!(deck.cards().last(), Some(&jack));
    assert_eq!(deck.position(jack), Some(48));
}

#[test]
fn reset_restores_the_catalog() {
    let mut deck = Deck::from_cards(vec![card(Rank::Two, Suit::Clubs); 4], &mut InOrder);
    deck.reset();
    assert_eq!(deck, Deck::standard());
}

#[test]
fn deck_list_parsing_skips_blank_lines_and_reports_bad_lines() {
    let cards = parse_deck_list("Jack of Spades\n\n  4 of Clubs  \nAce of Hearts\n").unwrap();
    assert_eq!(
        cards,
        vec![
            card(Rank::Jack, Suit::Spades),
            card(Rank::Four, Suit::Clubs),
            card(Rank::Ace, Suit::Hearts),
        ]
    );

    let err = parse_deck_list("Jack of Spades\n\nJoker of Spades\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert_eq!(err.source, CardParseError::UnknownRank("Joker".to_string()));
}

#[test]
fn failed_load_leaves_the_deck_alone() {
    let mut deck = Deck::standard();
    assert!(deck.load_list("2 of Hearts\nnonsense\n", &mut InOrder).is_err());
    assert_eq!(deck, Deck::standard());

    deck.load_list("2 of Hearts\n2 of Hearts\n", &mut InOrder).unwrap();
    assert_eq!(deck.cards(), &[card(Rank::Two, Suit::Hearts); 2]);
}

#[test]
fn load_file_reads_a_deck_list() {
    let path = std::env::temp_dir().join(format!("cardclash-deck-{}.txt", std::process::id()));
    std::fs::write(&path, "Queen of Diamonds\n7 of Spades\n").unwrap();

    let mut deck = Deck::standard();
    deck.load_file(&path, &mut InOrder).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(
        deck.cards(),
        &[card(Rank::Queen, Suit::Diamonds), card(Rank::Seven, Suit::Spades)]
    );

    assert!(matches!(
        deck.load_file(&path, &mut InOrder),
        Err(cardclash::DeckFileError::Io(_))
    ));
}

#[test]
fn deck_builder_replaces_cards_and_writes_lists() {
    let mut deck = Deck::from_cards(
        vec![card(Rank::Two, Suit::Hearts), card(Rank::Three, Suit::Clubs)],
        &mut InOrder,
    );

    let old = deck.replace(1, card(Rank::King, Suit::Spades)).unwrap();
    assert_eq!(old, card(Rank::Three, Suit::Clubs));
    assert_eq!(
        deck.replace(2, card(Rank::Two, Suit::Hearts)).unwrap_err(),
        DeckError::IndexOutOfRange { index: 2, len: 2 }
    );

    assert_eq!(deck.to_list(), "2 of Hearts\nKing of Spades\n");
    assert_eq!(parse_deck_list(&deck.to_list()).unwrap(), deck.cards());
}

#[test]
fn hearts_heal_and_cost_mana() {
    let mut actor = fresh();
    let mut target = fresh();

    let effect = actor.apply_card(card(Rank::Ace, Suit::Hearts), &mut target);

    assert_eq!(effect, CardEffect::Heal(14));
    assert_eq!(actor.life(), 114);
    assert_eq!(actor.mana(), 1 - 14);
    assert_eq!(target.stats(), fresh().stats());
}

#[test]
fn odd_clubs_poison_the_opponent() {
    let mut actor = fresh();
    let mut target = fresh();

    assert_eq!(
        actor.apply_card(card(Rank::Three, Suit::Clubs), &mut target),
        CardEffect::Poison(3)
    );
    assert_eq!(target.poison(), 3);
    assert_eq!(actor.poison(), 0);
    assert_eq!(actor.mana(), -2);
}

#[test]
fn even_clubs_cleanse_own_poison() {
    let mut actor = combatant_with(Stats {
        life: 100,
        poison: 5,
        mana: 10,
        ..Stats::default()
    });
    let mut target = fresh();

    assert_eq!(
        actor.apply_card(card(Rank::Four, Suit::Clubs), &mut target),
        CardEffect::Cleanse {
            before: 5,
            after: 2
        }
    );
    assert_eq!(actor.poison(), 2);

    actor.apply_card(card(Rank::Four, Suit::Clubs), &mut target);
    assert_eq!(actor.poison(), 0);
    assert_eq!(actor.mana(), 2);
}

#[test]
fn odd_diamonds_shield_self() {
    let mut actor = fresh();
    let mut target = fresh();

    assert_eq!(
        actor.apply_card(card(Rank::Five, Suit::Diamonds), &mut target),
        CardEffect::Shield(10)
    );
    assert_eq!(actor.shield(), 10);
}

#[test]
fn even_diamonds_break_shield_and_ready_own_shield_as_damage() {
    let mut actor = combatant_with(Stats {
        life: 100,
        shield: 7,
        mana: 10,
        ..Stats::default()
    });
    let mut target = combatant_with(Stats {
        life: 100,
        shield: 10,
        ..Stats::default()
    });

    assert_eq!(
        actor.apply_card(card(Rank::Six, Suit::Diamonds), &mut target),
        CardEffect::ShieldBash {
            broken: 6,
            pending: 7
        }
    );
    assert_eq!(target.shield(), 4);
    assert_eq!(actor.shield(), 7);
    assert_eq!(actor.pending_damage(), 7);

    actor.apply_card(card(Rank::Six, Suit::Diamonds), &mut target);
    assert_eq!(target.shield(), 0);
}

#[test]
fn spades_damage_waits_for_the_end_of_turn() {
    let mut actor = fresh();
    let mut target = combatant_with(Stats {
        life: 100,
        shield: 3,
        ..Stats::default()
    });

    assert_eq!(
        actor.apply_card(card(Rank::Seven, Suit::Spades), &mut target),
        CardEffect::Strike(7)
    );
    assert_eq!(actor.pending_damage(), 7);
    assert_eq!(target.life(), 100);

    let report = actor.end_turn(&mut target, &MatchOptions::default());
    assert_eq!(report.strike_damage, 4);
    assert_eq!(target.life(), 96);
    assert_eq!(target.shield(), 1);
    assert_eq!(actor.pending_damage(), 0);
}

#[test]
fn end_turn_resolves_in_order() {
    let mut actor = combatant_with(Stats {
        life: 50,
        poison: 3,
        mana: -3,
        pending_damage: 10,
        ..Stats::default()
    });
    let mut target = combatant_with(Stats {
        life: 100,
        shield: 4,
        poison: 5,
        mana: 0,
        ..Stats::default()
    });

    let report = actor.end_turn(&mut target, &MatchOptions::default());

    assert_eq!(
        report,
        TurnReport {
            poison_damage: 5,
            strike_damage: 6,
            mana_carried: Some(3),
        }
    );
    assert_eq!(target.life(), 100 - 5 - 6);
    assert_eq!(target.shield(), 2);
    assert_eq!(target.poison(), 5);
    assert_eq!(target.mana(), 3);
    assert_eq!(actor.poison(), 1);
    assert_eq!(actor.pending_damage(), 0);
    assert_eq!(actor.life(), 50);
}

#[test]
fn end_turn_without_overspend_keeps_opponent_mana() {
    let mut actor = combatant_with(Stats {
        life: 100,
        mana: 0,
        ..Stats::default()
    });
    let mut target = combatant_with(Stats {
        life: 100,
        mana: 4,
        ..Stats::default()
    });

    let report = actor.end_turn(&mut target, &MatchOptions::default());
    assert_eq!(report.mana_carried, None);
    assert_eq!(target.mana(), 4);
}

#[test]
fn zero_rank_value_resolves_through_the_even_branches() {
    let start = Stats {
        life: 100,
        shield: 6,
        poison: 3,
        mana: 1,
        pending_damage: 0,
    };

    let mut actor = combatant_with(start);
    let mut target = combatant_with(start);
    actor.apply_value(0, Suit::Clubs, &mut target);
    assert_eq!(actor.poison(), 4);
    assert_eq!(actor.mana(), 1);

    let mut actor = combatant_with(start);
    let mut target = combatant_with(start);
    actor.apply_value(0, Suit::Diamonds, &mut target);
    assert_eq!(target.shield(), 6);
    assert_eq!(actor.pending_damage(), 6);

    let mut actor = combatant_with(start);
    let mut target = combatant_with(start);
    actor.apply_value(0, Suit::Spades, &mut target);
    assert_eq!(actor.pending_damage(), 0);
    assert_eq!(target.stats(), start);
}

#[test]
fn unparsable_card_changes_nothing() {
    let mut actor = fresh();
    let mut target = fresh();

    assert!(actor.apply_card_str("Ace of Stars", &mut target).is_err());
    assert!(actor.apply_card_str("Ace", &mut target).is_err());
    assert_eq!(actor.stats(), fresh().stats());
    assert_eq!(target.stats(), fresh().stats());

    assert_eq!(
        actor.apply_card_str("9 of Hearts", &mut target).unwrap(),
        CardEffect::Heal(9)
    );
}

#[test]
fn hand_keeps_the_newest_cards_and_drops_a_stale_selection() {
    let mut combatant = fresh();
    for _ in 0..5 {
        combatant.draw();
    }
    let oldest = combatant.select_slot(0).unwrap();
    assert_eq!(oldest, card(Rank::Two, Suit::Hearts));

    let drawn = combatant.draw();
    assert_eq!(drawn, Some(card(Rank::Seven, Suit::Hearts)));
    assert_eq!(combatant.hand().len(), 5);
    assert_eq!(combatant.hand()[0], card(Rank::Three, Suit::Hearts));
    assert_eq!(combatant.selected_card(), None);
}

#[test]
fn empty_deck_draws_nothing_but_bought_draws_still_cost_mana() {
    let options = MatchOptions::default();
    let mut combatant = Combatant::new(Deck::from_cards(Vec::new(), &mut InOrder), &options);

    assert_eq!(combatant.draw(), None);
    assert!(combatant.hand().is_empty());

    assert_eq!(combatant.buy_draw(1), None);
    assert_eq!(combatant.mana(), 0);
}

#[test]
fn zero_hand_limit_discards_every_draw() {
    let options = MatchOptions::default().with_hand_limit(0);
    let mut combatant = Combatant::new(Deck::standard(), &options);

    assert_eq!(combatant.draw(), None);
    assert_eq!(combatant.buy_draw(1), None);
    assert!(combatant.hand().is_empty());
    assert_eq!(combatant.deck().len(), DECK_SIZE - 2);
    assert_eq!(combatant.mana(), 0);
}

#[test]
fn out_of_range_values_saturate() {
    let mut actor = combatant_with(Stats {
        life: 100,
        shield: 0,
        poison: 0,
        mana: -10,
        pending_damage: 0,
    });
    let mut target = fresh();

    assert_eq!(
        actor.apply_value(i32::MAX, Suit::Diamonds, &mut target),
        CardEffect::Shield(i32::MAX)
    );
    assert_eq!(actor.shield(), i32::MAX);
    assert_eq!(actor.mana(), i32::MIN);

    actor.apply_value(i32::MAX, Suit::Hearts, &mut target);
    assert_eq!(actor.life(), i32::MAX);

    let report = actor.end_turn(&mut target, &MatchOptions::default());
    assert_eq!(report.mana_carried, Some(i32::MAX));
    assert_eq!(target.mana(), i32::MAX);
}

#[test]
fn options_copy_like_plain_values() {
    let options = MatchOptions::default().with_hand_limit(4);
    let copied = options;

    assert_eq!(copied, options);
    assert_eq!(options.hand_limit, 4);
}

#[test]
fn playing_requires_a_selection_in_hand() {
    let mut actor = fresh();
    let mut target = fresh();
    actor.draw();

    assert_eq!(
        actor.play_selected(&mut target).unwrap_err(),
        cardclash::ActionError::NoSelection
    );
    assert_eq!(
        actor.select(card(Rank::Ace, Suit::Spades)).unwrap_err(),
        cardclash::ActionError::NotInHand
    );
    assert_eq!(
        actor.select_slot(3).unwrap_err(),
        cardclash::ActionError::HandSlotOutOfRange(3)
    );
    assert_eq!(actor.mana(), 1);

    actor.select_slot(0).unwrap();
    let (played, effect) = actor.play_selected(&mut target).unwrap();
    assert_eq!(played, card(Rank::Two, Suit::Hearts));
    assert_eq!(effect, CardEffect::Heal(2));
    assert!(actor.hand().is_empty());
    assert_eq!(actor.selected_card(), None);
}
