//! CLI card battle example.
//!
//! Usage: `cargo run --example cli_battle [deck-file]`

#![allow(clippy::missing_docs_in_private_items)]

use std::collections::HashMap;
use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use cardclash::{
    AssetKey, Card, CardEffect, CardImages, Combatant, Deck, Match, MatchOptions, Play, Side,
    SeededRandom, StepEvent, Suit, TurnState,
};

type Glyphs = HashMap<AssetKey, String>;

fn main() {
    println!("Card battle CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = SeededRandom::new(seed);
    let glyphs = card_glyphs();

    let mut player_deck = Deck::new(&mut rng);
    if let Some(path) = std::env::args().nth(1) {
        match player_deck.load_file(&path, &mut rng) {
            Ok(()) => println!("Loaded {} cards from {path}.", player_deck.len()),
            Err(err) => match std::error::Error::source(&err) {
                Some(source) => println!("Deck error: {err}: {source}"),
                None => println!("Deck error: {err}"),
            },
        }
    }

    loop {
        match prompt_line("[s]tart, [e]dit deck, [q]uit: ").as_str() {
            "s" | "start" => break,
            "e" | "edit" => edit_deck(&mut player_deck, &glyphs),
            "q" | "quit" => return,
            _ => println!("Unknown option."),
        }
    }

    let opponent_deck = Deck::new(&mut rng);
    let options = MatchOptions::default();
    let mut battle = Match::with_decks(options, player_deck, opponent_deck, rng);

    while !battle.is_over() {
        if battle.state() == TurnState::PlayerTurn {
            print_table(&battle, &glyphs);
            let action = prompt_line("Action ([1-5] select, [p]lay, [d]raw, [q]uit): ");
            let result = match action.as_str() {
                "p" | "play" => battle.play().map(|play| print_play(&play, &glyphs)),
                "d" | "draw" => battle.draw().map(|card| match card {
                    Some(card) => println!("You draw {}.", glyph(&glyphs, card)),
                    None => println!("Your deck is empty."),
                }),
                "q" | "quit" => return,
                slot => match slot.parse::<usize>() {
                    Ok(slot @ 1..=5) => battle.select(slot - 1).map(|_| ()),
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                },
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
            continue;
        }

        let wait = battle.time_until_step().unwrap_or_default();
        if !wait.is_zero() {
            thread::sleep(wait);
        }
        if let Some(event) = battle.tick(wait) {
            print_event(&event, &glyphs);
        }
    }

    print_table(&battle, &glyphs);
    match battle.winner() {
        Some(Side::Player) => println!("YOU WIN!"),
        Some(Side::Opponent) => println!("You lose."),
        None => {}
    }
}

fn edit_deck(deck: &mut Deck, glyphs: &Glyphs) {
    loop {
        for (index, card) in deck.cards().iter().enumerate() {
            print!("{index:>2}:{} ", glyph(glyphs, *card));
            if index % 13 == 12 {
                println!();
            }
        }
        println!();

        let input = prompt_line("Replace '<position> <card>' (e.g. '3 ace of spades'), blank to finish: ");
        if input.is_empty() {
            return;
        }

        let Some((position, identifier)) = input.split_once(' ') else {
            println!("Expected a position and a card.");
            continue;
        };
        let Ok(position) = position.parse::<usize>() else {
            println!("Position must be a number.");
            continue;
        };
        let card = match capitalize_words(identifier).parse::<Card>() {
            Ok(card) => card,
            Err(err) => {
                println!("Card error: {err}");
                continue;
            }
        };

        match deck.replace(position, card) {
            Ok(old) => println!("Replaced {old} with {card}."),
            Err(err) => println!("Deck error: {err}"),
        }
    }
}

fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            if word == "of" {
                return word.to_string();
            }
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(battle: &Match, glyphs: &Glyphs) {
    println!();
    print_combatant("Opponent", battle.opponent(), glyphs, false);
    if let Some(card) = battle.revealed_card() {
        println!("  revealed: {}", glyph(glyphs, card));
    }
    print_combatant("You", battle.player(), glyphs, true);
    println!("Turn {} | {:?}", battle.turn_number(), battle.state());
    println!();
}

fn print_combatant(label: &str, combatant: &Combatant, glyphs: &Glyphs, show_slots: bool) {
    println!(
        "{label}: life {} | shield {} | poison {} | mana {} | deck {}",
        combatant.life(),
        combatant.shield(),
        combatant.poison(),
        combatant.mana(),
        combatant.deck().len()
    );

    let hand = combatant
        .hand()
        .iter()
        .enumerate()
        .map(|(index, &card)| {
            let marker = if combatant.selected_card() == Some(card) {
                "*"
            } else {
                " "
            };
            if show_slots {
                format!("{marker}{}:{}", index + 1, glyph(glyphs, card))
            } else {
                format!("{marker}{}", glyph(glyphs, card))
            }
        })
        .collect::<Vec<_>>();
    println!("  hand: {}", hand.join(" "));
}

fn print_event(event: &StepEvent, glyphs: &Glyphs) {
    match event {
        StepEvent::Revealed(Some(card)) => println!("Opponent draws {}.", glyph(glyphs, *card)),
        StepEvent::Revealed(None) => println!("Opponent's deck is empty."),
        StepEvent::Selected(card) => println!("Opponent picks {}.", glyph(glyphs, *card)),
        StepEvent::Drew(_) => println!("Opponent pays for a draw."),
        StepEvent::Played(play) => print_play(play, glyphs),
        StepEvent::Resolved { side, report } => println!(
            "{side:?} ends the turn: {} poison, {} damage.",
            report.poison_damage, report.strike_damage
        ),
    }
}

fn print_play(play: &Play, glyphs: &Glyphs) {
    let card = glyph(glyphs, play.card);
    let who = match play.side {
        Side::Player => "You",
        Side::Opponent => "Opponent",
    };
    let what = match play.effect {
        CardEffect::Heal(amount) => format!("heals {amount}"),
        CardEffect::Poison(amount) => format!("poisons for {amount}"),
        CardEffect::Cleanse { before, after } => format!("cleanses poison {before} -> {after}"),
        CardEffect::Shield(amount) => format!("shields for {amount}"),
        CardEffect::ShieldBash { broken, pending } => {
            format!("breaks {broken} shield and readies {pending} damage")
        }
        CardEffect::Strike(amount) => format!("readies {amount} damage"),
    };
    println!("{who} played {card}: {what}.");
}

fn glyph(glyphs: &Glyphs, card: Card) -> String {
    glyphs
        .card_image(card)
        .cloned()
        .unwrap_or_else(|| card.to_string())
}

fn card_glyphs() -> Glyphs {
    Card::catalog()
        .map(|card| (AssetKey::from(card), format_card(card)))
        .collect()
}

fn format_card(card: Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "33"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank.label() {
        "Jack" => "J",
        "Queen" => "Q",
        "King" => "K",
        "Ace" => "A",
        number => number,
    };
    colorize(&format!("{rank}{suit}"), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
