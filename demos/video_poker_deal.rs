//! Five-card draw video poker dealing example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pokerdeck::{Card, Deck, DeckError, Suit};

const HAND_SIZE: usize = 5;

fn main() {
    let _ = env_logger::try_init();

    println!("Video poker deal example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::new(seed);

    loop {
        deck.reset();
        deck.shuffle();

        let mut hand = match deck.deal(HAND_SIZE) {
            Ok(hand) => hand,
            Err(err) => {
                println!("Deal error: {err}");
                break;
            }
        };
        println!("\nDealt: {}", format_hand(&hand));

        let input = prompt_line("Positions to hold (e.g. 1 3 5), blank for none: ");
        if input == "q" || input == "quit" {
            println!("Goodbye.");
            break;
        }
        let held = parse_holds(&input);

        if let Err(err) = redraw(&mut deck, &mut hand, &held) {
            println!("Draw error: {err}");
            break;
        }
        println!("Final: {}", format_hand(&hand));
        println!("Deck: {} cards remaining", deck.len());

        if prompt_line("Play again? (y/n): ") != "y" {
            println!("Goodbye.");
            break;
        }
    }
}

/// Swaps every card not held for a fresh one.
fn redraw(deck: &mut Deck, hand: &mut [Card], held: &[bool; HAND_SIZE]) -> Result<(), DeckError> {
    for (slot, keep) in hand.iter_mut().zip(held) {
        if !keep {
            *slot = deck.draw()?;
        }
    }
    Ok(())
}

fn parse_holds(input: &str) -> [bool; HAND_SIZE] {
    let mut held = [false; HAND_SIZE];
    for token in input.split_whitespace() {
        match token.parse::<usize>() {
            Ok(position @ 1..=HAND_SIZE) => held[position - 1] = true,
            _ => println!("Ignoring '{token}'."),
        }
    }
    held
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn format_hand(hand: &[Card]) -> String {
    hand.iter()
        .enumerate()
        .map(|(index, card)| format!("{}:{}", index + 1, format_card(card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "33"),
        Suit::Spades => ("S", "34"),
        Suit::Clubs => ("C", "32"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
