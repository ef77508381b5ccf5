//! CLI Twenty-One example.

use std::io::{self, Write};
use std::thread::sleep;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use twenty_one::{
    Card, Decision, DecisionSource, Event, EventSink, Face, Game, MatchOptions, MatchResult,
    ReplaySource, Scores, Seat, Suit, TurnView, WinCategory,
};

const PADDING: usize = 2;

fn main() {
    env_logger::init();

    let options = MatchOptions::default();
    println!(
        "Welcome to Twenty-One! First to {} wins is grand champion.",
        options.wins_to_champion
    );

    let Some(name) = prompt_name() else {
        return;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = match Game::new(options, name, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Could not start the game: {err}");
            return;
        }
    };

    let mut input = ConsoleInput;
    let mut display = ConsoleDisplay::default();

    if let Err(err) = game.run(&mut input, &mut display) {
        println!("Game aborted: {err}");
    }

    println!("Thanks for playing Twenty-One! Goodbye.");
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_name() -> Option<String> {
    loop {
        let name = prompt_line("Enter your name: ")?;
        if !name.is_empty() {
            return Some(name);
        }
        println!("Sorry, you must enter a value.");
    }
}

fn pause(millis: u64) {
    sleep(Duration::from_millis(millis));
}

struct ConsoleInput;

impl DecisionSource for ConsoleInput {
    fn decide(&mut self, view: &TurnView<'_>) -> Decision {
        loop {
            let Some(choice) = prompt_line("\nChoose to (H)IT or (S)TAY: ") else {
                // Closed input: stop drawing.
                return Decision::Stay;
            };
            match choice.to_uppercase().as_str() {
                "H" | "HIT" => return Decision::Hit,
                "S" | "STAY" => return Decision::Stay,
                _ => println!(
                    "\nInvalid choice. Enter 'H' to hit or 'S' to stay (you have {}).",
                    view.hand.total()
                ),
            }
        }
    }
}

impl ReplaySource for ConsoleInput {
    fn play_again(&mut self, _result: &MatchResult) -> bool {
        loop {
            let Some(choice) = prompt_line("\nWould you like to play again? (Y/N) ") else {
                return false;
            };
            match choice.to_uppercase().as_str() {
                "Y" | "YES" => return true,
                "N" | "NO" => return false,
                _ => println!("Sorry, you must enter Y for yes or N for no."),
            }
        }
    }
}

#[derive(Default)]
struct ConsoleDisplay {
    player: String,
    dealer: String,
    player_cards: Vec<Card>,
    dealer_cards: Vec<Card>,
    player_total: u8,
    dealer_total: u8,
}

impl ConsoleDisplay {
    fn name(&self, seat: Seat) -> &str {
        match seat {
            Seat::Player => &self.player,
            Seat::Dealer => &self.dealer,
        }
    }

    fn show_hand(&self, seat: Seat, conceal: bool) {
        let (cards, total) = match seat {
            Seat::Player => (&self.player_cards, self.player_total),
            Seat::Dealer => (&self.dealer_cards, self.dealer_total),
        };

        println!();
        print_framed(&format!("{}'s cards are:", self.name(seat)));
        if conceal {
            if let Some(card) = cards.first() {
                println!("\t{}", format_card(card));
            }
            println!("\t???");
            println!("\tTOTAL => ??");
        } else {
            for card in cards {
                println!("\t{}", format_card(card));
            }
            println!("\tTOTAL => {total}");
        }
    }

    fn show_scores(&self, scores: Scores) {
        println!(
            "\n{}: {}   {}: {}",
            self.player, scores.player, self.dealer, scores.dealer
        );
    }

    fn show_outcome(&self, category: WinCategory, winner: Option<Seat>) {
        println!();
        match (category, winner) {
            (WinCategory::Bust, Some(seat)) => println!("{} busts.", self.name(seat.other())),
            (WinCategory::Target, Some(seat)) => println!("{} reached 21!", self.name(seat)),
            (WinCategory::Total, Some(seat)) => {
                println!("{} is the closest to 21.", self.name(seat));
            }
            _ => println!("Player and dealer hands are equal. Tie game."),
        }
        if let Some(seat) = winner {
            println!("{} wins!", self.name(seat));
        }
        self.show_hand(Seat::Player, false);
        self.show_hand(Seat::Dealer, false);
    }
}

impl EventSink for ConsoleDisplay {
    fn emit(&mut self, event: Event) {
        match event {
            Event::MatchStarted { player, dealer } => {
                println!("\nHi {player}! You'll be playing against {dealer}. Let's play!");
                self.player = player;
                self.dealer = dealer;
            }
            Event::RoundStarted { round, scores } => {
                if round > 1 {
                    // Hold the previous result on screen until the player is ready.
                    let _ = prompt_line("\nPress ENTER to continue.");
                }
                self.player_cards.clear();
                self.dealer_cards.clear();
                self.player_total = 0;
                self.dealer_total = 0;
                println!("\n=== Round {round} ===");
                self.show_scores(scores);
                println!("\nDealing cards...");
                pause(1000);
            }
            Event::CardDealt {
                seat,
                card,
                total,
                initial,
            } => {
                match seat {
                    Seat::Player => {
                        self.player_cards.push(card);
                        self.player_total = total;
                    }
                    Seat::Dealer => {
                        self.dealer_cards.push(card);
                        self.dealer_total = total;
                    }
                }
                let opening_done = initial && seat == Seat::Dealer && self.dealer_cards.len() == 2;
                if opening_done {
                    self.show_hand(Seat::Player, false);
                    self.show_hand(Seat::Dealer, true);
                } else if !initial && seat == Seat::Player {
                    self.show_hand(Seat::Player, false);
                }
            }
            Event::Decided { seat, decision, .. } => {
                if seat == Seat::Dealer {
                    println!("{} is thinking...", self.dealer);
                    pause(700);
                }
                let verb = match decision {
                    Decision::Hit => "hits",
                    Decision::Stay => "stays",
                };
                println!("{} {verb}.", self.name(seat));
            }
            Event::RoundOver(outcome) => {
                pause(500);
                self.show_outcome(outcome.category, outcome.winner);
            }
            Event::ScoreUpdated(scores) => self.show_scores(scores),
            Event::GrandChampion { name, wins, .. } => {
                pause(1000);
                println!();
                print_framed(&format!(
                    "{name} has reached {wins} wins!\n{name} is grand champion!"
                ));
            }
        }
    }
}

fn print_framed(message: &str) {
    let width = message.lines().map(str::len).max().unwrap_or(0) + PADDING * 2;
    let pad = " ".repeat(PADDING);
    println!("{}", "-".repeat(width));
    for line in message.lines() {
        println!("{pad}{line}{pad}");
    }
    println!("{}", "-".repeat(width));
}

fn format_card(card: &Card) -> String {
    let suit = match card.suit {
        Suit::Hearts => "Hearts",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
        Suit::Diamonds => "Diamonds",
    };

    let face = match card.face {
        Face::Joker => "Joker".to_string(),
        Face::Queen => "Queen".to_string(),
        Face::King => "King".to_string(),
        Face::Ace => "Ace".to_string(),
        numeric => numeric.pips().unwrap_or_default().to_string(),
    };

    format!("{face} of {suit}")
}
