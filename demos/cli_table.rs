//! CLI table example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use housejack::{
    Card, DealerView, OfflineWallet, RoundView, Side, SideView, Suit, Table, TableOptions,
    TableView, WalletBridge,
};

fn main() {
    println!("House blackjack table (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(TableOptions::default(), seed);

    // Seed liquidity so the house has something to pay out of.
    for (name, amount) in [("alice", 500), ("bob", 800), ("carol", 1200), ("frank", 700)] {
        table.deposit(name, amount);
    }

    let mut wallet = OfflineWallet::new().with_balance(1_000_000);
    if let Ok(address) = wallet.connect() {
        println!("Wallet connected: {address}");
    }

    loop {
        print_pool(&table);

        let chips = table.chips();
        if chips < table.options.min_bet {
            println!("You are out of chips. Game over.");
            break;
        }

        let Some(bet) = prompt_amount(&format!(
            "Bet amount ({}-{chips}, 0 to quit): ",
            table.options.min_bet
        )) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        table.bet(bet);
        if !table.can_deal() {
            println!("Bet rejected.");
            continue;
        }

        match table.deal_funded(&mut wallet) {
            Ok(true) => {}
            Ok(false) => {
                println!("Wallet declined the wager; continuing in free play.");
                table.deal();
            }
            Err(err) => {
                println!("Wallet error: {err}; continuing in free play.");
                table.deal();
            }
        }

        while round_is_live(&table) {
            let view = table.snapshot();
            print_table(&view);

            match view.round {
                RoundView::Player { .. } => {
                    println!("{}", format_single_actions(&table));
                    match prompt_line("Action: ").as_str() {
                        "h" | "hit" => table.hit(None),
                        "s" | "stand" => table.stand(None),
                        "d" | "double" => table.double_down(),
                        "q" | "quit" => return,
                        _ => println!("Unknown action."),
                    }
                }
                RoundView::Split { .. } => {
                    println!("{}", format_split_actions(&table));
                    match prompt_line("Action: ").as_str() {
                        "hl" => table.hit(Some(Side::Left)),
                        "hr" => table.hit(Some(Side::Right)),
                        "sl" => table.stand(Some(Side::Left)),
                        "sr" => table.stand(Some(Side::Right)),
                        "q" | "quit" => return,
                        _ => println!("Unknown action."),
                    }
                }
                _ => break,
            }
        }

        print_table(&table.snapshot());
        if let Some(result) = table.last_result() {
            for hand in &result.hands {
                let label = match hand.side {
                    Some(Side::Left) => "Left hand",
                    Some(Side::Right) => "Right hand",
                    None => "Hand",
                };
                println!(
                    "{label}: {:?} | total {} | stake {} | payout {}",
                    hand.outcome, hand.player_total, hand.stake, hand.payout
                );
            }
            println!("Round complete. Net {:+}.", result.net());
        }

        table.quit();
    }
}

fn round_is_live(table: &Table) -> bool {
    table.can_hit(None) || table.can_hit(Some(Side::Left)) || table.can_hit(Some(Side::Right))
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

fn prompt_amount(prompt: &str) -> Option<u64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_pool(table: &Table) {
    let pool = table.pool();
    let flag = if pool.is_overdrawn() { " (overdrawn)" } else { "" };
    println!(
        "\nHouse pool: {} chips{flag} | unit price {:.2} | {} deposits",
        pool.total(),
        pool.unit_price(),
        pool.depositors().len()
    );
    for depositor in pool.top(3) {
        println!("  {} staked {}", depositor.name, depositor.staked);
    }
}

fn print_table(view: &TableView) {
    println!("\nChips: {} | staked {}", view.chips, view.table_stake);

    match &view.round {
        RoundView::Idle => println!("No round open."),
        RoundView::Bet { stake } => println!("Bet of {stake} placed, waiting for the deal."),
        RoundView::Player { hand, dealer, .. } => {
            println!(
                "Dealer: {} (value {})",
                format_dealer(dealer),
                dealer.visible_total
            );
            println!("You:    {} (value {})", format_cards(&hand.cards), hand.total);
        }
        RoundView::Split {
            left,
            right,
            dealer,
        } => {
            println!(
                "Dealer: {} (value {})",
                format_dealer(dealer),
                dealer.visible_total
            );
            print_side("Left ", left);
            print_side("Right", right);
        }
        RoundView::Over { result, dealer } => {
            println!(
                "Dealer: {} (value {})",
                format_dealer(dealer),
                result.dealer_total
            );
        }
    }
}

fn print_side(label: &str, side: &SideView) {
    let status = side
        .outcome
        .map_or_else(|| "live".to_string(), |outcome| format!("{outcome:?}"));
    println!(
        "{label}: {} (value {}) [{status}]",
        format_cards(&side.hand.cards),
        side.hand.total
    );
}

fn format_single_actions(table: &Table) -> String {
    let parts = [
        format_action("hit", "h", table.can_hit(None)),
        format_action("stand", "s", table.can_stand(None)),
        format_action("double", "d", table.can_double()),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_split_actions(table: &Table) -> String {
    let parts = [
        format_action("hit-left", "hl", table.can_hit(Some(Side::Left))),
        format_action("stand-left", "sl", table.can_stand(Some(Side::Left))),
        format_action("hit-right", "hr", table.can_hit(Some(Side::Right))),
        format_action("stand-right", "sr", table.can_stand(Some(Side::Right))),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerView) -> String {
    if dealer.cards.is_empty() {
        return "(no cards)".to_string();
    }

    let mut parts: Vec<String> = dealer.cards.iter().map(format_card).collect();
    if dealer.hole_hidden {
        parts.push("??".to_string());
    }
    parts.join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), code)
}
