#![cfg(feature = "std")]

use crate::{
    agent::TargetingAgent,
    board::TargetBoard,
    config::BOARD_SIZE,
    heatmap::{Heat, HuntOrder},
    square::Square,
};

/// Print the heat value of every square. Hunt squares are bracketed.
pub fn print_heatmap(heat: &Heat) {
    std::println!("\nPlacement heatmap:");
    std::print!("   ");
    for c in 0..BOARD_SIZE as usize {
        std::print!(" {:>5}", c);
    }
    std::println!();
    for r in 0..BOARD_SIZE as usize {
        std::print!("{:2} ", r);
        for c in 0..BOARD_SIZE as usize {
            let sq = Square::from_row_col(r, c).map(|s| (s.index(), s.is_hunt_color()));
            match sq {
                Ok((idx, true)) => std::print!(" [{:>3}]", heat[idx]),
                Ok((idx, false)) => std::print!("  {:>3} ", heat[idx]),
                Err(_) => std::print!("   ?  "),
            }
        }
        std::println!();
    }
}

/// Print the hunt order, hottest first, as 1-based square numbers.
pub fn print_hunt_order(order: &HuntOrder) {
    let squares: Vec<String> = order
        .squares()
        .iter()
        .rev()
        .map(|sq| format!("{}({})", sq, order.heat(*sq)))
        .collect();
    std::println!("\nHunt order, hottest first:\n{}", squares.join(" "));
}

/// Print the shots taken so far: `X` hit, `o` miss, `?` queued candidate.
pub fn print_target_view(board: &TargetBoard, agent: &TargetingAgent) {
    std::print!("   ");
    for c in 0..BOARD_SIZE as usize {
        std::print!(" {}", c);
    }
    std::println!();
    for r in 0..BOARD_SIZE as usize {
        std::print!("{:2} ", r);
        for c in 0..BOARD_SIZE as usize {
            let ch = match Square::from_row_col(r, c) {
                Ok(sq) if board.guessed(sq) && board.ship_map().contains(sq) => 'X',
                Ok(sq) if board.guessed(sq) => 'o',
                Ok(sq) if agent.target_queue().contains(&sq) => '?',
                _ => '.',
            };
            std::print!(" {}", ch);
        }
        std::println!();
    }
    std::println!(
        "mode: {}  queued: {}  hunt squares left: {}",
        agent.mode(),
        agent.target_queue().len(),
        agent.hunt_remaining()
    );
}
