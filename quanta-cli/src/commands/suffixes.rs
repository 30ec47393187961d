//! Suffixes command implementation

use quanta_core::{Multiplier, Suffix};

pub fn execute() {
    println!("\n📏 Recognized suffixes");
    println!("{:-<40}", "");
    println!("{:<10}{:<12}{}", "Suffix", "Multiplier", "Kind");

    for suffix in Suffix::ALL {
        let kind = match suffix.multiplier() {
            Multiplier::Decimal(_) => "decimal",
            Multiplier::Binary(_) => "binary",
        };
        println!("{:<10}{:<12}{}", suffix.symbol(), suffix.multiplier(), kind);
    }

    println!("{:<10}{:<12}{}", "eN / EN", "10^N", "exponent");
    println!("{:-<40}", "");
}
