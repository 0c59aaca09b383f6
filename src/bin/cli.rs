//! Esscher Options CLI
//!
//! Command-line demonstration of the tilted-distribution pricing core.

use esscher_options::prelude::*;
use esscher_options::pricing::black;

fn main() {
    println!("Esscher Option Valuation");
    println!("========================\n");

    let forward = 100.0;
    let tilt = 0.20; // total volatility over the horizon

    println!("Forward: ${:.2}", forward);
    println!("Tilt:    {:.1}% (total vol)\n", tilt * 100.0);

    let normal = NormalModel::new();
    let two_point = TwoPointModel;

    println!(
        "{:>8} {:>12} {:>12} {:>12} {:>14}",
        "Strike", "Moneyness", "Put", "Call", "Put (2-point)"
    );
    for k in (80..=120).step_by(10) {
        let k = k as f64;
        let x = black::moneyness(forward, tilt, k, &normal);
        let p = black::put(forward, tilt, k, &normal);
        let c = black::call(forward, tilt, k, &normal);
        let p2 = black::put(forward, tilt, k, &two_point);
        println!(
            "{:>8.2} {:>12.4} {:>12.4} {:>12.4} {:>14.4}",
            k, x, p, c, p2
        );
    }

    // Put-call parity: call - put = f - k, independent of the model
    let k = 110.0;
    let parity = black::call(forward, tilt, k, &normal) - black::put(forward, tilt, k, &normal);
    println!("\nPut-Call Parity Check (k = {:.0}):", k);
    println!("  call - put = {:.6}", parity);
    println!("  f - k      = {:.6}", forward - k);

    // Invalid domains surface as NaN, not errors
    let bad = black::put(forward, 0.0, k, &normal);
    println!("\nZero tilt is out of domain: put = {}", bad);

    // Recover the tilt from a put price
    println!("\nImplied Tilt Solver:");
    let target = black::put(forward, tilt, k, &normal);
    match implied_tilt(target, forward, k, &normal) {
        Ok(s) => println!(
            "  Put ${:.4} implies tilt {:.2}% (expected {:.2}%)",
            target,
            s * 100.0,
            tilt * 100.0
        ),
        Err(e) => println!("  Solve failed: {}", e),
    }

    // Contract-level view: annualized vol mapped to the horizon tilt
    let asof = chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let expiry = chrono::NaiveDate::from_ymd_opt(2026, 9, 2).unwrap();
    let contract = OptionContract::european("NQ", 105.0, expiry, OptionType::Put);
    let s = contract.tilt(0.20, asof);
    let value = black_price(
        forward,
        s,
        contract.strike,
        contract.option_type,
        &normal,
    );
    println!("\nContract Pricing:");
    println!(
        "  {} {:?} k={:.0} expiring {}: tilt {:.4}, value ${:.4}",
        contract.underlying, contract.option_type, contract.strike, contract.expiry, s, value
    );
}
