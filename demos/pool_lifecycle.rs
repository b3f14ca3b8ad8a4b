//! Pool lifecycle walkthrough (`x · y = k`).
//!
//! Demonstrates bootstrapping a pool, quoting and executing swaps with a
//! slippage bound, growing the pool at the live ratio, and redeeming
//! shares.
//!
//! # Run
//!
//! ```bash
//! cargo run --example pool_lifecycle
//! ```

use xyk_pool::config::{BootstrapShares, PoolConfig};
use xyk_pool::domain::{Amount, Asset, BasisPoints, FeeRate, ProviderId, SwapDirection};
use xyk_pool::ledger::InMemoryLedger;
use xyk_pool::Pool;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Constant Product Pool (x · y = k) ===\n");

    // ── 1. Fund two providers and a trader on the ledger ────────────────
    let mut ledger = InMemoryLedger::new();
    let alice = ProviderId::from_bytes([1u8; 32]);
    let bob = ProviderId::from_bytes([2u8; 32]);
    let trader = ProviderId::from_bytes([3u8; 32]);

    for who in [&alice, &bob, &trader] {
        ledger.mint(Asset::A, who, Amount::new(1_000_000))?;
        ledger.mint(Asset::B, who, Amount::new(1_000_000))?;
    }
    println!("Providers: {alice}, {bob}; trader: {trader}");

    // ── 2. Create a pool with a 0.30% fee ───────────────────────────────
    let fee = FeeRate::new(BasisPoints::new(30))?;
    let config = PoolConfig::new(fee, BootstrapShares::AssetA)?;
    let mut pool = Pool::new(config)?;
    println!("\nPool created: fee {} bps, empty", fee.basis_points());

    // ── 3. Bootstrap: the first deposit fixes the price ─────────────────
    let minted = pool.add_liquidity(&mut ledger, &alice, Amount::new(500_000), Amount::new(250_000))?;
    println!("\n--- Bootstrap ---");
    println!("  Deposited:   500 000 A + 250 000 B");
    println!("  Shares:      {minted}");
    println!("  Spot price:  {} A per B", pool.spot_price(Asset::B)?);

    // ── 4. Second provider joins at the live ratio ──────────────────────
    let joined = pool.add_liquidity(&mut ledger, &bob, Amount::new(120_000), Amount::new(50_000))?;
    println!("\n--- Join ---");
    println!("  Asked for:   50 000 B (authorizing up to 120 000 A)");
    println!("  Shares:      {joined}");
    println!(
        "  Reserves:    {} A / {} B",
        pool.reserve(Asset::A),
        pool.reserve(Asset::B)
    );

    // ── 5. Quote, then swap with the quote as the slippage bound ────────
    let input = Amount::new(10_000);
    let quote = pool.quote_output(input, SwapDirection::AToB)?;
    let outcome = pool.swap(&mut ledger, &trader, input, quote, SwapDirection::AToB)?;
    println!("\n--- Swap: sell {input} A ---");
    println!("  Quoted:      {quote}");
    println!("  Amount out:  {}", outcome.amount_out());
    println!("  Fee paid:    {}", outcome.fee());
    println!("  Eff. price:  {} B per A", outcome.effective_price()?);
    println!("  Spot price:  {} B per A", pool.spot_price(Asset::A)?);

    // ── 6. Redeem half of alice's shares ────────────────────────────────
    let half = xyk_pool::domain::Shares::new(minted.get() / 2);
    let redemption = pool.remove_liquidity(&mut ledger, &alice, half)?;
    println!("\n--- Redeem {half} shares ---");
    println!(
        "  Returned:    {} A + {} B",
        redemption.amount_a(),
        redemption.amount_b()
    );
    println!(
        "  Reserves:    {} A / {} B, {} shares outstanding",
        pool.reserve(Asset::A),
        pool.reserve(Asset::B),
        pool.total_shares()
    );

    Ok(())
}
