//! Turn-based No-Limit Hold-Em hand orchestration.
//!
//! The [room::Room] walks a hand from blinds to showdown against a pluggable
//! [engine::TableEngine], soliciting one asynchronous decision per turn from the
//! seated [room::Player]s, publishing a deterministic stream of lifecycle
//! [room::Event]s, and reducing settled hands into per-player big-blind profit
//! ledgers. The betting engine itself (stacks, pots, legal actions, hand
//! ranking) is an injected capability, not implemented here.

pub mod cards;
pub mod engine;
pub mod players;
pub mod room;

/// Stack sizes, bets, and pot amounts in chips.
pub type Chips = i32;
/// Seat index around the table.
pub type Position = usize;

/// Route a run's diagnostics through the `log` facade: INFO to the terminal,
/// DEBUG and up to `floorman.log` under `dir`, so downgrade warnings and
/// engine rejections leave an audit trail next to the run's ledgers.
/// Call once per process, before the first hand.
pub fn log(dir: &std::path::Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(dir.join("floorman.log"))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
