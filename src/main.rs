//! Candy Sort entry point
//!
//! Native builds run a headless preview: load settings and progress from
//! JSON files, deal the current level and print it. Rendering and input
//! belong to the platform front ends.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Candy Sort (native) starting...");

    if let Err(err) = native::run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web front end drives the library directly
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;
    use std::path::PathBuf;

    use candy_sort::persistence::JsonFileStore;
    use candy_sort::progress::ACHIEVEMENTS;
    use candy_sort::{Session, Settings};

    const SETTINGS_ENV: &str = "CANDY_SORT_SETTINGS";
    const PROGRESS_ENV: &str = "CANDY_SORT_PROGRESS";

    fn path_from_env(var: &str, default: &str) -> PathBuf {
        std::env::var_os(var)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(default))
    }

    pub fn run() -> Result<(), Box<dyn Error>> {
        let settings = Settings::load_from(&path_from_env(SETTINGS_ENV, "candy_sort_settings.json"));
        let store = JsonFileStore::open(path_from_env(PROGRESS_ENV, "candy_sort_progress.json"))?;
        let session = Session::new(settings, store)?;

        let game = session.game();
        let tier = game.tier();
        println!(
            "Level {} ({}) - finish under {} moves for a perfect level",
            game.level,
            tier.difficulty.as_str(),
            tier.moves_budget
        );
        println!("Lives: {}/{}", game.lives, game.max_lives());
        for view in game.tube_views() {
            let candies: Vec<&str> = view.candies.iter().map(|c| c.as_str()).collect();
            println!("  tube {:>2}: [{}]", view.index, candies.join(", "));
        }

        let ledger = session.ledger();
        println!("\nAchievements:");
        for def in &ACHIEVEMENTS {
            let progress = ledger.progress_for(def.award);
            println!(
                "  {} {:<13} {:>3}/{:<3} {}",
                if progress.unlocked { "★" } else { "·" },
                def.name,
                progress.current,
                progress.needed,
                def.reward_items.join(" ")
            );
        }
        Ok(())
    }
}
