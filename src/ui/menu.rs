//! The top-level menu loop.

use super::console;
use super::screens;
use super::session;
use super::state::App;
use crate::error::Result;

/// Show the main menu until the user chooses to quit.
pub fn run(app: &mut App) -> Result<()> {
    let mut rng = rand::thread_rng();
    loop {
        console::clear_screen()?;
        console::title_banner();
        println!("\nMAIN MENU:");
        println!("1. Start a game");
        println!("2. Browse the dictionary");
        println!("3. Add a new word");
        println!("4. Show statistics");
        println!("5. Leaderboard");
        println!("6. Quit");

        match console::read_line("\nChoose an action (1-6): ")?.as_str() {
            "1" => session::play(app, &mut rng)?,
            "2" => screens::show_dictionary(app)?,
            "3" => screens::add_word(app)?,
            "4" => screens::show_stats(app)?,
            "5" => screens::show_leaderboard(app)?,
            "6" => {
                println!("\nThanks for playing! See you soon! 👋");
                println!("Your words are saved in {}", app.data_dir.display());
                break;
            }
            _ => {
                println!("Invalid choice. Try again.");
                console::pause();
            }
        }
    }
    Ok(())
}
