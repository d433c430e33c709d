//! Console primitives shared by every screen.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};

use crate::error::Result;

/// Wipe the screen and park the cursor at the top left.
pub fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

/// Fixed cosmetic delay, used between mixed questions and after bad menu
/// input.
pub fn pause() {
    thread::sleep(Duration::from_secs(1));
}

/// Sparkle-framed title card shown atop the menu and each session.
pub fn title_banner() {
    println!("{}", "✨".repeat(20));
    println!("{}", "    WORD MASTER - English vocabulary trainer".cyan().bold());
    println!("{}", "✨".repeat(20));
}

/// A `=`-ruled section header.
pub fn section(title: &str) {
    println!("\n{}", "=".repeat(50));
    println!("{}", title.bold());
    println!("{}", "=".repeat(50));
}

/// Prompt on the same line and read one trimmed line from stdin.
/// A closed stdin is an error; re-prompting would loop forever.
pub fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }
    Ok(line.trim().to_string())
}

/// Keep prompting until the user types an integer between 1 and `max`.
pub fn read_index(prompt: &str, max: usize) -> Result<usize> {
    loop {
        match read_line(prompt)?.parse::<usize>() {
            Ok(choice) if (1..=max).contains(&choice) => return Ok(choice),
            Ok(_) => println!("Invalid choice. Try again."),
            Err(_) => println!("Please enter a number."),
        }
    }
}

/// Block until the user presses Enter.
pub fn wait_enter(prompt: &str) -> Result<()> {
    read_line(prompt)?;
    Ok(())
}
