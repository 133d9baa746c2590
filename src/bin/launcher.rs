use std::io::{self, BufRead, Write};
use std::process::Command;

// Starts the API server and the frontend dev server side by side. Neither
// child is monitored or restarted; closing this program leaves them running.
fn main() -> io::Result<()> {
    println!("Starting backend server...");
    Command::new("cargo")
        .args(["run", "--bin", "Chat-Bot"])
        .spawn()?;

    println!("Starting frontend...");
    if let Err(e) = Command::new("npm").arg("start").current_dir("frontend").spawn() {
        eprintln!("Warning: could not start the frontend: {}", e);
    }

    print!("Нажмите Enter для выхода...\n");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
