use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin.
/// Returns None on EOF, i.e. when no terminal is attached anymore.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim().to_string()),
        Err(_) => None,
    }
}
