use anyhow::Result;
use inquire::{Confirm, Text};

/// Ask for the comma separated domain list.
pub fn ask_domains() -> Result<String> {
    let input = Text::new("Enter domain(s) to scan, separated by commas:")
        .with_placeholder("example.com, example.org")
        .prompt()?;
    Ok(input)
}

/// Ask whether a wordlist should be used and, if so, for its path or URL.
pub fn ask_wordlist() -> Result<Option<String>> {
    let wanted = Confirm::new("Do you have a wordlist?")
        .with_default(false)
        .prompt()?;
    if !wanted {
        return Ok(None);
    }
    let input = Text::new("Please enter the local path or URL of your wordlist:").prompt()?;
    Ok(Some(input))
}
